use crate::parse::FilterField;

pub fn field_names() -> Vec<&'static str> {
    FilterField::ALL.iter().map(FilterField::as_str).collect()
}

pub fn run() -> anyhow::Result<()> {
    for name in field_names() {
        println!("{name}");
    }
    Ok(())
}
