/// Value at rank `floor(p * (n - 1))` of an ascending slice.
///
/// Returns `None` for an empty slice.
pub fn order_statistic(sorted: &[u64], p: f64) -> Option<u64> {
    let last = sorted.len().checked_sub(1)?;
    let index = (p * last as f64).floor() as usize;
    sorted.get(index.min(last)).copied()
}
