use crate::source::SourceError;
use std::io::BufRead;

/// Feeds every line of `reader` to `on_line` and returns how many there were.
///
/// Line endings (`\n` or `\r\n`) are stripped. Bytes that are not UTF-8 are
/// replaced rather than aborting the source, so such lines simply fail to
/// parse later on.
pub fn read_lines<R: BufRead>(
    mut reader: R,
    name: &str,
    mut on_line: impl FnMut(&str),
) -> Result<u64, SourceError> {
    let mut buf = Vec::new();
    let mut count = 0;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| SourceError::Read {
                name: name.to_string(),
                source: e,
            })?;
        if read == 0 {
            break;
        }

        let mut line = buf.as_slice();
        if let Some(rest) = line.strip_suffix(b"\n") {
            line = rest;
        }
        if let Some(rest) = line.strip_suffix(b"\r") {
            line = rest;
        }

        on_line(&String::from_utf8_lossy(line));
        count += 1;
    }

    Ok(count)
}
