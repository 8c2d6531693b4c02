//! Line-oriented input helpers.

use ridge_core::{Coord3, GridError};

/// Lines of `text` with their 1-based line numbers.
///
/// A trailing `\r` is stripped so CRLF input parses like LF input.
pub fn numbered_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.strip_suffix('\r').unwrap_or(line)))
}

/// Like [`numbered_lines`], skipping lines that are empty or whitespace.
pub fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    numbered_lines(text).filter(|(_, line)| !line.trim().is_empty())
}

/// Parse a comma-separated `x,y,z` triple found at `line`.
///
/// Whitespace around each component is ignored. Anything other than
/// exactly three integers is [`GridError::Malformed`].
pub fn parse_triple(line: usize, text: &str) -> Result<Coord3, GridError> {
    let mut parts = text.split(',').map(str::trim);
    let mut component = |axis: &str| -> Result<i32, GridError> {
        let token = parts
            .next()
            .ok_or_else(|| GridError::malformed_at(line, format!("missing {axis} component")))?;
        token.parse::<i32>().map_err(|e| {
            GridError::malformed_at(line, format!("bad {axis} component {token:?}: {e}"))
        })
    };
    let x = component("x")?;
    let y = component("y")?;
    let z = component("z")?;
    if let Some(extra) = parts.next() {
        return Err(GridError::malformed_at(
            line,
            format!("unexpected trailing component {extra:?}"),
        ));
    }
    Ok(Coord3::new(x, y, z))
}
