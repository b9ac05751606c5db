//! HTML escaping applied to every character before it is appended to a block.

/// Returns the entity replacing `c`, or `None` when `c` passes through unchanged.
pub fn entity(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#039;"),
        _ => None,
    }
}

/// Appends `c` to `out`, substituting its entity if it has one.
pub fn push_escaped(out: &mut String, c: char) {
    match entity(c) {
        Some(e) => out.push_str(e),
        None => out.push(c),
    }
}
