//! Filename cleanup for plot files.
//!
//! Plot names are assembled from codes the plot service passes through
//! uninterpreted, so any of them may carry path separators or whitespace.

/// Linux NAME_MAX, in bytes.
pub const NAME_MAX: usize = 255;

/// Maps a candidate name onto characters safe for a single path component.
///
/// Separators (`/`, `\`), whitespace and control characters become `_`, runs
/// of `_` collapse to one, and leading/trailing dots and underscores are
/// trimmed so a code like `..` cannot name a parent directory. Length is left
/// to [`truncate_bytes`], since the caller knows what suffixes follow.
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        let c = if c == '/' || c == '\\' || c.is_control() || c.is_whitespace() {
            '_'
        } else {
            c
        };
        if c == '_' && out.ends_with('_') {
            continue;
        }
        out.push(c);
    }
    out.trim_matches(|c| c == '.' || c == '_').to_string()
}

/// Longest prefix of `s` that fits in `max` bytes without splitting a char.
pub fn truncate_bytes(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut take = max;
    while !s.is_char_boundary(take) {
        take -= 1;
    }
    &s[..take]
}
