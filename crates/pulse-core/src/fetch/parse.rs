//! Pick the final response's Content-Type out of collected header lines.

/// Returns the media type (lowercased, parameters stripped) of the last
/// response in `lines`. Redirect hops each start with a status line, so only
/// headers after the last one count.
pub(crate) fn content_type(lines: &[String]) -> Option<String> {
    let mut found = None;
    for line in lines {
        let line = line.trim();
        if line.starts_with("HTTP/") {
            found = None;
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-type") {
                let media = value.split(';').next().unwrap_or("").trim();
                if !media.is_empty() {
                    found = Some(media.to_ascii_lowercase());
                }
            }
        }
    }
    found
}

pub(crate) fn is_image(content_type: &str) -> bool {
    content_type.starts_with("image/")
}
