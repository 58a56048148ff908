use regex::Regex;

fn scheme_pattern() -> &'static Regex {
    use std::sync::OnceLock;

    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z]+://").expect("invalid scheme regex"))
}

/// Determine whether a `url()` value must be left exactly as written.
///
/// Root-absolute paths, data URIs, fragment references and scheme-qualified URLs never point at
/// a file next to the stylesheet, so they are neither read nor copied. The scheme test only
/// accepts lowercase letters, mirroring how references are usually authored.
pub fn is_pass_through(value: &str) -> bool {
    value.starts_with('/')
        || value.starts_with("data:")
        || value.starts_with('#')
        || scheme_pattern().is_match(value)
}
