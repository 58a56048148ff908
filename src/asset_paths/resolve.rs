use std::path::{Component, Path, PathBuf};

/// Lexically resolve `.` and `..` segments without touching the filesystem.
///
/// Leading `..` segments of relative paths are kept, while `..` directly below the root is
/// dropped. An empty relative result is rendered as `.`.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    let mut absolute = false;
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => normalized.push(prefix.as_os_str()),
            Component::RootDir => {
                normalized.push(component.as_os_str());
                absolute = true;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    normalized.pop();
                    depth -= 1;
                } else if !absolute {
                    normalized.push("..");
                }
            }
            Component::Normal(part) => {
                normalized.push(part);
                depth += 1;
            }
        }
    }

    if normalized.as_os_str().is_empty() {
        normalized.push(".");
    }
    normalized
}

/// Resolve `path` against `base`, returning a normalised absolute path when `base` is absolute.
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize_lexically(path)
    } else {
        normalize_lexically(&base.join(path))
    }
}

/// Compute the relative path leading from the directory `from` to `to`.
///
/// Both paths are expected to be absolute and normalised. Identical paths yield an empty path.
pub fn relative_path(from: &Path, to: &Path) -> PathBuf {
    let from_parts: Vec<Component> = from.components().collect();
    let to_parts: Vec<Component> = to.components().collect();

    let shared = from_parts
        .iter()
        .zip(&to_parts)
        .take_while(|(left, right)| left == right)
        .count();

    let mut relative = PathBuf::new();
    for _ in shared..from_parts.len() {
        relative.push("..");
    }
    for part in &to_parts[shared..] {
        relative.push(part.as_os_str());
    }
    relative
}

/// Split a reference into its on-disk path and the query or fragment suffix following it.
///
/// `font.eot?#iefix` becomes `("font.eot", "?#iefix")`, so the file can be read from disk while
/// the suffix is kept for the rewritten reference.
pub fn split_query_and_fragment(value: &str) -> (&str, &str) {
    match value.find(['?', '#']) {
        Some(index) => value.split_at(index),
        None => (value, ""),
    }
}

/// Render a relative directory and file name as a `url()` reference.
///
/// The generated reference always uses forward slashes so that stylesheets produced on every
/// platform point at the same location.
pub fn make_url_reference(relative_dir: &Path, file_name: &str) -> String {
    normalize_lexically(&relative_dir.join(file_name))
        .to_string_lossy()
        .replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized(path: &str) -> PathBuf {
        normalize_lexically(Path::new(path))
    }

    #[test]
    fn normalizes_current_and_parent_segments() {
        assert_eq!(
            normalized("/proj/dist/./assets/../img"),
            PathBuf::from("/proj/dist/img")
        );
        assert_eq!(normalized("./assets/"), PathBuf::from("assets"));
        assert_eq!(normalized("./"), PathBuf::from("."));
    }

    #[test]
    fn keeps_leading_parent_segments_of_relative_paths() {
        assert_eq!(
            normalized("../../shared/./img"),
            PathBuf::from("../../shared/img")
        );
        assert_eq!(normalized("a/../../b"), PathBuf::from("../b"));
    }

    #[test]
    fn clamps_parent_segments_at_the_root() {
        assert_eq!(normalized("/../etc"), PathBuf::from("/etc"));
    }

    #[test]
    fn resolves_relative_paths_against_base() {
        assert_eq!(
            resolve_against(Path::new("/proj/dist"), Path::new("assets")),
            PathBuf::from("/proj/dist/assets")
        );
        assert_eq!(
            resolve_against(Path::new("/proj/dist"), Path::new("/static/assets")),
            PathBuf::from("/static/assets")
        );
    }

    #[test]
    fn computes_relative_paths_between_directories() {
        assert_eq!(
            relative_path(Path::new("/proj/dist"), Path::new("/proj/dist/assets")),
            PathBuf::from("assets")
        );
        assert_eq!(
            relative_path(Path::new("/proj/dist/css"), Path::new("/proj/static/img")),
            PathBuf::from("../../static/img")
        );
        assert_eq!(
            relative_path(Path::new("/proj/dist"), Path::new("/proj/dist")),
            PathBuf::new()
        );
    }

    #[test]
    fn splits_query_and_fragment_suffixes() {
        assert_eq!(
            split_query_and_fragment("font.eot?#iefix"),
            ("font.eot", "?#iefix")
        );
        assert_eq!(
            split_query_and_fragment("icons.svg#home"),
            ("icons.svg", "#home")
        );
        assert_eq!(split_query_and_fragment("logo.png"), ("logo.png", ""));
    }

    #[test]
    fn renders_url_references_with_forward_slashes() {
        assert_eq!(
            make_url_reference(Path::new("./assets/"), "logo.png"),
            "assets/logo.png"
        );
        assert_eq!(make_url_reference(Path::new(""), "logo.png"), "logo.png");
        assert_eq!(
            make_url_reference(Path::new("../static/img"), "logo.png"),
            "../static/img/logo.png"
        );
    }
}
