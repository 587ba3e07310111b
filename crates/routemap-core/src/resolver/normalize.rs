//! Pure request-path normalizers used to derive lookup candidates.

/// Home-page shorthand: `"."` means `"/"`. Anything else is returned as-is.
pub fn expand_dot(path: &str) -> &str {
    if path == "." {
        "/"
    } else {
        path
    }
}

/// Strips every leading `/`, stopping once only the root path `"/"` remains.
pub fn relative(path: &str) -> &str {
    let mut rest = path;
    while rest != "/" {
        match rest.strip_prefix('/') {
            Some(stripped) => rest = stripped,
            None => break,
        }
    }
    rest
}

/// Prepends exactly one `/`, even when the path already starts with one.
pub fn root_relative(path: &str) -> String {
    format!("/{path}")
}
