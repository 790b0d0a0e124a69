//! URL path normalization.

/// Normalize slash usage in a URL path: collapse repeated slashes, then
/// enforce the requested leading/trailing slash shape. An empty input
/// normalizes to `"/"`.
pub fn normalize_url_path(url: &str, leading_slash: bool, trailing_slash: bool) -> String {
    if url.is_empty() {
        return "/".to_string();
    }

    let mut url = url.to_string();
    while url.contains("//") {
        url = url.replace("//", "/");
    }

    if leading_slash && !url.starts_with('/') {
        url.insert(0, '/');
    } else if !leading_slash && url.starts_with('/') {
        url = url.trim_start_matches('/').to_string();
    }

    if trailing_slash && !url.ends_with('/') {
        url.push('/');
    } else if !trailing_slash && url.ends_with('/') {
        url = url.trim_end_matches('/').to_string();
    }

    url
}
