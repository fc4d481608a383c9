use url::Url;

const ELLIPSIS: &str = "...";

/// Shorten a URL to at most `max_length` characters for display.
///
/// The scheme is dropped first; if host and path still don't fit, the middle of the
/// path is elided and its tail kept. Strings that don't parse as URLs are cut at the
/// end.
#[must_use]
pub fn format_url(url: &str, max_length: usize) -> String {
    if url.chars().count() <= max_length {
        return url.to_string();
    }

    let Ok(parsed) = Url::parse(url) else {
        return truncate_end(url, max_length);
    };

    let host = parsed.host_str().unwrap_or_default();
    let mut path = parsed.path().to_string();
    if let Some(query) = parsed.query().filter(|q| !q.is_empty()) {
        path.push('?');
        path.push_str(query);
    }

    let host_len = host.chars().count();
    let path_len = path.chars().count();

    if host_len + path_len <= max_length {
        return format!("{host}{path}");
    }

    let keep = max_length.saturating_sub(host_len).saturating_sub(ELLIPSIS.len() * 2);
    let tail: String = path.chars().skip(path_len.saturating_sub(keep)).collect();
    format!("{host}{ELLIPSIS}{tail}")
}

fn truncate_end(text: &str, max_length: usize) -> String {
    let head: String = text.chars().take(max_length.saturating_sub(ELLIPSIS.len())).collect();
    format!("{head}{ELLIPSIS}")
}
