//! Tracker browse links.

/// Host used when no usable tracker host is configured.
pub const PLACEHOLDER_TRACKER_HOST: &str = "https://jira.example.com";

/// Normalizes the configured tracker host into a browse base URL.
///
/// Trailing slashes and a trailing `/rest` API suffix are removed. A missing
/// host, or one that is not an http(s) URL, yields the placeholder host.
pub fn tracker_base_url(host: Option<&str>) -> String {
    let Some(host) = host.map(str::trim) else {
        return PLACEHOLDER_TRACKER_HOST.to_string();
    };

    let is_http = host.starts_with("https://") || host.starts_with("http://");
    if !is_http {
        return PLACEHOLDER_TRACKER_HOST.to_string();
    }

    let host = host.trim_end_matches('/');
    let host = host.strip_suffix("/rest").unwrap_or(host);
    let host = host.trim_end_matches('/');

    if host.ends_with(':') {
        return PLACEHOLDER_TRACKER_HOST.to_string();
    }
    host.to_string()
}

/// Builds the browse link for a ticket.
pub fn browse_url(base: &str, ticket_id: &str) -> String {
    format!("{}/browse/{}", base, ticket_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_rest_suffix() {
        assert_eq!(
            tracker_base_url(Some("https://tracker.example.com/rest")),
            "https://tracker.example.com"
        );
        assert_eq!(
            tracker_base_url(Some("https://tracker.example.com/rest/")),
            "https://tracker.example.com"
        );
    }

    #[test]
    fn keeps_plain_host() {
        assert_eq!(
            tracker_base_url(Some("http://localhost:8080/")),
            "http://localhost:8080"
        );
        assert_eq!(
            tracker_base_url(Some("https://tracker.example.com/restore")),
            "https://tracker.example.com/restore"
        );
    }

    #[test]
    fn falls_back_for_missing_or_invalid_host() {
        assert_eq!(tracker_base_url(None), PLACEHOLDER_TRACKER_HOST);
        assert_eq!(tracker_base_url(Some("")), PLACEHOLDER_TRACKER_HOST);
        assert_eq!(tracker_base_url(Some("tracker.example.com")), PLACEHOLDER_TRACKER_HOST);
        assert_eq!(tracker_base_url(Some("https://")), PLACEHOLDER_TRACKER_HOST);
        assert_eq!(tracker_base_url(Some("https:///rest")), PLACEHOLDER_TRACKER_HOST);
    }

    #[test]
    fn builds_browse_url() {
        assert_eq!(
            browse_url("https://tracker.example.com", "REL-1"),
            "https://tracker.example.com/browse/REL-1"
        );
    }
}
