//! Prefix-based label extraction.

/// Returns the value of every label of the form `{prefix}:{value}`.
///
/// Labels are trimmed before matching; the value itself is returned as it
/// appears after the first `prefix:` separator. An empty prefix matches
/// nothing. Order and duplicates are preserved.
pub fn extract_labels_with_prefix<S: AsRef<str>>(labels: &[S], prefix: &str) -> Vec<String> {
    if prefix.is_empty() {
        return Vec::new();
    }

    labels
        .iter()
        .filter_map(|label| strip_label_prefix(label.as_ref().trim(), prefix))
        .map(str::to_string)
        .collect()
}

/// Returns the first value carrying `prefix`, if any.
pub fn first_label_with_prefix<S: AsRef<str>>(labels: &[S], prefix: &str) -> Option<String> {
    if prefix.is_empty() {
        return None;
    }

    labels
        .iter()
        .find_map(|label| strip_label_prefix(label.as_ref().trim(), prefix))
        .map(str::to_string)
}

fn strip_label_prefix<'a>(label: &'a str, prefix: &str) -> Option<&'a str> {
    label.strip_prefix(prefix)?.strip_prefix(':')
}
