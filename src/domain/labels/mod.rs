//! Label extraction and translation.
//!
//! Tracker labels carry classifications as `prefix:value` strings
//! (`area:payments`, `team:core`). Extraction pulls the values for a prefix;
//! translation resolves a value to its display name through the configured
//! dictionaries.

mod extract;
mod translate;

pub use extract::{extract_labels_with_prefix, first_label_with_prefix};
pub use translate::{
    lookup_label, translate_label, translate_label_without_fallback, LabelType, Translation,
};
