//! Handler utilities.

pub mod upload;

/// Treats a missing field and an empty string the same, the way HTML form
/// and JSON clients send "nothing".
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
