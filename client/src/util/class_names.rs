//! CSS class list merging for presentational primitives.

#[cfg(test)]
#[path = "class_names_test.rs"]
mod class_names_test;

/// Join non-empty class fragments with single spaces.
pub fn class_names(values: &[&str]) -> String {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
