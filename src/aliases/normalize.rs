//! Name normalization for alias and command comparisons.

/// Returns the comparison key for `name`.
///
/// Case-sensitive mode returns the name unchanged; otherwise the name is
/// lower-cased. Every registry lookup goes through this exactly once.
pub fn normalize(name: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        name.to_string()
    } else {
        name.to_lowercase()
    }
}
