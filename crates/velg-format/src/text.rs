//! Text helpers for display.

/// Up to two uppercase initials from a whitespace-separated name.
///
/// Takes the first character of each of the first two words. A single
/// word yields one letter and an empty name yields an empty string.
pub fn get_initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
