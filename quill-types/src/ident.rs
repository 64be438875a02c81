//! Identifier validation shared by composite types and constructs.

/// Check that `s` matches `^[A-Za-z_][A-Za-z_0-9]*$`.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
