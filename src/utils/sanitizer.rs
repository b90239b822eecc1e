/// Replaces every ASCII control character (`\x00`-`\x1F`, `\x7F`) with a space.
///
/// PokeAPI flavor texts embed `\n` and `\f`, and the translation upstream
/// rejects such characters.
pub fn replace_control_chars(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii_control() { ' ' } else { c })
        .collect()
}
