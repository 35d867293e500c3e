/// Uppercase the first character, leaving the rest as written.
///
/// Used for select option captions, e.g. `pessoa fisica` -> `Pessoa fisica`.
pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
