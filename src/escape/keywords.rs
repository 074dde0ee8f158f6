use log::debug;

use crate::escape::strings::escape_string;

/// Whether `name` can be written as a bare `:name` keyword.
pub fn is_simple_keyword(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Render `name` as a keyword, falling back to `(keyword "...")` when the
/// bare form would not read back as a single token.
pub fn escape_keyword(name: &str) -> String {
    if is_simple_keyword(name) {
        format!(":{}", name)
    } else {
        debug!("Quoting keyword that is not a bare word: '{}'", name);
        format!("(keyword {})", escape_string(name))
    }
}
