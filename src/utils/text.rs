// file: src/utils/text.rs
// description: string helpers shared by the document renderers
// reference: internal formatting conventions

/// Underscores to spaces, then title case: the first letter of every
/// alphabetic run is upper-cased and the rest lower-cased.
pub fn humanize(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut in_word = false;

    for ch in value.replace('_', " ").chars() {
        if ch.is_alphabetic() {
            if in_word {
                result.extend(ch.to_lowercase());
            } else {
                result.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            result.push(ch);
            in_word = false;
        }
    }

    result
}

/// Escapes single quotes for DBML quoted strings.
pub fn escape_quotes(value: &str) -> String {
    value.replace('\'', "\\'")
}
