//! Comma-delimited line tokenizer.
//!
//! A `"` toggles quoted mode and is consumed; inside quotes a comma is a
//! literal. Doubled quotes (`""`) are not an escape here: each one simply
//! toggles the mode again, so `"a""b"` reads as `ab`.

/// Split one CSV line into raw field values.
///
/// Always returns at least one field, even for the empty string.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }

    fields.push(current);
    fields
}
