use crate::escape::constants::{PRINTABLE_END, PRINTABLE_START};

#[inline]
fn is_printable(c: char) -> bool {
    (PRINTABLE_START..=PRINTABLE_END).contains(&u32::from(c))
}

/// Quote `text` as a string literal.
///
/// Newlines and tabs become `\n` and `\t`, backslashes and double quotes are
/// prefixed with a backslash, and every other character outside the printable
/// range is written as `\xHH` per UTF-8 byte.
pub fn escape_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');

    for c in text.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\\' | '"' => {
                out.push('\\');
                out.push(c);
            }
            c if !is_printable(c) => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).bytes() {
                    out.push_str(&format!("\\x{:02x}", byte));
                }
            }
            c => out.push(c),
        }
    }

    out.push('"');
    out
}
