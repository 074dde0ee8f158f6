use crate::escape::{Numeral, classify_numeral, escape_keyword, escape_string, is_simple_keyword};

/// Reverse the escapes produced by `escape_string`, returning `None` on a
/// malformed literal.
fn unescape(literal: &str) -> Option<String> {
    let inner = literal.strip_prefix('"')?.strip_suffix('"')?;
    let mut bytes = Vec::new();
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            let mut buf = [0u8; 4];
            bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            continue;
        }
        match chars.next()? {
            'n' => bytes.push(b'\n'),
            't' => bytes.push(b'\t'),
            'x' => {
                let hex: String = chars.by_ref().take(2).collect();
                bytes.push(u8::from_str_radix(&hex, 16).ok()?);
            }
            other => bytes.push(u8::try_from(u32::from(other)).ok()?),
        }
    }
    String::from_utf8(bytes).ok()
}

#[test]
fn test_escape_string_plain_text() {
    assert_eq!(escape_string("x"), "\"x\"");
    assert_eq!(escape_string("a + b"), "\"a + b\"");
    assert_eq!(escape_string(""), "\"\"");
}

#[test]
fn test_escape_string_backslash_and_quote() {
    assert_eq!(escape_string("\\pi"), "\"\\\\pi\"");
    assert_eq!(escape_string("say \"hi\""), "\"say \\\"hi\\\"\"");
}

#[test]
fn test_escape_string_newline_and_tab() {
    assert_eq!(escape_string("a\nb"), "\"a\\nb\"");
    assert_eq!(escape_string("a\tb"), "\"a\\tb\"");
}

#[test]
fn test_escape_string_control_characters() {
    assert_eq!(escape_string("\r"), "\"\\x0d\"");
    assert_eq!(escape_string("\u{0}"), "\"\\x00\"");
    assert_eq!(escape_string("\u{1f}"), "\"\\x1f\"");
}

#[test]
fn test_escape_string_non_ascii_uses_utf8_bytes() {
    // π is U+03C0, encoded as CF 80
    assert_eq!(escape_string("π"), "\"\\xcf\\x80\"");
    assert_eq!(escape_string("→"), "\"\\xe2\\x86\\x92\"");
}

#[test]
fn test_escape_string_printable_range_boundaries() {
    assert_eq!(escape_string(" "), "\" \"");
    assert_eq!(escape_string("~"), "\"~\"");
    assert_eq!(escape_string("\u{7f}"), "\"\u{7f}\"");
    assert_eq!(escape_string("\u{b0}"), "\"\u{b0}\"");
    assert_eq!(escape_string("\u{b1}"), "\"\\xc2\\xb1\"");
}

#[test]
fn test_escape_string_round_trip() {
    let samples = [
        "",
        "x",
        "\\frac{1}{2}",
        "quote \" inside",
        "line one\nline two",
        "col\tcol",
        "mixed \\ \" \n \t end",
        "héllo wörld",
        "∑_{i=0}^n",
    ];
    for sample in samples {
        let escaped = escape_string(sample);
        assert!(escaped.starts_with('"'));
        assert!(escaped.ends_with('"'));
        assert_eq!(unescape(&escaped).as_deref(), Some(sample));
    }
}

#[test]
fn test_escape_keyword_simple() {
    assert_eq!(escape_keyword("frac"), ":frac");
    assert_eq!(escape_keyword("sqrt"), ":sqrt");
    assert_eq!(escape_keyword("my_macro-2"), ":my_macro-2");
    assert_eq!(escape_keyword("A1"), ":A1");
}

#[test]
fn test_escape_keyword_quoted() {
    assert_eq!(escape_keyword("a b"), "(keyword \"a b\")");
    assert_eq!(escape_keyword(","), "(keyword \",\")");
    assert_eq!(escape_keyword("\\"), "(keyword \"\\\\\")");
    assert_eq!(escape_keyword("é"), "(keyword \"\\xc3\\xa9\")");
}

#[test]
fn test_escape_keyword_empty_name() {
    assert!(!is_simple_keyword(""));
    assert_eq!(escape_keyword(""), "(keyword \"\")");
}

#[test]
fn test_classify_numeral_integer() {
    assert_eq!(classify_numeral("42"), Some(Numeral::Integer("42")));
    assert_eq!(classify_numeral("-7"), Some(Numeral::Integer("-7")));
    assert_eq!(classify_numeral("007"), Some(Numeral::Integer("007")));
}

#[test]
fn test_classify_numeral_decimal() {
    assert_eq!(classify_numeral("3.50"), Some(Numeral::Decimal("3.50")));
    assert_eq!(classify_numeral("-0.25"), Some(Numeral::Decimal("-0.25")));
    assert_eq!(classify_numeral("+5"), Some(Numeral::Decimal("+5")));
    assert_eq!(classify_numeral(".5"), Some(Numeral::Decimal(".5")));
    assert_eq!(classify_numeral("5."), Some(Numeral::Decimal("5.")));
}

#[test]
fn test_classify_numeral_rejects_non_numbers() {
    for text in ["x", "\\pi", "", "-", ".", "1.2.3", "1e5", "1_000", " 42", "٣", "inf"] {
        assert_eq!(classify_numeral(text), None, "text: {:?}", text);
    }
}

#[test]
fn test_numeral_as_str_preserves_text() {
    if let Some(numeral) = classify_numeral("3.500") {
        assert_eq!(numeral.as_str(), "3.500");
    } else {
        panic!("3.500 should classify as a numeral");
    }
}
