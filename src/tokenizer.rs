//! Chip tokenizer
//!
//! Converts the external string representation into an ordered list of chip
//! texts and back. Commas split chips unless they sit inside a double-quoted
//! region; quotes are kept literally in the chip text.

/// Character that separates chips
pub const DELIMITER: char = ',';

/// Character that opens and closes a delimiter-escaping region
pub const QUOTE: char = '"';

/// Separator used when serializing chips back into one string
pub const SEPARATOR: &str = ", ";

/// Split `raw` into trimmed, non-empty chip texts.
///
/// A comma is a delimiter only when the number of quote characters before it
/// is even. An unmatched quote therefore absorbs every comma after it into the
/// final segment, the same way the live editor treats an open quote.
pub fn parse(raw: &str) -> Vec<String> {
    let mut chips = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (offset, ch) in raw.char_indices() {
        match ch {
            QUOTE => in_quotes = !in_quotes,
            DELIMITER if !in_quotes => {
                push_segment(&mut chips, &raw[start..offset]);
                start = offset + ch.len_utf8();
            }
            _ => {}
        }
    }
    push_segment(&mut chips, &raw[start..]);

    chips
}

fn push_segment(chips: &mut Vec<String>, segment: &str) {
    let trimmed = segment.trim();
    if !trimmed.is_empty() {
        chips.push(trimmed.to_string());
    }
}

/// Whether `text` ends inside an open quoted region, counting every quote
/// character in it.
///
/// This is the rule [`parse`] applies to each comma. The editor's own quote
/// state only flips on appended quotes, so after edits in the middle of the
/// pending text the two can disagree.
pub fn quote_parity_open(text: &str) -> bool {
    text.chars().filter(|&ch| ch == QUOTE).count() % 2 == 1
}

/// Join chips into the external representation.
///
/// No escaping is applied, so a chip containing a comma outside quotes will
/// split into several chips when the result is parsed again.
pub fn serialize<S: AsRef<str>>(chips: &[S]) -> String {
    let mut out = String::new();
    for (i, chip) in chips.iter().enumerate() {
        if i > 0 {
            out.push_str(SEPARATOR);
        }
        out.push_str(chip.as_ref());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        assert!(parse("").is_empty());
        assert!(parse("   ").is_empty());
        assert!(parse(",,, ,").is_empty());
    }

    #[test]
    fn test_parse_simple() {
        assert_eq!(parse("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(parse("  a ,b  , c "), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_keeps_quoted_comma() {
        assert_eq!(parse(r#"a,"b,c",d"#), vec!["a", r#""b,c""#, "d"]);
    }

    #[test]
    fn test_parse_unmatched_quote_absorbs_tail() {
        assert_eq!(parse(r#"a,"b,c,d"#), vec!["a", r#""b,c,d"#]);
        assert_eq!(parse(r#"x,"y",z,"w, v"#), vec!["x", r#""y""#, "z", r#""w, v"#]);
    }

    #[test]
    fn test_parse_multibyte() {
        assert_eq!(parse("привет, мир,日本"), vec!["привет", "мир", "日本"]);
    }

    #[test]
    fn test_quote_parity_open() {
        assert!(!quote_parity_open(""));
        assert!(!quote_parity_open("plain"));
        assert!(!quote_parity_open(r#""b,c""#));
        assert!(quote_parity_open(r#""open"#));
        assert!(quote_parity_open(r#""a" "b"#));
    }

    #[test]
    fn test_serialize() {
        assert_eq!(serialize::<&str>(&[]), "");
        assert_eq!(serialize(&["a"]), "a");
        assert_eq!(serialize(&["a", "c"]), "a, c");
    }

    #[test]
    fn test_serialize_then_parse_changes_count_for_bare_comma() {
        let value = serialize(&["a,b", "c"]);
        assert_eq!(parse(&value), vec!["a", "b", "c"]);
    }
}
