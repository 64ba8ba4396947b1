use std::borrow::Cow;

use crate::error::Error;

/// Escape text content: `&`, `<` and `>` become entities.
///
/// Returns the input unchanged (no allocation) when nothing needed escaping.
pub(crate) fn escape_text(content: Cow<str>) -> Cow<str> {
    let mut result = String::new();
    let mut change = false;
    for c in content.chars() {
        match c {
            '&' => {
                change = true;
                result.push_str("&amp;")
            }
            '<' => {
                change = true;
                result.push_str("&lt;")
            }
            '>' => {
                change = true;
                result.push_str("&gt;")
            }
            _ => result.push(c),
        }
    }

    if !change {
        content
    } else {
        result.into()
    }
}

/// Escape an attribute value: the text entities plus `"` and `'`.
pub(crate) fn escape_attribute(content: Cow<str>) -> Cow<str> {
    let mut result = String::new();
    let mut change = false;
    for c in content.chars() {
        match c {
            '&' => {
                change = true;
                result.push_str("&amp;")
            }
            '<' => {
                change = true;
                result.push_str("&lt;")
            }
            '>' => {
                change = true;
                result.push_str("&gt;")
            }
            '"' => {
                change = true;
                result.push_str("&quot;")
            }
            '\'' => {
                change = true;
                result.push_str("&apos;")
            }
            _ => result.push(c),
        }
    }

    if !change {
        content
    } else {
        result.into()
    }
}

/// Reject characters that cannot appear in XML output, even escaped.
///
/// Tab, newline and carriage return are allowed; other control characters
/// and the non-characters at the end of the BMP are not.
pub(crate) fn validate_content(content: &str) -> Result<(), Error> {
    for c in content.chars() {
        let valid = matches!(c,
            '\u{9}' | '\u{A}' | '\u{D}'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}');
        if !valid {
            return Err(Error::UnsupportedContent(c));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text() {
        let text = "A & B";
        assert_eq!(escape_text(text.into()), "A &amp; B");
    }

    #[test]
    fn test_escape_text_multiple() {
        let text = "&><";
        assert_eq!(escape_text(text.into()), "&amp;&gt;&lt;");
    }

    #[test]
    fn test_escape_text_leaves_quotes() {
        let text = r#"a "quoted" text"#;
        assert_eq!(escape_text(text.into()), r#"a "quoted" text"#);
    }

    #[test]
    fn test_escape_text_no_entities() {
        let text = "hello";
        let result = escape_text(text.into());
        // this is the same slice
        assert!(std::ptr::eq(text, result.as_ref()));
    }

    #[test]
    fn test_escape_attribute() {
        let text = r#"a "quoted" & 'single' <tag>"#;
        assert_eq!(
            escape_attribute(text.into()),
            "a &quot;quoted&quot; &amp; &apos;single&apos; &lt;tag&gt;"
        );
    }

    #[test]
    fn test_escape_attribute_no_entities() {
        let text = "hello";
        let result = escape_attribute(text.into());
        // this is the same slice
        assert!(std::ptr::eq(text, result.as_ref()));
    }

    #[test]
    fn test_validate_content_ok() {
        assert!(validate_content("hello\tworld\n").is_ok());
    }

    #[test]
    fn test_validate_content_control_character() {
        let err = validate_content("a\u{0}b");
        assert_eq!(err, Err(Error::UnsupportedContent('\u{0}')));
    }

    #[test]
    fn test_validate_content_noncharacter() {
        let err = validate_content("a\u{FFFF}b");
        assert_eq!(err, Err(Error::UnsupportedContent('\u{FFFF}')));
    }
}
