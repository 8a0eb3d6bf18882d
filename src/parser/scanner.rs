//! Quote/comment scanner
//!
//! A lightweight single-pass character scanner used by ancillary tools
//! (brace matching, quick classification) to decide whether a buffer
//! position lies inside a string or comment without invoking the full
//! parser.

/// Classification of a single buffer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Plain code
    Code,
    /// Inside a `"…"` or `'…'` string literal
    StringLit,
    /// Inside a `#`/`--` line comment or `{ }` block comment
    Comment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    DoubleQuote,
    SingleQuote,
    LineComment,
    BlockComment,
}

/// Classify the position `offset` (byte index) in `text`.
///
/// Scans from the start of the buffer; positions past the end classify as
/// code. The opening delimiter of a string/comment counts as part of it.
pub fn classify_offset(text: &str, offset: usize) -> CharClass {
    let mut state = State::Code;
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() && i <= offset {
        let b = bytes[i];
        let next = bytes.get(i + 1).copied();

        match state {
            State::Code => match b {
                b'"' => state = State::DoubleQuote,
                b'\'' => state = State::SingleQuote,
                b'#' => state = State::LineComment,
                b'-' if next == Some(b'-') => {
                    state = State::LineComment;
                    if i == offset || i + 1 == offset {
                        return CharClass::Comment;
                    }
                    i += 1;
                }
                b'{' => state = State::BlockComment,
                _ => {}
            },
            State::DoubleQuote => match b {
                b'\\' => {
                    // Escaped character stays inside the string
                    if i + 1 == offset {
                        return CharClass::StringLit;
                    }
                    i += 1;
                }
                b'"' => {
                    if i == offset {
                        return CharClass::StringLit;
                    }
                    state = State::Code;
                }
                _ => {}
            },
            State::SingleQuote => match b {
                b'\\' => {
                    if i + 1 == offset {
                        return CharClass::StringLit;
                    }
                    i += 1;
                }
                b'\'' => {
                    if i == offset {
                        return CharClass::StringLit;
                    }
                    state = State::Code;
                }
                _ => {}
            },
            State::LineComment => {
                if b == b'\n' {
                    state = State::Code;
                    if i == offset {
                        return CharClass::Code;
                    }
                }
            }
            State::BlockComment => {
                if b == b'}' {
                    if i == offset {
                        return CharClass::Comment;
                    }
                    state = State::Code;
                }
            }
        }
        i += 1;
    }

    match state {
        State::Code => CharClass::Code,
        State::DoubleQuote | State::SingleQuote => CharClass::StringLit,
        State::LineComment | State::BlockComment => CharClass::Comment,
    }
}

/// True if `offset` lies inside a string or comment.
///
/// This is the brace-matching entry point: a brace inside either region
/// must not participate in matching.
pub fn is_in_string_or_comment(text: &str, offset: usize) -> bool {
    classify_offset(text, offset) != CharClass::Code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_position() {
        assert_eq!(classify_offset("let x = 1", 4), CharClass::Code);
    }

    #[test]
    fn test_inside_double_quoted_string() {
        let text = r#"let s = "a(b)c""#;
        assert_eq!(classify_offset(text, 10), CharClass::StringLit);
        assert!(is_in_string_or_comment(text, 10));
    }

    #[test]
    fn test_inside_single_quoted_string() {
        let text = "let s = 'a(b'";
        assert_eq!(classify_offset(text, 11), CharClass::StringLit);
    }

    #[test]
    fn test_after_closed_string() {
        let text = r#""abc" + x"#;
        assert_eq!(classify_offset(text, 7), CharClass::Code);
    }

    #[test]
    fn test_line_comment_hash() {
        let text = "let x = 1 # trailing (\nlet y = 2";
        assert_eq!(classify_offset(text, 21), CharClass::Comment);
        assert_eq!(classify_offset(text, 24), CharClass::Code);
    }

    #[test]
    fn test_line_comment_dashes() {
        let text = "-- note\nlet x = 1";
        assert_eq!(classify_offset(text, 3), CharClass::Comment);
        assert_eq!(classify_offset(text, 9), CharClass::Code);
    }

    #[test]
    fn test_block_comment() {
        let text = "{ a ( b } let x = 1";
        assert_eq!(classify_offset(text, 4), CharClass::Comment);
        assert_eq!(classify_offset(text, 12), CharClass::Code);
    }

    #[test]
    fn test_escaped_quote_stays_in_string() {
        let text = r#""a\"b" x"#;
        assert_eq!(classify_offset(text, 3), CharClass::StringLit);
        assert_eq!(classify_offset(text, 7), CharClass::Code);
    }

    #[test]
    fn test_unterminated_string_runs_to_eof() {
        let text = r#"let s = "abc"#;
        assert_eq!(classify_offset(text, 11), CharClass::StringLit);
        assert_eq!(classify_offset(text, 100), CharClass::StringLit);
    }
}
