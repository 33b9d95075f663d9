//! Character classes the lexer dispatches on.
//!
//! The end-of-input sentinel belongs to none of these classes.

use crate::char_stream::Symbol;

/// The class of the character that starts a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Word,
    Punctuation,
    Digit,
    Operator,
    Whitespace,
    Newline,
    Quote,
    Other,
}

/// Check if a character may appear in an identifier.
pub fn is_identifier(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Check if a character is a single-character punctuation symbol.
pub fn is_punctuation(ch: char) -> bool {
    matches!(ch, '(' | ')' | '{' | '}' | '[' | ']' | ':' | '|')
}

/// Check if a character can start an operator.
pub fn is_operator(ch: char) -> bool {
    matches!(ch, '+' | '-' | '/' | '*' | '=' | '.')
}

pub fn is_newline(ch: char) -> bool {
    ch == '\n' || ch == '\r'
}

/// Blank characters other than line terminators.
pub fn is_whitespace(ch: char) -> bool {
    ch.is_whitespace() && !is_newline(ch)
}

/// Classify the upcoming symbol. Checks run in a fixed order, so the first
/// matching class wins.
pub fn classify(symbol: Symbol) -> CharClass {
    let Symbol::Char(ch) = symbol else {
        return CharClass::Other;
    };
    if is_identifier(ch) {
        CharClass::Word
    } else if is_punctuation(ch) {
        CharClass::Punctuation
    } else if is_digit(ch) {
        CharClass::Digit
    } else if is_operator(ch) {
        CharClass::Operator
    } else if is_whitespace(ch) {
        CharClass::Whitespace
    } else if is_newline(ch) {
        CharClass::Newline
    } else if ch == '"' {
        CharClass::Quote
    } else {
        CharClass::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_chars() {
        assert!(is_identifier('a'));
        assert!(is_identifier('Z'));
        assert!(is_identifier('_'));
        assert!(!is_identifier('1'));
        assert!(!is_identifier('é'));
        assert!(!is_identifier('-'));
    }

    #[test]
    fn test_punctuation_chars() {
        for ch in "(){}[]:|".chars() {
            assert!(is_punctuation(ch), "{ch:?}");
        }
        assert!(!is_punctuation('.'));
        assert!(!is_punctuation(','));
    }

    #[test]
    fn test_operator_chars() {
        for ch in "+-/*=.".chars() {
            assert!(is_operator(ch), "{ch:?}");
        }
        assert!(!is_operator('<'));
        assert!(!is_operator('%'));
    }

    #[test]
    fn test_blank_chars() {
        assert!(is_whitespace(' '));
        assert!(is_whitespace('\t'));
        assert!(is_whitespace('\u{a0}'));
        assert!(!is_whitespace('\n'));
        assert!(!is_whitespace('\r'));
        assert!(is_newline('\n'));
        assert!(is_newline('\r'));
        assert!(!is_newline(' '));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(Symbol::Char('x')), CharClass::Word);
        assert_eq!(classify(Symbol::Char('_')), CharClass::Word);
        assert_eq!(classify(Symbol::Char('{')), CharClass::Punctuation);
        assert_eq!(classify(Symbol::Char('7')), CharClass::Digit);
        assert_eq!(classify(Symbol::Char('.')), CharClass::Operator);
        assert_eq!(classify(Symbol::Char('\t')), CharClass::Whitespace);
        assert_eq!(classify(Symbol::Char('\r')), CharClass::Newline);
        assert_eq!(classify(Symbol::Char('"')), CharClass::Quote);
        assert_eq!(classify(Symbol::Char('#')), CharClass::Other);
        assert_eq!(classify(Symbol::EndOfInput), CharClass::Other);
    }
}
