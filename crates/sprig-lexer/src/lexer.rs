//! Token recognition for the Sprig language.

use crate::char_stream::{Char, CharStream, Symbol};
use crate::classify::{classify, is_digit, is_identifier, is_whitespace, CharClass};
use crate::stream::Stream;
use crate::token::{lookup_word, Position, Range, Token, TokenKind};
use crate::token_stream::TokenStream;
use thiserror::Error;
use tracing::{debug, trace};

/// Diagnostics for input the lexer could not classify.
///
/// Lexing itself never fails; these are derived from unrecognized tokens
/// for callers that want to stop at the first one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("Unrecognized character {ch:?} at line {line}, column {column}")]
    UnrecognizedCharacter {
        ch: char,
        line: usize,
        column: usize,
    },

    #[error("Unexpected end of input at line {line}, column {column}")]
    UnexpectedEndOfInput { line: usize, column: usize },
}

impl LexError {
    /// Build the diagnostic for an unrecognized token. Other tokens yield `None`.
    pub fn from_token(token: &Token) -> Option<Self> {
        if token.kind != TokenKind::Unrecognized {
            return None;
        }
        let line = token.start().line_number();
        let column = token.start().column_number();
        Some(match token.lexeme.chars().next() {
            Some(ch) => LexError::UnrecognizedCharacter { ch, line, column },
            None => LexError::UnexpectedEndOfInput { line, column },
        })
    }
}

/// Read the next token from `stream`.
///
/// Always consumes at least one character, except on an exhausted stream
/// where the result is an empty unrecognized token at the final position.
pub fn next_token(stream: &mut CharStream) -> Token {
    let token = match classify(stream.peek().value) {
        CharClass::Word => read_word(stream),
        CharClass::Punctuation => read_punctuation(stream),
        CharClass::Digit => read_number(stream),
        CharClass::Operator => read_operator(stream),
        CharClass::Whitespace => read_whitespace(stream),
        CharClass::Newline => read_newline(stream),
        CharClass::Quote => read_string(stream),
        CharClass::Other => {
            let ch = stream.next();
            unrecognized(ch, stream.position())
        }
    };

    if token.kind == TokenKind::Unrecognized {
        debug!(
            target: "sprig::lexer",
            lexeme = ?token.lexeme,
            line = token.start().line,
            col = token.start().col,
            "Unrecognized input"
        );
    } else {
        trace!(
            target: "sprig::lexer",
            kind = %token.kind,
            lexeme = ?token.lexeme,
            line = token.start().line,
            col = token.start().col,
            "Produced token"
        );
    }
    token
}

/// Consume characters while `predicate` holds.
fn read_while(stream: &mut CharStream, mut predicate: impl FnMut(char) -> bool) -> (String, Range) {
    let start = stream.position();
    let mut lexeme = String::new();
    while let Symbol::Char(ch) = stream.peek().value {
        if !predicate(ch) {
            break;
        }
        stream.next();
        lexeme.push(ch);
    }
    (lexeme, Range::new(start, stream.position()))
}

/// Wrap an already consumed character. The sentinel yields an empty token.
fn unrecognized(ch: Char, end: Position) -> Token {
    let lexeme = ch.value.as_char().map(String::from).unwrap_or_default();
    Token::new(TokenKind::Unrecognized, lexeme, Range::new(ch.position, end))
}

/// Read a keyword, boolean, built-in type name or identifier.
fn read_word(stream: &mut CharStream) -> Token {
    let (lexeme, range) = read_while(stream, is_identifier);
    debug_assert!(!lexeme.is_empty());
    Token::new(lookup_word(&lexeme), lexeme, range)
}

/// Read a single punctuation symbol.
fn read_punctuation(stream: &mut CharStream) -> Token {
    let punc = stream.next();
    let Symbol::Char(ch) = punc.value else {
        return unrecognized(punc, stream.position());
    };
    let kind = match ch {
        '(' => TokenKind::LParen,
        ')' => TokenKind::RParen,
        '[' => TokenKind::LBracket,
        ']' => TokenKind::RBracket,
        '{' => TokenKind::LBrace,
        '}' => TokenKind::RBrace,
        _ => TokenKind::Punctuation,
    };
    Token::new(kind, ch.to_string(), Range::new(punc.position, stream.position()))
}

/// Read digits with at most one decimal point.
fn read_number(stream: &mut CharStream) -> Token {
    let mut seen_dot = false;
    let (lexeme, range) = read_while(stream, |ch| {
        if is_digit(ch) {
            true
        } else if ch == '.' && !seen_dot {
            seen_dot = true;
            true
        } else {
            false
        }
    });
    debug_assert!(!lexeme.is_empty());
    Token::new(TokenKind::Number, lexeme, range)
}

/// Read an operator. `==` is the only two-character operator.
fn read_operator(stream: &mut CharStream) -> Token {
    let op = stream.next();
    let Symbol::Char(ch) = op.value else {
        return unrecognized(op, stream.position());
    };
    let kind = match ch {
        '=' if stream.peek().value.is('=') => {
            stream.next();
            return Token::new(
                TokenKind::BinaryOperator,
                "==",
                Range::new(op.position, stream.position()),
            );
        }
        '=' => TokenKind::AssignmentOperator,
        '.' => TokenKind::DotOperator,
        _ => TokenKind::BinaryOperator,
    };
    Token::new(kind, ch.to_string(), Range::new(op.position, stream.position()))
}

/// Read a run of blanks, stopping at line terminators.
fn read_whitespace(stream: &mut CharStream) -> Token {
    let (lexeme, range) = read_while(stream, is_whitespace);
    debug_assert!(!lexeme.is_empty());
    Token::new(TokenKind::Whitespace, lexeme, range)
}

/// Read exactly one line terminator. `\r\n` is two tokens.
fn read_newline(stream: &mut CharStream) -> Token {
    let newline = stream.next();
    let Symbol::Char(ch) = newline.value else {
        return unrecognized(newline, stream.position());
    };
    Token::new(
        TokenKind::Newline,
        ch.to_string(),
        Range::new(newline.position, stream.position()),
    )
}

/// Read a double-quoted string literal. There are no escape sequences.
fn read_string(stream: &mut CharStream) -> Token {
    let open = stream.next();
    if !open.value.is('"') {
        return unrecognized(open, stream.position());
    }

    let (body, _) = read_while(stream, |ch| ch != '"');

    let close = stream.next();
    if !close.value.is('"') {
        return unrecognized(close, stream.position());
    }
    Token::new(
        TokenKind::String,
        body,
        Range::new(open.position, stream.position()),
    )
}

/// Tokenize an input string into a vector of tokens.
///
/// Unrecognized input is kept as [`TokenKind::Unrecognized`] tokens.
pub fn tokenize(input: &str) -> Vec<Token> {
    TokenStream::from_source(input).into_tokens().collect()
}

/// Tokenize an input string, failing on the first unrecognized token.
pub fn tokenize_strict(input: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    for token in TokenStream::from_source(input).into_tokens() {
        if let Some(err) = LexError::from_token(&token) {
            return Err(err);
        }
        tokens.push(token);
    }
    Ok(tokens)
}
