//! One-token lookahead over the recognition engine.

use crate::char_stream::CharStream;
use crate::lexer::next_token;
use crate::stream::Stream;
use crate::token::{Position, Token};
use tracing::trace;

/// TokenStream turns a [`CharStream`] into tokens, buffering at most one
/// token for [`Stream::peek`].
#[derive(Debug, Clone)]
pub struct TokenStream {
    chars: CharStream,
    peeked: Option<Token>,
}

impl TokenStream {
    /// Create a new token stream reading from `chars`.
    pub fn new(chars: CharStream) -> Self {
        Self {
            chars,
            peeked: None,
        }
    }

    /// Create a token stream directly from source text.
    pub fn from_source(input: &str) -> Self {
        Self::new(CharStream::new(input))
    }

    /// Start of the next token.
    pub fn position(&self) -> Position {
        match &self.peeked {
            Some(token) => token.start(),
            None => self.chars.position(),
        }
    }

    /// The underlying character stream.
    pub fn chars(&self) -> &CharStream {
        &self.chars
    }

    /// Give back the character stream, dropping any buffered token.
    pub fn into_inner(self) -> CharStream {
        self.chars
    }

    /// Iterate over the remaining tokens until [`Stream::eof`].
    pub fn into_tokens(self) -> Tokens {
        Tokens { stream: self }
    }
}

impl Stream for TokenStream {
    type Item = Token;

    fn peek(&mut self) -> &Token {
        let chars = &mut self.chars;
        self.peeked.get_or_insert_with(|| {
            let token = next_token(chars);
            trace!(target: "sprig::lexer", kind = %token.kind, "Buffered lookahead token");
            token
        })
    }

    fn next(&mut self) -> Token {
        match self.peeked.take() {
            Some(token) => token,
            None => next_token(&mut self.chars),
        }
    }

    /// True when no token is buffered and the characters are exhausted.
    fn eof(&self) -> bool {
        self.peeked.is_none() && self.chars.eof()
    }
}

/// Owning iterator returned by [`TokenStream::into_tokens`].
#[derive(Debug, Clone)]
pub struct Tokens {
    stream: TokenStream,
}

impl Iterator for Tokens {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.stream.eof() {
            None
        } else {
            Some(self.stream.next())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Range, TokenKind};

    #[test]
    fn test_peek_is_idempotent() {
        let mut stream = TokenStream::from_source("hello world");
        let expected = Token::new(
            TokenKind::Identifier,
            "hello",
            Range::new(Position::START, Position::new(1, 5, 5)),
        );
        assert_eq!(stream.peek(), &expected);
        assert_eq!(stream.peek(), &expected);
        assert_eq!(stream.next(), expected);
    }

    #[test]
    fn test_next_advances() {
        let mut stream = TokenStream::new(CharStream::new("hello world"));

        let tok1 = stream.next();
        assert_eq!(tok1.kind, TokenKind::Identifier);
        assert_eq!(tok1.lexeme, "hello");

        let tok2 = stream.next();
        assert_eq!(tok2.kind, TokenKind::Whitespace);
        assert_eq!(tok2.lexeme, " ");
        assert_eq!(
            tok2.range,
            Range::new(Position::new(1, 5, 5), Position::new(1, 6, 6))
        );

        let tok3 = stream.next();
        assert_eq!(tok3.kind, TokenKind::Identifier);
        assert_eq!(tok3.lexeme, "world");
        assert_eq!(
            tok3.range,
            Range::new(Position::new(1, 6, 6), Position::new(1, 11, 11))
        );
        assert!(stream.eof());
    }

    #[test]
    fn test_eof_waits_for_buffered_token() {
        let mut stream = TokenStream::from_source("x");
        assert!(!stream.eof());
        stream.peek();
        // The characters are exhausted, but the token has not been taken.
        assert!(stream.chars().eof());
        assert!(!stream.eof());
        stream.next();
        assert!(stream.eof());
    }

    #[test]
    fn test_peek_past_end_is_pending() {
        let mut stream = TokenStream::from_source("");
        assert!(stream.eof());
        assert!(stream.peek().is_end_of_input());
        assert!(!stream.eof());
        let token = stream.next();
        assert!(token.is_end_of_input());
        assert!(stream.eof());
        assert_eq!(stream.next(), token);
    }

    #[test]
    fn test_position() {
        let mut stream = TokenStream::from_source("ab  cd");
        stream.next();
        assert_eq!(stream.position(), Position::new(1, 2, 2));
        stream.peek();
        assert_eq!(stream.position(), Position::new(1, 2, 2));
        assert_eq!(stream.chars().position(), Position::new(1, 4, 4));
    }

    #[test]
    fn test_into_inner_drops_lookahead() {
        let mut stream = TokenStream::from_source("ab cd");
        stream.peek();
        let chars = stream.into_inner();
        assert_eq!(chars.position(), Position::new(1, 2, 2));
    }

    #[test]
    fn test_into_tokens() {
        let tokens: Vec<_> = TokenStream::from_source("a = 1")
            .into_tokens()
            .map(|t| t.kind)
            .collect();
        assert_eq!(
            tokens,
            vec![
                TokenKind::Identifier,
                TokenKind::Whitespace,
                TokenKind::AssignmentOperator,
                TokenKind::Whitespace,
                TokenKind::Number,
            ]
        );
    }
}
