//! Sprig lexer - tokenization for the Sprig programming language.
//!
//! This crate converts source text into classified, position-annotated
//! tokens. Characters come from a [`CharStream`], the recognition engine
//! ([`next_token`]) turns them into [`Token`]s, and a [`TokenStream`] adds
//! one token of lookahead for the parser.
//!
//! # Example
//!
//! ```
//! use sprig_lexer::{Stream, TokenKind, TokenStream};
//!
//! let mut stream = TokenStream::from_source("let x = 42");
//! assert_eq!(stream.peek().kind, TokenKind::Keyword);
//! let token = stream.next();
//! assert_eq!(token.lexeme, "let");
//! ```
//!
//! Malformed input never aborts lexing. Characters the lexer cannot
//! classify come back as [`TokenKind::Unrecognized`] tokens.
//!
//! ```
//! use sprig_lexer::{tokenize, tokenize_strict, TokenKind};
//!
//! let tokens = tokenize("a # b");
//! assert_eq!(tokens[2].kind, TokenKind::Unrecognized);
//! assert!(tokenize_strict("a # b").is_err());
//! ```

pub mod char_stream;
pub mod classify;
pub mod lexer;
pub mod stream;
pub mod token;
pub mod token_stream;

pub use char_stream::{Char, CharStream, Symbol};
pub use classify::{classify, CharClass};
pub use lexer::{next_token, tokenize, tokenize_strict, LexError};
pub use stream::Stream;
pub use token::{lookup_word, BuiltinType, Keyword, Position, Range, Token, TokenKind};
pub use token_stream::{TokenStream, Tokens};
