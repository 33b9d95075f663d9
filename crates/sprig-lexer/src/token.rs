//! Token types for the Sprig lexer.

use std::fmt;

/// Token kinds for the Sprig language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // Words
    Keyword,
    Identifier,
    BuiltinType,

    // Literals
    Boolean,
    Number,
    String,

    // Punctuation
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Punctuation,

    // Operators
    BinaryOperator,
    AssignmentOperator,
    DotOperator,

    // Trivia
    Whitespace,
    Newline,

    // Special
    Unrecognized,
}

impl TokenKind {
    /// Stable tag for this kind, suitable for diagnostics and snapshots.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::BuiltinType => "BUILTIN TYPE",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::LParen => "LEFT PAREN",
            TokenKind::RParen => "RIGHT PAREN",
            TokenKind::LBracket => "LEFT BRACKET",
            TokenKind::RBracket => "RIGHT BRACKET",
            TokenKind::LBrace => "LEFT BRACE",
            TokenKind::RBrace => "RIGHT BRACE",
            TokenKind::Punctuation => "PUNCTUATION",
            TokenKind::BinaryOperator => "BINARY OPERATOR",
            TokenKind::AssignmentOperator => "ASSIGNMENT OPERATOR",
            TokenKind::DotOperator => "DOT OPERATOR",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Unrecognized => "UNRECOGNIZED",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reserved words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    If,
    Then,
    Else,
    While,
    For,
    Const,
    Let,
    Func,
}

impl Keyword {
    /// Look up a word in the reserved set.
    pub fn lookup(word: &str) -> Option<Keyword> {
        match word {
            "if" => Some(Keyword::If),
            "then" => Some(Keyword::Then),
            "else" => Some(Keyword::Else),
            "while" => Some(Keyword::While),
            "for" => Some(Keyword::For),
            "const" => Some(Keyword::Const),
            "let" => Some(Keyword::Let),
            "func" => Some(Keyword::Func),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::If => "if",
            Keyword::Then => "then",
            Keyword::Else => "else",
            Keyword::While => "while",
            Keyword::For => "for",
            Keyword::Const => "const",
            Keyword::Let => "let",
            Keyword::Func => "func",
        }
    }
}

/// Names of the built-in types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinType {
    Int,
    Bool,
    Unit,
    Str,
    Dbl,
}

impl BuiltinType {
    /// Look up a word in the built-in type names.
    pub fn lookup(word: &str) -> Option<BuiltinType> {
        match word {
            "Int" => Some(BuiltinType::Int),
            "Bool" => Some(BuiltinType::Bool),
            "Unit" => Some(BuiltinType::Unit),
            "Str" => Some(BuiltinType::Str),
            "Dbl" => Some(BuiltinType::Dbl),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BuiltinType::Int => "Int",
            BuiltinType::Bool => "Bool",
            BuiltinType::Unit => "Unit",
            BuiltinType::Str => "Str",
            BuiltinType::Dbl => "Dbl",
        }
    }
}

/// Classify a complete word as a keyword, boolean, built-in type name or identifier.
pub fn lookup_word(word: &str) -> TokenKind {
    if Keyword::lookup(word).is_some() {
        TokenKind::Keyword
    } else if word == "true" || word == "false" {
        TokenKind::Boolean
    } else if BuiltinType::lookup(word).is_some() {
        TokenKind::BuiltinType
    } else {
        TokenKind::Identifier
    }
}

/// Position in source code.
///
/// `index` counts characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// 1-indexed line number.
    pub line: usize,
    /// 0-indexed column within the line.
    pub col: usize,
    /// 0-indexed character offset from the start of input.
    pub index: usize,
}

impl Position {
    /// Position of the first character of any input.
    pub const START: Position = Position {
        line: 1,
        col: 0,
        index: 0,
    };

    /// Create a new Position.
    pub fn new(line: usize, col: usize, index: usize) -> Self {
        Self { line, col, index }
    }

    /// Returns the 1-indexed line number.
    pub fn line_number(&self) -> usize {
        self.line
    }

    /// Returns the 1-indexed column number.
    pub fn column_number(&self) -> usize {
        self.col + 1
    }

    /// The position following `ch`. Only a line feed starts a new line.
    pub fn advance(&self, ch: char) -> Self {
        if ch == '\n' {
            Self {
                line: self.line + 1,
                col: 0,
                index: self.index + 1,
            }
        } else {
            Self {
                line: self.line,
                col: self.col + 1,
                index: self.index + 1,
            }
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line_number(), self.column_number())
    }
}

/// Half-open span of source text, `start` inclusive and `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(start.index <= end.index);
        Self { start, end }
    }

    /// Number of characters covered.
    pub fn len(&self) -> usize {
        self.end.index.saturating_sub(self.start.index)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the character at `index` lies inside this range.
    pub fn contains(&self, index: usize) -> bool {
        self.start.index <= index && index < self.end.index
    }
}

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The source text the token was built from. String tokens drop their quotes.
    pub lexeme: String,
    /// Source span, including the quotes of a string literal.
    pub range: Range,
}

impl Token {
    /// Create a new Token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, range: Range) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            range,
        }
    }

    pub fn start(&self) -> Position {
        self.range.start
    }

    pub fn end(&self) -> Position {
        self.range.end
    }

    /// The reserved word, if this is a keyword token.
    pub fn keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword => Keyword::lookup(&self.lexeme),
            _ => None,
        }
    }

    /// The built-in type, if this is a type name token.
    pub fn builtin_type(&self) -> Option<BuiltinType> {
        match self.kind {
            TokenKind::BuiltinType => BuiltinType::lookup(&self.lexeme),
            _ => None,
        }
    }

    /// Whitespace and newlines.
    pub fn is_trivia(&self) -> bool {
        matches!(self.kind, TokenKind::Whitespace | TokenKind::Newline)
    }

    /// True for the unrecognized token that stands in for the end-of-input sentinel.
    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::Unrecognized && self.range.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_end_of_input() {
            write!(f, "{} <end of input> at {}", self.kind, self.range.start)
        } else {
            write!(f, "{} {:?} at {}", self.kind, self.lexeme, self.range.start)
        }
    }
}
