//! Character stream over a complete source text.

use std::fmt;

use crate::stream::Stream;
use crate::token::{Position, Range};

/// A scanned character, or the end-of-input sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Char(char),
    EndOfInput,
}

impl Symbol {
    /// The character, unless this is the sentinel.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Symbol::Char(ch) => Some(*ch),
            Symbol::EndOfInput => None,
        }
    }

    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Symbol::EndOfInput)
    }

    /// Whether this is exactly `ch`.
    pub fn is(&self, ch: char) -> bool {
        *self == Symbol::Char(ch)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Char(ch) => write!(f, "{}", ch),
            Symbol::EndOfInput => write!(f, "<end of input>"),
        }
    }
}

/// A symbol paired with the position it was read at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Char {
    pub value: Symbol,
    pub position: Position,
}

/// CharStream yields the characters of a source text one at a time.
///
/// Once the text is exhausted every `peek` and `next` returns
/// [`Symbol::EndOfInput`] at the final position.
#[derive(Debug, Clone)]
pub struct CharStream {
    input: String,
    chars: Vec<char>,
    position: Position,
    current: Char,
}

impl CharStream {
    /// Create a new stream over the given source.
    pub fn new(input: &str) -> Self {
        let chars: Vec<char> = input.chars().collect();
        let current = char_at(&chars, Position::START);
        Self {
            input: input.to_string(),
            chars,
            position: Position::START,
            current,
        }
    }

    /// Position of the cursor.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Length of the source in characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Source text covered by `range`, clamped to the input.
    pub fn slice(&self, range: Range) -> String {
        let end = range.end.index.min(self.chars.len());
        let start = range.start.index.min(end);
        self.chars[start..end].iter().collect()
    }

    /// Text of a 1-indexed line, without its line feed.
    pub fn line_text(&self, line: usize) -> Option<&str> {
        let text = self.input.split('\n').nth(line.checked_sub(1)?)?;
        Some(text.strip_suffix('\r').unwrap_or(text))
    }
}

impl Stream for CharStream {
    type Item = Char;

    fn peek(&mut self) -> &Char {
        &self.current
    }

    fn next(&mut self) -> Char {
        let ch = self.current;
        if let Symbol::Char(c) = ch.value {
            self.position = self.position.advance(c);
            self.current = char_at(&self.chars, self.position);
        }
        ch
    }

    fn eof(&self) -> bool {
        self.position.index >= self.chars.len()
    }
}

/// The character at `position`, or the sentinel past the end.
fn char_at(chars: &[char], position: Position) -> Char {
    let value = match chars.get(position.index) {
        Some(&ch) => Symbol::Char(ch),
        None => Symbol::EndOfInput,
    };
    Char { value, position }
}
