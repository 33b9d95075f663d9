//! The lookahead contract shared by the character and token streams.

/// A stream with one item of lookahead.
///
/// Once exhausted, a stream keeps returning its end-of-input value from
/// `peek` and `next` instead of failing.
pub trait Stream {
    type Item;

    /// Return the upcoming item without consuming it. Repeated calls with no
    /// `next` in between return the same item.
    fn peek(&mut self) -> &Self::Item;

    /// Return the upcoming item and advance past it.
    fn next(&mut self) -> Self::Item;

    /// True once nothing is left to consume.
    fn eof(&self) -> bool;
}
