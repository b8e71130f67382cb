/// Token kinds produced by the lexer.
///
/// The set is closed and exhaustively matched by the tree builder, so
/// an unrecognized kind is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Lookup opener `${`.
    Start,
    /// Lookup terminator `}`.
    End,
    /// Key/default separator `:` or `:-`.
    Separator,
    /// Run of literal characters.
    Content,
}

/// A single token with its kind, byte offset, and matched text.
///
/// Concatenating the `text` of every token produced for an input
/// reproduces that input exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offset where the token began in the input.
    pub pos: usize,
    pub text: String,
}

impl Token {
    #[must_use]
    pub const fn new(kind: TokenKind, pos: usize, text: String) -> Self {
        Self { kind, pos, text }
    }
}
