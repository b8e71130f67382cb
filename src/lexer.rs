use crate::token::{Token, TokenKind};

/// Tokenize a lookup-expression string into a flat token sequence.
///
/// The scan is infallible: every byte of the input lands in exactly one
/// token, in order, so concatenating the token texts reproduces the
/// input. `}` and `:`/`:-` are structural only inside an open `${`;
/// outside one they are plain content, so ordinary header values like
/// `Mozilla/5.0 (X11; Linux x86_64)` tokenize as a single content run.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).tokenize()
}

struct Lexer<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
    /// Number of `${` openers without a matching `}` so far.
    open: usize,
}

impl<'a> Lexer<'a> {
    const fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
            open: 0,
        }
    }

    fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while self.pos < self.bytes.len() {
            match self.bytes[self.pos] {
                b'$' if self.peek_at(1) == Some(b'{') => {
                    tokens.push(self.take(TokenKind::Start, 2));
                    self.open += 1;
                }
                b'}' if self.open > 0 => {
                    tokens.push(self.take(TokenKind::End, 1));
                    self.open -= 1;
                }
                b':' if self.open > 0 => {
                    let len = if self.peek_at(1) == Some(b'-') { 2 } else { 1 };
                    tokens.push(self.take(TokenKind::Separator, len));
                }
                _ => tokens.push(self.read_content()),
            }
        }

        tokens
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    /// Emit a token covering `len` bytes at the cursor and advance.
    fn take(&mut self, kind: TokenKind, len: usize) -> Token {
        let start = self.pos;
        self.pos += len;
        Token::new(kind, start, self.input[start..self.pos].to_string())
    }

    /// Consume a maximal run of literal bytes into one content token.
    ///
    /// Slicing the original input keeps multi-byte characters intact:
    /// every run boundary sits on an ASCII structural byte.
    fn read_content(&mut self) -> Token {
        let start = self.pos;

        while self.pos < self.bytes.len() {
            match self.bytes[self.pos] {
                b'$' if self.peek_at(1) == Some(b'{') => break,
                b'}' | b':' if self.open > 0 => break,
                _ => self.pos += 1,
            }
        }

        Token::new(
            TokenKind::Content,
            start,
            self.input[start..self.pos].to_string(),
        )
    }
}
