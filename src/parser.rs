use std::fmt;

use crate::ast::Node;
use crate::token::{Token, TokenKind};

/// Maximum `${...}` nesting depth the builder will follow.
///
/// Input is attacker-controlled; past this depth the parse is abandoned
/// and the caller should treat the input as suspicious.
pub const MAX_NESTING_DEPTH: usize = 100;

/// Classifies a parser error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Lookup nesting exceeded [`MAX_NESTING_DEPTH`].
    NestingTooDeep { limit: usize },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NestingTooDeep { limit } => {
                write!(f, "lookup nesting deeper than {limit} levels")
            }
        }
    }
}

/// Error produced during tree building.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at byte {pos}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub pos: usize,
}

/// Build a lookup tree from a token sequence.
///
/// The builder is deliberately permissive: malformed nesting never
/// fails. An unterminated `${` is closed by the end of input with
/// whatever key/value state has accumulated, and a stray `}` or
/// separator at the top level is skipped. The only error is the
/// nesting-depth guard.
///
/// # Errors
///
/// Returns `ParseError` when lookups nest deeper than
/// [`MAX_NESTING_DEPTH`].
pub fn parse(tokens: &[Token]) -> Result<Node, ParseError> {
    Parser::new(tokens).parse()
}

/// Which child list of the current expression is accumulating.
///
/// Starts at `Key`; the expression's first separator switches it to
/// `Value` and it never switches back, so `key` ends up holding
/// everything before the separator and `value` everything after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Key,
    Value,
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn parse(mut self) -> Result<Node, ParseError> {
        let mut children = Vec::new();

        while let Some(token) = self.tokens.get(self.pos) {
            match token.kind {
                TokenKind::Start => {
                    self.pos += 1;
                    children.push(self.parse_expression(1)?);
                }
                TokenKind::Content => {
                    children.push(Node::text(token.text.clone()));
                    self.pos += 1;
                }
                // no expression is open at the top level, so these
                // carry no structure
                TokenKind::End | TokenKind::Separator => {
                    self.pos += 1;
                }
            }
        }

        Ok(Node::Root { children })
    }

    /// Process tokens for one expression level, consuming through the
    /// matching `End` token or to the end of input.
    fn parse_expression(&mut self, depth: usize) -> Result<Node, ParseError> {
        if depth > MAX_NESTING_DEPTH {
            return Err(ParseError {
                kind: ParseErrorKind::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                pos: self.tokens.get(self.pos).map_or(0, |t| t.pos),
            });
        }

        let mut key = Vec::new();
        let mut value = Vec::new();
        let mut placement = Placement::Key;

        while let Some(token) = self.tokens.get(self.pos) {
            match token.kind {
                TokenKind::Start => {
                    self.pos += 1;
                    let child = self.parse_expression(depth + 1)?;
                    match placement {
                        Placement::Key => key.push(child),
                        Placement::Value => value.push(child),
                    }
                }
                TokenKind::End => {
                    self.pos += 1;
                    return Ok(Node::expression(key, value));
                }
                TokenKind::Content => {
                    let leaf = Node::text(token.text.clone());
                    match placement {
                        Placement::Key => key.push(leaf),
                        Placement::Value => value.push(leaf),
                    }
                    self.pos += 1;
                }
                TokenKind::Separator => {
                    // the separator itself is not stored; only the
                    // first one changes where children accumulate
                    placement = Placement::Value;
                    self.pos += 1;
                }
            }
        }

        // unterminated expression: end of input closes it
        Ok(Node::expression(key, value))
    }
}
