//! Token cursor
//!
//! An explicit cursor over the lexed token buffer. Exactly one grammar
//! function advances it at a time; no AST node holds a reference to it
//! after parsing returns.

use text_size::{TextRange, TextSize};

use super::lexer::Token;
use super::token_kind::TokenKind;

/// Cursor over a token buffer (position + underlying tokens).
pub struct TokenCursor<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    /// End offset of the last consumed non-trivia token.
    last_end: TextSize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a [Token<'a>]) -> Self {
        Self {
            tokens,
            pos: 0,
            last_end: TextSize::new(0),
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    pub fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    /// Kind of the current token, `Eof` when the buffer is exhausted.
    pub fn current_kind(&self) -> TokenKind {
        self.current().map(|t| t.kind).unwrap_or(TokenKind::Eof)
    }

    /// Range of the current token; an empty range at the end offset of the
    /// last consumed token when at end of input.
    pub fn current_range(&self) -> TextRange {
        self.current()
            .map(|t| t.range())
            .unwrap_or_else(|| TextRange::empty(self.last_end))
    }

    pub fn at(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    pub fn at_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.current_kind())
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Look ahead `n` non-trivia tokens (0 = current non-trivia token).
    pub fn nth(&self, n: usize) -> TokenKind {
        let mut idx = self.pos;
        let mut count = 0;
        while idx < self.tokens.len() {
            if !self.tokens[idx].kind.is_trivia() {
                if count == n {
                    return self.tokens[idx].kind;
                }
                count += 1;
            }
            idx += 1;
        }
        TokenKind::Eof
    }

    /// Check for a two-token lookahead sequence (e.g. `END MAIN`), used by
    /// sub-parsers to signal "the next construct belongs to my caller"
    /// without consuming the triggering tokens.
    pub fn at_sequence(&self, first: TokenKind, second: TokenKind) -> bool {
        self.nth(0) == first && self.nth(1) == second
    }

    /// Byte position of the current position for progress checks.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// End offset of the last consumed non-trivia token.
    pub fn last_end(&self) -> TextSize {
        self.last_end
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    /// Consume the current token and return it.
    pub fn bump(&mut self) -> Option<Token<'a>> {
        let token = self.current().cloned()?;
        if !token.kind.is_trivia() {
            self.last_end = token.range().end();
        }
        self.pos += 1;
        Some(token)
    }

    /// Consume the current token if it matches `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Skip whitespace and comments.
    pub fn skip_trivia(&mut self) {
        while self.current().map(|t| t.kind.is_trivia()).unwrap_or(false) {
            self.bump();
        }
    }
}
