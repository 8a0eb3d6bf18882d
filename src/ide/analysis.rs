//! Per-buffer analysis session
//!
//! [`Analysis`] owns the source text, the parse result, and the line index
//! for one buffer. It is rebuilt wholesale on each edit; all queries in
//! this module borrow from it.

use text_size::{TextRange, TextSize};

use crate::base::LineIndex;
use crate::parser::{Parse, SyntaxError, is_in_string_or_comment, parse_module};
use crate::syntax::Module;

pub struct Analysis {
    source: String,
    parse: Parse,
    line_index: LineIndex,
}

impl Analysis {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let parse = parse_module(&source);
        let line_index = LineIndex::new(&source);
        Self {
            source,
            parse,
            line_index,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn module(&self) -> &Module {
        &self.parse.module
    }

    pub fn errors(&self) -> &[SyntaxError] {
        &self.parse.errors
    }

    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    pub fn in_string_or_comment(&self, offset: TextSize) -> bool {
        is_in_string_or_comment(&self.source, usize::from(offset))
    }

    /// The identifier word around `offset`, if any.
    pub fn word_at(&self, offset: TextSize) -> Option<(&str, TextRange)> {
        self.word_with(offset, |c| c.is_ascii_alphanumeric() || c == '_')
    }

    /// Like [`Analysis::word_at`], but dots join segments so register
    /// fields (`sqlca.sqlcode`) resolve as one name.
    pub fn dotted_word_at(&self, offset: TextSize) -> Option<(&str, TextRange)> {
        let (word, range) = self.word_with(offset, |c| {
            c.is_ascii_alphanumeric() || c == '_' || c == '.'
        })?;
        // strip dots that are not joining two segments
        let trimmed = word.trim_matches('.');
        if trimmed.is_empty() {
            return None;
        }
        let leading = (word.len() - word.trim_start_matches('.').len()) as u32;
        let start = range.start() + TextSize::new(leading);
        let end = start + TextSize::of(trimmed);
        Some((trimmed, TextRange::new(start, end)))
    }

    fn word_with(
        &self,
        offset: TextSize,
        is_word: impl Fn(char) -> bool,
    ) -> Option<(&str, TextRange)> {
        let bytes = self.source.as_bytes();
        let pos = usize::from(offset).min(bytes.len());
        let mut start = pos;
        while start > 0 && is_word(bytes[start - 1] as char) {
            start -= 1;
        }
        let mut end = pos;
        while end < bytes.len() && is_word(bytes[end] as char) {
            end += 1;
        }
        if start == end {
            return None;
        }
        let range = TextRange::new(
            TextSize::new(start as u32),
            TextSize::new(end as u32),
        );
        Some((&self.source[start..end], range))
    }
}
