//! Expression nodes
//!
//! An expression is one primary node plus an ordered list of appended
//! sibling sub-expressions representing the left-to-right operator/token
//! chain. Operator precedence is deliberately not encoded (see the grammar
//! module); the chain preserves the source order and [`Expression::to_text`]
//! reconstructs a whitespace-normalized form of it.

use smol_str::SmolStr;
use text_size::TextRange;

use super::statement::Statement;

/// One expression node: a primary value plus its appended chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub kind: ExprKind,
    /// Half-open byte range from the first to the last consumed token.
    pub range: TextRange,
    /// Left-to-right token/operator chain glued onto the primary node.
    pub appended: Vec<Expression>,
}

/// The closed family of expression variants.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// One-or-more raw tokens glued together (operators, bare keywords,
    /// numeric literals, qualifier forms).
    Tokens(Vec<SmolStr>),
    /// A string literal, raw text including its quotes.
    StringLit(SmolStr),
    /// A bare identifier reference.
    Name(SmolStr),
    /// A call `f(a, b)` with optional chained member access `f(..).c` and
    /// an optional opaque raw-token capture for anything-mode parameters.
    FunctionCall {
        name: SmolStr,
        name_range: TextRange,
        params: Vec<Expression>,
        member: Option<Box<Expression>>,
        opaque: Option<Vec<SmolStr>>,
    },
    /// `( inner )`, or an opaque raw-token capture in anything-mode.
    ParenWrapped {
        inner: Option<Box<Expression>>,
        opaque: Option<Vec<SmolStr>>,
    },
    /// `[ a, b, c ]`, or an opaque raw-token capture in anything-mode.
    BracketWrapped {
        items: Vec<Expression>,
        opaque: Option<Vec<SmolStr>>,
    },
    /// A nested statement used as an expression value (e.g. a SELECT).
    NestedStatement(Box<Statement>),
}

impl Expression {
    pub fn new(kind: ExprKind, range: TextRange) -> Self {
        Self {
            kind,
            range,
            appended: Vec::new(),
        }
    }

    /// A token expression from a single raw token.
    pub fn token(text: impl Into<SmolStr>, range: TextRange) -> Self {
        Self::new(ExprKind::Tokens(vec![text.into()]), range)
    }

    /// Glue a sibling onto the appended chain, extending this node's range.
    pub fn append(&mut self, expr: Expression) {
        self.range = TextRange::new(self.range.start(), expr.range.end().max(self.range.end()));
        self.appended.push(expr);
    }

    /// The string-literal value with quotes stripped, if this is a string.
    pub fn string_value(&self) -> Option<&str> {
        match &self.kind {
            ExprKind::StringLit(raw) => {
                let raw = raw.as_str();
                if raw.len() >= 2 {
                    Some(&raw[1..raw.len() - 1])
                } else {
                    Some(raw)
                }
            }
            _ => None,
        }
    }

    /// The called function's name, if this is a call.
    pub fn call_name(&self) -> Option<&str> {
        match &self.kind {
            ExprKind::FunctionCall { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }

    /// Textual reconstruction of the primary node without the appended chain.
    pub fn primary_text(&self) -> String {
        match &self.kind {
            ExprKind::Tokens(tokens) => tokens.join(" "),
            ExprKind::StringLit(raw) => raw.to_string(),
            ExprKind::Name(name) => name.to_string(),
            ExprKind::FunctionCall {
                name,
                params,
                member,
                opaque,
                ..
            } => {
                let inner = match opaque {
                    Some(tokens) => tokens.join(" "),
                    None => params
                        .iter()
                        .map(Expression::to_text)
                        .collect::<Vec<_>>()
                        .join(", "),
                };
                let mut out = format!("{name}({inner})");
                if let Some(member) = member {
                    out.push('.');
                    out.push_str(&member.to_text());
                }
                out
            }
            ExprKind::ParenWrapped { inner, opaque } => match (inner, opaque) {
                (_, Some(tokens)) => format!("({})", tokens.join(" ")),
                (Some(inner), None) => format!("({})", inner.to_text()),
                (None, None) => "()".to_string(),
            },
            ExprKind::BracketWrapped { items, opaque } => match opaque {
                Some(tokens) => format!("[{}]", tokens.join(" ")),
                None => format!(
                    "[{}]",
                    items
                        .iter()
                        .map(Expression::to_text)
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            },
            ExprKind::NestedStatement(stmt) => stmt.to_text(),
        }
    }

    /// Textual reconstruction: primary form and appended chain,
    /// space-separated and whitespace-normalized.
    pub fn to_text(&self) -> String {
        let mut out = self.primary_text();
        for part in &self.appended {
            out.push(' ');
            out.push_str(&part.to_text());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use text_size::TextSize;

    fn range(start: u32, end: u32) -> TextRange {
        TextRange::new(TextSize::new(start), TextSize::new(end))
    }

    #[test]
    fn test_append_extends_range() {
        let mut expr = Expression::new(ExprKind::Name("x".into()), range(0, 1));
        expr.append(Expression::token(">", range(2, 3)));
        expr.append(Expression::token("0", range(4, 5)));
        assert_eq!(expr.range, range(0, 5));
        assert_eq!(expr.to_text(), "x > 0");
    }

    #[test]
    fn test_call_reconstruction() {
        let call = Expression::new(
            ExprKind::FunctionCall {
                name: "f".into(),
                name_range: range(0, 1),
                params: vec![
                    Expression::new(ExprKind::Name("a".into()), range(2, 3)),
                    Expression::new(ExprKind::Name("b".into()), range(5, 6)),
                ],
                member: None,
                opaque: None,
            },
            range(0, 7),
        );
        assert_eq!(call.to_text(), "f(a, b)");
        assert_eq!(call.call_name(), Some("f"));
    }

    #[test]
    fn test_string_value_strips_quotes() {
        let s = Expression::new(ExprKind::StringLit("\"abc\"".into()), range(0, 5));
        assert_eq!(s.string_value(), Some("abc"));
        assert_eq!(s.to_text(), "\"abc\"");
    }

    #[test]
    fn test_opaque_paren_reconstruction() {
        let expr = Expression::new(
            ExprKind::ParenWrapped {
                inner: None,
                opaque: Some(vec!["%5.2f".into(), "x".into()]),
            },
            range(0, 8),
        );
        assert_eq!(expr.to_text(), "(%5.2f x)");
    }
}
