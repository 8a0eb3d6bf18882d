//! Expression grammar
//!
//! One flat iterative loop alternating between primary recognition and
//! operator/chain recognition. Operator precedence is deliberately not
//! encoded: the tree keeps the left-to-right token sequence as a chain of
//! appended sub-nodes, which keeps the grammar tolerant of the language's
//! unusual operator set (`UNITS`, `THRU`, `IS NOT NULL`, multi-word forms)
//! without a precedence table.
//!
//! The caller supplies a break set: token kinds that legitimately terminate
//! the expression in context (`)`, `,`, `THEN`, a statement keyword). A
//! break token always wins over operator interpretation.

use smol_str::SmolStr;
use text_size::TextRange;

use crate::parser::errors::ErrorCode;
use crate::parser::parser::Parser;
use crate::parser::token_kind::TokenKind;
use crate::syntax::{ExprKind, Expression, Statement, StmtKind};

/// A statement-specific expression extension, tried before the default
/// identifier/keyword handling.
pub type ExtraExprParser =
    fn(&mut Parser<'_>, &[TokenKind], &ExprOptions) -> Option<Expression>;

/// Configuration for one [`parse_expression`] call.
#[derive(Clone, Default)]
pub struct ExprOptions {
    /// Permit a bare `*` as a parameter placeholder.
    pub allow_star_param: bool,
    /// Capture call/paren/bracket contents as raw tokens instead of parsing
    /// them (opaque report/format grammars).
    pub allow_anything_for_params: bool,
    /// Permit `?` placeholder tokens.
    pub allow_question_mark: bool,
    /// Permit an embedded SQL SELECT as an expression value.
    pub allow_nested_select: bool,
    /// Sub-parsers tried before the default identifier/keyword handling.
    pub extra_parsers: Vec<ExtraExprParser>,
}

/// Tokens consumed as unary prefixes before a primary value.
const UNARY_PREFIX: &[TokenKind] = &[
    TokenKind::NotKw,
    TokenKind::ColumnKw,
    TokenKind::Minus,
    TokenKind::AsciiKw,
    TokenKind::Plus,
];

/// Non-symbolic operators that force another primary to follow.
const PSEUDO_OPERATORS: &[TokenKind] = &[
    TokenKind::AsKw,
    TokenKind::AndKw,
    TokenKind::OrKw,
    TokenKind::ModKw,
    TokenKind::UsingKw,
    TokenKind::UnitsKw,
    TokenKind::LikeKw,
    TokenKind::MatchesKw,
    TokenKind::ThroughKw,
    TokenKind::ThruKw,
    TokenKind::BetweenKw,
    TokenKind::InKw,
];

/// Parse one full expression, or return `None` when no expression starts at
/// the cursor.
///
/// Returns `None` silently when the current token is in `breaks` (or end of
/// input) and nothing was consumed; any other failure is reported through
/// the diagnostic sink. A partially-built node is still returned after an
/// error so the tree stays usable.
pub fn parse_expression(
    p: &mut Parser<'_>,
    breaks: &[TokenKind],
    opts: &ExprOptions,
) -> Option<Expression> {
    let mut expr: Option<Expression> = None;
    loop {
        p.cursor.skip_trivia();

        // Leading unary tokens glued before the primary value. NOT in
        // operator position is handled by the chain loop below.
        while p.cursor.at_any(UNARY_PREFIX) && !breaks.contains(&p.cursor.current_kind()) {
            glue_current_token(p, &mut expr);
            p.cursor.skip_trivia();
        }

        let first = expr.is_none();
        match parse_primary(p, breaks, opts, first) {
            Some(primary) => attach(&mut expr, primary),
            None => {
                let kind = p.cursor.current_kind();
                let at_break = kind == TokenKind::Eof || breaks.contains(&kind);
                if expr.is_none() {
                    if !at_break {
                        p.error(
                            format!("unexpected {}", kind.display_name()),
                            ErrorCode::E0402,
                        );
                    }
                    return None;
                }
                // A continuation was pending (operator or unary prefix
                // already consumed) but no primary follows.
                if at_break {
                    p.error(ErrorCode::E0401.default_message(), ErrorCode::E0401);
                } else {
                    p.error(
                        format!("unexpected {}", kind.display_name()),
                        ErrorCode::E0402,
                    );
                }
                return expr;
            }
        }

        // Operator/chain loop. Sets `need_more` and breaks out when the
        // consumed operator requires another primary.
        let mut need_more = false;
        loop {
            p.cursor.skip_trivia();
            let kind = p.cursor.current_kind();
            if kind == TokenKind::Eof || breaks.contains(&kind) {
                break;
            }
            match kind {
                TokenKind::Bang => {
                    p.error("'!' must be followed by '='", ErrorCode::E0403);
                    glue_current_token(p, &mut expr);
                    need_more = true;
                    break;
                }
                TokenKind::Pipe => {
                    p.error("'|' must be followed by '|'", ErrorCode::E0403);
                    glue_current_token(p, &mut expr);
                    need_more = true;
                    break;
                }
                TokenKind::IsKw => {
                    // IS [NOT] NULL; further operators may still follow
                    glue_current_token(p, &mut expr);
                    p.cursor.skip_trivia();
                    if p.cursor.at(TokenKind::NotKw) {
                        glue_current_token(p, &mut expr);
                        p.cursor.skip_trivia();
                    }
                    if p.cursor.at(TokenKind::NullKw) {
                        glue_current_token(p, &mut expr);
                    } else {
                        p.error(ErrorCode::E0404.default_message(), ErrorCode::E0404);
                    }
                }
                TokenKind::NotKw => {
                    glue_current_token(p, &mut expr);
                    p.cursor.skip_trivia();
                    if p.cursor.at_any(&[
                        TokenKind::LikeKw,
                        TokenKind::MatchesKw,
                        TokenKind::InKw,
                    ]) {
                        glue_current_token(p, &mut expr);
                    } else {
                        p.error(ErrorCode::E0405.default_message(), ErrorCode::E0405);
                    }
                    need_more = true;
                    break;
                }
                TokenKind::InstanceKw => {
                    glue_current_token(p, &mut expr);
                    p.cursor.skip_trivia();
                    if p.cursor.at(TokenKind::OfKw) {
                        glue_current_token(p, &mut expr);
                    } else {
                        p.error("expected OF after INSTANCE", ErrorCode::E0901);
                    }
                    need_more = true;
                    break;
                }
                TokenKind::ClippedKw | TokenKind::SpacesKw => {
                    // trailing modifiers, no continuation required
                    glue_current_token(p, &mut expr);
                }
                k if PSEUDO_OPERATORS.contains(&k) => {
                    glue_current_token(p, &mut expr);
                    need_more = true;
                    break;
                }
                k if k.is_operator() => {
                    glue_current_token(p, &mut expr);
                    need_more = true;
                    break;
                }
                _ => break,
            }
        }

        if !need_more {
            break;
        }
    }
    expr
}

fn attach(expr: &mut Option<Expression>, part: Expression) {
    match expr {
        Some(root) => root.append(part),
        None => *expr = Some(part),
    }
}

/// Consume the current token and glue it onto the chain as a token node.
fn glue_current_token(p: &mut Parser<'_>, expr: &mut Option<Expression>) {
    if let Some(token) = p.cursor.bump() {
        attach(expr, Expression::token(token.text, token.range()));
    }
}

fn glue_token_into(p: &mut Parser<'_>, expr: &mut Expression) {
    if let Some(token) = p.cursor.bump() {
        expr.append(Expression::token(token.text, token.range()));
    }
}

/// Recognize one primary value at the cursor.
///
/// Dispatch priority: paren, bracket, string, number, `CURRENT`, `INTERVAL`,
/// nested SELECT, identifier-or-keyword (extra parsers, call form, datetime
/// qualifier, plain name), then a catch-all single token.
fn parse_primary(
    p: &mut Parser<'_>,
    breaks: &[TokenKind],
    opts: &ExprOptions,
    first: bool,
) -> Option<Expression> {
    p.cursor.skip_trivia();
    let kind = p.cursor.current_kind();
    if kind == TokenKind::Eof || breaks.contains(&kind) {
        return None;
    }
    match kind {
        TokenKind::LParen => parse_paren_wrapped(p, opts),
        TokenKind::LBracket => parse_bracket_wrapped(p, opts),
        TokenKind::StringLit => {
            let token = p.cursor.bump()?;
            Some(Expression::new(
                ExprKind::StringLit(token.text.into()),
                token.range(),
            ))
        }
        TokenKind::Integer | TokenKind::Decimal => {
            let token = p.cursor.bump()?;
            Some(Expression::token(token.text, token.range()))
        }
        TokenKind::CurrentKw => {
            let token = p.cursor.bump()?;
            let mut expr = Expression::token(token.text, token.range());
            glue_datetime_qualifier(p, &mut expr);
            Some(expr)
        }
        TokenKind::IntervalKw => parse_interval(p),
        TokenKind::SelectKw if opts.allow_nested_select => parse_nested_select(p, breaks),
        TokenKind::Star if opts.allow_star_param => {
            let token = p.cursor.bump()?;
            Some(Expression::token(token.text, token.range()))
        }
        TokenKind::Question if opts.allow_question_mark => {
            if first {
                p.error("'?' cannot start an expression", ErrorCode::E0406);
            }
            // placeholder node is still produced
            let token = p.cursor.bump()?;
            Some(Expression::token(token.text, token.range()))
        }
        TokenKind::Error => {
            let token = p.cursor.bump()?;
            p.error_at(ErrorCode::E0101.default_message(), token.range(), ErrorCode::E0101);
            Some(Expression::token(token.text, token.range()))
        }
        TokenKind::Ident => {
            if let Some(expr) = try_extra_parsers(p, breaks, opts) {
                return Some(expr);
            }
            parse_name_or_call(p, opts)
        }
        k if k.is_keyword() => {
            if let Some(expr) = try_extra_parsers(p, breaks, opts) {
                return Some(expr);
            }
            if p.cursor.nth(1) == TokenKind::LParen {
                // builtins like length() lex as keywords in some dialects
                return parse_call(p, opts);
            }
            if k.is_datetime_unit() {
                let token = p.cursor.bump()?;
                let mut expr = Expression::token(token.text, token.range());
                glue_datetime_qualifier_tail(p, &mut expr);
                return Some(expr);
            }
            let token = p.cursor.bump()?;
            Some(Expression::token(token.text, token.range()))
        }
        TokenKind::Dot | TokenKind::Colon | TokenKind::At => {
            let token = p.cursor.bump()?;
            Some(Expression::token(token.text, token.range()))
        }
        _ => None,
    }
}

fn try_extra_parsers(
    p: &mut Parser<'_>,
    breaks: &[TokenKind],
    opts: &ExprOptions,
) -> Option<Expression> {
    for parser in &opts.extra_parsers {
        if let Some(expr) = parser(p, breaks, opts) {
            return Some(expr);
        }
    }
    None
}

/// `unit [TO unit]` after `CURRENT`.
fn glue_datetime_qualifier(p: &mut Parser<'_>, expr: &mut Expression) {
    p.cursor.skip_trivia();
    if p.cursor.current_kind().is_datetime_unit() {
        glue_token_into(p, expr);
        glue_datetime_qualifier_tail(p, expr);
    }
}

/// `TO unit` after a leading datetime unit.
fn glue_datetime_qualifier_tail(p: &mut Parser<'_>, expr: &mut Expression) {
    p.cursor.skip_trivia();
    if p.cursor.at(TokenKind::ToKw) && p.cursor.nth(1).is_datetime_unit() {
        glue_token_into(p, expr);
        p.cursor.skip_trivia();
        glue_token_into(p, expr);
    }
}

/// `INTERVAL ( ... ) unit TO unit`; the paren contents are captured raw.
fn parse_interval(p: &mut Parser<'_>) -> Option<Expression> {
    let token = p.cursor.bump()?;
    let mut expr = Expression::token(token.text, token.range());
    p.cursor.skip_trivia();
    if p.cursor.at(TokenKind::LParen) {
        let open = p.cursor.bump()?;
        let start = open.range().start();
        let tokens = capture_balanced(p, TokenKind::LParen, TokenKind::RParen, ErrorCode::E0201);
        let range = TextRange::new(start, p.cursor.last_end());
        expr.append(Expression::new(
            ExprKind::ParenWrapped {
                inner: None,
                opaque: Some(tokens),
            },
            range,
        ));
    } else {
        p.error("expected '(' after INTERVAL", ErrorCode::E0901);
    }
    glue_datetime_qualifier(p, &mut expr);
    Some(expr)
}

/// An embedded `SELECT ...` captured as a raw statement value; stops at a
/// caller break token or an unbalanced `)`.
fn parse_nested_select(p: &mut Parser<'_>, breaks: &[TokenKind]) -> Option<Expression> {
    let select = p.cursor.bump()?;
    let start = select.range().start();
    let mut tokens = vec![SmolStr::from(select.text)];
    let mut depth = 0usize;
    loop {
        p.cursor.skip_trivia();
        let kind = p.cursor.current_kind();
        if kind == TokenKind::Eof {
            break;
        }
        if depth == 0 && breaks.contains(&kind) {
            break;
        }
        match kind {
            TokenKind::LParen => depth += 1,
            TokenKind::RParen => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            }
            _ => {}
        }
        if let Some(token) = p.cursor.bump() {
            tokens.push(token.text.into());
        }
    }
    let range = TextRange::new(start, p.cursor.last_end());
    let stmt = Statement::new(StmtKind::Sql { tokens }, range);
    Some(Expression::new(
        ExprKind::NestedStatement(Box::new(stmt)),
        range,
    ))
}

/// A dotted name (`a.b.c`) or, when a `(` follows, a function call.
fn parse_name_or_call(p: &mut Parser<'_>, opts: &ExprOptions) -> Option<Expression> {
    if p.cursor.nth(1) == TokenKind::LParen {
        return parse_call(p, opts);
    }
    let token = p.cursor.bump()?;
    let mut name = String::from(token.text);
    let mut range = token.range();
    loop {
        p.cursor.skip_trivia();
        if p.cursor.at(TokenKind::Dot) && p.cursor.nth(1) == TokenKind::Ident {
            p.cursor.bump();
            p.cursor.skip_trivia();
            if let Some(part) = p.cursor.bump() {
                name.push('.');
                name.push_str(part.text);
                range = TextRange::new(range.start(), part.range().end());
            }
        } else {
            break;
        }
    }
    if p.cursor.at(TokenKind::LParen) {
        // dotted method form: rec.field.method(...)
        return Some(parse_call_tail(p, name.into(), range, opts));
    }
    Some(Expression::new(ExprKind::Name(name.into()), range))
}

fn parse_call(p: &mut Parser<'_>, opts: &ExprOptions) -> Option<Expression> {
    let token = p.cursor.bump()?;
    Some(parse_call_tail(p, token.text.into(), token.range(), opts))
}

/// Parameters plus an optional one-level dotted member after the closing
/// paren. A missing `)` is reported but never aborts the caller.
fn parse_call_tail(
    p: &mut Parser<'_>,
    name: SmolStr,
    name_range: TextRange,
    opts: &ExprOptions,
) -> Expression {
    p.cursor.skip_trivia();
    p.cursor.bump(); // '('
    let mut params = Vec::new();
    let mut opaque = None;
    if opts.allow_anything_for_params {
        opaque = Some(capture_balanced(
            p,
            TokenKind::LParen,
            TokenKind::RParen,
            ErrorCode::E0201,
        ));
    } else {
        loop {
            p.cursor.skip_trivia();
            if p.cursor.eat(TokenKind::RParen) {
                break;
            }
            if p.cursor.at_eof() {
                p.error(ErrorCode::E0201.default_message(), ErrorCode::E0201);
                break;
            }
            if let Some(param) =
                parse_expression(p, &[TokenKind::Comma, TokenKind::RParen], opts)
            {
                params.push(param);
            }
            p.cursor.skip_trivia();
            if p.cursor.eat(TokenKind::Comma) {
                continue;
            }
            if p.cursor.eat(TokenKind::RParen) {
                break;
            }
            p.error(ErrorCode::E0201.default_message(), ErrorCode::E0201);
            break;
        }
    }

    p.cursor.skip_trivia();
    let mut member = None;
    if p.cursor.at(TokenKind::Dot) {
        p.cursor.bump();
        p.cursor.skip_trivia();
        member = match p.cursor.current_kind() {
            TokenKind::Star => p
                .cursor
                .bump()
                .map(|t| Box::new(Expression::token(t.text, t.range()))),
            TokenKind::Ident => parse_name_or_call(p, opts).map(Box::new),
            _ => {
                p.error("expected a member name after '.'", ErrorCode::E0301);
                None
            }
        };
    }

    let range = TextRange::new(name_range.start(), p.cursor.last_end());
    Expression::new(
        ExprKind::FunctionCall {
            name,
            name_range,
            params,
            member,
            opaque,
        },
        range,
    )
}

fn parse_paren_wrapped(p: &mut Parser<'_>, opts: &ExprOptions) -> Option<Expression> {
    let open = p.cursor.bump()?;
    let start = open.range().start();
    if opts.allow_anything_for_params {
        let tokens = capture_balanced(p, TokenKind::LParen, TokenKind::RParen, ErrorCode::E0201);
        let range = TextRange::new(start, p.cursor.last_end());
        return Some(Expression::new(
            ExprKind::ParenWrapped {
                inner: None,
                opaque: Some(tokens),
            },
            range,
        ));
    }
    p.cursor.skip_trivia();
    let inner = if p.cursor.at(TokenKind::RParen) {
        None
    } else {
        parse_expression(p, &[TokenKind::RParen], opts).map(Box::new)
    };
    p.cursor.skip_trivia();
    if !p.cursor.eat(TokenKind::RParen) {
        p.error(ErrorCode::E0201.default_message(), ErrorCode::E0201);
    }
    let range = TextRange::new(start, p.cursor.last_end());
    Some(Expression::new(
        ExprKind::ParenWrapped {
            inner,
            opaque: None,
        },
        range,
    ))
}

fn parse_bracket_wrapped(p: &mut Parser<'_>, opts: &ExprOptions) -> Option<Expression> {
    let open = p.cursor.bump()?;
    let start = open.range().start();
    if opts.allow_anything_for_params {
        let tokens =
            capture_balanced(p, TokenKind::LBracket, TokenKind::RBracket, ErrorCode::E0202);
        let range = TextRange::new(start, p.cursor.last_end());
        return Some(Expression::new(
            ExprKind::BracketWrapped {
                items: Vec::new(),
                opaque: Some(tokens),
            },
            range,
        ));
    }
    let mut items = Vec::new();
    loop {
        p.cursor.skip_trivia();
        if p.cursor.eat(TokenKind::RBracket) {
            break;
        }
        if p.cursor.at_eof() {
            p.error(ErrorCode::E0202.default_message(), ErrorCode::E0202);
            break;
        }
        if let Some(item) =
            parse_expression(p, &[TokenKind::Comma, TokenKind::RBracket], opts)
        {
            items.push(item);
        }
        p.cursor.skip_trivia();
        if p.cursor.eat(TokenKind::Comma) {
            continue;
        }
        if p.cursor.eat(TokenKind::RBracket) {
            break;
        }
        p.error(ErrorCode::E0202.default_message(), ErrorCode::E0202);
        break;
    }
    let range = TextRange::new(start, p.cursor.last_end());
    Some(Expression::new(
        ExprKind::BracketWrapped {
            items,
            opaque: None,
        },
        range,
    ))
}

/// Consume raw tokens until the matching close delimiter (the opener is
/// already consumed, so depth starts at one). The close delimiter itself is
/// consumed but not captured.
fn capture_balanced(
    p: &mut Parser<'_>,
    open: TokenKind,
    close: TokenKind,
    missing: ErrorCode,
) -> Vec<SmolStr> {
    let mut tokens = Vec::new();
    let mut depth = 1usize;
    loop {
        p.cursor.skip_trivia();
        if p.cursor.at_eof() {
            let range = TextRange::empty(p.cursor.last_end());
            p.error_at(missing.default_message(), range, missing);
            break;
        }
        let kind = p.cursor.current_kind();
        if kind == open {
            depth += 1;
        } else if kind == close {
            depth -= 1;
            if depth == 0 {
                p.cursor.bump();
                break;
            }
        }
        if let Some(token) = p.cursor.bump() {
            tokens.push(SmolStr::from(token.text));
        }
    }
    tokens
}
