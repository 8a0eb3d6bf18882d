//! Logos-based lexer for Genero 4GL
//!
//! Fast tokenization using the logos crate. Keywords are matched
//! case-insensitively; two-character operators (`<=`, `>=`, `<>`, `!=`,
//! `==`, `||`) are lexed as single merged tokens.

use super::token_kind::TokenKind;
use logos::Logos;
use text_size::{TextRange, TextSize};

/// A token with its kind, text, and position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Token<'_> {
    /// Source range covered by this token (half-open).
    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, TextSize::of(self.text))
    }
}

/// Lexer wrapping the logos-generated tokenizer.
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => TokenKind::Error,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to TokenKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"#[^\n]*")]
    #[regex(r"--[^\n]*")]
    LineComment,

    #[regex(r"\{[^}]*\}")]
    BlockComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[regex(r"[0-9]+")]
    Integer,

    #[regex(r"[0-9]*\.[0-9]+([eE][+-]?[0-9]+)?")]
    Decimal,

    #[regex(r#""([^"\\]|\\.)*""#)]
    #[regex(r"'([^'\\]|\\.)*'")]
    String,

    // =========================================================================
    // MULTI-CHARACTER OPERATORS (must come before single-char)
    // =========================================================================
    #[token("==")]
    EqEq,

    #[token("<=")]
    LtEq,

    #[token(">=")]
    GtEq,

    #[token("<>")]
    LtGt,

    #[token("!=")]
    BangEq,

    #[token("||")]
    PipePipe,

    // =========================================================================
    // SINGLE-CHARACTER OPERATORS AND PUNCTUATION
    // =========================================================================
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("=")]
    Eq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("|")]
    Pipe,
    #[token("!")]
    Bang,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token("@")]
    At,
    #[token("?")]
    Question,

    // =========================================================================
    // KEYWORDS (case-insensitive, longest match wins in logos)
    // =========================================================================
    #[token("and", ignore(ascii_case))]
    AndKw,
    #[token("as", ignore(ascii_case))]
    AsKw,
    #[token("ascii", ignore(ascii_case))]
    AsciiKw,
    #[token("between", ignore(ascii_case))]
    BetweenKw,
    #[token("call", ignore(ascii_case))]
    CallKw,
    #[token("clipped", ignore(ascii_case))]
    ClippedKw,
    #[token("column", ignore(ascii_case))]
    ColumnKw,
    #[token("constant", ignore(ascii_case))]
    ConstantKw,
    #[token("current", ignore(ascii_case))]
    CurrentKw,
    #[token("cursor", ignore(ascii_case))]
    CursorKw,
    #[token("day", ignore(ascii_case))]
    DayKw,
    #[token("declare", ignore(ascii_case))]
    DeclareKw,
    #[token("defer", ignore(ascii_case))]
    DeferKw,
    #[token("define", ignore(ascii_case))]
    DefineKw,
    #[token("display", ignore(ascii_case))]
    DisplayKw,
    #[token("else", ignore(ascii_case))]
    ElseKw,
    #[token("end", ignore(ascii_case))]
    EndKw,
    #[token("for", ignore(ascii_case))]
    ForKw,
    #[token("fraction", ignore(ascii_case))]
    FractionKw,
    #[token("from", ignore(ascii_case))]
    FromKw,
    #[token("function", ignore(ascii_case))]
    FunctionKw,
    #[token("hour", ignore(ascii_case))]
    HourKw,
    #[token("if", ignore(ascii_case))]
    IfKw,
    #[token("in", ignore(ascii_case))]
    InKw,
    #[token("instance", ignore(ascii_case))]
    InstanceKw,
    #[token("interval", ignore(ascii_case))]
    IntervalKw,
    #[token("is", ignore(ascii_case))]
    IsKw,
    #[token("let", ignore(ascii_case))]
    LetKw,
    #[token("like", ignore(ascii_case))]
    LikeKw,
    #[token("main", ignore(ascii_case))]
    MainKw,
    #[token("matches", ignore(ascii_case))]
    MatchesKw,
    #[token("minute", ignore(ascii_case))]
    MinuteKw,
    #[token("mod", ignore(ascii_case))]
    ModKw,
    #[token("month", ignore(ascii_case))]
    MonthKw,
    #[token("not", ignore(ascii_case))]
    NotKw,
    #[token("null", ignore(ascii_case))]
    NullKw,
    #[token("of", ignore(ascii_case))]
    OfKw,
    #[token("or", ignore(ascii_case))]
    OrKw,
    #[token("prepare", ignore(ascii_case))]
    PrepareKw,
    #[token("record", ignore(ascii_case))]
    RecordKw,
    #[token("return", ignore(ascii_case))]
    ReturnKw,
    #[token("returning", ignore(ascii_case))]
    ReturningKw,
    #[token("second", ignore(ascii_case))]
    SecondKw,
    #[token("select", ignore(ascii_case))]
    SelectKw,
    #[token("spaces", ignore(ascii_case))]
    SpacesKw,
    #[token("sql", ignore(ascii_case))]
    SqlKw,
    #[token("then", ignore(ascii_case))]
    ThenKw,
    #[token("through", ignore(ascii_case))]
    ThroughKw,
    #[token("thru", ignore(ascii_case))]
    ThruKw,
    #[token("to", ignore(ascii_case))]
    ToKw,
    #[token("type", ignore(ascii_case))]
    TypeKw,
    #[token("units", ignore(ascii_case))]
    UnitsKw,
    #[token("using", ignore(ascii_case))]
    UsingKw,
    #[token("validate", ignore(ascii_case))]
    ValidateKw,
    #[token("year", ignore(ascii_case))]
    YearKw,
}

impl From<LogosToken> for TokenKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            // Trivia
            Whitespace => TokenKind::Whitespace,
            LineComment => TokenKind::LineComment,
            BlockComment => TokenKind::BlockComment,

            // Literals
            Ident => TokenKind::Ident,
            Integer => TokenKind::Integer,
            Decimal => TokenKind::Decimal,
            String => TokenKind::StringLit,

            // Operators
            EqEq => TokenKind::EqEq,
            LtEq => TokenKind::LtEq,
            GtEq => TokenKind::GtEq,
            LtGt => TokenKind::LtGt,
            BangEq => TokenKind::BangEq,
            PipePipe => TokenKind::PipePipe,
            Plus => TokenKind::Plus,
            Minus => TokenKind::Minus,
            Star => TokenKind::Star,
            Slash => TokenKind::Slash,
            Eq => TokenKind::Eq,
            Lt => TokenKind::Lt,
            Gt => TokenKind::Gt,
            Pipe => TokenKind::Pipe,
            Bang => TokenKind::Bang,

            // Punctuation
            LParen => TokenKind::LParen,
            RParen => TokenKind::RParen,
            LBracket => TokenKind::LBracket,
            RBracket => TokenKind::RBracket,
            Comma => TokenKind::Comma,
            Dot => TokenKind::Dot,
            Semicolon => TokenKind::Semicolon,
            Colon => TokenKind::Colon,
            At => TokenKind::At,
            Question => TokenKind::Question,

            // Keywords
            AndKw => TokenKind::AndKw,
            AsKw => TokenKind::AsKw,
            AsciiKw => TokenKind::AsciiKw,
            BetweenKw => TokenKind::BetweenKw,
            CallKw => TokenKind::CallKw,
            ClippedKw => TokenKind::ClippedKw,
            ColumnKw => TokenKind::ColumnKw,
            ConstantKw => TokenKind::ConstantKw,
            CurrentKw => TokenKind::CurrentKw,
            CursorKw => TokenKind::CursorKw,
            DayKw => TokenKind::DayKw,
            DeclareKw => TokenKind::DeclareKw,
            DeferKw => TokenKind::DeferKw,
            DefineKw => TokenKind::DefineKw,
            DisplayKw => TokenKind::DisplayKw,
            ElseKw => TokenKind::ElseKw,
            EndKw => TokenKind::EndKw,
            ForKw => TokenKind::ForKw,
            FractionKw => TokenKind::FractionKw,
            FromKw => TokenKind::FromKw,
            FunctionKw => TokenKind::FunctionKw,
            HourKw => TokenKind::HourKw,
            IfKw => TokenKind::IfKw,
            InKw => TokenKind::InKw,
            InstanceKw => TokenKind::InstanceKw,
            IntervalKw => TokenKind::IntervalKw,
            IsKw => TokenKind::IsKw,
            LetKw => TokenKind::LetKw,
            LikeKw => TokenKind::LikeKw,
            MainKw => TokenKind::MainKw,
            MatchesKw => TokenKind::MatchesKw,
            MinuteKw => TokenKind::MinuteKw,
            ModKw => TokenKind::ModKw,
            MonthKw => TokenKind::MonthKw,
            NotKw => TokenKind::NotKw,
            NullKw => TokenKind::NullKw,
            OfKw => TokenKind::OfKw,
            OrKw => TokenKind::OrKw,
            PrepareKw => TokenKind::PrepareKw,
            RecordKw => TokenKind::RecordKw,
            ReturnKw => TokenKind::ReturnKw,
            ReturningKw => TokenKind::ReturningKw,
            SecondKw => TokenKind::SecondKw,
            SelectKw => TokenKind::SelectKw,
            SpacesKw => TokenKind::SpacesKw,
            SqlKw => TokenKind::SqlKw,
            ThenKw => TokenKind::ThenKw,
            ThroughKw => TokenKind::ThroughKw,
            ThruKw => TokenKind::ThruKw,
            ToKw => TokenKind::ToKw,
            TypeKw => TokenKind::TypeKw,
            UnitsKw => TokenKind::UnitsKw,
            UsingKw => TokenKind::UsingKw,
            ValidateKw => TokenKind::ValidateKw,
            YearKw => TokenKind::YearKw,
        }
    }
}
