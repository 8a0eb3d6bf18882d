//! Token kinds for Genero 4GL
//!
//! This enum defines all token kinds produced by the lexer. Operators and
//! keywords each occupy a contiguous sub-range so category membership is a
//! single range check.

/// All token kinds in Genero 4GL.
///
/// Keywords are matched case-insensitively by the lexer (`LET` ≡ `let`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum TokenKind {
    // =========================================================================
    // TRIVIA (whitespace and comments)
    // =========================================================================
    Whitespace = 0,
    LineComment,  // # ... or -- ...
    BlockComment, // { ... }

    // =========================================================================
    // LITERALS
    // =========================================================================
    Ident,     // identifier
    Integer,   // 42
    Decimal,   // 3.14
    StringLit, // "hello" or 'hello'

    // =========================================================================
    // OPERATORS (contiguous: Plus ..= Bang)
    // =========================================================================
    Plus,     // +
    Minus,    // -
    Star,     // * (also the wildcard/placeholder form)
    Slash,    // /
    Eq,       // =
    EqEq,     // ==
    LtEq,     // <=
    GtEq,     // >=
    LtGt,     // <>
    BangEq,   // !=
    Lt,       // <
    Gt,       // >
    PipePipe, // || (concatenation)
    Pipe,     // | (only valid as the first half of ||)
    Bang,     // ! (only valid as the first half of !=)

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    LParen,    // (
    RParen,    // )
    LBracket,  // [
    RBracket,  // ]
    Comma,     // ,
    Dot,       // .
    Semicolon, // ;
    Colon,     // :
    At,        // @
    Question,  // ? (placeholder)

    // =========================================================================
    // KEYWORDS (contiguous: AndKw ..= YearKw)
    // =========================================================================
    AndKw,
    AsKw,
    AsciiKw,
    BetweenKw,
    CallKw,
    ClippedKw,
    ColumnKw,
    ConstantKw,
    CurrentKw,
    CursorKw,
    DayKw,
    DeclareKw,
    DeferKw,
    DefineKw,
    DisplayKw,
    ElseKw,
    EndKw,
    ForKw,
    FractionKw,
    FromKw,
    FunctionKw,
    HourKw,
    IfKw,
    InKw,
    InstanceKw,
    IntervalKw,
    IsKw,
    LetKw,
    LikeKw,
    MainKw,
    MatchesKw,
    MinuteKw,
    ModKw,
    MonthKw,
    NotKw,
    NullKw,
    OfKw,
    OrKw,
    PrepareKw,
    RecordKw,
    ReturnKw,
    ReturningKw,
    SecondKw,
    SelectKw,
    SpacesKw,
    SqlKw,
    ThenKw,
    ThroughKw,
    ThruKw,
    ToKw,
    TypeKw,
    UnitsKw,
    UsingKw,
    ValidateKw,
    YearKw,

    // =========================================================================
    // SPECIAL
    // =========================================================================
    Error,
    Eof,

    #[doc(hidden)]
    __LAST,
}

impl TokenKind {
    /// Check if this is a trivia token (whitespace or comment).
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::LineComment | Self::BlockComment)
    }

    /// Check if this is an operator token (single range check).
    pub fn is_operator(self) -> bool {
        (self as u16) >= (Self::Plus as u16) && (self as u16) <= (Self::Bang as u16)
    }

    /// Check if this is a keyword.
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::AndKw as u16) && (self as u16) <= (Self::YearKw as u16)
    }

    /// Check if this is a literal token.
    pub fn is_literal(self) -> bool {
        matches!(self, Self::Ident | Self::Integer | Self::Decimal | Self::StringLit)
    }

    /// Check if this is a date/time qualifier unit (`YEAR`, `MONTH`, ...).
    pub fn is_datetime_unit(self) -> bool {
        matches!(
            self,
            Self::YearKw
                | Self::MonthKw
                | Self::DayKw
                | Self::HourKw
                | Self::MinuteKw
                | Self::SecondKw
                | Self::FractionKw
        )
    }

    /// Human-readable name used in diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Whitespace => "whitespace",
            Self::LineComment | Self::BlockComment => "comment",
            Self::Ident => "identifier",
            Self::Integer => "integer literal",
            Self::Decimal => "decimal literal",
            Self::StringLit => "string literal",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::Eq => "'='",
            Self::EqEq => "'=='",
            Self::LtEq => "'<='",
            Self::GtEq => "'>='",
            Self::LtGt => "'<>'",
            Self::BangEq => "'!='",
            Self::Lt => "'<'",
            Self::Gt => "'>'",
            Self::PipePipe => "'||'",
            Self::Pipe => "'|'",
            Self::Bang => "'!'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::Comma => "','",
            Self::Dot => "'.'",
            Self::Semicolon => "';'",
            Self::Colon => "':'",
            Self::At => "'@'",
            Self::Question => "'?'",
            Self::Error => "invalid token",
            Self::Eof => "end of file",
            _ => {
                if self.is_keyword() {
                    "keyword"
                } else {
                    "token"
                }
            }
        }
    }
}
