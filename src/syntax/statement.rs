//! Statement nodes
//!
//! Statements are a closed tagged-variant family. Block-bearing variants
//! (`IF`, `MAIN`, `FUNCTION`) carry a decorator range marking the header
//! region that outlining distinguishes from the collapsible body.

use smol_str::SmolStr;
use text_size::TextRange;

use super::expression::Expression;
use super::scope::ScopeTables;

/// A name reference with its source range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRef {
    pub name: SmolStr,
    pub range: TextRange,
}

/// An ordered sequence of nested statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub statements: Vec<Statement>,
    pub range: TextRange,
}

/// `IF cond THEN ... [ELSE ...] END IF`
#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub condition: Option<Expression>,
    pub then_block: Block,
    pub else_block: Option<Block>,
}

/// What a DECLAREd cursor reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclareSource {
    /// Inline SELECT, captured as raw tokens.
    Select(Vec<SmolStr>),
    /// Name of a PREPAREd statement.
    Prepared(SmolStr),
}

/// A declared type form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// `LIKE table.column` (column may be `*`).
    Like { table: SmolStr, column: SmolStr },
    /// Any other type, textual form (`INT`, `CHAR(10)`, ...).
    Plain { text: SmolStr },
}

impl TypeExpr {
    pub fn to_text(&self) -> SmolStr {
        match self {
            TypeExpr::Like { table, column } => SmolStr::from(format!("LIKE {table}.{column}")),
            TypeExpr::Plain { text } => text.clone(),
        }
    }
}

/// A scope-bearing `MAIN ... END MAIN` block.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockScope {
    pub scope: ScopeTables,
    pub body: Block,
}

/// A scope-bearing `FUNCTION name(params) ... END FUNCTION` block.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionBlock {
    pub name: Option<NameRef>,
    pub params: Vec<NameRef>,
    pub scope: ScopeTables,
    pub body: Block,
}

/// One statement node.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub kind: StmtKind,
    /// Half-open byte range; always advanced to the last consumed token so
    /// the tree stays well-formed under error recovery.
    pub range: TextRange,
    /// Outlinable header region, when this construct can fold.
    pub decorator: Option<TextRange>,
}

/// The closed family of statement variants.
#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    /// `LET target = value`
    Let {
        target: Option<Expression>,
        value: Option<Expression>,
    },
    /// `DECLARE name CURSOR FOR ...`
    Declare {
        cursor: Option<NameRef>,
        source: Option<DeclareSource>,
    },
    /// `DEFER INTERRUPT` / `DEFER QUIT`
    Defer { action: Option<NameRef> },
    /// `PREPARE name FROM expr`
    Prepare {
        name: Option<NameRef>,
        source: Option<Expression>,
    },
    /// `SQL ... END SQL` passthrough, or a captured SELECT
    Sql { tokens: Vec<SmolStr> },
    /// `IF ... THEN ... [ELSE ...] END IF`
    If(IfStatement),
    /// `VALIDATE a, b LIKE table.column`
    Validate {
        targets: Vec<NameRef>,
        table: Option<SmolStr>,
        column: Option<SmolStr>,
    },
    /// `CALL f(args) [RETURNING a, b]`
    Call {
        invocation: Option<Expression>,
        returning: Vec<NameRef>,
    },
    /// `RETURN expr, ...`
    Return { values: Vec<Expression> },
    /// `DISPLAY expr, ...`
    Display { values: Vec<Expression> },
    /// `DEFINE a, b type`
    Define {
        names: Vec<NameRef>,
        ty: Option<TypeExpr>,
    },
    /// `TYPE name type`
    TypeDef {
        name: Option<NameRef>,
        ty: Option<TypeExpr>,
    },
    /// `CONSTANT name = value`
    ConstantDef {
        name: Option<NameRef>,
        value: Option<Expression>,
    },
    /// `MAIN ... END MAIN`
    Main(BlockScope),
    /// `FUNCTION name(params) ... END FUNCTION`
    Function(FunctionBlock),
}

impl Statement {
    pub fn new(kind: StmtKind, range: TextRange) -> Self {
        Self {
            kind,
            range,
            decorator: None,
        }
    }

    pub fn with_decorator(mut self, decorator: TextRange) -> Self {
        self.decorator = Some(decorator);
        self
    }

    /// Whether outlining may fold this construct.
    pub fn can_outline(&self) -> bool {
        self.decorator.is_some()
    }

    /// Minimal textual form, used when a statement appears as an
    /// expression value (nested SELECT).
    pub fn to_text(&self) -> String {
        match &self.kind {
            StmtKind::Sql { tokens } => tokens.join(" "),
            _ => String::new(),
        }
    }
}

/// A parsed source module: top-level blocks plus module-scope tables.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Module {
    pub body: Vec<Statement>,
    pub scope: ScopeTables,
    pub range: TextRange,
}

impl Module {
    /// The `MAIN` block, if the module has one.
    pub fn main(&self) -> Option<&BlockScope> {
        self.body.iter().find_map(|stmt| match &stmt.kind {
            StmtKind::Main(block) => Some(block),
            _ => None,
        })
    }

    /// All `FUNCTION` blocks in declaration order.
    pub fn functions(&self) -> impl Iterator<Item = &FunctionBlock> {
        self.body.iter().filter_map(|stmt| match &stmt.kind {
            StmtKind::Function(f) => Some(f),
            _ => None,
        })
    }
}
