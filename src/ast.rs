use std::fmt;

/// The root of a parsed source text: an ordered sequence of statements.
///
/// `Display` produces the canonical rendering of the program. Rendering is
/// stable under re-parsing: parsing the rendering of a well-formed program and
/// rendering the result again yields the same text.
///
/// # Example
/// ```
/// let (program, errors) = monkey::parse("1 + 2 * 3");
///
/// assert!(errors.is_empty());
/// assert_eq!(program.to_string(), "(1 + (2 * 3))");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

impl Program {
    /// Returns the literal text of the first statement's leading token, or an
    /// empty string for an empty program.
    #[must_use]
    pub fn token_literal(&self) -> String {
        self.statements
            .first()
            .map_or_else(String::new, Statement::token_literal)
    }
}

/// A statement of the language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `let <name> = <value>;`
    Let {
        /// The name being bound.
        name:  Identifier,
        /// The bound expression.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `return <value>;` or a bare `return;`.
    Return {
        /// The returned expression, if any.
        value: Option<Expr>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

impl Statement {
    /// Returns the literal text of the statement's leading token.
    #[must_use]
    pub fn token_literal(&self) -> String {
        match self {
            Self::Let { .. } => "let".to_string(),
            Self::Return { .. } => "return".to_string(),
            Self::Expression { expr, .. } => expr.token_literal(),
        }
    }

    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Let { line, .. } | Self::Return { line, .. } | Self::Expression { line, .. } => {
                *line
            },
        }
    }
}

/// A brace-delimited sequence of statements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockStatement {
    /// Statements inside the block.
    pub statements: Vec<Statement>,
    /// Line number of the opening brace.
    pub line:       usize,
}

impl BlockStatement {
    /// Returns `"{"`, the block's leading token.
    #[must_use]
    pub fn token_literal(&self) -> String {
        "{".to_string()
    }
}

/// A name, either bound by `let`, declared as a parameter, or referenced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    /// The identifier text.
    pub name: String,
    /// Line number in the source code.
    pub line: usize,
}

impl Identifier {
    /// Creates an identifier.
    #[must_use]
    pub fn new(name: impl Into<String>, line: usize) -> Self {
        Self { name: name.into(),
               line }
    }
}

/// A function literal: `fn(<parameters>) { <body> }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionLiteral {
    /// The parameter names, in declaration order.
    pub parameters: Vec<Identifier>,
    /// The function body.
    pub body:       BlockStatement,
    /// Line number in the source code.
    pub line:       usize,
}

/// An expression of the language.
///
/// Each variant models a distinct syntactic construct. Operator nodes keep
/// the source line for runtime error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Reference to a binding by name.
    Identifier(Identifier),
    /// A 64-bit signed integer literal.
    Integer {
        /// The literal value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// `true` or `false`.
    Boolean {
        /// The literal value.
        value: bool,
        /// Line number in the source code.
        line:  usize,
    },
    /// A prefix operation, such as `-x` or `!ok`.
    Prefix {
        /// The operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// An infix operation, such as `a + b`.
    Infix {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `if (<condition>) { ... } else { ... }`.
    If {
        /// The condition expression.
        condition:   Box<Self>,
        /// Block evaluated if the condition is truthy.
        consequence: BlockStatement,
        /// Block evaluated otherwise, if present.
        alternative: Option<BlockStatement>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A function literal.
    Function(FunctionLiteral),
    /// A call expression, `<callee>(<arguments>)`.
    Call {
        /// The called expression: an identifier, a function literal, or any
        /// other expression producing a function.
        callee:    Box<Self>,
        /// Arguments in source order.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expr {
    /// Returns the literal text of the expression's leading token.
    ///
    /// For operator nodes this is the operator symbol, for calls the opening
    /// parenthesis.
    #[must_use]
    pub fn token_literal(&self) -> String {
        match self {
            Self::Identifier(ident) => ident.name.clone(),
            Self::Integer { value, .. } => value.to_string(),
            Self::Boolean { value, .. } => value.to_string(),
            Self::Prefix { op, .. } => op.to_string(),
            Self::Infix { op, .. } => op.to_string(),
            Self::If { .. } => "if".to_string(),
            Self::Function(_) => "fn".to_string(),
            Self::Call { .. } => "(".to_string(),
        }
    }

    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use monkey::ast::{Expr, Identifier};
    ///
    /// let expr = Expr::Identifier(Identifier::new("x", 5));
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Identifier(Identifier { line, .. })
            | Self::Function(FunctionLiteral { line, .. })
            | Self::Integer { line, .. }
            | Self::Boolean { line, .. }
            | Self::Prefix { line, .. }
            | Self::Infix { line, .. }
            | Self::If { line, .. }
            | Self::Call { line, .. } => *line,
        }
    }
}

/// Represents an infix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{Add, Div, Equal, Greater, Less, Mul, NotEqual, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}

/// Writes a statement sequence so that it re-parses into the same sequence.
///
/// `let` and `return` render with their own terminating `;`; an expression
/// statement followed by another statement gets one appended.
fn write_statements(f: &mut fmt::Formatter<'_>, statements: &[Statement]) -> fmt::Result {
    for (i, statement) in statements.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{statement}")?;
        if matches!(statement, Statement::Expression { .. }) && i + 1 < statements.len() {
            write!(f, ";")?;
        }
    }
    Ok(())
}

fn write_comma_separated<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statements(f, &self.statements)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value, .. } => write!(f, "let {name} = {value};"),
            Self::Return { value: Some(value),
                           .. } => write!(f, "return {value};"),
            Self::Return { value: None, .. } => write!(f, "return;"),
            Self::Expression { expr, .. } => write!(f, "{expr}"),
        }
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.statements.is_empty() {
            return write!(f, "{{ }}");
        }
        write!(f, "{{ ")?;
        write_statements(f, &self.statements)?;
        write!(f, " }}")
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fn(")?;
        write_comma_separated(f, &self.parameters)?;
        write!(f, ") {}", self.body)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(ident) => write!(f, "{ident}"),
            Self::Integer { value, .. } => write!(f, "{value}"),
            Self::Boolean { value, .. } => write!(f, "{value}"),
            Self::Prefix { op, operand, .. } => write!(f, "({op}{operand})"),
            Self::Infix { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::If { condition,
                       consequence,
                       alternative,
                       .. } => {
                write!(f, "if ({condition}) {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            },
            Self::Function(literal) => write!(f, "{literal}"),
            Self::Call { callee, arguments, .. } => {
                write!(f, "{callee}(")?;
                write_comma_separated(f, arguments)?;
                write!(f, ")")
            },
        }
    }
}
