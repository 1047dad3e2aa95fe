/// An abstract syntax tree (AST) node representing one parsed form.
///
/// `Expr` covers everything a submitted line can contain: numeric literals,
/// variable references, assignments, arithmetic, grouping, function
/// definitions, and function calls. A blank submission parses to `Empty`.
/// Nodes carry no source positions; errors quote the offending tokens
/// instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `3`, `2.5`, or `.5`.
    Number(f64),
    /// Reference to a variable by name.
    Identifier(String),
    /// Binding of a value to a global variable name.
    Assignment {
        /// The variable name being written.
        name:  String,
        /// The expression producing the stored value.
        value: Box<Self>,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// A parenthesized expression, kept as its own node so the tree records
    /// where grouping occurred.
    Group(Box<Self>),
    /// A function definition. Definitions are atoms, so they may appear
    /// nested inside larger expressions.
    Function(FunctionDef),
    /// A call to an already defined function.
    Call {
        /// The function name.
        name: String,
        /// One argument expression per declared parameter, in order.
        args: Vec<(String, Self)>,
    },
    /// A blank submission; evaluates to no value.
    Empty,
}

/// Represents a user-defined function definition.
///
/// A function binds an ordered list of parameter names to a single expression
/// body. The body may only read names declared as parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, in declaration order.
    pub params: Vec<String>,
    /// The body expression evaluated when the function is called.
    pub body:   Box<Expr>,
}

/// Represents a binary arithmetic operator.
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
    /// Remainder (`%`)
    Mod,
}

impl BinaryOperator {
    /// Whether the operator belongs to the multiplicative class.
    ///
    /// # Example
    /// ```
    /// use exprima::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Mod.is_multiplicative());
    /// assert!(!BinaryOperator::Sub.is_multiplicative());
    /// ```
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div | Self::Mod)
    }

    /// Whether the operator belongs to the additive class.
    #[must_use]
    pub const fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        };
        write!(f, "{operator}")
    }
}
