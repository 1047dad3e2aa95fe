#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum EvalError {
    /// Tried to read an undefined variable.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called a function that is not defined.
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// Variables and functions may not share a name, in either direction.
    NameCollision {
        /// The contested name.
        name: String,
    },
    /// An expression produced no value in a position that requires one, such
    /// as a function definition used as an operand.
    MissingValue,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "Undefined variable: {name}."),

            Self::UnknownFunction { name } => write!(f, "Unknown function: {name}."),

            Self::NameCollision { name } => {
                write!(f, "Name collision: {name} already names a variable or a function.")
            },

            Self::MissingValue => {
                write!(f, "Expression produced no value where one was required.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
