#[derive(Debug)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Reached the end of input where another token was required.
    UnexpectedEnd,
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
    },
    /// Found extra tokens after parsing should have completed.
    TrailingTokens {
        /// The first leftover token.
        token: String,
    },
    /// A parameter name appears more than once in a function definition.
    DuplicateParameter {
        /// The repeated parameter name.
        name: String,
    },
    /// A function body reads a name that is not one of its parameters.
    UnknownIdentifier {
        /// The unresolved name.
        name: String,
    },
    /// A call site ran out of input before every parameter received an
    /// argument.
    TooFewArguments {
        /// The name of the function being called.
        function: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedEnd => write!(f, "Unexpected end of input."),

            Self::UnexpectedToken { token } => write!(f, "Unexpected token: {token}."),

            Self::TrailingTokens { token } => {
                write!(f, "Extra tokens after expression. Check your input: {token}")
            },

            Self::DuplicateParameter { name } => {
                write!(f, "Duplicate parameter name: {name}.")
            },

            Self::UnknownIdentifier { name } => write!(f, "Unknown identifier: {name}."),

            Self::TooFewArguments { function } => {
                write!(f, "Too few arguments for function {function}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
