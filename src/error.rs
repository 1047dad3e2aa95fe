/// Parsing errors.
///
/// Defines all error types that can occur while parsing a submitted line:
/// unexpected or leftover tokens, malformed definitions, and call sites that
/// run out of arguments. The tokenizer itself cannot fail, so there are no
/// lexical error types.
pub mod parse_error;

/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating a parsed
/// line: unresolved names, namespace collisions between variables and
/// functions, and value-less operands.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;

#[derive(Debug)]
/// Represents any error a submission can produce.
///
/// Both parse-stage and evaluation-stage failures funnel through this single
/// type, so callers of `submit` handle one error surface.
pub enum InterpreterError {
    /// The line failed to parse.
    Parse(ParseError),
    /// The line parsed but failed to evaluate.
    Eval(EvalError),
}

impl From<ParseError> for InterpreterError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<EvalError> for InterpreterError {
    fn from(error: EvalError) -> Self {
        Self::Eval(error)
    }
}

impl std::fmt::Display for InterpreterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(error) => write!(f, "{error}"),
            Self::Eval(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for InterpreterError {}
