use crate::{error::InterpreterError, interpreter::evaluator::core::Evaluator};

/// The evaluator module walks AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions, performs
/// arithmetic, manages variable and function state, and produces results.
/// It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates every AST node kind the parser can produce.
/// - Maintains the global variable table, the call frames resulting from
///   function application, and the function table.
/// - Reports runtime errors such as undefined variables or name
///   collisions.
pub mod evaluator;
/// The lexer module splits a source line into tokens.
///
/// The lexer (tokenizer) reads the raw text of a submission and produces a
/// flat sequence of tokens, each corresponding to a meaningful language
/// element such as a number, identifier, operator, delimiter, or keyword.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Handles numeric literals, identifiers, operators, and the `fn`
///   keyword.
/// - Silently drops characters that match no token rule, so lexing never
///   fails.
pub mod lexer;
/// The parser module turns the token sequence into an AST.
///
/// The parser consumes the tokens produced by the lexer and constructs an
/// abstract syntax tree representing the submitted form, repairing operator
/// precedence as it goes. This is what the evaluator executes.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Applies operator precedence and grouping rules for arithmetic.
/// - Validates function definitions and call arity, reporting errors for
///   malformed input.
pub mod parser;

/// A live interpreter session.
///
/// The session owns the evaluator state, so variables and functions
/// accumulate across submissions. Each line of input runs through the full
/// pipeline: tokenize, parse against the functions defined so far, then
/// evaluate.
pub struct Interpreter {
    evaluator: Evaluator,
}

#[allow(clippy::new_without_default)]
impl Interpreter {
    /// Creates a session with no variables and no functions defined.
    #[must_use]
    pub fn new() -> Self {
        Self { evaluator: Evaluator::new(), }
    }

    /// Submits one line of input and returns its result.
    ///
    /// # Parameters
    /// - `line`: Raw source text of a single submission.
    ///
    /// # Returns
    /// `Some(value)` when the line produces a number, `None` when it does
    /// not, such as for function definitions and blank lines.
    ///
    /// # Errors
    /// An [`InterpreterError`] wrapping the parse or evaluation failure.
    /// A failed submission leaves earlier state intact, so the session
    /// remains usable.
    ///
    /// # Example
    /// ```
    /// use exprima::interpreter::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new();
    ///
    /// assert_eq!(interpreter.submit("x = 7").unwrap(), Some(7.0));
    /// assert_eq!(interpreter.submit("x + 1").unwrap(), Some(8.0));
    /// ```
    pub fn submit(&mut self, line: &str) -> Result<Option<f64>, InterpreterError> {
        let tokens = lexer::tokenize(line);
        let mut iter = tokens.iter().peekable();

        let ast = parser::core::parse(&mut iter, &self.evaluator.functions)?;

        Ok(self.evaluator.eval(&ast)?)
    }
}
