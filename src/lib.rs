//! # exprima
//!
//! exprima is a minimal expression language interpreter written in Rust.
//! It tokenizes, parses, and evaluates arithmetic expressions with support
//! for variables and user-defined functions that persist across the lines
//! of a session.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::InterpreterError, interpreter::Interpreter};

/// Defines the tree structure of parsed expressions.
///
/// This module declares the `Expr` enum and related types that represent
/// the syntactic structure of a submitted line as a tree. The AST is built
/// by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression types for all language constructs.
/// - Defines the binary operator set and its precedence classes.
/// - Keeps parsed forms immutable so the evaluator can walk them freely.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that a submission can raise while being
/// parsed or evaluated. It standardizes error reporting and attaches the
/// detail needed for user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Attaches the offending token or name to each failure.
/// - Supports integration with standard error handling traits and
///   reporting utilities.
pub mod error;
/// Orchestrates the interpretation pipeline.
///
/// This module ties together lexing, parsing, and evaluation to provide a
/// complete runtime for submitted lines. It exposes the public API for
/// interpreting expressions or whole programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, and evaluator.
/// - Provides the session type that feeds input through the pipeline.
/// - Carries results and errors from one phase to the next.
pub mod interpreter;

/// Returns the final evaluation result after executing a whole source.
///
/// This function feeds the source to a fresh interpreter session line by
/// line. The result is the value of the last line that produced one, or
/// `None` when no line did, for example when the source holds only
/// function definitions.
///
/// # Errors
/// Returns the first parse or evaluation error encountered; the remaining
/// lines are not executed.
///
/// # Examples
/// ```
/// use exprima::evaluate;
///
/// // Variables persist from one line to the next.
/// let result = evaluate("x = 2\nx * 3");
/// assert_eq!(result.unwrap(), Some(6.0));
///
/// // Example with an intentional error: 'y' is not defined.
/// assert!(evaluate("y + 1").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<Option<f64>, InterpreterError> {
    let mut interpreter = Interpreter::new();

    let mut result = None;
    for line in source.lines() {
        let value = interpreter.submit(line)?;
        if value.is_some() {
            result = value;
        }
    }

    Ok(result)
}
