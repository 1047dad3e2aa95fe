/// Top-level parse entry points.
///
/// Dispatches a submission to definition or expression parsing and rejects
/// leftover input after a complete form.
pub mod core;

/// Expression parsing.
///
/// Contains the atom dispatch, assignment and grouping, call-site argument
/// parsing, and the greedy right-hand descent with its re-association step.
pub mod expr;

/// Function definition parsing.
///
/// Handles the `fn name params => body` form: parameter collection,
/// duplicate rejection, and the body identifier check.
pub mod function;
