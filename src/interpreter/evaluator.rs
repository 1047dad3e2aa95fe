/// Core evaluation logic.
///
/// Contains the main evaluation engine: the dispatch over expression nodes,
/// arithmetic, assignment, function registration, and function calls.
pub mod core;

/// Variable storage.
///
/// Holds the global variable table and the per-call frames, with
/// innermost-first lookup.
pub mod env;
