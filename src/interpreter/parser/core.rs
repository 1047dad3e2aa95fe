use std::{collections::HashMap, iter::Peekable};

use crate::{
    ast::{Expr, FunctionDef},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{expr::parse_expression, function::parse_function_def},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses one complete submission.
///
/// Dispatches on the first token and then requires the whole token queue to
/// be consumed: input left over after a complete form is an error, not a
/// second form.
///
/// # Parameters
/// - `tokens`: Token iterator over the submitted line.
/// - `functions`: The currently defined functions; read so identifiers that
///   name functions parse as call sites.
///
/// # Returns
/// The parsed form. A blank line parses to `Expr::Empty`.
///
/// # Errors
/// - `TrailingTokens` if input remains after a complete form.
/// - Propagates any errors from form parsing.
pub fn parse<'a, I>(tokens: &mut Peekable<I>,
                    functions: &HashMap<String, FunctionDef>)
                    -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let form = parse_form(tokens, functions)?;

    if let Some(token) = tokens.next() {
        return Err(ParseError::TrailingTokens { token: token.to_string() });
    }

    Ok(form)
}

/// Parses one form without the trailing-input check.
///
/// A form is either nothing at all (`Expr::Empty`), a function definition,
/// or an expression. Call arguments re-enter the parser here, so an argument
/// position accepts any form.
///
/// # Parameters
/// - `tokens`: Token iterator for the remaining input.
/// - `functions`: The currently defined functions.
///
/// # Returns
/// The parsed form.
pub fn parse_form<'a, I>(tokens: &mut Peekable<I>,
                         functions: &HashMap<String, FunctionDef>)
                         -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    match tokens.peek() {
        None => Ok(Expr::Empty),
        Some(Token::Fn) => parse_function_def(tokens, functions),
        Some(_) => parse_expression(tokens, functions),
    }
}
