use std::{collections::HashMap, iter::Peekable};

use crate::{
    ast::{Expr, FunctionDef},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, expr::parse_expression},
    },
};

/// Parses a function definition.
///
/// Syntax:
/// ```text
///     fn <name> <param>* => <body>
/// ```
/// The parameter list runs up to the arrow and may be empty. The body is a
/// single expression. Parameter names must be distinct, and every identifier
/// the body reads must be a parameter; both rules are enforced here, at
/// parse time. The definition only enters the function table when it is
/// evaluated, which is why a body can never call the function it is
/// defining.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `fn` keyword.
/// - `functions`: The currently defined functions; read while parsing the
///   body, where an existing function name is a call site.
///
/// # Returns
/// An `Expr::Function` node carrying the definition.
///
/// # Errors
/// - `UnexpectedToken` or `UnexpectedEnd` if the name, parameter list, or
///   arrow is malformed.
/// - `DuplicateParameter` if a parameter name repeats.
/// - `UnknownIdentifier` if the body reads a name that is not a parameter.
pub fn parse_function_def<'a, I>(tokens: &mut Peekable<I>,
                                 functions: &HashMap<String, FunctionDef>)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    tokens.next();

    let name = match tokens.next() {
        Some(Token::Identifier(n)) => n.clone(),
        Some(token) => return Err(ParseError::UnexpectedToken { token: token.to_string() }),
        None => return Err(ParseError::UnexpectedEnd),
    };

    let params = parse_params(tokens)?;

    let body = parse_expression(tokens, functions)?;
    validate_identifiers(&params, &body)?;

    Ok(Expr::Function(FunctionDef { name,
                                    params,
                                    body: Box::new(body) }))
}

/// Parses the parameter list of a definition, consuming the closing arrow.
///
/// Every token up to `=>` must be an identifier. A repeated name is rejected
/// as soon as it is seen.
fn parse_params<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<String>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut params = Vec::new();
    loop {
        match tokens.next() {
            Some(Token::Arrow) => break,
            Some(Token::Identifier(name)) => {
                if params.contains(name) {
                    return Err(ParseError::DuplicateParameter { name: name.clone() });
                }
                params.push(name.clone());
            },
            Some(token) => return Err(ParseError::UnexpectedToken { token: token.to_string() }),
            None => return Err(ParseError::UnexpectedEnd),
        }
    }

    Ok(params)
}

/// Checks that a definition body only reads its own parameters.
///
/// The walk is pre-order, left before right, and reports the first
/// offending name. Assignment targets are writes rather than reads, so only
/// the assigned value is walked. Nested definitions are skipped; their own
/// parse has already validated them against their own parameters.
///
/// # Errors
/// `UnknownIdentifier` naming the first body identifier that is not a
/// declared parameter.
fn validate_identifiers(params: &[String], body: &Expr) -> ParseResult<()> {
    match body {
        Expr::Identifier(name) if !params.contains(name) => {
            Err(ParseError::UnknownIdentifier { name: name.clone() })
        },
        Expr::Assignment { value, .. } => validate_identifiers(params, value),
        Expr::BinaryOp { left, right, .. } => {
            validate_identifiers(params, left)?;
            validate_identifiers(params, right)
        },
        Expr::Group(child) => validate_identifiers(params, child),
        Expr::Call { args, .. } => {
            for (_, arg) in args {
                validate_identifiers(params, arg)?;
            }
            Ok(())
        },
        _ => Ok(()),
    }
}
