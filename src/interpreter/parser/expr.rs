use std::{collections::HashMap, iter::Peekable};

use crate::{
    ast::{BinaryOperator, Expr, FunctionDef},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_form},
            function::parse_function_def,
        },
    },
};

/// Parses an expression.
///
/// One atom is parsed first. If an operator follows, everything after it is
/// parsed greedily as a single right-hand side, and a re-association step
/// then joins the two halves, repairing the places where the greedy parse
/// grouped too far to the right.
///
/// # Parameters
/// - `tokens`: Token iterator for the remaining input.
/// - `functions`: The currently defined functions; read so identifiers that
///   name functions parse as call sites.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// - `UnexpectedEnd` if input ends where an atom was required.
/// - `UnexpectedToken` if no atom can start at the next token.
/// - Propagates any errors from nested parsing.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>,
                               functions: &HashMap<String, FunctionDef>)
                               -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let left = parse_atom(tokens, functions)?;

    let Some(token) = tokens.peek() else {
        return Ok(left);
    };
    let Some(op) = token_to_binary_operator(token) else {
        return Ok(left);
    };
    tokens.next();

    let right = parse_expression(tokens, functions)?;

    Ok(combine(op, left, right))
}

/// Maps an operator token to its binary operator.
///
/// # Parameters
/// - `token`: The token to translate.
///
/// # Returns
/// The corresponding operator, or `None` for any non-operator token.
///
/// # Example
/// ```
/// use exprima::{ast::BinaryOperator,
///               interpreter::{lexer::Token, parser::expr::token_to_binary_operator}};
///
/// assert_eq!(token_to_binary_operator(&Token::Plus), Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        _ => None,
    }
}

/// Joins a left atom and a greedily parsed right-hand side.
///
/// The right-hand side holds everything to the end of the expression, so the
/// fresh operator starts out above the right-hand tree even when it must
/// bind first. A single re-association covers the two cases the greedy parse
/// gets wrong: the fresh operator is multiplicative, or the right-hand root
/// is additive (equal precedence has to group left-to-right). In both the
/// left atom sinks into the right tree's leftmost slot and the right root
/// becomes the result; otherwise the fresh operator is simply the new root.
fn combine(op: BinaryOperator, left: Expr, right: Expr) -> Expr {
    match right {
        Expr::BinaryOp { op: right_op,
                         left: right_left,
                         right: right_right, } if should_rotate(op, right_op) => {
            let sunk = Expr::BinaryOp { op,
                                        left: Box::new(left),
                                        right: right_left };
            Expr::BinaryOp { op:    right_op,
                             left:  Box::new(sunk),
                             right: right_right, }
        },
        _ => Expr::BinaryOp { op,
                              left: Box::new(left),
                              right: Box::new(right) },
    }
}

/// Decides whether [`combine`] must re-associate.
const fn should_rotate(op: BinaryOperator, right_op: BinaryOperator) -> bool {
    op.is_multiplicative() || right_op.is_additive()
}

/// Parses a single atom.
///
/// Atoms are the operands of binary expressions: number literals,
/// assignments, calls, plain identifiers, parenthesized groups, and nested
/// function definitions.
fn parse_atom<'a, I>(tokens: &mut Peekable<I>,
                     functions: &HashMap<String, FunctionDef>)
                     -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    match tokens.peek() {
        Some(Token::Number(_)) => parse_number(tokens),
        Some(Token::Identifier(_)) => parse_identifier_expr(tokens, functions),
        Some(Token::LParen) => parse_group(tokens, functions),
        Some(Token::Fn) => parse_function_def(tokens, functions),
        Some(token) => Err(ParseError::UnexpectedToken { token: token.to_string() }),
        None => Err(ParseError::UnexpectedEnd),
    }
}

/// Parses a number literal atom.
fn parse_number<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(Token::Number(value)) = tokens.next() {
        Ok(Expr::Number(*value))
    } else {
        unreachable!()
    }
}

/// Parses an atom that starts with an identifier.
///
/// `name = value` is an assignment; a name registered as a function begins a
/// call; anything else is a plain variable reference. Assignment wins over
/// the call reading, so a function name left of `=` still reaches the
/// collision check during evaluation.
fn parse_identifier_expr<'a, I>(tokens: &mut Peekable<I>,
                                functions: &HashMap<String, FunctionDef>)
                                -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut lookahead = tokens.clone();
    lookahead.next();
    if let Some(Token::Equals) = lookahead.peek() {
        return parse_assignment(tokens, functions);
    }

    let name = if let Some(Token::Identifier(n)) = tokens.next() {
        n.clone()
    } else {
        unreachable!()
    };

    if let Some(def) = functions.get(&name) {
        return parse_call(tokens, functions, &name, &def.params);
    }

    Ok(Expr::Identifier(name))
}

/// Parses `name = value`.
///
/// The value is a full expression, so chained forms like `x = y = 1` bind
/// rightward: the inner assignment runs first and its value feeds the outer
/// one.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>,
                           functions: &HashMap<String, FunctionDef>)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let name = if let Some(Token::Identifier(n)) = tokens.next() {
        n.clone()
    } else {
        unreachable!()
    };
    tokens.next();

    let value = parse_expression(tokens, functions)?;

    Ok(Expr::Assignment { name,
                          value: Box::new(value) })
}

/// Parses a parenthesized group.
///
/// The inner expression is parsed in full and the matching `)` is required.
fn parse_group<'a, I>(tokens: &mut Peekable<I>,
                      functions: &HashMap<String, FunctionDef>)
                      -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    tokens.next();

    let child = parse_expression(tokens, functions)?;

    match tokens.next() {
        Some(Token::RParen) => Ok(Expr::Group(Box::new(child))),
        Some(token) => Err(ParseError::UnexpectedToken { token: token.to_string() }),
        None => Err(ParseError::UnexpectedEnd),
    }
}

/// Parses the arguments of a call to `name`.
///
/// The function name has already been consumed. One argument is parsed per
/// declared parameter, back to back; there is no argument list syntax, so
/// parentheses around an argument are ordinary grouping. Each argument parse
/// is greedy, which makes `double 3 + 1` read as `double (3 + 1)`.
///
/// # Errors
/// - `TooFewArguments` if input runs out before every parameter has an
///   argument.
/// - Propagates any errors from argument parsing.
fn parse_call<'a, I>(tokens: &mut Peekable<I>,
                     functions: &HashMap<String, FunctionDef>,
                     name: &str,
                     params: &[String])
                     -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut args = Vec::with_capacity(params.len());
    for param in params {
        if tokens.peek().is_none() {
            return Err(ParseError::TooFewArguments { function: name.to_string() });
        }
        args.push((param.clone(), parse_form(tokens, functions)?));
    }

    Ok(Expr::Call { name: name.to_string(),
                    args })
}
