use std::fs;

use exprima::{
    ast::Expr,
    error::{EvalError, InterpreterError, ParseError},
    evaluate,
    interpreter::{
        Interpreter,
        evaluator::core::Evaluator,
        lexer::{Token, tokenize},
    },
};

fn assert_value(source: &str, expected: f64) {
    match evaluate(source) {
        Ok(Some(value)) => {
            assert_eq!(value, expected, "Script produced the wrong value: {source}");
        },
        Ok(None) => panic!("Script produced no value: {source}"),
        Err(e) => panic!("Script failed: {source}\nError: {e}"),
    }
}

fn assert_no_value(source: &str) {
    match evaluate(source) {
        Ok(None) => {},
        Ok(Some(value)) => panic!("Script produced {value} but no value was expected: {source}"),
        Err(e) => panic!("Script failed: {source}\nError: {e}"),
    }
}

fn eval_error(source: &str) -> InterpreterError {
    match evaluate(source) {
        Ok(value) => panic!("Script succeeded with {value:?} but was expected to fail: {source}"),
        Err(e) => e,
    }
}

#[test]
fn tokenizes_simple_addition() {
    assert_eq!(tokenize("1 + 1"),
               vec![Token::Number(1.0), Token::Plus, Token::Number(1.0)]);
    assert!(tokenize("").is_empty());
}

#[test]
fn lexing_never_fails() {
    // Unmatched characters are dropped, commas are separators.
    assert_eq!(tokenize("1 @ 2"), vec![Token::Number(1.0), Token::Number(2.0)]);
    assert_eq!(tokenize("a, b"),
               vec![Token::Identifier("a".to_string()),
                    Token::Identifier("b".to_string())]);
}

#[test]
fn literals_and_basic_arithmetic() {
    assert_value("42", 42.0);
    assert_value("3.25", 3.25);
    assert_value(".5", 0.5);
    assert_value("1 + 2", 3.0);
    assert_value("8 - 5", 3.0);
    assert_value("7 * 9", 63.0);
    assert_value("10 / 2", 5.0);
    assert_value("9 % 4", 1.0);
}

#[test]
fn multiplication_binds_tighter() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("2 * 3 + 4", 10.0);
    assert_value("2 + 3 * 4 + 5", 19.0);
    assert_value("100 / 5 * 2", 40.0);
    assert_value("2 * 3 % 4", 2.0);
    assert_value("10 % 4 / 2", 1.0);
    assert_value("1 + 10 % 3", 2.0);
}

#[test]
fn equal_precedence_associates_left() {
    assert_value("8 - 2 - 3", 3.0);
    assert_value("1 - 2 - 3", -4.0);
    assert_value("16 / 4 / 2", 2.0);
    assert_value("2 + 3 - 1", 4.0);
    // Rotation is single-step, so this chain groups as (10 - (1 - 2)) - 3.
    assert_value("10 - 1 - 2 - 3", 8.0);
}

#[test]
fn grouping_overrides_precedence() {
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("2 * (3 + 4)", 14.0);
    assert_value("(2 + 3) * (4 - 1)", 15.0);
    assert_value("((2))", 2.0);
}

#[test]
fn assignment_persists_across_lines() {
    assert_value("x = 7", 7.0);
    assert_value("x = 7\nx + 1", 8.0);
    assert_value("x = 2\nx = x + 1\nx", 3.0);
    assert_value("price = 3\nunits = 4\nprice * units", 12.0);
    // An assignment yields the assigned value, so it chains.
    assert_value("x = y = 1\nx + y", 2.0);
}

#[test]
fn empty_input_produces_no_value() {
    assert_no_value("");
    assert_no_value("   ");
    assert_no_value("@ # $");
}

#[test]
fn user_defined_functions_and_calls() {
    assert_no_value("fn double n => n * 2");
    assert_value("fn double n => n * 2\ndouble 3", 6.0);
    assert_value("fn double n => n * 2\ndouble(3)", 6.0);
    assert_value("fn avg a b => (a + b) / 2\navg 4 8", 6.0);
    assert_value("fn add a b => a + b\nadd 4, 8", 12.0);
    assert_value("fn seed => 42\nseed", 42.0);
    // Redefining a function replaces the earlier definition.
    assert_value("fn f a => a + 1\nfn f a => a + 2\nf 1", 3.0);
}

#[test]
fn calls_compose_with_arithmetic() {
    assert_value("fn double n => n * 2\n1 + double 3", 7.0);
    // An argument expression is parsed greedily: double (3 + 1).
    assert_value("fn double n => n * 2\ndouble 3 + 1", 8.0);
    assert_value("fn double n => n * 2\nfn quad n => double (double n)\nquad 3", 12.0);
}

#[test]
fn parameters_shadow_and_unwind() {
    assert_value("x = 10\nfn bump x => x + 1\nbump 1", 2.0);
    assert_value("x = 10\nfn bump x => x + 1\nbump 1\nx", 10.0);
    // Assignment inside a body lands in the global table.
    assert_value("fn set v => x = v\nset 5\nx", 5.0);
}

#[test]
fn session_state_survives_failed_submissions() {
    let mut session = Interpreter::new();

    assert_eq!(session.submit("x = 7").unwrap(), Some(7.0));
    assert_eq!(session.submit("x + 1").unwrap(), Some(8.0));
    assert_eq!(session.submit("fn double n => n * 2").unwrap(), None);
    assert_eq!(session.submit("double(3)").unwrap(), Some(6.0));

    assert!(session.submit("y").is_err());
    assert_eq!(session.submit("x").unwrap(), Some(7.0));
}

#[test]
fn call_frames_are_popped_on_failure() {
    let mut session = Interpreter::new();

    session.submit("fn weird a => 1 + (fn inner b => b)").unwrap();

    // The body registers `inner`, then fails because a definition is no
    // operand. The side effect is kept, the call frame is not.
    let result = session.submit("weird 3");
    assert!(matches!(result, Err(InterpreterError::Eval(EvalError::MissingValue))));

    assert_eq!(session.submit("inner 7").unwrap(), Some(7.0));
    assert!(matches!(session.submit("a"),
                     Err(InterpreterError::Eval(EvalError::UndefinedVariable { .. }))));
}

#[test]
fn partial_side_effects_persist() {
    let mut session = Interpreter::new();

    assert!(session.submit("(x = 5) + y").is_err());
    assert_eq!(session.submit("x").unwrap(), Some(5.0));
}

#[test]
fn ieee_float_semantics() {
    assert_value("1 / 0", f64::INFINITY);
    assert_value("0 - 1 / 0", f64::NEG_INFINITY);
    assert!(evaluate("0 / 0").unwrap().is_some_and(f64::is_nan));
    assert!(evaluate("7 % 0").unwrap().is_some_and(f64::is_nan));
    // The remainder keeps the sign of the dividend.
    assert_value("(0 - 7) % 3", -1.0);
    assert_value("7 % (0 - 3)", 1.0);
}

#[test]
fn evaluation_is_deterministic() {
    let source = "x = 3\ny = 4\nx * x + y * y";

    assert_value(source, 25.0);
    assert_eq!(evaluate(source).unwrap(), evaluate(source).unwrap());
}

#[test]
fn malformed_input_is_a_parse_error() {
    let e = eval_error("(2 + 3");
    assert!(matches!(e, InterpreterError::Parse(ParseError::UnexpectedEnd)));
    let e = eval_error("1 +");
    assert!(matches!(e, InterpreterError::Parse(ParseError::UnexpectedEnd)));
    let e = eval_error("x =");
    assert!(matches!(e, InterpreterError::Parse(ParseError::UnexpectedEnd)));
    let e = eval_error("fn f a");
    assert!(matches!(e, InterpreterError::Parse(ParseError::UnexpectedEnd)));

    let e = eval_error("()");
    assert!(matches!(e, InterpreterError::Parse(ParseError::UnexpectedToken { .. })));
    let e = eval_error("-1");
    assert!(matches!(e, InterpreterError::Parse(ParseError::UnexpectedToken { .. })));
    let e = eval_error("fn f a = a");
    assert!(matches!(e, InterpreterError::Parse(ParseError::UnexpectedToken { .. })));

    let e = eval_error("2 3");
    assert!(matches!(e, InterpreterError::Parse(ParseError::TrailingTokens { .. })));
    let e = eval_error("1 + 2)");
    assert!(matches!(e, InterpreterError::Parse(ParseError::TrailingTokens { .. })));
}

#[test]
fn function_definitions_are_validated() {
    let e = eval_error("fn f a,a => a");
    assert!(matches!(e, InterpreterError::Parse(ParseError::DuplicateParameter { .. })));
    let e = eval_error("fn f a a => a");
    assert!(matches!(e, InterpreterError::Parse(ParseError::DuplicateParameter { .. })));

    // A body may only reference its own parameters.
    let e = eval_error("fn f a => a + b");
    assert!(matches!(e, InterpreterError::Parse(ParseError::UnknownIdentifier { name })
                     if name == "b"));
    let e = eval_error("x = 1\nfn f a => a + x");
    assert!(matches!(e, InterpreterError::Parse(ParseError::UnknownIdentifier { .. })));
}

#[test]
fn call_sites_are_arity_checked() {
    let e = eval_error("fn add a b => a + b\nadd 1");
    assert!(matches!(e, InterpreterError::Parse(ParseError::TooFewArguments { function })
                     if function == "add"));
    let e = eval_error("fn add a b => a + b\nadd(1)");
    assert!(matches!(e, InterpreterError::Parse(ParseError::TooFewArguments { .. })));
    // Greedy argument parsing consumes the whole rest as one argument.
    let e = eval_error("fn add a b => a + b\nadd 1 + 2");
    assert!(matches!(e, InterpreterError::Parse(ParseError::TooFewArguments { .. })));
    // Arguments are juxtaposed, never wrapped in a shared parenthesis pair.
    let e = eval_error("fn avg a b => (a + b) / 2\navg(4, 8)");
    assert!(matches!(e, InterpreterError::Parse(ParseError::UnexpectedToken { .. })));
}

#[test]
fn name_references_are_checked_at_evaluation() {
    let e = eval_error("y");
    assert!(matches!(e,
                     InterpreterError::Eval(EvalError::UndefinedVariable { name }) if name == "y"));
    let e = eval_error("x + 1");
    assert!(matches!(e, InterpreterError::Eval(EvalError::UndefinedVariable { .. })));

    let mut evaluator = Evaluator::new();
    let call = Expr::Call { name: "missing".to_string(), args: Vec::new() };
    assert!(matches!(evaluator.eval(&call), Err(EvalError::UnknownFunction { .. })));
}

#[test]
fn variables_and_functions_share_one_name_space() {
    let e = eval_error("x = 5\nfn x a => a");
    assert!(matches!(e, InterpreterError::Eval(EvalError::NameCollision { .. })));
    let e = eval_error("fn f a => a\nf = 3");
    assert!(matches!(e, InterpreterError::Eval(EvalError::NameCollision { .. })));
}

#[test]
fn definitions_are_no_operands() {
    let e = eval_error("1 + (fn g a => a)");
    assert!(matches!(e, InterpreterError::Eval(EvalError::MissingValue)));
    let e = eval_error("x = fn g a => a");
    assert!(matches!(e, InterpreterError::Eval(EvalError::MissingValue)));
}

#[test]
fn example_script_works() {
    let script = fs::read_to_string("tests/example.calc").expect("missing file");
    assert_value(&script, 7.0);
}
