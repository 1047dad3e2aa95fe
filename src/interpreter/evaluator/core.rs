use std::collections::HashMap;

use crate::{
    ast::{BinaryOperator, Expr, FunctionDef},
    error::EvalError,
    interpreter::evaluator::env::Environment,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Stores the runtime evaluation state.
///
/// This struct holds the interpreter state, including all user defined
/// functions and variable assignments made during evaluation.
///
/// ## Usage
///
/// An `Evaluator` is created once and reused across submissions, so values
/// assigned and functions defined on earlier lines stay visible on later
/// ones.
pub struct Evaluator {
    pub variables: Environment,
    /// A mapping from function names to their [`FunctionDef`] definitions.
    /// Populated when evaluating declarations like `fn square x => x * x`.
    pub functions: HashMap<String, FunctionDef>,
}

#[allow(clippy::new_without_default)]
impl Evaluator {
    /// Creates a new evaluator with an empty environment and no
    /// user-defined functions.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: Environment::new(),
               functions: HashMap::new(), }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for evaluation. The evaluator
    /// dispatches based on expression variant: literals, identifiers,
    /// assignments, binary operations, groups, function definitions and
    /// function calls.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// `Some(value)` for expressions that produce a number, or `None` for
    /// constructs that do not yield one, such as function definitions and
    /// empty input.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Option<f64>> {
        match expr {
            Expr::Number(value) => Ok(Some(*value)),
            Expr::Identifier(name) => self.eval_identifier(name).map(Some),
            Expr::Assignment { name, value } => self.eval_assignment(name, value).map(Some),
            Expr::BinaryOp { op, left, right } => self.eval_binary_op(*op, left, right).map(Some),
            Expr::Group(inner) => self.eval(inner),
            Expr::Function(def) => {
                self.eval_function_def(def)?;
                Ok(None)
            },
            Expr::Call { name, args } => self.eval_call(name, args),
            Expr::Empty => Ok(None),
        }
    }

    /// Evaluates a subexpression in a position that requires a value.
    ///
    /// # Errors
    /// `MissingValue` if the subexpression yields nothing, for example a
    /// function definition used as an operand.
    fn eval_operand(&mut self, expr: &Expr) -> EvalResult<f64> {
        self.eval(expr)?.ok_or(EvalError::MissingValue)
    }

    /// Resolves an identifier against the environment, innermost frame
    /// first.
    fn eval_identifier(&self, name: &str) -> EvalResult<f64> {
        self.variables
            .get(name)
            .ok_or_else(|| EvalError::UndefinedVariable { name: name.to_string() })
    }

    /// Evaluates `name = value` and binds the result globally.
    ///
    /// The binding always lands in the global table, never in a call
    /// frame, so a value assigned inside a function body remains visible
    /// after the call returns. The assigned value is also the result of
    /// the expression, which makes chains like `x = y = 1` work.
    ///
    /// # Errors
    /// `NameCollision` if the name already refers to a function.
    fn eval_assignment(&mut self, name: &str, value: &Expr) -> EvalResult<f64> {
        if self.functions.contains_key(name) {
            return Err(EvalError::NameCollision { name: name.to_string() });
        }

        let value = self.eval_operand(value)?;
        self.variables.set_global(name, value);

        Ok(value)
    }

    /// Evaluates a binary arithmetic operation.
    ///
    /// Arithmetic follows IEEE 754 double precision: division by zero
    /// yields an infinity or NaN instead of an error, and `%` is the
    /// floating-point remainder with the sign of the dividend.
    fn eval_binary_op(&mut self, op: BinaryOperator, left: &Expr, right: &Expr) -> EvalResult<f64> {
        let left = self.eval_operand(left)?;
        let right = self.eval_operand(right)?;

        let result = match op {
            BinaryOperator::Add => left + right,
            BinaryOperator::Sub => left - right,
            BinaryOperator::Mul => left * right,
            BinaryOperator::Div => left / right,
            BinaryOperator::Mod => left % right,
        };

        Ok(result)
    }

    /// Registers a function definition in the function table.
    ///
    /// Redefining an existing function replaces it. Registration happens
    /// only when the definition is evaluated, so a body can call other
    /// functions only if they were defined on an earlier submission.
    ///
    /// # Errors
    /// `NameCollision` if the name already refers to a variable.
    fn eval_function_def(&mut self, def: &FunctionDef) -> EvalResult<()> {
        if self.variables.get(&def.name).is_some() {
            return Err(EvalError::NameCollision { name: def.name.clone() });
        }

        self.functions.insert(def.name.clone(), def.clone());

        Ok(())
    }

    /// Calls a user-defined function.
    ///
    /// Argument expressions are evaluated in the caller's environment.
    /// Their values are then bound to the parameter names in a fresh call
    /// frame, the body runs inside that frame, and the frame is popped
    /// again whether the body succeeded or failed. The body's result is
    /// passed through unchanged, so a call can itself yield no value.
    ///
    /// # Errors
    /// - `UnknownFunction` if no function with this name is defined.
    /// - Any error raised while evaluating an argument or the body.
    fn eval_call(&mut self, name: &str, args: &[(String, Expr)]) -> EvalResult<Option<f64>> {
        let func = self.functions
                       .get(name)
                       .cloned()
                       .ok_or_else(|| EvalError::UnknownFunction { name: name.to_string() })?;

        let mut frame = HashMap::with_capacity(args.len());
        for (param, arg) in args {
            frame.insert(param.clone(), self.eval_operand(arg)?);
        }

        self.variables.push_frame(frame);
        let result = self.eval(&func.body);
        self.variables.pop_frame();

        result
    }
}
