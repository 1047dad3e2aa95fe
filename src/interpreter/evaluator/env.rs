use std::collections::HashMap;

#[derive(Debug)]
/// The variable environment.
///
/// The first frame is the global table, which lives for the whole session.
/// Every function call pushes one frame of parameter bindings on top and
/// pops it when the call finishes, so lookups inside a body see the
/// parameters first and fall back to the frames beneath them.
pub struct Environment {
    frames: Vec<HashMap<String, f64>>,
}

#[allow(clippy::new_without_default)]
impl Environment {
    /// Creates an environment containing only an empty global table.
    #[must_use]
    pub fn new() -> Self {
        Self { frames: vec![HashMap::new()], }
    }

    /// Looks a variable up, innermost frame first.
    ///
    /// # Parameters
    /// - `name`: Name of the variable to resolve.
    ///
    /// # Returns
    /// The value of the nearest binding, or `None` if no frame binds the
    /// name.
    ///
    /// # Example
    /// ```
    /// use exprima::interpreter::evaluator::env::Environment;
    ///
    /// let mut environment = Environment::new();
    /// environment.set_global("x", 7.0);
    ///
    /// assert_eq!(environment.get("x"), Some(7.0));
    /// assert_eq!(environment.get("y"), None);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.get(name).copied())
    }

    /// Binds a variable in the global table.
    ///
    /// Assignments always land here, never in a call frame, so a value
    /// assigned inside a function body stays visible after the call
    /// returns.
    pub fn set_global(&mut self, name: &str, value: f64) {
        self.frames[0].insert(name.to_string(), value);
    }

    /// Pushes a frame of parameter bindings for a function call.
    pub fn push_frame(&mut self, bindings: HashMap<String, f64>) {
        self.frames.push(bindings);
    }

    /// Pops the innermost call frame.
    ///
    /// The global table is never popped.
    pub fn pop_frame(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }
}
