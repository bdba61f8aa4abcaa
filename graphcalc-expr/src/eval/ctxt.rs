use levenshtein::levenshtein;
use std::{collections::HashMap, f64::consts};

/// The golden ratio, `(1 + sqrt(5)) / 2`.
pub const PHI: f64 = 1.618_033_988_749_895;

/// A context to use when evaluating an expression, containing the values bound to variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Ctxt {
    /// The variables in the context.
    vars: HashMap<String, f64>,
}

impl Default for Ctxt {
    /// Creates a context with the common mathematical constants `pi`, `e`, `tau`, and `phi`
    /// already bound.
    fn default() -> Self {
        Self {
            vars: HashMap::from([
                ("pi".to_string(), consts::PI),
                ("e".to_string(), consts::E),
                ("tau".to_string(), consts::TAU),
                ("phi".to_string(), PHI),
            ]),
        }
    }
}

impl Ctxt {
    /// Creates a new empty context.
    ///
    /// Consider using the [`Default`] implementation if expressions may refer to constants such
    /// as `pi`.
    pub fn new() -> Ctxt {
        Ctxt { vars: HashMap::new() }
    }

    /// Add a variable to the context, replacing any previous value.
    pub fn add_var(&mut self, name: &str, value: f64) {
        self.vars.insert(name.to_string(), value);
    }

    /// Get the value of a variable in the context.
    pub fn get_var(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }

    /// Returns the variables in the context.
    pub fn get_vars(&self) -> &HashMap<String, f64> {
        &self.vars
    }

    /// Returns all variables in the context with a name similar to the given name, sorted.
    pub fn get_similar_vars(&self, name: &str) -> Vec<&str> {
        let mut similar = self.vars
            .keys()
            .filter(|n| levenshtein(n, name) < 2)
            .map(String::as_str)
            .collect::<Vec<_>>();
        similar.sort_unstable();
        similar
    }
}

impl From<HashMap<String, f64>> for Ctxt {
    fn from(vars: HashMap<String, f64>) -> Self {
        Self { vars }
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Ctxt {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(name, value)| (name.into(), value)).collect(),
        }
    }
}
