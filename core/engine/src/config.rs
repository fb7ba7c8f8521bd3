//! FILENAME: core/engine/src/config.rs
//! PURPOSE: Caller-supplied configuration for a parse/evaluate cycle.
//! CONTEXT: The maps are read-only for the engine. Function implementations are
//! registered in code; the data part (variables, arities, marks, operator set)
//! can also come from a JSON `Settings` document.

use std::collections::HashMap;
use std::sync::Arc;

use parser::OperatorSet;
use serde::{Deserialize, Serialize};

use crate::builtins::builtins;

/// A registered function. Receives its arguments in call order.
pub type NativeFn = Arc<dyn Fn(&[f64]) -> f64 + Send + Sync>;

#[derive(Clone)]
pub struct ParserConfig {
    pub variables: HashMap<String, f64>,
    pub functions: HashMap<String, NativeFn>,
    pub arities: HashMap<String, usize>,
    /// Opening/closing variable marks, checked when the parser is built.
    pub delimiters: (String, String),
    pub operators: OperatorSet,
    /// Tokenize and convert even when validation fails.
    pub skip_validation: bool,
}

impl ParserConfig {
    pub fn new() -> Self {
        ParserConfig {
            variables: HashMap::new(),
            functions: HashMap::new(),
            arities: HashMap::new(),
            delimiters: ("[".to_string(), "]".to_string()),
            operators: OperatorSet::default(),
            skip_validation: false,
        }
    }

    pub fn with_variable(mut self, name: impl Into<String>, value: f64) -> Self {
        self.variables.insert(name.into(), value);
        self
    }

    /// Registers an implementation together with its arity.
    pub fn with_function<F>(mut self, name: impl Into<String>, arity: usize, f: F) -> Self
    where
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
    {
        let name = name.into();
        self.arities.insert(name.clone(), arity);
        self.functions.insert(name, Arc::new(f));
        self
    }

    /// Declares an arity without an implementation (enough to build the AST).
    pub fn with_arity(mut self, name: impl Into<String>, arity: usize) -> Self {
        self.arities.insert(name.into(), arity);
        self
    }

    pub fn with_delimiters(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.delimiters = (open.into(), close.into());
        self
    }

    pub fn with_operators(mut self, operators: OperatorSet) -> Self {
        self.operators = operators;
        self
    }

    /// Adds the built-in library. Already registered names are kept.
    pub fn with_builtins(mut self) -> Self {
        for (name, (arity, f)) in builtins() {
            if !self.functions.contains_key(&name) {
                self.arities.entry(name.clone()).or_insert(arity);
                self.functions.insert(name, f);
            }
        }
        self
    }

    pub fn skip_validation(mut self, skip: bool) -> Self {
        self.skip_validation = skip;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ParserConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut functions: Vec<&String> = self.functions.keys().collect();
        functions.sort();
        f.debug_struct("ParserConfig")
            .field("variables", &self.variables)
            .field("functions", &functions)
            .field("arities", &self.arities)
            .field("delimiters", &self.delimiters)
            .field("operators", &self.operators)
            .field("skip_validation", &self.skip_validation)
            .finish()
    }
}

/// Serializable part of the configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub variables: HashMap<String, f64>,
    pub arities: HashMap<String, usize>,
    pub delimiters: Option<(String, String)>,
    pub operators: OperatorSet,
    pub skip_validation: bool,
    /// Register the built-in function library.
    pub builtins: bool,
}

impl From<Settings> for ParserConfig {
    fn from(settings: Settings) -> Self {
        let mut config = ParserConfig::new();
        if settings.builtins {
            config = config.with_builtins();
        }
        config.variables.extend(settings.variables);
        config.arities.extend(settings.arities);
        if let Some(delimiters) = settings.delimiters {
            config.delimiters = delimiters;
        }
        config.operators = settings.operators;
        config.skip_validation = settings.skip_validation;
        config
    }
}
