//! Terms in first-order logic

use serde::{Deserialize, Serialize};
use std::fmt;

/// A term in first-order logic
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Term {
    Variable { name: String },
    Constant { name: String },
    Function { name: String, args: Vec<Term> },
}

impl Term {
    /// Create a variable term. Callers pass single-lowercase-letter names;
    /// the constructor does not re-validate.
    pub fn variable(name: impl Into<String>) -> Term {
        Term::Variable { name: name.into() }
    }

    /// Create a constant term
    pub fn constant(name: impl Into<String>) -> Term {
        Term::Constant { name: name.into() }
    }

    /// Create a function term (arity >= 1)
    pub fn function(name: impl Into<String>, args: Vec<Term>) -> Term {
        Term::Function {
            name: name.into(),
            args,
        }
    }

    /// The head symbol of this term
    pub fn name(&self) -> &str {
        match self {
            Term::Variable { name } | Term::Constant { name } | Term::Function { name, .. } => name,
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable { .. })
    }

    /// Check whether `var` appears anywhere in variable position
    pub fn contains_var(&self, var: &str) -> bool {
        match self {
            Term::Variable { name } => name == var,
            Term::Constant { .. } => false,
            Term::Function { args, .. } => args.iter().any(|arg| arg.contains_var(var)),
        }
    }

    /// Stringification equality: name equality on leaves, recursive on
    /// functions. Coincides with `Display` equality because stringification
    /// is canonical.
    pub fn same_text(&self, other: &Term) -> bool {
        match (self, other) {
            (
                Term::Function { name: f, args: xs },
                Term::Function { name: g, args: ys },
            ) => f == g && xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| x.same_text(y)),
            (Term::Function { .. }, _) | (_, Term::Function { .. }) => false,
            _ => self.name() == other.name(),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Variable { name } | Term::Constant { name } => write!(f, "{}", name),
            Term::Function { name, args } => {
                write!(f, "{}(", name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_canonical() {
        let t = Term::function(
            "f",
            vec![
                Term::variable("x"),
                Term::function("g", vec![Term::constant("Socrates")]),
            ],
        );
        assert_eq!(t.to_string(), "f(x, g(Socrates))");
    }

    #[test]
    fn contains_var_descends_into_functions() {
        let t = Term::function("f", vec![Term::function("g", vec![Term::variable("x")])]);
        assert!(t.contains_var("x"));
        assert!(!t.contains_var("y"));
        assert!(!Term::constant("x_is_not_here").contains_var("x"));
    }

    #[test]
    fn same_text_ignores_leaf_variant() {
        assert!(Term::variable("a").same_text(&Term::constant("a")));
        assert!(!Term::variable("a").same_text(&Term::function("a", vec![Term::constant("b")])));
    }
}
