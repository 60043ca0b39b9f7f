//! Literals: signed predicate applications

use super::term::Term;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A possibly negated atomic formula `[¬]P(t₁, …, tₙ)`
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct Literal {
    pub predicate: String,
    pub args: Vec<Term>,
    pub negated: bool,
}

impl Literal {
    pub fn new(predicate: impl Into<String>, args: Vec<Term>, negated: bool) -> Literal {
        Literal {
            predicate: predicate.into(),
            args,
            negated,
        }
    }

    /// A copy of this literal with the sign inverted
    pub fn negate(&self) -> Literal {
        Literal {
            predicate: self.predicate.clone(),
            args: self.args.clone(),
            negated: !self.negated,
        }
    }
}

/// Literal equality is by predicate, sign, and pointwise argument
/// stringification.
impl PartialEq for Literal {
    fn eq(&self, other: &Literal) -> bool {
        self.predicate == other.predicate
            && self.negated == other.negated
            && self.args.len() == other.args.len()
            && self
                .args
                .iter()
                .zip(&other.args)
                .all(|(a, b)| a.same_text(b))
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "¬")?;
        }
        write!(f, "{}(", self.predicate)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_marks_negation() {
        let lit = Literal::new(
            "Mortal",
            vec![Term::variable("x"), Term::constant("Socrates")],
            true,
        );
        assert_eq!(lit.to_string(), "¬Mortal(x, Socrates)");
        assert_eq!(lit.negate().to_string(), "Mortal(x, Socrates)");
    }

    #[test]
    fn negate_is_an_involution() {
        let lit = Literal::new("P", vec![Term::constant("a")], false);
        assert_eq!(lit.negate().negate(), lit);
        assert_ne!(lit.negate(), lit);
    }

    #[test]
    fn equality_needs_matching_args() {
        let l1 = Literal::new("P", vec![Term::variable("x")], false);
        let l2 = Literal::new("P", vec![Term::variable("y")], false);
        let l3 = Literal::new("P", vec![Term::variable("x")], false);
        assert_ne!(l1, l2);
        assert_eq!(l1, l3);
    }
}
