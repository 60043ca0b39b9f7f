//! Refutory: a resolution theorem prover for first-order clause sets.
//!
//! The engine takes clause strings in the `¬?P(args) ∨ …` notation,
//! saturates the set by binary resolution with Robinson unification, and
//! reports whether the empty clause (a contradiction) is derivable,
//! together with a full derivation log and a short proof-chain log.
//!
//! ```
//! use refutory::ResolutionEngine;
//!
//! let mut engine = ResolutionEngine::new();
//! engine.parse_input(&["¬P(x) ∨ Q(x)", "P(a)", "¬Q(a)"]);
//! let result = engine.prove();
//! assert!(result.success);
//! ```

pub mod error;
pub mod fol;
pub mod inference;
pub mod json;
pub mod parser;
pub mod prover;
pub mod unification;

mod trace;

// Re-export commonly used types from fol
pub use fol::{Clause, ClauseOrigin, Literal, Substitution, Term};

// Re-export inference entry points
pub use inference::{proof_chain, resolve_pair, Resolvent};

// Re-export the engine surface
pub use prover::{
    ProofOutcome, ProofResult, ResolutionEngine, SaturationConfig, MAX_ITERATIONS,
};

pub use error::EngineError;
pub use json::{parse_clause_list, ClauseJson, LiteralJson, ProofResultJson, TermJson};
pub use parser::parse_clause;
pub use unification::{unify_args, unify_literals, unify_terms, UnificationError, UnificationResult};
