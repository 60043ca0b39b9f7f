//! Robinson unification with occurs-check

mod mgu;

#[cfg(test)]
mod proptest_tests;

pub use mgu::{unify_args, unify_literals, unify_terms, UnificationError, UnificationResult};
