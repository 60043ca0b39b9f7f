//! Resolution inference and proof reconstruction

mod proof;
mod resolution;

pub use proof::proof_chain;
pub use resolution::{resolve_pair, Resolvent};
