//! Wire types for the host application.
//!
//! The engine sits between a language model that emits clause strings as a
//! JSON array and a webview that renders the proof. This module carries
//! both directions: decoding the model's clause list and serializing the
//! engine's state and result without exposing internals.

use crate::error::EngineError;
use crate::fol::{Clause, ClauseOrigin, Literal, Term};
use crate::prover::{ProofOutcome, ProofResult};
use serde::{Deserialize, Serialize};

/// Decode the clause-string list the upstream language model produced.
/// The model's output is exactly a JSON array of strings; anything else is
/// an error for the host to surface.
pub fn parse_clause_list(input: &str) -> Result<Vec<String>, EngineError> {
    let list: Vec<String> = serde_json::from_str(input)?;
    Ok(list)
}

/// JSON representation of a term
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TermJson {
    Variable { name: String },
    Constant { name: String },
    Function { name: String, args: Vec<TermJson> },
}

impl From<&Term> for TermJson {
    fn from(term: &Term) -> Self {
        match term {
            Term::Variable { name } => TermJson::Variable { name: name.clone() },
            Term::Constant { name } => TermJson::Constant { name: name.clone() },
            Term::Function { name, args } => TermJson::Function {
                name: name.clone(),
                args: args.iter().map(|t| t.into()).collect(),
            },
        }
    }
}

/// JSON representation of a literal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiteralJson {
    pub predicate: String,
    pub negated: bool,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub args: Vec<TermJson>,
}

impl From<&Literal> for LiteralJson {
    fn from(lit: &Literal) -> Self {
        LiteralJson {
            predicate: lit.predicate.clone(),
            negated: lit.negated,
            args: lit.args.iter().map(|t| t.into()).collect(),
        }
    }
}

/// JSON representation of a clause, parents flattened to ids
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClauseJson {
    pub id: usize,
    pub text: String,
    pub literals: Vec<LiteralJson>,
    pub initial: bool,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub parents: Vec<usize>,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub rule: String,
}

impl From<&Clause> for ClauseJson {
    fn from(clause: &Clause) -> Self {
        ClauseJson {
            id: clause.id,
            text: clause.to_string(),
            literals: clause.literals.iter().map(|l| l.into()).collect(),
            initial: clause.origin == ClauseOrigin::Initial,
            parents: clause
                .parents
                .as_ref()
                .map(|parents| parents.iter().map(|p| p.id).collect())
                .unwrap_or_default(),
            rule: clause.rule.clone(),
        }
    }
}

/// Complete result of a prove call, ready for JSON serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofResultJson {
    pub success: bool,
    pub outcome: ProofOutcome,
    pub full_log: String,
    pub short_log: String,
}

impl From<&ProofResult> for ProofResultJson {
    fn from(result: &ProofResult) -> Self {
        ProofResultJson {
            success: result.success,
            outcome: result.outcome,
            full_log: result.full_log.clone(),
            short_log: result.short_log.clone(),
        }
    }
}
