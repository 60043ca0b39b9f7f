//! Resolution engine: clause store and saturation loop.
//!
//! The engine is created per proof attempt. `parse_input` populates the
//! initial clause set, `prove` saturates it by pairwise resolution until
//! the empty clause appears, no new clause can be produced, or the
//! iteration budget runs out. Afterwards the engine is read-only and the
//! full clause store stays available for log or wire extraction.

use crate::fol::Clause;
use crate::inference::{proof_chain, resolve_pair};
use crate::parser::parse_clause;
use crate::trace::{
    short_log_budget, short_log_cancelled, short_log_saturated, short_log_success, TraceLog,
};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Default bound on pair inspections; caps runtime and memory for
/// pathological inputs
pub const MAX_ITERATIONS: usize = 500_000;

/// Saturation limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaturationConfig {
    pub max_iterations: usize,
}

impl Default for SaturationConfig {
    fn default() -> Self {
        SaturationConfig {
            max_iterations: MAX_ITERATIONS,
        }
    }
}

/// Terminal condition of a proof attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProofOutcome {
    /// The empty clause was derived
    ContradictionFound,
    /// A full pass produced no new clause
    Saturated,
    /// The pair-inspection budget ran out
    IterationBudgetExceeded,
    /// The cancellation flag was raised
    Cancelled,
}

/// Result of a proof attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofResult {
    pub success: bool,
    pub outcome: ProofOutcome,
    pub full_log: String,
    pub short_log: String,
}

/// Saturation-based resolution prover over a clause store.
///
/// Clause ids are strictly increasing in creation order; parents of a
/// resolved clause always have smaller ids, so the derivation graph is a
/// DAG.
pub struct ResolutionEngine {
    clauses: Vec<Arc<Clause>>,
    next_id: usize,
    config: SaturationConfig,
    /// Raise to stop the saturation loop from another thread
    pub cancel: Arc<AtomicBool>,
}

impl Default for ResolutionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolutionEngine {
    pub fn new() -> ResolutionEngine {
        Self::with_config(SaturationConfig::default())
    }

    pub fn with_config(config: SaturationConfig) -> ResolutionEngine {
        ResolutionEngine {
            clauses: Vec::new(),
            next_id: 1,
            config,
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Every clause the engine has seen: the initial set followed by all
    /// kept resolvents, in id order
    pub fn clauses(&self) -> &[Arc<Clause>] {
        &self.clauses
    }

    fn take_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Replace the clause store with the parsed input, one clause per
    /// string, ids restarting from 1. A string whose pieces are all
    /// malformed still becomes a clause (an empty one).
    pub fn parse_input<S: AsRef<str>>(&mut self, inputs: &[S]) {
        self.clauses.clear();
        self.next_id = 1;
        for input in inputs {
            let literals = parse_clause(input.as_ref());
            let id = self.take_id();
            self.clauses.push(Arc::new(Clause::initial(id, literals)));
        }
    }

    /// Run saturation to a terminal condition.
    ///
    /// Each outer pass snapshots the active list and visits every ordered
    /// pair `i < j` of the snapshot once; every inspection counts against
    /// the budget, and each unordered id pair is resolved at most once
    /// across the whole run. Resolvents equal to an existing clause are
    /// dropped. The search stops the moment the empty clause is kept.
    pub fn prove(&mut self) -> ProofResult {
        let mut active: Vec<Arc<Clause>> = self.clauses.clone();
        let mut seen: IndexSet<String> = active.iter().map(|c| c.to_string()).collect();
        let mut processed_pairs: HashSet<(usize, usize)> = HashSet::new();
        let mut checks: usize = 0;
        let mut trace = TraceLog::new(&active);

        loop {
            let mut progress = false;
            let snapshot = active.clone();

            for i in 0..snapshot.len() {
                for j in (i + 1)..snapshot.len() {
                    checks += 1;
                    if checks > self.config.max_iterations {
                        self.clauses = active;
                        return ProofResult {
                            success: false,
                            outcome: ProofOutcome::IterationBudgetExceeded,
                            full_log: trace.finish_budget(self.config.max_iterations),
                            short_log: short_log_budget(self.config.max_iterations),
                        };
                    }
                    if self.cancel.load(Ordering::Relaxed) {
                        self.clauses = active;
                        return ProofResult {
                            success: false,
                            outcome: ProofOutcome::Cancelled,
                            full_log: trace.finish_cancelled(),
                            short_log: short_log_cancelled(),
                        };
                    }

                    let c1 = &snapshot[i];
                    let c2 = &snapshot[j];
                    let pair = (c1.id.min(c2.id), c1.id.max(c2.id));
                    if !processed_pairs.insert(pair) {
                        continue;
                    }

                    for resolvent in resolve_pair(c1, c2) {
                        let candidate = Clause::resolved(
                            self.next_id,
                            resolvent.literals,
                            [Arc::clone(c1), Arc::clone(c2)],
                            resolvent.rule,
                        );
                        if !seen.insert(candidate.to_string()) {
                            continue;
                        }
                        self.next_id += 1;

                        let clause = Arc::new(candidate);
                        active.push(Arc::clone(&clause));
                        progress = true;
                        trace.record_step(c1, c2, &clause);

                        if clause.is_empty() {
                            let chain = proof_chain(&clause);
                            self.clauses = active;
                            return ProofResult {
                                success: true,
                                outcome: ProofOutcome::ContradictionFound,
                                full_log: trace.finish_success(),
                                short_log: short_log_success(&chain),
                            };
                        }
                    }
                }
            }

            if !progress {
                self.clauses = active;
                return ProofResult {
                    success: false,
                    outcome: ProofOutcome::Saturated,
                    full_log: trace.finish_saturated(),
                    short_log: short_log_saturated(),
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fol::ClauseOrigin;

    fn prove(inputs: &[&str]) -> (ProofResult, ResolutionEngine) {
        let mut engine = ResolutionEngine::new();
        engine.parse_input(inputs);
        let result = engine.prove();
        (result, engine)
    }

    #[test]
    fn parse_input_assigns_ids_from_one() {
        let mut engine = ResolutionEngine::new();
        engine.parse_input(&["P(a)", "¬P(a)"]);
        let ids: Vec<usize> = engine.clauses().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);

        // re-parsing resets the store and the counter
        engine.parse_input(&["Q(b)"]);
        assert_eq!(engine.clauses().len(), 1);
        assert_eq!(engine.clauses()[0].id, 1);
    }

    #[test]
    fn ids_are_strictly_increasing_and_unique() {
        let (result, engine) = prove(&["¬P(x) ∨ Q(x)", "P(a)", "¬Q(a)"]);
        assert!(result.success);
        let ids: Vec<usize> = engine.clauses().iter().map(|c| c.id).collect();
        for window in ids.windows(2) {
            assert!(window[0] < window[1]);
        }
    }

    #[test]
    fn resolved_clauses_follow_their_parents() {
        let (result, engine) = prove(&["¬P(x) ∨ Q(x)", "P(a)", "¬Q(a)"]);
        assert!(result.success);
        for clause in engine.clauses() {
            match clause.origin {
                ClauseOrigin::Initial => assert!(clause.parents.is_none()),
                ClauseOrigin::Resolved => {
                    let parents = clause.parents.as_ref().unwrap();
                    assert!(parents[0].id < clause.id);
                    assert!(parents[1].id < clause.id);
                }
            }
        }
    }

    #[test]
    fn literals_stay_deduplicated_and_sorted() {
        let (_, engine) = prove(&["Q(b) ∨ P(a) ∨ P(a)", "¬P(a)"]);
        for clause in engine.clauses() {
            let keys: Vec<String> = clause.literals.iter().map(|l| l.to_string()).collect();
            let mut sorted = keys.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(keys, sorted);
        }
    }

    #[test]
    fn success_ends_in_the_empty_clause() {
        let (result, engine) = prove(&["P(a)", "¬P(a)"]);
        assert!(result.success);
        assert_eq!(result.outcome, ProofOutcome::ContradictionFound);
        assert!(engine.clauses().last().unwrap().is_empty());
    }

    #[test]
    fn cancellation_stops_the_loop() {
        let mut engine = ResolutionEngine::new();
        engine.parse_input(&["P(x) ∨ P(f(x))", "¬P(y) ∨ P(f(y))"]);
        engine.cancel.store(true, Ordering::Relaxed);
        let result = engine.prove();
        assert!(!result.success);
        assert_eq!(result.outcome, ProofOutcome::Cancelled);
        assert!(result.short_log.contains("cancelled"));
    }

    #[test]
    fn small_budget_is_reported() {
        let mut engine = ResolutionEngine::with_config(SaturationConfig { max_iterations: 3 });
        engine.parse_input(&["P(x) ∨ P(f(x))", "¬P(y) ∨ P(f(y))"]);
        let result = engine.prove();
        assert!(!result.success);
        assert_eq!(result.outcome, ProofOutcome::IterationBudgetExceeded);
        assert!(result.short_log.contains("iteration budget of 3"));
    }
}
