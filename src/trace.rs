//! Human-readable proof logs.
//!
//! The full log records every resolution step in derivation order; the
//! short log replays only the chain that reached the contradiction. Both
//! are deterministic for a fixed input, since pair iteration order and
//! substitution rendering are fixed.

use crate::fol::{Clause, ClauseOrigin};
use std::fmt::Write;
use std::sync::Arc;

/// Incremental builder for the full log
pub(crate) struct TraceLog {
    lines: Vec<String>,
    steps: usize,
}

impl TraceLog {
    pub fn new(initial: &[Arc<Clause>]) -> TraceLog {
        let mut lines = vec![
            "=== Full log (all resolutions) ===".to_string(),
            String::new(),
            format!("Initial clauses: {}", initial.len()),
        ];
        for clause in initial {
            lines.push(format!("  [{}] {}", clause.id, clause));
        }
        TraceLog { lines, steps: 0 }
    }

    /// Record one appended resolvent
    pub fn record_step(&mut self, c1: &Clause, c2: &Clause, resolvent: &Clause) {
        self.steps += 1;
        self.lines.push(step_block(self.steps, c1, c2, resolvent));
    }

    pub fn finish_success(mut self) -> String {
        self.lines
            .push("\nResult: contradiction derived, resolution successful.".to_string());
        self.lines.join("\n")
    }

    pub fn finish_saturated(mut self) -> String {
        self.lines.push(
            "\nResult: no contradiction derivable (no new clauses can be produced).".to_string(),
        );
        self.lines.join("\n")
    }

    pub fn finish_budget(mut self, max_iterations: usize) -> String {
        self.lines.push(format!(
            "\nResult: iteration budget exhausted after {} pair checks.",
            max_iterations
        ));
        self.lines.join("\n")
    }

    pub fn finish_cancelled(mut self) -> String {
        self.lines
            .push("\nResult: proof search cancelled.".to_string());
        self.lines.join("\n")
    }
}

/// Format the short log for a successful refutation: the initial clauses
/// used by the proof in id order, then the resolution steps in chain order.
pub(crate) fn short_log_success(chain: &[Arc<Clause>]) -> String {
    let mut out = String::from("=== Short log (proof chain) ===\n");

    out.push_str("\nInitial clauses used:\n");
    let mut initial: Vec<&Arc<Clause>> = chain
        .iter()
        .filter(|c| c.origin == ClauseOrigin::Initial)
        .collect();
    initial.sort_by_key(|c| c.id);
    for clause in initial {
        let _ = writeln!(out, "  [{}] {}", clause.id, clause);
    }

    out.push_str("\nResolution steps:\n");
    let mut step = 0;
    for clause in chain {
        if clause.origin != ClauseOrigin::Resolved {
            continue;
        }
        let Some([p1, p2]) = clause.parents.as_ref() else {
            continue;
        };
        step += 1;
        out.push_str(&step_block(step, p1, p2, clause));
        out.push('\n');
    }

    out.push_str("\nResult: contradiction derived, resolution successful.");
    out
}

pub(crate) fn short_log_saturated() -> String {
    "No proof found: the contradiction is not derivable from the given clauses.".to_string()
}

pub(crate) fn short_log_budget(max_iterations: usize) -> String {
    format!(
        "No proof found within the iteration budget of {} pair checks.",
        max_iterations
    )
}

pub(crate) fn short_log_cancelled() -> String {
    "Proof search cancelled before completion.".to_string()
}

fn step_block(step: usize, c1: &Clause, c2: &Clause, resolvent: &Clause) -> String {
    let kind = if resolvent.is_empty() {
        "Contradiction found"
    } else {
        "Resolution"
    };
    format!(
        "\nStep {} - {}\n    Clause 1: [{}] {}\n    Clause 2: [{}] {}\n    Action: {}\n    Result: [{}] {}",
        step,
        kind,
        c1.id,
        c1,
        c2.id,
        c2,
        resolvent.rule,
        resolvent.id,
        resolvent,
    )
}
