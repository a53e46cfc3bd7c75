//! Cooperative cancellation and progress reporting (spec.md §5).
//!
//! The solver is single-threaded and synchronous; the orchestrator may
//! off-load it to a worker thread to keep an external event loop
//! responsive. `CancellationToken` is checked at the top of every DFS
//! frame; `ProgressSender` reports phase names ahead of the final
//! completion signal.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;

/// A cheaply-cloned flag a caller can flip from another thread to
/// cooperatively stop an in-flight solve.
#[derive(Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Phase names reported on the progress channel, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    BuildingVariables,
    BuildingDomains,
    Solving,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::BuildingVariables => "Building variables",
            Phase::BuildingDomains => "Building domains",
            Phase::Solving => "Solving",
        }
    }
}

/// Bundles the pieces a worker-thread solve needs: a cancellation token
/// it polls and an optional progress channel it reports phases on.
/// Progress messages always precede the completion signal (spec.md §5).
#[derive(Clone, Default)]
pub struct SolveControl {
    pub cancel: CancellationToken,
    pub progress: Option<Sender<Phase>>,
}

impl SolveControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_progress(progress: Sender<Phase>) -> Self {
        Self {
            cancel: CancellationToken::new(),
            progress: Some(progress),
        }
    }

    pub fn report(&self, phase: Phase) {
        if let Some(tx) = &self.progress {
            let _ = tx.send(phase);
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}
