//! Cooperative cancellation and deadlines for long searches.

use crate::errors::BalanceError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Shared flag that asks a running search to stop.
///
/// Clones share the same flag, so a token can be handed to the balancer
/// and cancelled from another thread.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Interruption sources consulted at search checkpoints.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Interrupt<'a> {
    token: Option<&'a CancellationToken>,
    deadline: Option<Instant>,
}

impl<'a> Interrupt<'a> {
    pub(crate) fn new(token: Option<&'a CancellationToken>, deadline: Option<Instant>) -> Self {
        Self { token, deadline }
    }

    pub(crate) fn none() -> Self {
        Self::default()
    }

    /// Cancellation takes precedence over an expired deadline.
    pub(crate) fn check(&self) -> Result<(), BalanceError> {
        if self.token.is_some_and(CancellationToken::is_cancelled) {
            return Err(BalanceError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Err(BalanceError::DeadlineExceeded),
            _ => Ok(()),
        }
    }
}
