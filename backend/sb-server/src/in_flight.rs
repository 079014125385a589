//! Contact messages currently being delivered.
//!
//! Every request builds its own form state, so a double-clicked form or a
//! replayed POST would otherwise reach the email service twice. Identical
//! messages share one claim: the first request sends, later ones are skipped
//! until the claim is dropped.

use sb_core::ContactSubmission;

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Default)]
pub struct InFlightSubmissions {
    pending: Arc<Mutex<HashSet<ContactSubmission>>>,
}

impl InFlightSubmissions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `submission` for delivery. `None` when an identical message is
    /// already on its way.
    pub fn claim(&self, submission: &ContactSubmission) -> Option<InFlightClaim> {
        if !self.lock().insert(submission.clone()) {
            return None;
        }

        Some(InFlightClaim {
            registry: self.clone(),
            submission: submission.clone(),
        })
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // The set stays consistent even if a holder panicked
    fn lock(&self) -> MutexGuard<'_, HashSet<ContactSubmission>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Releases the claimed message when dropped
#[derive(Debug)]
pub struct InFlightClaim {
    registry: InFlightSubmissions,
    submission: ContactSubmission,
}

impl Drop for InFlightClaim {
    fn drop(&mut self) {
        self.registry.lock().remove(&self.submission);
    }
}
