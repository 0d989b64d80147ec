//! Single-flight coordination of credential refreshes.
//!
//! The first request that sees an expired credential becomes the *leader*
//! and performs the refresh; requests that expire while it runs become
//! *followers* and wait for the leader's outcome. Followers are resolved in
//! the order they queued up.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::sync::oneshot;

/// Result of one refresh episode, shared by every waiting request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Refreshed,
    Failed,
}

#[derive(Debug, Default)]
struct RefreshState {
    in_progress: bool,
    /// Bumped on every successful refresh.
    generation: u64,
    waiters: VecDeque<oneshot::Sender<RefreshOutcome>>,
}

/// Owns the in-progress flag and the pending-request queue of one gateway.
#[derive(Debug, Default)]
pub struct RefreshCoordinator {
    state: Mutex<RefreshState>,
}

/// What a request that hit credential expiry should do next.
#[derive(Debug)]
pub enum RefreshTicket<'a> {
    /// No refresh is running: perform it, then settle the lease.
    Leader(RefreshLease<'a>),
    /// A refresh is running: wait for its outcome.
    Follower(RefreshWaiter),
    /// A refresh succeeded after the request was sent: just replay it.
    AlreadyRefreshed,
}

impl RefreshCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generation counter to capture before dispatching a request.
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    pub fn in_progress(&self) -> bool {
        self.lock().in_progress
    }

    /// Number of requests parked behind the running refresh.
    pub fn pending(&self) -> usize {
        self.lock().waiters.len()
    }

    /// Join the current refresh episode, or start a new one.
    ///
    /// `observed` is the generation read before the expired request was
    /// sent. If a refresh has succeeded since then the request was rejected
    /// with a stale credential and only needs a replay.
    pub fn begin(&self, observed: u64) -> RefreshTicket<'_> {
        let mut state = self.lock();
        if state.in_progress {
            let (tx, rx) = oneshot::channel();
            state.waiters.push_back(tx);
            return RefreshTicket::Follower(RefreshWaiter { rx });
        }
        if state.generation != observed {
            return RefreshTicket::AlreadyRefreshed;
        }
        state.in_progress = true;
        RefreshTicket::Leader(RefreshLease {
            coordinator: self,
            settled: false,
        })
    }

    fn release(&self, outcome: RefreshOutcome) -> usize {
        let waiters = {
            let mut state = self.lock();
            state.in_progress = false;
            if outcome == RefreshOutcome::Refreshed {
                state.generation = state.generation.wrapping_add(1);
            }
            std::mem::take(&mut state.waiters)
        };
        let count = waiters.len();
        for waiter in waiters {
            // A follower that was cancelled dropped its receiver.
            let _ = waiter.send(outcome);
        }
        count
    }

    fn lock(&self) -> MutexGuard<'_, RefreshState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Exclusive right to run the refresh for one episode.
///
/// Dropping an unsettled lease (error path, panic, or cancelled future)
/// fails every follower and clears the in-progress flag.
#[derive(Debug)]
pub struct RefreshLease<'a> {
    coordinator: &'a RefreshCoordinator,
    settled: bool,
}

impl RefreshLease<'_> {
    /// Publish the outcome to all followers. Returns how many were waiting.
    pub fn settle(mut self, outcome: RefreshOutcome) -> usize {
        self.settled = true;
        self.coordinator.release(outcome)
    }
}

impl Drop for RefreshLease<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.coordinator.release(RefreshOutcome::Failed);
        }
    }
}

/// A follower's handle on the running refresh.
#[derive(Debug)]
pub struct RefreshWaiter {
    rx: oneshot::Receiver<RefreshOutcome>,
}

impl RefreshWaiter {
    pub async fn outcome(self) -> RefreshOutcome {
        self.rx.await.unwrap_or(RefreshOutcome::Failed)
    }
}
