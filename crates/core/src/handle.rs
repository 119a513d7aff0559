//! Cancellable request handles

use tokio::task::AbortHandle;

/// Handle to an in-flight or already-resolved platform call
///
/// Every facade operation returns one of these synchronously. Callers cannot
/// distinguish a locally resolved handle from a transport-backed one except
/// through [`RequestHandle::is_resolved`].
#[derive(Debug)]
pub struct RequestHandle {
    kind: HandleKind,
}

#[derive(Debug)]
enum HandleKind {
    /// Network-backed dispatch running on the runtime
    Remote(AbortHandle),
    /// Resolved locally before the facade returned
    Resolved,
}

impl RequestHandle {
    pub(crate) const fn remote(abort: AbortHandle) -> Self {
        Self { kind: HandleKind::Remote(abort) }
    }

    pub(crate) const fn resolved() -> Self {
        Self { kind: HandleKind::Resolved }
    }

    /// Cancel the call.
    ///
    /// Aborts a still-running dispatch; the callback is then never invoked.
    /// A no-op on handles that already resolved (including every locally
    /// resolved handle).
    pub fn cancel(&self) {
        if let HandleKind::Remote(abort) = &self.kind {
            abort.abort();
        }
    }

    /// Whether the call has already resolved (callback delivered or aborted).
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        match &self.kind {
            HandleKind::Remote(abort) => abort.is_finished(),
            HandleKind::Resolved => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_handles_report_resolved_and_ignore_cancel() {
        let handle = RequestHandle::resolved();
        assert!(handle.is_resolved());
        handle.cancel();
        assert!(handle.is_resolved());
    }

    #[tokio::test]
    async fn remote_handles_resolve_when_the_task_finishes() {
        let task = tokio::spawn(async {});
        let handle = RequestHandle::remote(task.abort_handle());
        let _ = task.await;
        assert!(handle.is_resolved());
    }

    #[tokio::test]
    async fn cancel_aborts_a_pending_dispatch() {
        let task = tokio::spawn(async {
            tokio::time::sleep(std::time::Duration::from_secs(60)).await;
        });
        let handle = RequestHandle::remote(task.abort_handle());
        handle.cancel();
        assert!(task.await.unwrap_err().is_cancelled());
    }
}
