//! Local call adapter
//!
//! Synthesizes a request handle that reports a locally detected error
//! without touching the network. Delivery is synchronous but flows through
//! the same callback contract as transport-backed calls, so callers observe
//! a uniform surface on both paths.

use reelgrid_domain::{ReelgridError, Result};
use tracing::debug;

use crate::handle::RequestHandle;

/// Resolve a call locally with the given structured error.
///
/// The callback is invoked exactly once, before this function returns, and
/// the returned handle is already resolved.
pub fn enqueue_error<T, C>(error: ReelgridError, callback: C) -> RequestHandle
where
    C: FnOnce(Result<T>) + Send + 'static,
{
    debug!(error = %error, "resolving call locally, transport not invoked");
    callback(Err(error));
    RequestHandle::resolved()
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use reelgrid_domain::ErrorCode;

    use super::*;

    #[test]
    fn callback_fires_once_before_return() {
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_clone = Arc::clone(&fired);

        let handle = enqueue_error::<(), _>(
            ReelgridError::invalid_input(ErrorCode::EmptyUri, "blank"),
            move |result| {
                assert!(matches!(result, Err(ReelgridError::InvalidInput { .. })));
                fired_clone.fetch_add(1, Ordering::SeqCst);
            },
        );

        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(handle.is_resolved());
    }
}
