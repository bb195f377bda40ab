//! Request Scope
//!
//! Ties in-flight requests to a page's lifetime. Pages create one scope and
//! call [`RequestScope::cancel_all`] from `on_cleanup`; aborted requests
//! resolve to [`ApiError::Cancelled`] and their late responses never reach
//! page state.

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use futures::future::{AbortHandle, Abortable};

use crate::error::{ApiError, ApiResult};

#[derive(Debug, Default)]
struct Inner {
    closed: AtomicBool,
    next_id: AtomicU64,
    in_flight: Mutex<HashMap<u64, AbortHandle>>,
}

#[derive(Debug, Clone, Default)]
pub struct RequestScope {
    inner: Arc<Inner>,
}

impl RequestScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `request` until it finishes or the scope is cancelled
    pub async fn run<T, F>(&self, request: F) -> ApiResult<T>
    where
        F: Future<Output = ApiResult<T>>,
    {
        if self.is_closed() {
            return Err(ApiError::Cancelled);
        }

        let (handle, registration) = AbortHandle::new_pair();
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.with_in_flight(|in_flight| {
            in_flight.insert(id, handle);
        });

        let outcome = Abortable::new(request, registration).await;
        self.with_in_flight(|in_flight| {
            in_flight.remove(&id);
        });

        match outcome {
            Ok(result) if !self.is_closed() => result,
            _ => Err(ApiError::Cancelled),
        }
    }

    /// Abort everything in flight and refuse new requests
    pub fn cancel_all(&self) {
        self.inner.closed.store(true, Ordering::SeqCst);
        let handles: Vec<AbortHandle> =
            self.with_in_flight(|in_flight| in_flight.drain().map(|(_, h)| h).collect());
        if !handles.is_empty() {
            log::debug!("[SCOPE] aborting {} in-flight requests", handles.len());
        }
        for handle in handles {
            handle.abort();
        }
    }

    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::SeqCst)
    }

    pub fn in_flight(&self) -> usize {
        self.with_in_flight(|in_flight| in_flight.len())
    }

    fn with_in_flight<R>(&self, f: impl FnOnce(&mut HashMap<u64, AbortHandle>) -> R) -> R {
        match self.inner.in_flight.lock() {
            Ok(mut guard) => f(&mut guard),
            Err(poisoned) => f(&mut poisoned.into_inner()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;

    #[tokio::test]
    async fn test_run_passes_result_through() {
        let scope = RequestScope::new();
        assert_eq!(scope.run(async { Ok::<_, ApiError>(7) }).await, Ok(7));
        assert_eq!(
            scope.run(async { Err::<u8, _>(ApiError::Server { status: 500 }) }).await,
            Err(ApiError::Server { status: 500 })
        );
        assert_eq!(scope.in_flight(), 0);
    }

    #[tokio::test]
    async fn test_cancel_aborts_pending_request() {
        let scope = RequestScope::new();
        let (_tx, rx) = oneshot::channel::<u8>();

        let pending = scope.run(async move {
            rx.await.map_err(|_| ApiError::Network("sender dropped".into()))
        });
        futures::pin_mut!(pending);

        // first poll registers the request
        assert!(futures::poll!(pending.as_mut()).is_pending());
        assert_eq!(scope.in_flight(), 1);

        scope.cancel_all();
        assert_eq!(pending.await, Err(ApiError::Cancelled));
        assert_eq!(scope.in_flight(), 0);
    }

    #[tokio::test]
    async fn test_closed_scope_rejects_new_requests() {
        let scope = RequestScope::new();
        scope.cancel_all();
        assert!(scope.is_closed());
        assert_eq!(scope.run(async { Ok::<_, ApiError>(1) }).await, Err(ApiError::Cancelled));
    }
}
