//! Tracking of in-flight remote calls.
//!
//! Every request a domain starts is tagged with a [`RequestToken`] and run as
//! an abortable [`Task`]. Completions carry their token back; a completion
//! whose token is no longer tracked belongs to an aborted or superseded
//! request and must be dropped by the caller.

use std::collections::HashMap;
use std::future::Future;

use iced::Task;
use iced::task::Handle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl std::fmt::Display for RequestToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "req#{}", self.0)
    }
}

#[derive(Default)]
pub struct RequestTracker {
    next: u64,
    last_issued: Option<RequestToken>,
    in_flight: HashMap<RequestToken, Handle>,
}

impl std::fmt::Debug for RequestTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut tokens: Vec<_> = self.in_flight.keys().copied().collect();
        tokens.sort();
        f.debug_struct("RequestTracker")
            .field("next", &self.next)
            .field("in_flight", &tokens)
            .finish()
    }
}

impl RequestTracker {
    /// Start `future` as an abortable task. `on_complete` receives the token
    /// issued for this request along with the future's output.
    pub fn perform<T, M>(
        &mut self,
        future: impl Future<Output = T> + Send + 'static,
        on_complete: impl FnOnce(RequestToken, T) -> M + Send + 'static,
    ) -> (RequestToken, Task<M>)
    where
        T: Send + 'static,
        M: Send + 'static,
    {
        let token = RequestToken(self.next);
        self.next += 1;
        self.last_issued = Some(token);

        let (task, handle) =
            Task::perform(future, move |output| on_complete(token, output))
                .abortable();
        self.in_flight.insert(token, handle);

        (token, task)
    }

    /// Mark a request as finished. Returns `false` when the token is not
    /// tracked, meaning the completion is stale.
    pub fn complete(&mut self, token: RequestToken) -> bool {
        self.in_flight.remove(&token).is_some()
    }

    pub fn abort(&mut self, token: RequestToken) {
        if let Some(handle) = self.in_flight.remove(&token) {
            handle.abort();
        }
    }

    pub fn abort_all(&mut self) {
        for (_, handle) in self.in_flight.drain() {
            handle.abort();
        }
    }

    pub fn is_in_flight(&self, token: RequestToken) -> bool {
        self.in_flight.contains_key(&token)
    }

    /// Token of the most recently started request, if any.
    pub fn last_issued(&self) -> Option<RequestToken> {
        self.last_issued
    }

    pub fn len(&self) -> usize {
        self.in_flight.len()
    }

    pub fn is_empty(&self) -> bool {
        self.in_flight.is_empty()
    }
}
