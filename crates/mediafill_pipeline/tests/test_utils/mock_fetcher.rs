//! Mock placeholder fetcher for testing.

use async_trait::async_trait;
use mediafill_error::{HttpError, HttpErrorKind, MediafillResult};
use mediafill_interface::ImageFetcher;
use std::sync::{Arc, Mutex};

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum MockBehavior {
    /// Always return these bytes
    Bytes(Vec<u8>),
    /// Always return `Ok(None)`, as for a 404 or empty body
    Empty,
    /// Always fail with a transport error
    Error(String),
}

/// One recorded `fetch_bytes` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCall {
    pub url: String,
    pub suggested_name: String,
}

/// Mock fetcher that records every request without touching the network.
#[derive(Clone)]
pub struct MockFetcher {
    behavior: MockBehavior,
    calls: Arc<Mutex<Vec<FetchCall>>>,
}

#[allow(dead_code)]
impl MockFetcher {
    /// Create a fetcher that always returns `bytes`.
    pub fn new_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::with_behavior(MockBehavior::Bytes(bytes.into()))
    }

    /// Create a fetcher that always returns nothing.
    pub fn new_empty() -> Self {
        Self::with_behavior(MockBehavior::Empty)
    }

    /// Create a fetcher that always fails.
    pub fn new_error(message: impl Into<String>) -> Self {
        Self::with_behavior(MockBehavior::Error(message.into()))
    }

    fn with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every call so far, in order.
    pub fn calls(&self) -> Vec<FetchCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ImageFetcher for MockFetcher {
    async fn fetch_bytes(&self, url: &str, suggested_name: &str) -> MediafillResult<Option<Vec<u8>>> {
        self.calls.lock().unwrap().push(FetchCall {
            url: url.to_string(),
            suggested_name: suggested_name.to_string(),
        });

        match &self.behavior {
            MockBehavior::Bytes(bytes) => Ok(Some(bytes.clone())),
            MockBehavior::Empty => Ok(None),
            MockBehavior::Error(message) => Err(HttpError::new(HttpErrorKind::Request {
                url: url.to_string(),
                reason: message.clone(),
            })
            .into()),
        }
    }
}
