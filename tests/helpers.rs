// Shared test helpers: scripted probers that stand in for the network.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use product_links::{Probe, ValidationResult};

/// What a scripted URL answers.
#[allow(dead_code)] // Not every test file uses every reply
#[derive(Clone, Debug)]
pub enum Reply {
    Status(u16),
    /// Never answers; the probe gives up when its timeout elapses
    Hang,
    /// Fails before a status is received
    Error(&'static str),
}

/// Answers from a table of URL -> reply. Unlisted URLs fail with a
/// connection error. Every probed URL is recorded in order.
#[derive(Default)]
pub struct ScriptedProber {
    replies: HashMap<String, Reply>,
    calls: Mutex<Vec<String>>,
}

#[allow(dead_code)] // Used by other test files
impl ScriptedProber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, url: impl Into<String>, reply: Reply) -> Self {
        self.replies.insert(url.into(), reply);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("calls lock").len()
    }
}

impl Probe for ScriptedProber {
    async fn probe(&self, url: &str, timeout: Duration) -> ValidationResult {
        self.calls.lock().expect("calls lock").push(url.to_string());
        let reply = self
            .replies
            .get(url)
            .cloned()
            .unwrap_or(Reply::Error("connection refused"));
        match reply {
            Reply::Status(status) => ValidationResult::from_status(status),
            Reply::Hang => {
                tokio::time::sleep(timeout).await;
                ValidationResult::timeout()
            }
            Reply::Error(message) => ValidationResult::transport_error(
                product_links::error_handling::ErrorType::HttpRequestConnectError,
                message,
            ),
        }
    }
}

/// Answers 200 to everything and counts calls.
#[derive(Default)]
pub struct CountingProber {
    calls: AtomicUsize,
}

#[allow(dead_code)] // Used by other test files
impl CountingProber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Probe for CountingProber {
    async fn probe(&self, _url: &str, _timeout: Duration) -> ValidationResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        ValidationResult::from_status(200)
    }
}
