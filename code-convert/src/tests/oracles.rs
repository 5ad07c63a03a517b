//! Deterministic in-process oracles so the suite stays offline

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{error::Error, oracle::Oracle};

/// Replies with a fixed string and counts how often it was asked.
pub struct StubOracle {
    reply: String,
    calls: AtomicUsize,
}

impl StubOracle {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Oracle for StubOracle {
    async fn translate(&self, _system: &str, _prompt: &str) -> Result<String, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.reply.clone())
    }
}

/// Always fails with the given message.
pub struct FailingOracle {
    message: String,
}

impl FailingOracle {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl Oracle for FailingOracle {
    async fn translate(&self, _system: &str, _prompt: &str) -> Result<String, Error> {
        Err(Error::Oracle(self.message.clone()))
    }
}
