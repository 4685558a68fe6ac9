use anyhow::Result;
use async_trait::async_trait;

use super::Engine;

/// Offline engine that echoes the prompt back. Deterministic, never fails.
pub struct DummyEngine;

impl DummyEngine {
    fn reply(prompt: &str) -> String {
        format!("[dummy] You said: {prompt}")
    }
}

#[async_trait]
impl Engine for DummyEngine {
    async fn respond(&self, prompt: &str) -> Result<String> {
        Ok(Self::reply(prompt))
    }
}
