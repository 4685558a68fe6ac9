use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::Engine;

/// A scripted engine for tests. Returns pre-defined replies in order.
/// `Err` entries become failures carrying that message.
pub struct MockEngine {
    replies: Vec<std::result::Result<String, String>>,
    index: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl MockEngine {
    pub fn new(replies: Vec<std::result::Result<String, String>>) -> Self {
        Self {
            replies,
            index: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Convenience: a script of successful replies only.
    pub fn replying<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(replies.into_iter().map(|r| Ok(r.into())).collect())
    }

    /// Number of times `respond` has been called.
    pub fn calls(&self) -> usize {
        self.index.load(Ordering::SeqCst)
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Engine for MockEngine {
    async fn respond(&self, prompt: &str) -> Result<String> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        let i = self.index.fetch_add(1, Ordering::SeqCst);
        match self.replies.get(i) {
            Some(Ok(reply)) => Ok(reply.clone()),
            Some(Err(message)) => Err(anyhow!("{message}")),
            None => Err(anyhow!(
                "MockEngine: no more replies (called {} times)",
                i + 1
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replies_in_order() {
        let engine = MockEngine::replying(["one", "two"]);
        assert_eq!(engine.respond("a").await.unwrap(), "one");
        assert_eq!(engine.respond("b").await.unwrap(), "two");
        assert_eq!(engine.calls(), 2);
        assert_eq!(engine.prompts(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn scripted_error_fails() {
        let engine = MockEngine::new(vec![Err("rate limited".to_string())]);
        let err = engine.respond("x").await.unwrap_err();
        assert_eq!(err.to_string(), "rate limited");
    }

    #[tokio::test]
    async fn exhausted_script_fails() {
        let engine = MockEngine::replying(Vec::<String>::new());
        let err = engine.respond("x").await.unwrap_err();
        assert!(err.to_string().contains("no more replies"));
    }
}
