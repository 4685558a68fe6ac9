pub mod dummy;
pub mod mock;
pub mod openai;

use anyhow::Result;
use async_trait::async_trait;

/// Something that turns a prompt into a reply. Could be a remote model,
/// a canned echo, or a test script.
#[async_trait]
pub trait Engine: Send + Sync {
    async fn respond(&self, prompt: &str) -> Result<String>;
}
