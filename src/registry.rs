//! Name-to-engine lookup table.
//!
//! Engines are registered once at startup and looked up by key for every
//! prompt. The registry owns its engines; there is no deregistration.

use anyhow::Result;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, warn};

use crate::consts::{DUMMY_ENGINE, OPENAI_ENGINE};
use crate::engine::Engine;
use crate::engine::dummy::DummyEngine;
use crate::engine::openai::{OpenAiConfig, OpenAiEngine};

/// Why a dispatch produced no response.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No engine is registered under this key.
    #[error("unknown engine: {0}")]
    UnknownEngine(String),

    /// The engine was found but its call failed.
    #[error("engine '{name}' failed: {source:#}")]
    Engine {
        name: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Holds all registered engines, keyed by name.
pub struct EngineRegistry {
    engines: HashMap<String, Box<dyn Engine>>,
    order: Vec<String>,
}

impl Default for EngineRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineRegistry {
    pub fn new() -> Self {
        Self {
            engines: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// The stock setup: `openai` when a config is given, plus `dummy`.
    pub fn standard(openai: Option<OpenAiConfig>) -> Result<Self> {
        let mut registry = Self::new();
        match openai {
            Some(config) => {
                registry.register(OPENAI_ENGINE, Box::new(OpenAiEngine::new(config)?));
            }
            None => warn!("OPENAI_API_KEY not set, '{}' engine unavailable", OPENAI_ENGINE),
        }
        registry.register(DUMMY_ENGINE, Box::new(DummyEngine));
        Ok(registry)
    }

    /// Insert or replace the engine for `name`. A replaced name keeps its
    /// original position in [`names`](Self::names).
    pub fn register(&mut self, name: impl Into<String>, engine: Box<dyn Engine>) {
        let name = name.into();
        if self.engines.insert(name.clone(), engine).is_some() {
            debug!(engine = %name, "replaced registered engine");
        } else {
            self.order.push(name);
        }
    }

    /// Registered names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.engines.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.engines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }

    /// Look up `name` and hand `prompt` to its engine. The engine's reply is
    /// returned unchanged.
    pub async fn dispatch(&self, name: &str, prompt: &str) -> Result<String, DispatchError> {
        let engine = self
            .engines
            .get(name)
            .ok_or_else(|| DispatchError::UnknownEngine(name.to_string()))?;

        debug!(engine = name, prompt_len = prompt.len(), "dispatching prompt");

        engine
            .respond(prompt)
            .await
            .map_err(|source| DispatchError::Engine {
                name: name.to_string(),
                source,
            })
    }
}
