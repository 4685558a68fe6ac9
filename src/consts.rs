//! Project-wide constants.

pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
pub const REPO: &str = env!("CARGO_PKG_REPOSITORY");

/// Default OpenAI model when none is specified.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default OpenAI API root. `/chat/completions` is appended per request.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default HTTP timeout for engine calls, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Registry key of the OpenAI-backed engine.
pub const OPENAI_ENGINE: &str = "openai";

/// Registry key of the offline echo engine.
pub const DUMMY_ENGINE: &str = "dummy";

/// Typed at the engine prompt to leave the REPL (case-insensitive).
pub const EXIT_SENTINEL: &str = "exit";
