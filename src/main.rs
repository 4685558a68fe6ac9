use std::io::{self, Write};
use std::time::Duration;

use clap::Parser;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use switchboard::banner::{BannerInfo, print_banner};
use switchboard::consts::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS, DUMMY_ENGINE};
use switchboard::engine::openai::OpenAiConfig;
use switchboard::registry::EngineRegistry;
use switchboard::repl::Repl;

#[derive(Parser)]
#[command(name = "switchboard", version, about = "Send prompts to one of several AI engines.")]
struct Cli {
    /// Engine to use with --run
    #[arg(short, long, default_value = DUMMY_ENGINE, requires = "run")]
    engine: String,

    /// Send a single prompt and exit (non-interactive)
    #[arg(short, long)]
    run: Option<String>,

    /// Print the registered engine names and exit
    #[arg(long, default_value_t = false)]
    list: bool,

    /// OpenAI API key; the openai engine is disabled without one
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// OpenAI model name
    #[arg(long, env = "OPENAI_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// OpenAI API root URL
    #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// HTTP timeout in seconds for engine calls
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: u64,

    /// Cap on tokens generated per reply
    #[arg(long)]
    max_tokens: Option<u32>,

    /// System prompt sent ahead of every user prompt
    #[arg(long)]
    system: Option<String>,

    /// Verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

impl Cli {
    fn openai_config(&self) -> Option<OpenAiConfig> {
        let key = self.api_key.as_deref().filter(|k| !k.trim().is_empty())?;
        Some(OpenAiConfig {
            model: self.model.clone(),
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout),
            max_tokens: self.max_tokens,
            system_prompt: self.system.clone(),
            ..OpenAiConfig::new(key)
        })
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let openai = cli.openai_config();
    let auth_status = if openai.is_some() {
        "API key ✓"
    } else {
        "not authenticated"
    };
    let registry = EngineRegistry::standard(openai)?;

    if cli.list {
        for name in registry.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    // Single prompt mode
    if let Some(prompt) = &cli.run {
        let engine = cli.engine.trim().to_lowercase();
        let response = registry.dispatch(&engine, prompt.trim()).await?;
        println!("{}", response);
        return Ok(());
    }

    let names = registry.names();
    print_banner(&BannerInfo {
        engines: &names,
        model: &cli.model,
        auth_status,
    });

    let repl = Repl::new(&registry);
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = io::stdout();

    // Ctrl+C anywhere ends the session
    tokio::select! {
        result = repl.run(stdin, &mut stdout) => result?,
        _ = tokio::signal::ctrl_c() => {
            println!("\nGoodbye!");
            io::stdout().flush()?;
            // tokio's Stdin reads on a blocking-pool thread that cannot be
            // cancelled; dropping the runtime would wait for the next line.
            std::process::exit(0);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("switchboard").chain(args.iter().copied()))
    }

    #[test]
    fn openai_config_from_flags() {
        let cli = parse(&[
            "--api-key",
            "sk-flag",
            "--model",
            "gpt-test",
            "--base-url",
            "http://localhost:9/v1",
            "--timeout",
            "5",
            "--max-tokens",
            "32",
            "--system",
            "be brief",
        ])
        .unwrap();
        let config = cli.openai_config().unwrap();
        assert_eq!(config.api_key, "sk-flag");
        assert_eq!(config.model, "gpt-test");
        assert_eq!(config.base_url, "http://localhost:9/v1");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.max_tokens, Some(32));
        assert_eq!(config.system_prompt.as_deref(), Some("be brief"));
    }

    #[test]
    fn blank_api_key_disables_openai() {
        let cli = parse(&["--api-key", "   "]).unwrap();
        assert!(cli.openai_config().is_none());
    }

    #[test]
    fn engine_defaults_to_dummy_with_run() {
        let cli = parse(&["--run", "hello"]).unwrap();
        assert_eq!(cli.engine, DUMMY_ENGINE);
        assert_eq!(cli.run.as_deref(), Some("hello"));
    }

    #[test]
    fn engine_without_run_is_rejected() {
        let err = parse(&["--engine", "openai"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = parse(&["--timeout", "0"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn timeout_defaults() {
        let cli = parse(&[]).unwrap();
        assert_eq!(cli.timeout, DEFAULT_TIMEOUT_SECS);
    }
}
