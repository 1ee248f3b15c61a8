//! keybridge entry point.
//!
//! ```text
//! main()
//!  └─ resolve_config_path() / load_config_from()
//!  └─ tracing_subscriber (stderr)
//!  └─ Session::run(stdin)   -- one JSON action per line on stdout
//! ```
//!
//! # Usage (for beginners)
//!
//! ```text
//! $ printf 'Hi!\n:down 19\n:up 19\n' | keybridge
//! {"action":"press_modifier","code":2}
//! {"action":"press_key","code":11}
//! ...
//! ```
//!
//! The optional first argument is the config file path. stdout carries only
//! actions, so it can be piped into another tool while logs go to stderr.
//! `keybridge --init [path]` writes a default config file and exits.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use keybridge_cli::config::{init_config, load_config_from, resolve_config_path};
use keybridge_cli::session::Session;

fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let mut explicit = args.next();

    if explicit.as_deref() == Some("--init") {
        explicit = args.next();
        let path = resolve_config_path(explicit.as_deref())?;
        init_logging("info");
        let created = init_config(&path)
            .with_context(|| format!("writing default config to {}", path.display()))?;
        info!(config = %path.display(), created, "config initialised");
        return Ok(());
    }

    let path = resolve_config_path(explicit.as_deref())?;
    let config = load_config_from(&path)
        .with_context(|| format!("loading config from {}", path.display()))?;
    init_logging(&config.logging.level);

    info!(
        config = %path.display(),
        key_map = %config.keyboard.key_map,
        "keybridge starting"
    );

    let stdout = std::io::stdout();
    let mut session = Session::new(stdout.lock(), &config.keyboard.key_map, config.output.pretty);
    session
        .run(std::io::stdin().lock())
        .context("processing input")?;
    session.finish().context("releasing held keys")?;
    Ok(())
}
