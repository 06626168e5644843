use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// File that receives log output, when set.
pub const LOG_PATH_ENV: &str = "BREAD_PLACER_LOG_PATH";

/// Initializes the global logger.
///
/// `RUST_LOG` overrides the default level. When `verbose` is `true` the
/// default is debug, otherwise info. The interactive editor owns the
/// terminal, so without a log file its default level is off.
pub fn init_logging(verbose: bool, interactive: bool, log_path: Option<&Path>) -> Result<()> {
    let level = match (verbose, interactive && log_path.is_none()) {
        (_, true) => LevelFilter::Off,
        (true, false) => LevelFilter::Debug,
        (false, false) => LevelFilter::Info,
    };

    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);

    if let Some(path) = log_path {
        let file = File::create(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    // `try_init` only fails if a logger was already set.
    let _ = builder.try_init();
    Ok(())
}
