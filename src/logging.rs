// src/logging.rs
use env_logger::{Builder, Env};

use crate::args::Args;

/// Initializes stderr logging. `RUST_LOG` takes precedence over the CLI level.
pub fn init(args: &Args) {
    Builder::from_env(Env::default().default_filter_or(args.log_level().as_str()))
        .format_timestamp(None)
        .init();
}
