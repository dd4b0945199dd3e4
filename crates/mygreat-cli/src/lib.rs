//! mygreat command line
//!
//! ```text
//! mygreat [--config FILE] status [--migrations PATTERN] [--records FILE] [--json]
//! mygreat [--config FILE] show NAME [--migrations PATTERN]
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod cli;
pub mod commands;
pub mod report;

pub use cli::{build_cli, resolve_config};
pub use commands::{run, show, status};

/// Install the stderr log subscriber; `RUST_LOG` overrides the `warn` default
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
