//! Tracing setup for the update-protobufs binary.
//!
//! The filter is read from `PROTO_ENUM_LOG` using `RUST_LOG` syntax and
//! defaults to `info`:
//!
//! ```bash
//! PROTO_ENUM_LOG=debug update-protobufs main
//! PROTO_ENUM_LOG="proto_enum_codegen=trace" update-protobufs main
//! ```

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "PROTO_ENUM_LOG";

fn build_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialise the global tracing subscriber. Output goes to stderr.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
