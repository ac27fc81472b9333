//! Log output for the CLI

use tracing_subscriber::{EnvFilter, fmt};

/// Install a stderr `fmt` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the generator logs at `info`, or
/// `debug` with `--verbose`.
pub fn init(verbose: bool) {
    let default_filter = if verbose {
        "strpool=debug,strpool_codegen=debug"
    } else {
        "strpool=info,strpool_codegen=info"
    };

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
