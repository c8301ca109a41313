use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes logging for a binary. `RUST_LOG` takes precedence over the
/// `verbose` flag; diagnostics go to stderr so they never mix with results
/// on stdout.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "classic_paths=debug"
        } else {
            "classic_paths=warn"
        })
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()
        .ok();
}
