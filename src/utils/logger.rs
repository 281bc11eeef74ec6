use env_logger::{Builder, Env};

/// Initialise the global logger for the binaries. `RUST_LOG` takes precedence.
pub fn init_logger(verbose: bool) {
    let default_filter = if verbose {
        "passcheck=debug,mrz_demo=debug,info"
    } else {
        "passcheck=info,mrz_demo=info"
    };

    Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_target(false)
        .format_timestamp(None)
        .init();
}
