use dns_notify_domain::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const WORKSPACE_CRATES: [&str; 4] = [
    "dns_notify",
    "dns_notify_domain",
    "dns_notify_application",
    "dns_notify_infrastructure",
];

/// Installs the global subscriber. `RUST_LOG` takes precedence over the flags.
pub fn init_logging(config: &Config, verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(filter_directives(&config.logging.level, verbose, quiet))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

fn filter_directives(level: &str, verbose: bool, quiet: bool) -> String {
    if quiet {
        return "error".to_string();
    }
    if verbose {
        let crates: Vec<String> = WORKSPACE_CRATES
            .iter()
            .map(|name| format!("{}=debug", name))
            .collect();
        return format!("{},{}", crates.join(","), level.to_ascii_lowercase());
    }
    level.to_ascii_lowercase()
}
