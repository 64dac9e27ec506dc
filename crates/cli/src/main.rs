use clap::Parser;
use dns_notify_application::use_cases::NotifyOptions;
use dns_notify_domain::{CliOverrides, Config, NotifyTransport};
use std::io;
use std::process::ExitCode;
use tracing::debug;

mod bootstrap;
mod di;
mod output;

#[derive(Parser, Debug)]
#[command(name = "dns-notify")]
#[command(version)]
#[command(about = "Send DNS NOTIFY messages for a zone to a set of name servers")]
struct Cli {
    /// Zone to notify
    #[arg(short = 'd', long, value_parser = clap::builder::NonEmptyStringValueParser::new())]
    domain: String,

    /// Servers to notify (host, host:port, [v6] or [v6]:port)
    #[arg(value_name = "SERVER")]
    servers: Vec<String>,

    /// Timeout for each response, in milliseconds
    #[arg(short = 't', long, value_name = "MS")]
    timeout: Option<u64>,

    /// Be extra verbose
    #[arg(short = 'v', long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only output on errors
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Send over TCP instead of UDP
    #[arg(long)]
    tcp: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            timeout_ms: self.timeout,
            transport: self.tcp.then_some(NotifyTransport::Tcp),
            log_level: self.log_level.clone(),
        }
    }

    /// Loads and validates the configuration. Bad flag values or an unusable
    /// config file are usage errors, reported before logging is set up.
    fn load_config(&self) -> Result<Config, u8> {
        bootstrap::load_config(self.config.as_deref(), self.overrides()).map_err(|e| {
            eprintln!("{:#}", e);
            output::EXIT_USAGE
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(code) => return Ok(ExitCode::from(code)),
    };

    bootstrap::init_logging(&config, cli.verbose, cli.quiet);

    let servers = if cli.servers.is_empty() {
        config.notify.servers.clone()
    } else {
        cli.servers.clone()
    };

    debug!(
        domain = %cli.domain,
        servers = servers.len(),
        transport = %config.notify.transport,
        "Starting dns-notify v{}",
        env!("CARGO_PKG_VERSION")
    );

    let services = di::NotifyServices::new(&config);
    let options = NotifyOptions::from(&config.notify);

    let results = match services
        .send_notify
        .execute(&cli.domain, &servers, options)
        .await
    {
        Ok(results) => results,
        Err(e) => {
            debug!(error = %e, domain = %cli.domain, "Notify rejected");
            if cli.json {
                let response = output::NotifyResponseDto::from_error(&e);
                output::render_json(&response, &mut io::stdout())?;
            } else {
                eprintln!("{}", e);
            }
            return Ok(ExitCode::from(output::EXIT_USAGE));
        }
    };

    if cli.json {
        let response = output::NotifyResponseDto::from_results(&results);
        output::render_json(&response, &mut io::stdout())?;
    } else {
        output::render_text(&results, cli.quiet, &mut io::stdout(), &mut io::stderr())?;
    }

    Ok(ExitCode::from(output::exit_status(&results)))
}
