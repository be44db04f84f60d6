use clap::Parser;
use rootwalk_domain::{validate_domain_name, CliOverrides};
use std::process::ExitCode;
use tracing::{debug, error, info};

mod bootstrap;
mod di;

const EXIT_NO_ANSWER: u8 = 1;
const EXIT_INVALID_INPUT: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "rootwalk")]
#[command(version)]
#[command(about = "Resolve a host name to an IPv4 address by walking the DNS tree from the root servers")]
struct Cli {
    /// Domain name to resolve
    domain: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Per-query timeout in milliseconds
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Seed for query ids and server selection
    #[arg(long)]
    seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Stop at the first malformed, mismatched or missing response
    #[arg(long)]
    strict: bool,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            query_timeout_ms: self.timeout_ms,
            seed: self.seed,
            log_level: self.log_level.clone(),
            strict: self.strict,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config);
    debug!(
        roots = config.root_servers.len(),
        timeout_ms = config.resolver.query_timeout_ms,
        policy = config.resolver.failure_policy.as_str(),
        "Configuration loaded"
    );

    let domain = match validate_domain_name(&cli.domain) {
        Ok(domain) => domain,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(ExitCode::from(EXIT_INVALID_INPUT));
        }
    };

    info!(
        domain = %domain,
        policy = config.resolver.failure_policy.as_str(),
        "Starting resolution from {} root servers",
        config.root_servers.len()
    );

    let resolver = di::build_resolver(&config);

    match resolver.execute(&domain).await {
        Ok(Some(address)) => {
            println!("{}", address);
            Ok(ExitCode::SUCCESS)
        }
        Ok(None) => {
            eprintln!("no authoritative answer obtained for {}", domain);
            Ok(ExitCode::from(EXIT_NO_ANSWER))
        }
        Err(e) => {
            error!(domain = %domain, error = %e, "Resolution aborted");
            eprintln!("no authoritative answer obtained for {}", domain);
            Ok(ExitCode::from(EXIT_NO_ANSWER))
        }
    }
}
