use clap::{Parser, Subcommand};
use ferrous_stub_domain::{CliOverrides, QueryType, RecordData, ResolveMode};
use ferrous_stub_infrastructure::StubClient;
use tracing::info;

mod bootstrap;

#[derive(Parser)]
#[command(name = "ferrous-stub")]
#[command(version = "0.1.0")]
#[command(about = "Ferrous Stub - asynchronous stub DNS resolver and connector")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Name server to query (repeatable, tried in order)
    #[arg(short = 's', long = "server", value_name = "ADDR", global = true)]
    servers: Vec<String>,

    /// Per-attempt timeout in seconds
    #[arg(short = 't', long, global = true)]
    timeout: Option<f64>,

    /// Additional attempts after a timeout (negative values clamp to 0)
    #[arg(short = 'r', long, global = true, allow_negative_numbers = true)]
    retries: Option<i64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve names to addresses
    Resolve {
        #[arg(required = true)]
        names: Vec<String>,

        /// Ask for AAAA records instead of A
        #[arg(long)]
        ipv6: bool,
    },
    /// Send a raw query and print every answer record
    Query {
        name: String,

        /// Record type, symbolic (MX) or numeric (15)
        #[arg(short = 'T', long = "type", default_value = "A")]
        record_type: String,
    },
    /// Open a connection to NAME:PORT, trying each resolved address in turn
    Connect {
        name: String,
        port: u16,

        #[arg(long)]
        ipv6: bool,

        /// Wrap the connection in TLS
        #[arg(long)]
        tls: bool,

        /// Certificate name to verify (defaults to NAME)
        #[arg(long, value_name = "HOST")]
        verify_name: Option<String>,
    },
}

fn mode(ipv6: bool) -> ResolveMode {
    if ipv6 {
        ResolveMode::Ipv6
    } else {
        ResolveMode::Ipv4
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        servers: cli.servers.clone(),
        timeout_secs: cli.timeout,
        retries: cli.retries,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting Ferrous Stub v{}", env!("CARGO_PKG_VERSION"));

    let client = StubClient::from_config(&config)?;

    match cli.command {
        Commands::Resolve { names, ipv6 } => {
            for name in names {
                println!("Query: {}", name);
                for address in client.resolve(&name, mode(ipv6)).await? {
                    println!("IP: {}", address);
                }
            }
        }
        Commands::Query { name, record_type } => {
            let record_type: QueryType = match record_type.parse::<i64>() {
                Ok(code) => code.into(),
                Err(_) => record_type.into(),
            };
            let response = client.query(&name, record_type).await?;
            println!("Query: {}", name);
            for answer in &response.answers {
                let data = match &answer.data {
                    RecordData::Address(ip) => ip.to_string(),
                    RecordData::Name(name) => name.clone(),
                    RecordData::Other(text) => text.clone(),
                };
                println!("{}\t{}\t{}\t{}", answer.name, answer.ttl, answer.record_type, data);
            }
        }
        Commands::Connect {
            name,
            port,
            ipv6,
            tls,
            verify_name,
        } => {
            let mut options = client.connect_options(mode(ipv6));
            options.verification_name = verify_name;

            let peer = if tls {
                let stream = client.connect_tls(&name, port, &options).await?;
                stream.get_ref().0.peer_addr()?
            } else {
                client.connect_tcp(&name, port, &options).await?.peer_addr()?
            };
            println!("Connected: {} -> {}", name, peer);
        }
    }

    Ok(())
}
