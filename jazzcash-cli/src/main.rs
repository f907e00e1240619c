//! JazzCash CLI
//!
//! Command-line interface for the JazzCash mobile-wallet gateway client.
//! Credentials come from the environment (or a `.env` file).

mod config;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jazzcash_client::{JazzCashClient, ReqwestTransport, TransactionRequest};

#[derive(Parser)]
#[command(name = "jazzcash")]
#[command(author, version, about = "JazzCash mobile-wallet gateway CLI", long_about = None)]
struct Cli {
    /// Emit logs as JSON
    #[arg(long, env = "JAZZCASH_LOG_JSON")]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign and submit a mobile-wallet transaction
    Initiate(TransactionArgs),
    /// Print the signed parameters without sending them
    Sign(TransactionArgs),
    /// Compute the secure hash over arbitrary fields
    Hash {
        /// Field as KEY=VALUE (repeatable)
        #[arg(long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
    /// Print the endpoint URL for the configured environment
    Endpoint,
}

#[derive(Args)]
struct TransactionArgs {
    /// Amount in paisa
    #[arg(long)]
    amount: String,
    #[arg(long)]
    bill_reference: String,
    #[arg(long)]
    description: String,
    #[arg(long)]
    return_url: String,
    #[arg(long)]
    custom_param_1: Option<String>,
    #[arg(long)]
    custom_param_2: Option<String>,
    #[arg(long)]
    custom_param_3: Option<String>,
    #[arg(long)]
    custom_param_4: Option<String>,
    #[arg(long)]
    custom_param_5: Option<String>,
}

impl From<TransactionArgs> for TransactionRequest {
    fn from(args: TransactionArgs) -> Self {
        TransactionRequest {
            amount: args.amount.into(),
            bill_reference: args.bill_reference,
            description: args.description,
            return_url: args.return_url,
            custom_param_1: args.custom_param_1,
            custom_param_2: args.custom_param_2,
            custom_param_3: args.custom_param_3,
            custom_param_4: args.custom_param_4,
            custom_param_5: args.custom_param_5,
        }
    }
}

fn parse_field(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got {:?}", s))
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,jazzcash_client=debug".into());

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
        }))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config = config::Config::from_env()?;
    let transport = match config.timeout {
        Some(timeout) => ReqwestTransport::with_timeout(timeout)?,
        None => ReqwestTransport::new(),
    };
    let client = JazzCashClient::new(config.gateway).with_transport(transport);
    info!(
        environment = %client.environment(),
        endpoint = client.endpoint(),
        "Using JazzCash gateway"
    );

    match cli.command {
        Commands::Initiate(args) => {
            let resp = client.initiate_transaction(args.into()).await?;
            match resp.json() {
                Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
                Err(_) => println!("{}", resp.body),
            }
        }

        Commands::Sign(args) => {
            let params = client.build_params(args.into());
            println!("{}", serde_json::to_string_pretty(&params)?);
        }

        Commands::Hash { fields } => {
            if fields.is_empty() {
                anyhow::bail!("at least one --field KEY=VALUE is required");
            }
            let hash = client
                .generate_secure_hash(fields.iter().map(|(k, v)| (k.as_str(), v.as_str())));
            println!("{}", hash);
        }

        Commands::Endpoint => {
            println!("{}", client.endpoint());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field() {
        assert_eq!(
            parse_field("pp_Amount=100").unwrap(),
            ("pp_Amount".to_string(), "100".to_string())
        );
        // Only the first '=' splits.
        assert_eq!(
            parse_field("pp_ReturnURL=https://r?a=b").unwrap(),
            ("pp_ReturnURL".to_string(), "https://r?a=b".to_string())
        );
        assert_eq!(
            parse_field("ppmpf_1=").unwrap(),
            ("ppmpf_1".to_string(), String::new())
        );
        assert!(parse_field("no-separator").is_err());
    }

    #[test]
    fn test_cli_parses_initiate() {
        let cli = Cli::try_parse_from([
            "jazzcash",
            "initiate",
            "--amount",
            "100",
            "--bill-reference",
            "bill",
            "--description",
            "desc",
            "--return-url",
            "https://r",
            "--custom-param-3",
            "c3",
        ])
        .unwrap();

        let Commands::Initiate(args) = cli.command else {
            panic!("expected initiate");
        };
        let req = TransactionRequest::from(args);
        assert_eq!(req.amount.as_str(), "100");
        assert_eq!(req.custom_param_3.as_deref(), Some("c3"));
        assert_eq!(req.custom_param_1, None);
    }

    #[test]
    fn test_cli_parses_endpoint() {
        let cli = Cli::try_parse_from(["jazzcash", "endpoint"]).unwrap();
        assert!(matches!(cli.command, Commands::Endpoint));
    }

    #[test]
    fn test_cli_parses_hash_fields() {
        let cli = Cli::try_parse_from([
            "jazzcash",
            "hash",
            "--field",
            "pp_Version=1.1",
            "--field",
            "pp_Amount=100",
        ])
        .unwrap();

        let Commands::Hash { fields } = cli.command else {
            panic!("expected hash");
        };
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[1], ("pp_Amount".to_string(), "100".to_string()));
    }
}
