use anyhow::Result;
use clap::Parser;
use gc_api::{config::Config, params, Client};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "gcfetch",
    about = "Call a GestãoClick API endpoint and summarize the response"
)]
struct Args {
    #[arg(
        short = 'e',
        long,
        default_value = "/produtos",
        help = "API endpoint to call (e.g. /produtos, /vendas)"
    )]
    endpoint: String,

    #[arg(
        short = 'p',
        long = "param",
        value_name = "KEY=VALUE",
        help = "Filter parameter as key=value. May be repeated, e.g. -p pagina=1 -p ativo=1"
    )]
    params: Vec<String>,

    #[arg(
        long,
        help = "Skip TLS certificate verification. Leaves the connection open to interception; only for endpoints with broken certificates"
    )]
    insecure: bool,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run(Args::parse()).await {
        error!("request failed: {err:#}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let params = params::parse(&args.params);
    let config = Config::from_env()?;
    let http = reqwest::Client::builder()
        .gzip(true)
        .brotli(true)
        .danger_accept_invalid_certs(args.insecure)
        .build()?;
    let client = Client::new(http, config);

    let summary = client.get(&args.endpoint, &params).await?;

    info!("request completed successfully");
    info!("records returned in this page: {}", summary.item_count);
    if summary.first_item_fields.is_empty() {
        info!("no records returned");
    } else {
        info!("first record returned:");
        for (key, value) in &summary.first_item_fields {
            info!("  {key}: {value}");
        }
    }
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
