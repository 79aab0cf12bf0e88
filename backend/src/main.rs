//! IPCA CLI - Serve or inspect the monthly IPCA series
//!
//! ```bash
//! ipca serve                       # Start HTTP server (port 3000 or $PORT)
//! ipca fetch                       # Fetch from SIDRA, print records as JSON
//! ipca fetch --raw -o raw.json     # Save the untransformed SIDRA table
//! ipca transform raw.json          # Transform a saved SIDRA table
//! ipca url                         # Show the upstream URL
//! ```

use clap::{Parser, Subcommand};
use ipca::{
    ipca_monthly, logging, read_raw_table, transform_table, Settings, SidraClient, SidraQuery,
    TableFetcher,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ipca")]
#[command(about = "Monthly IPCA variation from IBGE SIDRA", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value = "3000")]
        port: u16,
    },

    /// Fetch the IPCA table from SIDRA and print the monthly records
    Fetch {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the upstream table untransformed
        #[arg(long)]
        raw: bool,
    },

    /// Transform a saved SIDRA JSON response
    Transform {
        /// Input JSON file (SIDRA values response, header row included)
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the SIDRA URL queried for the IPCA table
    Url,
}

#[tokio::main]
async fn main() {
    // Load .env file (if present) before clap reads `PORT`
    dotenvy::dotenv().ok();
    logging::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { port } => cmd_serve(port).await,
        Commands::Fetch { output, raw } => cmd_fetch(output.as_deref(), raw).await,
        Commands::Transform { input, output } => cmd_transform(&input, output.as_deref()),
        Commands::Url => cmd_url(),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_serve(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;
    ipca::server::start_server(port, &settings).await?;
    Ok(())
}

async fn cmd_fetch(output: Option<&Path>, raw: bool) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;
    let client = SidraClient::from_settings(&settings)?;
    let query = SidraQuery::ipca_monthly();

    eprintln!("📡 Fetching: {}", query.url(client.base_url()));

    let json = if raw {
        let table = client.fetch_table(&query).await?;
        eprintln!("   {} data rows", table.data_len());
        serde_json::to_string_pretty(&table)?
    } else {
        let records = ipca_monthly(&client).await?;
        eprintln!("✅ {} monthly records", records.len());
        serde_json::to_string_pretty(&records)?
    };

    write_output(&json, output)
}

fn cmd_transform(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Transforming: {}", input.display());

    let table = read_raw_table(input)?;
    eprintln!("   {} data rows", table.data_len());

    let records = transform_table(&table)?;
    eprintln!("✅ {} monthly records", records.len());

    let json = serde_json::to_string_pretty(&records)?;
    write_output(&json, output)
}

fn cmd_url() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;
    println!("{}", SidraQuery::ipca_monthly().url(&settings.sidra_base_url));
    Ok(())
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
