use clap::{Parser, Subcommand};
use colored::Colorize;
use widgetd::mcp::{McpServer, ToolRegistry};
use widgetd::{Config, PlatformClient, Result};

#[derive(Parser)]
#[command(name = "widgetd")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "MCP gateway for the widget platform API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the MCP server on stdio
    Serve,

    /// Print the registered tool catalogue as JSON
    Tools,
}

fn main() {
    let cli = Cli::parse();

    // stdout carries the MCP protocol; logs go to stderr.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to create tokio runtime");

    if let Err(e) = runtime.block_on(run_async(cli)) {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

async fn run_async(cli: Cli) -> Result<()> {
    let config = Config::from_env();
    let client = PlatformClient::new(&config);
    let registry = ToolRegistry::new(client)?;

    match cli.command {
        Commands::Serve => McpServer::new(registry).run().await,
        Commands::Tools => {
            println!("{}", serde_json::to_string_pretty(&registry.list_tools())?);
            Ok(())
        }
    }
}
