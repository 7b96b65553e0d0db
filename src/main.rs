//! venvup - Bootstrap Python virtual environments for data-science projects

use clap::Parser;

use venvup::cli::Cli;
use venvup::output::json::format_error;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;
    if let Err(e) = cli.run().await {
        if json {
            if let Ok(obj) = format_error(&format!("{e:#}"), "error") {
                eprintln!("{obj}");
            }
        } else {
            eprintln!("Error: {e:#}");
        }
        std::process::exit(1);
    }
}
