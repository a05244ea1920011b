//! Command-line client for the Pastepad paste API.

use clap::{Parser, Subcommand};
use pastepad_core::models::{CreateDocumentRequest, Document};
use pastepad_core::{ApiClient, ClientError, DEFAULT_SERVER_URL};
use std::io::Read;

#[cfg(test)]
mod tests;

#[derive(Parser)]
#[command(name = "ppaste", about = "Pastepad CLI", version)]
struct Cli {
    /// Server URL (can also be set via PASTEPAD_SERVER env var)
    #[arg(short, long, env = "PASTEPAD_SERVER", default_value = DEFAULT_SERVER_URL)]
    server: String,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a document and print its share URL
    New {
        /// Read content from this file instead of stdin
        #[arg(short, long)]
        file: Option<String>,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        author: Option<String>,
    },
    /// Fetch a document and print its content
    Get { key: String },
    /// Print the raw-view URL for a document
    Raw { key: String },
    /// Check that the server answers
    Ping,
}

fn read_content(file: Option<&str>) -> Result<String, ClientError> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn encode_json(document: &Document) -> Result<String, ClientError> {
    serde_json::to_string_pretty(document)
        .map_err(|err| ClientError::State(format!("response encoding error: {err}")))
}

fn run(cli: Cli) -> Result<String, ClientError> {
    let client = ApiClient::new(&cli.server)?;
    match cli.command {
        Commands::New {
            file,
            title,
            author,
        } => {
            let content = read_content(file.as_deref())?;
            let request = CreateDocumentRequest {
                content,
                title,
                author,
            };
            let document = client.create_document(&request)?;
            if cli.json {
                encode_json(&document)
            } else {
                Ok(client.share_url(&document.key))
            }
        }
        Commands::Get { key } => {
            let document = client.get_document(&key)?;
            if cli.json {
                encode_json(&document)
            } else {
                Ok(document.content)
            }
        }
        Commands::Raw { key } => Ok(client.raw_url(&key)),
        Commands::Ping => {
            client.ping()?;
            Ok(format!("{} is up", client.server()))
        }
    }
}

fn main() {
    let cli = Cli::parse();
    match run(cli) {
        Ok(output) => println!("{}", output),
        Err(err) => {
            eprintln!("Error: {}", err.user_message());
            std::process::exit(1);
        }
    }
}
