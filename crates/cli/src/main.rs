use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use classwork_adapters::DEFAULT_PORT;
use tracing_subscriber::EnvFilter;

mod commands;
use commands::{execute_serve_command, execute_students_command, ServeArgs, StudentsArgs};

/// Log filter used when `RUST_LOG` is unset
const DEFAULT_LOG_FILTER: &str = "classwork=info,tower_http=info";

#[derive(Parser)]
#[command(name = "classwork")]
#[command(about = "Classwork - student validation demo and read-only catalog API")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check the demo student roster
    Students(StudentsCommandArgs),
    /// Serve the book and music catalogs over HTTP
    Serve(ServeCommandArgs),
}

#[derive(Args)]
pub struct StudentsCommandArgs {
    /// Print one JSON object per student
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ServeCommandArgs {
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,
    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,
    /// JSON file with `books` and `musics` arrays replacing the built-in data
    #[arg(long)]
    pub seed: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Commands::Students(args) => execute_students_command(StudentsArgs { json: args.json }),
        Commands::Serve(args) => {
            let serve_args = ServeArgs {
                host: args.host,
                port: args.port,
                seed: args.seed,
            };
            execute_serve_command(serve_args).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["classwork", "serve"]).unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.host, "0.0.0.0");
                assert_eq!(args.port, 8080);
                assert!(args.seed.is_none());
            }
            _ => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::try_parse_from([
            "classwork", "serve", "--host", "127.0.0.1", "-p", "9090", "--seed", "catalog.json",
        ])
        .unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.host, "127.0.0.1");
                assert_eq!(args.port, 9090);
                assert_eq!(args.seed, Some(PathBuf::from("catalog.json")));
            }
            _ => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_students_json_flag() {
        let cli = Cli::try_parse_from(["classwork", "students", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Students(StudentsCommandArgs { json: true })));
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Cli::try_parse_from(["classwork", "serve", "--port", "99999"]).is_err());
    }
}
