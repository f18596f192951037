use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use envistry::{declarations, declare, report, ConfigStore, Flag, LoadOptions};

/// Manual test utility: declares a small demo schema, loads it from the
/// environment, applies flag overrides and prints the report table.
#[derive(Debug, Parser)]
#[command(name = "envistry-cli", version, about)]
struct Cli {
    /// Environment files to merge before resolution, in order
    #[arg(long = "env-file", value_name = "PATH")]
    env_files: Vec<PathBuf>,

    /// Override APP_PORT after loading
    #[arg(long)]
    port: Option<i64>,

    /// Override APP_DEBUG after loading
    #[arg(long)]
    debug: Option<bool>,

    /// Override APP_PEERS after loading (comma-separated)
    #[arg(long)]
    peers: Option<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let declarations = declarations![
        declare::string("APP_NAME").default("envistry-demo").not_empty(),
        declare::string("APP_API_KEY").default("local-dev-key").sensitive(),
        declare::string_list("APP_PEERS").default(vec!["localhost".to_string()]),
        declare::boolean("APP_DEBUG").default(false),
        declare::integer("APP_PORT").default(8080),
    ];

    let options = LoadOptions {
        env_files: cli.env_files,
    };
    let mut store = match ConfigStore::load_with_options(declarations, &options) {
        Ok(store) => store,
        Err(error) => {
            eprintln!("failed to load configuration:\n\t{}", error);
            return ExitCode::FAILURE;
        }
    };

    let overrides = [
        ("APP_PORT", cli.port.map(|port| Flag::new("port", port.to_string()))),
        (
            "APP_DEBUG",
            cli.debug.map(|debug| Flag::new("debug", debug.to_string())),
        ),
        ("APP_PEERS", cli.peers.map(|peers| Flag::new("peers", peers))),
    ];
    for (key, flag) in &overrides {
        if let Err(error) = store.bind_flag(key, flag.as_ref()) {
            eprintln!("failed to bind {}: {}", key, error);
            return ExitCode::FAILURE;
        }
    }

    report::print(&store);
    ExitCode::SUCCESS
}
