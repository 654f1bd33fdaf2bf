use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "agendum-cli", version, about = "Agendum CLI")]
struct Cli {
    /// Agendum server base URL
    #[arg(
        long,
        global = true,
        env = "AGENDUM_API_BASE",
        default_value = "http://localhost:8086"
    )]
    api_base: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute deterministic time slots locally (no server needed)
    Slots(commands::slots::SlotsArgs),
    /// Generate a new agenda
    Generate(commands::generate::GenerateArgs),
    /// Refine free-text agenda content
    Refine(commands::refine::RefineArgs),
    /// Create an ICS file from existing agenda content
    Ics(commands::ics::IcsArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Slots(args) => commands::slots::run(args),
        Commands::Generate(args) => commands::generate::run(&cli.api_base, args).await,
        Commands::Refine(args) => commands::refine::run(&cli.api_base, args).await,
        Commands::Ics(args) => commands::ics::run(&cli.api_base, args).await,
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
