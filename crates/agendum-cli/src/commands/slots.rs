use clap::Args;

use agendum_core::compute_schedule;

#[derive(Args)]
pub struct SlotsArgs {
    /// Start timestamp (ISO, e.g. 2024-05-01T09:00:00)
    #[arg(long)]
    pub start: String,
    /// End timestamp (ISO)
    #[arg(long)]
    pub end: String,
}

pub fn run(args: SlotsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let schedule = compute_schedule(&args.start, &args.end)?;
    println!("{}", serde_json::to_string_pretty(&schedule)?);
    Ok(())
}
