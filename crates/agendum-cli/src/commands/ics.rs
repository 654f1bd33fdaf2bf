use std::path::PathBuf;

use clap::Args;
use serde_json::json;

use super::post_json;

#[derive(Args)]
pub struct IcsArgs {
    /// Meeting topic
    #[arg(long)]
    pub topic: String,
    /// Meeting location
    #[arg(long)]
    pub location: String,
    /// Start timestamp (ISO)
    #[arg(long)]
    pub start: String,
    /// End timestamp (ISO)
    #[arg(long)]
    pub end: String,
    /// Path to agenda JSON file
    #[arg(long, group = "agenda")]
    pub agenda_json: Option<PathBuf>,
    /// Path to agenda text file
    #[arg(long, group = "agenda")]
    pub agenda_text: Option<PathBuf>,
    /// Destination .ics file
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub async fn run(api_base: &str, args: IcsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let agenda_path = args
        .agenda_json
        .as_ref()
        .or(args.agenda_text.as_ref())
        .ok_or("Either --agenda-json or --agenda-text must be provided for ICS export.")?;
    let agenda_content = std::fs::read_to_string(agenda_path)?;

    let body = json!({
        "topic": args.topic,
        "start_time": args.start,
        "end_time": args.end,
        "location": args.location,
        "agenda_content": agenda_content,
    });

    let client = reqwest::Client::new();
    let response = post_json(&client, &format!("{api_base}/create-ics"), &body).await?;
    let payload = response.bytes().await?;

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("{}.ics", args.topic.replace(' ', "_"))));
    std::fs::write(&output, &payload)?;
    println!("ICS saved to {}", output.display());
    Ok(())
}
