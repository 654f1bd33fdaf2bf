use std::path::PathBuf;

use clap::Args;
use serde::Deserialize;
use serde_json::json;

use super::{post_json, print_json, LanguageOpt};

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    agenda: String,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Meeting topic
    #[arg(long)]
    pub topic: String,
    /// Start timestamp (ISO, e.g. 2024-05-01T09:00:00)
    #[arg(long)]
    pub start: String,
    /// End timestamp (ISO)
    #[arg(long)]
    pub end: String,
    #[arg(long, value_enum, default_value_t = LanguageOpt::De)]
    pub language: LanguageOpt,
    /// Email context or notes
    #[arg(long)]
    pub email: Option<String>,
    /// Optional file paths to include as attachments
    #[arg(long, num_args = 0..)]
    pub attachments: Vec<PathBuf>,
    /// Optional file to store agenda JSON
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub async fn run(api_base: &str, args: GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut attachments = Vec::new();
    for path in &args.attachments {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let content = match String::from_utf8(std::fs::read(path)?) {
            Ok(text) => text,
            Err(_) => format!("[Binary file: {name}]"),
        };
        attachments.push(json!({"name": name, "content": content}));
    }

    let body = json!({
        "topic": args.topic,
        "start_time": args.start,
        "end_time": args.end,
        "language": args.language.wire_value(),
        "email_content": args.email,
        "attachments": attachments,
    });

    let client = reqwest::Client::new();
    let response = post_json(&client, &format!("{api_base}/generate-agenda"), &body).await?;
    let payload: GenerateResponse = response.json().await?;

    if let Some(output) = &args.output {
        std::fs::write(output, &payload.agenda)?;
        println!("Agenda JSON stored at {}", output.display());
    } else {
        print_json(&payload.agenda);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_shape_matches_server_contract() {
        let payload: GenerateResponse =
            serde_json::from_str(r#"{"agenda": "{\"title\": \"Sync\"}"}"#).unwrap();
        assert_eq!(payload.agenda, "{\"title\": \"Sync\"}");
    }
}
