use std::path::PathBuf;

use clap::Args;
use serde::Deserialize;
use serde_json::json;

use super::{post_json, LanguageOpt};

#[derive(Debug, Deserialize)]
struct RefineResponse {
    refined_text: String,
}

#[derive(Args)]
pub struct RefineArgs {
    /// Path to text file to refine
    #[arg(long)]
    pub text_file: PathBuf,
    #[arg(long, value_enum, default_value_t = LanguageOpt::De)]
    pub language: LanguageOpt,
    /// Custom instruction for refinement
    #[arg(long)]
    pub instruction: Option<String>,
    /// Optional file to store refined text
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub async fn run(api_base: &str, args: RefineArgs) -> Result<(), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(&args.text_file)?;

    let body = json!({
        "text": text,
        "instruction": args.instruction,
        "language": args.language.wire_value(),
    });

    let client = reqwest::Client::new();
    let response = post_json(&client, &format!("{api_base}/refine-text"), &body).await?;
    let payload: RefineResponse = response.json().await?;

    if let Some(output) = &args.output {
        std::fs::write(output, &payload.refined_text)?;
        println!("Refined text stored at {}", output.display());
    } else {
        println!("{}", payload.refined_text);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_shape_matches_server_contract() {
        let payload: RefineResponse =
            serde_json::from_str(r#"{"refined_text": "Polished."}"#).unwrap();
        assert_eq!(payload.refined_text, "Polished.");
    }
}
