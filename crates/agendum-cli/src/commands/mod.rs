pub mod generate;
pub mod ics;
pub mod refine;
pub mod slots;

use clap::ValueEnum;

/// Output language, passed through to the server as `DE` / `EN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "UPPER")]
pub enum LanguageOpt {
    De,
    En,
}

impl LanguageOpt {
    pub fn wire_value(self) -> &'static str {
        match self {
            LanguageOpt::De => "DE",
            LanguageOpt::En => "EN",
        }
    }
}

/// POST a JSON body and fail loudly on a non-success status.
pub(crate) async fn post_json(
    client: &reqwest::Client,
    url: &str,
    body: &serde_json::Value,
) -> Result<reqwest::Response, Box<dyn std::error::Error>> {
    let response = client.post(url).json(body).send().await?;
    let status = response.status();
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        return Err(format!("HTTP error: {status} {text}").into());
    }
    Ok(response)
}

/// Print a payload as pretty JSON when it parses, verbatim otherwise.
pub(crate) fn print_json(payload: &str) {
    match serde_json::from_str::<serde_json::Value>(payload) {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(pretty) => println!("{pretty}"),
            Err(_) => println!("{payload}"),
        },
        Err(_) => println!("{payload}"),
    }
}
