use std::sync::Arc;

use anyhow::{Context, bail};
use tracing_subscriber::EnvFilter;

use joblens::catalog;
use joblens::config::Config;
use joblens::extractor;
use joblens::fetcher;
use joblens::storage::FileKeyStore;
use joblens::summary::{GenerateSummaryRequest, SetApiKeyRequest, Session};

const USAGE: &str = "usage:
  joblens <job-url> [--fields key1,key2] [--custom \"free text\"] [--language en|it]
  joblens --set-api-key <key>";

struct CliArgs {
    url: Option<String>,
    fields: Option<Vec<String>>,
    custom: Option<String>,
    language: Option<String>,
    set_api_key: Option<String>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<CliArgs> {
    let mut parsed = CliArgs {
        url: None,
        fields: None,
        custom: None,
        language: None,
        set_api_key: None,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--fields" => {
                let value = args.next().context("--fields needs a value")?;
                parsed.fields = Some(value.split(',').map(|s| s.trim().to_string()).collect());
            }
            "--custom" => parsed.custom = Some(args.next().context("--custom needs a value")?),
            "--language" => {
                parsed.language = Some(args.next().context("--language needs a value")?)
            }
            "--set-api-key" => {
                parsed.set_api_key =
                    Some(args.next().context("--set-api-key needs a value")?)
            }
            "--help" | "-h" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            other if other.starts_with("--") => bail!("unknown flag {other}\n{USAGE}"),
            other => parsed.url = Some(other.to_string()),
        }
    }

    Ok(parsed)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env().context("failed to load configuration")?;
    let store = Arc::new(FileKeyStore::new(config.store_path()));
    let session = Session::new(store, &config);

    let args = parse_args(std::env::args().skip(1))?;

    if let Some(api_key) = args.set_api_key {
        let response = session.set_api_key(&SetApiKeyRequest { api_key }).await;
        if !response.success {
            bail!(response.error.unwrap_or_else(|| "could not save key".into()));
        }
        println!("API key saved");
        return Ok(());
    }

    let Some(url) = args.url else {
        bail!("{USAGE}");
    };

    let page = fetcher::fetch(&url)
        .await
        .context("could not download the job page")?;

    let Some(scraped) = extractor::extract_from_response(&page) else {
        bail!("not a recognized job page; open a job posting and try again");
    };

    let language = match args.language {
        Some(code) => code,
        None => session.preferred_language().await.code().to_string(),
    };

    let selected = args.fields;
    let has_company_reviews = if args.custom.is_some() {
        false
    } else {
        match &selected {
            // "All fields" includes the reputation group.
            None => true,
            Some(keys) => keys.iter().any(|key| catalog::is_reputation_key(key)),
        }
    };

    let request = GenerateSummaryRequest {
        prompt: scraped.as_prompt(),
        selected_fields: selected,
        language,
        is_custom_format: args.custom.is_some(),
        custom_prompt: args.custom.unwrap_or_default(),
        has_company_reviews,
    };

    let response = session.generate_summary(&request).await;
    if !response.success {
        bail!(response.error.unwrap_or_else(|| "summary failed".into()));
    }

    let summary = response.summary.unwrap_or_default();
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
