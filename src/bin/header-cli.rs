use clap::{Parser, Subcommand};
use reqwest::header::{HeaderMap, HeaderValue};

#[derive(Parser)]
#[command(name = "header-cli")]
#[command(about = "Exercise the header-echo endpoints", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080/api/v1")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send Accept-Language and print the echo
    Greeting {
        #[arg(short, long, default_value = "en-US,en;q=0.9")]
        language: String,
    },
    /// Double a number sent in my-number
    Double { number: String },
    /// Show every header the server received
    ListHeaders,
    /// Count distinct header names
    MultiValue,
    /// Derive the base URL from the Host header
    BaseUrl,
    /// Check optional-header presence
    NonRequired {
        #[arg(short, long)]
        value: Option<String>,
    },
    /// Read optional-header with its default
    Default {
        #[arg(short, long)]
        value: Option<String>,
    },
    /// Call every endpoint with sample headers
    All,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    match cli.command {
        Commands::Greeting { language } => {
            call(&client, base, "greeting", &[("accept-language", language.as_str())]).await?;
        }
        Commands::Double { number } => {
            call(&client, base, "double", &[("my-number", number.as_str())]).await?;
        }
        Commands::ListHeaders => {
            call(&client, base, "listHeaders", &[]).await?;
        }
        Commands::MultiValue => {
            call(&client, base, "multiValue", &[]).await?;
        }
        Commands::BaseUrl => {
            call(&client, base, "getBaseUrl", &[]).await?;
        }
        Commands::NonRequired { value } => {
            let headers = optional("optional-header", value.as_deref());
            call(&client, base, "nonRequiredHeader", &headers).await?;
        }
        Commands::Default { value } => {
            let headers = optional("optional-header", value.as_deref());
            call(&client, base, "default", &headers).await?;
        }
        Commands::All => {
            call(&client, base, "greeting", &[("accept-language", "pt-BR,pt;q=0.9")]).await?;
            call(&client, base, "double", &[("my-number", "10")]).await?;
            call(&client, base, "listHeaders", &[("my-number", "10")]).await?;
            call(&client, base, "multiValue", &[("x-multi", "a"), ("x-multi", "b")]).await?;
            call(&client, base, "getBaseUrl", &[]).await?;
            call(&client, base, "nonRequiredHeader", &[]).await?;
            call(&client, base, "nonRequiredHeader", &[("optional-header", "yes")]).await?;
            call(&client, base, "default", &[]).await?;
            call(&client, base, "default", &[("optional-header", "123")]).await?;
        }
    }

    Ok(())
}

fn optional<'a>(name: &'a str, value: Option<&'a str>) -> Vec<(&'a str, &'a str)> {
    value.map(|v| vec![(name, v)]).unwrap_or_default()
}

async fn call(
    client: &reqwest::Client,
    base: &str,
    endpoint: &str,
    headers: &[(&str, &str)],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        map.append(
            reqwest::header::HeaderName::from_bytes(name.as_bytes())?,
            HeaderValue::from_str(value)?,
        );
    }

    let res = client
        .get(format!("{}/{}", base, endpoint))
        .headers(map)
        .send()
        .await?;

    let status = res.status();
    let body = res.text().await?;
    if status.is_success() {
        println!("GET /{} -> {}\n{}", endpoint, status, body);
    } else {
        eprintln!("GET /{} -> {}\n{}", endpoint, status, body);
    }
    Ok(())
}
