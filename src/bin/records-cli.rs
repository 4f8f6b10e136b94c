use clap::Parser;
use serde_json::Value;

#[derive(Parser)]
#[command(name = "records-cli")]
#[command(about = "Query a running record gateway", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    /// Number of records to request.
    #[arg(long)]
    count: Option<u64>,

    /// Sort field (CreationDate, LastUpdateDate, FirstPublishTime,
    /// TotalVisits, Name, Random).
    #[arg(long)]
    sortby: Option<String>,

    /// Sort direction (Ascending, Descending).
    #[arg(long)]
    sortdirection: Option<String>,

    /// Output format (json, csv, binary).
    #[arg(long)]
    format: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let mut query: Vec<(&str, String)> = Vec::new();
    if let Some(count) = cli.count {
        query.push(("count", count.to_string()));
    }
    if let Some(sortby) = &cli.sortby {
        query.push(("sortby", sortby.clone()));
    }
    if let Some(sortdirection) = &cli.sortdirection {
        query.push(("sortdirection", sortdirection.clone()));
    }
    if let Some(format) = &cli.format {
        query.push(("format", format.clone()));
    }

    let res = client.get(&cli.url).query(&query).send().await?;
    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: gateway returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let is_json = res
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));

    if is_json {
        let json: Value = res.json().await?;
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        println!("{}", res.text().await?);
    }
    Ok(())
}
