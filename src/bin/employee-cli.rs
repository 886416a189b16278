use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use url::Url;

#[derive(Parser)]
#[command(name = "employee-cli")]
#[command(about = "Command-line client for the employee proxy", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every employee
    List,
    /// Fetch one employee by id
    Get { id: String },
    /// Find employees whose name contains the text
    Search { text: String },
    /// Show the highest salary
    HighestSalary,
    /// Show the ten best-paid employee names
    TopTen,
    /// Create an employee
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        salary: i64,
        #[arg(long)]
        age: i32,
        #[arg(long)]
        title: String,
    },
    /// Delete an employee by id
    Delete { id: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let proxy = Url::parse(&cli.url)?;

    let request = match cli.command {
        Commands::List => client.get(endpoint(&proxy, &[])?),
        Commands::Get { id } => client.get(endpoint(&proxy, &[id.as_str()])?),
        Commands::Search { text } => client.get(endpoint(&proxy, &["search", text.as_str()])?),
        Commands::HighestSalary => client.get(endpoint(&proxy, &["highestSalary"])?),
        Commands::TopTen => client.get(endpoint(&proxy, &["topTenHighestEarningEmployeeNames"])?),
        Commands::Create {
            name,
            salary,
            age,
            title,
        } => client.post(endpoint(&proxy, &[])?).json(&json!({
            "name": name,
            "salary": salary,
            "age": age,
            "title": title,
        })),
        Commands::Delete { id } => client.delete(endpoint(&proxy, &[id.as_str()])?),
    };

    print_response(request.send().await?).await
}

/// `{proxy}/v1/employee/{segments..}` with every segment percent-encoded.
fn endpoint(proxy: &Url, segments: &[&str]) -> Result<Url, Box<dyn std::error::Error>> {
    if segments.iter().any(|s| *s == "." || *s == "..") {
        return Err("'.' and '..' are not valid employee ids".into());
    }
    let mut url = proxy.clone();
    url.path_segments_mut()
        .map_err(|_| "proxy URL cannot carry a path")?
        .pop_if_empty()
        .extend(["v1", "employee"])
        .extend(segments);
    Ok(url)
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: proxy returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_encodes_user_text() {
        let proxy = Url::parse("http://localhost:8080").unwrap();
        assert_eq!(
            endpoint(&proxy, &["search", "a#b/c"]).unwrap().as_str(),
            "http://localhost:8080/v1/employee/search/a%23b%2Fc"
        );
        assert_eq!(
            endpoint(&proxy, &[]).unwrap().as_str(),
            "http://localhost:8080/v1/employee"
        );
        assert!(endpoint(&proxy, &[".."]).is_err());
    }
}
