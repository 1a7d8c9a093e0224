use clap::Parser;
use portfolio_site::config::{SiteConfig, TomlConfig};
use portfolio_site::core::ProfileCell;
use portfolio_site::utils::{logger, validation::Validate};
use portfolio_site::{GithubProfileClient, HeadlessApp, LocalStorage, SiteExporter};
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "site_export")]
#[command(about = "Render every page of the portfolio site to static HTML")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Output directory (overrides [export].output_path)
    #[arg(short, long)]
    output: Option<String>,

    /// Skip the profile request
    #[arg(long)]
    offline: bool,

    /// Log as JSON lines
    #[arg(long)]
    json_logs: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting static export");

    let file = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match TomlConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            }
        }
        None => TomlConfig::default(),
    };

    if let Err(e) = file.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let config = SiteConfig::from_provider(&file);
    let output_path = args
        .output
        .clone()
        .or_else(|| file.output_path().map(str::to_string))
        .unwrap_or_else(|| "./site".to_string());

    let mut app = HeadlessApp::headless(&config);
    if !args.offline {
        let client = GithubProfileClient::new(&config)?;
        app.start(Arc::new(client));

        // 請求本身有逾時，這裡多留一秒給回傳事件
        let limit = Duration::from_secs(config.timeout_seconds) + Duration::from_secs(1);
        match app.settle_profile(limit).await {
            ProfileCell::Present(profile) => tracing::info!("👤 Profile: @{}", profile.login),
            ProfileCell::Absent | ProfileCell::Pending => {
                tracing::warn!("Exporting without profile data")
            }
        }
    }

    let exporter = SiteExporter::new(LocalStorage::new(output_path.clone()));
    match exporter.run(&mut app).await {
        Ok(files) => {
            tracing::info!("✅ Export completed successfully!");
            println!("✅ Exported {} files to {}", files.len(), output_path);
            for file in files {
                println!("  - {}", file);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Export failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
