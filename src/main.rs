use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

use job_insight::view::{
    render_report, render_report_document, sample_analysis, AnalysisController, FormFields,
    InputTab, SubmitError,
};
use job_insight::{start_web_server, ConfigManager, ServiceClient};

#[derive(Parser)]
#[command(name = "ajips")]
#[command(about = "Analyze job postings and render the report as HTML")]
struct Cli {
    /// Analysis API base URL (overrides config.yaml and AJIPS_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the local web front-end
    Serve {
        #[arg(long)]
        port: Option<u16>,
    },
    /// Submit one job posting and write the rendered report
    Analyze {
        /// Job posting text
        #[arg(long, conflicts_with_all = ["text_file", "url"])]
        text: Option<String>,
        /// File containing the job posting text
        #[arg(long, conflicts_with = "url")]
        text_file: Option<PathBuf>,
        /// Job posting URL
        #[arg(long)]
        url: Option<String>,
        /// File containing résumé text, for a match score
        #[arg(long)]
        resume_file: Option<PathBuf>,
        /// Write the report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render the built-in sample report without calling the API
    Sample {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check the analysis API's health and version
    Status,
}

fn init_tracing() {
    Registry::default()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new(
                "job_insight=info,ajips=info,rocket::server=off",
            )),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = ConfigManager::load()?.with_api_url(cli.api_url);

    match cli.command {
        Command::Serve { port } => start_web_server(config.with_port(port)).await,
        Command::Analyze {
            text,
            text_file,
            url,
            resume_file,
            output,
        } => {
            let job_text = match (text, text_file) {
                (Some(text), _) => text,
                (None, Some(path)) => read_input(&path)?,
                (None, None) => String::new(),
            };
            let resume_text = match resume_file {
                Some(path) => read_input(&path)?,
                None => String::new(),
            };
            let tab = if url.is_some() {
                InputTab::Url
            } else {
                InputTab::Text
            };

            let fields = FormFields {
                job_text,
                job_url: url.unwrap_or_default(),
                resume_text,
            };
            analyze(&config, tab, fields, output.as_deref()).await
        }
        Command::Sample { output } => {
            let fragment = render_report(&sample_analysis());
            write_report(&fragment, output.as_deref())
        }
        Command::Status => status(&config).await,
    }
}

async fn analyze(
    config: &ConfigManager,
    tab: InputTab,
    fields: FormFields,
    output: Option<&Path>,
) -> Result<()> {
    let client = ServiceClient::new(config.service.api_base_url.clone())?;
    let controller = AnalysisController::new(Arc::new(client), config.ui.notice_ttl);
    controller.select_tab(tab);

    match controller.submit(fields).await {
        Ok(fragment) => write_report(&fragment, output),
        Err(SubmitError::Transport(e)) => {
            error!("{}", e);
            Err(anyhow::Error::new(e).context(job_insight::view::TRANSPORT_FAILURE_MESSAGE))
        }
        Err(e) => anyhow::bail!("{}", e),
    }
}

async fn status(config: &ConfigManager) -> Result<()> {
    let client = ServiceClient::new(config.service.api_base_url.clone())?;

    let health = client
        .health()
        .await
        .with_context(|| format!("Analysis API unreachable at {}", client.base_url()))?;
    if !health.is_ok() {
        anyhow::bail!("Analysis API reports status: {}", health.status);
    }
    info!("Analysis API at {} is healthy", client.base_url());

    match client.version().await {
        Ok(version) => println!("{} {} ({})", version.name, version.version, client.base_url()),
        Err(e) => {
            info!("Version endpoint unavailable: {}", e);
            println!("ok ({})", client.base_url());
        }
    }
    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn write_report(fragment: &str, output: Option<&Path>) -> Result<()> {
    let document = render_report_document("AJIPS Report", fragment);
    match output {
        Some(path) => {
            std::fs::write(path, document)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Report written to {}", path.display());
        }
        None => print!("{}", document),
    }
    Ok(())
}
