//! har2swagger CLI entrypoint
//! Parses command-line arguments and dispatches to the core converter.

// Internal imports (std, crate)
use std::path::PathBuf;

// External imports (alphabetized)
use anyhow::Context;
use clap::{Parser, ValueEnum};
use har2swagger_core::{
    generate_from_records, Config, ExampleSchemaInference, HarContext, SwaggerDocument,
};
use tokio::fs;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "har2swagger")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Infer a Swagger 2.0 document from a HAR capture
    Convert {
        /// Path or URL to the HAR file
        ///
        /// Example: --har captures/session.har
        /// Example: --har https://example.com/session.har
        #[arg(long)]
        har: String,
        /// Configuration file (YAML or JSON) with `info` and `options`
        #[arg(long)]
        config: Option<PathBuf>,
        /// Output file; the document is printed to stdout when omitted
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        /// API title (overrides the config file)
        #[arg(long)]
        title: Option<String>,
        /// API version (overrides the config file)
        #[arg(long)]
        api_version: Option<String>,
        /// API description (overrides the config file)
        #[arg(long)]
        description: Option<String>,
        /// Type every query/path parameter as string instead of guessing
        #[arg(long)]
        no_guess_data_type: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

impl OutputFormat {
    fn render(self, doc: &SwaggerDocument) -> har2swagger_core::Result<String> {
        match self {
            OutputFormat::Json => doc.to_json_string(),
            OutputFormat::Yaml => doc.to_yaml_string(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Convert {
            har,
            config,
            output,
            format,
            title,
            api_version,
            description,
            no_guess_data_type,
        } => {
            // Load config file first, then apply flag overrides
            let mut config = match &config {
                Some(path) => Config::from_file(path)
                    .await
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => Config::default(),
            };
            if title.is_some() {
                config.info.title = title;
            }
            if api_version.is_some() {
                config.info.version = api_version;
            }
            if description.is_some() {
                config.info.description = description;
            }
            if no_guess_data_type {
                config.options.guess_data_type = false;
            }

            tracing::info!(har = %har, "Loading HAR");
            let context = HarContext::from_file_or_url(&har)
                .await
                .with_context(|| format!("Failed to load HAR from {}", har))?;

            let doc = generate_from_records(
                context.records(),
                Some(config.info),
                &config.options,
                &ExampleSchemaInference,
            )
            .with_context(|| format!("Failed to convert {}", har))?;

            let rendered = format.render(&doc)?;
            match output {
                Some(path) => {
                    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                        fs::create_dir_all(parent).await.with_context(|| {
                            format!("Failed to create directory {}", parent.display())
                        })?;
                    }
                    fs::write(&path, rendered)
                        .await
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    tracing::info!(
                        paths = doc.paths.len(),
                        definitions = doc.definitions.len(),
                        "Wrote {}",
                        path.display()
                    );
                }
                None => println!("{}", rendered),
            }
        }
    }
    Ok(())
}
