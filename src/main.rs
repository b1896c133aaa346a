mod config;
mod definitions;
mod error;
mod fetch;
mod generator;
mod naming;
mod params;
mod services;
mod swagger;
mod tags;
mod types;
mod writer;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{GeneratorOptions, TagPolicy, UnknownTypeMode};
use crate::error::Result;
use crate::fetch::{fetch_document, read_document};
use crate::generator::generate;
use crate::writer::{write_outputs, WriteReport};

const DEFAULT_URL: &str = "https://petstore.swagger.io/v2/swagger.json";

#[derive(Parser, Debug)]
#[command(name = "Swagger to TypeScript Generator")]
#[command(version = "0.1.0")]
#[command(about = "Generates TypeScript interfaces and axios services from a Swagger 2 document")]
struct Args {
    /// URL of the swagger json document
    #[arg(long, default_value = DEFAULT_URL, conflicts_with = "input")]
    url: String,

    /// Local swagger json file, read instead of fetching the url
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Directory the generated files are written to
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Which of an operation's tags picks its output file
    #[arg(long, value_enum, default_value_t = TagPolicy::Last)]
    tag_policy: TagPolicy,

    /// Keep the definitions' required properties non-optional
    #[arg(long)]
    required_fields: bool,

    /// How types missing from the document are annotated
    #[arg(long, value_enum, default_value_t = UnknownTypeMode::Omit)]
    unknown_type: UnknownTypeMode,

    /// Base name of the shared definitions file
    #[arg(long, default_value = "newTypes")]
    types_module: String,

    /// Log every generated operation
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn options(&self) -> GeneratorOptions {
        GeneratorOptions {
            tag_policy: self.tag_policy,
            required_fields: self.required_fields,
            unknown_type: self.unknown_type,
            types_module: self.types_module.clone(),
            ..GeneratorOptions::default()
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "swagger_ts_generator=debug"
    } else {
        "swagger_ts_generator=info"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(args: &Args) -> Result<WriteReport> {
    let doc = match &args.input {
        Some(path) => read_document(path)?,
        None => fetch_document(&reqwest::Client::new(), &args.url).await?,
    };
    let files = generate(&doc, &args.options());
    write_outputs(&args.output, files).await
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args).await {
        Ok(report) if report.failures.is_empty() => {
            println!("Successfully generated {} TypeScript files", report.written.len());
            ExitCode::SUCCESS
        }
        Ok(report) => {
            eprintln!(
                "Error: {} of {} files could not be written",
                report.failures.len(),
                report.failures.len() + report.written.len()
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
