use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use ssmlparse::{
    error::Result,
    formatter::{FormatConfig, Formatter, JsonFormatter, SsmlFormatter, TextFormatter},
    parser::{config::ParserConfig, SsmlParser},
    utils::{read_file, write_file},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Plain text with all tags removed
    Text,
    /// Normalized SSML markup
    Ssml,
    /// The parsed tree as JSON
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file path
    #[arg(short, long)]
    file: String,

    /// Output format
    #[arg(short = 't', long = "format", value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Output file path
    #[arg(short, long)]
    output: Option<String>,

    /// Print SSML and JSON on a single line
    #[arg(short, long)]
    compact: bool,

    /// Maximum element nesting depth
    #[arg(long, default_value_t = ssmlparse::parser::config::DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    info!("Reading file: {}", args.file);
    let content = read_file(&args.file)?;

    let config = ParserConfig::default().with_max_depth(args.max_depth);
    let document = SsmlParser::with_config(&content, config)?
        .parse()
        .map_err(|e| e.with_context(format!("while parsing {}", args.file)))?;

    let format_config = if args.compact {
        FormatConfig::compact()
    } else {
        FormatConfig::default()
    };
    let formatted_output = match args.format {
        OutputFormat::Text => TextFormatter.format(&document, &format_config),
        OutputFormat::Ssml => SsmlFormatter.format(&document, &format_config),
        OutputFormat::Json => JsonFormatter.format(&document, &format_config),
    };

    if let Some(output_path) = args.output {
        write_file(&output_path, &formatted_output)?;
        info!("Wrote {} output to {}", format_name(args.format), output_path);
    } else {
        println!("{}", formatted_output);
    }

    Ok(())
}

fn format_name(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "text",
        OutputFormat::Ssml => "ssml",
        OutputFormat::Json => "json",
    }
}
