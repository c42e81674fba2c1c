use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use gdpr_obfuscator::config;
use gdpr_obfuscator::errors::ObfuscatorError;
use gdpr_obfuscator::formats::Format;
use gdpr_obfuscator::logger;
use gdpr_obfuscator::obfuscator::obfuscate_stream;
use gdpr_obfuscator::policy::{ObfuscationPolicy, DEFAULT_MASK, DEFAULT_TOKEN_LENGTH};

#[derive(Parser)]
#[command(
    name = "gdpr-obfuscator",
    version,
    about = "Replace sensitive fields in tabular files with deterministic tokens or a fixed mask"
)]
struct Cli {
    /// Input file path
    #[arg(short, long)]
    input: PathBuf,

    /// Output file path
    #[arg(short, long)]
    output: PathBuf,

    /// Comma-separated list of sensitive field names
    #[arg(short, long)]
    fields: String,

    /// Field whose value seeds deterministic token generation
    #[arg(long, default_value = "id")]
    pk: String,

    /// Format override; detected from the input filename when omitted
    #[arg(long)]
    format: Option<String>,

    /// Use a fixed mask string instead of deterministic tokens
    #[arg(long)]
    mask: bool,

    #[arg(long, default_value = DEFAULT_MASK)]
    mask_value: String,

    #[arg(long, default_value_t = DEFAULT_TOKEN_LENGTH)]
    token_length: usize,

    /// HMAC secret key; falls back to the OBFUSCATOR_KEY environment variable
    #[arg(long)]
    key: Option<String>,
}

fn main() -> Result<(), ObfuscatorError> {
    logger::init();
    let cli = Cli::parse();

    let sensitive: Vec<String> = cli
        .fields
        .split(',')
        .map(|field| field.trim().to_string())
        .collect();

    let policy = if cli.mask {
        ObfuscationPolicy::mask(sensitive, cli.pk, cli.mask_value)?
    } else {
        let key = config::resolve_secret_key(cli.key.as_deref())?;
        ObfuscationPolicy::token(key, sensitive, cli.pk, cli.token_length)?
    };

    let format = Format::resolve(
        cli.format.as_deref(),
        cli.input.file_name().and_then(|name| name.to_str()),
    )?;

    info!(
        input = %cli.input.display(),
        output = %cli.output.display(),
        format = format.name(),
        "starting obfuscation run"
    );

    let input = File::open(&cli.input)?;
    let output = File::create(&cli.output)?;
    let count = obfuscate_stream(input, output, &policy, format)?;

    info!(records = count, "run finished");
    Ok(())
}
