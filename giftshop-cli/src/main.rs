use anyhow::Result;
use clap::Parser;
use tracing::warn;

use giftshop_cli::logging;
use giftshop_core::{IdProcessor, OutputFormat, ScanConfig, StepProfiler};

#[derive(Parser)]
#[command(name = "giftshop")]
#[command(about = "Sum the product IDs made of a repeated digit block over a list of ranges")]
struct Args {
    /// Path to the range list ("-" reads stdin). Defaults to the config's
    /// input_file, which is input.txt unless overridden.
    #[arg(short, long)]
    input: Option<String>,

    /// Path to custom config file (YAML format)
    #[arg(short, long)]
    config: Option<String>,

    /// Output format: text or json
    #[arg(short = 'f', long, default_value = "text")]
    output_format: String,

    /// Scan each range on the rayon thread pool
    #[arg(long)]
    parallel: bool,

    /// Print timings for the load, parse and scan steps to stderr
    #[arg(long)]
    profile: bool,

    /// Log filter for diagnostics on stderr (RUST_LOG takes precedence)
    #[arg(long, default_value = logging::DEFAULT_LEVEL)]
    log_level: String,

    /// Print the effective configuration as YAML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(&args.log_level);

    // Load config, then apply CLI overrides
    let mut config = ScanConfig::load_with_fallback(args.config.as_deref());
    if let Some(input) = &args.input {
        config.input_file = input.clone();
    }
    if args.parallel {
        config.parallel = true;
    }

    if args.print_config {
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    let format = args.output_format.parse::<OutputFormat>().unwrap_or_else(|e| {
        warn!("{e}, using text");
        OutputFormat::Text
    });

    let processor = IdProcessor::new(config);
    let mut profiler = StepProfiler::new(args.profile);
    let loaded = processor.load_input(&mut profiler)?;

    // Notice first, ahead of any skipped-token warning. Keep stdout pure
    // JSON when a machine reads it.
    if format == OutputFormat::Text {
        println!("{}", loaded.origin.notice());
    }

    let report = processor.process_loaded(loaded, &mut profiler)?;
    print!("{}", report.render(format)?);
    if format == OutputFormat::Json {
        println!();
    }

    if let Some(summary) = profiler.summary() {
        eprintln!("{summary}");
    }
    Ok(())
}
