//! Runs one 9x9 drawing through the X/O network and prints every stage.
//!
//!   cargo run -- demos/x.txt
//!   cargo run -- demos/o.txt --json
//!
//! Use '@' for a shaded pixel and '.' for a blank one, nine lines of nine.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;

use ferrite_xo::{report, Network, NetworkSpec, PixelGrid};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Drawing to classify
    #[arg(default_value = "canvas.txt")]
    drawing: String,

    /// NetworkSpec JSON to use instead of the built-in filters and index sets
    #[arg(long)]
    config: Option<String>,

    /// Print the full forward trace as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Write the built-in NetworkSpec to this path and exit
    #[arg(long)]
    dump_config: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| {
        writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args())
    })
    .target(env_logger::Target::Stderr)
    .init();

    if let Err(e) = run(&args) {
        log::error!("Fatal error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    if let Some(path) = &args.dump_config {
        NetworkSpec::default()
            .save_json(path)
            .with_context(|| format!("writing network spec to '{path}'"))?;
        log::info!("wrote built-in network spec to {path}");
        return Ok(());
    }

    let spec = match &args.config {
        Some(path) => NetworkSpec::load_json(path)
            .with_context(|| format!("loading network spec from '{path}'"))?,
        None => NetworkSpec::default(),
    };
    let network = Network::new(spec)?;

    let drawing = PixelGrid::load(&args.drawing)
        .with_context(|| format!("reading drawing '{}'", args.drawing))?;

    let trace = network.forward(&drawing)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&trace)?);
    } else {
        print!("{}", report::render(&trace));
    }
    Ok(())
}
