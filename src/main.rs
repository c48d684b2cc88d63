// Wed Aug 5 2026 - Alex

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use objc_metadata_extractor::{
    memory::MachImage,
    provider::AnalysisProvider,
    utils::logging,
};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Objective-C metadata extractor for Mach-O binaries", long_about = None)]
struct Args {
    #[arg(short, long)]
    binary: PathBuf,

    #[arg(short, long, default_value = "analysis.json")]
    output: PathBuf,

    /// Print the analysis dump to stdout instead of summarizing.
    #[arg(long)]
    dump: bool,

    /// Run the category analyzer as a fourth pass.
    #[arg(long)]
    categories: bool,

    #[arg(short, long)]
    verbose: bool,

    #[arg(long)]
    no_progress: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if std::env::var_os("RUST_LOG").is_some() {
        logging::init_from_env();
    } else {
        logging::init_logger(args.verbose);
    }

    println!("{}", "Objective-C Metadata Extractor".cyan().bold());
    println!("{}", "=".repeat(50).cyan());
    println!();

    let start_time = Instant::now();

    println!("{} Loading binary: {}", "[*]".blue(), args.binary.display());

    let mut image = MachImage::load(&args.binary)
        .with_context(|| format!("failed to load {}", args.binary.display()))?;

    println!("{} Binary loaded successfully", "[+]".green());
    println!();

    let spinner = if !args.no_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message("Analyzing Objective-C metadata...");
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let provider = AnalysisProvider::new().with_categories(args.categories);
    let info = provider
        .analyze(&mut image)
        .context("analysis pass failed")?;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    if args.dump {
        println!("{}", info.dump());
        return Ok(());
    }

    println!("{} Classes found: {}", "[+]".green(), info.classes.len());
    println!(
        "{} Categories found: {}",
        "[+]".green(),
        info.categories.len()
    );
    println!(
        "{} Selector refs found: {}",
        "[+]".green(),
        info.selector_refs().len()
    );
    println!(
        "{} CFStrings found: {}",
        "[+]".green(),
        info.cf_strings.len()
    );
    println!(
        "{} Methods resolved: {}",
        "[+]".green(),
        info.total_method_count()
    );

    let mut file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    file.write_all(info.dump().as_bytes())
        .context("failed to write analysis dump")?;

    println!();
    println!("{}", "=".repeat(50).cyan());
    println!(
        "{} Analysis complete in {:.2}s",
        "[+]".green(),
        start_time.elapsed().as_secs_f64()
    );
    println!(
        "{} Results saved to: {}",
        "[+]".green(),
        args.output.display()
    );

    Ok(())
}
