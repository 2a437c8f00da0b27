use std::io::Write;
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use smolfmt::{to_value, Scanner, Segment};

#[derive(Parser)]
#[command(name = "smolfmt")]
#[command(version)]
#[command(about = "Demo, benchmark and checker for the smolfmt engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Force colored output on or off.
    #[arg(long, global = true)]
    color: Option<bool>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a showcase of replacement fields
    Demo,

    /// Time the engine over the showcase scenarios
    Bench {
        /// Number of iterations
        #[arg(short, long, default_value = "100000")]
        iters: u64,
    },

    /// Parse a format string and report its segments and diagnostics
    Check {
        /// The format string to inspect
        #[arg(value_name = "FORMAT")]
        format: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    if let Some(enabled) = cli.color {
        smolfmt::set_color_mode(enabled);
    }

    match cli.command {
        Commands::Demo => demo(),
        Commands::Bench { iters } => bench(iters),
        Commands::Check { format } => check(&format),
    }
}

fn demo() -> Result<()> {
    let mut out = std::io::stdout().lock();
    smolfmt::println(&mut out, "Testing, {}!", &[to_value(&"123")])?;
    smolfmt::println(&mut out, "Testing, {:+9}!", &[to_value(&123)])?;
    smolfmt::println(
        &mut out,
        "Testing, {: =*%D}!",
        &[to_value(&9), to_value(&"123")],
    )?;
    smolfmt::println(&mut out, "Testing, {: -10}!", &[to_value(&123)])?;
    smolfmt::println(&mut out, "Testing, {%c}!", &[to_value(&"ABC")])?;
    smolfmt::println(
        &mut out,
        "{%b}, {%o}, {%d}, {%X} are all {}",
        &[
            to_value(&42),
            to_value(&42),
            to_value(&42),
            to_value(&42),
            to_value(&"forty-two"),
        ],
    )?;
    smolfmt::println(&mut out, "base five: {%r5}", &[to_value(&789942)])?;
    out.flush()?;
    Ok(())
}

fn bench(iters: u64) -> Result<()> {
    log::info!("running {iters} iterations");
    let start = Instant::now();
    for _ in 0..iters {
        smolfmt::null!("Testing, testing, {}!", "123");
        smolfmt::null!("Testing, testing, {: +10}!", 123);
        smolfmt::null!("Testing, testing, {: =*%D}!", 10, "123");
        smolfmt::null!("Testing, testing, {: -10}!", 123);
        smolfmt::null!("Testing, testing, {%c}!", "ABC");
        smolfmt::null!("{%b}, {}, {} {}!!", 42, "it's great", 7u64, "done");
    }
    let secs = start.elapsed().as_secs_f64();
    println!("Took {secs:.3}s to do {iters} iterations.");
    Ok(())
}

fn check(format: &str) -> Result<()> {
    let mut fields = 0usize;
    let mut problems = 0usize;
    for segment in Scanner::new(format) {
        match segment {
            Ok(Segment::Literal(text)) => {
                println!("{} {:?}", "literal".dimmed(), text);
            }
            Ok(Segment::Field(spec)) => {
                fields += 1;
                println!("{} {:?}", "field".green().bold(), spec);
            }
            Err(err) => {
                problems += 1;
                eprintln!("{}[{}]: {}", "error".red().bold(), err.code().cyan(), err);
            }
        }
    }
    println!(
        "{} field(s), {} problem(s)",
        fields,
        if problems > 0 {
            problems.to_string().red().to_string()
        } else {
            problems.to_string()
        }
    );
    if problems > 0 {
        std::process::exit(1);
    }
    Ok(())
}
