use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

use bazi_rs::{ALL_ELEMENTS, RecommendConfig, Reading, read};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const PROMPT: &str = "请输入出生年月日与时间 (YYYY-MM-DD HH:MM): ";
const PILLAR_LABELS: [&str; 4] = ["年", "月", "日", "时"];

#[derive(Parser)]
#[command(name = "bazi", about = "BaZi chart, element balance and 4D number suggestions")]
struct Cli {
    /// Birth date and time (YYYY-MM-DD HH:MM or YYYY/MM/DD HH:MM).
    /// Prompted for on stdin when omitted.
    input: Option<String>,
    /// Number of suggestions to draw
    #[arg(long, default_value = "5")]
    sets: usize,
    /// Raise log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn prompt_line() -> io::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{PROMPT}")?;
    stdout.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

/// Report text: pillars, element counts, numbered suggestions.
fn render(reading: &Reading) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n八字:");
    for (label, pillar) in PILLAR_LABELS.iter().zip(reading.pillars.pillars()) {
        let _ = writeln!(out, "{label}柱: {pillar}");
    }
    let _ = writeln!(out, "\n五行强弱:");
    for element in ALL_ELEMENTS {
        let _ = writeln!(out, "{}: {}", element.name(), reading.tally.get(element));
    }
    let _ = writeln!(out, "\n推荐 4D 号码:");
    for (idx, rec) in reading.recommendations.iter().enumerate() {
        let _ = writeln!(out, "{}. {} ({})", idx + 1, rec.number, rec.explanation());
    }
    out
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let raw = match cli.input {
        Some(s) => s,
        None => prompt_line().unwrap_or_else(|e| {
            eprintln!("Failed to read input: {e}");
            std::process::exit(1);
        }),
    };
    debug!(raw = raw.trim(), "input");

    let config = RecommendConfig {
        sets: cli.sets,
        ..RecommendConfig::default()
    };
    let reading = read(&raw, &config).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });
    print!("{}", render(&reading));
}
