//! Balance simulator CLI.
//!
//! Plays many autopilot runs to compare difficulty presets.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                     # 500 Novice runs
//!   cargo run --bin simulate -- -n 100 -d master # 100 Master runs
//!   cargo run --bin simulate -- --seed 42        # Reproducible run

use lane_runner::runner::RunnerDifficulty;
use lane_runner::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              LANE RUNNER BALANCE SIMULATOR                    ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Difficulty:     {}", config.difficulty.name());
    println!("  Tick:           {}ms", config.tick_ms);
    println!("  Time Cap:       {:.0}s", config.max_ms_per_run / 1000.0);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, report.to_json()) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => {
                eprintln!("Failed to write {}: {}", filename, e);
                std::process::exit(1);
            }
        }
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(500);
                    i += 1;
                }
            }
            "-d" | "--difficulty" => {
                if i + 1 < args.len() {
                    match RunnerDifficulty::from_name(&args[i + 1]) {
                        Some(d) => config.difficulty = d,
                        None => {
                            eprintln!("Unknown difficulty: {}", args[i + 1]);
                            std::process::exit(1);
                        }
                    }
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse() {
                        Ok(seed) => config.seed = Some(seed),
                        Err(_) => {
                            eprintln!("--seed expects a number, got {}", args[i + 1]);
                            std::process::exit(1);
                        }
                    }
                    i += 1;
                }
            }
            "--tick" => {
                if i + 1 < args.len() {
                    config.tick_ms = args[i + 1]
                        .parse::<f64>()
                        .ok()
                        .filter(|t| *t > 0.0)
                        .unwrap_or(16.0);
                    i += 1;
                }
            }
            "--cap" => {
                if i + 1 < args.len() {
                    if let Ok(secs) = args[i + 1].parse::<f64>() {
                        config.max_ms_per_run = secs * 1000.0;
                    }
                    i += 1;
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Lane Runner Balance Simulator\n");
    println!("Usage: simulate [OPTIONS]\n");
    println!("Options:");
    println!("  -n, --runs <N>          Number of runs (default 500)");
    println!("  -d, --difficulty <D>    novice | apprentice | journeyman | master | 0-3");
    println!("  -s, --seed <SEED>       Seed for reproducible runs");
    println!("      --tick <MS>         Tick length in milliseconds (default 16)");
    println!("      --cap <SECS>        Stop runs that survive this long (default 300)");
    println!("      --json              Also write a JSON report");
    println!("  -v, --verbose           Print every run");
    println!("  -h, --help              Show this help message");
}
