//! Lane Runner terminal host.
//!
//! Owns the single `GameSession`, feeds it keyboard and mouse gestures,
//! ticks it with the measured frame time and draws it with ratatui.

mod ui;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use lane_runner::build_info;
use lane_runner::config::RunnerConfig;
use lane_runner::records::ScoreRecords;
use lane_runner::runner::{
    process_input, tick_session, GameSession, Gesture, RunEvent, RunnerDifficulty, RunnerInput,
};
use lane_runner::utils::persistence::data_path;
use lane_runner::{INPUT_POLL_MS, MAX_FRAME_DT_MS};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::layout::Rect;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use ui::runner_scene::{render_runner_scene, FieldMapping};

const LOG_FILE: &str = "lane-runner.log";

/// Command-line overrides on top of the config file.
#[derive(Debug, Default)]
struct CliOptions {
    difficulty: Option<RunnerDifficulty>,
    lanes: Option<usize>,
    seed: Option<u64>,
    show_help: bool,
    show_version: bool,
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run 'lane-runner --help' for usage.");
            std::process::exit(1);
        }
    };
    if options.show_help {
        print_help();
        return Ok(());
    }
    if options.show_version {
        println!("{}", build_info::version_line());
        return Ok(());
    }

    init_logging();

    let mut config = RunnerConfig::load();
    if let Some(difficulty) = options.difficulty {
        config = config.with_difficulty(difficulty);
    }
    if let Some(lanes) = options.lanes {
        config.lane_count = lanes;
    }
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    }
    let difficulty = options.difficulty.unwrap_or(RunnerDifficulty::Novice);
    log::info!(
        "starting: {} lanes, {} pace, seed {:?}",
        config.lane_count,
        difficulty.name(),
        options.seed
    );

    let mut records = ScoreRecords::load();
    let mut session = GameSession::new(config).with_best_score(records.best_score);
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_game(
        &mut terminal,
        &mut session,
        &mut rng,
        &mut records,
        difficulty.name(),
    );

    // Cleanup terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    println!(
        "Best score: {} ({} games played)",
        records.best_score, records.games_played
    );
    Ok(())
}

fn run_game(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    session: &mut GameSession,
    rng: &mut StdRng,
    records: &mut ScoreRecords,
    difficulty_name: &str,
) -> io::Result<()> {
    let mut field = Rect::default();
    let mut last_tick = Instant::now();
    let swipe_distance = session.config.swipe_threshold * 2.0 + 1.0;

    loop {
        terminal.draw(|frame| {
            field = render_runner_scene(frame, frame.size(), session, difficulty_name);
        })?;

        // Drain everything that arrived since the last frame
        let mut timeout = Duration::from_millis(INPUT_POLL_MS);
        while event::poll(timeout)? {
            timeout = Duration::ZERO;
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => process_input(
                        session,
                        RunnerInput::Swipe(Gesture::new(-swipe_distance, 0.0)),
                    ),
                    KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => process_input(
                        session,
                        RunnerInput::Swipe(Gesture::new(swipe_distance, 0.0)),
                    ),
                    KeyCode::Char(' ') | KeyCode::Enter => {
                        process_input(session, RunnerInput::Swipe(Gesture::default()))
                    }
                    _ => {}
                },
                Event::Mouse(mouse) => {
                    let (x, y) = to_reference(field, mouse.column, mouse.row);
                    match mouse.kind {
                        MouseEventKind::Down(MouseButton::Left) => {
                            process_input(session, RunnerInput::GestureStart { x, y })
                        }
                        MouseEventKind::Up(MouseButton::Left) => {
                            process_input(session, RunnerInput::GestureEnd { x, y })
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        let now = Instant::now();
        let dt_ms = (now - last_tick).as_secs_f64() * 1000.0;
        last_tick = now;

        for event in tick_session(session, dt_ms.min(MAX_FRAME_DT_MS), rng) {
            if let RunEvent::GameOver { final_score, .. } = event {
                if records.record_game(final_score, chrono::Utc::now().timestamp()) {
                    log::info!("new best score {}", final_score);
                }
                if let Err(e) = records.save() {
                    log::warn!("could not save records: {}", e);
                }
            }
        }
    }
}

/// Terminal cell to reference coordinates, clamped to the play field.
fn to_reference(field: Rect, column: u16, row: u16) -> (f64, f64) {
    let map = FieldMapping {
        width: field.width.max(1),
        height: field.height.max(1),
    };
    let col = column
        .saturating_sub(field.x)
        .min(field.width.saturating_sub(1));
    let row = row.saturating_sub(field.y).min(field.height.saturating_sub(1));
    map.to_reference(col, row)
}

/// Route log output to ~/.lane-runner/lane-runner.log; stderr would tear the
/// alternate screen. Logging is skipped if the file cannot be opened.
fn init_logging() {
    let Ok(path) = data_path(LOG_FILE) else {
        return;
    };
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}

/// Parse command-line flags. Malformed values are reported as errors.
fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1);
        match (args[i].as_str(), value) {
            ("--version" | "-v", _) => options.show_version = true,
            ("--help" | "-h", _) => options.show_help = true,
            ("-d" | "--difficulty", Some(v)) => {
                options.difficulty = Some(
                    RunnerDifficulty::from_name(v)
                        .ok_or_else(|| format!("Unknown difficulty: {}", v))?,
                );
                i += 1;
            }
            ("-l" | "--lanes", Some(v)) => {
                options.lanes = Some(
                    v.parse()
                        .map_err(|_| format!("--lanes expects a number, got {}", v))?,
                );
                i += 1;
            }
            ("-s" | "--seed", Some(v)) => {
                options.seed = Some(
                    v.parse()
                        .map_err(|_| format!("--seed expects a number, got {}", v))?,
                );
                i += 1;
            }
            ("-d" | "--difficulty" | "-l" | "--lanes" | "-s" | "--seed", None) => {
                return Err(format!("{} expects a value", args[i]));
            }
            (other, _) => return Err(format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    Ok(options)
}

fn print_help() {
    println!("Lane Runner - dodge obstacles, grab coins\n");
    println!("Usage: lane-runner [options]\n");
    println!("Options:");
    println!("  -d, --difficulty <D>  novice | apprentice | journeyman | master | 0-3");
    println!("  -l, --lanes <N>       Number of lanes, 1-9 (default 3)");
    println!("  -s, --seed <SEED>     Seed the spawner for a repeatable run");
    println!("  -v, --version         Show version information");
    println!("  -h, --help            Show this help message");
    println!("\nSettings are read from ~/.lane-runner/config.json if present.");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("lane-runner")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_overrides() {
        let options = parse_args(&args(&["-d", "master", "--lanes", "4", "--seed", "42"]))
            .expect("valid args");
        assert_eq!(options.difficulty, Some(RunnerDifficulty::Master));
        assert_eq!(options.lanes, Some(4));
        assert_eq!(options.seed, Some(42));
    }

    #[test]
    fn test_bad_seed_is_an_error_like_bad_lanes() {
        assert!(parse_args(&args(&["--seed", "abc"])).is_err());
        assert!(parse_args(&args(&["--lanes", "abc"])).is_err());
        assert!(parse_args(&args(&["--seed"])).is_err());
    }

    #[test]
    fn test_unknown_argument_rejected() {
        assert!(parse_args(&args(&["--fast"])).is_err());
        assert!(parse_args(&args(&["-d", "legendary"])).is_err());
    }

    #[test]
    fn test_help_and_version_flags() {
        let options = parse_args(&args(&["--version"])).expect("valid args");
        assert!(options.show_version);
        assert!(parse_args(&args(&["-h"])).expect("valid args").show_help);
    }
}
