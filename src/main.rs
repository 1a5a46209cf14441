mod term;

use std::fs::File;
use std::path::PathBuf;
use std::thread::sleep;
use std::time::{Duration, Instant};

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::{error, info};
use simplelog::{Config, LevelFilter, WriteLogger};

use snake_arcade::config::{self, GameConfig};
use snake_arcade::Game;
use term::TermManager;

const FRAME_INTERVAL_MS: u64 = 16;

/// Snake on a fixed grid, in the terminal.
#[derive(Debug, Parser)]
#[command(name = "snake-arcade", version)]
struct Args {
    /// Play field width in pixels
    #[arg(long, default_value_t = config::FIELD_WIDTH)]
    width: u32,

    /// Play field height in pixels
    #[arg(long, default_value_t = config::FIELD_HEIGHT)]
    height: u32,

    /// Edge length of one grid cell in pixels
    #[arg(long, default_value_t = config::SEGMENT_SIZE)]
    segment_size: u32,

    /// Seed for food placement; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Where log lines go, the terminal belongs to the game
    #[arg(long, default_value = "snake-arcade.log")]
    log_file: PathBuf,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Args {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            field_width: self.width,
            field_height: self.height,
            segment_size: self.segment_size,
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_file = File::create(&args.log_file)
        .with_context(|| format!("cannot create log file {}", args.log_file.display()))?;
    WriteLogger::init(args.log_level.into(), Config::default(), log_file)
        .map_err(|err| anyhow!("logger setup failed: {}", err))?;

    let config = args.game_config();
    let grid = config.validate().context("invalid play field")?;
    let mut term = TermManager::new().context("cannot query the terminal")?;

    if !term.fits(&grid) {
        let (w, h) = term.get_terminal_size();
        let (need_w, need_h) = term::required_size(&grid);
        bail!(
            "a {}x{} grid needs a terminal of at least {}x{}, this one is {}x{}",
            grid.width(),
            grid.height(),
            need_w,
            need_h,
            w,
            h
        );
    }

    let mut game = Game::new(grid, config.rng());

    info!("Starting snake-arcade");
    term.setup().context("terminal setup failed")?;

    let res = run(&mut game, &mut term);
    let restored = term.restore().context("cannot restore the terminal");
    info!("Bye, final score {}", game.score());

    shutdown_result(res, restored)
}

/// Logs both failures. A loop failure is returned ahead of a restore failure.
fn shutdown_result(res: Result<()>, restored: Result<()>) -> Result<()> {
    if let Err(err) = &res {
        error!("Game loop failed: {:#}", err);
    }
    if let Err(err) = &restored {
        error!("{:#}", err);
    }
    res.and(restored)
}

fn run(game: &mut Game, term: &mut TermManager) -> Result<()> {
    let mut last_frame = Instant::now();

    loop {
        sleep(Duration::from_millis(FRAME_INTERVAL_MS));

        let polled = term.read_input()?;
        if polled.interrupted {
            info!("Interrupted with Ctrl+C");
            return Ok(());
        }

        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        game.update(dt, &polled.input);
        if game.exit_requested() {
            return Ok(());
        }

        term.draw(&game.scene(), game.grid())?;
    }
}
