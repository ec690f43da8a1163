use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

use line_up::ai::{Agent, GreedyAgent};
use line_up::config::AppConfig;
use line_up::game::{DiscKind, Game, GameOutcome, Player};
use line_up::notation;

/// Connect Four with boring and magnetic discs.
#[derive(Parser)]
#[command(name = "line-up", about = "Connect Four with boring and magnetic discs")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "line_up.toml")]
    config: PathBuf,

    /// Log engine events to stderr
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a comma-separated move list such as "O4,B3,M5" on a new board
    Replay {
        moves: String,

        /// Write the resulting game to this file
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Let the computer play both seats to the end, whatever the saved mode, then save
    Autoplay {
        /// Continue the game in the configured save file
        #[arg(long)]
        resume: bool,

        /// Override the configured RNG seed
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the default configuration as TOML
    DefaultConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    match cli.command {
        Command::Replay { moves, save } => run_replay(&config, &moves, save),
        Command::Autoplay { resume, seed } => run_autoplay(&config, resume, seed),
        Command::DefaultConfig => {
            print!("{}", AppConfig::default_toml());
            Ok(())
        }
    }
}

fn setup_logging(debug: bool) {
    if !debug {
        return;
    }
    let log_config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .build();
    if let Err(err) = TermLogger::init(
        LevelFilter::Debug,
        log_config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Warning: could not start logger: {err}");
    }
}

fn run_replay(config: &AppConfig, moves: &str, save: Option<PathBuf>) -> Result<()> {
    let mut game = config.game.new_game().context("creating game")?;
    let report = notation::replay(&mut game, moves).context("parsing moves")?;

    for (mv, err) in &report.rejected {
        println!("Rejected {mv}: {err}");
    }
    println!("Applied {} moves.", report.applied);
    print_outcome(&game, report.outcome);

    if let Some(path) = save {
        game.save(&path)
            .with_context(|| format!("saving game to {}", path.display()))?;
        println!("Game saved to {}.", path.display());
    }
    Ok(())
}

fn run_autoplay(config: &AppConfig, resume: bool, seed: Option<u64>) -> Result<()> {
    let save_path = &config.save.path;
    let mut game = if resume {
        Game::load(save_path)
            .with_context(|| format!("loading game from {}", save_path.display()))?
    } else {
        config.game.new_game().context("creating game")?
    };

    let mut agents = match seed.or(config.computer.seed) {
        Some(seed) => [
            GreedyAgent::seeded(seed),
            GreedyAgent::seeded(seed.wrapping_add(1)),
        ],
        None => [GreedyAgent::from_os_rng(), GreedyAgent::from_os_rng()],
    };
    info!(
        "autoplay with {} agents in both seats ({:?} game)",
        agents[0].name(),
        game.mode()
    );

    let mut outcome = None;
    loop {
        let seat = game.current_player_index();
        let name = game.current_player().id().name();
        let Some(mv) = agents[seat].select_move(&game) else {
            println!("{name} has no legal move.");
            break;
        };
        let placement = game
            .play(mv.kind, mv.column)
            .with_context(|| format!("{name} chose illegal move {mv}"))?;
        println!("{name} plays {mv}.");

        outcome = game.outcome_of(&placement);
        if outcome.is_some() {
            break;
        }
        game.switch_player();
    }

    print_outcome(&game, outcome);
    game.save(save_path)
        .with_context(|| format!("saving game to {}", save_path.display()))?;
    println!("Game saved to {}.", save_path.display());
    Ok(())
}

fn print_outcome(game: &Game, outcome: Option<GameOutcome>) {
    match outcome {
        Some(GameOutcome::Winner(owner)) => println!("{} wins!", owner.name()),
        Some(GameOutcome::Draw) => println!("It's a draw."),
        None => println!("No winner yet."),
    }
    for player in game.players() {
        println!("{}", inventory_line(player));
    }
}

fn inventory_line(player: &Player) -> String {
    format!(
        "{}: ordinary {}, boring {}, magnetic {}",
        player.id().name(),
        player.remaining(DiscKind::Ordinary),
        player.remaining(DiscKind::Boring),
        player.remaining(DiscKind::Magnetic)
    )
}
