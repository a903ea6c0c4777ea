mod config;
mod input;
mod play;
mod render;

use std::io::{self, BufRead, Write};

use clap::Parser;
use common::config::Validate;
use common::games::tictactoe::{GameController, Mark, OpponentKind, OpponentSettings};
use common::{log, logger};

use config::{Config, get_config_manager};

#[derive(Parser)]
#[command(name = "tictactoe_ai", about = "Play Tic-Tac-Toe against a search-based opponent")]
struct Args {
    /// minimax, depth-limited or alpha-beta (or 1, 2, 3). Asked interactively when missing.
    #[arg(long)]
    opponent: Option<OpponentKind>,

    /// Search depth of the depth-limited opponent.
    #[arg(long)]
    depth: Option<u32>,

    #[arg(long)]
    alpha_beta_depth: Option<u32>,

    /// YAML config file, defaults to tictactoe_ai_config.yaml next to the executable.
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    quiet: bool,
}

fn resolve_opponent<R: BufRead, W: Write>(
    args: &Args,
    config: &Config,
    input: &mut R,
    output: &mut W,
) -> Result<OpponentSettings, String> {
    let mut settings = match (args.opponent, &config.opponent) {
        (Some(kind), Some(saved)) => OpponentSettings { kind, ..saved.clone() },
        (Some(kind), None) => OpponentSettings::new(kind),
        (None, Some(saved)) => saved.clone(),
        (None, None) => OpponentSettings::new(play::ask_opponent_kind(input, output)?),
    };

    if let Some(depth) = args.depth {
        settings.search_depth = Some(depth);
    }
    if let Some(depth) = args.alpha_beta_depth {
        settings.alpha_beta_depth = depth;
    }
    if settings.kind == OpponentKind::DepthLimited && settings.search_depth.is_none() {
        settings.search_depth = Some(play::ask_search_depth(input, output)?);
    }

    settings.validate()?;
    Ok(settings)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = get_config_manager(args.config.as_deref()).get_config()?;

    let prefix = if args.use_log_prefix || config.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.quiet || config.quiet);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let settings = resolve_opponent(&args, &config, &mut input, &mut output).inspect_err(|e| {
        log!("Invalid opponent configuration: {}", e);
    })?;
    log!("Starting game against the {} opponent", settings.kind);

    let engine = settings.build_engine(Mark::PlayerTwo)?;
    let mut game = GameController::new(engine)?;
    play::run_game(&mut game, &mut input, &mut output)?;

    log!("Goodbye");
    Ok(())
}
