mod cli;
mod game;
mod options;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use common::{get_env_usize, ConfigLoader};
use connect4::{ConnectFourEvaluator, ConnectFourRules};
use dotenv::dotenv;
use env_logger::Env;
use game::play_game;
use log::info;
use options::{ConnectFourOptions, TicTacToeOptions, CONNECT_FOUR_SCOPE, TIC_TAC_TOE_SCOPE};
use tictactoe::{TicTacToeEvaluator, TicTacToeRules};

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Some(threads) = get_env_usize("SEARCH_THREADS")? {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to size the search thread pool")?;
    }

    let cli = Cli::parse();

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();

    match &cli.command {
        Commands::TicTacToe(args) => {
            let config = load_config(args.config.as_deref(), TIC_TAC_TOE_SCOPE)?;
            let options = config.load::<TicTacToeOptions>()?.with_args(args);
            info!("{:?}", options);

            let policy = options.policy()?;
            let first_mover = options.play_options.first_mover()?;
            let rules = TicTacToeRules::new();
            let evaluator = TicTacToeEvaluator::new();

            play_game(
                &rules,
                &evaluator,
                &policy,
                first_mover,
                options.play_options.seed,
                &mut input,
                &mut output,
            )?;
        }
        Commands::ConnectFour(args) => {
            let config = load_config(args.config.as_deref(), CONNECT_FOUR_SCOPE)?;
            let options = config.load::<ConnectFourOptions>()?.with_args(args);
            info!("{:?}", options);

            let policy = options.policy()?;
            let first_mover = options.play_options.first_mover()?;
            let rules = ConnectFourRules::new();
            let evaluator = ConnectFourEvaluator::new();

            play_game(
                &rules,
                &evaluator,
                &policy,
                first_mover,
                options.play_options.seed,
                &mut input,
                &mut output,
            )?;
        }
    }

    Ok(())
}

/// Reads the config file when one is given; environment variables apply either way.
fn load_config(path: Option<&str>, scope: &str) -> Result<ConfigLoader> {
    match path {
        Some(path) => ConfigLoader::new(path, scope.to_string()),
        None => Ok(ConfigLoader::from_env(scope.to_string())),
    }
}
