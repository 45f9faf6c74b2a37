use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[clap(author, version)]
#[clap(name = "boardgames")]
#[clap(about = "Play Tic Tac Toe or Connect-Four against a minimax opponent", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    TicTacToe(TicTacToeCommand),
    ConnectFour(ConnectFourCommand),
}

#[derive(Args, Debug, Default)]
pub struct TicTacToeCommand {
    /// 1: random moves, 2: a coin toss between random and best, 3: best move [default: 3]
    #[clap(short, long)]
    pub difficulty: Option<u8>,

    /// Let the human play first instead of a random start
    #[clap(short = 'H', long)]
    pub human_first: bool,

    /// Search depth for the random and mixed difficulties [default: 3]
    #[clap(short, long)]
    pub max_depth: Option<usize>,

    #[clap(short, long)]
    pub seed: Option<u64>,

    /// HOCON file with a tic_tac_toe section
    #[clap(short, long)]
    pub config: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct ConnectFourCommand {
    /// Let the human play first instead of a random start
    #[clap(short = 'H', long)]
    pub human_first: bool,

    /// Let the computer play first instead of a random start
    #[clap(short = 'C', long, conflicts_with = "human_first")]
    pub computer_first: bool,

    /// Search depth in plies [default: 3]
    #[clap(short, long)]
    pub max_depth: Option<usize>,

    #[clap(short, long)]
    pub seed: Option<u64>,

    /// HOCON file with a connect_four section
    #[clap(short, long)]
    pub config: Option<String>,
}
