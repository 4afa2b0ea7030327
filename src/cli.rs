use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::matrix::Strategy;

#[derive(Parser, Debug)]
#[command(
    name = "ninebox",
    version,
    about = "Turn pasted spreadsheet text into a 9-box benefit/feasibility matrix"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Parse(ParseArgs),
    Replay(ReplayArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ParseArgs {
    /// Text file holding the pasted content; stdin when omitted.
    #[arg(long)]
    pub input: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = StrategyMode::Auto)]
    pub strategy: StrategyMode,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long)]
    pub report_path: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ReplayArgs {
    /// Files applied in order as successive pastes.
    #[arg(long = "input", required = true)]
    pub inputs: Vec<PathBuf>,

    #[arg(long, value_enum, default_value_t = StrategyMode::Auto)]
    pub strategy: StrategyMode,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum StrategyMode {
    Auto,
    List,
    Grid,
}

impl StrategyMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::List => "list",
            Self::Grid => "grid",
        }
    }

    pub fn strategies(self) -> &'static [Strategy] {
        match self {
            Self::Auto => &Strategy::PRIORITY,
            Self::List => &[Strategy::List],
            Self::Grid => &[Strategy::Grid],
        }
    }
}
