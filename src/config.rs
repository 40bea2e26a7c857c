use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "debt-ledger", version, about = "Track who owes whom, netted per month")]
pub struct Cli {
    /// Storage root; segments live under <data-dir>/debt/<year>/
    #[arg(long = "data-dir", env = "DEBT_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Start from an empty ledger instead of replaying this month's segment
    #[arg(long = "no-replay")]
    pub no_replay: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub replay: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            data_dir: cli.data_dir,
            replay: !cli.no_replay,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        Cli::parse().into()
    }
}
