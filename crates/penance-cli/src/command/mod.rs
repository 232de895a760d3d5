use std::{fs, path::Path};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use penance_engine::{Role, SnapshotSource};

use self::{calls::CallsArg, summary::SummaryArg};

mod calls;
mod summary;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What to inspect in the snapshot
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print the per-role points line and the wave statistics line
    Summary(#[clap(flatten)] SummaryArg),
    /// Print each role's decoded listen/call instructions
    Calls(#[clap(flatten)] CallsArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Summary(arg) => summary::run(&arg)?,
        Mode::Calls(arg) => calls::run(&arg)?,
    }
    Ok(())
}

/// Role selector on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RoleArg {
    Attacker,
    Defender,
    Collector,
    Healer,
}

impl From<RoleArg> for Role {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Attacker => Self::Attacker,
            RoleArg::Defender => Self::Defender,
            RoleArg::Collector => Self::Collector,
            RoleArg::Healer => Self::Healer,
        }
    }
}

fn load_snapshot(path: &Path) -> anyhow::Result<SnapshotSource> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    let snapshot = serde_json::from_str(&data)
        .with_context(|| format!("invalid snapshot file {}", path.display()))?;
    Ok(snapshot)
}
