use std::path::PathBuf;

use clap::Args;
use penance_engine::{Role, Wave, WaveTimer};

use super::{RoleArg, load_snapshot};

#[derive(Debug, Clone, Args)]
pub struct SummaryArg {
    /// Path to the UI snapshot JSON file
    #[arg(long)]
    snapshot: PathBuf,
    /// Wave number to report
    #[arg(long, default_value_t = 1)]
    number: u32,
    /// Role played this wave (omit for a spectator wave)
    #[arg(long, value_enum)]
    role: Option<RoleArg>,
    /// Render host chat color markup
    #[arg(long)]
    colorful: bool,
}

pub fn run(arg: &SummaryArg) -> anyhow::Result<()> {
    let snapshot = load_snapshot(&arg.snapshot)?;

    let timer = snapshot.elapsed_time().map(WaveTimer::with_elapsed);
    let timed = timer.is_some();
    let mut wave = Wave::new(arg.number, arg.role.map(Role::from), timer);
    wave.set_amounts(&snapshot);
    wave.set_points(&snapshot);

    println!("Wave {}", wave.number());
    println!("{}", wave.wave_points_line(arg.colorful));
    println!("{}", wave.wave_summary_line(arg.colorful));
    if timed {
        println!("Next call change in {}s", wave.time_until_call_change());
    }
    Ok(())
}
