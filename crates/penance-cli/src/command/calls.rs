use std::path::PathBuf;

use clap::Args;
use penance_engine::{Role, items};

use super::{RoleArg, load_snapshot};

#[derive(Debug, Clone, Args)]
pub struct CallsArg {
    /// Path to the UI snapshot JSON file
    #[arg(long)]
    snapshot: PathBuf,
    /// Limit the report to a single role
    #[arg(long, value_enum)]
    role: Option<RoleArg>,
}

pub fn run(arg: &CallsArg) -> anyhow::Result<()> {
    let snapshot = load_snapshot(&arg.snapshot)?;

    let roles: Vec<Role> = match arg.role {
        Some(role) => vec![Role::from(role)],
        None => Role::ALL.to_vec(),
    };
    for role in roles {
        let listen = role.listen_text(&snapshot).unwrap_or("-");
        let call = role.call_text(&snapshot).unwrap_or("-");
        let item = role.listen_item_id(&snapshot);
        if item == items::NO_ITEM {
            println!("{role}: listen {listen}, call {call}");
        } else {
            println!("{role}: listen {listen} (item {item}), call {call}");
        }
    }
    Ok(())
}
