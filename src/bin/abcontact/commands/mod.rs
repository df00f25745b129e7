mod chains;
mod find;

use chains::run_chains;
use find::run_find;

use anyhow::Result;

use crate::cli::Command;
use crate::display::Context;

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::Find(args) => run_find(args, ctx),
        Command::Chains(args) => run_chains(args, ctx),
    }
}
