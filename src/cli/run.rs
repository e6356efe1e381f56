//! Command dispatch for the holepunch CLI.

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    report,
};
use crate::commands::{init, update};

pub fn run(Arguments { command }: Arguments) -> Result<()> {
    match command {
        Some(Command::Update(cmd)) => {
            let summary = update::update(&cmd.locales, &cmd.common)?;
            report::print_update(&summary, cmd.common.verbose);
            Ok(())
        }
        Some(Command::Init) => {
            init::init()?;
            report::print_init();
            Ok(())
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
