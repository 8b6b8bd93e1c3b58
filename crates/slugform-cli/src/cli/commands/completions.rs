//! `slugform completions` and `slugform man`.

use anyhow::Result;
use clap::Command;
use clap_complete::Shell;
use std::io;

pub fn run_completions(mut cmd: Command, shell: Shell) -> Result<()> {
    clap_complete::generate(shell, &mut cmd, "slugform", &mut io::stdout());
    Ok(())
}

pub fn run_man(cmd: Command) -> Result<()> {
    clap_mangen::Man::new(cmd).render(&mut io::stdout())?;
    Ok(())
}
