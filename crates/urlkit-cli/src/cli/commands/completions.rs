//! `urlkit completions <shell>` and `urlkit manpage`.

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::Shell;
use std::fs;
use std::io;
use std::path::Path;

use crate::cli::Cli;

pub fn run_completions(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "urlkit", &mut io::stdout());
    Ok(())
}

pub fn run_manpage(out_dir: Option<&Path>) -> Result<()> {
    let man = clap_mangen::Man::new(Cli::command());
    match out_dir {
        Some(dir) => {
            fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
            let path = dir.join("urlkit.1");
            let mut file =
                fs::File::create(&path).with_context(|| format!("create {}", path.display()))?;
            man.render(&mut file)?;
            println!("wrote {}", path.display());
        }
        None => man.render(&mut io::stdout())?,
    }
    Ok(())
}
