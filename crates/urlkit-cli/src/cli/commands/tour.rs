//! `urlkit tour` – print the walkthrough.

use anyhow::Result;
use urlkit_core::tour;

pub fn run_tour() -> Result<()> {
    let mut section = "";
    for step in tour::run() {
        if step.section != section {
            section = step.section;
            println!("\n## {section}");
        }
        println!("{:<60} {}", step.label, step.value);
    }
    Ok(())
}
