use crate::console::ConsoleSink;
use kdrive_core::{Result, discover_sources};
use std::path::PathBuf;

pub fn run(roots: Vec<PathBuf>) -> Result<()> {
    let sink = ConsoleSink::new();
    let units = discover_sources(&roots, &sink);

    for unit in &units {
        println!("{}", unit.path.display());
    }

    sink.check()?;
    Ok(())
}
