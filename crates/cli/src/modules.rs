use crate::console::ConsoleSink;
use kdrive_core::{Result, load_module_descriptions};
use std::path::PathBuf;
use tracing::info;

pub fn run(file: PathBuf, json: bool) -> Result<()> {
    let sink = ConsoleSink::new();
    let modules = load_module_descriptions(&file, &sink);
    info!("Loaded {} module(s) from {}", modules.len(), file.display());

    if json {
        println!("{}", serde_json::to_string_pretty(&modules)?);
    } else {
        for module in &modules {
            println!(
                "{} ({}) -> {}",
                module.name, module.module_type, module.output_dir
            );
            for source in &module.sources {
                println!("  source     {}", source);
            }
            for root in &module.java_source_roots {
                println!("  java       {}", root);
            }
            for entry in &module.classpath {
                println!("  classpath  {}", entry);
            }
            for annotations in &module.annotations {
                println!("  annotation {}", annotations);
            }
        }
    }

    sink.check()?;
    Ok(())
}
