use kdrive_api::FqName;
use kdrive_core::jar::{CompilerHome, FixedRuntime, RuntimeLocator, collect_output_files};
use kdrive_core::{JarWriter, Result};
use std::path::PathBuf;
use tracing::info;

pub struct JarArgs {
    pub classes: PathBuf,
    pub destination: PathBuf,
    pub main: Option<String>,
    pub include_runtime: bool,
    pub runtime: Option<PathBuf>,
}

pub fn run(args: JarArgs) -> Result<()> {
    let main_class = args.main.map(FqName::new).transpose()?;
    let outputs = collect_output_files(&args.classes)?;

    let locator: Box<dyn RuntimeLocator> = match args.runtime {
        Some(path) => Box::new(FixedRuntime::new(path)),
        None => Box::new(CompilerHome::detect()),
    };

    let count = outputs.len();
    let destination = &args.destination;
    info!("Packaging {count} file(s) into {}", destination.display());
    let writer = JarWriter::new().with_runtime_locator(locator);
    writer.write(
        destination,
        args.include_runtime,
        main_class.as_ref(),
        &outputs,
    )?;

    Ok(())
}
