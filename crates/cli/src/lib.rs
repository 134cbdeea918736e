mod console;
mod jar;
mod modules;
mod sources;

pub use console::ConsoleSink;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "kdrive",
    version,
    about = "Source discovery and jar packaging for the compiler driver",
    long_about = "kdrive loads module definition files, collects Kotlin sources from \
                  files and directories, and packages compiled classes into runnable jars."
)]
pub struct Cli {
    /// Also print log output to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the modules declared in a module definition file
    Modules {
        /// Path to the module definition file (.xml)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the descriptors as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the Kotlin sources reachable from the given roots
    Sources {
        /// Source files or directories
        #[arg(value_name = "ROOT", required = true)]
        roots: Vec<PathBuf>,
    },
    /// Package compiled classes into a jar
    #[command(
        long_about = "Writes every file under CLASSES_DIR into a jar at the destination, \
                      preceded by a generated manifest. With --include-runtime the runtime \
                      library classes are merged in as well."
    )]
    Jar {
        /// Directory containing compiled output
        #[arg(value_name = "CLASSES_DIR")]
        classes: PathBuf,

        /// Destination jar
        #[arg(short, long, value_name = "JAR")]
        destination: PathBuf,

        /// Fully qualified name of the class to run
        #[arg(long, value_name = "FQN")]
        main: Option<String>,

        /// Merge the runtime library classes into the jar
        #[arg(long)]
        include_runtime: bool,

        /// Runtime library to merge (defaults to $KOTLIN_HOME/lib/kotlin-runtime.jar)
        #[arg(long, value_name = "JAR", requires = "include_runtime")]
        runtime: Option<PathBuf>,
    },
}

pub fn run() -> kdrive_core::Result<()> {
    let cli = Cli::parse();
    let _guard = kdrive_core::logging::init_logging("cli", cli.verbose);

    match cli.command {
        Commands::Modules { file, json } => modules::run(file, json),
        Commands::Sources { roots } => sources::run(roots),
        Commands::Jar {
            classes,
            destination,
            main,
            include_runtime,
            runtime,
        } => jar::run(jar::JarArgs {
            classes,
            destination,
            main,
            include_runtime,
            runtime,
        }),
    }
}
