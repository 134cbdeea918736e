fn main() {
    if let Err(e) = kdrive_cli::run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
