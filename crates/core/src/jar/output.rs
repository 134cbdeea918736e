use kdrive_api::OutputFile;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Load every regular file under `dir` as an output entry, keyed by its
/// `/`-separated path relative to `dir` and sorted by that path.
pub fn collect_output_files(dir: &Path) -> io::Result<Vec<OutputFile>> {
    let mut outputs = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(dir) else {
            continue;
        };
        let relative_path = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        outputs.push(OutputFile::new(relative_path, std::fs::read(entry.path())?));
    }
    outputs.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    Ok(outputs)
}
