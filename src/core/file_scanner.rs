use std::{
    fs,
    path::{Path, PathBuf},
};

use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::core::SourceFile;

/// A file that could not be scanned or loaded. The run goes on without it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanWarning {
    pub file_path: String,
    pub error: String,
}

impl ScanWarning {
    pub fn new(file_path: impl Into<String>, error: impl ToString) -> Self {
        Self {
            file_path: file_path.into(),
            error: error.to_string(),
        }
    }
}

/// Result of discovering files on disk.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Matching files, sorted.
    pub files: Vec<PathBuf>,
    pub warnings: Vec<ScanWarning>,
}

/// HTML files directly in `root` and directly in `templates_dir`.
pub fn find_markup_files(root: &Path, templates_dir: &Path) -> ScanResult {
    let mut result = ScanResult::default();

    for dir in [root, templates_dir] {
        let escaped = Pattern::escape(&dir.to_string_lossy());
        let pattern = Path::new(&escaped).join("*.html");

        match glob(&pattern.to_string_lossy()) {
            Ok(entries) => {
                for entry in entries {
                    match entry {
                        Ok(path) if path.is_file() => result.files.push(path),
                        Ok(_) => {}
                        Err(e) => result
                            .warnings
                            .push(ScanWarning::new(e.path().to_string_lossy(), e.error())),
                    }
                }
            }
            Err(e) => result
                .warnings
                .push(ScanWarning::new(dir.to_string_lossy(), e)),
        }
    }

    result.files.sort();
    result.files.dedup();
    result
}

/// `.js` files anywhere below `scripts_dir`. A missing directory yields no files.
pub fn find_script_files(scripts_dir: &Path) -> ScanResult {
    let mut result = ScanResult::default();
    if !scripts_dir.is_dir() {
        return result;
    }

    for entry in WalkDir::new(scripts_dir) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                let path = e
                    .path()
                    .map(|p| p.to_string_lossy().to_string())
                    .unwrap_or_else(|| scripts_dir.to_string_lossy().to_string());
                result.warnings.push(ScanWarning::new(path, e));
                continue;
            }
        };
        let path = entry.path();
        if entry.file_type().is_file() && is_script_file(path) {
            result.files.push(path.to_path_buf());
        }
    }

    result.files.sort();
    result
}

fn is_script_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("js")
}

/// Path shown in reports: relative to `root` when the file is inside it.
pub fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

/// Read every file fully, one at a time. Unreadable files become warnings.
pub fn read_sources(paths: &[PathBuf], root: &Path) -> (Vec<SourceFile>, Vec<ScanWarning>) {
    let mut sources = Vec::with_capacity(paths.len());
    let mut warnings = Vec::new();

    for path in paths {
        let display = display_path(path, root);
        match fs::read_to_string(path) {
            Ok(content) => sources.push(SourceFile::new(display, content)),
            Err(e) => warnings.push(ScanWarning::new(display, format!("Failed to read file: {}", e))),
        }
    }

    (sources, warnings)
}
