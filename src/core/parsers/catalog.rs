use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::core::{Catalog, CatalogSet, file_scanner::ScanWarning};

#[derive(Debug, Default)]
pub struct CatalogLoadResult {
    pub catalogs: CatalogSet,
    /// Catalogs that could not be read or parsed and were skipped.
    pub warnings: Vec<ScanWarning>,
}

/// Parse one catalog file.
///
/// The document must be a flat JSON object mapping strings to strings. Any
/// other value type fails the whole catalog. The empty key is a reserved
/// sentinel and is dropped.
pub fn parse_catalog_file(path: &Path, language: &str) -> Result<Catalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {:?}", path))?;

    let mut entries: BTreeMap<String, String> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse catalog file: {:?}", path))?;
    entries.remove("");

    let mut catalog = Catalog::new(language);
    catalog.entries = entries;
    Ok(catalog)
}

/// Extracts the language code from a catalog file name.
///
/// Examples:
/// - "en_us.json" -> Some("en_us")
/// - "/path/to/lang/zh_cn.json" -> Some("zh_cn")
pub fn extract_language(path: impl AsRef<Path>) -> Option<String> {
    path.as_ref()
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Catalog files (`*.json`) directly inside `catalog_dir`, sorted.
fn find_catalog_files(catalog_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let entries = fs::read_dir(catalog_dir)
        .with_context(|| format!("Failed to read catalog directory: {:?}", catalog_dir))?;

    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("json") {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Load every catalog in `catalog_dir`.
///
/// Never fails: an unreadable directory, an unreadable file or a malformed
/// catalog is reported as a warning and skipped. A missing directory simply
/// yields an empty set.
pub fn load_catalogs(catalog_dir: impl AsRef<Path>) -> CatalogLoadResult {
    let catalog_dir = catalog_dir.as_ref();
    let mut result = CatalogLoadResult::default();

    if !catalog_dir.is_dir() {
        return result;
    }

    let files = match find_catalog_files(catalog_dir) {
        Ok(files) => files,
        Err(e) => {
            result
                .warnings
                .push(ScanWarning::new(catalog_dir.to_string_lossy(), format!("{:#}", e)));
            return result;
        }
    };

    for path in files {
        let Some(language) = extract_language(&path) else {
            result.warnings.push(ScanWarning::new(
                path.to_string_lossy(),
                "Failed to load catalog: file name is not valid UTF-8",
            ));
            continue;
        };
        match parse_catalog_file(&path, &language) {
            Ok(catalog) => result.catalogs.insert(catalog),
            Err(e) => result.warnings.push(ScanWarning::new(
                path.to_string_lossy(),
                format!("Failed to load catalog: {}", e.root_cause()),
            )),
        }
    }

    result
}
