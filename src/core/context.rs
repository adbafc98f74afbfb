use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::{
    config::{Config, load_config},
    core::{
        CatalogSet, UsedStrings,
        exclusion::ExclusionFilter,
        extract::{ExtractionStats, Extractor},
        file_scanner::{
            ScanWarning, display_path, find_markup_files, find_script_files, read_sources,
        },
        parsers::catalog::load_catalogs,
    },
    issues::DiffResult,
    rules::diff,
};

/// Everything one check run produced, ready for reporting.
#[derive(Debug)]
pub struct CheckOutcome {
    pub markup_files_checked: usize,
    pub script_files_checked: usize,
    /// Distinct strings per extraction strategy, before exclusion.
    pub stats: ExtractionStats,
    /// Used strings after exclusion, with their occurrences.
    pub used: UsedStrings,
    /// Extracted strings dropped by the exclusion patterns, sorted.
    pub excluded: BTreeSet<String>,
    pub catalogs: CatalogSet,
    /// Number of distinct catalog keys, special keys not counted.
    pub translation_key_count: usize,
    pub whitelist: BTreeSet<String>,
    pub diff: DiffResult,
    /// Files and catalogs skipped because they could not be read or parsed.
    pub warnings: Vec<ScanWarning>,
    /// Directory catalogs were loaded from, relative to the root when inside it.
    pub catalogs_dir: String,
}

impl CheckOutcome {
    /// True when no catalog could be loaded; every used string is then missing.
    pub fn no_catalogs(&self) -> bool {
        self.catalogs.is_empty()
    }

    pub fn language_count(&self) -> usize {
        self.catalogs.len()
    }

    pub fn has_issues(&self) -> bool {
        !self.diff.is_clean()
    }
}

/// Pipeline for one project: discover files, extract strings, filter
/// exclusions, load catalogs, compare.
///
/// Configuration comes from `.catalintrc.json` (found from the root upwards)
/// or built-in defaults. Paths in the config are relative to the directory
/// holding the config file.
pub struct CheckContext {
    pub config: Config,
    /// Project root: top-level markup files live here, and report paths are
    /// relative to it.
    pub root: PathBuf,
    /// Directory that configured paths are resolved against.
    pub base_dir: PathBuf,
}

impl CheckContext {
    pub fn new(root: &Path) -> Result<Self> {
        let root = root
            .canonicalize()
            .with_context(|| format!("Failed to resolve project root: {:?}", root))?;
        let loaded = load_config(&root)?;
        Ok(Self::with_config(&root, loaded.config, loaded.base_dir))
    }

    pub fn with_config(root: &Path, config: Config, base_dir: PathBuf) -> Self {
        Self {
            config,
            root: root.to_path_buf(),
            base_dir,
        }
    }

    fn resolve(&self, dir: &str) -> PathBuf {
        self.base_dir.join(dir)
    }

    pub fn run(&self) -> Result<CheckOutcome> {
        let config = &self.config;
        let extractor = Extractor::from_config(config)?;
        let exclusion = ExclusionFilter::new(&config.exclude_patterns)?;
        let mut warnings = Vec::new();

        // ============================================================
        // Sources
        // ============================================================
        let markup_paths = find_markup_files(&self.root, &self.resolve(&config.templates_dir));
        let script_paths = find_script_files(&self.resolve(&config.scripts_dir));
        warnings.extend(markup_paths.warnings);
        warnings.extend(script_paths.warnings);

        let (markup_files, markup_warnings) = read_sources(&markup_paths.files, &self.root);
        let (script_files, script_warnings) = read_sources(&script_paths.files, &self.root);
        warnings.extend(markup_warnings);
        warnings.extend(script_warnings);

        let extraction = extractor.extract(&markup_files, &script_files);
        let (used, excluded) = exclusion.partition(extraction.used);

        // ============================================================
        // Catalogs
        // ============================================================
        let catalogs_dir = self.resolve(&config.catalogs_dir);
        let loaded = load_catalogs(&catalogs_dir);
        warnings.extend(loaded.warnings.into_iter().map(|w| ScanWarning {
            file_path: display_path(Path::new(&w.file_path), &self.root),
            error: w.error,
        }));
        let catalogs = loaded.catalogs;

        // ============================================================
        // Comparison
        // ============================================================
        let special_keys: BTreeSet<String> = config.special_keys.iter().cloned().collect();
        let whitelist: BTreeSet<String> = config.whitelist.iter().cloned().collect();
        let diff = diff(&used, &catalogs, &special_keys, &whitelist);

        let translation_key_count = catalogs
            .union_keys()
            .into_iter()
            .filter(|k| !special_keys.contains(*k))
            .count();

        Ok(CheckOutcome {
            markup_files_checked: markup_files.len(),
            script_files_checked: script_files.len(),
            stats: extraction.stats,
            used,
            excluded,
            catalogs,
            translation_key_count,
            whitelist,
            diff,
            warnings,
            catalogs_dir: display_path(&catalogs_dir, &self.root),
        })
    }
}
