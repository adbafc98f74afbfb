use std::collections::{BTreeMap, BTreeSet};

/// Translations for a single language, loaded from one catalog file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// Language code, taken from the catalog file stem (e.g. "en_us").
    pub language: String,
    /// Translation entries keyed by source string. Never contains the empty key.
    pub entries: BTreeMap<String, String>,
}

impl Catalog {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            entries: BTreeMap::new(),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// All catalogs loaded for a run, keyed by language code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSet {
    catalogs: BTreeMap<String, Catalog>,
}

impl CatalogSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, catalog: Catalog) {
        self.catalogs.insert(catalog.language.clone(), catalog);
    }

    /// Catalogs in language order.
    pub fn iter(&self) -> impl Iterator<Item = &Catalog> {
        self.catalogs.values()
    }

    /// Union of the keys of every catalog.
    pub fn union_keys(&self) -> BTreeSet<&str> {
        self.catalogs.values().flat_map(|c| c.keys()).collect()
    }

    /// Number of catalogs (languages).
    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }
}

impl FromIterator<Catalog> for CatalogSet {
    fn from_iter<I: IntoIterator<Item = Catalog>>(iter: I) -> Self {
        let mut set = CatalogSet::new();
        for catalog in iter {
            set.insert(catalog);
        }
        set
    }
}
