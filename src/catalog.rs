use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use rand::Rng;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::page::PracticePage;

/// All loaded pages, in file-name order, addressable by path.
#[derive(Debug, Clone)]
pub struct Catalog {
    pages: Vec<PracticePage>,
    by_path: HashMap<String, usize>,
}

/// List the `.toml` files directly inside `dir`, sorted by file name.
pub fn load_sorted_page_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let io_err = |source| Error::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file()
            && path
                .extension()
                .and_then(|s| s.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
        {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    if paths.is_empty() {
        Err(Error::NoPageFiles(dir.to_path_buf()))
    } else {
        Ok(paths)
    }
}

pub fn load_page(path: &Path) -> Result<PracticePage> {
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl Catalog {
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let mut pages = Vec::new();
        for path in load_sorted_page_paths(dir)? {
            let page = load_page(&path)?;
            debug!(file = %path.display(), path = %page.path, "loaded page");
            pages.push(page);
        }
        let catalog = Self::from_pages(pages)?;
        info!(dir = %dir.display(), pages = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn from_pages(pages: Vec<PracticePage>) -> Result<Self> {
        if pages.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        let mut by_path = HashMap::with_capacity(pages.len());
        for (i, page) in pages.iter().enumerate() {
            if !page.path.starts_with('/') {
                return Err(Error::InvalidPath(page.path.clone()));
            }
            if by_path.insert(page.path.clone(), i).is_some() {
                return Err(Error::DuplicatePath(page.path.clone()));
            }
        }
        Ok(Self { pages, by_path })
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn pages(&self) -> &[PracticePage] {
        &self.pages
    }

    pub fn get(&self, path: &str) -> Option<&PracticePage> {
        self.position(path).map(|i| &self.pages[i])
    }

    pub fn position(&self, path: &str) -> Option<usize> {
        self.by_path.get(path).copied()
    }

    /// The page `step` places away from `path`, wrapping at both ends.
    pub fn neighbour(&self, path: &str, step: isize) -> Option<&PracticePage> {
        let n = self.pages.len() as isize;
        let at = self.position(path)? as isize;
        let target = (at + step).rem_euclid(n) as usize;
        self.pages.get(target)
    }

    pub fn random_path<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let i = rng.random_range(0..self.pages.len());
        &self.pages[i].path
    }

    /// Pages grouped by category, categories in order of first appearance.
    pub fn categories(&self) -> Vec<(&str, Vec<&PracticePage>)> {
        let mut groups: Vec<(&str, Vec<&PracticePage>)> = Vec::new();
        for page in &self.pages {
            match groups.iter_mut().find(|(name, _)| *name == page.category) {
                Some((_, members)) => members.push(page),
                None => groups.push((page.category.as_str(), vec![page])),
            }
        }
        groups
    }

    /// Pages in index-screen order: grouped by category.
    pub fn index_order(&self) -> Vec<&PracticePage> {
        self.categories()
            .into_iter()
            .flat_map(|(_, pages)| pages)
            .collect()
    }
}
