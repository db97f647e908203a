use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

use crate::{
    core::utils::{canonical_name, ensure_dir, PathResolver},
    errors::{Result, UpkeepError},
    portfolio::Portfolio,
};

use super::PortfolioStore;

const PORTFOLIO_EXTENSION: &str = "json";
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S%3f";
const TMP_SUFFIX: &str = "tmp";
const STORE_MARKER: &str = "store.json";
const DEFAULT_RETENTION: usize = 5;

pub const STORE_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreMarker {
    schema_version: u32,
    initialized_at: chrono::DateTime<Utc>,
}

/// File-per-portfolio JSON store with rolling backups.
#[derive(Clone)]
pub struct JsonStorage {
    root: PathBuf,
    portfolios_dir: PathBuf,
    backups_dir: PathBuf,
    retention: usize,
}

impl JsonStorage {
    /// Resolves the layout without touching the filesystem; call
    /// [`PortfolioStore::initialize`] before use.
    pub fn new(root: Option<PathBuf>, retention: Option<usize>) -> Self {
        let root = PathResolver::resolve_base(root);
        Self {
            portfolios_dir: PathResolver::portfolio_dir_in(&root),
            backups_dir: PathResolver::backup_dir_in(&root),
            root,
            retention: retention.unwrap_or(DEFAULT_RETENTION).max(1),
        }
    }

    /// Constructs and initializes in one step.
    pub fn open(root: Option<PathBuf>, retention: Option<usize>) -> Result<Self> {
        let storage = Self::new(root, retention);
        storage.initialize()?;
        Ok(storage)
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    pub fn portfolio_path(&self, name: &str) -> PathBuf {
        self.portfolios_dir
            .join(format!("{}.{}", canonical_name(name), PORTFOLIO_EXTENSION))
    }

    fn backup_dir(&self, name: &str) -> PathBuf {
        self.backups_dir.join(canonical_name(name))
    }

    pub fn backup_path(&self, name: &str, backup_name: &str) -> PathBuf {
        self.backup_dir(name).join(backup_name)
    }

    fn marker_path(&self) -> PathBuf {
        self.root.join(STORE_MARKER)
    }

    pub fn is_initialized(&self) -> bool {
        self.marker_path().exists()
    }

    fn require_initialized(&self) -> Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(UpkeepError::Storage(format!(
                "store at `{}` is not initialized",
                self.root.display()
            )))
        }
    }

    fn read_marker(&self) -> Result<Option<StoreMarker>> {
        let path = self.marker_path();
        if !path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&data)?))
    }

    fn write_backup_file(
        &self,
        portfolio: &Portfolio,
        name: &str,
        note: Option<&str>,
    ) -> Result<String> {
        let dir = self.backup_dir(name);
        ensure_dir(&dir)?;
        let timestamp = Utc::now().format(BACKUP_TIMESTAMP_FORMAT).to_string();
        let mut file_stem = format!("{}_{}", canonical_name(name), timestamp);
        if let Some(label) = sanitize_backup_note(note) {
            file_stem.push('_');
            file_stem.push_str(&label);
        }
        let file_name = format!("{}.{}", file_stem, PORTFOLIO_EXTENSION);
        let json = serde_json::to_string_pretty(portfolio)?;
        write_atomic(&dir.join(&file_name), &json)?;
        self.prune_backups(name)?;
        Ok(file_name)
    }

    fn backup_existing_file(&self, name: &str, path: &Path) -> Result<()> {
        if !path.exists() {
            return Ok(());
        }
        let dir = self.backup_dir(name);
        ensure_dir(&dir)?;
        let timestamp = Utc::now().format(BACKUP_TIMESTAMP_FORMAT).to_string();
        let backup_name = format!(
            "{}_{}.{}",
            canonical_name(name),
            timestamp,
            PORTFOLIO_EXTENSION
        );
        fs::copy(path, dir.join(&backup_name))?;
        self.prune_backups(name)?;
        Ok(())
    }

    fn prune_backups(&self, name: &str) -> Result<()> {
        let backups = self.list_backups(name)?;
        for entry in backups.iter().skip(self.retention) {
            debug!(backup = %entry, "pruning backup");
            let _ = fs::remove_file(self.backup_path(name, entry));
        }
        Ok(())
    }
}

impl PortfolioStore for JsonStorage {
    fn initialize(&self) -> Result<()> {
        ensure_dir(&self.root)?;
        ensure_dir(&self.portfolios_dir)?;
        ensure_dir(&self.backups_dir)?;
        match self.read_marker()? {
            Some(marker) if marker.schema_version > STORE_SCHEMA_VERSION => {
                return Err(UpkeepError::Storage(format!(
                    "store schema {} is newer than supported {}",
                    marker.schema_version, STORE_SCHEMA_VERSION
                )));
            }
            Some(marker) if marker.schema_version == STORE_SCHEMA_VERSION => return Ok(()),
            _ => {}
        }
        let marker = StoreMarker {
            schema_version: STORE_SCHEMA_VERSION,
            initialized_at: Utc::now(),
        };
        write_atomic(&self.marker_path(), &serde_json::to_string_pretty(&marker)?)?;
        info!(root = %self.root.display(), "initialized portfolio store");
        Ok(())
    }

    fn save(&self, portfolio: &Portfolio, name: &str) -> Result<()> {
        self.require_initialized()?;
        let path = self.portfolio_path(name);
        self.backup_existing_file(name, &path)?;
        save_portfolio_to_path(portfolio, &path)?;
        debug!(portfolio = name, path = %path.display(), "saved portfolio");
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Portfolio> {
        self.require_initialized()?;
        let path = self.portfolio_path(name);
        if !path.exists() {
            return Err(UpkeepError::InvalidRef(format!("portfolio `{}`", name)));
        }
        load_portfolio_from_path(&path)
    }

    fn list(&self) -> Result<Vec<String>> {
        self.require_initialized()?;
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.portfolios_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(PORTFOLIO_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn list_backups(&self, name: &str) -> Result<Vec<String>> {
        let dir = self.backup_dir(name);
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(PORTFOLIO_EXTENSION) {
                continue;
            }
            if let Some(file_name) = path.file_name().and_then(|name| name.to_str()) {
                entries.push(file_name.to_string());
            }
        }
        // Fixed-width timestamps follow the shared prefix; reverse lexical order is newest first.
        entries.sort_by(|a, b| b.cmp(a));
        Ok(entries)
    }

    fn backup(&self, portfolio: &Portfolio, name: &str, note: Option<&str>) -> Result<String> {
        self.require_initialized()?;
        self.write_backup_file(portfolio, name, note)
    }

    fn restore(&self, name: &str, backup_name: &str) -> Result<Portfolio> {
        self.require_initialized()?;
        let backup_path = self.backup_path(name, backup_name);
        if !backup_path.exists() {
            return Err(UpkeepError::Storage(format!(
                "backup `{}` not found",
                backup_name
            )));
        }
        let target = self.portfolio_path(name);
        fs::copy(&backup_path, &target)?;
        load_portfolio_from_path(&target)
    }
}

pub fn save_portfolio_to_path(portfolio: &Portfolio, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let json = serde_json::to_string_pretty(portfolio)?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

pub fn load_portfolio_from_path(path: &Path) -> Result<Portfolio> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

fn sanitize_backup_note(note: Option<&str>) -> Option<String> {
    let raw = note?.trim();
    if raw.is_empty() {
        return None;
    }
    Some(canonical_name(raw))
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
