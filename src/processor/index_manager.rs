use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// First line written into a freshly created index.
pub const PLACEHOLDER_ENTRY: &str = "Initial filter entry";

/// Collapses whitespace runs to single spaces and trims both ends.
pub fn normalize_company_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Case-insensitive identity of a company name.
pub fn company_key(raw: &str) -> String {
    normalize_company_name(raw).to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(String),
    Duplicate(String),
    Blank,
}

/// Append-only handle on the index file with an in-memory membership set.
pub struct FilterIndex {
    path: PathBuf,
    file: File,
    keys: HashSet<String>,
    needs_newline: bool,
}

impl FilterIndex {
    /// Opens the index for appending, creating it with the placeholder line
    /// when absent. The returned flag is `true` if the file was created.
    pub fn open_or_create(path: &Path) -> Result<(Self, bool)> {
        let created = !path.exists();
        if created {
            fs::write(path, format!("{}\n", PLACEHOLDER_ENTRY))
                .with_context(|| format!("Failed to create index {:?}", path))?;
            info!(path = ?path, "created filter index");
        }

        let keys = read_existing_keys(path)?;
        let needs_newline = fs::read(path)
            .with_context(|| format!("Failed to read index {:?}", path))?
            .last()
            .is_some_and(|b| *b != b'\n');

        let file = OpenOptions::new()
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open index {:?} for appending", path))?;

        debug!(path = ?path, entries = keys.len(), "loaded filter index");
        Ok((
            Self {
                path: path.to_path_buf(),
                file,
                keys,
                needs_newline,
            },
            created,
        ))
    }

    pub fn entry_count(&self) -> usize {
        self.keys.len()
    }

    /// Normalizes `raw` and appends it unless an equal name is already
    /// present. Accepted entries are flushed before returning.
    pub fn add(&mut self, raw: &str) -> Result<AddOutcome> {
        let company = normalize_company_name(raw);
        if company.is_empty() {
            return Ok(AddOutcome::Blank);
        }

        let key = company.to_lowercase();
        if self.keys.contains(&key) {
            return Ok(AddOutcome::Duplicate(company));
        }

        if self.needs_newline {
            writeln!(self.file)
                .with_context(|| format!("Failed to append to index {:?}", self.path))?;
            self.needs_newline = false;
        }
        writeln!(self.file, "{}", company)
            .with_context(|| format!("Failed to append to index {:?}", self.path))?;
        self.file.flush()?;
        self.keys.insert(key);

        info!(company = %company, "appended company to filter index");
        Ok(AddOutcome::Added(company))
    }
}

fn read_existing_keys(path: &Path) -> Result<HashSet<String>> {
    let file = File::open(path).with_context(|| format!("Failed to open index {:?}", path))?;
    let mut keys = HashSet::new();

    for line in BufReader::new(file).lines() {
        let key = company_key(&line?);
        if !key.is_empty() {
            keys.insert(key);
        }
    }
    Ok(keys)
}

/// Reads the non-blank, trimmed entries of the index in file order.
/// Returns `None` when the index file does not exist.
pub fn read_companies(path: &Path) -> Result<Option<Vec<String>>> {
    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path).with_context(|| format!("Failed to open index {:?}", path))?;
    let mut companies = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            companies.push(trimmed.to_string());
        }
    }
    Ok(Some(companies))
}
