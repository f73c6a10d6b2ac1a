//! JSON document store: persists `(title, raw text, parsed ledger)`
//! snapshots as one file per document under a root directory.
//!
//! The store is a collaborator around the core; it never mutates a ledger,
//! only serializes the snapshot it is handed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use tracing::{debug, info};
use uuid::Uuid;

use crate::{errors::LedgerError, ledger::Ledger};

const DOCUMENT_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";
const DEFAULT_TITLE: &str = "Untitled Document";

/// Listing cap, most recently updated first.
pub const LIST_LIMIT: usize = 20;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// A stored snapshot: the raw outline text alongside its parsed ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: Uuid,
    pub title: String,
    pub text: String,
    pub ledger: Ledger,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    /// Opens (creating if needed) a store rooted at `root`, or at
    /// `<user data dir>/tally_core/documents` when `root` is `None`.
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(default_root);
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn document_path(&self, id: Uuid) -> PathBuf {
        self.root.join(format!("{id}.{DOCUMENT_EXTENSION}"))
    }

    /// Saves a new document and returns its generated id. Blank titles
    /// default to "Untitled Document".
    pub fn save(&self, title: &str, text: &str, ledger: &Ledger) -> Result<Uuid> {
        let now = Utc::now();
        let document = Document {
            id: Uuid::new_v4(),
            title: effective_title(title),
            text: text.to_string(),
            ledger: ledger.clone(),
            created_at: now,
            updated_at: now,
        };
        self.write_document(&document)?;
        info!(id = %document.id, title = %document.title, "saved document");
        Ok(document.id)
    }

    /// Overwrites an existing document, refreshing `updated_at` and keeping
    /// the original `created_at`.
    pub fn update(&self, id: Uuid, title: &str, text: &str, ledger: &Ledger) -> Result<()> {
        let mut document = self.load(id)?;
        document.title = effective_title(title);
        document.text = text.to_string();
        document.ledger = ledger.clone();
        document.updated_at = Utc::now();
        self.write_document(&document)?;
        info!(id = %id, "updated document");
        Ok(())
    }

    pub fn load(&self, id: Uuid) -> Result<Document> {
        let path = self.document_path(id);
        if !path.exists() {
            return Err(LedgerError::DocumentNotFound(id));
        }
        let data = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn delete(&self, id: Uuid) -> Result<()> {
        let path = self.document_path(id);
        if !path.exists() {
            return Err(LedgerError::DocumentNotFound(id));
        }
        fs::remove_file(&path)?;
        info!(id = %id, "deleted document");
        Ok(())
    }

    /// Lists stored documents, most recently updated first, capped at
    /// [`LIST_LIMIT`]. Files that fail to decode are skipped.
    pub fn list(&self) -> Result<Vec<Document>> {
        let mut documents = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(DOCUMENT_EXTENSION) {
                continue;
            }
            let contents = match fs::read_to_string(&path) {
                Ok(value) => value,
                Err(_) => continue,
            };
            match serde_json::from_str::<Document>(&contents) {
                Ok(document) => documents.push(document),
                Err(err) => {
                    debug!(path = %path.display(), error = %err, "skipping unreadable document");
                }
            }
        }
        documents.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        documents.truncate(LIST_LIMIT);
        Ok(documents)
    }

    fn write_document(&self, document: &Document) -> Result<()> {
        let json = serde_json::to_string_pretty(document)?;
        write_atomic(&self.document_path(document.id), &json)
    }
}

/// Builds the shareable URL for a stored document: `<base_url>?doc=<id>`.
pub fn share_link(base_url: &str, id: Uuid) -> String {
    format!("{base_url}?doc={id}")
}

fn effective_title(title: &str) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        trimmed.to_string()
    }
}

fn default_root() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tally_core")
        .join("documents")
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Writes through a sibling tmp file and renames into place so readers
/// never observe a partial document.
fn write_atomic(path: &Path, data: &str) -> Result<()> {
    let tmp = path.with_extension(TMP_SUFFIX);
    {
        let mut file = File::create(&tmp)?;
        file.write_all(data.as_bytes())?;
        file.sync_all()?;
    }
    fs::rename(&tmp, path)?;
    Ok(())
}
