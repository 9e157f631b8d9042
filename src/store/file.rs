//! JSON file backed ticket store
//!
//! Documents live in a single file shaped as `{ "tickets": [...] }`. Every
//! write replaces the file atomically. When watching is enabled the parent
//! directory is observed with `notify` so edits made by another process
//! (another `snackq` instance, or a text editor) reach live subscriptions.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use notify::{EventKind, RecursiveMode, Watcher};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use super::subscribers::SubscriberRegistry;
use super::{SnapshotQuery, Subscription, TicketStore};
use crate::clock::{Clock, SystemClock};
use crate::error::{Result, SnackError};
use crate::paths::format_relative_path;
use crate::types::{TicketDocument, TicketFields, TicketId};

/// Quiet period after the last filesystem event before reloading.
const DEBOUNCE_DURATION: Duration = Duration::from_millis(150);

/// Capacity of the channel bridging `notify` callbacks into tokio.
const CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Default, Serialize, Deserialize)]
struct TicketFile {
    #[serde(default)]
    tickets: Vec<TicketDocument>,
}

/// State shared with the watcher task.
///
/// Every read that ends in a publish happens under `write_lock`, so
/// subscribers only ever see the file as of the latest commit.
struct SharedFile {
    path: PathBuf,
    write_lock: Mutex<()>,
    subscribers: SubscriberRegistry,
}

impl SharedFile {
    fn reload(&self) -> Result<bool> {
        let _guard = self.write_lock.lock();
        let docs = read_documents(&self.path)?;
        Ok(self.subscribers.publish_if_changed(&docs))
    }
}

pub struct FileStore {
    shared: Arc<SharedFile>,
    clock: Arc<dyn Clock>,
    watch: bool,
    watcher: Mutex<Option<notify::RecommendedWatcher>>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            shared: Arc::new(SharedFile {
                path: path.into(),
                write_lock: Mutex::new(()),
                subscribers: SubscriberRegistry::default(),
            }),
            clock: Arc::new(SystemClock),
            watch: false,
            watcher: Mutex::new(None),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Watch the file for external changes once the first subscription opens.
    pub fn watching(mut self, watch: bool) -> Self {
        self.watch = watch;
        self
    }

    pub fn path(&self) -> &Path {
        &self.shared.path
    }

    /// Re-read the file and publish if it differs from what subscribers last saw.
    pub fn reload(&self) -> Result<bool> {
        self.shared.reload()
    }

    /// Write and publish. Callers hold `write_lock`.
    fn commit(&self, docs: &[TicketDocument]) -> Result<()> {
        write_documents(&self.shared.path, docs)?;
        self.shared.subscribers.publish(docs);
        Ok(())
    }

    fn ensure_watcher(&self) {
        if !self.watch {
            return;
        }
        let mut slot = self.watcher.lock();
        if slot.is_some() {
            return;
        }
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            tracing::debug!("no tokio runtime, file watching disabled");
            return;
        };
        match spawn_watcher(Arc::clone(&self.shared), &handle) {
            Ok(watcher) => *slot = Some(watcher),
            Err(e) => tracing::warn!("{e}"),
        }
    }
}

#[async_trait::async_trait]
impl TicketStore for FileStore {
    async fn add(&self, fields: TicketFields) -> Result<TicketId> {
        let _guard = self.shared.write_lock.lock();
        let mut docs = read_documents(self.path())?;
        let mut id = TicketId::generate();
        while docs.iter().any(|d| d.id == id) {
            id = TicketId::generate();
        }
        docs.push(TicketDocument {
            id: id.clone(),
            fields,
            time_open: self.clock.now(),
        });
        self.commit(&docs)?;
        tracing::debug!(%id, path = %self.path().display(), "added ticket");
        Ok(id)
    }

    async fn update(&self, id: &TicketId, fields: TicketFields) -> Result<()> {
        let _guard = self.shared.write_lock.lock();
        let mut docs = read_documents(self.path())?;
        let doc = docs
            .iter_mut()
            .find(|d| &d.id == id)
            .ok_or_else(|| SnackError::TicketNotFound(id.to_string()))?;
        doc.fields = fields;
        self.commit(&docs)?;
        tracing::debug!(%id, "updated ticket");
        Ok(())
    }

    async fn delete(&self, id: &TicketId) -> Result<()> {
        let _guard = self.shared.write_lock.lock();
        let mut docs = read_documents(self.path())?;
        let before = docs.len();
        docs.retain(|d| &d.id != id);
        if docs.len() != before {
            self.commit(&docs)?;
            tracing::debug!(%id, "deleted ticket");
        }
        Ok(())
    }

    fn subscribe(&self, query: SnapshotQuery) -> Result<Subscription> {
        self.ensure_watcher();
        // A commit between the read and the registration would never reach us
        let _guard = self.shared.write_lock.lock();
        match read_documents(self.path()) {
            Ok(docs) => Ok(self.shared.subscribers.register(query, &docs)),
            Err(e) => Ok(Subscription::failed(e.to_string())),
        }
    }
}

/// Load all documents. A missing file is an empty collection.
fn read_documents(path: &Path) -> Result<Vec<TicketDocument>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(SnackError::Store(format!(
                "failed to read {}: {e}",
                format_relative_path(path)
            )));
        }
    };
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    let file: TicketFile = serde_json::from_str(&content).map_err(|e| {
        SnackError::Store(format!(
            "failed to parse {}: {e}",
            format_relative_path(path)
        ))
    })?;
    Ok(file.tickets)
}

fn write_documents(path: &Path, docs: &[TicketDocument]) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent)?;

    let file = TicketFile {
        tickets: SnapshotQuery::by_time_open().apply(docs.iter().cloned()),
    };
    let mut tmp = NamedTempFile::new_in(&parent)?;
    serde_json::to_writer_pretty(&mut tmp, &file)?;
    tmp.persist(path).map_err(|e| SnackError::Io(e.error))?;
    Ok(())
}

fn spawn_watcher(
    shared: Arc<SharedFile>,
    handle: &tokio::runtime::Handle,
) -> Result<notify::RecommendedWatcher> {
    let path = shared.path.as_path();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .ok_or_else(|| SnackError::WatcherError(format!("{} is not a file", path.display())))?;

    let (tx, rx) = tokio::sync::mpsc::channel::<()>(CHANNEL_CAPACITY);
    let mut watcher = notify::RecommendedWatcher::new(
        move |res: std::result::Result<notify::Event, notify::Error>| match res {
            Ok(event) => {
                if matches!(event.kind, EventKind::Access(_)) {
                    return;
                }
                let relevant = event
                    .paths
                    .iter()
                    .any(|p| p.file_name() == Some(file_name.as_os_str()));
                if relevant {
                    // A full channel already guarantees a reload.
                    let _ = tx.try_send(());
                }
            }
            Err(e) => tracing::warn!("filesystem watcher error: {e}"),
        },
        notify::Config::default(),
    )
    .map_err(|e| SnackError::WatcherError(format!("failed to create filesystem watcher: {e}")))?;

    watcher
        .watch(&dir, RecursiveMode::NonRecursive)
        .map_err(|e| SnackError::WatcherError(format!("failed to watch {}: {e}", dir.display())))?;

    tracing::debug!(path = %path.display(), "watching ticket file");
    handle.spawn(run_event_loop(rx, shared));
    Ok(watcher)
}

/// Debounce change notifications and republish the file contents.
///
/// Ends when the watcher, and with it the sending half, is dropped.
async fn run_event_loop(mut rx: tokio::sync::mpsc::Receiver<()>, shared: Arc<SharedFile>) {
    while rx.recv().await.is_some() {
        loop {
            match tokio::time::timeout(DEBOUNCE_DURATION, rx.recv()).await {
                Ok(Some(())) => continue,
                Ok(None) => return,
                Err(_) => break,
            }
        }

        match shared.reload() {
            Ok(true) => {
                tracing::debug!(path = %shared.path.display(), "ticket file changed externally");
            }
            Ok(false) => {}
            // Likely caught mid-write by an editor; the next event retries.
            Err(e) => tracing::warn!("ignoring unreadable ticket file: {e}"),
        }
    }
}
