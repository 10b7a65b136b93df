use std::fs;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use log::debug;

const RECENT_FILE: &str = "recent_sticker";
const DEFAULT_EXPIRY: Duration = Duration::from_secs(60 * 60);

/// The most recently created sticker, kept as a local convenience record
/// so a scan can still show something when the carrier cannot be read.
///
/// This is a UI crutch, not part of the codec contract: the core never
/// reads or writes it, and decodes must work without it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentSticker {
    pub text: String,
    pub method_label: String,
    pub timestamp: SystemTime,
}

/// Single record, file backed store with an expiry window.
#[derive(Debug)]
pub struct RecentStore {
    path: PathBuf,
    expiry: Duration,
}

impl RecentStore {
    pub fn new(path: PathBuf, expiry: Duration) -> Self {
        Self { path, expiry }
    }

    /// Store in the platform data directory, `None` when there is none.
    pub fn open_default() -> Option<Self> {
        dirs::data_dir().map(|dir| {
            Self::new(dir.join("codesticker").join(RECENT_FILE), DEFAULT_EXPIRY)
        })
    }

    pub fn record(&self, text: &str, method_label: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        fs::write(&self.path, format!("{timestamp}\n{method_label}\n{text}"))
    }

    /// The stored record, `None` when missing, malformed or expired.
    pub fn lookup(&self) -> Option<RecentSticker> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let mut parts = raw.splitn(3, '\n');

        let seconds: u64 = parts.next()?.trim().parse().ok()?;
        let method_label = parts.next()?.to_string();
        let text = parts.next()?.to_string();

        let timestamp = UNIX_EPOCH + Duration::from_secs(seconds);
        let age = SystemTime::now().duration_since(timestamp).ok()?;
        if age > self.expiry {
            debug!("recent sticker record expired");
            return None;
        }

        Some(RecentSticker {
            text,
            method_label,
            timestamp,
        })
    }
}
