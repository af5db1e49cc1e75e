use std::io;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::{Storage, StorageError};
use crate::models::Paste;

/// Process-local storage. Pastes live as long as the process.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    pastes: Arc<RwLock<Vec<Paste>>>,
    unavailable: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that fails every read and write.
    #[cfg(test)]
    pub fn unavailable() -> Self {
        MemoryStorage {
            unavailable: true,
            ..Self::default()
        }
    }

    #[cfg(test)]
    pub async fn count(&self) -> usize {
        self.pastes.read().await.len()
    }

    fn outage() -> io::Error {
        io::Error::new(io::ErrorKind::NotConnected, "storage unavailable")
    }
}

impl Storage for MemoryStorage {
    async fn insert_paste(&self, paste: Paste) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Write {
                source: Box::new(Self::outage()),
            });
        }
        self.pastes.write().await.push(paste);
        Ok(())
    }

    async fn find_paste(&self, slug: &str) -> Result<Option<Paste>, StorageError> {
        if self.unavailable {
            return Err(StorageError::Read {
                source: Box::new(Self::outage()),
            });
        }
        let pastes = self.pastes.read().await;
        Ok(pastes.iter().find(|paste| paste.slug == slug).cloned())
    }
}
