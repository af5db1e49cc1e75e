use thiserror::Error;

use crate::models::Paste;

pub mod memory;
pub mod mongo;

pub use memory::MemoryStorage;
pub use mongo::MongoStorage;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("MONGODB_CONNECTION is not set")]
    MissingConfig,
    #[error("could not connect to the document store")]
    Connection { source: BoxError },
    #[error("write failed")]
    Write { source: BoxError },
    #[error("read failed")]
    Read { source: BoxError },
}

pub trait Storage {
    /// Store a new paste. Existing pastes with the same slug are left alone.
    async fn insert_paste(&self, paste: Paste) -> Result<(), StorageError>;

    /// Find the first paste stored under a slug.
    async fn find_paste(&self, slug: &str) -> Result<Option<Paste>, StorageError>;
}

#[derive(Clone)]
pub enum AnyStorage {
    Mongo(MongoStorage),
    Memory(MemoryStorage),
}

impl Storage for AnyStorage {
    async fn insert_paste(&self, paste: Paste) -> Result<(), StorageError> {
        match self {
            AnyStorage::Mongo(mongo) => mongo.insert_paste(paste).await,
            AnyStorage::Memory(memory) => memory.insert_paste(paste).await,
        }
    }

    async fn find_paste(&self, slug: &str) -> Result<Option<Paste>, StorageError> {
        match self {
            AnyStorage::Mongo(mongo) => mongo.find_paste(slug).await,
            AnyStorage::Memory(memory) => memory.find_paste(slug).await,
        }
    }
}

impl From<MongoStorage> for AnyStorage {
    fn from(value: MongoStorage) -> Self {
        AnyStorage::Mongo(value)
    }
}

impl From<MemoryStorage> for AnyStorage {
    fn from(value: MemoryStorage) -> Self {
        AnyStorage::Memory(value)
    }
}
