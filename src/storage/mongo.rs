use std::sync::Arc;

use mongodb::bson::doc;
use mongodb::{Client, Collection};
use tokio::sync::OnceCell;
use tracing::{error, info};

use super::{Storage, StorageError};
use crate::models::Paste;

/// Document store backed storage.
///
/// The connection is made on first use and then shared by every clone for
/// the rest of the process.
#[derive(Clone)]
pub struct MongoStorage {
    connection: Option<String>,
    database: String,
    collection_name: String,
    collection: Arc<OnceCell<Collection<Paste>>>,
}

impl MongoStorage {
    pub fn new(
        connection: Option<String>,
        database: impl Into<String>,
        collection_name: impl Into<String>,
    ) -> Self {
        MongoStorage {
            connection,
            database: database.into(),
            collection_name: collection_name.into(),
            collection: Arc::new(OnceCell::new()),
        }
    }

    /// Use an already established collection handle instead of connecting.
    #[cfg(test)]
    pub fn from_collection(collection: Collection<Paste>) -> Self {
        let namespace = collection.namespace();
        MongoStorage {
            connection: None,
            database: namespace.db,
            collection_name: namespace.coll,
            collection: Arc::new(OnceCell::new_with(Some(collection))),
        }
    }

    async fn collection(&self) -> Result<&Collection<Paste>, StorageError> {
        self.collection
            .get_or_try_init(|| async {
                let Some(connection) = self.connection.as_deref() else {
                    error!("MONGODB_CONNECTION environment variable is not set");
                    return Err(StorageError::MissingConfig);
                };

                let client = Client::with_uri_str(connection)
                    .await
                    .map_err(|source| StorageError::Connection {
                        source: Box::new(source),
                    })?;

                info!(
                    "connected to document store: database='{}', collection='{}'",
                    self.database, self.collection_name
                );

                Ok(client
                    .database(&self.database)
                    .collection::<Paste>(&self.collection_name))
            })
            .await
    }
}

impl Storage for MongoStorage {
    async fn insert_paste(&self, paste: Paste) -> Result<(), StorageError> {
        self.collection()
            .await?
            .insert_one(paste, None)
            .await
            .map_err(|source| StorageError::Write {
                source: Box::new(source),
            })?;
        Ok(())
    }

    async fn find_paste(&self, slug: &str) -> Result<Option<Paste>, StorageError> {
        self.collection()
            .await?
            .find_one(doc! { "slug": slug }, None)
            .await
            .map_err(|source| StorageError::Read {
                source: Box::new(source),
            })
    }
}
