use super::{StoreError, UserStore};
use crate::config::AppConfig;
use crate::models::UserRecord;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Document, doc};
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, IndexModel};
use tracing::{debug, info};

/// Server error code for a unique index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

const EMAIL_INDEX: &str = "email_unique";
const SLUG_INDEX: &str = "slug_unique";

#[derive(Clone)]
pub struct MongoUserStore {
    client: Client,
    users: Collection<UserRecord>,
}

impl MongoUserStore {
    /// Opens a client for `config.mongodb_uri` and makes sure the unique
    /// indexes on `email` and `slug` exist.
    pub async fn connect(config: &AppConfig) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(&config.mongodb_uri).await?;
        let users = client
            .database(&config.db_name)
            .collection::<UserRecord>(&config.users_collection);

        let store = Self { client, users };
        store.ensure_indexes().await?;
        info!(
            db = %config.db_name,
            collection = %config.users_collection,
            "connected to MongoDB"
        );
        Ok(store)
    }

    async fn ensure_indexes(&self) -> Result<(), StoreError> {
        let unique = |field: &str, name: &str| {
            let mut keys = Document::new();
            keys.insert(field, 1);
            IndexModel::builder()
                .keys(keys)
                .options(
                    IndexOptions::builder()
                        .unique(true)
                        .name(name.to_string())
                        .build(),
                )
                .build()
        };

        self.users
            .create_indexes([unique("email", EMAIL_INDEX), unique("slug", SLUG_INDEX)])
            .await?;
        Ok(())
    }

    /// Closes all pooled connections. Call once, after the server has stopped.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
        info!("MongoDB client shut down");
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn insert(&self, user: UserRecord) -> Result<UserRecord, StoreError> {
        self.users.insert_one(&user).await?;
        debug!(slug = %user.slug, "user inserted");
        Ok(user)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.users.find_one(doc! { "slug": slug }).await?)
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool, StoreError> {
        let count = self.users.count_documents(doc! { "slug": slug }).await?;
        Ok(count > 0)
    }

    async fn list(&self) -> Result<Vec<UserRecord>, StoreError> {
        let cursor = self
            .users
            .find(doc! {})
            .sort(doc! { "createdAt": 1 })
            .await?;
        let users: Vec<UserRecord> = cursor.try_collect().await?;
        Ok(users)
    }

    async fn delete_by_email(&self, email: &str) -> Result<u64, StoreError> {
        let result = self.users.delete_one(doc! { "email": email }).await?;
        Ok(result.deleted_count)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }
}

impl From<MongoError> for StoreError {
    fn from(err: MongoError) -> Self {
        if let ErrorKind::Write(WriteFailure::WriteError(write_error)) = err.kind.as_ref() {
            if write_error.code == DUPLICATE_KEY_CODE {
                let field = if write_error.message.contains(SLUG_INDEX) {
                    "slug"
                } else {
                    "email"
                };
                return StoreError::Duplicate {
                    field: field.to_string(),
                };
            }
        }
        StoreError::Database(err.to_string())
    }
}
