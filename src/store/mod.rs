use crate::models::UserRecord;
use crate::slug::slugify;
use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

/// MongoDB-backed [`UserStore`].
///
/// The client is created once at startup with [`mongo::MongoUserStore::connect`],
/// shared through `web::Data`, and closed with
/// [`mongo::MongoUserStore::shutdown`] after the HTTP server stops.
pub mod mongo;

pub use mongo::MongoUserStore;

/// Highest numeric suffix tried by [`allocate_slug`].
pub const MAX_SLUG_ATTEMPTS: u32 = 100;

/// How many times [`insert_with_unique_slug`] re-allocates after a concurrent
/// insert claimed the slug between the existence check and the write.
pub const SLUG_RACE_RETRIES: u32 = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A unique index rejected the write.
    #[error("a user with this {field} already exists")]
    Duplicate { field: String },
    #[error("database error: {0}")]
    Database(String),
}

/// Persistence operations the HTTP layer needs for users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Stores `user` and returns it. Fails with [`StoreError::Duplicate`]
    /// when the email or slug is already taken.
    async fn insert(&self, user: UserRecord) -> Result<UserRecord, StoreError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<UserRecord>, StoreError>;

    async fn slug_exists(&self, slug: &str) -> Result<bool, StoreError>;

    /// All users, oldest first.
    async fn list(&self) -> Result<Vec<UserRecord>, StoreError>;

    /// Returns the number of deleted documents (0 or 1).
    async fn delete_by_email(&self, email: &str) -> Result<u64, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}

/// Picks an unused slug for a user called `name`.
///
/// An empty slug falls back to a random `user-xxxxxxxx` placeholder. If the
/// slug is taken, `-2`, `-3`, ... up to [`MAX_SLUG_ATTEMPTS`] are tried.
pub async fn allocate_slug(store: &dyn UserStore, name: &str) -> Result<String, StoreError> {
    let mut base = slugify(name);
    if base.is_empty() {
        base = placeholder_slug();
    }

    if !store.slug_exists(&base).await? {
        return Ok(base);
    }

    for i in 2..=MAX_SLUG_ATTEMPTS {
        let candidate = format!("{}-{}", base, i);
        if !store.slug_exists(&candidate).await? {
            return Ok(candidate);
        }
    }

    Err(StoreError::Duplicate {
        field: "slug".to_string(),
    })
}

/// Allocates a slug for `name` and inserts the record built from it.
///
/// [`allocate_slug`] only checks existence, so two requests for the same name
/// can pick the same slug. When the unique slug index rejects the write the
/// slug is allocated again, up to [`SLUG_RACE_RETRIES`] times. Duplicate emails
/// are returned immediately.
pub async fn insert_with_unique_slug<F>(
    store: &dyn UserStore,
    name: &str,
    build: F,
) -> Result<UserRecord, StoreError>
where
    F: Fn(String) -> UserRecord,
{
    let mut retries = 0;
    loop {
        let slug = allocate_slug(store, name).await?;
        match store.insert(build(slug)).await {
            Err(StoreError::Duplicate { field })
                if field == "slug" && retries < SLUG_RACE_RETRIES =>
            {
                retries += 1;
                warn!(retries, "slug claimed by a concurrent insert, allocating again");
            }
            result => return result,
        }
    }
}

fn placeholder_slug() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("user-{}", &id[..8])
}
