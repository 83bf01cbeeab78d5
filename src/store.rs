use sqlx::SqlitePool;

use crate::error::StoreError;
use crate::models::{BorrowRecord, Cookbook, NewCookbook, Tag};

/// Façade over a single SQLite database holding the cookbook shelf.
///
/// Construct with [`CookbookStore::new`] and call [`initialize`] once before
/// the other operations; `initialize` is idempotent and safe on an existing
/// database file.
///
/// [`initialize`]: CookbookStore::initialize
#[derive(Clone)]
pub struct CookbookStore {
    pool: SqlitePool,
}

impl CookbookStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the schema if absent.
    pub async fn initialize(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Insert one cookbook and return its generated id.
    pub async fn insert_cookbook(&self, book: &NewCookbook) -> Result<i64, StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO cookbooks (title, author, year_published, aesthetic_rating, instagram_worthy, cover_color)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.year_published)
        .bind(book.aesthetic_rating)
        .bind(book.instagram_worthy)
        .bind(&book.cover_color)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Attach tags to a cookbook, creating tag rows on first use.
    ///
    /// Names are trimmed and lowercased; empty names are skipped. Best-effort
    /// across the list: a name that fails is logged and the rest proceed.
    /// Returns the tags that were applied.
    pub async fn add_tags(&self, cookbook_id: i64, names: &[&str]) -> Result<Vec<Tag>, StoreError> {
        let mut applied = Vec::new();

        for name in names {
            let name = name.trim().to_lowercase();
            if name.is_empty() {
                continue;
            }

            match self.attach_tag(cookbook_id, &name).await {
                Ok(tag) => applied.push(tag),
                Err(e) => {
                    tracing::warn!("skipping tag {name:?} on cookbook {cookbook_id}: {e}");
                }
            }
        }

        Ok(applied)
    }

    /// Get-or-create a tag row, then link it to the cookbook. Linking twice
    /// is a no-op.
    async fn attach_tag(&self, cookbook_id: i64, name: &str) -> Result<Tag, StoreError> {
        let existing: Option<Tag> = sqlx::query_as("SELECT id, name FROM tags WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        let tag = match existing {
            Some(tag) => tag,
            None => {
                let result = sqlx::query("INSERT INTO tags (name) VALUES (?)")
                    .bind(name)
                    .execute(&self.pool)
                    .await?;
                Tag {
                    id: result.last_insert_rowid(),
                    name: name.to_string(),
                }
            }
        };

        sqlx::query("INSERT OR IGNORE INTO cookbook_tags (cookbook_id, tag_id) VALUES (?, ?)")
            .bind(cookbook_id)
            .bind(tag.id)
            .execute(&self.pool)
            .await?;

        Ok(tag)
    }

    /// Record that a cookbook went out on loan. The cookbook id is not
    /// checked against the cookbooks table.
    pub async fn record_borrow(
        &self,
        cookbook_id: i64,
        friend_name: &str,
        date_borrowed: &str,
    ) -> Result<i64, StoreError> {
        let result = sqlx::query(
            "INSERT INTO borrow_records (cookbook_id, friend_name, date_borrowed) VALUES (?, ?, ?)",
        )
        .bind(cookbook_id)
        .bind(friend_name)
        .bind(date_borrowed)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// All cookbooks in insertion order. A fresh snapshot on every call.
    pub async fn list_cookbooks(&self) -> Result<Vec<Cookbook>, StoreError> {
        let books = sqlx::query_as("SELECT * FROM cookbooks ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(books)
    }

    /// Tags attached to one cookbook, by name.
    pub async fn tags_for(&self, cookbook_id: i64) -> Result<Vec<Tag>, StoreError> {
        let tags = sqlx::query_as(
            r#"
            SELECT t.id, t.name
            FROM tags t
            JOIN cookbook_tags ct ON ct.tag_id = t.id
            WHERE ct.cookbook_id = ?
            ORDER BY t.name ASC
            "#,
        )
        .bind(cookbook_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(tags)
    }

    /// Borrow records for one cookbook, oldest first.
    pub async fn borrow_history(&self, cookbook_id: i64) -> Result<Vec<BorrowRecord>, StoreError> {
        let records = sqlx::query_as(
            "SELECT * FROM borrow_records WHERE cookbook_id = ? ORDER BY id ASC",
        )
        .bind(cookbook_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }
}
