//! Repository for paper read access
//!
//! Sole gateway to persisted paper records. The `published` visibility
//! filter lives inside every query built here, so no caller can leak an
//! unpublished record. A missing id and an unpublished id are
//! indistinguishable to callers.
//!
//! Storage failures are absorbed at this boundary: single lookups degrade
//! to `None` and listings to an empty page, never an error. The failure
//! cause is still classified and logged so connectivity loss and query
//! bugs stay distinguishable for alerting.

use crate::db::models::*;
use crate::db::DbPool;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Listing projection of a paper (no status, no artifact reference)
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
pub struct PaperSummary {
    pub id: String,
    pub title: String,
    pub abstract_text: Option<String>,
    pub authors: Option<AuthorList>,
    pub categories: Option<CategoryTags>,
    pub created_at: Option<DateTimeWithTimeZone>,
}

/// A published paper joined with its submitting bot's display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishedPaper {
    pub paper: Paper,

    /// Absent when the paper is unattributed or the bot link dangles
    pub bot_name: Option<String>,
}

/// One page of published papers plus the unpaginated total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishedPage {
    pub items: Vec<PaperSummary>,
    pub total_count: u64,
}

impl PublishedPage {
    /// The degrade-to-empty result used when the store is unreachable
    pub fn empty() -> Self {
        Self { items: Vec::new(), total_count: 0 }
    }
}

/// Repository for published-paper read access
#[derive(Clone)]
pub struct PaperRepository {
    pool: DbPool,
}

impl PaperRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get the read connection
    fn read_conn(&self) -> &DatabaseConnection {
        self.pool.read()
    }

    /// Ping the database
    pub async fn ping(&self) -> crate::errors::Result<()> {
        self.pool.ping().await
    }

    // ========================================================================
    // Single lookup
    // ========================================================================

    /// Fetch one published paper by id, joined with its bot account name.
    ///
    /// Returns `None` when the id does not exist, when the record is not
    /// published, or when the store is unreachable.
    pub async fn get_published_by_id(&self, id: &str) -> Option<PublishedPaper> {
        match self.try_get_published_by_id(id).await {
            Ok(found) => found,
            Err(err) => {
                warn!(
                    paper_id = %id,
                    cause = failure_cause(&err),
                    error = %err,
                    "Paper lookup failed, degrading to not-found"
                );
                None
            }
        }
    }

    async fn try_get_published_by_id(&self, id: &str) -> Result<Option<PublishedPaper>, DbErr> {
        let found = PaperEntity::find_by_id(id)
            .filter(PaperColumn::Status.eq(PaperStatus::Published))
            .find_also_related(BotAccountEntity)
            .one(self.read_conn())
            .await?;

        Ok(found.map(|(paper, bot)| PublishedPaper {
            paper,
            bot_name: bot.map(|b| b.name),
        }))
    }

    // ========================================================================
    // Listing
    // ========================================================================

    /// List published papers, most recent first.
    ///
    /// `page` is 1-indexed and assumed already clamped to >= 1 by the
    /// caller; `page_size` must be positive. A page past the end is a
    /// valid empty page. `total_count` is computed under the same
    /// visibility filter but independently of the item window.
    pub async fn list_published(&self, page: u64, page_size: u64) -> PublishedPage {
        match self.try_list_published(page, page_size).await {
            Ok(result) => result,
            Err(err) => {
                warn!(
                    page,
                    page_size,
                    cause = failure_cause(&err),
                    error = %err,
                    "Paper listing failed, degrading to empty page"
                );
                PublishedPage::empty()
            }
        }
    }

    async fn try_list_published(
        &self,
        page: u64,
        page_size: u64,
    ) -> Result<PublishedPage, DbErr> {
        // Secondary order on id keeps equal timestamps stable within a query.
        let items = PaperEntity::find()
            .filter(PaperColumn::Status.eq(PaperStatus::Published))
            .order_by_desc(PaperColumn::CreatedAt)
            .order_by_desc(PaperColumn::Id)
            .select_only()
            .columns([
                PaperColumn::Id,
                PaperColumn::Title,
                PaperColumn::AbstractText,
                PaperColumn::Authors,
                PaperColumn::Categories,
                PaperColumn::CreatedAt,
            ])
            .into_model::<PaperSummary>()
            .paginate(self.read_conn(), page_size)
            .fetch_page(page.saturating_sub(1))
            .await?;

        let total_count = PaperEntity::find()
            .filter(PaperColumn::Status.eq(PaperStatus::Published))
            .count(self.read_conn())
            .await?;

        Ok(PublishedPage { items, total_count })
    }
}

/// Classify a database error for logging without changing the degraded
/// return contract.
fn failure_cause(err: &DbErr) -> &'static str {
    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => "connectivity",
        DbErr::Exec(_) | DbErr::Query(_) => "query",
        DbErr::Type(_) | DbErr::Json(_) | DbErr::TryIntoErr { .. } => "decode",
        _ => "other",
    }
}
