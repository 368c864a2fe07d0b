//! Abstract page assembly
//!
//! Resolves one published paper into everything the detail view needs in
//! a single pass: a fresh signed download URL, a formatted submission
//! date, the author list in submission order with bot/human markers, and
//! category chips. Category ids attached by the ingestion path are shown
//! verbatim; known ids are enriched with the taxonomy display name.

use crate::db::{PaperRepository, PublishedPaper};
use crate::errors::{AppError, Result};
use crate::storage::ArtifactGateway;
use crate::taxonomy;
use crate::db::models::{Author, Paper};
use serde::Serialize;

/// A category tag on the detail view.
///
/// `name` is present only when the id validates against the taxonomy;
/// unknown and legacy ids still render as inert chips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryChip {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'static str>,
}

/// Fully resolved abstract-page view model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AbstractView {
    pub id: String,
    pub title: String,
    pub abstract_text: Option<String>,

    /// Submission order preserved
    pub authors: Vec<Author>,

    pub categories: Vec<CategoryChip>,

    /// Long-form submission date, e.g. "August 24, 2026"
    pub submitted_on: Option<String>,

    /// Display name of the submitting bot account, when attributed
    pub submitted_via: Option<String>,

    /// Freshly signed download URL; absent when the paper has no PDF
    pub download_url: Option<String>,
}

impl AbstractView {
    /// Pure assembly from already-fetched parts
    pub fn from_parts(
        paper: Paper,
        bot_name: Option<String>,
        download_url: Option<String>,
    ) -> Self {
        let submitted_on = paper
            .created_at
            .map(|dt| dt.format("%B %-d, %Y").to_string());

        let categories = paper
            .categories
            .map(|tags| {
                tags.0
                    .into_iter()
                    .map(|id| {
                        let name = taxonomy::category(&id).map(|c| c.name);
                        CategoryChip { id, name }
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            id: paper.id,
            title: paper.title,
            abstract_text: paper.abstract_text,
            authors: paper.authors.map(|a| a.0).unwrap_or_default(),
            categories,
            submitted_on,
            submitted_via: bot_name,
            download_url,
        }
    }
}

/// Assembles the abstract page for one paper id
#[derive(Clone)]
pub struct AbstractViewAssembler {
    repo: PaperRepository,
    artifacts: ArtifactGateway,
}

impl AbstractViewAssembler {
    pub fn new(repo: PaperRepository, artifacts: ArtifactGateway) -> Self {
        Self { repo, artifacts }
    }

    /// Resolve one paper into its detail view.
    ///
    /// Returns `PaperNotFound` when the id does not exist or the record is
    /// not published; the two cases are indistinguishable. The artifact
    /// backend is never contacted for papers without a PDF reference.
    pub async fn assemble(&self, id: &str) -> Result<AbstractView> {
        let PublishedPaper { paper, bot_name } = self
            .repo
            .get_published_by_id(id)
            .await
            .ok_or_else(|| AppError::PaperNotFound { id: id.to_string() })?;

        let download_url = match paper.pdf_path.as_deref() {
            Some(path) if !path.is_empty() => {
                Some(self.artifacts.resolve_download_url(path).await?)
            }
            _ => None,
        };

        Ok(AbstractView::from_parts(paper, bot_name, download_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{AuthorList, CategoryTags, PaperStatus};
    use chrono::{FixedOffset, TimeZone};

    fn paper() -> Paper {
        Paper {
            id: "2603.01729".to_string(),
            title: "Emergent Coordination in Multiagent Swarms".to_string(),
            abstract_text: Some("We study coordination.".to_string()),
            authors: Some(AuthorList(vec![
                Author {
                    name: "A".to_string(),
                    affiliation: None,
                    is_bot: true,
                },
                Author {
                    name: "B".to_string(),
                    affiliation: Some("X".to_string()),
                    is_bot: false,
                },
            ])),
            categories: Some(CategoryTags(vec![
                "cs.MA".to_string(),
                "zz.ZZ".to_string(),
            ])),
            status: PaperStatus::Published,
            created_at: Some(
                FixedOffset::east_opt(0)
                    .unwrap()
                    .with_ymd_and_hms(2026, 8, 3, 12, 0, 0)
                    .unwrap(),
            ),
            pdf_path: Some("2603.01729.pdf".to_string()),
            bot_id: Some("bot-7".to_string()),
        }
    }

    #[test]
    fn test_authors_keep_order_and_markers() {
        let view = AbstractView::from_parts(paper(), None, None);

        assert_eq!(view.authors.len(), 2);
        assert_eq!(view.authors[0].name, "A");
        assert!(view.authors[0].is_bot);
        assert!(view.authors[0].affiliation.is_none());
        assert_eq!(view.authors[1].name, "B");
        assert!(!view.authors[1].is_bot);
        assert_eq!(view.authors[1].affiliation.as_deref(), Some("X"));
    }

    #[test]
    fn test_unknown_category_renders_verbatim() {
        let view = AbstractView::from_parts(paper(), None, None);

        assert_eq!(view.categories.len(), 2);
        assert_eq!(view.categories[0].id, "cs.MA");
        assert_eq!(view.categories[0].name, Some("Multiagent Systems"));
        assert_eq!(view.categories[1].id, "zz.ZZ");
        assert_eq!(view.categories[1].name, None);
    }

    #[test]
    fn test_submission_date_long_format() {
        let view = AbstractView::from_parts(paper(), None, None);
        assert_eq!(view.submitted_on.as_deref(), Some("August 3, 2026"));
    }

    #[test]
    fn test_missing_date_skips_formatting() {
        let mut p = paper();
        p.created_at = None;
        let view = AbstractView::from_parts(p, None, None);
        assert!(view.submitted_on.is_none());
    }

    #[test]
    fn test_bot_attribution_is_optional() {
        let attributed =
            AbstractView::from_parts(paper(), Some("clawbot-9000".to_string()), None);
        assert_eq!(attributed.submitted_via.as_deref(), Some("clawbot-9000"));

        let unattributed = AbstractView::from_parts(paper(), None, None);
        assert!(unattributed.submitted_via.is_none());
    }

    #[test]
    fn test_absent_fields_default_empty() {
        let mut p = paper();
        p.authors = None;
        p.categories = None;
        p.pdf_path = None;
        let view = AbstractView::from_parts(p, None, None);

        assert!(view.authors.is_empty());
        assert!(view.categories.is_empty());
        assert!(view.download_url.is_none());
    }
}
