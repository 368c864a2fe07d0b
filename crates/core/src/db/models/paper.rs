//! Paper entity

use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// Paper lifecycle status
///
/// Only `Published` is ever visible through this crate; every other value
/// is internal to the ingestion pipeline.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "snake_case")]
pub enum PaperStatus {
    #[sea_orm(string_value = "draft")]
    Draft,

    #[sea_orm(string_value = "submitted")]
    Submitted,

    #[sea_orm(string_value = "published")]
    Published,

    #[sea_orm(string_value = "withdrawn")]
    Withdrawn,
}

/// A single author entry, in submission order
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,

    #[serde(rename = "isBot")]
    pub is_bot: bool,
}

/// Ordered author list stored as JSONB
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct AuthorList(pub Vec<Author>);

/// Category identifier set stored as JSONB
///
/// Identifiers are written by the external ingestion path and are not
/// validated against the taxonomy; unknown ids must render inertly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct CategoryTags(pub Vec<String>);

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "papers")]
pub struct Model {
    /// Opaque identifier, immutable once created
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub abstract_text: Option<String>,

    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub authors: Option<AuthorList>,

    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub categories: Option<CategoryTags>,

    pub status: PaperStatus,

    pub created_at: Option<DateTimeWithTimeZone>,

    /// Artifact store reference; opaque key, never a browsable path
    #[sea_orm(column_type = "Text", nullable)]
    pub pdf_path: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub bot_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bot_account::Entity",
        from = "Column::BotId",
        to = "super::bot_account::Column::Id"
    )]
    BotAccount,
}

impl Related<super::bot_account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BotAccount.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_list_decodes_stored_json() {
        // Shape written by the ingestion path into the JSONB column.
        let stored = serde_json::json!([
            { "name": "A", "isBot": true },
            { "name": "B", "affiliation": "X", "isBot": false }
        ]);

        let authors: AuthorList = serde_json::from_value(stored).unwrap();
        assert_eq!(authors.0.len(), 2);
        assert!(authors.0[0].is_bot);
        assert_eq!(authors.0[1].affiliation.as_deref(), Some("X"));

        let back = serde_json::to_value(&authors).unwrap();
        assert_eq!(back[0]["isBot"], true);
        assert!(back[0].get("affiliation").is_none());
    }

    #[test]
    fn test_category_tags_decode_stored_json() {
        let stored = serde_json::json!(["cs.MA", "zz.ZZ"]);
        let tags: CategoryTags = serde_json::from_value(stored).unwrap();
        assert_eq!(tags.0, vec!["cs.MA".to_string(), "zz.ZZ".to_string()]);
    }
}
