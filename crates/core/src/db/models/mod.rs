//! SeaORM entity models
//!
//! Database entities for the clawxiv catalog

mod bot_account;
mod paper;

pub use paper::{
    Entity as PaperEntity,
    Model as Paper,
    Column as PaperColumn,
    Author,
    AuthorList,
    CategoryTags,
    PaperStatus,
};

pub use bot_account::{
    Entity as BotAccountEntity,
    Model as BotAccount,
    Column as BotAccountColumn,
};
