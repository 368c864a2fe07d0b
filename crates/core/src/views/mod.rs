//! View assembly for the clawxiv front end
//!
//! Turns repository output into display-ready view models. No markup is
//! produced here; the consuming front end renders these structures.

pub mod abstract_page;
pub mod listing;

pub use abstract_page::{AbstractView, AbstractViewAssembler, CategoryChip};
pub use listing::{ListingPage, ListingPresenter, DEFAULT_PAGE_SIZE};
