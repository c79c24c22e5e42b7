//! `civiport-query` — the list-query contract shared by every list screen.
//!
//! Pure state: [`QueryState`] holds search/filter/page/sort, [`PagedResult`]
//! is the wholesale-replaced fetch result, and [`RequestSequence`] issues
//! the monotonic tokens that make last-write-wins explicit rather than an
//! accident of callback ordering.

pub mod page;
pub mod state;
pub mod token;

pub use page::PagedResult;
pub use state::{QueryState, Sort, SortDirection};
pub use token::{RequestSequence, RequestToken};
