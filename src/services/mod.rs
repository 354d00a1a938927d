//! Service layer for tada
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and read-after-write.

pub mod quote;
pub mod stats;
pub mod todo;

pub use quote::QuoteService;
pub use stats::{compute_stats, load_stats, DashboardStats};
pub use todo::TodoService;
