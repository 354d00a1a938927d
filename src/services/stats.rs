//! Dashboard statistics
//!
//! Recomputed from full scans of both tables on every load.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::TadaResult;
use crate::models::{QuoteFilter, Todo, TodoFilter};
use crate::storage::Storage;

/// Aggregate numbers shown on the dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_todos: usize,
    pub completed_todos: usize,
    /// Todos whose completion date is today
    pub today_completed: usize,
    /// Percentage in 0..=100; 0 when there are no todos
    pub completion_rate: f64,
    pub total_quotes: usize,
}

/// Compute statistics from already-loaded todos
pub fn compute_stats(todos: &[Todo], total_quotes: usize, now: DateTime<Utc>) -> DashboardStats {
    let today = now.date_naive();
    let total_todos = todos.len();
    let completed_todos = todos.iter().filter(|t| t.is_done()).count();
    let today_completed = todos
        .iter()
        .filter_map(|t| t.completed_at)
        .filter(|at| at.date_naive() == today)
        .count();

    let completion_rate = if total_todos > 0 {
        completed_todos as f64 / total_todos as f64 * 100.0
    } else {
        0.0
    };

    DashboardStats {
        total_todos,
        completed_todos,
        today_completed,
        completion_rate,
        total_quotes,
    }
}

/// Load both tables and compute statistics
pub fn load_stats(storage: &Storage) -> TadaResult<DashboardStats> {
    let todos = storage.todos().list(&TodoFilter::all())?;
    let quotes = storage.quotes().list(&QuoteFilter::all())?;
    Ok(compute_stats(&todos, quotes.len(), Utc::now()))
}
