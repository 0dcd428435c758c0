pub mod news;
pub mod portfolio;

pub use news::{NewsItem, NewsPayload};
pub use portfolio::{DashboardSnapshot, HistoryEntry, KpiData, Position};
