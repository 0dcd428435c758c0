//! # ingest — CSV Ingestion Pipeline
//!
//! Raw CSV text → tokenized rows → alias-resolved columns → coerced values →
//! derived fields (weights, KPIs).  One linear pass per stage, recomputed
//! from scratch on every refresh.

pub mod coerce;
pub mod columns;
pub mod fetch;
pub mod history;
pub mod kpi;
pub mod parser;
pub mod portfolio;
