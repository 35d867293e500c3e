//! This crate contains the schema-driven registry panels (clients, suppliers)
//! and the record editor state behind them.

pub mod app;
pub use app::{ClientsPanel, RegistryPanel, SuppliersPanel};

pub mod components;
pub mod editor;
pub mod schema;
pub mod utils;
