//! ShopMuse - a storefront demo with a simulated AI shopping assistant
//!
//! This library provides:
//! - A static product catalog with a built-in demo seed
//! - A query interpreter that turns free-text chat input into a product
//!   filter (price range, style, category and color keywords), a reply
//!   message and a heuristic confidence score
//! - A reducer-style state container over the catalog, the filtered view
//!   and the chat history
//! - A cancellable delayed-reply scheduler simulating assistant latency
//! - An egui storefront UI behind the `ui` feature

pub mod assistant;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod store;
pub mod utils;

#[cfg(feature = "ui")]
pub mod ui;

// Re-export main types for convenience
pub use crate::assistant::{FilterResult, ShoppingAssistant};
pub use crate::catalog::{Catalog, Product};
pub use crate::config::AppConfig;
pub use crate::error::{ShopMuseError, ShopMuseResult};
pub use crate::store::{ChatMessage, ShopAction, ShopState, Store};
