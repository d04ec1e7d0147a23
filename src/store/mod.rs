//! Application state container: a reducer over five action kinds.
//!
//! The store is constructed once at startup and handed explicitly to its
//! consumers; there is no global accessor to misuse outside that scope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::Product;

/// At most this many suggested products ride along with one reply.
pub const SUGGESTED_PRODUCT_LIMIT: usize = 3;

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// One entry in the append-only chat history. Never mutated after
/// creation; timestamps come from the wall clock at append time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    pub products: Option<Vec<Product>>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            sender: Sender::User,
            timestamp: Utc::now(),
            products: None,
        }
    }

    /// Assistant reply. Suggested products are truncated for display and
    /// omitted entirely when the result set is empty.
    pub fn assistant(text: impl Into<String>, products: Vec<Product>) -> Self {
        let products = if products.is_empty() {
            None
        } else {
            Some(
                products
                    .into_iter()
                    .take(SUGGESTED_PRODUCT_LIMIT)
                    .collect(),
            )
        };
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            sender: Sender::Assistant,
            timestamp: Utc::now(),
            products,
        }
    }
}

/// Filter-widget fields declared by the storefront but never read by any
/// filtering logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filters {
    pub category: String,
    pub price_range: (u32, u32),
    pub style: Vec<String>,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            category: String::new(),
            price_range: (0, 10_000),
            style: Vec::new(),
        }
    }
}

/// Snapshot of the whole application state.
///
/// Invariant: `filtered_products` is always a subset of `products`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShopState {
    pub products: Vec<Product>,
    pub filtered_products: Vec<Product>,
    pub search_query: String,
    pub filters: Filters,
    pub chat_history: Vec<ChatMessage>,
}

/// The five state transitions.
#[derive(Debug, Clone)]
pub enum ShopAction {
    /// Replace the full catalog and reset the filtered view to it
    SetProducts(Vec<Product>),
    /// Replace the filtered view only
    FilterProducts(Vec<Product>),
    /// Store the search-query string (unused by any filtering logic)
    SetSearchQuery(String),
    /// Append one message to the chat history
    AddChatMessage(ChatMessage),
    /// Drop the chat history wholesale
    ClearChat,
}

/// Total, synchronous, side-effect-free transition to a new snapshot.
pub fn reduce(state: ShopState, action: ShopAction) -> ShopState {
    match action {
        ShopAction::SetProducts(products) => ShopState {
            filtered_products: products.clone(),
            products,
            ..state
        },
        ShopAction::FilterProducts(products) => ShopState {
            filtered_products: products,
            ..state
        },
        ShopAction::SetSearchQuery(query) => ShopState {
            search_query: query,
            ..state
        },
        ShopAction::AddChatMessage(message) => {
            let mut next = state;
            next.chat_history.push(message);
            next
        }
        ShopAction::ClearChat => ShopState {
            chat_history: Vec::new(),
            ..state
        },
    }
}

/// Owning handle around the current snapshot.
pub struct Store {
    state: ShopState,
}

impl Store {
    pub fn new() -> Self {
        Self {
            state: ShopState::default(),
        }
    }

    pub fn state(&self) -> &ShopState {
        &self.state
    }

    pub fn dispatch(&mut self, action: ShopAction) {
        self.state = reduce(std::mem::take(&mut self.state), action);
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn products() -> Vec<Product> {
        catalog::seed().unwrap().products().to_vec()
    }

    #[test]
    fn test_set_products_replaces_both_lists() {
        let mut store = Store::new();
        let products = products();
        store.dispatch(ShopAction::SetProducts(products.clone()));
        assert_eq!(store.state().products, products);
        assert_eq!(store.state().filtered_products, products);
    }

    #[test]
    fn test_filter_products_leaves_full_list() {
        let mut store = Store::new();
        let products = products();
        store.dispatch(ShopAction::SetProducts(products.clone()));
        let subset = vec![products[0].clone()];
        store.dispatch(ShopAction::FilterProducts(subset.clone()));
        assert_eq!(store.state().products, products);
        assert_eq!(store.state().filtered_products, subset);
    }

    #[test]
    fn test_set_search_query() {
        let mut store = Store::new();
        store.dispatch(ShopAction::SetSearchQuery("boho".to_string()));
        assert_eq!(store.state().search_query, "boho");
        // stored only; nothing else changes
        assert!(store.state().filtered_products.is_empty());
    }

    #[test]
    fn test_chat_appends_in_order() {
        let mut store = Store::new();
        store.dispatch(ShopAction::AddChatMessage(ChatMessage::user("first")));
        store.dispatch(ShopAction::AddChatMessage(ChatMessage::assistant(
            "second",
            vec![],
        )));

        let history = &store.state().chat_history;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].text, "first");
        assert_eq!(history[1].text, "second");
        assert!(history[0].timestamp <= history[1].timestamp);
        assert_ne!(history[0].id, history[1].id);
    }

    #[test]
    fn test_clear_chat_empties_history() {
        let mut store = Store::new();
        for i in 0..5 {
            store.dispatch(ShopAction::AddChatMessage(ChatMessage::user(format!(
                "message {i}"
            ))));
        }
        store.dispatch(ShopAction::ClearChat);
        assert!(store.state().chat_history.is_empty());
    }

    #[test]
    fn test_assistant_message_truncates_suggestions() {
        let message = ChatMessage::assistant("found", products());
        assert_eq!(
            message.products.as_ref().map(Vec::len),
            Some(SUGGESTED_PRODUCT_LIMIT)
        );

        let empty = ChatMessage::assistant("nothing", vec![]);
        assert!(empty.products.is_none());
    }

    #[test]
    fn test_default_filters_are_dead_state() {
        let filters = Filters::default();
        assert_eq!(filters.price_range, (0, 10_000));
        assert!(filters.category.is_empty());
        assert!(filters.style.is_empty());
    }
}
