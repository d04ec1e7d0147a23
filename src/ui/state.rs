use serde::{Deserialize, Serialize};

/// UI-local state, separate from the domain store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiState {
    /// Header search box buffer; its value is dispatched to the store but
    /// never read by any filtering logic
    pub search_text: String,
    #[serde(skip)]
    pub status_message: Option<String>,
}
