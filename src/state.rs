//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::store::CodeStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CodeStore>,
}

impl AppState {
    pub fn new(store: Arc<CodeStore>) -> Self {
        Self { store }
    }
}
