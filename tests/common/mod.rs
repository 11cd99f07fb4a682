#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use std::sync::Arc;
use std::time::Duration;
use memshort::routes::router;
use memshort::state::AppState;
use memshort::store::CodeStore;

pub const TEST_TIMEOUT: Duration = Duration::from_secs(10);

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(CodeStore::seeded(0x5eed)))
}

pub fn create_test_router(state: AppState) -> Router {
    router(state, TEST_TIMEOUT)
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(create_test_router(state)).unwrap()
}

/// Seeds a link straight through the store and returns its code.
pub fn create_test_link(state: &AppState, url: &str) -> String {
    state.store.create(url).unwrap().code
}
