//! Shared wiremock fixtures for feature tests.

use crate::{
    api::{ApiClient, ApiConfig, RecordingNotifier},
    session::MemoryStore,
};
use anyhow::Result;
use std::{net::TcpListener, sync::Arc};
use wiremock::MockServer;

pub fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

/// Client signed with `token`, pointed at `server`.
pub fn signed_client(
    server: &MockServer,
    token: &str,
) -> Result<(ApiClient, Arc<RecordingNotifier>)> {
    let notifier = Arc::new(RecordingNotifier::new());
    let api = ApiClient::new(
        ApiConfig::new(&server.uri())?,
        Arc::new(MemoryStore::with_token(token)),
        notifier.clone(),
    )?;
    Ok((api, notifier))
}
