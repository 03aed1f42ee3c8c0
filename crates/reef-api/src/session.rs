//! # Buyer Sessions
//!
//! Per-buyer session registry. Each session owns one cart and one
//! checkout state machine; there is exactly one logical actor per
//! session, so all mutation happens under one short-lived lock per
//! request and sessions never share state.

use reef_core::{Cart, CheckoutSession, StoreError, StoreResult};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// State owned by a single buyer: the live cart plus the checkout
/// state machine. The cart survives checkout abandonment.
#[derive(Debug, Default)]
pub struct BuyerSession {
    pub cart: Cart,
    pub checkout: CheckoutSession,
}

/// Registry of buyer sessions keyed by opaque tokens
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, BuyerSession>>>,
}

impl SessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a fresh session with an empty cart
    pub async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.inner.write().await.insert(id, BuyerSession::default());
        id
    }

    /// Run a closure against one session with exclusive access
    pub async fn with_session<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut BuyerSession) -> R,
    ) -> StoreResult<R> {
        let mut guard = self.inner.write().await;
        let session = guard.get_mut(&id).ok_or_else(|| StoreError::SessionNotFound {
            session_id: id.to_string(),
        })?;
        Ok(f(session))
    }

    /// Drop a session and everything it owns
    pub async fn remove(&self, id: Uuid) {
        self.inner.write().await.remove(&id);
    }

    /// Number of open sessions
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}
