//! Connection registry (C4): one live session per agent instance, push
//! routing, and liveness tracking.
//!
//! Grounded in the teacher's preference for an explicit registry object
//! over an ambient singleton (§9 design note): all access goes through
//! `ConnectionRegistry`'s methods, backed by a `dashmap` the way the wire
//! client's connection pool is backed by concurrent maps.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use opamp_proto::proto::ServerToAgent;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::model::InstanceUid;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("no live session for this agent")]
    NoSession,
    #[error("outbound queue is full")]
    SendQueueFull,
}

pub type RegistryResult<T> = std::result::Result<T, RegistryError>;

const OUTBOUND_QUEUE_DEPTH: usize = 32;

/// A live agent connection. Cheaply cloneable; clones share the same
/// outbound channel and cancellation token.
#[derive(Clone)]
pub struct Session {
    id: u64,
    outbound: mpsc::Sender<ServerToAgent>,
    cancellation: CancellationToken,
    last_activity_millis: Arc<AtomicI64>,
}

impl Session {
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancellation.clone()
    }

    pub fn touch(&self) {
        self.last_activity_millis
            .store(Utc::now().timestamp_millis(), Ordering::Relaxed);
    }

    pub fn last_activity(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.last_activity_millis.load(Ordering::Relaxed))
            .unwrap_or_else(Utc::now)
    }

    pub fn is_stale(&self, window: Duration) -> bool {
        Utc::now().signed_duration_since(self.last_activity())
            > chrono::Duration::from_std(window).unwrap_or(chrono::Duration::zero())
    }
}

/// Handle returned to the transport layer: owns the receiving half of the
/// outbound channel and is dropped (closing the channel) when the
/// connection's read loop exits.
pub struct SessionHandle {
    pub session: Session,
    pub outbound_rx: mpsc::Receiver<ServerToAgent>,
}

static NEXT_SESSION_ID: AtomicI64 = AtomicI64::new(1);

/// A config offer C6 has queued for an agent, picked up by C5 the next time
/// it composes a `ServerToAgent` for that instance.
#[derive(Debug, Clone)]
pub struct PendingOffer {
    pub deployment_id: String,
    pub config_hash: Vec<u8>,
    pub config_yaml: String,
}

pub struct ConnectionRegistry {
    sessions: DashMap<InstanceUid, Session>,
    pending_offers: DashMap<InstanceUid, PendingOffer>,
    report_full_state: DashMap<InstanceUid, ()>,
    pending_restarts: DashMap<InstanceUid, ()>,
}

impl Default for ConnectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
            pending_offers: DashMap::new(),
            report_full_state: DashMap::new(),
            pending_restarts: DashMap::new(),
        }
    }

    /// Queues a config offer for the next `ServerToAgent` composed for this
    /// instance. Idempotent by `config_hash`: re-setting the same offer
    /// (e.g. on reconnect) is harmless.
    pub fn set_pending_offer(&self, instance_uid: InstanceUid, offer: PendingOffer) {
        self.pending_offers.insert(instance_uid, offer);
    }

    pub fn peek_pending_offer(&self, instance_uid: &InstanceUid) -> Option<PendingOffer> {
        self.pending_offers.get(instance_uid).map(|o| o.clone())
    }

    pub fn clear_pending_offer(&self, instance_uid: &InstanceUid, config_hash: &[u8]) {
        self.pending_offers
            .remove_if(instance_uid, |_, o| o.config_hash == config_hash);
    }

    pub fn request_full_state(&self, instance_uid: InstanceUid) {
        self.report_full_state.insert(instance_uid, ());
    }

    pub fn take_report_full_state(&self, instance_uid: &InstanceUid) -> bool {
        self.report_full_state.remove(instance_uid).is_some()
    }

    /// Queues a restart command for the next `ServerToAgent` composed for
    /// this instance (§4.5). Idempotent: requesting a restart that's already
    /// pending is a no-op.
    pub fn request_restart(&self, instance_uid: InstanceUid) {
        self.pending_restarts.insert(instance_uid, ());
    }

    pub fn take_pending_restart(&self, instance_uid: &InstanceUid) -> bool {
        self.pending_restarts.remove(instance_uid).is_some()
    }

    /// Replaces any prior session for `instance_uid`; the old session's
    /// cancellation token is fired so its transport loop tears down (§4.4,
    /// P5: only one live session per instance).
    pub fn register(&self, instance_uid: InstanceUid) -> SessionHandle {
        let (tx, rx) = mpsc::channel(OUTBOUND_QUEUE_DEPTH);
        let session = Session {
            id: NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed) as u64,
            outbound: tx,
            cancellation: CancellationToken::new(),
            last_activity_millis: Arc::new(AtomicI64::new(Utc::now().timestamp_millis())),
        };

        if let Some(prior) = self.sessions.insert(instance_uid, session.clone()) {
            prior.cancellation.cancel();
        }

        SessionHandle {
            session,
            outbound_rx: rx,
        }
    }

    /// Removes the registry entry only if it is still this exact session
    /// (avoids a disconnect race against an already-reconnected agent).
    pub fn unregister(&self, instance_uid: &InstanceUid, session: &Session) {
        self.sessions
            .remove_if(instance_uid, |_, current| current.id == session.id);
    }

    pub fn send(&self, instance_uid: &InstanceUid, msg: ServerToAgent) -> RegistryResult<()> {
        let session = self
            .sessions
            .get(instance_uid)
            .ok_or(RegistryError::NoSession)?;
        session
            .outbound
            .try_send(msg)
            .map_err(|e| match e {
                mpsc::error::TrySendError::Full(_) => RegistryError::SendQueueFull,
                mpsc::error::TrySendError::Closed(_) => RegistryError::NoSession,
            })
    }

    pub fn touch(&self, instance_uid: &InstanceUid) {
        if let Some(session) = self.sessions.get(instance_uid) {
            session.touch();
        }
    }

    pub fn is_live(&self, instance_uid: &InstanceUid) -> bool {
        self.sessions.contains_key(instance_uid)
    }

    /// "Online" per §4.4: a live session whose last activity is within the
    /// staleness window.
    pub fn is_online(&self, instance_uid: &InstanceUid, staleness_window: Duration) -> bool {
        self.sessions
            .get(instance_uid)
            .map(|s| !s.is_stale(staleness_window))
            .unwrap_or(false)
    }

    pub fn live_count(&self) -> usize {
        self.sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uid(byte: u8) -> InstanceUid {
        [byte; 16]
    }

    #[tokio::test]
    async fn second_registration_cancels_the_first() {
        let registry = ConnectionRegistry::new();
        let first = registry.register(uid(1));
        let token = first.session.cancellation_token();
        assert!(!token.is_cancelled());

        let _second = registry.register(uid(1));
        assert!(token.is_cancelled());
    }

    #[test]
    fn send_without_session_is_no_session() {
        let registry = ConnectionRegistry::new();
        let msg = ServerToAgent::default();
        let err = registry.send(&uid(2), msg).unwrap_err();
        assert!(matches!(err, RegistryError::NoSession));
    }

    #[test]
    fn unregister_ignores_stale_handle_after_reconnect() {
        let registry = ConnectionRegistry::new();
        let first = registry.register(uid(3));
        let _second = registry.register(uid(3));
        registry.unregister(&uid(3), &first.session);
        assert!(registry.is_live(&uid(3)));
    }

    #[test]
    fn pending_restart_is_consumed_once() {
        let registry = ConnectionRegistry::new();
        assert!(!registry.take_pending_restart(&uid(4)));
        registry.request_restart(uid(4));
        assert!(registry.take_pending_restart(&uid(4)));
        assert!(!registry.take_pending_restart(&uid(4)));
    }
}
