//! The starter's single view component.
//!
//! A [`StarterView`] owns two state slots (the session handle and a resource
//! placeholder) and issues the one-off connect call when mounted. Rendering
//! only ever reads a snapshot; nothing on the request path can trigger
//! session establishment.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use smart_session::{Resource, SessionConnector, SessionHandle};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

/// Cheaply cloneable handle to the view's shared state.
#[derive(Clone, Default)]
pub struct StarterView {
    inner: Arc<ViewInner>,
}

#[derive(Default)]
struct ViewInner {
    connect_issued: AtomicBool,
    state: RwLock<ViewState>,
}

#[derive(Default)]
struct ViewState {
    session: Option<SessionHandle>,
    patient: Option<Resource>,
}

/// Point-in-time copy of the view state, for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewSnapshot {
    pub session: Option<SessionHandle>,
    pub patient: Option<Resource>,
}

impl StarterView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount the view: issue the single connect call in the background.
    ///
    /// The call is made exactly once per view; a second `mount` on the same
    /// view logs a warning and does nothing. On success the returned handle
    /// is stored whole. On failure the error goes to the diagnostic channel
    /// and the state stays empty; nothing is surfaced to the page.
    pub fn mount(&self, connector: Arc<dyn SessionConnector>) -> JoinHandle<()> {
        let inner = self.inner.clone();
        tokio::spawn(async move {
            if inner.connect_issued.swap(true, Ordering::SeqCst) {
                tracing::warn!("view already mounted, connect not re-issued");
                return;
            }

            match connector.establish().await {
                Ok(handle) => {
                    tracing::info!(session = %handle, "session established");
                    inner.state.write().await.session = Some(handle);
                    // TODO: fetch Patient/<id> through the session handle and
                    // populate the `patient` slot once resource retrieval lands.
                }
                Err(error) => {
                    tracing::error!(%error, "session establishment failed");
                }
            }
        })
    }

    /// Copy the current state for rendering.
    pub async fn snapshot(&self) -> ViewSnapshot {
        let state = self.inner.state.read().await;
        ViewSnapshot {
            session: state.session.clone(),
            patient: state.patient.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smart_session::{AuthError, AuthResult};
    use std::sync::atomic::AtomicUsize;

    /// Connector that always grants the same session, counting invocations.
    struct CannedConnector {
        calls: AtomicUsize,
        session: serde_json::Value,
    }

    impl CannedConnector {
        fn new(session: serde_json::Value) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                session,
            }
        }
    }

    #[async_trait::async_trait]
    impl SessionConnector for CannedConnector {
        async fn establish(&self) -> AuthResult<SessionHandle> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(SessionHandle::from(self.session.clone()))
        }
    }

    /// Connector that always denies the launch, counting invocations.
    struct RejectingConnector {
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl SessionConnector for RejectingConnector {
        async fn establish(&self) -> AuthResult<SessionHandle> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(AuthError::Rejected {
                status: 401,
                message: "launch rejected".into(),
            })
        }
    }

    #[tokio::test]
    async fn stores_the_session_exactly_as_granted() {
        let view = StarterView::new();
        let connector = Arc::new(CannedConnector::new(serde_json::json!({ "patient": "123" })));

        view.mount(connector.clone()).await.expect("mount task");

        let snapshot = view.snapshot().await;
        let session = snapshot.session.expect("session should be set");
        assert_eq!(session.to_string(), r#"{"patient":"123"}"#);
        assert!(snapshot.patient.is_none());
        assert_eq!(connector.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failure_leaves_state_empty() {
        let view = StarterView::new();
        let connector = Arc::new(RejectingConnector {
            calls: AtomicUsize::new(0),
        });

        view.mount(connector.clone()).await.expect("mount task");

        let snapshot = view.snapshot().await;
        assert!(snapshot.session.is_none());
        assert!(snapshot.patient.is_none());
        assert_eq!(connector.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn double_mount_issues_a_single_connect() {
        let view = StarterView::new();
        let connector = Arc::new(CannedConnector::new(serde_json::json!({ "patient": "123" })));

        view.mount(connector.clone()).await.expect("first mount");
        view.mount(connector.clone()).await.expect("second mount");

        assert_eq!(connector.calls.load(Ordering::SeqCst), 1);
        assert!(view.snapshot().await.session.is_some());
    }

    #[tokio::test]
    async fn sequential_mounts_have_independent_state() {
        // Two view instances sharing one connector: one call each.
        let connector = Arc::new(CannedConnector::new(serde_json::json!({ "patient": "123" })));

        let first = StarterView::new();
        first.mount(connector.clone()).await.expect("mount first");

        let second = StarterView::new();
        second.mount(connector.clone()).await.expect("mount second");

        assert_eq!(connector.calls.load(Ordering::SeqCst), 2);
        assert_eq!(first.snapshot().await, second.snapshot().await);

        // A failing remount elsewhere leaves an earlier view untouched.
        let third = StarterView::new();
        let rejecting = Arc::new(RejectingConnector {
            calls: AtomicUsize::new(0),
        });
        third.mount(rejecting).await.expect("mount third");

        assert!(third.snapshot().await.session.is_none());
        assert!(first.snapshot().await.session.is_some());
    }
}
