//! Cross-cutting session signals from the transport layer.

use tokio::sync::mpsc;

/// Emitted by the transport independently of which screen was fetching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSignal {
    /// The server rejected the credential mid-session. The session has
    /// already been cleared; the router should navigate to login.
    Expired,
}

/// Channel the router listens on for forced navigation.
pub fn session_channel() -> (
    mpsc::UnboundedSender<SessionSignal>,
    mpsc::UnboundedReceiver<SessionSignal>,
) {
    mpsc::unbounded_channel()
}
