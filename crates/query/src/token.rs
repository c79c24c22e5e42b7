//! Monotonic request tokens for last-write-wins fetches.

/// Identity of one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

/// Issues tokens in order and accepts only the newest.
///
/// A screen issues a token per fetch and checks it when the response
/// arrives: responses for anything but the most recently issued request
/// are discarded, regardless of arrival order. No cancellation is sent to
/// the transport; superseded responses are simply ignored.
#[derive(Debug, Default)]
pub struct RequestSequence {
    issued: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> RequestToken {
        self.issued += 1;
        RequestToken(self.issued)
    }

    /// True only for the most recently issued token.
    pub fn accepts(&self, token: RequestToken) -> bool {
        token.0 == self.issued
    }
}
