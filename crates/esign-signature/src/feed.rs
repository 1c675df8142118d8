//! Payload channel from the capture surface to its single subscriber
//!
//! Backed by a `tokio::sync::watch` channel: only the latest payload is
//! kept, there is exactly one receiver, and publishing never blocks or fails.

use crate::payload::SignaturePayload;
use tokio::sync::watch;

/// Create a connected emitter/feed pair, initially holding `None`
#[must_use]
pub fn signature_channel() -> (SignatureEmitter, SignatureFeed) {
    let (tx, rx) = watch::channel(None);
    (SignatureEmitter { tx }, SignatureFeed { rx })
}

/// Publishing half, owned by the capture surface
#[derive(Debug)]
pub struct SignatureEmitter {
    tx: watch::Sender<Option<SignaturePayload>>,
}

impl SignatureEmitter {
    /// Publish the current payload, replacing any unread one
    pub fn emit(&self, payload: Option<SignaturePayload>) {
        let fingerprint = payload.as_ref().map(SignaturePayload::fingerprint);
        tracing::debug!(
            present = payload.is_some(),
            fingerprint = fingerprint.as_deref(),
            "signature payload emitted"
        );
        self.tx.send_replace(payload);
    }
}

/// Subscribing half, owned by the form controller
#[derive(Debug)]
pub struct SignatureFeed {
    rx: watch::Receiver<Option<SignaturePayload>>,
}

impl SignatureFeed {
    /// Latest payload if it changed since the last call
    ///
    /// Returns `Some(None)` when the surface was cleared or resized and
    /// `None` when nothing new was published.
    pub fn take_update(&mut self) -> Option<Option<SignaturePayload>> {
        // A dropped emitter reports an error; treat it as "nothing new".
        match self.rx.has_changed() {
            Ok(true) => Some(self.rx.borrow_and_update().clone()),
            _ => None,
        }
    }

    /// Latest payload regardless of whether it was already taken
    #[must_use]
    pub fn current(&self) -> Option<SignaturePayload> {
        self.rx.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_update_until_emit() {
        let (_tx, mut feed) = signature_channel();
        assert_eq!(feed.take_update(), None);
    }

    #[test]
    fn latest_value_wins() {
        let (tx, mut feed) = signature_channel();
        tx.emit(Some(SignaturePayload::from_png_bytes(b"a")));
        tx.emit(None);

        assert_eq!(feed.take_update(), Some(None));
        assert_eq!(feed.take_update(), None);
    }

    #[test]
    fn update_then_current() {
        let (tx, mut feed) = signature_channel();
        let payload = SignaturePayload::from_png_bytes(b"a");
        tx.emit(Some(payload.clone()));

        assert_eq!(feed.take_update(), Some(Some(payload.clone())));
        assert_eq!(feed.current(), Some(payload));
    }
}
