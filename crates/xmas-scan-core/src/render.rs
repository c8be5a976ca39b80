//! Render synchronization
//!
//! The scanner publishes each visual state change and then waits on a
//! [`RenderSync`] before it continues, so a renderer observes every step of
//! the scan. This is independent of the timed pacing sleeps.

use std::future::Future;

use tokio::sync::{mpsc, oneshot};

/// Suspension point that resumes once the presentation layer has caught up.
pub trait RenderSync: Send + Sync {
    /// Wait for the next paint boundary.
    fn next_frame(&self) -> impl Future<Output = ()> + Send;
}

/// Headless render sync: yields to the scheduler once and resumes.
#[derive(Debug, Clone, Copy, Default)]
pub struct YieldNow;

impl RenderSync for YieldNow {
    async fn next_frame(&self) {
        tokio::task::yield_now().await;
    }
}

/// Request from the scanner for one frame to be drawn.
///
/// The renderer acknowledges after drawing by calling [`FrameRequest::ack`].
/// Dropping the request unacknowledged also releases the scanner.
#[derive(Debug)]
pub struct FrameRequest {
    ack: oneshot::Sender<()>,
}

impl FrameRequest {
    pub fn ack(self) {
        let _ = self.ack.send(());
    }
}

/// Render sync that hands a [`FrameRequest`] to a UI loop and waits for it.
#[derive(Debug, Clone)]
pub struct FrameChannel {
    tx: mpsc::UnboundedSender<FrameRequest>,
}

impl FrameChannel {
    /// Create the channel; the receiver belongs to the renderer.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<FrameRequest>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl RenderSync for FrameChannel {
    async fn next_frame(&self) {
        let (ack, done) = oneshot::channel();
        if self.tx.send(FrameRequest { ack }).is_err() {
            // Renderer is gone, nothing to wait for.
            return;
        }
        let _ = done.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_frame_channel_waits_for_ack() {
        let (sync, mut rx) = FrameChannel::new();
        let renderer = tokio::spawn(async move {
            let mut drawn = 0;
            while let Some(request) = rx.recv().await {
                drawn += 1;
                request.ack();
            }
            drawn
        });

        sync.next_frame().await;
        sync.next_frame().await;
        drop(sync);

        assert_eq!(renderer.await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_frame_channel_without_renderer_returns() {
        let (sync, rx) = FrameChannel::new();
        drop(rx);
        sync.next_frame().await;
    }

    #[tokio::test]
    async fn test_dropped_request_releases_scanner() {
        let (sync, mut rx) = FrameChannel::new();
        tokio::spawn(async move {
            let request = rx.recv().await;
            drop(request);
        });
        sync.next_frame().await;
    }
}
