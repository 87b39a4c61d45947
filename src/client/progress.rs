use std::sync::Arc;
use tokio::sync::watch;

/// Upload percentage (0..=100) shared between the transport that advances it
/// and whoever renders it.
#[derive(Debug, Clone)]
pub struct UploadProgress {
    tx: Arc<watch::Sender<u8>>,
}

impl Default for UploadProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadProgress {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(0);
        Self { tx: Arc::new(tx) }
    }

    pub fn percentage(&self) -> u8 {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<u8> {
        self.tx.subscribe()
    }

    /// Record `loaded` of `total` bytes sent.
    pub fn record(&self, loaded: u64, total: u64) {
        let percentage = if total == 0 {
            100
        } else {
            ((loaded as f64 / total as f64) * 100.0).round().min(100.0) as u8
        };
        self.tx.send_replace(percentage);
    }

    pub fn reset(&self) {
        self.tx.send_replace(0);
    }
}
