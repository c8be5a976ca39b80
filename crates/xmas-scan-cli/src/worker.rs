//! Background worker thread hosting the async scan
//!
//! The UI loop is synchronous, so the scan runs on a current-thread tokio
//! runtime owned by this worker. Scan requests arrive over a tokio channel;
//! each one spawns `scan_all` as a task so the worker keeps accepting
//! requests (and the scanner can reject overlapping ones) while a scan runs.

use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::app::{AppMessage, Scanner, WorkerMessage};

/// Background worker for running scans
pub struct Worker {
    handle: Option<JoinHandle<()>>,
    tx: UnboundedSender<WorkerMessage>,
}

impl Worker {
    /// Spawn a new worker thread driving `scanner`
    pub fn spawn(app_tx: Sender<AppMessage>, scanner: Arc<Scanner>) -> Self {
        let (worker_tx, worker_rx) = mpsc::unbounded_channel::<WorkerMessage>();

        let handle = thread::spawn(move || {
            run_worker(worker_rx, app_tx, scanner);
        });

        Self {
            handle: Some(handle),
            tx: worker_tx,
        }
    }

    /// Get a sender for sending messages to the worker
    pub fn sender(&self) -> UnboundedSender<WorkerMessage> {
        self.tx.clone()
    }

    /// Shutdown the worker and wait for it to finish.
    ///
    /// A scan still in progress is dropped with the runtime.
    pub fn shutdown(mut self) {
        let _ = self.tx.send(WorkerMessage::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn run_worker(
    rx: UnboundedReceiver<WorkerMessage>,
    app_tx: Sender<AppMessage>,
    scanner: Arc<Scanner>,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("failed to start scan runtime: {}", e);
            let _ = app_tx.send(AppMessage::Error(format!("Scan runtime error: {}", e)));
            return;
        }
    };

    runtime.block_on(worker_loop(rx, app_tx, scanner));
}

async fn worker_loop(
    mut rx: UnboundedReceiver<WorkerMessage>,
    app_tx: Sender<AppMessage>,
    scanner: Arc<Scanner>,
) {
    while let Some(message) = rx.recv().await {
        match message {
            WorkerMessage::StartScan => handle_scan(&app_tx, &scanner),
            WorkerMessage::Shutdown => break,
        }
    }
}

fn handle_scan(app_tx: &Sender<AppMessage>, scanner: &Arc<Scanner>) {
    let scanner = Arc::clone(scanner);
    let app_tx = app_tx.clone();

    tokio::spawn(async move {
        let outcome = scanner.scan_all().await;
        let _ = app_tx.send(AppMessage::ScanFinished(outcome));
    });
}
