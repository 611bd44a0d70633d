use std::collections::HashMap;
use std::io;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::fetch::EpisodeSource;
use crate::{EngineEvent, RequestId};

enum EngineCommand {
    Fetch { request_id: RequestId, slug: String },
    Cancel { request_id: RequestId },
}

type InFlight = Arc<Mutex<HashMap<RequestId, CancellationToken>>>;

/// Runs episode-list fetches on a background runtime.
///
/// Fetches are single attempts. A cancelled fetch never produces an event.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(source: Arc<dyn EpisodeSource>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("reader-engine")
            .enable_all()
            .build()?;

        thread::spawn(move || {
            let in_flight: InFlight = Arc::default();
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::Fetch { request_id, slug } => {
                        let token = CancellationToken::new();
                        if let Ok(mut map) = in_flight.lock() {
                            map.insert(request_id, token.clone());
                        }
                        let source = source.clone();
                        let event_tx = event_tx.clone();
                        let in_flight = in_flight.clone();
                        runtime.spawn(async move {
                            run_fetch(source.as_ref(), request_id, &slug, token, event_tx).await;
                            if let Ok(mut map) = in_flight.lock() {
                                map.remove(&request_id);
                            }
                        });
                    }
                    EngineCommand::Cancel { request_id } => {
                        let token = in_flight
                            .lock()
                            .ok()
                            .and_then(|mut map| map.remove(&request_id));
                        if let Some(token) = token {
                            reader_logging::reader_debug!("Cancelling fetch {}", request_id);
                            token.cancel();
                        }
                    }
                }
            }
            runtime.shutdown_timeout(Duration::from_millis(200));
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn fetch(&self, request_id: RequestId, slug: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Fetch {
            request_id,
            slug: slug.into(),
        });
    }

    pub fn cancel(&self, request_id: RequestId) {
        let _ = self.cmd_tx.send(EngineCommand::Cancel { request_id });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn run_fetch(
    source: &dyn EpisodeSource,
    request_id: RequestId,
    slug: &str,
    token: CancellationToken,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    tokio::select! {
        _ = token.cancelled() => {
            reader_logging::reader_debug!("Fetch {} for slug={} cancelled", request_id, slug);
        }
        result = source.fetch_episodes(slug) => {
            if let Err(err) = &result {
                reader_logging::reader_warn!("Fetch {} for slug={} failed: {}", request_id, slug, err);
            }
            let _ = event_tx.send(EngineEvent::EpisodesFetched { request_id, result });
        }
    }
}
