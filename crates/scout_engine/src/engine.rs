use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use scout_logging::{scout_error, scout_info};

use crate::client::{ClientSettings, ReqwestScrapeClient, ScrapeClient};
use crate::{EngineEvent, RequestId, ScrapeError};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("scrape client setup failed: {0}")]
    Client(#[from] ScrapeError),
    #[error("async runtime could not start: {0}")]
    Runtime(#[from] std::io::Error),
}

enum EngineCommand {
    Scrape {
        request_id: RequestId,
        page_url: String,
    },
}

/// Runs scrape calls on a background runtime and reports completions.
///
/// Dropping the handle stops the worker thread; calls still in flight are abandoned.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Mutex<mpsc::Receiver<EngineEvent>>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings) -> Result<Self, EngineError> {
        let client = ReqwestScrapeClient::new(settings)?;
        scout_info!("Scrape endpoint: {}", client.endpoint());
        Self::with_client(Arc::new(client))
    }

    pub fn with_client(client: Arc<dyn ScrapeClient>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self {
            cmd_tx,
            event_rx: Mutex::new(event_rx),
        })
    }

    pub fn submit(&self, request_id: RequestId, page_url: impl Into<String>) {
        let command = EngineCommand::Scrape {
            request_id,
            page_url: page_url.into(),
        };
        if self.cmd_tx.send(command).is_err() {
            scout_error!("Engine worker is gone; request {} dropped", request_id);
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    client: &dyn ScrapeClient,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Scrape {
            request_id,
            page_url,
        } => {
            let result = client.scrape(&page_url).await;
            let _ = event_tx.send(EngineEvent::ScrapeCompleted { request_id, result });
        }
    }
}
