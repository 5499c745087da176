//! Background fetch coordination.
//!
//! Each request runs as its own tokio task and reports back through the
//! application event channel. At most one state request and one city request
//! are in flight; issuing a new city request aborts the previous one, and
//! dropping the manager aborts everything still running.

use crate::app::event::{AppEvent, RequestId};
use crate::geo::client::GeoClient;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

pub struct GeoManager {
    client: Arc<GeoClient>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    states_task: Option<JoinHandle<()>>,
    cities_task: Option<JoinHandle<()>>,
}

impl GeoManager {
    pub fn new(client: GeoClient, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            client: Arc::new(client),
            event_tx,
            states_task: None,
            cities_task: None,
        }
    }

    pub fn fetch_states(&mut self, request_id: RequestId) {
        abort(self.states_task.take());
        info!(request_id, "fetching states");

        let client = Arc::clone(&self.client);
        let tx = self.event_tx.clone();
        self.states_task = Some(tokio::spawn(async move {
            let event = match client.fetch_states().await {
                Ok(records) => {
                    debug!(request_id, count = records.len(), "states received");
                    AppEvent::StatesLoaded { request_id, records }
                }
                Err(e) => {
                    warn!(request_id, error = %e, "state fetch failed");
                    AppEvent::StatesFailed {
                        request_id,
                        error: e.short_reason(),
                    }
                }
            };
            let _ = tx.send(event);
        }));
    }

    /// Start fetching the cities of `state_code`, aborting any city request
    /// still in flight.
    pub fn fetch_cities(&mut self, request_id: RequestId, state_code: String) {
        self.cancel_cities();
        info!(request_id, %state_code, "fetching cities");

        let client = Arc::clone(&self.client);
        let tx = self.event_tx.clone();
        self.cities_task = Some(tokio::spawn(async move {
            let event = match client.fetch_cities(&state_code).await {
                Ok(records) => {
                    debug!(request_id, %state_code, count = records.len(), "cities received");
                    AppEvent::CitiesLoaded {
                        request_id,
                        state_code,
                        records,
                    }
                }
                Err(e) => {
                    warn!(request_id, %state_code, error = %e, "city fetch failed");
                    AppEvent::CitiesFailed {
                        request_id,
                        state_code,
                        error: e.short_reason(),
                    }
                }
            };
            let _ = tx.send(event);
        }));
    }

    pub fn cancel_cities(&mut self) {
        if let Some(handle) = self.cities_task.take() {
            if !handle.is_finished() {
                debug!("aborting superseded city fetch");
            }
            handle.abort();
        }
    }

    pub fn shutdown(&mut self) {
        abort(self.states_task.take());
        abort(self.cities_task.take());
    }
}

impl Drop for GeoManager {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn abort(handle: Option<JoinHandle<()>>) {
    if let Some(handle) = handle {
        handle.abort();
    }
}
