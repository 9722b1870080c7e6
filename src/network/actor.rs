//! Network actor - runs syncs in the Tokio async runtime

use std::time::Instant;

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::table::Connection;

/// Network actor that executes sync commands against the connection
pub struct NetworkActor {
    connection: Connection,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_syncs: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(connection: Connection, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            connection,
            response_tx,
            active_syncs: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::Sync { id, request }) => {
                            let response_tx = self.response_tx.clone();
                            let connection = self.connection.clone();

                            self.active_syncs.spawn(async move {
                                tracing::info!(id, table = %request.config.table_name, push = request.push.len(), "Starting sync");
                                let start = Instant::now();
                                let result = connection.sync(&request).await;
                                let time_ms = start.elapsed().as_millis() as u64;

                                let response = match result {
                                    Ok(rows) => {
                                        tracing::info!(id, rows = rows.len(), time_ms, "Sync completed");
                                        NetworkResponse::Synced { id, rows, time_ms }
                                    }
                                    Err(e) => {
                                        tracing::warn!(id, error = %e, time_ms, "Sync failed");
                                        NetworkResponse::SyncFailed { id, message: e.to_string(), time_ms }
                                    }
                                };
                                let _ = response_tx.send(response);
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => {
                            self.active_syncs.abort_all();
                            break;
                        }
                    }
                }

                // Reap finished sync tasks
                Some(_result) = self.active_syncs.join_next() => {}
            }
        }
    }
}
