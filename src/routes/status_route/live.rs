use axum::{
    extract::{
        Query, State, WebSocketUpgrade,
        ws::{Message, WebSocket},
    },
    response::Response,
};
use futures::{SinkExt, StreamExt};
use serde::Deserialize;
use tokio::sync::mpsc;
use tracing::info;

use crate::state::AppState;

#[derive(Deserialize, Debug)]
pub struct LiveParams {
    pub organization_id: String,
}

/// Long-lived update stream. Subscribers receive opaque `update` frames
/// whenever their organization's activity changes and are expected to
/// re-fetch; the frames carry no entity data.
pub async fn live_updates(
    State(state): State<AppState>,
    Query(params): Query<LiveParams>,
    ws: WebSocketUpgrade,
) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state, params.organization_id))
}

async fn handle_socket(socket: WebSocket, state: AppState, organization_id: String) {
    let (tx, mut rx) = mpsc::unbounded_channel::<Message>();
    let connection_id = state.registry.connect(&organization_id, tx);
    info!(%organization_id, %connection_id, "live subscriber connected");

    let (mut sender, mut receiver) = socket.split();
    loop {
        tokio::select! {
            outbound = rx.recv() => {
                match outbound {
                    Some(message) => {
                        if sender.send(message).await.is_err() {
                            break;
                        }
                    }
                    None => break,
                }
            }
            inbound = receiver.next() => {
                match inbound {
                    // inbound client frames carry nothing we act on
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    Some(Ok(_)) => {}
                }
            }
        }
    }

    state.registry.disconnect(connection_id);
    info!(%organization_id, %connection_id, "live subscriber disconnected");
}
