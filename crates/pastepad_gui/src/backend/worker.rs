//! Background worker thread for HTTP access to the paste server.

use crate::backend::{ClientCmd, ClientEvent};
use crossbeam_channel::{unbounded, Receiver, Sender};
use pastepad_core::models::CreateDocumentRequest;
use pastepad_core::{ApiClient, ClientError};
use std::thread;
use tracing::warn;

/// Channel pair owned by the UI thread. Dropping it shuts the worker down.
pub struct BackendHandle {
    pub cmd_tx: Sender<ClientCmd>,
    pub evt_rx: Receiver<ClientEvent>,
}

/// Spawn the worker thread owning the blocking API client.
pub fn spawn_backend(client: ApiClient) -> BackendHandle {
    let (cmd_tx, cmd_rx) = unbounded();
    let (evt_tx, evt_rx) = unbounded();

    thread::Builder::new()
        .name("pastepad-backend".to_string())
        .spawn(move || {
            for cmd in cmd_rx.iter() {
                if evt_tx.send(handle_command(&client, cmd)).is_err() {
                    break;
                }
            }
        })
        .expect("spawn backend thread");

    BackendHandle { cmd_tx, evt_rx }
}

fn handle_command(client: &ApiClient, cmd: ClientCmd) -> ClientEvent {
    match cmd {
        ClientCmd::Save { content } => {
            let request = CreateDocumentRequest::from_content(content);
            match client.create_document(&request) {
                Ok(document) => ClientEvent::Saved { document },
                Err(err) => {
                    warn!("save failed: {}", err);
                    ClientEvent::SaveFailed {
                        message: err.user_message(),
                    }
                }
            }
        }
        ClientCmd::Load { path } => match client.get_document(&path) {
            Ok(document) => ClientEvent::Loaded { path, document },
            Err(ClientError::RateLimited(message)) => {
                warn!("load rate limited: {}", message);
                ClientEvent::LoadRateLimited { message }
            }
            Err(err) => {
                warn!("load failed for {}: {}", path, err);
                ClientEvent::LoadFailed { path }
            }
        },
    }
}
