//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use assistant::{load_settings, CircuitAssistant, Conversation};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Assistant worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let settings = load_settings();
            if settings.api_key.is_none() {
                tracing::warn!("no API key configured; assistant replies will use the fallback text");
            }
            let assistant = match CircuitAssistant::from_settings(&settings) {
                Ok(assistant) => assistant,
                Err(err) => {
                    let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                        UiErrorContext::BackendStartup,
                        format!("assistant unavailable: {err}"),
                    )));
                    tracing::error!(error = %err, "failed to build assistant client");
                    CircuitAssistant::unavailable(err.to_string())
                }
            };
            let conversation = Arc::new(Conversation::new(assistant));
            deliver(&ui_tx, UiEvent::ConversationSynced(conversation.messages().await)).await;

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::AskAssistant { text } => {
                        let conversation = conversation.clone();
                        let ui_tx = ui_tx.clone();
                        tokio::spawn(async move {
                            if let Err(rejected) = conversation.send(&text).await {
                                deliver(
                                    &ui_tx,
                                    UiEvent::Error(UiError::from_message(
                                        UiErrorContext::General,
                                        format!("message not sent: {rejected}"),
                                    )),
                                )
                                .await;
                            }
                            deliver(&ui_tx, UiEvent::ConversationSynced(conversation.messages().await))
                                .await;
                        });
                    }
                }
            }
            tracing::info!("ui command channel closed; assistant worker exiting");
        });
    });
}

/// Blocking hand-off to the UI queue; only fails once the UI has gone away.
async fn deliver(ui_tx: &Sender<UiEvent>, event: UiEvent) {
    let ui_tx = ui_tx.clone();
    match tokio::task::spawn_blocking(move || ui_tx.send(event)).await {
        Ok(Ok(())) => {}
        Ok(Err(_)) => tracing::warn!("ui event channel closed; dropping assistant event"),
        Err(err) => tracing::error!(error = %err, "ui event delivery task failed"),
    }
}
