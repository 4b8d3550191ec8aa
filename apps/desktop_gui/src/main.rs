mod backend_bridge;
mod controller;
mod ui;

use crossbeam_channel::bounded;
use eframe::egui;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::SimulatorApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("InfoCup Simulator")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([980.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "InfoCup Simulator",
        options,
        Box::new(|_cc| Ok(Box::new(SimulatorApp::new(cmd_tx, ui_rx)))),
    )
}

#[cfg(test)]
mod tests {
    use super::backend_bridge::commands::BackendCommand;
    use super::controller::chat_view::ChatView;
    use super::controller::events::{UiError, UiErrorCategory, UiErrorContext};
    use super::controller::orchestration::dispatch_backend_command;
    use assistant::briefing::{ERROR_REPLY_FALLBACK, GREETING};
    use crossbeam_channel::bounded;
    use shared::protocol::{ChatMessage, ChatRole};

    #[test]
    fn classifies_rejected_api_key_as_auth_error() {
        let err = UiError::from_message(
            UiErrorContext::General,
            "service returned status 403: API key not valid",
        );
        assert_eq!(err.category(), UiErrorCategory::Auth);
    }

    #[test]
    fn classifies_worker_disconnect_as_transport_error() {
        let err = UiError::from_message(
            UiErrorContext::General,
            "Assistant worker disconnected (possible startup/runtime failure)",
        );
        assert_eq!(err.category(), UiErrorCategory::Transport);
        assert_eq!(err.context(), UiErrorContext::General);
    }

    #[test]
    fn dispatch_reports_disconnected_worker() {
        let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(1);
        drop(cmd_rx);
        let mut status = String::new();
        let queued = dispatch_backend_command(
            &cmd_tx,
            BackendCommand::AskAssistant {
                text: "hello".into(),
            },
            &mut status,
        );
        assert!(!queued);
        assert!(status.contains("disconnected"));
    }

    #[test]
    fn dispatch_reports_full_queue() {
        let (cmd_tx, _cmd_rx) = bounded::<BackendCommand>(1);
        let mut status = String::new();
        assert!(dispatch_backend_command(
            &cmd_tx,
            BackendCommand::AskAssistant { text: "one".into() },
            &mut status,
        ));
        assert!(!dispatch_backend_command(
            &cmd_tx,
            BackendCommand::AskAssistant { text: "two".into() },
            &mut status,
        ));
        assert!(status.contains("full"));
    }

    #[test]
    fn chat_view_shows_worker_log_after_sync() {
        let mut chat = ChatView::default();
        chat.sync(vec![ChatMessage::model(GREETING)]);

        assert_eq!(chat.begin_send("What sets FC?").as_deref(), Some("What sets FC?"));
        assert!(chat.is_loading());
        assert_eq!(chat.messages().count(), 2);

        let worker_log = vec![
            ChatMessage::model(GREETING),
            ChatMessage::user("What sets FC?"),
            ChatMessage::model("U3 compares U_ADD against 5V."),
        ];
        chat.sync(worker_log.clone());
        assert!(!chat.is_loading());
        assert_eq!(chat.messages().cloned().collect::<Vec<_>>(), worker_log);
    }

    #[test]
    fn chat_view_blocks_blank_and_overlapping_sends() {
        let mut chat = ChatView::default();
        assert_eq!(chat.begin_send("   "), None);
        assert!(chat.begin_send("first").is_some());
        assert_eq!(chat.begin_send("second"), None);
        assert_eq!(chat.messages().count(), 1);
    }

    #[test]
    fn undelivered_send_unlocks_input_with_error_fallback() {
        let mut chat = ChatView::default();
        chat.sync(vec![ChatMessage::model(GREETING)]);
        chat.begin_send("hello");
        chat.abandon_pending();

        assert!(!chat.is_loading());
        let shown: Vec<_> = chat.messages().collect();
        assert_eq!(shown.len(), 3);
        assert_eq!(shown[1].role, ChatRole::User);
        assert_eq!(shown[2].text, ERROR_REPLY_FALLBACK);
        assert!(chat.begin_send("again").is_some());
    }
}
