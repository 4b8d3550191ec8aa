use std::time::Duration;

use assistant::briefing::LOADING_NOTICE;
use circuit_core::{
    controls::{KNOB_MAX_VOLTS, KNOB_MIN_VOLTS, KNOB_STEP_VOLTS},
    CircuitSession, FlagState, TransferChart,
};
use crossbeam_channel::{Receiver, Sender, TryRecvError};
use egui::{Color32, RichText};
use shared::domain::Mode;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::chat_view::ChatView;
use crate::controller::events::{err_label, UiErrorContext, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::chart::paint_chart;

const ACCENT: Color32 = Color32::from_rgb(6, 182, 212);
const WARN: Color32 = Color32::from_rgb(248, 113, 113);
const MUTED: Color32 = Color32::from_rgb(100, 116, 139);
const USER_BUBBLE: Color32 = Color32::from_rgb(165, 243, 252);

pub struct SimulatorApp {
    session: CircuitSession,
    chart: TransferChart,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    status: String,
    assistant_open: bool,
    chat_input: String,
    chat: ChatView,
}

impl SimulatorApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        let session = CircuitSession::new();
        let chart = session.chart();
        Self {
            session,
            chart,
            cmd_tx,
            ui_rx,
            status: String::new(),
            assistant_open: false,
            chat_input: String::new(),
            chat: ChatView::default(),
        }
    }

    fn process_events(&mut self) {
        loop {
            let event = match self.ui_rx.try_recv() {
                Ok(event) => event,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if self.chat.is_loading() {
                        self.chat.abandon_pending();
                        self.status =
                            "Assistant worker disconnected; restart the app".to_string();
                    }
                    break;
                }
            };
            match event {
                UiEvent::Info(message) => {
                    tracing::info!("{message}");
                    self.status = message;
                }
                UiEvent::ConversationSynced(messages) => self.chat.sync(messages),
                UiEvent::Error(err) => {
                    let prefix = if err.context() == UiErrorContext::BackendStartup {
                        "Startup"
                    } else {
                        err_label(err.category())
                    };
                    self.status = format!("{prefix}: {}", err.message());
                }
            }
        }
    }

    fn send_chat(&mut self) {
        let Some(text) = self.chat.begin_send(&self.chat_input) else {
            return;
        };
        self.chat_input.clear();

        if !dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::AskAssistant { text },
            &mut self.status,
        ) {
            self.chat.abandon_pending();
        }
    }

    fn control_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Signal Generator");
        ui.add_space(8.0);

        let mut input_a = self.session.input_a().value();
        let mut input_b = self.session.input_b().value();
        let mut mode = self.session.mode();

        slider_caption(ui, "Input Voltage A (UA)", &self.session.input_a().readout());
        let a_changed = ui
            .add(
                egui::Slider::new(&mut input_a, KNOB_MIN_VOLTS..=KNOB_MAX_VOLTS)
                    .step_by(KNOB_STEP_VOLTS)
                    .show_value(false),
            )
            .changed();
        slider_caption(ui, "Input Voltage B (UB)", &self.session.input_b().readout());
        let b_changed = ui
            .add(
                egui::Slider::new(&mut input_b, KNOB_MIN_VOLTS..=KNOB_MAX_VOLTS)
                    .step_by(KNOB_STEP_VOLTS)
                    .show_value(false),
            )
            .changed();

        ui.add_space(8.0);
        ui.label("Mode Selector (CD4053)");
        ui.horizontal(|ui| {
            ui.selectable_value(&mut mode, Mode::Add, Mode::Add.label());
            ui.selectable_value(&mut mode, Mode::Sub, Mode::Sub.label());
        });
        ui.label(
            RichText::new("Simulates S1 switch control on CD4053 Pin 11")
                .small()
                .color(MUTED),
        );

        if a_changed {
            self.session.set_input_a(input_a);
        }
        if b_changed {
            self.session.set_input_b(input_b);
        }
        if mode != self.session.mode() {
            self.session.set_mode(mode);
        }
        if a_changed || mode != self.chart.mode {
            self.chart = self.session.chart();
        }
    }

    fn status_card(&self, ui: &mut egui::Ui) {
        ui.label(RichText::new("LOGIC STATUS").small().strong().color(MUTED));
        let status = self.session.status();
        egui::Grid::new("logic_status").num_columns(2).show(ui, |ui| {
            flag_cell(ui, "Carry Flag", status.carry);
            flag_cell(ui, "Borrow Flag", status.borrow);
            ui.end_row();
        });
    }

    fn circuit_readout(&self, ui: &mut egui::Ui) {
        let status = self.session.status();
        let mode = self.session.mode();
        ui.heading("Circuit");
        egui::Grid::new("circuit_readout")
            .num_columns(4)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                ui.label("UA");
                ui.monospace(&status.input_a);
                ui.label("UB");
                ui.monospace(&status.input_b);
                ui.end_row();

                let add_color = if mode == Mode::Add { ACCENT } else { MUTED };
                let sub_color = if mode == Mode::Sub { ACCENT } else { MUTED };
                ui.colored_label(add_color, "U1 U_ADD");
                ui.monospace(RichText::new(&status.sum).color(add_color));
                ui.colored_label(sub_color, "U2 U_SUB");
                ui.monospace(RichText::new(&status.difference).color(sub_color));
                ui.end_row();

                ui.label("CD4053 A (11)");
                ui.monospace(status.switch.label());
                ui.label("OUTPUT UY");
                ui.monospace(RichText::new(&status.output).color(ACCENT).strong());
                ui.end_row();

                ui.label("U3 FC");
                led(ui, status.carry);
                ui.label("U4 FB");
                led(ui, status.borrow);
                ui.end_row();
            });
    }

    fn assistant_panel(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .max_height(320.0)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for message in self.chat.messages() {
                    let (who, color) = if message.is_user() {
                        ("You", USER_BUBBLE)
                    } else {
                        ("Assistant", Color32::LIGHT_GRAY)
                    };
                    ui.label(RichText::new(who).small().color(MUTED));
                    ui.label(RichText::new(&message.text).color(color));
                    ui.add_space(6.0);
                }
                if self.chat.is_loading() {
                    ui.label(RichText::new(LOADING_NOTICE).italics().color(MUTED));
                }
            });

        ui.separator();
        let mut submit = false;
        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.chat_input)
                    .hint_text("Ask about resistors, op-amps..."),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submit = true;
            }
            if ui
                .add_enabled(!self.chat.is_loading(), egui::Button::new("Send"))
                .clicked()
            {
                submit = true;
            }
        });
        if submit {
            self.send_chat();
        }
    }
}

fn slider_caption(ui: &mut egui::Ui, label: &str, readout: &str) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.monospace(RichText::new(readout).color(ACCENT));
        });
    });
}

fn flag_cell(ui: &mut egui::Ui, label: &str, flag: FlagState) {
    ui.vertical(|ui| {
        ui.label(RichText::new(label).small().color(MUTED));
        let color = if flag.is_active() { WARN } else { MUTED };
        ui.label(RichText::new(flag.label()).monospace().strong().color(color));
    });
}

fn led(ui: &mut egui::Ui, flag: FlagState) {
    let color = if flag.is_active() { WARN } else { MUTED };
    ui.label(RichText::new("●").color(color));
}

impl eframe::App for SimulatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_events();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("InfoCup Simulator");
                ui.label(RichText::new("Analog Adder/Subtractor Design Final").color(MUTED));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label("uA741 x 4");
                    ui.label("Power: ±12V DC");
                });
            });
        });

        if !self.status.is_empty() {
            egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
                ui.label(RichText::new(&self.status).small().color(MUTED));
            });
        }

        egui::SidePanel::left("controls")
            .resizable(false)
            .default_width(300.0)
            .show(ctx, |ui| {
                self.control_panel(ui);
                ui.separator();
                self.status_card(ui);
                ui.separator();
                let label = if self.assistant_open {
                    "Hide AI Engineer"
                } else {
                    "Ask AI Engineer"
                };
                if ui.button(label).clicked() {
                    self.assistant_open = !self.assistant_open;
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.circuit_readout(ui);
            ui.separator();
            paint_chart(ui, &self.chart);
        });

        let mut open = self.assistant_open;
        egui::Window::new("Circuit Assistant")
            .open(&mut open)
            .default_width(380.0)
            .resizable(true)
            .show(ctx, |ui| self.assistant_panel(ui));
        self.assistant_open = open;

        if self.chat.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
