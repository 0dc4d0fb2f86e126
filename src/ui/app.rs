use eframe::egui;
use std::sync::mpsc::{self, TryRecvError};
use std::time::Duration;

use crate::engine::actions::{Action, ActionKind, Notice};
use crate::engine::engine::Engine;
use crate::engine::llm_client::TextGenerator;
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::model::session::SessionResult;
use crate::model::tone::Tone;
use crate::ui::center_panel::draw_center_panel;
use crate::ui::settings::UiSettings;
use crate::ui::settings_io::{load_settings, save_settings};

/* =========================
   Status line
   ========================= */

const ENGINE_STOPPED: &str = "❌ The generation engine stopped. Restart DreamWalker.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub level: StatusLevel,
    pub text: String,
}

impl Status {
    pub fn info(text: impl Into<String>) -> Self {
        Self { level: StatusLevel::Info, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { level: StatusLevel::Error, text: text.into() }
    }
}

impl From<Notice> for Status {
    fn from(notice: Notice) -> Self {
        match notice {
            Notice::Warning(e) => Self {
                level: StatusLevel::Warning,
                text: e.to_string(),
            },
            Notice::Error(e) => Self::error(format!("❌ Generation failed: {e}")),
        }
    }
}

/* =========================
   UI State
   ========================= */

#[derive(Default)]
pub struct UiState {
    pub dream_text: String,
    pub tone: Option<Tone>,

    /// Last session the engine reported.
    pub session: SessionResult,

    pub pending: Option<ActionKind>,
    pub status: Option<Status>,

    pub settings: UiSettings,
    pub show_settings: bool,
}

/* =========================
   App
   ========================= */

pub struct DreamWalkerApp {
    pub(crate) ui: UiState,

    cmd_tx: mpsc::Sender<EngineCommand>,
    resp_rx: mpsc::Receiver<EngineResponse>,
}

impl DreamWalkerApp {
    pub fn new(generator: Box<dyn TextGenerator>) -> Self {
        let (cmd_tx, resp_rx, _handle) = Engine::spawn(generator);
        Self::with_channels(cmd_tx, resp_rx, load_settings())
    }

    fn with_channels(
        cmd_tx: mpsc::Sender<EngineCommand>,
        resp_rx: mpsc::Receiver<EngineResponse>,
        settings: UiSettings,
    ) -> Self {
        Self {
            ui: UiState {
                settings,
                ..Default::default()
            },
            cmd_tx,
            resp_rx,
        }
    }

    pub(crate) fn submit(&mut self, action: Action) {
        if self.ui.pending.is_some() {
            return;
        }

        let kind = action.kind();
        match self.cmd_tx.send(EngineCommand::Run(action)) {
            Ok(()) => {
                self.ui.pending = Some(kind);
                self.ui.status = None;
            }
            Err(_) => {
                tracing::error!("engine thread is gone, dropping {kind:?}");
                self.ui.status = Some(Status::error(ENGINE_STOPPED));
            }
        }
    }

    fn poll_engine(&mut self) {
        loop {
            match self.resp_rx.try_recv() {
                Ok(EngineResponse::ActionStarted(kind)) => {
                    self.ui.pending = Some(kind);
                }
                Ok(EngineResponse::ActionFinished { session, notice }) => {
                    self.ui.session = session;
                    self.ui.status = notice.map(Status::from);
                    self.ui.pending = None;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if let Some(kind) = self.ui.pending.take() {
                        tracing::error!("engine thread stopped while running {kind:?}");
                        self.ui.status = Some(Status::error(ENGINE_STOPPED));
                    }
                    break;
                }
            }
        }
    }
}

/* =========================
   egui App
   ========================= */

impl eframe::App for DreamWalkerApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        ctx.set_pixels_per_point(self.ui.settings.ui_scale);

        self.poll_engine();

        egui::TopBottomPanel::top("hero").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("🌙 DreamWalker");
                ui.label("Turn your dreams into cinematic stories — woven by AI, interpreted by psychology.");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("⚙ Settings").clicked() {
                        self.ui.show_settings = !self.ui.show_settings;
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.small("Built with egui + Gemini • Your dreams are never stored or shared.");
            });
        });

        draw_center_panel(ctx, self);
        draw_settings_window(ctx, &mut self.ui);

        // The engine can't wake the UI, so keep polling while it works.
        if self.ui.pending.is_some() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

fn draw_settings_window(ctx: &egui::Context, state: &mut UiState) {
    let mut open = state.show_settings;

    egui::Window::new("Settings")
        .open(&mut open)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label("UI Scale");
            ui.add(egui::Slider::new(
                &mut state.settings.ui_scale,
                UiSettings::SCALE_RANGE,
            ));

            ui.separator();

            for key in [
                crate::ui::settings::INTERPRETATION_PANEL,
                crate::ui::settings::STORY_PANEL,
            ] {
                ui.horizontal(|ui| {
                    let mut color = state.settings.color(key);
                    if egui::color_picker::color_edit_button_srgba(
                        ui,
                        &mut color,
                        egui::color_picker::Alpha::OnlyBlend,
                    )
                    .changed()
                    {
                        state.settings.set_color(key, color);
                    }
                    ui.label(format!("{key} panel"));
                });
            }

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    save_settings(&state.settings);
                }
                if ui.button("Reset").clicked() {
                    state.settings = UiSettings::default();
                }
            });
        });

    state.show_settings = open;
}
