use eframe::egui;

use crate::engine::actions::Action;
use crate::model::tone::Tone;
use crate::ui::app::{DreamWalkerApp, Status, StatusLevel};
use crate::ui::results_panel::draw_results;

pub fn draw_center_panel(ctx: &egui::Context, app: &mut DreamWalkerApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            // ---------- Dream input ----------
            ui.label("Describe your dream");
            ui.add(
                egui::TextEdit::multiline(&mut app.ui.dream_text)
                    .hint_text("I was flying over a city made of glass...")
                    .desired_rows(8)
                    .desired_width(f32::INFINITY),
            );

            ui.add_space(6.0);
            draw_tone_selector(ui, &mut app.ui.tone);
            ui.add_space(6.0);

            // ---------- Actions ----------
            let idle = app.ui.pending.is_none();
            let mut requested = None;

            ui.columns(3, |cols| {
                if cols[0]
                    .add_enabled(idle, egui::Button::new("✨ Interpret & Weave"))
                    .clicked()
                {
                    requested = Some(Action::Generate {
                        dream_text: app.ui.dream_text.clone(),
                        tone: app.ui.tone,
                    });
                }
                if cols[1]
                    .add_enabled(idle, egui::Button::new("🪄 Continue the Dream"))
                    .clicked()
                {
                    requested = Some(Action::Continue { tone: app.ui.tone });
                }
                if cols[2]
                    .add_enabled(idle, egui::Button::new("🎨 Restyle Story"))
                    .clicked()
                {
                    requested = Some(Action::Restyle { tone: app.ui.tone });
                }
            });

            if let Some(action) = requested {
                app.submit(action);
            }

            if let Some(kind) = app.ui.pending {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(kind.progress_text());
                });
            }

            if let Some(status) = &app.ui.status {
                draw_status(ui, status);
            }

            ui.separator();

            // ---------- Results ----------
            let saved = draw_results(ui, &app.ui.session, &app.ui.settings);
            if let Some(status) = saved {
                app.ui.status = Some(status);
            }
        });
    });
}

fn draw_tone_selector(ui: &mut egui::Ui, tone: &mut Option<Tone>) {
    ui.horizontal(|ui| {
        ui.label("Story tone (optional)");

        let selected = tone.map(|t| t.label()).unwrap_or("");
        egui::ComboBox::from_id_salt("story_tone")
            .selected_text(selected)
            .show_ui(ui, |ui| {
                ui.selectable_value(tone, None, "");
                for t in Tone::ALL {
                    ui.selectable_value(tone, Some(t), t.label());
                }
            });
    });
}

fn draw_status(ui: &mut egui::Ui, status: &Status) {
    let color = match status.level {
        StatusLevel::Info => egui::Color32::LIGHT_GREEN,
        StatusLevel::Warning => egui::Color32::YELLOW,
        StatusLevel::Error => egui::Color32::LIGHT_RED,
    };
    ui.colored_label(color, &status.text);
}
