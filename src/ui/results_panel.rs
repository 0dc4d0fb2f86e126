use eframe::egui;

use crate::model::download::StoryDownload;
use crate::model::session::SessionResult;
use crate::ui::app::Status;
use crate::ui::settings::{UiSettings, INTERPRETATION_PANEL, STORY_PANEL};

/// Draws both output panels side by side.
/// Returns a status when the user tried to save the story.
pub fn draw_results(
    ui: &mut egui::Ui,
    session: &SessionResult,
    settings: &UiSettings,
) -> Option<Status> {
    let mut status = None;

    ui.columns(2, |cols| {
        let left = &mut cols[0];
        left.heading("🧠 Psychological Interpretation");
        if session.interpretation.is_empty() {
            left.weak("Your dream interpretation will appear here.");
        } else {
            panel(left, settings.color(INTERPRETATION_PANEL), &session.interpretation);
        }

        let right = &mut cols[1];
        right.heading("📖 Cinematic Story");
        match session.download() {
            Some(download) => {
                panel(right, settings.color(STORY_PANEL), &session.story);
                right.add_space(6.0);
                if right.button("📥 Download Story (.txt)").clicked() {
                    status = save_story(&download);
                }
            }
            None => {
                right.weak("Your story will appear here.");
            }
        }
    });

    status
}

fn panel(ui: &mut egui::Ui, fill: egui::Color32, text: &str) {
    egui::Frame::new()
        .fill(fill)
        .stroke(egui::Stroke::new(
            1.0,
            egui::Color32::from_rgba_unmultiplied(154, 107, 255, 90),
        ))
        .corner_radius(14u8)
        .inner_margin(egui::Margin::symmetric(18, 16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(text).color(egui::Color32::from_rgb(239, 234, 255)));
        });
}

/// `None` when the dialog was cancelled.
fn save_story(download: &StoryDownload) -> Option<Status> {
    let (label, extension) = download.file_filter();
    let path = rfd::FileDialog::new()
        .set_file_name(download.file_name)
        .add_filter(label, &[extension])
        .save_file()?;

    match download.write_to(&path) {
        Ok(()) => {
            tracing::info!(bytes = download.bytes.len(), "story saved to {}", path.display());
            Some(Status::info(format!("Story saved to {}", path.display())))
        }
        Err(e) => {
            tracing::error!("could not save story to {}: {e}", path.display());
            Some(Status::error(format!("❌ Could not save the story: {e}")))
        }
    }
}
