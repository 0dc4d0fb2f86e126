use serde::{Deserialize, Serialize};
use egui::Color32;
use std::collections::HashMap;

pub const INTERPRETATION_PANEL: &str = "Interpretation";
pub const STORY_PANEL: &str = "Story";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct UiSettings {
    pub ui_scale: f32,

    // Panel → background color
    pub panel_colors: HashMap<String, [u8; 4]>,
}

impl Default for UiSettings {
    fn default() -> Self {
        let mut panel_colors = HashMap::new();

        panel_colors.insert(INTERPRETATION_PANEL.into(), [26, 18, 44, 230]);
        panel_colors.insert(STORY_PANEL.into(), [20, 14, 34, 230]);

        Self {
            ui_scale: 1.0,
            panel_colors,
        }
    }
}

impl UiSettings {
    pub const SCALE_RANGE: std::ops::RangeInclusive<f32> = 0.75..=2.0;

    pub fn color(&self, key: &str) -> Color32 {
        self.panel_colors
            .get(key)
            .map(|c| Color32::from_rgba_unmultiplied(c[0], c[1], c[2], c[3]))
            .unwrap_or(Color32::from_gray(24))
    }

    pub fn set_color(&mut self, key: &str, color: Color32) {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        self.panel_colors.insert(key.to_string(), [r, g, b, a]);
    }

    /// Keeps a hand-edited settings file from making the window unusable.
    pub fn clamped(mut self) -> Self {
        if !self.ui_scale.is_finite() {
            self.ui_scale = 1.0;
        }
        self.ui_scale = self
            .ui_scale
            .clamp(*Self::SCALE_RANGE.start(), *Self::SCALE_RANGE.end());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_round_trips_through_map() {
        let mut settings = UiSettings::default();
        let c = Color32::from_rgba_unmultiplied(10, 20, 30, 255);
        settings.set_color(STORY_PANEL, c);
        assert_eq!(settings.color(STORY_PANEL), c);
    }

    #[test]
    fn unknown_panel_gets_fallback() {
        assert_eq!(UiSettings::default().color("nope"), Color32::from_gray(24));
    }

    #[test]
    fn scale_is_clamped() {
        let s = UiSettings {
            ui_scale: 9.0,
            ..Default::default()
        };
        assert_eq!(s.clamped().ui_scale, 2.0);

        let s = UiSettings {
            ui_scale: f32::NAN,
            ..Default::default()
        };
        assert_eq!(s.clamped().ui_scale, 1.0);
    }
}
