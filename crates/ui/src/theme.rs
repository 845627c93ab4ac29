//! Dashboard look: egui's dark visuals recoloured around a sustainability
//! green, with report-style text sizes.

use bevy_egui::{egui, EguiContexts};

const SLATE: egui::Color32 = egui::Color32::from_rgb(27, 31, 38);
const SLATE_RAISED: egui::Color32 = egui::Color32::from_rgb(40, 46, 56);
const SLATE_SUNKEN: egui::Color32 = egui::Color32::from_rgb(19, 22, 27);
const LEAF: egui::Color32 = egui::Color32::from_rgb(76, 168, 110);
const MOSS: egui::Color32 = egui::Color32::from_rgb(52, 96, 72);

pub fn apply_dashboard_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    ctx.set_visuals(dashboard_visuals());
    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.window_margin = egui::Margin::same(10);
        for (text_style, size) in text_sizes() {
            style
                .text_styles
                .insert(text_style, egui::FontId::proportional(size));
        }
    });
}

pub(crate) fn dashboard_visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::dark();
    visuals.window_fill = SLATE;
    visuals.panel_fill = SLATE;
    visuals.extreme_bg_color = SLATE_SUNKEN;
    visuals.faint_bg_color = SLATE_RAISED;
    visuals.hyperlink_color = LEAF;
    visuals.window_stroke = egui::Stroke::new(1.0, MOSS);
    visuals.selection.bg_fill = MOSS;
    visuals.selection.stroke = egui::Stroke::new(1.0, LEAF);

    // Square-ish controls; charts carry the visual weight.
    visuals.window_corner_radius = egui::CornerRadius::same(4);
    let widgets = &mut visuals.widgets;
    widgets.inactive.weak_bg_fill = SLATE_RAISED;
    widgets.hovered.weak_bg_fill = MOSS;
    widgets.hovered.bg_stroke = egui::Stroke::new(1.0, LEAF);
    widgets.active.weak_bg_fill = LEAF;
    for state in [
        &mut widgets.noninteractive,
        &mut widgets.inactive,
        &mut widgets.hovered,
        &mut widgets.active,
        &mut widgets.open,
    ] {
        state.corner_radius = egui::CornerRadius::same(2);
    }
    visuals
}

fn text_sizes() -> [(egui::TextStyle, f32); 4] {
    [
        (egui::TextStyle::Heading, 17.0),
        (egui::TextStyle::Body, 13.5),
        (egui::TextStyle::Button, 13.5),
        (egui::TextStyle::Small, 10.5),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visuals_stay_dark_with_green_selection() {
        let visuals = dashboard_visuals();
        assert!(visuals.dark_mode);
        assert_eq!(visuals.selection.bg_fill, MOSS);
        assert_eq!(visuals.window_fill, SLATE);
        assert_eq!(visuals.widgets.open.corner_radius, egui::CornerRadius::same(2));
    }

    #[test]
    fn test_heading_larger_than_body() {
        let sizes = text_sizes();
        let size = |style: egui::TextStyle| {
            sizes
                .iter()
                .find(|(s, _)| *s == style)
                .map(|(_, size)| *size)
                .unwrap_or(0.0)
        };
        assert!(size(egui::TextStyle::Heading) > size(egui::TextStyle::Body));
        assert!(size(egui::TextStyle::Small) < size(egui::TextStyle::Body));
    }
}
