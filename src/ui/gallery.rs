use bevy_egui::egui;

use crate::content::{GallerySlot, GALLERY_CARDS, GALLERY_FOLDER_URL, GALLERY_PILLS};
use crate::imaging::get_or_load;
use crate::state::AppState;
use crate::ui::widgets::{open_external, scaled_font, scaled_margin, section_header};

pub fn render_gallery(ui: &mut egui::Ui, state: &mut AppState) {
    let ui_scale = state.config.ui_scale;

    ui.add_space(scaled_margin(36.0, ui_scale));
    section_header(
        ui,
        "GitHub Work",
        "Git Hub Portfolio",
        "A file-style showcase that groups my live projects with direct links.",
        ui_scale,
    );
    ui.add_space(scaled_margin(10.0, ui_scale));

    ui.horizontal_wrapped(|ui| {
        ui.add_space(ui.available_width() * 0.2);
        for pill in GALLERY_PILLS {
            ui.label(
                egui::RichText::new(pill)
                    .size(scaled_font(11.0, ui_scale))
                    .color(egui::Color32::from_gray(150))
                    .background_color(egui::Color32::from_rgb(30, 26, 46)),
            );
        }
    });
    ui.add_space(scaled_margin(16.0, ui_scale));

    let width = ui.available_width();
    let (scene_rect, _) =
        ui.allocate_exact_size(egui::vec2(width, 560.0), egui::Sense::hover());

    for card in &GALLERY_CARDS {
        let center = slot_anchor(card.slot, scene_rect);
        let size = match card.slot {
            GallerySlot::Center => egui::vec2(280.0, 220.0),
            _ => egui::vec2(230.0, 180.0),
        };
        let rect = egui::Rect::from_center_size(center, size);
        let response = ui.interact(rect, ui.id().with(card.id), egui::Sense::click());

        let painter = ui.painter_at(rect.expand(2.0));
        painter.rect_filled(rect, 12.0, egui::Color32::from_rgb(26, 23, 38));
        if response.hovered() {
            painter.rect_stroke(rect, 12.0, egui::Stroke::new(2.0, egui::Color32::from_rgb(255, 125, 63)));
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }

        let inner = rect.shrink(scaled_margin(12.0, ui_scale));
        painter.text(
            inner.left_top(),
            egui::Align2::LEFT_TOP,
            card.tag,
            egui::FontId::proportional(scaled_font(11.0, ui_scale)),
            egui::Color32::from_rgb(255, 171, 107),
        );

        let media_rect = egui::Rect::from_min_size(
            inner.left_top() + egui::vec2(0.0, scaled_margin(20.0, ui_scale)),
            egui::vec2(inner.width(), inner.height() * 0.6),
        );
        let texture = get_or_load(
            ui.ctx(),
            &mut state.texture_cache,
            &mut state.failed_assets,
            card.image,
        );
        match texture {
            Some(texture) => {
                let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                painter.image(texture.id(), media_rect, uv, egui::Color32::WHITE);
            }
            None => {
                painter.rect_filled(media_rect, 6.0, egui::Color32::from_rgb(40, 35, 58));
            }
        }

        painter.text(
            inner.left_bottom(),
            egui::Align2::LEFT_BOTTOM,
            card.title,
            egui::FontId::proportional(scaled_font(14.0, ui_scale)),
            egui::Color32::WHITE,
        );

        if response.clicked() {
            open_external(ui.ctx(), card.url, true);
        }
    }

    ui.vertical_centered(|ui| {
        if ui
            .button(egui::RichText::new("📁 Open all projects").size(scaled_font(14.0, ui_scale)))
            .on_hover_text(GALLERY_FOLDER_URL)
            .clicked()
        {
            open_external(ui.ctx(), GALLERY_FOLDER_URL, true);
        }
    });
    ui.add_space(scaled_margin(48.0, ui_scale));
}

fn slot_anchor(slot: GallerySlot, scene: egui::Rect) -> egui::Pos2 {
    let at = |fx: f32, fy: f32| {
        egui::pos2(
            scene.left() + scene.width() * fx,
            scene.top() + scene.height() * fy,
        )
    };
    match slot {
        GallerySlot::Center => at(0.5, 0.42),
        GallerySlot::LeftTop => at(0.2, 0.22),
        GallerySlot::RightTop => at(0.8, 0.22),
        GallerySlot::Bottom => at(0.5, 0.8),
    }
}
