use bevy_egui::egui;

use crate::content::{CV_FILE, HERO_KICKER, HERO_PHONE, HERO_SUBTITLE, HERO_TITLE, SOCIAL_LINKS};
use crate::imaging::get_or_load;
use crate::state::AppState;
use crate::ui::widgets::{open_external, scaled_font, scaled_margin};

/// How far (in points) the background blobs drift at full parallax.
const BLOB_DRIFT: f32 = 26.0;
const PORTRAIT_DRIFT: f32 = 10.0;

pub fn render_hero(ui: &mut egui::Ui, state: &mut AppState) {
    let ui_scale = state.config.ui_scale;
    let width = ui.available_width();
    let height = (ui.ctx().screen_rect().height() * 0.82).max(420.0);

    let (rect, response) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
    let painter = ui.painter_at(rect);

    // Pointer-parallax target: pointer position over the section mapped to
    // [-1, 1] per axis; leaving the section eases back to the origin.
    // Touch-like pointers get no parallax, same as coarse-pointer devices
    // in the original.
    let touch_like = ui.input(|i| i.any_touches());
    if touch_like {
        state.parallax.release();
    } else if let Some(pos) = response.hover_pos() {
        let relative_x = (pos.x - rect.left()) / rect.width();
        let relative_y = (pos.y - rect.top()) / rect.height();
        state.parallax.retarget((relative_x - 0.5) * 2.0, (relative_y - 0.5) * 2.0);
    } else {
        state.parallax.release();
    }
    let (par_x, par_y) = state.parallax.offset();

    // Backdrop with two drifting color blobs.
    painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(14, 12, 22));
    painter.circle_filled(
        rect.left_top() + egui::vec2(rect.width() * 0.22 + par_x * BLOB_DRIFT, rect.height() * 0.3 + par_y * BLOB_DRIFT),
        rect.width() * 0.18,
        egui::Color32::from_rgba_unmultiplied(255, 125, 63, 26),
    );
    painter.circle_filled(
        rect.left_top() + egui::vec2(rect.width() * 0.78 - par_x * BLOB_DRIFT, rect.height() * 0.62 - par_y * BLOB_DRIFT),
        rect.width() * 0.22,
        egui::Color32::from_rgba_unmultiplied(110, 84, 255, 22),
    );

    // Two columns: copy on the left, portrait stage on the right.
    let margin = scaled_margin(48.0, ui_scale);
    let copy_rect = egui::Rect::from_min_max(
        rect.left_top() + egui::vec2(margin, rect.height() * 0.18),
        egui::pos2(rect.left() + rect.width() * 0.56, rect.bottom() - margin),
    );
    let stage_rect = egui::Rect::from_min_max(
        egui::pos2(rect.left() + rect.width() * 0.6, rect.top() + rect.height() * 0.12),
        rect.right_bottom() - egui::vec2(margin, rect.height() * 0.1),
    );

    render_copy(ui, state, copy_rect, ui_scale);
    render_portrait(ui, state, stage_rect, (par_x, par_y));
}

fn render_copy(ui: &mut egui::Ui, state: &mut AppState, rect: egui::Rect, ui_scale: f32) {
    let ctx = ui.ctx().clone();
    let mut copy_ui = ui.new_child(egui::UiBuilder::new().max_rect(rect).layout(egui::Layout::top_down(egui::Align::Min)));
    let copy_ui = &mut copy_ui;

    copy_ui.label(
        egui::RichText::new(HERO_KICKER)
            .size(scaled_font(14.0, ui_scale))
            .color(egui::Color32::from_rgb(255, 171, 107))
            .strong(),
    );
    copy_ui.add_space(scaled_margin(10.0, ui_scale));
    copy_ui.label(
        egui::RichText::new(HERO_TITLE)
            .size(scaled_font(34.0, ui_scale))
            .color(egui::Color32::WHITE)
            .strong(),
    );
    copy_ui.add_space(scaled_margin(10.0, ui_scale));
    copy_ui.label(
        egui::RichText::new(HERO_SUBTITLE)
            .size(scaled_font(16.0, ui_scale))
            .color(egui::Color32::from_gray(190)),
    );

    copy_ui.add_space(scaled_margin(18.0, ui_scale));
    copy_ui.horizontal(|ui| {
        if ui
            .button(egui::RichText::new("Download My CV").size(scaled_font(15.0, ui_scale)))
            .clicked()
        {
            // The CV ships with the app; hand it to the OS like any other
            // external resource.
            open_external(&ctx, CV_FILE, false);
            state.set_status(format!("Opening {}", CV_FILE));
        }
        if ui
            .button(egui::RichText::new("Contact Me").size(scaled_font(15.0, ui_scale)))
            .clicked()
        {
            open_external(&ctx, HERO_PHONE, false);
        }
    });

    copy_ui.add_space(scaled_margin(16.0, ui_scale));
    copy_ui.horizontal(|ui| {
        for social in &SOCIAL_LINKS {
            let label = if social.glyph.is_empty() {
                social.label.to_string()
            } else {
                format!("{} {}", social.glyph, social.label)
            };
            if ui
                .button(egui::RichText::new(label).size(scaled_font(13.0, ui_scale)))
                .on_hover_text(social.url)
                .clicked()
            {
                open_external(&ctx, social.url, social.new_tab);
            }
        }
    });
}

fn render_portrait(ui: &mut egui::Ui, state: &mut AppState, rect: egui::Rect, parallax: (f32, f32)) {
    let painter = ui.painter_at(rect);
    let drift = egui::vec2(-parallax.0 * PORTRAIT_DRIFT, -parallax.1 * PORTRAIT_DRIFT);
    let stage = rect.translate(drift);

    painter.rect_filled(stage, 18.0, egui::Color32::from_rgb(24, 20, 36));

    let texture = state.portrait_source().and_then(|path| {
        let texture = get_or_load(
            ui.ctx(),
            &mut state.texture_cache,
            &mut state.failed_assets,
            path,
        );
        if texture.is_none() {
            // Primary failed: swap to the fallback exactly once. A failing
            // fallback leaves the painted placeholder below.
            state.note_portrait_failure();
        }
        texture
    });

    match texture {
        Some(texture) => {
            let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            painter.image(texture.id(), stage.shrink(8.0), uv, egui::Color32::WHITE);
        }
        None => {
            painter.text(
                stage.center(),
                egui::Align2::CENTER_CENTER,
                "Portrait of AI Product Owner",
                egui::FontId::proportional(scaled_font(14.0, state.config.ui_scale)),
                egui::Color32::from_gray(140),
            );
        }
    }

    // Warm glow along the stage bottom.
    painter.rect_filled(
        egui::Rect::from_min_max(stage.left_bottom() - egui::vec2(0.0, 18.0), stage.right_bottom()),
        18.0,
        egui::Color32::from_rgba_unmultiplied(255, 125, 63, 18),
    );
}
