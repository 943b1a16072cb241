use bevy_egui::egui;
use std::time::Instant;

use crate::content::DECK_CARDS;
use crate::deck::{slot_transforms, Direction, SlotTransform};
use crate::imaging::get_or_load;
use crate::state::{AppState, ViewportClass, DECK_COMPACT_BREAKPOINT};
use crate::ui::widgets::{open_external, rotated_corners, scaled_font, scaled_margin, section_header};

/// Paint order: rear slots first, the front card last.
const PAINT_ORDER: [usize; 5] = [2, 4, 1, 3, 0];

pub fn render_deck(ui: &mut egui::Ui, state: &mut AppState) {
    let ui_scale = state.config.ui_scale;
    let class = ViewportClass::from_width(ui.ctx().screen_rect().width(), DECK_COMPACT_BREAKPOINT);
    let compact = class == ViewportClass::Compact;
    let now = Instant::now();

    ui.add_space(scaled_margin(36.0, ui_scale));
    section_header(
        ui,
        "Lastes Project",
        "Lastes Project",
        "Swipe or tap to move through featured product cards with a smooth fan-deck motion.",
        ui_scale,
    );
    ui.add_space(scaled_margin(18.0, ui_scale));

    let width = ui.available_width();
    let stage_height = if compact { 420.0 } else { 500.0 };
    let (stage_rect, stage_response) =
        ui.allocate_exact_size(egui::vec2(width, stage_height), egui::Sense::click_and_drag());

    // Feed the gesture tracker. egui only reports drags past its own small
    // threshold; stationary presses surface as clicks and take the tap path
    // below.
    let touch_like = ui.input(|i| i.any_touches());
    if stage_response.drag_started() {
        if let Some(pos) = stage_response.interact_pointer_pos() {
            state.deck.pointer_down(0, pos.x, pos.y, touch_like, compact);
        }
    }
    if stage_response.dragged() {
        if let Some(pos) = stage_response.interact_pointer_pos() {
            state.deck.pointer_move(0, pos.x, pos.y);
        }
    }
    if stage_response.drag_stopped() {
        if let Some(pos) = stage_response.interact_pointer_pos() {
            // Swipes rotate inside the engine; the tap fall-through is
            // handled by the click below.
            let _ = state.deck.pointer_end(0, pos.x, pos.y, now);
        }
    }

    let slots = slot_transforms(class);
    let order: Vec<usize> = state.deck.order().to_vec();
    let card_size = if compact {
        egui::vec2(210.0, 290.0)
    } else {
        egui::vec2(260.0, 340.0)
    };
    // Anchor the fan slightly above center so the lower fan arms stay inside
    // the stage.
    let anchor = stage_rect.center() - egui::vec2(0.0, 30.0);

    let mut front_rect = egui::Rect::NOTHING;
    for &slot_index in &PAINT_ORDER {
        let transform = &slots[slot_index];
        let card = &DECK_CARDS[order[slot_index]];
        let rect = paint_card(ui, state, card, transform, anchor, card_size, slot_index == 0);
        if slot_index == 0 {
            front_rect = rect;
        }
    }

    // Only the front card is interactive; rear cards stay inert.
    let front_card = &DECK_CARDS[order[0]];
    let chevron_rect = egui::Rect::from_center_size(
        front_rect.right_top() + egui::vec2(-24.0, 24.0),
        egui::vec2(28.0, 28.0),
    );
    let chevron = ui.interact(chevron_rect, ui.id().with("deck_next"), egui::Sense::click());
    ui.painter().circle_filled(
        chevron_rect.center(),
        13.0,
        if chevron.hovered() {
            egui::Color32::from_rgb(255, 125, 63)
        } else {
            egui::Color32::from_rgb(60, 52, 88)
        },
    );
    ui.painter().text(
        chevron_rect.center(),
        egui::Align2::CENTER_CENTER,
        ">",
        egui::FontId::proportional(scaled_font(15.0, ui_scale)),
        egui::Color32::WHITE,
    );

    let front = ui
        .interact(front_rect, ui.id().with("deck_front"), egui::Sense::click())
        .on_hover_text(front_card.open_label);
    if front.hovered() && front_card.link.is_some() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    if chevron.clicked() {
        state.deck.rotate(Direction::Next, now);
    } else if front.clicked() && !chevron_rect.contains(front.interact_pointer_pos().unwrap_or_default()) {
        if let Some(url) = state.deck.activate_front(front_card.link, now) {
            open_external(ui.ctx(), url, true);
        }
    }

    // Arrow keys rotate directly, bypassing gesture and suppress logic.
    if front.has_focus() || front.hovered() || stage_response.hovered() {
        let (left, right, activate) = ui.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::ArrowRight),
                i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Space),
            )
        });
        if right {
            state.deck.rotate(Direction::Next, now);
        } else if left {
            state.deck.rotate(Direction::Prev, now);
        } else if activate && front.has_focus() {
            if let Some(url) = state.deck.activate_front(front_card.link, now) {
                open_external(ui.ctx(), url, true);
            }
        }
    }

    // The lock window doubles as the cycle animation; keep frames coming
    // until it expires so the deck settles visually.
    if state.deck.is_locked(now) {
        ui.ctx().request_repaint();
    }

    ui.add_space(scaled_margin(36.0, ui_scale));
}

fn paint_card(
    ui: &mut egui::Ui,
    state: &mut AppState,
    card: &crate::content::ProjectCard,
    transform: &SlotTransform,
    anchor: egui::Pos2,
    base_size: egui::Vec2,
    is_front: bool,
) -> egui::Rect {
    let ui_scale = state.config.ui_scale;
    // Depth lifts the card toward the viewer a touch; blur has no painter
    // primitive, so it folds into extra transparency on the far cards.
    let center = anchor + egui::vec2(transform.x, transform.y - transform.depth * 0.35);
    let size = base_size * transform.scale;
    let alpha = (transform.opacity * (1.0 - transform.blur * 0.25) * 255.0) as u8;
    let angle = transform.rotation_degrees.to_radians();
    let rect = egui::Rect::from_center_size(center, size);

    let fill = egui::Color32::from_rgba_unmultiplied(30, 26, 46, alpha);
    let stroke = egui::Stroke::new(
        1.0,
        egui::Color32::from_rgba_unmultiplied(255, 255, 255, alpha / 5),
    );
    let corners = rotated_corners(center, size, angle);
    ui.painter()
        .add(egui::Shape::convex_polygon(corners.to_vec(), fill, stroke));

    if !is_front {
        // Rear cards carry just the badge and title along their tilt.
        ui.painter().text(
            center,
            egui::Align2::CENTER_CENTER,
            card.title,
            egui::FontId::proportional(scaled_font(16.0, ui_scale)),
            egui::Color32::from_rgba_unmultiplied(255, 255, 255, alpha),
        );
        return rect;
    }

    let inner = rect.shrink(scaled_margin(16.0, ui_scale));
    let painter = ui.painter().clone();

    // Badge row with its accent dot.
    painter.circle_filled(
        inner.left_top() + egui::vec2(4.0, 7.0),
        4.0,
        egui::Color32::from_rgb(255, 125, 63),
    );
    painter.text(
        inner.left_top() + egui::vec2(14.0, 0.0),
        egui::Align2::LEFT_TOP,
        card.badge,
        egui::FontId::proportional(scaled_font(12.0, ui_scale)),
        egui::Color32::from_rgb(255, 171, 107),
    );
    painter.text(
        inner.left_top() + egui::vec2(0.0, scaled_margin(22.0, ui_scale)),
        egui::Align2::LEFT_TOP,
        card.title,
        egui::FontId::proportional(scaled_font(20.0, ui_scale)),
        egui::Color32::WHITE,
    );

    let media_rect = egui::Rect::from_min_size(
        inner.left_top() + egui::vec2(0.0, scaled_margin(52.0, ui_scale)),
        egui::vec2(inner.width(), inner.height() * 0.42),
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
            painter.rect_filled(media_rect, 8.0, egui::Color32::from_rgb(44, 38, 66));
            painter.text(
                media_rect.center(),
                egui::Align2::CENTER_CENTER,
                card.title.chars().next().unwrap_or('?'),
                egui::FontId::proportional(scaled_font(28.0, ui_scale)),
                egui::Color32::from_gray(150),
            );
        }
    }

    // Description under the media, wrapped to the card width.
    let description = painter.layout(
        card.description.to_string(),
        egui::FontId::proportional(scaled_font(12.0, ui_scale)),
        egui::Color32::from_gray(185),
        inner.width(),
    );
    painter.galley(
        media_rect.left_bottom() + egui::vec2(0.0, scaled_margin(10.0, ui_scale)),
        description,
        egui::Color32::from_gray(185),
    );

    rect
}
