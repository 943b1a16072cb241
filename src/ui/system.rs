use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use std::time::Duration;

use crate::state::AppState;
use crate::ui::deck::render_deck;
use crate::ui::gallery::render_gallery;
use crate::ui::hero::render_hero;
use crate::ui::timeline::render_timeline;
use crate::ui::widgets::{scaled_font, scaled_margin};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// How long a status message stays visible.
const STATUS_TTL: Duration = Duration::from_secs(4);

pub fn ui_system(mut contexts: EguiContexts, mut state: ResMut<AppState>) {
    let ctx = contexts.ctx_mut();

    // Apply UI scale to global text styles and spacing
    let ui_scale = state.config.ui_scale;
    let mut style = (*ctx.style()).clone();
    style.text_styles.insert(
        egui::TextStyle::Heading,
        egui::FontId::proportional(scaled_font(20.0, ui_scale)),
    );
    style.text_styles.insert(
        egui::TextStyle::Body,
        egui::FontId::proportional(scaled_font(14.0, ui_scale)),
    );
    style.text_styles.insert(
        egui::TextStyle::Button,
        egui::FontId::proportional(scaled_font(14.0, ui_scale)),
    );
    style.text_styles.insert(
        egui::TextStyle::Small,
        egui::FontId::proportional(scaled_font(12.0, ui_scale)),
    );
    style.spacing.icon_width = scaled_margin(14.0, ui_scale);
    style.spacing.icon_spacing = scaled_margin(4.0, ui_scale);
    ctx.set_style(style);

    // Global keyboard shortcuts for UI scale (Ctrl+Plus/Minus/0)
    // Plus requires Shift on most keyboards (Shift+=), Minus and 0 do not
    let increase_pressed = ctx.input_mut(|i| {
        i.modifiers.command
            && (i.consume_key(egui::Modifiers::COMMAND, egui::Key::Plus)
                || i.consume_key(egui::Modifiers::COMMAND | egui::Modifiers::SHIFT, egui::Key::Equals))
    });
    if increase_pressed && state.config.ui_scale < 2.0 {
        state.config.ui_scale = (state.config.ui_scale + 0.25).min(2.0);
        state.config.save();
    }
    let decrease_pressed = ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::Minus));
    if decrease_pressed && state.config.ui_scale > 0.75 {
        state.config.ui_scale = (state.config.ui_scale - 0.25).max(0.75);
        state.config.save();
    }
    let reset_pressed = ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::Num0));
    if reset_pressed && state.config.ui_scale != 1.0 {
        state.config.ui_scale = 1.0;
        state.config.save();
    }

    // Menu bar
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("View", |ui| {
                let mut reduced = state.config.reduced_motion;
                if ui.checkbox(&mut reduced, "Reduced Motion").clicked() {
                    state.set_reduced_motion(reduced);
                    state.config.save();
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Zoom In").clicked() {
                    state.config.ui_scale = (state.config.ui_scale + 0.25).min(2.0);
                    state.config.save();
                    ui.close_menu();
                }
                if ui.button("Zoom Out").clicked() {
                    state.config.ui_scale = (state.config.ui_scale - 0.25).max(0.75);
                    state.config.save();
                    ui.close_menu();
                }
                if ui.button("Reset Zoom").clicked() {
                    state.config.ui_scale = 1.0;
                    state.config.save();
                    ui.close_menu();
                }
            });
            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    state.set_status(format!("Portfolio Deck v{}", VERSION));
                    ui.close_menu();
                }
            });
        });
    });

    // Status bar (shown only while a recent message is alive)
    let status = state
        .status_message
        .as_ref()
        .filter(|(_, when)| when.elapsed() < STATUS_TTL)
        .map(|(message, _)| message.clone());
    if let Some(message) = status {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(message);
        });
        // Keep a frame scheduled so the message disappears on time.
        ctx.request_repaint_after(Duration::from_millis(500));
    }

    // The whole page is one vertical scroll surface.
    egui::CentralPanel::default()
        .frame(egui::Frame::default().fill(egui::Color32::from_rgb(12, 10, 20)))
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    render_hero(ui, &mut state);
                    render_timeline(ui, &mut state);
                    render_deck(ui, &mut state);
                    render_gallery(ui, &mut state);
                });
        });

    // Per-frame parallax easing; keep repainting only while it is still
    // converging so an idle window stops burning frames.
    if state.parallax.step() {
        ctx.request_repaint();
    }
}
