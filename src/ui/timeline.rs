use bevy_egui::egui;

use crate::content::{COMPANIES, JET_IMAGE, TIMELINE_ITEMS};
use crate::imaging::get_or_load;
use crate::road::{map_to_rect, section_progress, PathPoint};
use crate::state::{AppState, ViewportClass, ROAD_COMPACT_BREAKPOINT};
use crate::ui::widgets::{scaled_font, scaled_margin, section_header};

/// Width of the painted road strip between the milestone columns.
const ROAD_STRIP_WIDTH: f32 = 140.0;
const COMPACT_STRIP_WIDTH: f32 = 36.0;
const JET_SIZE: f32 = 54.0;

pub fn render_timeline(ui: &mut egui::Ui, state: &mut AppState) {
    let ui_scale = state.config.ui_scale;
    let width = ui.available_width();
    let class = ViewportClass::from_width(ui.ctx().screen_rect().width(), ROAD_COMPACT_BREAKPOINT);
    state.select_road_variant(class);

    ui.add_space(scaled_margin(36.0, ui_scale));
    render_company_strip(ui, state);
    ui.add_space(scaled_margin(16.0, ui_scale));
    section_header(
        ui,
        "Road Timeline",
        "My Journey",
        "A timeline of building AI products across healthcare, education, and remote consultation—impacting real lives.",
        ui_scale,
    );
    ui.add_space(scaled_margin(24.0, ui_scale));

    // Milestone rows laid out around a central (or, in compact, left-edge)
    // road strip; the road itself is painted after the rows so the strip
    // rect is known.
    let strip_width = match class {
        ViewportClass::Desktop => ROAD_STRIP_WIDTH,
        ViewportClass::Compact => COMPACT_STRIP_WIDTH,
    };
    let road_top = ui.cursor().top();
    let mut node_centers: Vec<f32> = Vec::with_capacity(TIMELINE_ITEMS.len());

    for (index, item) in TIMELINE_ITEMS.iter().enumerate() {
        let row_top = ui.cursor().top();
        ui.horizontal_top(|ui| {
            match class {
                ViewportClass::Desktop => {
                    let side = (width - strip_width) / 2.0 - scaled_margin(12.0, ui_scale);
                    if index % 2 == 0 {
                        // Right-side card: skip across the left column and road.
                        ui.add_space(side + strip_width);
                        milestone_card(ui, state, item, side);
                    } else {
                        milestone_card(ui, state, item, side);
                    }
                }
                ViewportClass::Compact => {
                    ui.add_space(strip_width + scaled_margin(10.0, ui_scale));
                    let side = width - strip_width - scaled_margin(20.0, ui_scale);
                    milestone_card(ui, state, item, side);
                }
            }
        });
        node_centers.push((row_top + ui.cursor().top()) / 2.0);
        ui.add_space(scaled_margin(18.0, ui_scale));
    }

    let road_bottom = ui.cursor().top();
    let strip_left = match class {
        ViewportClass::Desktop => ui.max_rect().left() + (width - strip_width) / 2.0,
        ViewportClass::Compact => ui.max_rect().left(),
    };
    let road_rect = egui::Rect::from_min_max(
        egui::pos2(strip_left, road_top),
        egui::pos2(strip_left + strip_width, road_bottom),
    );

    // Scroll progress for this frame. Under reduced motion the road renders
    // fully traversed and the marker parks at the end; nothing re-arms.
    if state.config.reduced_motion {
        if state.road_progress != 1.0 {
            state.set_road_progress(1.0);
        }
    } else {
        let viewport_height = ui.ctx().screen_rect().height();
        let progress = section_progress(road_rect.top(), road_rect.height(), viewport_height);
        state.set_road_progress(progress);
    }

    paint_road(ui, state, road_rect, &node_centers);
    ui.add_space(scaled_margin(36.0, ui_scale));
}

fn render_company_strip(ui: &mut egui::Ui, state: &mut AppState) {
    let ui_scale = state.config.ui_scale;
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new("Company Worked With")
                .size(scaled_font(13.0, ui_scale))
                .color(egui::Color32::from_gray(170)),
        );
        ui.add_space(scaled_margin(8.0, ui_scale));
        ui.horizontal_wrapped(|ui| {
            let logo_side = scaled_margin(56.0, ui_scale);
            for company in &COMPANIES {
                let (rect, _) = ui.allocate_exact_size(egui::vec2(logo_side, logo_side), egui::Sense::hover());
                let painter = ui.painter_at(rect);
                painter.rect_filled(rect, 8.0, egui::Color32::from_rgb(28, 25, 40));
                let texture = get_or_load(
                    ui.ctx(),
                    &mut state.texture_cache,
                    &mut state.failed_assets,
                    company.logo,
                );
                match texture {
                    Some(texture) => {
                        let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                        painter.image(texture.id(), rect.shrink(4.0), uv, egui::Color32::WHITE);
                    }
                    None => {
                        painter.text(
                            rect.center(),
                            egui::Align2::CENTER_CENTER,
                            company.name.chars().next().unwrap_or('?'),
                            egui::FontId::proportional(scaled_font(18.0, ui_scale)),
                            egui::Color32::from_gray(160),
                        );
                    }
                }
            }
        });
    });
}

fn milestone_card(ui: &mut egui::Ui, state: &AppState, item: &crate::content::TimelineItem, width: f32) {
    let ui_scale = state.config.ui_scale;
    ui.vertical(|ui| {
        ui.set_width(width);
        egui::Frame::group(ui.style())
            .fill(egui::Color32::from_rgb(24, 21, 35))
            .rounding(12.0)
            .inner_margin(scaled_margin(14.0, ui_scale))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(item.category.glyph()).size(scaled_font(18.0, ui_scale)),
                    );
                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new(item.title)
                                .size(scaled_font(16.0, ui_scale))
                                .color(egui::Color32::WHITE)
                                .strong(),
                        );
                        ui.label(
                            egui::RichText::new(item.date)
                                .size(scaled_font(12.0, ui_scale))
                                .color(egui::Color32::from_rgb(255, 171, 107)),
                        );
                    });
                });
                ui.add_space(scaled_margin(6.0, ui_scale));
                for bullet in item.bullets {
                    ui.label(
                        egui::RichText::new(format!("• {}", bullet))
                            .size(scaled_font(13.0, ui_scale))
                            .color(egui::Color32::from_gray(190)),
                    );
                }
            });
    });
}

fn paint_road(ui: &mut egui::Ui, state: &mut AppState, road_rect: egui::Rect, node_centers: &[f32]) {
    // Degenerate rect means the section has not produced usable geometry
    // yet; skip this frame and pick placement up on the next one.
    if road_rect.width() <= 0.0 || road_rect.height() <= 0.0 {
        return;
    }

    let painter = ui.painter().clone();
    let rect_tuple = (road_rect.left(), road_rect.top(), road_rect.width(), road_rect.height());
    let to_screen = |point: PathPoint| {
        let (x, y) = map_to_rect(point, rect_tuple);
        egui::pos2(x, y)
    };

    // Base road and traversed highlight, as polylines over the arc-length
    // samples.
    let total = state.road_path.total_length();
    let travel = total * state.road_progress;
    let steps = 160;
    let mut base = Vec::with_capacity(steps + 1);
    let mut traversed = Vec::new();
    for step in 0..=steps {
        let distance = total * step as f32 / steps as f32;
        let screen = to_screen(state.road_path.point_at_length(distance));
        base.push(screen);
        if distance <= travel {
            traversed.push(screen);
        }
    }

    painter.add(egui::Shape::line(
        base,
        egui::Stroke::new(10.0, egui::Color32::from_rgb(36, 32, 52)),
    ));
    // Traversed highlight, shading from deep orange at the start to a light
    // peach at the marker.
    if traversed.len() > 1 {
        let from = egui::Color32::from_rgb(255, 125, 63);
        let to = egui::Color32::from_rgb(255, 196, 128);
        let last = (traversed.len() - 1) as f32;
        for (i, pair) in traversed.windows(2).enumerate() {
            let t = i as f32 / last;
            let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
            let color = egui::Color32::from_rgb(
                lerp(from.r(), to.r()),
                lerp(from.g(), to.g()),
                lerp(from.b(), to.b()),
            );
            painter.line_segment([pair[0], pair[1]], egui::Stroke::new(4.0, color));
        }
    }

    // Milestone nodes on the strip centerline.
    for &center_y in node_centers {
        painter.circle_filled(
            egui::pos2(road_rect.center().x, center_y),
            5.0,
            egui::Color32::from_rgb(255, 171, 107),
        );
    }

    // The jet marker at the current pose.
    let pose = state.road_pose;
    let marker_center = to_screen(pose.point);
    let marker_rect = egui::Rect::from_center_size(marker_center, egui::vec2(JET_SIZE, JET_SIZE));
    let texture = get_or_load(
        ui.ctx(),
        &mut state.texture_cache,
        &mut state.failed_assets,
        JET_IMAGE,
    );
    match texture {
        Some(texture) => {
            let sized = egui::load::SizedTexture::new(texture.id(), marker_rect.size());
            let image = egui::Image::from_texture(sized)
                .rotate(pose.angle_degrees.to_radians(), egui::Vec2::splat(0.5));
            image.paint_at(ui, marker_rect);
        }
        None => {
            // No artwork: a painted dart aligned with the heading. The art
            // offset baked into the pose points the dart back down the
            // tangent, so undo it here.
            let heading = (pose.angle_degrees - 90.0).to_radians();
            let (sin, cos) = heading.sin_cos();
            let dir = egui::vec2(cos, sin);
            let side = egui::vec2(-sin, cos);
            let tip = marker_center + dir * JET_SIZE * 0.5;
            let tail = marker_center - dir * JET_SIZE * 0.3;
            painter.add(egui::Shape::convex_polygon(
                vec![tip, tail + side * JET_SIZE * 0.25, tail - side * JET_SIZE * 0.25],
                egui::Color32::from_rgb(230, 230, 240),
                egui::Stroke::NONE,
            ));
        }
    }
}
