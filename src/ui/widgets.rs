use bevy_egui::egui;

/// Get a scaled font size with minimum of 12
pub fn scaled_font(base_size: f32, scale: f32) -> f32 {
    (base_size.max(12.0) * scale).max(12.0)
}

/// Get a scaled margin/spacing value
pub fn scaled_margin(base_size: f32, scale: f32) -> f32 {
    base_size * scale
}

/// Open an external URL in the system browser. `new_tab` requests a fresh
/// browsing context with no opener linkage.
pub fn open_external(ctx: &egui::Context, url: &str, new_tab: bool) {
    let open = if new_tab {
        egui::OpenUrl::new_tab(url)
    } else {
        egui::OpenUrl::same_tab(url)
    };
    ctx.open_url(open);
}

/// Kicker + heading + subtitle block used at the top of every section.
pub fn section_header(ui: &mut egui::Ui, kicker: &str, title: &str, subtitle: &str, ui_scale: f32) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(kicker)
                .size(scaled_font(13.0, ui_scale))
                .color(egui::Color32::from_rgb(255, 171, 107))
                .strong(),
        );
        ui.add_space(scaled_margin(4.0, ui_scale));
        ui.label(
            egui::RichText::new(title)
                .size(scaled_font(30.0, ui_scale))
                .color(egui::Color32::WHITE)
                .strong(),
        );
        if !subtitle.is_empty() {
            ui.add_space(scaled_margin(6.0, ui_scale));
            ui.label(
                egui::RichText::new(subtitle)
                    .size(scaled_font(15.0, ui_scale))
                    .color(egui::Color32::from_gray(185)),
            );
        }
    });
}

/// Corners of a rect rotated around its center, clockwise from top-left.
pub fn rotated_corners(center: egui::Pos2, size: egui::Vec2, angle_radians: f32) -> [egui::Pos2; 4] {
    let (sin, cos) = angle_radians.sin_cos();
    let half = size * 0.5;
    let local = [
        egui::vec2(-half.x, -half.y),
        egui::vec2(half.x, -half.y),
        egui::vec2(half.x, half.y),
        egui::vec2(-half.x, half.y),
    ];
    local.map(|v| center + egui::vec2(v.x * cos - v.y * sin, v.x * sin + v.y * cos))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_font_floor() {
        assert_eq!(scaled_font(10.0, 0.75), 12.0);
        assert_eq!(scaled_font(16.0, 1.0), 16.0);
        assert_eq!(scaled_font(16.0, 1.5), 24.0);
    }

    #[test]
    fn test_rotated_corners_identity() {
        let corners = rotated_corners(egui::pos2(10.0, 10.0), egui::vec2(4.0, 2.0), 0.0);
        assert_eq!(corners[0], egui::pos2(8.0, 9.0));
        assert_eq!(corners[2], egui::pos2(12.0, 11.0));
    }

    #[test]
    fn test_rotated_corners_quarter_turn() {
        let corners =
            rotated_corners(egui::pos2(0.0, 0.0), egui::vec2(4.0, 2.0), std::f32::consts::FRAC_PI_2);
        // Top-left (-2, -1) maps to (1, -2).
        assert!((corners[0].x - 1.0).abs() < 1e-5);
        assert!((corners[0].y + 2.0).abs() < 1e-5);
    }
}
