use bevy::log::warn;
use bevy_egui::egui;
use std::collections::{HashMap, HashSet};
use std::fs;

const MAX_TEXTURE_SIZE: u32 = 2048;

/// Load an image asset from disk into an egui texture.
pub fn load_texture_from_path(
    ctx: &egui::Context,
    path: &str,
) -> Result<egui::TextureHandle, String> {
    let bytes = fs::read(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
    let img = image::load_from_memory(&bytes).map_err(|e| format!("Invalid image {}: {}", path, e))?;

    // Cap oversized assets, preserving aspect ratio.
    let (width, height) = (img.width(), img.height());
    let img = if width > MAX_TEXTURE_SIZE || height > MAX_TEXTURE_SIZE {
        let scale = (MAX_TEXTURE_SIZE as f32 / width as f32)
            .min(MAX_TEXTURE_SIZE as f32 / height as f32);
        let new_width = (width as f32 * scale) as u32;
        let new_height = (height as f32 * scale) as u32;
        img.resize(new_width, new_height, image::imageops::FilterType::Triangle)
    } else {
        img
    };

    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let pixels = rgba.into_raw();
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &pixels);

    Ok(ctx.load_texture(path, color_image, egui::TextureOptions::LINEAR))
}

/// Fetch a texture through the cache, loading it on first use. A path that
/// fails to load is remembered so we warn once and the caller can paint a
/// placeholder every frame without re-hitting the filesystem.
pub fn get_or_load(
    ctx: &egui::Context,
    cache: &mut HashMap<String, egui::TextureHandle>,
    failed: &mut HashSet<String>,
    path: &str,
) -> Option<egui::TextureHandle> {
    if let Some(texture) = cache.get(path) {
        return Some(texture.clone());
    }
    if failed.contains(path) {
        return None;
    }

    match load_texture_from_path(ctx, path) {
        Ok(texture) => {
            cache.insert(path.to_string(), texture.clone());
            Some(texture)
        }
        Err(e) => {
            warn!("asset load failed: {}", e);
            failed.insert(path.to_string());
            None
        }
    }
}
