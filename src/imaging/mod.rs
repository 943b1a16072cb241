mod texture;

pub use texture::{get_or_load, load_texture_from_path};
