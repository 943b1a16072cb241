mod deck;
mod gallery;
mod hero;
mod system;
mod timeline;
mod widgets;

pub use system::ui_system;
