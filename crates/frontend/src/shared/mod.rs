pub mod icons;
pub mod loader;
pub mod motion;
pub mod reveal;
