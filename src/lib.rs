//! Image slider viewer: a directory of pictures shown one at a time, with
//! side controls, indicator dots, arrow keys, a help modal and lazily
//! loaded slides.

pub mod cli;
pub mod constants;
pub mod effects;
pub mod geometry;
pub mod loader;
pub mod observer;
pub mod slide;
pub mod slider;
pub mod state;
pub mod texture_loader;
pub mod viewer;
