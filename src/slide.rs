use std::path::{Path, PathBuf};

use raylib::prelude::*;

use crate::constants::*;
use crate::slider::Panel;
use crate::state::LoadState;

pub struct Slide {
    path: PathBuf,
    image: Option<Texture2D>,
    state: LoadState,
    offset_percent: i32,
}

impl Slide {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            image: None,
            state: LoadState::Placeholder,
            offset_percent: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    fn transition(&mut self, next: LoadState) -> bool {
        if !self.state.can_become(next) {
            tracing::warn!(from = ?self.state, to = ?next, path = %self.path.display(), "ignored load state change");
            return false;
        }
        self.state = next;
        true
    }

    pub fn start_loading(&mut self) -> bool {
        self.transition(LoadState::Loading)
    }

    pub fn finish_loading(&mut self, texture: Texture2D) {
        if self.transition(LoadState::Loaded) {
            self.image = Some(texture);
        }
    }

    pub fn fail_loading(&mut self) {
        self.transition(LoadState::Failed);
    }

    // Render-space rectangle at the current offset
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(
            RENDER_WIDTH as f32 * self.offset_percent as f32 / 100.0,
            0.0,
            RENDER_WIDTH as f32,
            RENDER_HEIGHT as f32,
        )
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        let bounds = self.bounds();
        if bounds.x >= RENDER_WIDTH as f32 || bounds.x + bounds.width <= 0.0 {
            return;
        }

        let Some(image) = self.image.as_ref() else {
            self.draw_placeholder(d, bounds);
            return;
        };

        let tex_width = image.width() as f32;
        let tex_height = image.height() as f32;
        let scale = fit_scale(tex_width, tex_height);
        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        // Relative to the dest rectangle (ie. the center of the image)
        let origin = Vector2::new(scaled_width * 0.5, scaled_height * 0.5);
        let center = Vector2::new(bounds.x + bounds.width * 0.5, bounds.y + bounds.height * 0.5);

        d.draw_texture_pro(
            image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            Rectangle::new(center.x, center.y, scaled_width, scaled_height),
            origin,
            0.0,
            Color::WHITE,
        );
    }

    fn draw_placeholder(&self, d: &mut RaylibDrawHandle, bounds: Rectangle) {
        let inset = Rectangle::new(
            bounds.x + bounds.width * (1.0 - FIT_RATIO) * 0.5,
            bounds.y + bounds.height * (1.0 - FIT_RATIO) * 0.5,
            bounds.width * FIT_RATIO,
            bounds.height * FIT_RATIO,
        );
        d.draw_rectangle_rec(inset, Color::new(34, 34, 38, 255));

        let label = match self.state {
            LoadState::Failed => format!(
                "{} could not be loaded",
                self.path.file_name().map_or_else(|| self.path.display().to_string(), |n| n.to_string_lossy().into_owned())
            ),
            _ => "Loading...".to_string(),
        };
        let color = if self.state == LoadState::Failed { Color::RED } else { Color::GRAY };
        d.draw_text(&label, inset.x as i32 + 40, (inset.y + inset.height * 0.5) as i32 - 15, 30, color);
    }
}

impl Panel for Slide {
    fn translate_x(&mut self, percent: i32) {
        self.offset_percent = percent;
    }

    fn offset_percent(&self) -> i32 {
        self.offset_percent
    }
}

/// Scale too big images down to fit the render texture, never up.
pub fn fit_scale(width: f32, height: f32) -> f32 {
    let limit_w = RENDER_WIDTH as f32 * FIT_RATIO;
    let limit_h = RENDER_HEIGHT as f32 * FIT_RATIO;
    (limit_w / width).min(limit_h / height).min(1.0)
}
