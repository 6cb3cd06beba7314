use raylib::prelude::*;

use crate::constants::*;
use crate::geometry::contains;

/// One indicator. `slide` is the index recorded when the dot was created and
/// is the only thing a click on it needs to know.
#[derive(Debug, Clone)]
pub struct Dot {
    pub slide: usize,
    pub active: bool,
    pub center: Vector2,
}

impl Dot {
    pub fn hit(&self, point: Vector2) -> bool {
        let dx = point.x - self.center.x;
        let dy = point.y - self.center.y;
        dx * dx + dy * dy <= DOT_RADIUS * DOT_RADIUS
    }
}

/// Container the dots are appended into, centered horizontally on `center_x`.
/// The first and last dot centers are never more than `max_width` apart.
#[derive(Debug)]
pub struct DotStrip {
    dots: Vec<Dot>,
    center_x: f32,
    center_y: f32,
    max_width: f32,
}

impl DotStrip {
    pub fn new(center_x: f32, center_y: f32, max_width: f32) -> Self {
        Self { dots: Vec::new(), center_x, center_y, max_width }
    }

    /// Strip laid out along the bottom edge of the render texture, its
    /// background never wider than the texture.
    pub fn bottom_centered() -> Self {
        Self::new(
            RENDER_WIDTH as f32 * 0.5,
            RENDER_HEIGHT as f32 - DOT_STRIP_BOTTOM,
            RENDER_WIDTH as f32 - (DOT_RADIUS + DOT_STRIP_PADDING) * 2.0,
        )
    }

    /// Distance between neighbouring dot centers. Shrinks once the row
    /// would outgrow `max_width`.
    pub fn spacing(&self) -> f32 {
        let gaps = self.dots.len().saturating_sub(1) as f32;
        if gaps == 0.0 { DOT_SPACING } else { DOT_SPACING.min(self.max_width / gaps) }
    }

    /// Appends a dot for `slide`. Dots are laid out left to right in the
    /// order they are created, and the whole row is kept centered.
    pub fn append(&mut self, slide: usize) {
        self.dots.push(Dot { slide, active: false, center: Vector2::new(0.0, 0.0) });
        let spacing = self.spacing();
        let count = self.dots.len() as f32;
        let first_x = self.center_x - (count - 1.0) * spacing * 0.5;
        for (i, dot) in self.dots.iter_mut().enumerate() {
            dot.center = Vector2::new(first_x + i as f32 * spacing, self.center_y);
        }
    }

    pub fn set_active(&mut self, index: usize) {
        for dot in self.dots.iter_mut() {
            dot.active = false;
        }
        self.dots[index].active = true;
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    /// Clickable background of the strip, dots included.
    pub fn bounds(&self) -> Rectangle {
        let count = self.dots.len().max(1) as f32;
        let width = (count - 1.0) * self.spacing() + DOT_RADIUS * 2.0 + DOT_STRIP_PADDING * 2.0;
        let height = DOT_RADIUS * 2.0 + DOT_STRIP_PADDING * 2.0;
        Rectangle::new(self.center_x - width * 0.5, self.center_y - height * 0.5, width, height)
    }

    /// Closest dot under `point`; crowded dots may overlap.
    pub fn dot_at(&self, point: Vector2) -> Option<&Dot> {
        self.dots
            .iter()
            .filter(|d| d.hit(point))
            .min_by(|a, b| {
                (a.center.x - point.x).abs().total_cmp(&(b.center.x - point.x).abs())
            })
    }

    pub fn contains(&self, point: Vector2) -> bool {
        contains(&self.bounds(), point)
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        let bounds = self.bounds();
        d.draw_rectangle_rounded(bounds, 1.0, 12, Color::new(0, 0, 0, 90));
        for dot in &self.dots {
            if dot.active {
                d.draw_circle_v(dot.center, DOT_RADIUS, Color::WHITE);
            } else {
                d.draw_circle_v(dot.center, DOT_RADIUS, Color::new(255, 255, 255, 90));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(count: usize) -> DotStrip {
        let mut strip = DotStrip::new(500.0, 100.0, 800.0);
        for i in 0..count {
            strip.append(i);
        }
        strip
    }

    #[test]
    fn dots_stay_centered_and_ordered() {
        let strip = strip(3);
        let xs: Vec<f32> = strip.dots().iter().map(|d| d.center.x).collect();
        assert_eq!(xs, vec![500.0 - DOT_SPACING, 500.0, 500.0 + DOT_SPACING]);
        let slides: Vec<usize> = strip.dots().iter().map(|d| d.slide).collect();
        assert_eq!(slides, vec![0, 1, 2]);
    }

    #[test]
    fn set_active_clears_the_others() {
        let mut strip = strip(4);
        strip.set_active(1);
        strip.set_active(3);
        let active: Vec<usize> = strip.dots().iter().filter(|d| d.active).map(|d| d.slide).collect();
        assert_eq!(active, vec![3]);
    }

    #[test]
    fn background_is_not_a_dot() {
        let strip = strip(3);
        let between = Vector2::new(500.0 + DOT_SPACING * 0.5, 100.0);
        assert!(strip.contains(between));
        assert!(strip.dot_at(between).is_none());
        assert_eq!(strip.dot_at(Vector2::new(500.0 + DOT_SPACING, 100.0)).map(|d| d.slide), Some(2));
    }

    #[test]
    fn large_rows_stay_on_the_render_texture() {
        for count in [58, 100, 500] {
            let mut strip = DotStrip::bottom_centered();
            for i in 0..count {
                strip.append(i);
            }
            for dot in strip.dots() {
                assert!(dot.center.x >= DOT_RADIUS, "{count} dots: {} off the left edge", dot.slide);
                assert!(dot.center.x <= RENDER_WIDTH as f32 - DOT_RADIUS, "{count} dots: {} off the right edge", dot.slide);
                assert_eq!(strip.dot_at(dot.center).map(|d| d.slide), Some(dot.slide));
            }
            let bounds = strip.bounds();
            assert!(bounds.x >= -0.01 && bounds.x + bounds.width <= RENDER_WIDTH as f32 + 0.01);
        }
    }

    #[test]
    fn short_rows_keep_the_full_spacing() {
        let mut strip = DotStrip::bottom_centered();
        for i in 0..12 {
            strip.append(i);
        }
        assert_eq!(strip.spacing(), DOT_SPACING);
    }
}
