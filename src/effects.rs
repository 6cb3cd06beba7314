use raylib::prelude::*;

use crate::constants::*;
use crate::geometry::contains;

// --- Class toggle ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    hidden: bool,
}

impl Visibility {
    pub fn hidden() -> Self {
        Self { hidden: true }
    }

    pub fn show(&mut self) {
        self.hidden = false;
    }

    pub fn hide(&mut self) {
        self.hidden = true;
    }

    pub fn toggle(&mut self) {
        self.hidden = !self.hidden;
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

// --- Modal ---

/// Dialog box over a dimming overlay. Both start hidden and always change
/// together.
#[derive(Debug)]
pub struct Modal {
    dialog: Visibility,
    overlay: Visibility,
    bounds: Rectangle,
}

impl Modal {
    pub fn new(bounds: Rectangle) -> Self {
        Self {
            dialog: Visibility::hidden(),
            overlay: Visibility::hidden(),
            bounds,
        }
    }

    pub fn centered() -> Self {
        Self::new(Rectangle::new(
            (RENDER_WIDTH as f32 - MODAL_WIDTH) * 0.5,
            (RENDER_HEIGHT as f32 - MODAL_HEIGHT) * 0.5,
            MODAL_WIDTH,
            MODAL_HEIGHT,
        ))
    }

    pub fn open(&mut self) {
        self.dialog.show();
        self.overlay.show();
        tracing::debug!("modal opened");
    }

    pub fn close(&mut self) {
        self.dialog.hide();
        self.overlay.hide();
        tracing::debug!("modal closed");
    }

    pub fn is_open(&self) -> bool {
        !self.dialog.is_hidden()
    }

    /// Close control in the dialog's top-right corner.
    pub fn close_button(&self) -> Rectangle {
        Rectangle::new(
            self.bounds.x + self.bounds.width - MODAL_CLOSE_SIZE - MODAL_CLOSE_MARGIN,
            self.bounds.y + MODAL_CLOSE_MARGIN,
            MODAL_CLOSE_SIZE,
            MODAL_CLOSE_SIZE,
        )
    }

    /// Escape closes an open modal. Returns whether the key was consumed,
    /// which is always the case while the modal is open.
    pub fn on_key(&mut self, key: KeyboardKey) -> bool {
        if !self.is_open() {
            return false;
        }
        if key == KeyboardKey::KEY_ESCAPE {
            self.close();
        }
        true
    }

    /// A click on the overlay or the close control closes the modal, any
    /// other click on the dialog does nothing. Returns whether the click was
    /// consumed.
    pub fn on_click(&mut self, point: Vector2) -> bool {
        if !self.is_open() {
            return false;
        }
        if contains(&self.close_button(), point) || !contains(&self.bounds, point) {
            self.close();
        }
        true
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, lines: &[&str]) {
        if !self.overlay.is_hidden() {
            d.draw_rectangle(0, 0, RENDER_WIDTH, RENDER_HEIGHT, Color::new(0, 0, 0, OVERLAY_ALPHA));
        }
        if self.dialog.is_hidden() {
            return;
        }
        d.draw_rectangle_rounded(self.bounds, 0.08, 12, Color::new(245, 245, 245, 255));

        let close = self.close_button();
        d.draw_rectangle_rounded(close, 0.3, 8, Color::new(220, 220, 220, 255));
        let size = (MODAL_CLOSE_SIZE * 0.7) as i32;
        d.draw_text(
            "x",
            (close.x + close.width * 0.5) as i32 - size / 4,
            (close.y + close.height * 0.5) as i32 - size / 2,
            size,
            Color::new(40, 40, 40, 255),
        );

        let x = self.bounds.x as i32 + 48;
        let mut y = self.bounds.y as i32 + 48;
        for (i, line) in lines.iter().enumerate() {
            let size = if i == 0 { 40 } else { 26 };
            d.draw_text(line, x, y, size, Color::new(40, 40, 40, 255));
            y += size + 22;
        }
    }
}

// --- Hover fade ---

/// Opacity of a row of sibling controls. Hovering one fades the others to
/// the opacity the caller passes in.
#[derive(Debug, Clone)]
pub struct HoverFade {
    opacities: Vec<f32>,
}

impl HoverFade {
    pub fn new(count: usize) -> Self {
        Self { opacities: vec![1.0; count] }
    }

    /// Sets every control except `hovered` to `opacity`.
    pub fn apply(&mut self, hovered: usize, opacity: f32) {
        for (i, value) in self.opacities.iter_mut().enumerate() {
            if i != hovered {
                *value = opacity;
            }
        }
    }

    pub fn opacity(&self, index: usize) -> f32 {
        self.opacities.get(index).copied().unwrap_or(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modal() -> Modal {
        Modal::new(Rectangle::new(100.0, 100.0, 200.0, 100.0))
    }

    #[test]
    fn visibility_toggles() {
        let mut v = Visibility::hidden();
        v.toggle();
        assert!(!v.is_hidden());
        v.toggle();
        assert!(v.is_hidden());
    }

    #[test]
    fn modal_starts_closed_and_ignores_input() {
        let mut modal = modal();
        assert!(!modal.is_open());
        assert!(!modal.on_key(KeyboardKey::KEY_ESCAPE));
        assert!(!modal.on_click(Vector2::new(0.0, 0.0)));
    }

    #[test]
    fn escape_closes_only_when_open() {
        let mut modal = modal();
        modal.open();
        assert!(modal.on_key(KeyboardKey::KEY_LEFT));
        assert!(modal.is_open());
        assert!(modal.on_key(KeyboardKey::KEY_ESCAPE));
        assert!(!modal.is_open());
    }

    #[test]
    fn overlay_click_closes_dialog_click_does_not() {
        let mut modal = modal();
        modal.open();
        assert!(modal.on_click(Vector2::new(150.0, 150.0)));
        assert!(modal.is_open());
        assert!(modal.on_click(Vector2::new(10.0, 10.0)));
        assert!(!modal.is_open());
    }

    #[test]
    fn close_control_closes_other_dialog_clicks_do_not() {
        let mut modal = modal();
        modal.open();
        let close = modal.close_button();
        assert!(contains(&Rectangle::new(100.0, 100.0, 200.0, 100.0), Vector2::new(close.x, close.y)));

        assert!(modal.on_click(Vector2::new(110.0, 190.0)));
        assert!(modal.is_open());

        assert!(modal.on_click(Vector2::new(close.x + 1.0, close.y + 1.0)));
        assert!(!modal.is_open());

        // closed again, so the next click is not the modal's
        assert!(!modal.on_click(Vector2::new(close.x + 1.0, close.y + 1.0)));
    }

    #[test]
    fn hover_fades_siblings_and_leave_restores() {
        let mut fade = HoverFade::new(3);
        fade.apply(1, 0.5);
        assert_eq!([fade.opacity(0), fade.opacity(1), fade.opacity(2)], [0.5, 1.0, 0.5]);
        fade.apply(1, 1.0);
        assert_eq!([fade.opacity(0), fade.opacity(1), fade.opacity(2)], [1.0, 1.0, 1.0]);
    }
}
