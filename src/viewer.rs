//! The viewer wires raylib input and drawing to the slider and the effects
//! around it. All layout happens in render space (the fixed-size
//! framebuffer), so pointer positions are mapped there first.

use std::path::PathBuf;

use anyhow::Result;
use raylib::prelude::*;

use crate::constants::*;
use crate::effects::{HoverFade, Modal};
use crate::geometry::contains;
use crate::loader::{FetchWorker, Fetched};
use crate::observer::RegionObserver;
use crate::slide::Slide;
use crate::slider::indicator::DotStrip;
use crate::slider::input::key_input;
use crate::slider::{NavControls, SliderController, SliderError};
use crate::state::LoadState;
use crate::texture_loader::{ImageBytes, create_texture};

const HELP_LINES: [&str; 5] = [
    "Carousel",
    "Left / Right arrows or the side buttons: previous / next slide",
    "Click a dot to jump straight to that slide",
    "H or the ? button: show this help",
    "Escape, the x button or a click outside this box: close",
];

/// On-screen controls that fade together on hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Control {
    Prev = 0,
    Next = 1,
    Help = 2,
}

pub fn nav_controls() -> NavControls {
    let y = (RENDER_HEIGHT as f32 - NAV_BUTTON_SIZE) * 0.5;
    NavControls {
        prev: Rectangle::new(NAV_BUTTON_MARGIN, y, NAV_BUTTON_SIZE, NAV_BUTTON_SIZE),
        next: Rectangle::new(
            RENDER_WIDTH as f32 - NAV_BUTTON_MARGIN - NAV_BUTTON_SIZE,
            y,
            NAV_BUTTON_SIZE,
            NAV_BUTTON_SIZE,
        ),
    }
}

fn help_button() -> Rectangle {
    let size = NAV_BUTTON_SIZE * 0.75;
    Rectangle::new(RENDER_WIDTH as f32 - NAV_BUTTON_MARGIN - size, NAV_BUTTON_MARGIN, size, size)
}

/// Maps a window position to the render texture the window is showing.
pub fn to_render_space(point: Vector2, screen_width: f32, screen_height: f32) -> Vector2 {
    if screen_width <= 0.0 || screen_height <= 0.0 {
        return point;
    }
    Vector2::new(
        point.x * RENDER_WIDTH as f32 / screen_width,
        point.y * RENDER_HEIGHT as f32 / screen_height,
    )
}

fn viewport() -> Rectangle {
    Rectangle::new(0.0, 0.0, RENDER_WIDTH as f32, RENDER_HEIGHT as f32)
}

pub struct Viewer {
    slider: SliderController<Slide>,
    modal: Modal,
    fade: HoverFade,
    fade_opacity: f32,
    hovered: Option<Control>,
    help_button: Rectangle,
    observer: RegionObserver<usize>,
    worker: FetchWorker,
}

impl Viewer {
    pub fn new(paths: Vec<PathBuf>, start: Option<usize>, fade_opacity: f32) -> Result<Self> {
        let count = paths.len();
        let slides = paths.into_iter().map(Slide::new).collect();
        let mut slider = SliderController::new(slides, nav_controls(), DotStrip::bottom_centered())?;
        if let Some(start) = start.filter(|&s| s >= count) {
            return Err(SliderError::StartOutOfRange { start, count }.into());
        }

        slider.initialize();
        if let Some(start) = start {
            slider.jump_to_slide(start);
        }

        // Neighbours one slide away are fetched ahead of time
        let mut observer = RegionObserver::new(RENDER_WIDTH as f32);
        for slide in 0..count {
            observer.observe(slide, 0.0);
        }

        tracing::info!(slides = count, current = slider.current(), "viewer ready");
        Ok(Self {
            slider,
            modal: Modal::centered(),
            fade: HoverFade::new(3),
            fade_opacity,
            hovered: None,
            help_button: help_button(),
            observer,
            worker: FetchWorker::spawn()?,
        })
    }

    pub fn update(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let pointer = to_render_space(
            rl.get_mouse_position(),
            rl.get_screen_width() as f32,
            rl.get_screen_height() as f32,
        );

        while let Some(key) = rl.get_key_pressed() {
            self.on_key(key);
        }
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            self.on_click(pointer);
        }
        self.on_hover(pointer);

        self.request_visible();
        for fetched in self.worker.completed() {
            self.apply_fetched(fetched, |image| create_texture(rl, thread, image));
        }
        if !self.worker.is_alive() {
            self.fail_pending();
        }
    }

    /// The modal sees every key first; the slider only gets what it leaves.
    fn on_key(&mut self, key: KeyboardKey) {
        if self.modal.on_key(key) {
            return;
        }
        if key == KeyboardKey::KEY_H {
            self.modal.open();
            return;
        }
        if let Some(input) = key_input(key) {
            self.slider.handle(input);
        }
    }

    fn on_click(&mut self, point: Vector2) {
        if self.modal.on_click(point) {
            return;
        }
        if contains(&self.help_button, point) {
            self.modal.open();
            return;
        }
        self.slider.click(point);
    }

    fn control_at(&self, point: Vector2) -> Option<Control> {
        let controls = self.slider.controls();
        if contains(&controls.prev, point) {
            Some(Control::Prev)
        } else if contains(&controls.next, point) {
            Some(Control::Next)
        } else if contains(&self.help_button, point) {
            Some(Control::Help)
        } else {
            None
        }
    }

    fn on_hover(&mut self, point: Vector2) {
        let hovered = if self.modal.is_open() { None } else { self.control_at(point) };
        if hovered == self.hovered {
            return;
        }
        if let Some(left) = self.hovered {
            self.fade.apply(left as usize, 1.0);
        }
        if let Some(entered) = hovered {
            self.fade.apply(entered as usize, self.fade_opacity);
        }
        self.hovered = hovered;
    }

    /// Starts a fetch for every slide that has come near the viewport.
    fn request_visible(&mut self) {
        let panels = self.slider.panels();
        let entered = self.observer.poll(viewport(), |slide| panels[slide].bounds());
        for slide in entered {
            if let Some(panel) = self.slider.panel_mut(slide) {
                if panel.start_loading() {
                    self.worker.request(slide, panel.path().to_path_buf());
                }
            }
        }
    }

    fn apply_fetched<F>(&mut self, fetched: Fetched, make_texture: F)
    where
        F: FnOnce(&ImageBytes) -> Result<Texture2D>,
    {
        let Some(panel) = self.slider.panel_mut(fetched.slide) else {
            return;
        };
        let texture = fetched
            .result
            .map_err(anyhow::Error::from)
            .and_then(|image| make_texture(&image));
        match texture {
            Ok(texture) => {
                tracing::debug!(slide = fetched.slide, path = %fetched.path.display(), "slide loaded");
                panel.finish_loading(texture);
            }
            Err(e) => {
                tracing::warn!(slide = fetched.slide, path = %fetched.path.display(), "failed to load slide: {:#}", e);
                panel.fail_loading();
            }
        }
    }

    /// Slides still waiting on a worker that has stopped will never load.
    fn fail_pending(&mut self) {
        for slide in 0..self.slider.slide_count() {
            if let Some(panel) = self.slider.panel_mut(slide) {
                if panel.state() == LoadState::Loading {
                    panel.fail_loading();
                }
            }
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        d.clear_background(Color::BLACK);

        for slide in self.slider.panels() {
            slide.draw(d);
        }

        let controls = self.slider.controls();
        self.draw_control(d, controls.prev, "<", Control::Prev);
        self.draw_control(d, controls.next, ">", Control::Next);
        self.draw_control(d, self.help_button, "?", Control::Help);
        self.slider.dots().draw(d);

        let counter = format!("{} / {}", self.slider.current() + 1, self.slider.slide_count());
        d.draw_text(&counter, NAV_BUTTON_MARGIN as i32, NAV_BUTTON_MARGIN as i32, 28, Color::LIGHTGRAY);

        self.modal.draw(d, &HELP_LINES);
    }

    fn draw_control(&self, d: &mut RaylibDrawHandle, bounds: Rectangle, label: &str, control: Control) {
        let alpha = (self.fade.opacity(control as usize) * 255.0).round() as u8;
        d.draw_rectangle_rounded(bounds, 0.5, 12, Color::new(255, 255, 255, alpha / 3));
        let font_size = (bounds.height * 0.6) as i32;
        d.draw_text(
            label,
            (bounds.x + bounds.width * 0.5) as i32 - font_size / 4,
            (bounds.y + bounds.height * 0.5) as i32 - font_size / 2,
            font_size,
            Color::new(255, 255, 255, alpha),
        );
    }

    pub fn load_states(&self) -> Vec<LoadState> {
        self.slider.panels().iter().map(Slide::state).collect()
    }
}
