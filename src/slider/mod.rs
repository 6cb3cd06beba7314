pub mod indicator;
pub mod input;

use raylib::prelude::*;
use thiserror::Error;

use crate::geometry::contains;
use self::indicator::DotStrip;
use self::input::{SliderInput, Target};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SliderError {
    #[error("a slider needs at least one slide")]
    NoSlides,
    #[error("start slide {start} is out of range for {count} slides")]
    StartOutOfRange { start: usize, count: usize },
}

/// Anything the slider can move horizontally.
pub trait Panel {
    /// Places the panel at `percent` of the container width from the
    /// visible position (negative is to the left).
    fn translate_x(&mut self, percent: i32);
    fn offset_percent(&self) -> i32;
}

#[derive(Debug, Clone, Copy)]
pub struct NavControls {
    pub prev: Rectangle,
    pub next: Rectangle,
}

pub struct SliderController<P> {
    panels: Vec<P>,
    controls: NavControls,
    dots: DotStrip,
    cur_slide: usize,
    max_slide: usize,
    initialized: bool,
}

impl<P: Panel> SliderController<P> {
    pub fn new(panels: Vec<P>, controls: NavControls, dots: DotStrip) -> Result<Self, SliderError> {
        if panels.is_empty() {
            return Err(SliderError::NoSlides);
        }
        assert!(dots.is_empty(), "dot strip must start empty");
        let max_slide = panels.len();
        Ok(Self {
            panels,
            controls,
            dots,
            cur_slide: 0,
            max_slide,
            initialized: false,
        })
    }

    /// Creates the dots and shows slide 0. Must run once, before any input.
    pub fn initialize(&mut self) {
        assert!(!self.initialized, "slider initialized twice");
        self.cur_slide = 0;
        for slide in 0..self.max_slide {
            self.dots.append(slide);
        }
        self.go_to_slide(0);
        self.activate_dot(0);
        self.initialized = true;
        tracing::debug!(slides = self.max_slide, "slider initialized");
    }

    pub fn go_to_slide(&mut self, index: usize) {
        for (i, panel) in self.panels.iter_mut().enumerate() {
            panel.translate_x(100 * (i as i32 - index as i32));
        }
    }

    pub fn activate_dot(&mut self, index: usize) {
        self.dots.set_active(index);
    }

    pub fn next_slide(&mut self) {
        self.ensure_initialized();
        self.cur_slide = (self.cur_slide + 1) % self.max_slide;
        self.show_current();
    }

    pub fn prev_slide(&mut self) {
        self.ensure_initialized();
        self.cur_slide = (self.cur_slide + self.max_slide - 1) % self.max_slide;
        self.show_current();
    }

    pub fn jump_to_slide(&mut self, index: usize) {
        self.ensure_initialized();
        debug_assert!(index < self.max_slide, "jump target {index} out of range");
        self.cur_slide = index;
        self.show_current();
    }

    /// Applies one input. Returns the new index when the slider moved.
    pub fn handle(&mut self, input: SliderInput) -> Option<usize> {
        match input {
            SliderInput::Prev => self.prev_slide(),
            SliderInput::Next => self.next_slide(),
            SliderInput::Jump(slide) => self.jump_to_slide(slide),
            SliderInput::Ignored => return None,
        }
        tracing::debug!(?input, current = self.cur_slide, "slider moved");
        Some(self.cur_slide)
    }

    /// Resolves what sits under `point`. Dots win over the strip they sit in.
    pub fn target_at(&self, point: Vector2) -> Target {
        if contains(&self.controls.prev, point) {
            Target::PrevControl
        } else if contains(&self.controls.next, point) {
            Target::NextControl
        } else if let Some(dot) = self.dots.dot_at(point) {
            Target::Dot(dot.slide)
        } else if self.dots.contains(point) {
            Target::DotStrip
        } else {
            Target::Outside
        }
    }

    pub fn click(&mut self, point: Vector2) -> Option<usize> {
        let target = self.target_at(point);
        self.handle(target.into())
    }

    pub fn current(&self) -> usize {
        self.cur_slide
    }

    pub fn slide_count(&self) -> usize {
        self.max_slide
    }

    pub fn panels(&self) -> &[P] {
        &self.panels
    }

    pub fn panel_mut(&mut self, index: usize) -> Option<&mut P> {
        self.panels.get_mut(index)
    }

    pub fn controls(&self) -> &NavControls {
        &self.controls
    }

    pub fn dots(&self) -> &DotStrip {
        &self.dots
    }

    fn show_current(&mut self) {
        self.go_to_slide(self.cur_slide);
        self.activate_dot(self.cur_slide);
    }

    fn ensure_initialized(&self) {
        assert!(self.initialized, "slider used before initialize()");
    }
}
