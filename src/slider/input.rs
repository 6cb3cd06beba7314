use raylib::prelude::*;

/// The element an activation landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    PrevControl,
    NextControl,
    /// A dot, carrying the slide index it recorded at creation.
    Dot(usize),
    /// The dot strip itself, between or around the dots.
    DotStrip,
    Outside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderInput {
    Prev,
    Next,
    Jump(usize),
    Ignored,
}

impl From<Target> for SliderInput {
    fn from(target: Target) -> Self {
        match target {
            Target::PrevControl => SliderInput::Prev,
            Target::NextControl => SliderInput::Next,
            Target::Dot(slide) => SliderInput::Jump(slide),
            Target::DotStrip | Target::Outside => SliderInput::Ignored,
        }
    }
}

// Arrow keys drive the slider wherever the pointer or focus is
pub fn key_input(key: KeyboardKey) -> Option<SliderInput> {
    match key {
        KeyboardKey::KEY_LEFT => Some(SliderInput::Prev),
        KeyboardKey::KEY_RIGHT => Some(SliderInput::Next),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_map_to_inputs() {
        assert_eq!(SliderInput::from(Target::PrevControl), SliderInput::Prev);
        assert_eq!(SliderInput::from(Target::NextControl), SliderInput::Next);
        assert_eq!(SliderInput::from(Target::Dot(4)), SliderInput::Jump(4));
        assert_eq!(SliderInput::from(Target::DotStrip), SliderInput::Ignored);
        assert_eq!(SliderInput::from(Target::Outside), SliderInput::Ignored);
    }

    #[test]
    fn left_arrow_is_the_left_control() {
        assert_eq!(key_input(KeyboardKey::KEY_LEFT), Some(SliderInput::from(Target::PrevControl)));
        assert_eq!(key_input(KeyboardKey::KEY_RIGHT), Some(SliderInput::from(Target::NextControl)));
        assert_eq!(key_input(KeyboardKey::KEY_UP), None);
        assert_eq!(key_input(KeyboardKey::KEY_ESCAPE), None);
    }
}
