pub const RENDER_WIDTH: i32 = 1920;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the render texture
pub const FPS: u32 = 60;                      // Frames per second

pub const FIT_RATIO: f32 = 0.9;               // Largest share of the render size a slide image may cover

pub const DOT_RADIUS: f32 = 9.0;              // Indicator dot radius (render pixels)
pub const DOT_SPACING: f32 = 34.0;            // Distance between dot centers
pub const DOT_STRIP_BOTTOM: f32 = 60.0;       // Dot strip center line, measured from the bottom edge
pub const DOT_STRIP_PADDING: f32 = 18.0;      // Clickable background around the dots

pub const NAV_BUTTON_SIZE: f32 = 72.0;        // Side of the square left/right controls
pub const NAV_BUTTON_MARGIN: f32 = 32.0;      // Distance from the left/right render edges

pub const DEFAULT_FADE: f32 = 0.5;            // Opacity of non-hovered controls

pub const MODAL_WIDTH: f32 = 760.0;
pub const MODAL_HEIGHT: f32 = 420.0;
pub const MODAL_CLOSE_SIZE: f32 = 40.0;       // Side of the dialog's close control
pub const MODAL_CLOSE_MARGIN: f32 = 16.0;     // Inset of the close control from the dialog corner
pub const OVERLAY_ALPHA: u8 = 170;
