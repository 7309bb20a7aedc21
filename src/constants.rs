pub const RENDER_WIDTH: i32 = 1920;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the render texture
pub const FPS: u32 = 60;                      // Frames per second
pub const FRAME_TIME: f32 = 1.0 / FPS as f32; // Time per frame (seconds)

pub const AUTOPLAY_INTERVAL: f32 = 12.0;      // Time between automatic advances (seconds)

pub const CONTENT_ENTER_DURATION: f32 = 0.6;  // Text blocks fading/rising in (seconds)
pub const CONTENT_EXIT_DURATION: f32 = 0.4;   // Text blocks fading/rising out (seconds)
pub const IMAGE_ENTER_DURATION: f32 = 0.8;    // Image settling in (seconds)
pub const IMAGE_EXIT_DURATION: f32 = 0.5;     // Image shrinking out (seconds)

pub const TIME_EPSILON: f32 = 1e-4;           // Slack for accumulated frame-time rounding (seconds)
