pub const RENDER_WIDTH: i32 = 1920;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the render texture
pub const FPS: u32 = 60;                      // Frames per second

pub const TITLE_SIZE: i32 = 48;
pub const HEADING_SIZE: i32 = 28;
pub const BODY_SIZE: i32 = 22;
pub const CODE_SIZE: i32 = 20;
pub const LINE_GAP: i32 = 6;

pub const ERROR_DISPLAY_SECS: u64 = 5;        // How long load errors stay on screen before exit
