pub const RENDER_WIDTH: i32 = 1920;           // Reference width of the landing display
pub const RENDER_HEIGHT: i32 = 1080;          // Reference height of the landing display
pub const FPS: u32 = 60;                      // Frames per second

pub const DEFAULT_TARGET: &str = "2025-07-11T17:00:00Z";
pub const DEFAULT_EVENT: &str = "L3ak CTF";

// --- Countdown ---
pub const MS_PER_DAY: i64 = 86_400_000;
pub const MS_PER_HOUR: i64 = 3_600_000;
pub const MS_PER_MINUTE: i64 = 60_000;
pub const MS_PER_SECOND: i64 = 1_000;
pub const COUNTDOWN_PERIOD: f32 = 1.0;        // Countdown refresh period (seconds)

// --- Camera ---
pub const CAMERA_FOVY: f32 = 75.0;            // Degrees
pub const CAMERA_BASE_Z: f32 = 10.0;          // Resting distance from the origin
pub const CAMERA_MIN_Z: f32 = 5.0;
pub const CAMERA_MAX_Z: f32 = 15.0;
pub const CAMERA_EASING: f32 = 0.08;          // Share of the remaining distance covered each frame
pub const POINTER_SENSITIVITY: f32 = 4.0;     // Camera offset at the window edge

// --- Ambient point cloud ---
pub const AMBIENT_PARTICLES: usize = 4000;
pub const AMBIENT_HALF_EXTENT: f32 = 50.0;    // Cube of side 100
pub const AMBIENT_SPIN_X: f32 = 0.0005;       // Radians per frame
pub const AMBIENT_SPIN_Y: f32 = 0.001;        // Radians per frame

// --- Dust trails ---
pub const DUST_POINTS: usize = 60;            // Points per trail
pub const DUST_SPAWN_MIN: f32 = 0.2;          // Seconds between spawns, lower bound
pub const DUST_SPAWN_MAX: f32 = 0.8;          // Seconds between spawns, upper bound
pub const DUST_DEPTH_THRESHOLD: f32 = CAMERA_MAX_Z;
pub const DUST_MAX_DISTANCE: f32 = 60.0;      // Eviction distance from the camera
pub const DUST_POINT_RADIUS: f32 = 0.04;      // World units

// --- Backdrop shader ---
pub const SHADER_TIME_STEP: f32 = 0.01;       // Time uniform increment per frame

// --- Parallax ---
pub const PARALLAX_FACTOR: f32 = -2.0;        // Percent of the tile shifted per full pointer sweep
pub const PARALLAX_TILE_SIZE: i32 = 256;

// --- Overlay text ---
pub const HEADLINE_FONT_SIZE: i32 = 64;
pub const COUNTDOWN_FONT_SIZE: i32 = 36;
pub const BODY_FONT_SIZE: i32 = 22;

pub const TAGLINE: &str = "Capture the flag. Climb the scoreboard. Bring your team.";
pub const LINKS: [(&str, &str); 3] = [
    ("CTFtime", "https://ctftime.org"),
    ("Discord", "https://discord.com"),
    ("X", "https://x.com"),
];
