// Shared spin tuning constants used by both web and native frontends.

// Wheel face
pub const FULL_TURN_DEG: f64 = 360.0;
pub const SECTOR_BUFFER_DEG: f64 = 10.0; // min distance from target angle to a sector edge
pub const PIN_COUNT: u32 = 24;
pub const PIN_SPACING_DEG: f64 = FULL_TURN_DEG / PIN_COUNT as f64; // 15° between pins
pub const POINTER_SCREEN_DEG: f64 = 270.0; // 12 o'clock, clockwise from the face's +x axis

// Bonus turns added to every full-motion spin
pub const EXTRA_TURNS_MIN: u32 = 8;
pub const EXTRA_TURNS_SPAN: u32 = 4; // draws land in [MIN, MIN + SPAN)

// Spin durations (milliseconds)
pub const SPIN_DURATION_MS: u64 = 7_500;
pub const REDUCED_MOTION_DURATION_MS: u64 = 1_000;

// Pointer (clacker) wiggle shaping, v = velocity in [0, 1]
pub const WIGGLE_INTENSITY_BASE_DEG: f64 = 15.0; // at rest
pub const WIGGLE_INTENSITY_SPAN_DEG: f64 = 20.0; // added at full speed
pub const WIGGLE_DURATION_BASE_SEC: f64 = 0.04; // at full speed
pub const WIGGLE_DURATION_SPAN_SEC: f64 = 0.10; // added as the wheel slows

// Face rendering (unit-circle coordinates)
pub const FULL_SECTOR_EPSILON: f64 = 0.001; // p within this of 0/1 draws an empty/full wedge
pub const LABEL_RADIUS: f32 = 0.7;
pub const LABEL_HIDE_MARGIN: f64 = 0.1; // hide a label when its sector is narrower than this share
pub const PIN_RADIUS: f32 = 0.96;

// Persistence
pub const SETTINGS_KEY: &str = "oracle_settings";
pub const HISTORY_KEY: &str = "oracle_history";
pub const HISTORY_CAPACITY: usize = 10;

// Oracle endpoint
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const ASK_PATH: &str = "/ask_model/";
