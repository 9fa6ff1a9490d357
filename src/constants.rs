// DOM element ids expected in index.html
pub const WHEEL_ID: &str = "wheel";
pub const YES_SECTOR_ID: &str = "yes-sector";
pub const NO_SECTOR_ID: &str = "no-sector";
pub const BOUNDARY_LINE_ID: &str = "boundary-line";
pub const YES_LABEL_ID: &str = "label-yes";
pub const NO_LABEL_ID: &str = "label-no";
pub const PINS_GROUP_ID: &str = "pins";
pub const POINTER_ID: &str = "pointer";

pub const QUESTION_INPUT_ID: &str = "question-input";
pub const ASK_BUTTON_ID: &str = "ask-button";
pub const STATUS_ID: &str = "status-line";

pub const RESULT_PANEL_ID: &str = "result-panel";
pub const RESULT_ANSWER_ID: &str = "result-answer";
pub const RESULT_PERCENT_ID: &str = "result-percent";
pub const RESULT_LABEL_ID: &str = "result-label";
pub const RESULT_QUESTION_ID: &str = "result-question";
pub const RESULT_RESET_ID: &str = "result-reset";
pub const TOAST_ID: &str = "toast";
pub const HISTORY_LIST_ID: &str = "history-list";

pub const BASE_URL_INPUT_ID: &str = "base-url-input";
pub const REDUCE_MOTION_ID: &str = "reduce-motion-toggle";
pub const SOUND_ID: &str = "sound-toggle";
pub const THEME_SELECT_ID: &str = "theme-select";

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
pub const PIN_DOT_RADIUS: f32 = 0.025; // unit-circle radius of a pin head

// Toast auto-hide (milliseconds)
pub const TOAST_MS: i32 = 3_000;

pub const LOADING_MESSAGES: [&str; 6] = [
    "Rippling the fabric of causality...",
    "Consulting the collective echo...",
    "Observing Schrödinger's result...",
    "Mapping the probability void...",
    "Whispering to the latent space...",
    "Collapsing the wave function...",
];
