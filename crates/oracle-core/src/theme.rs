use crate::error::UnknownTheme;
use crate::outcome::Outcome;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    #[default]
    Cyber,
    Carnival,
    Pastel,
    Noir,
    Dtu,
}

impl ThemeId {
    pub const ALL: [ThemeId; 5] = [
        ThemeId::Cyber,
        ThemeId::Carnival,
        ThemeId::Pastel,
        ThemeId::Noir,
        ThemeId::Dtu,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeId::Cyber => "cyber",
            ThemeId::Carnival => "carnival",
            ThemeId::Pastel => "pastel",
            ThemeId::Noir => "noir",
            ThemeId::Dtu => "dtu",
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeId {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ThemeId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AmbientEffect {
    Glitch,
    Confetti,
    Sparkle,
    Smoke,
    Grid,
}

impl AmbientEffect {
    pub fn as_str(self) -> &'static str {
        match self {
            AmbientEffect::Glitch => "glitch",
            AmbientEffect::Confetti => "confetti",
            AmbientEffect::Sparkle => "sparkle",
            AmbientEffect::Smoke => "smoke",
            AmbientEffect::Grid => "grid",
        }
    }
}

/// Static styling for one theme. Colors are CSS hex strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub id: ThemeId,
    pub name: &'static str,
    /// `[yes, no]` sector fills
    pub wheel_colors: [&'static str; 2],
    pub pointer_color: &'static str,
    pub ambient: AmbientEffect,
    pub idle_hint: &'static str,
}

impl Theme {
    pub fn sector_color(&self, outcome: Outcome) -> &'static str {
        match outcome {
            Outcome::Yes => self.wheel_colors[0],
            Outcome::No => self.wheel_colors[1],
        }
    }

    /// Status text to show after a theme change; `None` while busy, so a
    /// loading message is not replaced.
    pub fn status_hint(&self, busy: bool) -> Option<&'static str> {
        (!busy).then_some(self.idle_hint)
    }
}

static THEMES: [Theme; 5] = [
    Theme {
        id: ThemeId::Cyber,
        name: "Cyber Occult",
        wheel_colors: ["#06b6d4", "#d946ef"],
        pointer_color: "#ffffff",
        ambient: AmbientEffect::Glitch,
        idle_hint: "Cast your inquiry into the void",
    },
    Theme {
        id: ThemeId::Carnival,
        name: "Mystic Fair",
        wheel_colors: ["#fbbf24", "#f43f5e"],
        pointer_color: "#ffffff",
        ambient: AmbientEffect::Confetti,
        idle_hint: "Cast your inquiry into the void",
    },
    Theme {
        id: ThemeId::Pastel,
        name: "Cloud Realm",
        wheel_colors: ["#818cf8", "#f472b6"],
        pointer_color: "#fbbf24",
        ambient: AmbientEffect::Sparkle,
        idle_hint: "Cast your inquiry into the void",
    },
    Theme {
        id: ThemeId::Noir,
        name: "The Void",
        wheel_colors: ["#171717", "#0a0a0a"],
        pointer_color: "#ef4444",
        ambient: AmbientEffect::Smoke,
        idle_hint: "Cast your inquiry into the void",
    },
    Theme {
        id: ThemeId::Dtu,
        name: "DTU Blueprint",
        wheel_colors: ["#990000", "#1E4D8C"],
        pointer_color: "#1E4D8C",
        ambient: AmbientEffect::Grid,
        idle_hint: "Awaiting Input Parameters",
    },
];

pub fn theme(id: ThemeId) -> &'static Theme {
    // THEMES is declared in ThemeId order
    &THEMES[id as usize]
}
