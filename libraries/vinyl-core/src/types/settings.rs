/// Player preference types
use serde::{Deserialize, Serialize};

/// Speed of the spinning record and tonearm animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl AnimationSpeed {
    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Slow => "slow",
            Self::Normal => "normal",
            Self::Fast => "fast",
        }
    }

    /// Parse from string
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "slow" => Some(Self::Slow),
            "normal" => Some(Self::Normal),
            "fast" => Some(Self::Fast),
            _ => None,
        }
    }
}

impl std::fmt::Display for AnimationSpeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Color theme slug (e.g. "default", "midnight", "sunset")
///
/// Restricted to lowercase ASCII letters, digits and `-` so it can be used
/// verbatim in a CSS class name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorTheme(String);

impl ColorTheme {
    /// Parse a theme slug
    pub fn parse(slug: impl Into<String>) -> Result<Self, String> {
        let slug = slug.into();
        let valid = !slug.is_empty()
            && slug
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-');

        if valid {
            Ok(Self(slug))
        } else {
            Err(format!("invalid color theme: {slug:?}"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// CSS class applied to the page body
    pub fn css_class(&self) -> String {
        format!("theme-{}", self.0)
    }
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self("default".to_string())
    }
}

impl TryFrom<String> for ColorTheme {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ColorTheme> for String {
    fn from(theme: ColorTheme) -> Self {
        theme.0
    }
}

impl std::fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// User preferences for the turntable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSettings {
    /// Music volume (0-100)
    pub music_volume: u8,

    /// Vinyl crackle volume (0-100)
    pub crackle_volume: u8,

    pub animation_speed: AnimationSpeed,

    /// Whether the musical notes animate while playing
    pub show_notes: bool,

    pub color_theme: ColorTheme,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            music_volume: 70,
            crackle_volume: 30,
            animation_speed: AnimationSpeed::Normal,
            show_notes: true,
            color_theme: ColorTheme::default(),
        }
    }
}

/// Partial settings update; `None` fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub music_volume: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub crackle_volume: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_speed: Option<AnimationSpeed>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_notes: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_theme: Option<ColorTheme>,
}

impl SettingsUpdate {
    /// Whether the update changes nothing
    pub fn is_empty(&self) -> bool {
        self.music_volume.is_none()
            && self.crackle_volume.is_none()
            && self.animation_speed.is_none()
            && self.show_notes.is_none()
            && self.color_theme.is_none()
    }

    /// Copy of the update with volumes clamped to 0-100
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self {
            music_volume: self.music_volume.map(|volume| volume.min(100)),
            crackle_volume: self.crackle_volume.map(|volume| volume.min(100)),
            ..self.clone()
        }
    }
}
