//! Label colors and legend grouping.

use core::fmt;
use core::str::FromStr;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::LaminaError;

/// Opaque 24-bit color.
///
/// Serialized as a `#RRGGBB` string; parsing also accepts the bare `RRGGBB`
/// form and either letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Neutral gray used for labels missing from the palette.
    pub const NEUTRAL_GRAY: Self = Self::new(0xD3, 0xD3, 0xD3);

    /// Construct from channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` or `RRGGBB`.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the string is not exactly six hex digits
    /// after an optional leading `#`.
    pub fn from_hex(s: &str) -> Result<Self, LaminaError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(LaminaError::invalid_arg(format!("invalid hex color: {s:?}")));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|e| LaminaError::invalid_arg(format!("invalid hex color {s:?}: {e}")))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Uppercase `#RRGGBB` form.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// CSS `rgba(...)` form with the given alpha.
    #[must_use]
    pub fn rgba(self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {alpha})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = LaminaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Rgb {
    type Error = LaminaError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self {
        c.to_hex()
    }
}

/// A titled group of labels shown together in the legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendGroup {
    /// Group heading.
    pub title: String,
    /// Labels listed under the heading, in display order.
    pub labels: Vec<String>,
}

impl LegendGroup {
    /// Construct a legend group.
    pub fn new<I, S>(title: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }
}

/// Label → color mapping plus layer translucency and legend layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Per-label colors.
    pub colors: BTreeMap<String, Rgb>,
    /// Color for labels missing from `colors`.
    pub default_color: Rgb,
    /// Background alpha applied to every layer, in `[0, 1]`.
    pub alpha: f64,
    /// Legend layout; labels may also appear outside any group.
    pub groups: Vec<LegendGroup>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: BTreeMap::new(),
            default_color: Rgb::NEUTRAL_GRAY,
            alpha: 0.5,
            groups: Vec::new(),
        }
    }
}

impl Palette {
    /// Empty palette: every label renders in neutral gray.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Palette for IT-resume entities, grouped the way the three resume models split them.
    #[must_use]
    pub fn resume_default() -> Self {
        const COLORS: &[(&str, Rgb)] = &[
            ("TIME", Rgb::new(0x92, 0x54, 0xDE)),
            ("LINKS", Rgb::new(0xFF, 0x40, 0x13)),
            ("POSITIONS", Rgb::new(0xD3, 0xF2, 0x61)),
            ("DEGREE", Rgb::new(0x5C, 0xDB, 0xD3)),
            ("LOCATION", Rgb::new(0x09, 0x6D, 0xD9)),
            ("METRICS", Rgb::new(0xFF, 0xC0, 0x69)),
            ("COMPANIES", Rgb::new(0xAD, 0x8B, 0x00)),
            ("TECHNOLOGIES", Rgb::new(0x9A, 0x24, 0x4F)),
            ("NAME", Rgb::new(0x26, 0x3E, 0x0F)),
            ("RESPONSIBILITIES", Rgb::new(0xF7, 0x59, 0xAB)),
            ("EDUCATION", Rgb::new(0x38, 0x9E, 0x0D)),
            ("SKILLS", Rgb::new(0xFF, 0xA3, 0x9E)),
            ("PROJECTS", Rgb::new(0x00, 0x6D, 0x8F)),
            ("ACHIEVEMENTS", Rgb::new(0x00, 0x36, 0x4A)),
            ("CONTACTS", Rgb::new(0xAD, 0xC6, 0xFF)),
        ];

        Self {
            colors: COLORS
                .iter()
                .map(|(label, color)| ((*label).to_string(), *color))
                .collect(),
            groups: vec![
                LegendGroup::new(
                    "Group 1 (Standard)",
                    ["TIME", "LINKS", "POSITIONS", "DEGREE", "LOCATION", "METRICS"],
                ),
                LegendGroup::new(
                    "Group 2 (Companies/Technologies)",
                    ["COMPANIES", "TECHNOLOGIES", "NAME"],
                ),
                LegendGroup::new(
                    "Group 3 (Other)",
                    [
                        "RESPONSIBILITIES",
                        "EDUCATION",
                        "SKILLS",
                        "PROJECTS",
                        "ACHIEVEMENTS",
                        "CONTACTS",
                    ],
                ),
            ],
            ..Self::default()
        }
    }

    /// Parse a palette from JSON and validate it.
    ///
    /// Missing fields fall back to [`Palette::default`].
    ///
    /// # Errors
    /// Returns `InvalidArg` for malformed JSON, bad colors, or an alpha outside `[0, 1]`.
    pub fn from_json(json: &str) -> Result<Self, LaminaError> {
        let palette: Self = serde_json::from_str(json)
            .map_err(|e| LaminaError::invalid_arg(format!("palette: {e}")))?;
        palette.validate()?;
        Ok(palette)
    }

    /// Check the alpha range.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `alpha` is not a finite value in `[0, 1]`.
    pub fn validate(&self) -> Result<(), LaminaError> {
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(LaminaError::invalid_arg(format!(
                "palette alpha must be within [0, 1], got {}",
                self.alpha
            )));
        }
        Ok(())
    }

    /// Color for `label`, or the default color when the label is unknown.
    #[must_use]
    pub fn color_for(&self, label: &str) -> Rgb {
        self.colors
            .get(label)
            .copied()
            .unwrap_or(self.default_color)
    }

    /// Assign a color to a label, replacing any previous one.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `hex` is not a valid color.
    pub fn with_color(mut self, label: impl Into<String>, hex: &str) -> Result<Self, LaminaError> {
        self.colors.insert(label.into(), Rgb::from_hex(hex)?);
        Ok(self)
    }

    /// Replace the layer alpha.
    #[must_use]
    pub const fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Append a legend group.
    #[must_use]
    pub fn with_group(mut self, group: LegendGroup) -> Self {
        self.groups.push(group);
        self
    }
}
