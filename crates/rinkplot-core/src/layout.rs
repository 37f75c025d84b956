use crate::error::RinkError;
use crate::geom::{RinkPoint, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const WIDTH_EXTENT: f64 = 42.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    pub fn from_vertical(vertical: bool) -> Self {
        if vertical {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }

    pub fn place(self, p: RinkPoint) -> Vec2 {
        match self {
            Orientation::Horizontal => Vec2::new(p.length, p.width),
            Orientation::Vertical => Vec2::new(p.width, p.length),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Orientation {
    type Err = RinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" | "h" => Ok(Orientation::Horizontal),
            "vertical" | "v" => Ok(Orientation::Vertical),
            _ => Err(RinkError::InvalidOrientation(s.to_string())),
        }
    }
}

impl TryFrom<String> for Orientation {
    type Error = RinkError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Region {
    #[default]
    Full,
    OffensiveHalf,
    OffensiveZone,
    DefensiveHalf,
    DefensiveZone,
    NeutralZone,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Full,
        Region::OffensiveHalf,
        Region::OffensiveZone,
        Region::DefensiveHalf,
        Region::DefensiveZone,
        Region::NeutralZone,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Region::Full => "full",
            Region::OffensiveHalf => "offense",
            Region::OffensiveZone => "ozone",
            Region::DefensiveHalf => "defense",
            Region::DefensiveZone => "dzone",
            Region::NeutralZone => "neutral",
        }
    }

    pub fn length_range(self) -> AxisRange {
        match self {
            Region::Full => AxisRange::new(-101.0, 101.0),
            Region::OffensiveHalf => AxisRange::new(0.0, 101.0),
            Region::OffensiveZone => AxisRange::new(25.0, 101.0),
            Region::DefensiveHalf => AxisRange::new(-101.0, 0.0),
            Region::DefensiveZone => AxisRange::new(-101.0, -25.0),
            Region::NeutralZone => AxisRange::new(-25.0, 25.0),
        }
    }

    pub fn supports(self, orientation: Orientation) -> bool {
        !(self == Region::NeutralZone && orientation == Orientation::Horizontal)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Region {
    type Err = RinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let region = match s.trim().to_ascii_lowercase().as_str() {
            "full" => Region::Full,
            "offense" | "offensive_half" => Region::OffensiveHalf,
            "ozone" | "offensive_zone" => Region::OffensiveZone,
            "defense" | "defensive_half" => Region::DefensiveHalf,
            "dzone" | "defensive_zone" => Region::DefensiveZone,
            "neutral" | "neutral_zone" => Region::NeutralZone,
            _ => return Err(RinkError::InvalidRegion(s.to_string())),
        };
        Ok(region)
    }
}

impl TryFrom<String> for Region {
    type Error = RinkError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    pub x: AxisRange,
    pub y: AxisRange,
    pub length_axis: Axis,
    pub show_grid: bool,
    pub show_ticks: bool,
    pub scale_ratio: f64,
}

impl AxisConfig {
    pub fn length_range(&self) -> AxisRange {
        match self.length_axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    pub fn width_range(&self) -> AxisRange {
        match self.length_axis {
            Axis::X => self.y,
            Axis::Y => self.x,
        }
    }
}

pub fn resolve_layout(region: Region, orientation: Orientation) -> Result<AxisConfig, RinkError> {
    if !region.supports(orientation) {
        return Err(RinkError::UnsupportedRegion {
            region,
            orientation,
        });
    }

    let length = region.length_range();
    let width = AxisRange::new(-WIDTH_EXTENT, WIDTH_EXTENT);
    let (x, y, length_axis) = match orientation {
        Orientation::Horizontal => (length, width, Axis::X),
        Orientation::Vertical => (width, length, Axis::Y),
    };

    Ok(AxisConfig {
        x,
        y,
        length_axis,
        show_grid: false,
        show_ticks: false,
        scale_ratio: 1.0,
    })
}
