use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    CenterCircle,
    RefereeArc,
    BlueLine,
    CenterLine,
    GoalLine,
    Boards,
    Crease,
    FaceoffCircle,
    FaceoffDot,
}

impl Feature {
    pub const ALL: [Feature; 9] = [
        Feature::CenterCircle,
        Feature::RefereeArc,
        Feature::BlueLine,
        Feature::CenterLine,
        Feature::GoalLine,
        Feature::Boards,
        Feature::Crease,
        Feature::FaceoffCircle,
        Feature::FaceoffDot,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Feature::CenterCircle => "center_circle",
            Feature::RefereeArc => "referee_arc",
            Feature::BlueLine => "blue_line",
            Feature::CenterLine => "center_line",
            Feature::GoalLine => "goal_line",
            Feature::Boards => "boards",
            Feature::Crease => "crease",
            Feature::FaceoffCircle => "faceoff_circle",
            Feature::FaceoffDot => "faceoff_dot",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const ROYAL_BLUE: Rgba = Rgba::rgb(65, 105, 225);
    pub const RED: Rgba = Rgba::rgb(255, 0, 0);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const LIGHT_BLUE: Rgba = Rgba::rgb(173, 216, 230);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f64,
}

impl Stroke {
    pub const fn new(color: Rgba, width: f64) -> Self {
        Self { color, width }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    pub color: Rgba,
    pub opacity: f64,
}

impl Fill {
    pub const fn new(color: Rgba, opacity: f64) -> Self {
        Self { color, opacity }
    }

    /// Fill color with the opacity folded into its alpha channel.
    pub fn effective_color(&self) -> Rgba {
        self.color.with_alpha(self.color.a * self.opacity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkStyle {
    pub stroke: Stroke,
    pub fill: Option<Fill>,
}

impl MarkStyle {
    pub const fn stroked(color: Rgba, width: f64) -> Self {
        Self {
            stroke: Stroke::new(color, width),
            fill: None,
        }
    }

    pub const fn filled(stroke: Stroke, fill: Fill) -> Self {
        Self {
            stroke,
            fill: Some(fill),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleTable {
    pub center_circle: MarkStyle,
    pub referee_arc: MarkStyle,
    pub blue_line: MarkStyle,
    pub center_line: MarkStyle,
    pub goal_line: MarkStyle,
    pub boards: MarkStyle,
    pub crease: MarkStyle,
    pub faceoff_circle: MarkStyle,
    pub faceoff_dot: MarkStyle,
}

impl Default for StyleTable {
    fn default() -> Self {
        Self {
            center_circle: MarkStyle::stroked(Rgba::ROYAL_BLUE, 2.0),
            referee_arc: MarkStyle::stroked(Rgba::RED, 2.0),
            blue_line: MarkStyle::filled(
                Stroke::new(Rgba::ROYAL_BLUE, 1.0),
                Fill::new(Rgba::ROYAL_BLUE, 1.0),
            ),
            center_line: MarkStyle::filled(Stroke::new(Rgba::RED, 2.0), Fill::new(Rgba::RED, 1.0)),
            goal_line: MarkStyle::stroked(Rgba::RED, 2.0),
            boards: MarkStyle::stroked(Rgba::BLACK, 2.0),
            crease: MarkStyle::filled(Stroke::new(Rgba::RED, 2.0), Fill::new(Rgba::LIGHT_BLUE, 0.3)),
            faceoff_circle: MarkStyle::stroked(Rgba::RED, 2.0),
            faceoff_dot: MarkStyle::filled(Stroke::new(Rgba::RED, 2.0), Fill::new(Rgba::RED, 0.43)),
        }
    }
}

impl StyleTable {
    pub fn get(&self, feature: Feature) -> &MarkStyle {
        match feature {
            Feature::CenterCircle => &self.center_circle,
            Feature::RefereeArc => &self.referee_arc,
            Feature::BlueLine => &self.blue_line,
            Feature::CenterLine => &self.center_line,
            Feature::GoalLine => &self.goal_line,
            Feature::Boards => &self.boards,
            Feature::Crease => &self.crease,
            Feature::FaceoffCircle => &self.faceoff_circle,
            Feature::FaceoffDot => &self.faceoff_dot,
        }
    }
}
