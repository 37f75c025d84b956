use crate::geom::{BBox2, Vec2};
use crate::layout::{AxisConfig, Orientation, Region};
use crate::style::{Feature, MarkStyle};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeg2D {
    pub a: Vec2,
    pub b: Vec2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect2D {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect2D {
    pub fn from_corners(p: Vec2, q: Vec2) -> Self {
        Self {
            min: Vec2::new(p.x.min(q.x), p.y.min(q.y)),
            max: Vec2::new(p.x.max(q.x), p.y.max(q.y)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve2D {
    pub points: Vec<Vec2>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive2D {
    Curve(Curve2D),
    Rect(Rect2D),
    Line(LineSeg2D),
}

impl Primitive2D {
    pub fn bbox(&self) -> BBox2 {
        match self {
            Primitive2D::Curve(curve) => {
                let mut bbox = BBox2::empty();
                for p in &curve.points {
                    bbox.include_point(*p);
                }
                bbox
            }
            Primitive2D::Rect(rect) => BBox2::new(rect.min, rect.max),
            Primitive2D::Line(line) => {
                let mut bbox = BBox2::empty();
                bbox.include_point(line.a);
                bbox.include_point(line.b);
                bbox
            }
        }
    }

    pub fn points(&self) -> Vec<Vec2> {
        match self {
            Primitive2D::Curve(curve) => curve.points.clone(),
            Primitive2D::Rect(rect) => vec![rect.min, rect.max],
            Primitive2D::Line(line) => vec![line.a, line.b],
        }
    }

    pub fn map_points(&self, f: impl Fn(Vec2) -> Vec2) -> Self {
        match self {
            Primitive2D::Curve(curve) => Primitive2D::Curve(Curve2D {
                points: curve.points.iter().map(|p| f(*p)).collect(),
            }),
            Primitive2D::Rect(rect) => Primitive2D::Rect(Rect2D::from_corners(f(rect.min), f(rect.max))),
            Primitive2D::Line(line) => Primitive2D::Line(LineSeg2D {
                a: f(line.a),
                b: f(line.b),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    pub feature: Feature,
    pub primitive: Primitive2D,
    pub style: MarkStyle,
}

impl Mark {
    pub fn bbox(&self) -> BBox2 {
        self.primitive.bbox()
    }

    pub fn is_closed_fill(&self) -> bool {
        matches!(self.primitive, Primitive2D::Curve(_)) && self.style.fill.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RinkDiagram {
    pub region: Region,
    pub orientation: Orientation,
    pub axes: AxisConfig,
    /// Paint order: later marks draw over earlier ones.
    pub marks: Vec<Mark>,
}

impl RinkDiagram {
    pub fn extents(&self) -> Option<BBox2> {
        let mut bbox = BBox2::empty();
        let mut any = false;
        for m in &self.marks {
            bbox = bbox.union(&m.bbox());
            any = true;
        }
        if any { Some(bbox) } else { None }
    }

    pub fn marks_of(&self, feature: Feature) -> impl Iterator<Item = &Mark> {
        self.marks.iter().filter(move |m| m.feature == feature)
    }
}
