use crate::geom::BBox2;
use crate::layout::{AxisConfig, Orientation, Region};
use crate::model::{Primitive2D, RinkDiagram};
use crate::style::Feature;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureReport {
    pub feature: Feature,
    pub marks: usize,
    pub points: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsReport {
    pub marks_total: usize,
    pub curves: usize,
    pub rects: usize,
    pub lines: usize,
    pub points_total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagramSummary {
    pub region: Region,
    pub orientation: Orientation,
    pub axes: AxisConfig,
    pub stats: StatsReport,
    pub features: Vec<FeatureReport>,
    pub extents: Option<BBox2>,
}

impl DiagramSummary {
    pub fn of(diagram: &RinkDiagram) -> Self {
        let mut stats = StatsReport {
            marks_total: diagram.marks.len(),
            curves: 0,
            rects: 0,
            lines: 0,
            points_total: 0,
        };
        for m in &diagram.marks {
            match m.primitive {
                Primitive2D::Curve(_) => stats.curves += 1,
                Primitive2D::Rect(_) => stats.rects += 1,
                Primitive2D::Line(_) => stats.lines += 1,
            }
            stats.points_total += m.primitive.points().len();
        }

        let features = Feature::ALL
            .iter()
            .map(|&feature| {
                let (marks, points) = diagram
                    .marks_of(feature)
                    .fold((0, 0), |(n, p), m| (n + 1, p + m.primitive.points().len()));
                FeatureReport {
                    feature,
                    marks,
                    points,
                }
            })
            .filter(|f| f.marks > 0)
            .collect();

        Self {
            region: diagram.region,
            orientation: diagram.orientation,
            axes: diagram.axes.clone(),
            stats,
            features,
            extents: diagram.extents(),
        }
    }
}
