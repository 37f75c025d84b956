use crate::geom::{linspace, RinkPoint};
use crate::layout::Orientation;
use crate::model::{Curve2D, LineSeg2D, Mark, Primitive2D, Rect2D};
use crate::style::{Feature, StyleTable};
use std::f64::consts::{FRAC_PI_2, TAU};

pub const HALF_WIDTH: f64 = 42.5;
pub const CORNER_RADIUS: f64 = 28.0;
pub const GOAL_LINE: f64 = 89.0;
pub const BLUE_LINE: f64 = 25.0;
pub const CIRCLE_RADIUS: f64 = 15.0;
pub const REFEREE_ARC_RADIUS: f64 = 10.0;
pub const FACEOFF_DOT_RADIUS: f64 = 1.0;

pub const CIRCLE_SAMPLES: usize = 300;
pub const CREASE_SAMPLES: usize = 100;
pub const CORNER_SAMPLES: usize = 20;

const CORNER_START: f64 = 72.0;
const SIDE_BOARD_HALF_LENGTH: f64 = 72.5;
const BOARD_RUN_START: f64 = 15.0;
const GOAL_LINE_INSET: f64 = 11.0;
const CREASE_DEPTH: f64 = 83.0;
const CREASE_HALF_WIDTH: f64 = 4.0;
const CREASE_BULGE: f64 = 1.5;

/// Faceoff spots in the end zones, as (length, width).
pub const FACEOFF_SPOTS: [RinkPoint; 4] = [
    RinkPoint::new(69.0, -22.0),
    RinkPoint::new(69.0, 22.0),
    RinkPoint::new(-69.0, -22.0),
    RinkPoint::new(-69.0, 22.0),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum End {
    Positive,
    Negative,
}

impl End {
    pub fn sign(self) -> f64 {
        match self {
            End::Positive => 1.0,
            End::Negative => -1.0,
        }
    }
}

pub fn goal_line_extent() -> f64 {
    let rise = CORNER_RADIUS - GOAL_LINE_INSET;
    HALF_WIDTH - CORNER_RADIUS + (CORNER_RADIUS * CORNER_RADIUS - rise * rise).sqrt()
}

fn curve(
    feature: Feature,
    orientation: Orientation,
    styles: &StyleTable,
    points: impl IntoIterator<Item = RinkPoint>,
) -> Mark {
    Mark {
        feature,
        primitive: Primitive2D::Curve(Curve2D {
            points: points.into_iter().map(|p| orientation.place(p)).collect(),
        }),
        style: *styles.get(feature),
    }
}

fn rect(
    feature: Feature,
    orientation: Orientation,
    styles: &StyleTable,
    p: RinkPoint,
    q: RinkPoint,
) -> Mark {
    Mark {
        feature,
        primitive: Primitive2D::Rect(Rect2D::from_corners(orientation.place(p), orientation.place(q))),
        style: *styles.get(feature),
    }
}

fn line(
    feature: Feature,
    orientation: Orientation,
    styles: &StyleTable,
    a: RinkPoint,
    b: RinkPoint,
) -> Mark {
    Mark {
        feature,
        primitive: Primitive2D::Line(LineSeg2D {
            a: orientation.place(a),
            b: orientation.place(b),
        }),
        style: *styles.get(feature),
    }
}

fn circle_points(center: RinkPoint, radius: f64) -> impl Iterator<Item = RinkPoint> {
    linspace(0.0, TAU, CIRCLE_SAMPLES).into_iter().map(move |a| {
        RinkPoint::new(center.length + radius * a.cos(), center.width + radius * a.sin())
    })
}

pub fn boundary_markings(orientation: Orientation, styles: &StyleTable) -> [Mark; 3] {
    let blue = |near: f64, far: f64| {
        rect(
            Feature::BlueLine,
            orientation,
            styles,
            RinkPoint::new(near, -HALF_WIDTH),
            RinkPoint::new(far, HALF_WIDTH),
        )
    };
    [
        blue(BLUE_LINE, BLUE_LINE + 1.0),
        blue(-BLUE_LINE, -BLUE_LINE - 1.0),
        rect(
            Feature::CenterLine,
            orientation,
            styles,
            RinkPoint::new(-0.5, -HALF_WIDTH),
            RinkPoint::new(0.5, HALF_WIDTH),
        ),
    ]
}

pub fn center_circles(orientation: Orientation, styles: &StyleTable) -> [Mark; 2] {
    let outer = curve(
        Feature::CenterCircle,
        orientation,
        styles,
        circle_points(RinkPoint::new(0.0, 0.0), CIRCLE_RADIUS),
    );

    let arc = linspace(-FRAC_PI_2, FRAC_PI_2, CIRCLE_SAMPLES)
        .into_iter()
        .map(|a| {
            RinkPoint::new(
                REFEREE_ARC_RADIUS * a.sin(),
                -HALF_WIDTH + REFEREE_ARC_RADIUS * a.cos(),
            )
        });
    let inner = curve(Feature::RefereeArc, orientation, styles, arc);

    [outer, inner]
}

pub fn goal_crease(end: End, orientation: Orientation, styles: &StyleTable) -> Mark {
    let s = end.sign();
    let bulge = linspace(-CREASE_HALF_WIDTH, CREASE_HALF_WIDTH, CREASE_SAMPLES)
        .into_iter()
        .map(move |t| {
            let depth = CREASE_DEPTH + t * t / (CREASE_HALF_WIDTH * CREASE_HALF_WIDTH) * CREASE_BULGE;
            RinkPoint::new(s * depth, t)
        });

    let points = std::iter::once(RinkPoint::new(s * GOAL_LINE, -CREASE_HALF_WIDTH))
        .chain(bulge)
        .chain(std::iter::once(RinkPoint::new(s * GOAL_LINE, CREASE_HALF_WIDTH)));

    curve(Feature::Crease, orientation, styles, points)
}

pub fn goal_lines(orientation: Orientation, styles: &StyleTable) -> [Mark; 2] {
    let e = goal_line_extent();
    let at = |length: f64| {
        line(
            Feature::GoalLine,
            orientation,
            styles,
            RinkPoint::new(length, -e),
            RinkPoint::new(length, e),
        )
    };
    [at(GOAL_LINE), at(-GOAL_LINE)]
}

pub fn sidelines(orientation: Orientation, styles: &StyleTable) -> [Mark; 4] {
    let angles = linspace(0.0, FRAC_PI_2, CORNER_SAMPLES);

    let end_boards = |end: End| {
        let s = end.sign();
        let first_corner = angles.iter().map(move |&a| {
            RinkPoint::new(
                s * (CORNER_START + CORNER_RADIUS * a.sin()),
                -HALF_WIDTH + CORNER_RADIUS - CORNER_RADIUS * a.cos(),
            )
        });
        let second_corner = angles.iter().rev().map(move |&a| {
            RinkPoint::new(
                s * (CORNER_START + CORNER_RADIUS * a.sin()),
                HALF_WIDTH - CORNER_RADIUS + CORNER_RADIUS * a.cos(),
            )
        });
        let points = std::iter::once(RinkPoint::new(s * BOARD_RUN_START, -HALF_WIDTH))
            .chain(first_corner)
            .chain(second_corner);
        curve(Feature::Boards, orientation, styles, points)
    };

    let side = |width: f64| {
        line(
            Feature::Boards,
            orientation,
            styles,
            RinkPoint::new(-SIDE_BOARD_HALF_LENGTH, width),
            RinkPoint::new(SIDE_BOARD_HALF_LENGTH, width),
        )
    };

    [
        end_boards(End::Positive),
        end_boards(End::Negative),
        side(-HALF_WIDTH),
        side(HALF_WIDTH),
    ]
}

pub fn faceoff_circle(center: RinkPoint, orientation: Orientation, styles: &StyleTable) -> [Mark; 2] {
    [
        curve(
            Feature::FaceoffCircle,
            orientation,
            styles,
            circle_points(center, CIRCLE_RADIUS),
        ),
        curve(
            Feature::FaceoffDot,
            orientation,
            styles,
            circle_points(center, FACEOFF_DOT_RADIUS),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_arc_joins_the_boards() {
        let styles = StyleTable::default();
        let [end, ..] = sidelines(Orientation::Horizontal, &styles);
        let Primitive2D::Curve(c) = end.primitive else {
            panic!("end boards should be a curve");
        };
        // Start of the first arc sits on the bottom boards, the end of the
        // second arc on the top boards.
        assert_eq!(-HALF_WIDTH, c.points[1].y);
        assert!((c.points[40].y - HALF_WIDTH).abs() < 1e-9);
        assert!((c.points[20].x - (CORNER_START + CORNER_RADIUS)).abs() < 1e-9);
    }

    #[test]
    fn referee_arc_bulges_toward_the_ice() {
        let styles = StyleTable::default();
        let [_, arc] = center_circles(Orientation::Horizontal, &styles);
        let pts = arc.primitive.points();
        assert!(pts.iter().all(|p| p.y >= -HALF_WIDTH - 1e-9));
        let deepest = pts.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        assert!((deepest - (-HALF_WIDTH + REFEREE_ARC_RADIUS)).abs() < 1e-3);
    }
}
