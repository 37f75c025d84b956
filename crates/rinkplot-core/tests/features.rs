use approx::{assert_abs_diff_eq, assert_relative_eq};
use rinkplot_core::features::{
    boundary_markings, center_circles, faceoff_circle, goal_crease, goal_line_extent, goal_lines,
    sidelines, End, FACEOFF_SPOTS,
};
use rinkplot_core::geom::{RinkPoint, Vec2};
use rinkplot_core::model::Primitive2D;
use rinkplot_core::style::{Feature, Rgba};
use rinkplot_core::{Orientation, StyleTable};

const GOAL_LINE_EXTENT: f64 = 36.74859546128699;

#[test]
fn goal_line_extent_meets_corner_boards() {
    assert_relative_eq!(GOAL_LINE_EXTENT, goal_line_extent(), epsilon = 1e-12);
}

#[test]
fn horizontal_goal_lines_sit_at_89() {
    let styles = StyleTable::default();
    let lines = goal_lines(Orientation::Horizontal, &styles);
    let mut xs = Vec::new();
    for mark in &lines {
        assert_eq!(Feature::GoalLine, mark.feature);
        let Primitive2D::Line(seg) = &mark.primitive else {
            panic!("goal line should be a segment");
        };
        assert_eq!(seg.a.x, seg.b.x);
        assert_relative_eq!(-GOAL_LINE_EXTENT, seg.a.y, epsilon = 1e-12);
        assert_relative_eq!(GOAL_LINE_EXTENT, seg.b.y, epsilon = 1e-12);
        xs.push(seg.a.x);
    }
    assert_eq!(vec![89.0, -89.0], xs);
}

#[test]
fn center_line_spans_the_ice() {
    let styles = StyleTable::default();
    for orientation in Orientation::ALL {
        let [_, _, center] = boundary_markings(orientation, &styles);
        assert_eq!(Feature::CenterLine, center.feature);
        assert_eq!(styles.center_line, center.style);
        let Primitive2D::Rect(r) = center.primitive else {
            panic!("center line should be a rect");
        };
        let (length, width) = match orientation {
            Orientation::Horizontal => ((r.min.x, r.max.x), (r.min.y, r.max.y)),
            Orientation::Vertical => ((r.min.y, r.max.y), (r.min.x, r.max.x)),
        };
        assert_eq!((-0.5, 0.5), length);
        assert_eq!((-42.5, 42.5), width);
    }
}

#[test]
fn center_circle_has_radius_15_at_center_ice() {
    let styles = StyleTable::default();
    let [circle, _] = center_circles(Orientation::Horizontal, &styles);
    assert_eq!(Feature::CenterCircle, circle.feature);
    let pts = circle.primitive.points();
    assert_eq!(300, pts.len());
    for p in &pts {
        assert_abs_diff_eq!(15.0, p.x.hypot(p.y), epsilon = 1e-9);
    }
    assert_abs_diff_eq!(15.0, pts[0].x, epsilon = 1e-12);
    assert_abs_diff_eq!(0.0, pts[0].y, epsilon = 1e-12);
}

#[test]
fn crease_closes_on_the_goal_line() {
    let styles = StyleTable::default();
    let crease = goal_crease(End::Positive, Orientation::Vertical, &styles);
    let pts = crease.primitive.points();
    assert_eq!(102, pts.len());
    assert_eq!(Vec2::new(-4.0, 89.0), pts[0]);
    assert_eq!(Vec2::new(4.0, 89.0), pts[101]);
    // Ends of the bulge sit 1.5 ft deeper than its middle.
    assert_abs_diff_eq!(84.5, pts[1].y, epsilon = 1e-12);
    assert_abs_diff_eq!(84.5, pts[100].y, epsilon = 1e-12);
    let shallowest = pts[1..101].iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    assert_abs_diff_eq!(83.0, shallowest, epsilon = 1e-3);

    assert!(crease.is_closed_fill());
    let fill = crease.style.fill.unwrap();
    assert_eq!(Rgba::LIGHT_BLUE, fill.color);
    assert_eq!(0.3, fill.opacity);
    assert_eq!(Rgba::RED, crease.style.stroke.color);
}

#[test]
fn creases_mirror_through_center_ice() {
    let styles = StyleTable::default();
    for orientation in Orientation::ALL {
        let pos = goal_crease(End::Positive, orientation, &styles).primitive.points();
        let neg = goal_crease(End::Negative, orientation, &styles).primitive.points();
        assert_eq!(pos.len(), neg.len());
        for (p, q) in pos.iter().zip(neg.iter().rev()) {
            assert_abs_diff_eq!(p.x, -q.x, epsilon = 1e-9);
            assert_abs_diff_eq!(p.y, -q.y, epsilon = 1e-9);
        }
    }
}

#[test]
fn faceoff_spots_are_point_symmetric() {
    for spot in FACEOFF_SPOTS {
        let mirrored = RinkPoint::new(-spot.length, -spot.width);
        assert!(FACEOFF_SPOTS.contains(&mirrored), "{spot:?}");
    }
}

#[test]
fn faceoff_circles_center_on_the_spot() {
    let styles = StyleTable::default();
    let [outer, dot] = faceoff_circle(RinkPoint::new(69.0, -22.0), Orientation::Vertical, &styles);
    assert_eq!(Feature::FaceoffCircle, outer.feature);
    assert_eq!(Feature::FaceoffDot, dot.feature);
    assert!(outer.style.fill.is_none());
    assert!(dot.is_closed_fill());

    for (mark, radius) in [(&outer, 15.0), (&dot, 1.0)] {
        let pts = mark.primitive.points();
        assert_eq!(300, pts.len());
        for p in &pts {
            let r = ((p.x + 22.0).powi(2) + (p.y - 69.0).powi(2)).sqrt();
            assert_abs_diff_eq!(radius, r, epsilon = 1e-9);
        }
        let c = mark.bbox().center();
        assert_abs_diff_eq!(-22.0, c.x, epsilon = 1e-3);
        assert_abs_diff_eq!(69.0, c.y, epsilon = 1e-3);
    }
}

#[test]
fn boards_close_the_rink() {
    let styles = StyleTable::default();
    let [pos, neg, bottom, top] = sidelines(Orientation::Horizontal, &styles);
    for m in [&pos, &neg, &bottom, &top] {
        assert_eq!(Feature::Boards, m.feature);
        assert_eq!(Rgba::BLACK, m.style.stroke.color);
    }

    let pos_pts = pos.primitive.points();
    assert_eq!(41, pos_pts.len());
    assert_eq!(Vec2::new(15.0, -42.5), pos_pts[0]);
    let far = pos.bbox();
    assert_abs_diff_eq!(100.0, far.max.x, epsilon = 1e-9);
    assert_abs_diff_eq!(-42.5, far.min.y, epsilon = 1e-9);
    assert_abs_diff_eq!(42.5, far.max.y, epsilon = 1e-9);

    let neg_box = neg.bbox();
    assert_abs_diff_eq!(-100.0, neg_box.min.x, epsilon = 1e-9);

    let Primitive2D::Line(b) = &bottom.primitive else {
        panic!("side boards should be segments");
    };
    assert_eq!(Vec2::new(-72.5, -42.5), b.a);
    assert_eq!(Vec2::new(72.5, -42.5), b.b);
    let Primitive2D::Line(t) = &top.primitive else {
        panic!("side boards should be segments");
    };
    assert_eq!(42.5, t.a.y);
}
