use rinkplot_core::layout::{resolve_layout, Axis, AxisRange, Orientation, Region};
use rinkplot_core::RinkError;

#[test]
fn offensive_zone_vertical_puts_length_on_y() {
    let axes = resolve_layout(Region::OffensiveZone, Orientation::Vertical).unwrap();
    assert_eq!(AxisRange::new(25.0, 101.0), axes.y);
    assert_eq!(AxisRange::new(-42.6, 42.6), axes.x);
    assert_eq!(Axis::Y, axes.length_axis);
    assert_eq!(1.0, axes.scale_ratio);
    assert!(!axes.show_grid);
    assert!(!axes.show_ticks);
}

#[test]
fn horizontal_puts_length_on_x() {
    let expected = [
        (Region::Full, -101.0, 101.0),
        (Region::OffensiveHalf, 0.0, 101.0),
        (Region::OffensiveZone, 25.0, 101.0),
        (Region::DefensiveHalf, -101.0, 0.0),
        (Region::DefensiveZone, -101.0, -25.0),
    ];
    for (region, min, max) in expected {
        let axes = resolve_layout(region, Orientation::Horizontal).unwrap();
        assert_eq!(AxisRange::new(min, max), axes.x, "{region}");
        assert_eq!(AxisRange::new(-42.6, 42.6), axes.y, "{region}");
        assert_eq!(axes.x, axes.length_range());
        assert_eq!(axes.y, axes.width_range());
    }
}

#[test]
fn neutral_zone_is_vertical_only() {
    let axes = resolve_layout(Region::NeutralZone, Orientation::Vertical).unwrap();
    assert_eq!(AxisRange::new(-25.0, 25.0), axes.y);

    let err = resolve_layout(Region::NeutralZone, Orientation::Horizontal).unwrap_err();
    assert_eq!(
        RinkError::UnsupportedRegion {
            region: Region::NeutralZone,
            orientation: Orientation::Horizontal,
        },
        err
    );
}

#[test]
fn parses_legacy_tags_and_long_names() {
    assert_eq!(Region::OffensiveZone, "ozone".parse().unwrap());
    assert_eq!(Region::OffensiveZone, "offensive_zone".parse().unwrap());
    assert_eq!(Region::DefensiveHalf, "Defense".parse().unwrap());
    assert_eq!(Region::NeutralZone, " neutral ".parse().unwrap());
    assert_eq!(Orientation::Vertical, "vertical".parse().unwrap());
    assert_eq!(Orientation::Horizontal, "H".parse().unwrap());
    assert_eq!(Orientation::Vertical, Orientation::from_vertical(true));
    assert_eq!(Orientation::Horizontal, Orientation::from_vertical(false));

    for region in Region::ALL {
        assert_eq!(region, region.tag().parse().unwrap());
    }
}

#[test]
fn rejects_unknown_names() {
    assert_eq!(
        RinkError::InvalidRegion("blah".to_string()),
        "blah".parse::<Region>().unwrap_err()
    );
    assert!(matches!(
        "sideways".parse::<Orientation>(),
        Err(RinkError::InvalidOrientation(_))
    ));
}
