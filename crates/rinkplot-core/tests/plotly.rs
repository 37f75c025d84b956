use rinkplot_core::plotly::PlotlyFigure;
use rinkplot_core::report::DiagramSummary;
use rinkplot_core::{build_rink, Feature, Orientation, Region};

#[test]
fn curves_become_traces_and_the_rest_shapes() {
    let rink = build_rink(Region::Full, Orientation::Horizontal).unwrap();
    let fig = PlotlyFigure::from_diagram(&rink);
    assert_eq!(14, fig.data.len());
    assert_eq!(7, fig.layout.shapes.len());

    let kinds: Vec<&str> = fig.layout.shapes.iter().map(|s| s.kind).collect();
    assert_eq!(vec!["rect", "rect", "rect", "line", "line", "line", "line"], kinds);
    let names: Vec<&str> = fig.data.iter().map(|t| t.name).collect();
    assert_eq!(["center_circle", "referee_arc", "boards", "boards"], names[..4]);
}

#[test]
fn layout_locks_the_aspect_ratio() {
    let rink = build_rink(Region::OffensiveZone, Orientation::Vertical).unwrap();
    let json = PlotlyFigure::from_diagram(&rink).to_json().unwrap();

    let layout = &json["layout"];
    assert_eq!(serde_json::json!([-42.6, 42.6]), layout["xaxis"]["range"]);
    assert_eq!(serde_json::json!([25.0, 101.0]), layout["yaxis"]["range"]);
    assert_eq!("x", layout["yaxis"]["scaleanchor"]);
    assert_eq!(1.0, layout["yaxis"]["scaleratio"]);
    assert_eq!(false, layout["xaxis"]["showgrid"]);
    assert_eq!(false, layout["yaxis"]["showticklabels"]);
    assert_eq!("plotly_white", layout["template"]);
}

#[test]
fn filled_curves_close_to_self() {
    let rink = build_rink(Region::Full, Orientation::Horizontal).unwrap();
    let json = PlotlyFigure::from_diagram(&rink).to_json().unwrap();
    let traces = json["data"].as_array().unwrap();

    let crease = traces.iter().find(|t| t["name"] == "crease").unwrap();
    assert_eq!("toself", crease["fill"]);
    assert_eq!("rgba(173, 216, 230, 0.3)", crease["fillcolor"]);
    assert_eq!("rgba(255, 0, 0, 1)", crease["line"]["color"]);
    assert_eq!(102, crease["x"].as_array().unwrap().len());

    let circle = traces.iter().find(|t| t["name"] == "center_circle").unwrap();
    assert!(circle.get("fill").is_none());
    assert_eq!("skip", circle["hoverinfo"]);
    assert_eq!(false, circle["showlegend"]);

    let shapes = json["layout"]["shapes"].as_array().unwrap();
    let blue = shapes.iter().find(|s| s["name"] == "blue_line").unwrap();
    assert_eq!("rect", blue["type"]);
    assert_eq!("rgba(65, 105, 225, 1)", blue["fillcolor"]);
    assert_eq!(1.0, blue["opacity"]);
    assert_eq!(25.0, blue["x0"]);
    assert_eq!(26.0, blue["x1"]);
}

#[test]
fn summary_counts_marks_per_feature() {
    let rink = build_rink(Region::DefensiveHalf, Orientation::Vertical).unwrap();
    let summary = DiagramSummary::of(&rink);
    assert_eq!(21, summary.stats.marks_total);
    assert_eq!(14, summary.stats.curves);
    assert_eq!(3, summary.stats.rects);
    assert_eq!(4, summary.stats.lines);

    let count = |feature: Feature| {
        summary
            .features
            .iter()
            .find(|f| f.feature == feature)
            .map(|f| f.marks)
    };
    assert_eq!(Some(4), count(Feature::Boards));
    assert_eq!(Some(4), count(Feature::FaceoffDot));
    assert_eq!(Some(1), count(Feature::RefereeArc));
    assert_eq!(Feature::ALL.len(), summary.features.len());

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!("defensive_half", json["region"]);
    assert_eq!("vertical", json["orientation"]);
}
