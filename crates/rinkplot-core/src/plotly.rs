use crate::canvas::Canvas;
use crate::layout::{AxisConfig, AxisRange};
use crate::model::{Mark, Primitive2D, RinkDiagram};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: String,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub mode: &'static str,
    pub line: LineStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fillcolor: Option<String>,
    pub showlegend: bool,
    pub hoverinfo: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub xref: &'static str,
    pub yref: &'static str,
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub line: LineStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fillcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    pub name: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLayout {
    pub range: [f64; 2],
    pub showgrid: bool,
    pub zeroline: bool,
    pub showticklabels: bool,
    pub constrain: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaleanchor: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaleratio: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub xaxis: AxisLayout,
    pub yaxis: AxisLayout,
    pub shapes: Vec<Shape>,
    pub showlegend: bool,
    pub autosize: bool,
    pub template: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotlyFigure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Default for PlotlyFigure {
    fn default() -> Self {
        let axis = |r: AxisRange| AxisLayout {
            range: [r.min, r.max],
            showgrid: false,
            zeroline: false,
            showticklabels: false,
            constrain: "domain",
            scaleanchor: None,
            scaleratio: None,
        };
        Self {
            data: Vec::new(),
            layout: Layout {
                xaxis: axis(AxisRange::new(0.0, 1.0)),
                yaxis: axis(AxisRange::new(0.0, 1.0)),
                shapes: Vec::new(),
                showlegend: false,
                autosize: true,
                template: "plotly_white",
            },
        }
    }
}

impl PlotlyFigure {
    pub fn from_diagram(diagram: &RinkDiagram) -> Self {
        let mut fig = Self::default();
        diagram.render_to(&mut fig);
        fig
    }

    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    pub fn to_json_string_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Canvas for PlotlyFigure {
    fn configure_axes(&mut self, axes: &AxisConfig) {
        let layout = &mut self.layout;
        layout.xaxis.range = [axes.x.min, axes.x.max];
        layout.yaxis.range = [axes.y.min, axes.y.max];
        layout.xaxis.showgrid = axes.show_grid;
        layout.yaxis.showgrid = axes.show_grid;
        layout.xaxis.showticklabels = axes.show_ticks;
        layout.yaxis.showticklabels = axes.show_ticks;
        layout.yaxis.scaleanchor = Some("x");
        layout.yaxis.scaleratio = Some(axes.scale_ratio);
    }

    fn draw(&mut self, mark: &Mark) {
        let line = LineStyle {
            color: mark.style.stroke.color.css(),
            width: mark.style.stroke.width,
        };
        let name = mark.feature.name();
        match &mark.primitive {
            Primitive2D::Curve(curve) => {
                let fill = mark.style.fill;
                self.data.push(Trace {
                    kind: "scatter",
                    x: curve.points.iter().map(|p| p.x).collect(),
                    y: curve.points.iter().map(|p| p.y).collect(),
                    mode: "lines",
                    line,
                    fill: fill.map(|_| "toself"),
                    fillcolor: fill.map(|f| f.effective_color().css()),
                    showlegend: false,
                    hoverinfo: "skip",
                    name,
                });
            }
            Primitive2D::Rect(rect) => {
                let fill = mark.style.fill;
                self.layout.shapes.push(Shape {
                    kind: "rect",
                    xref: "x",
                    yref: "y",
                    x0: rect.min.x,
                    y0: rect.min.y,
                    x1: rect.max.x,
                    y1: rect.max.y,
                    line,
                    fillcolor: fill.map(|f| f.color.css()),
                    opacity: fill.map(|f| f.opacity),
                    name,
                });
            }
            Primitive2D::Line(seg) => {
                self.layout.shapes.push(Shape {
                    kind: "line",
                    xref: "x",
                    yref: "y",
                    x0: seg.a.x,
                    y0: seg.a.y,
                    x1: seg.b.x,
                    y1: seg.b.y,
                    line,
                    fillcolor: None,
                    opacity: None,
                    name,
                });
            }
        }
    }
}
