use anyhow::{ensure, Context, Result};
use rinkplot_core::geom::Vec2;
use rinkplot_core::layout::AxisConfig;
use rinkplot_core::model::{Mark, Primitive2D, RinkDiagram};
use rinkplot_core::style::Rgba;
use rinkplot_core::Canvas;
use svg::node::element::path::Data;
use svg::node::element::{Group, Line, Path as SvgPath, Rectangle};
use svg::{Document, Node};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct SvgOptions {
    /// Output size per rink foot; the viewBox stays in feet.
    pub pixels_per_foot: f64,
    pub background: Option<Rgba>,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            pixels_per_foot: 5.0,
            background: Some(Rgba::rgb(255, 255, 255)),
        }
    }
}

/// Canvas that paints into an SVG document. Chart y points up, SVG y points
/// down, so every y is negated on the way out.
pub struct SvgCanvas {
    opts: SvgOptions,
    document: Document,
    marks: Group,
}

impl SvgCanvas {
    pub fn new(opts: SvgOptions) -> Self {
        Self {
            opts,
            document: Document::new(),
            marks: Group::new().set("id", "rink"),
        }
    }

    pub fn finish(self) -> Document {
        self.document.add(self.marks)
    }
}

impl Canvas for SvgCanvas {
    fn configure_axes(&mut self, axes: &AxisConfig) {
        let (x0, w) = (axes.x.min, axes.x.span());
        let (y0, h) = (-axes.y.max, axes.y.span());
        let scale = self.opts.pixels_per_foot;
        let mut doc = Document::new()
            .set("viewBox", format!("{} {} {} {}", num(x0), num(y0), num(w), num(h)))
            .set("width", num(w * scale))
            // The ratio below assumes axes.scale_ratio == 1.
            .set("height", num(h * scale * axes.scale_ratio))
            .set("preserveAspectRatio", "xMidYMid meet");
        if let Some(bg) = self.opts.background {
            doc = doc.add(
                Rectangle::new()
                    .set("x", num(x0))
                    .set("y", num(y0))
                    .set("width", num(w))
                    .set("height", num(h))
                    .set("fill", bg.css()),
            );
        }
        self.document = doc;
    }

    fn draw(&mut self, mark: &Mark) {
        let stroke = &mark.style.stroke;
        let fill = mark.style.fill;
        match &mark.primitive {
            Primitive2D::Curve(curve) => {
                let Some(data) = path_data(&curve.points, fill.is_some()) else {
                    return;
                };
                let path = SvgPath::new()
                    .set("d", data)
                    .set("class", mark.feature.name())
                    .set("stroke", stroke.color.css())
                    .set("stroke-width", num(stroke.width))
                    .set("vector-effect", "non-scaling-stroke")
                    .set("stroke-linejoin", "round");
                let path = match fill {
                    Some(f) => path.set("fill", f.effective_color().css()),
                    None => path.set("fill", "none"),
                };
                self.marks.append(path);
            }
            Primitive2D::Rect(rect) => {
                let r = Rectangle::new()
                    .set("x", num(rect.min.x))
                    .set("y", num(-rect.max.y))
                    .set("width", num(rect.max.x - rect.min.x))
                    .set("height", num(rect.max.y - rect.min.y))
                    .set("class", mark.feature.name())
                    .set("stroke", stroke.color.css())
                    .set("stroke-width", num(stroke.width))
                    .set("vector-effect", "non-scaling-stroke");
                let r = match fill {
                    Some(f) => r.set("fill", f.color.css()).set("fill-opacity", num(f.opacity)),
                    None => r.set("fill", "none"),
                };
                self.marks.append(r);
            }
            Primitive2D::Line(seg) => {
                self.marks.append(
                    Line::new()
                        .set("x1", num(seg.a.x))
                        .set("y1", num(-seg.a.y))
                        .set("x2", num(seg.b.x))
                        .set("y2", num(-seg.b.y))
                        .set("class", mark.feature.name())
                        .set("stroke", stroke.color.css())
                        .set("stroke-width", num(stroke.width))
                        .set("vector-effect", "non-scaling-stroke"),
                );
            }
        }
    }
}

pub fn render_svg(diagram: &RinkDiagram, opts: &SvgOptions) -> Document {
    let mut canvas = SvgCanvas::new(opts.clone());
    diagram.render_to(&mut canvas);
    canvas.finish()
}

pub fn save_svg(path: &Path, diagram: &RinkDiagram, opts: &SvgOptions) -> Result<()> {
    ensure!(
        opts.pixels_per_foot.is_finite() && opts.pixels_per_foot > 0.0,
        "pixels per foot must be positive, got {}",
        opts.pixels_per_foot
    );
    let doc = render_svg(diagram, opts);
    svg::save(path, &doc).with_context(|| format!("write SVG: {path:?}"))
}

fn path_data(points: &[Vec2], closed: bool) -> Option<Data> {
    let (first, rest) = points.split_first()?;
    let mut data = Data::new().move_to((coord(first.x), coord(-first.y)));
    for p in rest {
        data = data.line_to((coord(p.x), coord(-p.y)));
    }
    if closed {
        data = data.close();
    }
    Some(data)
}

// Path coordinates get the same 4-decimal rounding as `num`.
fn coord(v: f64) -> f32 {
    ((v * 1e4).round() / 1e4 + 0.0) as f32
}

/// Compact decimal form: no trailing zeros, `-0` folded to `0`.
fn num(v: f64) -> String {
    let s = format!("{v:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" | "" => "0".to_string(),
        s => s.to_string(),
    }
}
