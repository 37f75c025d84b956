use anyhow::{Context, Result};
use eframe::egui;
use log::{info, warn};
use rinkplot_core::geom::Vec2 as RinkVec2;
use rinkplot_core::layout::AxisConfig;
use rinkplot_core::model::{Mark, Primitive2D};
use rinkplot_core::plotly::PlotlyFigure;
use rinkplot_core::style::Rgba;
use rinkplot_core::{Orientation, Region, Rink, RinkDiagram};
use rinkplot_export_svg::{save_svg, SvgOptions};
use std::path::{Path, PathBuf};

fn main() -> eframe::Result {
    env_logger::init();
    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "rinkplot",
        native_options,
        Box::new(|cc| Ok(Box::new(RinkViewerApp::new(cc)))),
    )
}

struct RinkViewerApp {
    region: Region,
    orientation: Orientation,
    diagram: Option<RinkDiagram>,

    last_export: Option<PathBuf>,

    zoom: f32,
    pan: egui::Vec2,

    status: String,
}

impl RinkViewerApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self {
            region: Region::Full,
            orientation: Orientation::Horizontal,
            diagram: None,
            last_export: None,
            zoom: 1.0,
            pan: egui::Vec2::ZERO,
            status: String::new(),
        };
        app.rebuild();
        app
    }

    fn rebuild(&mut self) {
        match Rink::new(self.region, self.orientation).diagram() {
            Ok(diagram) => {
                self.status = format!(
                    "{} rink, {}: {} marks",
                    diagram.region,
                    diagram.orientation,
                    diagram.marks.len()
                );
                self.diagram = Some(diagram);
            }
            Err(e) => {
                warn!("{e}");
                self.status = e.to_string();
                self.diagram = None;
            }
        }
        self.zoom = 1.0;
        self.pan = egui::Vec2::ZERO;
    }

    fn export_svg(&mut self) {
        let Some(diagram) = &self.diagram else {
            self.status = "Nothing to export.".to_string();
            return;
        };
        let file = rfd::FileDialog::new()
            .add_filter("SVG", &["svg"])
            .set_file_name(format!("rink-{}-{}.svg", diagram.region, diagram.orientation))
            .save_file();
        let Some(path) = file else {
            return;
        };
        let result = save_svg(&path, diagram, &SvgOptions::default());
        self.finish_export(path, result);
    }

    fn export_plotly(&mut self) {
        let Some(diagram) = &self.diagram else {
            self.status = "Nothing to export.".to_string();
            return;
        };
        let file = rfd::FileDialog::new()
            .add_filter("Plotly figure", &["json"])
            .set_file_name(format!("rink-{}-{}.json", diagram.region, diagram.orientation))
            .save_file();
        let Some(path) = file else {
            return;
        };
        let result = write_plotly(&path, diagram);
        self.finish_export(path, result);
    }

    fn finish_export(&mut self, path: PathBuf, result: Result<()>) {
        match result {
            Ok(()) => {
                info!("exported {}", path.display());
                self.status = format!("Wrote {}", path.display());
                self.last_export = Some(path);
            }
            Err(e) => {
                self.status = format!("Failed to write {}: {e:#}", path.display());
            }
        }
    }
}

impl eframe::App for RinkViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let (region, orientation) = (self.region, self.orientation);

                egui::ComboBox::from_label("Region")
                    .selected_text(self.region.tag())
                    .show_ui(ui, |ui| {
                        for r in Region::ALL {
                            ui.selectable_value(&mut self.region, r, r.tag());
                        }
                    });
                egui::ComboBox::from_label("Orientation")
                    .selected_text(self.orientation.name())
                    .show_ui(ui, |ui| {
                        for o in Orientation::ALL {
                            ui.selectable_value(&mut self.orientation, o, o.name());
                        }
                    });

                if (region, orientation) != (self.region, self.orientation) {
                    self.rebuild();
                }

                ui.separator();
                let can_export = self.diagram.is_some();
                if ui.add_enabled(can_export, egui::Button::new("Export SVG…")).clicked() {
                    self.export_svg();
                }
                if ui
                    .add_enabled(can_export, egui::Button::new("Export Plotly JSON…"))
                    .clicked()
                {
                    self.export_plotly();
                }
                if ui.button("Reset view").clicked() {
                    self.zoom = 1.0;
                    self.pan = egui::Vec2::ZERO;
                }
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.status);
                if let Some(p) = &self.last_export {
                    if ui.button("Open").clicked() {
                        let _ = open::that(p);
                    }
                    if ui.button("Copy path").clicked() {
                        ui.ctx().copy_text(p.display().to_string());
                    }
                }
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(egui::Color32::WHITE))
            .show(ctx, |ui| draw_rink(ui, self));
    }
}

fn draw_rink(ui: &mut egui::Ui, app: &mut RinkViewerApp) {
    let Some(diagram) = &app.diagram else {
        ui.label("No diagram for this region and orientation.");
        return;
    };

    let (rect, response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::drag());
    let painter = ui.painter_at(rect);

    if response.dragged() {
        app.pan += response.drag_delta();
    }
    if response.hovered() {
        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll.abs() > 0.0 {
            let factor = (scroll / 200.0).exp();
            app.zoom = (app.zoom * factor).clamp(0.5, 20.0);
        }
    }

    let transform = WorldToScreen::new(rect, &diagram.axes, app.pan, app.zoom);
    for mark in &diagram.marks {
        draw_mark(&painter, &transform, mark);
    }
}

fn write_plotly(path: &Path, diagram: &RinkDiagram) -> Result<()> {
    let json = PlotlyFigure::from_diagram(diagram)
        .to_json_string_pretty()
        .context("serialize plotly figure")?;
    std::fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

fn color(c: Rgba) -> egui::Color32 {
    let a = (c.a.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, a)
}

/// Maps the diagram's axis ranges onto the panel with one scale for both
/// axes, so a rink foot is square on screen.
#[derive(Debug, Clone, Copy)]
struct WorldToScreen {
    rect: egui::Rect,
    center: RinkVec2,
    scale: f32,
    pan: egui::Vec2,
}

impl WorldToScreen {
    fn new(rect: egui::Rect, axes: &AxisConfig, pan: egui::Vec2, zoom: f32) -> Self {
        let center = RinkVec2::new(
            (axes.x.min + axes.x.max) * 0.5,
            (axes.y.min + axes.y.max) * 0.5,
        );
        let world_w = axes.x.span().max(1e-6) as f32;
        let world_h = (axes.y.span() / axes.scale_ratio).max(1e-6) as f32;
        let sx = rect.width() / world_w;
        let sy = rect.height() / world_h;
        let scale = (sx.min(sy) * 0.95).max(1e-3) * zoom;
        Self {
            rect,
            center,
            scale,
            pan,
        }
    }

    fn point(&self, p: RinkVec2) -> egui::Pos2 {
        let dx = (p.x - self.center.x) as f32;
        let dy = (p.y - self.center.y) as f32;
        let x = self.rect.center().x + self.pan.x + dx * self.scale;
        let y = self.rect.center().y + self.pan.y - dy * self.scale;
        egui::pos2(x, y)
    }

    fn rect(&self, min: RinkVec2, max: RinkVec2) -> egui::Rect {
        let p0 = self.point(min);
        let p1 = self.point(max);
        egui::Rect::from_min_max(
            egui::pos2(p0.x.min(p1.x), p0.y.min(p1.y)),
            egui::pos2(p0.x.max(p1.x), p0.y.max(p1.y)),
        )
    }
}

fn draw_mark(painter: &egui::Painter, tx: &WorldToScreen, mark: &Mark) {
    let stroke = egui::Stroke::new(
        mark.style.stroke.width as f32,
        color(mark.style.stroke.color),
    );
    match &mark.primitive {
        Primitive2D::Curve(curve) => {
            let pts = curve.points.iter().map(|p| tx.point(*p)).collect::<Vec<_>>();
            match mark.style.fill {
                // egui only fills convex paths; other fills fall back to the outline.
                Some(fill) if is_convex(&pts) => {
                    painter.add(egui::Shape::convex_polygon(
                        pts,
                        color(fill.effective_color()),
                        stroke,
                    ));
                }
                Some(_) => {
                    painter.add(egui::Shape::Path(egui::epaint::PathShape::closed_line(
                        pts, stroke,
                    )));
                }
                None => {
                    painter.add(egui::Shape::line(pts, stroke));
                }
            }
        }
        Primitive2D::Rect(r) => {
            let screen = tx.rect(r.min, r.max);
            if let Some(fill) = mark.style.fill {
                painter.rect_filled(screen, egui::CornerRadius::ZERO, color(fill.effective_color()));
            }
            painter.rect_stroke(
                screen,
                egui::CornerRadius::ZERO,
                stroke,
                egui::StrokeKind::Middle,
            );
        }
        Primitive2D::Line(l) => {
            painter.line_segment([tx.point(l.a), tx.point(l.b)], stroke);
        }
    }
}

fn is_convex(pts: &[egui::Pos2]) -> bool {
    let n = pts.len();
    if n < 4 {
        return true;
    }
    let mut sign = 0.0f32;
    for i in 0..n {
        let (a, b, c) = (pts[i], pts[(i + 1) % n], pts[(i + 2) % n]);
        let cross = (b - a).x * (c - b).y - (b - a).y * (c - b).x;
        if cross.abs() <= f32::EPSILON {
            continue;
        }
        if sign == 0.0 {
            sign = cross.signum();
        } else if cross.signum() != sign {
            return false;
        }
    }
    true
}
