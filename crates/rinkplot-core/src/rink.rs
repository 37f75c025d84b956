use crate::canvas::Canvas;
use crate::error::RinkError;
use crate::features::{
    boundary_markings, center_circles, faceoff_circle, goal_crease, goal_lines, sidelines, End,
    FACEOFF_SPOTS,
};
use crate::layout::{resolve_layout, Orientation, Region};
use crate::model::RinkDiagram;
use crate::style::StyleTable;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RinkConfig {
    pub region: Region,
    pub orientation: Orientation,
    pub styles: StyleTable,
}

impl RinkConfig {
    pub fn new(region: Region, orientation: Orientation) -> Self {
        Self {
            region,
            orientation,
            styles: StyleTable::default(),
        }
    }
}

pub fn build_rink(region: Region, orientation: Orientation) -> Result<RinkDiagram, RinkError> {
    build_rink_with(&RinkConfig::new(region, orientation))
}

pub fn build_rink_named(region: &str, orientation: Orientation) -> Result<RinkDiagram, RinkError> {
    build_rink(region.parse()?, orientation)
}

pub fn build_rink_with(cfg: &RinkConfig) -> Result<RinkDiagram, RinkError> {
    let RinkConfig {
        region,
        orientation,
        styles,
    } = cfg;
    let (region, orientation) = (*region, *orientation);

    let axes = resolve_layout(region, orientation)?;
    debug!("building {region} rink, {orientation}: x {:?}, y {:?}", axes.x, axes.y);

    let mut marks = Vec::with_capacity(21);
    marks.extend(boundary_markings(orientation, styles));
    marks.extend(center_circles(orientation, styles));
    marks.extend(goal_lines(orientation, styles));
    marks.extend(sidelines(orientation, styles));
    marks.push(goal_crease(End::Positive, orientation, styles));
    marks.push(goal_crease(End::Negative, orientation, styles));
    trace!("{} marks before faceoff circles", marks.len());
    for spot in FACEOFF_SPOTS {
        marks.extend(faceoff_circle(spot, orientation, styles));
    }

    debug!("rink diagram assembled with {} marks", marks.len());
    Ok(RinkDiagram {
        region,
        orientation,
        axes,
        marks,
    })
}

#[derive(Debug, Clone, Default)]
pub struct Rink {
    cfg: RinkConfig,
}

impl Rink {
    pub fn new(region: Region, orientation: Orientation) -> Self {
        Self {
            cfg: RinkConfig::new(region, orientation),
        }
    }

    pub fn from_config(cfg: RinkConfig) -> Self {
        Self { cfg }
    }

    pub fn with_styles(mut self, styles: StyleTable) -> Self {
        self.cfg.styles = styles;
        self
    }

    pub fn set_region(&mut self, region: Region) {
        self.cfg.region = region;
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.cfg.orientation = orientation;
    }

    pub fn diagram(&self) -> Result<RinkDiagram, RinkError> {
        build_rink_with(&self.cfg)
    }

    /// Build the diagram and hand it to `canvas`. Nothing is drawn when the
    /// settings are rejected.
    pub fn plot<C: Canvas + ?Sized>(&self, canvas: &mut C) -> Result<RinkDiagram, RinkError> {
        let diagram = self.diagram()?;
        diagram.render_to(canvas);
        Ok(diagram)
    }
}
