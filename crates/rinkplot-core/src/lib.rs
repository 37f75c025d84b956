pub mod canvas;
pub mod error;
pub mod features;
pub mod geom;
pub mod layout;
pub mod model;
pub mod plotly;
pub mod report;
pub mod rink;
pub mod style;

pub use canvas::Canvas;
pub use error::RinkError;
pub use layout::{resolve_layout, AxisConfig, AxisRange, Orientation, Region};
pub use model::{Mark, Primitive2D, RinkDiagram};
pub use rink::{build_rink, build_rink_named, build_rink_with, Rink, RinkConfig};
pub use style::{Feature, StyleTable};
