use crate::layout::{Orientation, Region};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RinkError {
    #[error("unknown rink region: {0:?} (expected one of full, offense, ozone, defense, dzone, neutral)")]
    InvalidRegion(String),
    #[error("unknown orientation: {0:?} (expected horizontal or vertical)")]
    InvalidOrientation(String),
    #[error("region {region} is not available in {orientation} orientation")]
    UnsupportedRegion {
        region: Region,
        orientation: Orientation,
    },
}
