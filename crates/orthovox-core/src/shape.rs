use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Closed catalog of block geometry templates. The mesh data itself
/// lives in the rendering layer; the store only tags entries with a
/// shape so instances land in the right draw batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum Shape {
    Cube = 0,
    Ramp = 1,
    Slab = 2,
    WedgeHead = 3,
    WedgeBody = 4,
}

/// All shapes in discriminant order.
pub const ALL_SHAPES: [Shape; Shape::COUNT] = [
    Shape::Cube,
    Shape::Ramp,
    Shape::Slab,
    Shape::WedgeHead,
    Shape::WedgeBody,
];

impl Shape {
    /// Number of shapes in the catalog.
    pub const COUNT: usize = 5;

    /// Stable kebab-case name, matching the editor's shape keys.
    pub fn name(self) -> &'static str {
        match self {
            Shape::Cube => "cube",
            Shape::Ramp => "ramp",
            Shape::Slab => "slab",
            Shape::WedgeHead => "wedge-head",
            Shape::WedgeBody => "wedge-body",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A shape name outside the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown block shape: {0}")]
pub struct ParseShapeError(pub String);

impl FromStr for Shape {
    type Err = ParseShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_SHAPES
            .iter()
            .copied()
            .find(|shape| shape.name() == s)
            .ok_or_else(|| ParseShapeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size() {
        assert_eq!(ALL_SHAPES.len(), Shape::COUNT);
    }

    #[test]
    fn test_name_round_trip() {
        for shape in ALL_SHAPES {
            assert_eq!(shape.name().parse::<Shape>(), Ok(shape));
        }
    }

    #[test]
    fn test_unknown_name_is_an_error() {
        let err = "dome".parse::<Shape>().unwrap_err();
        assert_eq!(err, ParseShapeError("dome".to_string()));
    }

    #[test]
    fn test_names_are_kebab_case() {
        assert_eq!(Shape::WedgeHead.to_string(), "wedge-head");
        assert_eq!(Shape::WedgeBody.to_string(), "wedge-body");
    }
}
