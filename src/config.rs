use crate::error::{OperationError, Result};

/// Smallest accepted [`TopologyConfig::arc_tolerance`].
pub const MIN_ARC_TOLERANCE: f64 = 1e-9;

/// Tolerances shared by every room assembler of a layer.
///
/// The CSG classification epsilon is not part of this; see
/// [`crate::csg::EPSILON`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopologyConfig {
    /// Distance within which a point counts as on a loop boundary.
    pub on_tolerance: f64,
    /// Maximum chord deviation when arcs are tessellated.
    pub arc_tolerance: f64,
    /// Overlap area a floor or ceiling must exceed to belong to a room.
    pub min_overlap_area: f64,
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            on_tolerance: 1e-6,
            arc_tolerance: 1e-3,
            min_overlap_area: 0.0,
        }
    }
}

impl TopologyConfig {
    #[must_use]
    pub fn with_on_tolerance(mut self, tolerance: f64) -> Self {
        self.on_tolerance = tolerance;
        self
    }

    #[must_use]
    pub fn with_arc_tolerance(mut self, tolerance: f64) -> Self {
        self.arc_tolerance = tolerance;
        self
    }

    #[must_use]
    pub fn with_min_overlap_area(mut self, area: f64) -> Self {
        self.min_overlap_area = area;
        self
    }

    /// Checks that every tolerance is finite and in range.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        if !self.on_tolerance.is_finite() || self.on_tolerance < 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "on_tolerance must be finite and non-negative, got {}",
                self.on_tolerance
            ))
            .into());
        }
        if !self.arc_tolerance.is_finite() || self.arc_tolerance < MIN_ARC_TOLERANCE {
            return Err(OperationError::InvalidInput(format!(
                "arc_tolerance must be finite and at least {MIN_ARC_TOLERANCE}, got {}",
                self.arc_tolerance
            ))
            .into());
        }
        if !self.min_overlap_area.is_finite() || self.min_overlap_area < 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "min_overlap_area must be finite and non-negative, got {}",
                self.min_overlap_area
            ))
            .into());
        }
        Ok(())
    }
}
