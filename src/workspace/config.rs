/// Construction parameters for a [`Workspace`](super::Workspace).
///
/// The defaults reproduce the reference benchmark layout: a 20 x 20
/// workspace framed by a 1-unit boundary, split by a 2-unit-thick vertical
/// wall whose 2-unit gap is centered at height 10.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkspaceConfig {
    /// Workspace x-extent.
    pub width: f64,
    /// Workspace y-extent.
    pub height: f64,
    /// Height of the traversable corridor through the dividing wall.
    pub wall_gap: f64,
    /// Thickness of the dividing wall.
    pub wall_thickness: f64,
    /// Vertical offset of the gap center.
    pub wall_height: f64,
    /// Thickness of the outer boundary frame.
    pub boundary_wall_thickness: f64,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            width: 20.0,
            height: 20.0,
            wall_gap: 2.0,
            wall_thickness: 2.0,
            wall_height: 10.0,
            boundary_wall_thickness: 1.0,
        }
    }
}

impl WorkspaceConfig {
    /// Sets the workspace extents.
    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the corridor height through the dividing wall.
    #[must_use]
    pub fn with_wall_gap(mut self, wall_gap: f64) -> Self {
        self.wall_gap = wall_gap;
        self
    }

    /// Sets the dividing wall thickness.
    #[must_use]
    pub fn with_wall_thickness(mut self, wall_thickness: f64) -> Self {
        self.wall_thickness = wall_thickness;
        self
    }

    /// Sets the vertical offset of the gap center.
    #[must_use]
    pub fn with_wall_height(mut self, wall_height: f64) -> Self {
        self.wall_height = wall_height;
        self
    }

    /// Sets the outer boundary frame thickness.
    #[must_use]
    pub fn with_boundary_wall_thickness(mut self, thickness: f64) -> Self {
        self.boundary_wall_thickness = thickness;
        self
    }
}
