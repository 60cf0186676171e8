pub mod bounds;
pub mod config;

pub use bounds::Bounds;
pub use config::WorkspaceConfig;

use crate::error::{GeometryError, Result};
use crate::geometry::{Circle, Rect};
use crate::math::Point2;

/// Read-only view of the workspace obstacles, one slice per category.
#[derive(Debug, Clone, Copy)]
pub struct Obstacles<'a> {
    /// The four outer frame strips (left, right, bottom, top).
    pub boundary: &'a [Rect],
    /// The two segments of the gapped dividing wall (lower, upper).
    pub wall: &'a [Rect],
    /// User-added rectangles, in insertion order.
    pub rects: &'a [Rect],
    /// User-added circles, in insertion order.
    pub circles: &'a [Circle],
}

/// Number of obstacles in each category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObstacleCounts {
    pub boundary: usize,
    pub wall: usize,
    pub rects: usize,
    pub circles: usize,
}

/// A bounded 2D workspace with static obstacles, queried as the validity
/// oracle of a sampling-based motion planner.
///
/// The workspace owns four obstacle categories: a boundary frame and a
/// gapped dividing wall derived from the [`WorkspaceConfig`], plus
/// rectangles and circles registered by the caller. The intended usage is
/// build-then-query: obstacles are added before planning begins, then
/// [`is_collision`](Self::is_collision) is called once per candidate
/// state. All queries take `&self`, so concurrent reads are safe and the
/// borrow checker enforces the phase separation.
#[derive(Debug, Clone)]
pub struct Workspace {
    config: WorkspaceConfig,
    bounds: Bounds,
    boundary: [Rect; 4],
    wall: [Rect; 2],
    rects: Vec<Rect>,
    circles: Vec<Circle>,
}

impl Workspace {
    /// Creates a workspace from the given configuration.
    ///
    /// The boundary frame and the dividing wall are generated here; the
    /// rectangle and circle registries start empty.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if any extent or thickness is not
    /// strictly positive, or if `wall_gap` is large enough to devour a
    /// wall segment (`wall_gap >= 2 * wall_height` for the lower one,
    /// `wall_gap >= 2 * (height - wall_height)` for the upper one).
    pub fn new(config: WorkspaceConfig) -> Result<Self> {
        let bounds = Bounds::new(config.width, config.height)?;
        Self::validate_structure(&config)?;
        let (boundary, wall) = Self::generate_structure(&config);
        Ok(Self {
            config,
            bounds,
            boundary,
            wall,
            rects: Vec::new(),
            circles: Vec::new(),
        })
    }

    /// Creates a workspace with the reference benchmark layout.
    ///
    /// Infallible because the default configuration is known to be valid.
    #[must_use]
    pub fn with_default_layout() -> Self {
        let config = WorkspaceConfig::default();
        let bounds = Bounds::from_validated(config.width, config.height);
        let (boundary, wall) = Self::generate_structure(&config);
        Self {
            config,
            bounds,
            boundary,
            wall,
            rects: Vec::new(),
            circles: Vec::new(),
        }
    }

    /// Checks the wall and boundary parameters that [`Bounds::new`] does
    /// not cover.
    fn validate_structure(config: &WorkspaceConfig) -> Result<()> {
        if config.wall_thickness <= 0.0 {
            return Err(GeometryError::NonPositiveExtent {
                parameter: "wall_thickness",
                value: config.wall_thickness,
            }
            .into());
        }
        if config.boundary_wall_thickness <= 0.0 {
            return Err(GeometryError::NonPositiveExtent {
                parameter: "boundary_wall_thickness",
                value: config.boundary_wall_thickness,
            }
            .into());
        }
        if config.wall_gap >= 2.0 * config.wall_height {
            return Err(GeometryError::WallGapTooLarge {
                wall_gap: config.wall_gap,
                segment: "lower",
                limit: 2.0 * config.wall_height,
            }
            .into());
        }
        if config.wall_gap >= 2.0 * (config.height - config.wall_height) {
            return Err(GeometryError::WallGapTooLarge {
                wall_gap: config.wall_gap,
                segment: "upper",
                limit: 2.0 * (config.height - config.wall_height),
            }
            .into());
        }
        Ok(())
    }

    /// Derives the boundary frame and the gapped wall from a validated
    /// configuration.
    ///
    /// The four frame strips deliberately overlap at the corners, so
    /// corner points are covered redundantly. The wall leaves a corridor
    /// of height `wall_gap` centered at `wall_height`, with the half-gap
    /// extending above and below.
    fn generate_structure(config: &WorkspaceConfig) -> ([Rect; 4], [Rect; 2]) {
        let t = config.boundary_wall_thickness;
        let boundary = [
            Rect::from_validated(0.0, 0.0, t, config.height),
            Rect::from_validated(config.width - t, 0.0, t, config.height),
            Rect::from_validated(0.0, 0.0, config.width, t),
            Rect::from_validated(0.0, config.height - t, config.width, t),
        ];

        let cx = config.width / 2.0 - config.wall_thickness / 2.0;
        let half_gap = config.wall_gap / 2.0;
        let wall = [
            Rect::from_validated(
                cx,
                0.0,
                config.wall_thickness,
                config.wall_height - half_gap,
            ),
            Rect::from_validated(
                cx,
                config.wall_height + half_gap,
                config.wall_thickness,
                config.height - config.wall_height - half_gap,
            ),
        ];

        (boundary, wall)
    }

    /// Returns the configuration the workspace was built from.
    #[must_use]
    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    /// Returns the workspace domain extent.
    #[must_use]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Registers a rectangular obstacle.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateRect`] for non-positive
    /// extents; the registry is left unchanged.
    pub fn add_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<()> {
        self.rects.push(Rect::new(x, y, width, height)?);
        Ok(())
    }

    /// Registers a circular obstacle.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NegativeRadius`] for a negative radius;
    /// the registry is left unchanged.
    pub fn add_circle(&mut self, x: f64, y: f64, radius: f64) -> Result<()> {
        self.circles.push(Circle::new(x, y, radius)?);
        Ok(())
    }

    /// Clears all user-added obstacles and regenerates the boundary and
    /// wall from the retained configuration. Idempotent.
    pub fn reset(&mut self) {
        self.rects.clear();
        self.circles.clear();
        let (boundary, wall) = Self::generate_structure(&self.config);
        self.boundary = boundary;
        self.wall = wall;
    }

    /// Returns read-only views of all four obstacle categories.
    #[must_use]
    pub fn obstacles(&self) -> Obstacles<'_> {
        Obstacles {
            boundary: &self.boundary,
            wall: &self.wall,
            rects: &self.rects,
            circles: &self.circles,
        }
    }

    /// Returns the number of obstacles per category.
    #[must_use]
    pub fn obstacle_counts(&self) -> ObstacleCounts {
        ObstacleCounts {
            boundary: self.boundary.len(),
            wall: self.wall.len(),
            rects: self.rects.len(),
            circles: self.circles.len(),
        }
    }

    /// Checks whether `(x, y)` lies inside the workspace extent.
    ///
    /// Tests the domain rectangle only, not obstacle occupancy; points on
    /// the outer edge count as inside.
    #[must_use]
    pub fn is_in_bounds(&self, x: f64, y: f64) -> bool {
        self.bounds.contains(x, y)
    }

    /// Checks whether `(x, y)` lies in any boundary frame strip.
    #[must_use]
    pub fn hits_boundary(&self, x: f64, y: f64) -> bool {
        self.boundary.iter().any(|r| r.contains(x, y))
    }

    /// Checks whether `(x, y)` lies in either wall segment.
    #[must_use]
    pub fn hits_wall(&self, x: f64, y: f64) -> bool {
        self.wall.iter().any(|r| r.contains(x, y))
    }

    /// Checks whether `(x, y)` lies in any registered rectangle.
    #[must_use]
    pub fn hits_rect(&self, x: f64, y: f64) -> bool {
        self.rects.iter().any(|r| r.contains(x, y))
    }

    /// Checks whether `(x, y)` lies in any registered circle.
    #[must_use]
    pub fn hits_circle(&self, x: f64, y: f64) -> bool {
        self.circles.iter().any(|c| c.contains(x, y))
    }

    /// Checks whether `(x, y)` collides with any obstacle.
    ///
    /// Scans the categories in boundary, wall, rectangle, circle order
    /// and short-circuits on the first hit. The scan is linear in the
    /// total obstacle count, which is fine for the tens of obstacles a
    /// benchmark workspace holds; larger counts would want a spatial
    /// index behind this same contract.
    #[must_use]
    pub fn is_collision(&self, x: f64, y: f64) -> bool {
        self.hits_boundary(x, y)
            || self.hits_wall(x, y)
            || self.hits_rect(x, y)
            || self.hits_circle(x, y)
    }

    /// Returns the corner vertices of every rectangular obstacle.
    ///
    /// Emits four corners per rectangle in bottom-left, bottom-right,
    /// top-right, top-left order, iterating the categories as
    /// [`is_collision`](Self::is_collision) does. Circles contribute no
    /// vertices. Intended for geometric pre-processing such as
    /// visibility-graph construction.
    #[must_use]
    pub fn obstacle_vertices(&self) -> Vec<Point2> {
        let rect_count = self.boundary.len() + self.wall.len() + self.rects.len();
        let mut vertices = Vec::with_capacity(4 * rect_count);
        for rect in self
            .boundary
            .iter()
            .chain(self.wall.iter())
            .chain(self.rects.iter())
        {
            vertices.extend(rect.corners());
        }
        vertices
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn default_workspace() -> Workspace {
        Workspace::new(WorkspaceConfig::default()).unwrap()
    }

    #[test]
    fn default_counts_after_construction() {
        let ws = default_workspace();
        let counts = ws.obstacle_counts();
        assert_eq!(
            counts,
            ObstacleCounts {
                boundary: 4,
                wall: 2,
                rects: 0,
                circles: 0,
            }
        );
    }

    #[test]
    fn default_layout_matches_fallible_construction() {
        let ws = Workspace::with_default_layout();
        let reference = default_workspace();
        assert_eq!(ws.obstacles().boundary, reference.obstacles().boundary);
        assert_eq!(ws.obstacles().wall, reference.obstacles().wall);
        assert_eq!(ws.bounds(), reference.bounds());
    }

    #[test]
    fn boundary_strips_frame_the_workspace() {
        let ws = default_workspace();
        let boundary = ws.obstacles().boundary;
        // Left, right, bottom, top with thickness 1.
        assert_relative_eq!(boundary[0].x(), 0.0);
        assert_relative_eq!(boundary[0].width(), 1.0);
        assert_relative_eq!(boundary[0].height(), 20.0);
        assert_relative_eq!(boundary[1].x(), 19.0);
        assert_relative_eq!(boundary[2].y(), 0.0);
        assert_relative_eq!(boundary[2].width(), 20.0);
        assert_relative_eq!(boundary[3].y(), 19.0);
    }

    #[test]
    fn wall_segments_leave_centered_gap() {
        let ws = default_workspace();
        let wall = ws.obstacles().wall;
        // Wall at x in [9, 11]; gap spans y in [9, 11].
        assert_relative_eq!(wall[0].x(), 9.0);
        assert_relative_eq!(wall[0].y(), 0.0);
        assert_relative_eq!(wall[0].height(), 9.0);
        assert_relative_eq!(wall[1].y(), 11.0);
        assert_relative_eq!(wall[1].height(), 9.0);
    }

    #[test]
    fn default_layout_collision_fixtures() {
        let ws = default_workspace();
        assert!(!ws.is_collision(5.0, 5.0)); // open space, left of the wall
        assert!(ws.is_collision(0.0, 5.0)); // on the left boundary strip
        assert!(!ws.is_collision(10.0, 10.0)); // inside the gap
        assert!(ws.is_collision(10.0, 5.0)); // inside the lower wall segment
    }

    #[test]
    fn bounds_membership_is_extent_only() {
        let ws = default_workspace();
        assert!(ws.is_in_bounds(0.0, 5.0)); // on a boundary strip, still in bounds
        assert!(ws.is_in_bounds(20.0, 20.0));
        assert!(!ws.is_in_bounds(20.1, 5.0));
        assert!(!ws.is_in_bounds(5.0, -0.1));
    }

    #[test]
    fn added_rect_collides_and_reset_restores() {
        let mut ws = default_workspace();
        assert!(!ws.is_collision(3.0, 3.0));
        ws.add_rect(2.0, 2.0, 3.0, 3.0).unwrap();
        assert!(ws.is_collision(3.0, 3.0));
        assert!(!ws.is_collision(5.0, 15.0)); // free space far from the added rect
        ws.reset();
        assert!(!ws.is_collision(3.0, 3.0));
        assert_eq!(ws.obstacle_counts().rects, 0);
    }

    #[test]
    fn added_circle_collides_within_radius() {
        let mut ws = default_workspace();
        ws.add_circle(15.0, 15.0, 2.0).unwrap();
        assert!(ws.is_collision(15.0, 16.0)); // distance 1 <= radius 2
        assert!(!ws.is_collision(15.0, 18.0)); // distance 3 > radius 2
    }

    #[test]
    fn reset_is_idempotent() {
        let mut ws = default_workspace();
        ws.add_rect(2.0, 2.0, 1.0, 1.0).unwrap();
        ws.add_circle(15.0, 15.0, 1.0).unwrap();
        ws.reset();
        let counts_once = ws.obstacle_counts();
        let wall_once = *ws.obstacles().wall.first().unwrap();
        ws.reset();
        assert_eq!(ws.obstacle_counts(), counts_once);
        assert_eq!(*ws.obstacles().wall.first().unwrap(), wall_once);
    }

    #[test]
    fn category_views_preserve_insertion_order() {
        let mut ws = default_workspace();
        ws.add_rect(2.0, 2.0, 1.0, 1.0).unwrap();
        ws.add_rect(5.0, 5.0, 2.0, 2.0).unwrap();
        ws.add_circle(15.0, 15.0, 1.5).unwrap();
        let obs = ws.obstacles();
        assert_eq!(obs.rects.len(), 2);
        assert_relative_eq!(obs.rects[1].x(), 5.0);
        assert_relative_eq!(obs.rects[1].width(), 2.0);
        let circle = obs.circles.last().unwrap();
        assert_relative_eq!(circle.center().x, 15.0);
        assert_relative_eq!(circle.radius(), 1.5);
    }

    #[test]
    fn vertices_cover_all_rectangular_obstacles() {
        let mut ws = default_workspace();
        ws.add_rect(2.0, 2.0, 3.0, 3.0).unwrap();
        ws.add_circle(15.0, 15.0, 2.0).unwrap(); // contributes no vertices
        let vertices = ws.obstacle_vertices();
        assert_eq!(vertices.len(), 4 * (4 + 2 + 1));

        // The added rect's corners are the last four, in bottom-left,
        // bottom-right, top-right, top-left order.
        let tail = &vertices[vertices.len() - 4..];
        assert_relative_eq!(tail[0].x, 2.0);
        assert_relative_eq!(tail[0].y, 2.0);
        assert_relative_eq!(tail[1].x, 5.0);
        assert_relative_eq!(tail[1].y, 2.0);
        assert_relative_eq!(tail[2].x, 5.0);
        assert_relative_eq!(tail[2].y, 5.0);
        assert_relative_eq!(tail[3].x, 2.0);
        assert_relative_eq!(tail[3].y, 5.0);
    }

    #[test]
    fn rejected_add_leaves_registry_unchanged() {
        let mut ws = default_workspace();
        assert!(ws.add_rect(2.0, 2.0, -1.0, 3.0).is_err());
        assert!(ws.add_circle(5.0, 5.0, -0.5).is_err());
        let counts = ws.obstacle_counts();
        assert_eq!(counts.rects, 0);
        assert_eq!(counts.circles, 0);
    }

    #[test]
    fn rejects_gap_devouring_a_segment() {
        let lower = WorkspaceConfig::default().with_wall_gap(20.0);
        assert!(Workspace::new(lower).is_err());

        let upper = WorkspaceConfig::default()
            .with_wall_height(19.0)
            .with_wall_gap(2.5);
        assert!(Workspace::new(upper).is_err());
    }

    #[test]
    fn rejects_non_positive_thicknesses() {
        assert!(Workspace::new(WorkspaceConfig::default().with_wall_thickness(0.0)).is_err());
        assert!(
            Workspace::new(WorkspaceConfig::default().with_boundary_wall_thickness(-1.0)).is_err()
        );
    }

    #[test]
    fn non_default_size_recenters_the_wall() {
        let config = WorkspaceConfig::default().with_size(40.0, 20.0);
        let ws = Workspace::new(config).unwrap();
        let wall = ws.obstacles().wall;
        assert_relative_eq!(wall[0].x(), 19.0); // 40/2 - 2/2
        assert!(ws.is_collision(20.0, 5.0));
        assert!(!ws.is_collision(20.0, 10.0));
    }
}
