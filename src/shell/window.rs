//! Geometry for the draggable, resizable terminal window and the pixel to
//! character-grid conversion. Pointer wiring lives in the component layer;
//! these controllers only track gesture state.

pub const MIN_WIDTH: f64 = 400.0;
pub const MIN_HEIGHT: f64 = 300.0;

const CHAR_WIDTH: f64 = 8.4;
const LINE_HEIGHT: f64 = 22.4;
const BODY_PADDING: f64 = 48.0;
const MIN_COLS: usize = 40;
const MIN_ROWS: usize = 10;

/// On-screen placement of the window. `size: None` means natural (CSS) size.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WindowGeometry {
    pub offset: (f64, f64),
    pub size: Option<(f64, f64)>,
}

impl WindowGeometry {
    /// Back to the natural, centered state (used by the maximize toggle).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Which handle a resize gesture started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 8] = [
        ResizeEdge::North,
        ResizeEdge::South,
        ResizeEdge::East,
        ResizeEdge::West,
        ResizeEdge::NorthEast,
        ResizeEdge::NorthWest,
        ResizeEdge::SouthEast,
        ResizeEdge::SouthWest,
    ];

    /// +1 when the east edge moves with the pointer, -1 for west, 0 when the
    /// gesture does not affect width.
    fn horizontal(&self) -> f64 {
        match self {
            ResizeEdge::East | ResizeEdge::NorthEast | ResizeEdge::SouthEast => 1.0,
            ResizeEdge::West | ResizeEdge::NorthWest | ResizeEdge::SouthWest => -1.0,
            _ => 0.0,
        }
    }

    fn vertical(&self) -> f64 {
        match self {
            ResizeEdge::South | ResizeEdge::SouthEast | ResizeEdge::SouthWest => 1.0,
            ResizeEdge::North | ResizeEdge::NorthEast | ResizeEdge::NorthWest => -1.0,
            _ => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct DragGesture {
    start: (f64, f64),
    origin: (f64, f64),
}

/// Tracks a header drag: offset = origin + (pointer - start).
#[derive(Debug, Clone, Copy, Default)]
pub struct DragController {
    gesture: Option<DragGesture>,
}

impl DragController {
    pub fn begin(&mut self, pointer: (f64, f64), geometry: &WindowGeometry) {
        self.gesture = Some(DragGesture {
            start: pointer,
            origin: geometry.offset,
        });
    }

    pub fn update(&mut self, pointer: (f64, f64), geometry: &mut WindowGeometry) {
        if let Some(g) = self.gesture {
            geometry.offset = (
                g.origin.0 + pointer.0 - g.start.0,
                g.origin.1 + pointer.1 - g.start.1,
            );
        }
    }

    pub fn end(&mut self) {
        self.gesture = None;
    }

    pub fn active(&self) -> bool {
        self.gesture.is_some()
    }
}

#[derive(Debug, Clone, Copy)]
struct ResizeGesture {
    edge: ResizeEdge,
    start: (f64, f64),
    start_size: (f64, f64),
}

/// Tracks an edge/corner resize, clamped to the configured minimums.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResizeController {
    gesture: Option<ResizeGesture>,
}

impl ResizeController {
    /// `rendered` is the element's current on-screen width/height, so a
    /// window at natural size resizes from what the user actually sees.
    pub fn begin(&mut self, edge: ResizeEdge, pointer: (f64, f64), rendered: (f64, f64)) {
        self.gesture = Some(ResizeGesture {
            edge,
            start: pointer,
            start_size: rendered,
        });
    }

    pub fn update(&mut self, pointer: (f64, f64), geometry: &mut WindowGeometry) {
        let Some(g) = self.gesture else {
            return;
        };
        let dx = pointer.0 - g.start.0;
        let dy = pointer.1 - g.start.1;
        let width = (g.start_size.0 + g.edge.horizontal() * dx).max(MIN_WIDTH);
        let height = (g.start_size.1 + g.edge.vertical() * dy).max(MIN_HEIGHT);
        geometry.size = Some((width, height));
    }

    pub fn end(&mut self) {
        self.gesture = None;
    }

    pub fn active(&self) -> bool {
        self.gesture.is_some()
    }
}

/// Character columns/rows that fit in a body of the given pixel size.
pub fn grid_size(width: f64, height: f64) -> (usize, usize) {
    let cols = ((width - BODY_PADDING) / CHAR_WIDTH).floor() as isize;
    let rows = ((height - BODY_PADDING) / LINE_HEIGHT).floor() as isize;
    (
        (cols.max(0) as usize).max(MIN_COLS),
        (rows.max(0) as usize).max(MIN_ROWS),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_applies_pointer_delta_to_offset() {
        let mut geometry = WindowGeometry::default();
        let mut drag = DragController::default();
        drag.begin((100.0, 100.0), &geometry);
        drag.update((130.0, 80.0), &mut geometry);
        assert_eq!(geometry.offset, (30.0, -20.0));
        drag.end();
        assert!(!drag.active());
    }

    #[test]
    fn drag_resumes_from_prior_offset() {
        let mut geometry = WindowGeometry {
            offset: (10.0, 10.0),
            size: None,
        };
        let mut drag = DragController::default();
        drag.begin((0.0, 0.0), &geometry);
        drag.update((5.0, 5.0), &mut geometry);
        assert_eq!(geometry.offset, (15.0, 15.0));
    }

    #[test]
    fn maximize_reset_clears_offset_and_size() {
        let mut geometry = WindowGeometry::default();
        let mut drag = DragController::default();
        drag.begin((0.0, 0.0), &geometry);
        drag.update((250.0, 75.0), &mut geometry);
        geometry.size = Some((800.0, 600.0));
        geometry.reset();
        assert_eq!(geometry.offset, (0.0, 0.0));
        assert_eq!(geometry.size, None);
    }

    #[test]
    fn update_without_begin_is_a_no_op() {
        let mut geometry = WindowGeometry::default();
        let mut drag = DragController::default();
        drag.update((50.0, 50.0), &mut geometry);
        assert_eq!(geometry.offset, (0.0, 0.0));

        let mut resize = ResizeController::default();
        resize.update((50.0, 50.0), &mut geometry);
        assert_eq!(geometry.size, None);
    }

    #[test]
    fn south_east_resize_grows_both_dimensions() {
        let mut geometry = WindowGeometry::default();
        let mut resize = ResizeController::default();
        resize.begin(ResizeEdge::SouthEast, (0.0, 0.0), (600.0, 400.0));
        resize.update((40.0, 25.0), &mut geometry);
        assert_eq!(geometry.size, Some((640.0, 425.0)));
    }

    #[test]
    fn resize_clamps_to_minimums() {
        let mut geometry = WindowGeometry::default();
        let mut resize = ResizeController::default();
        resize.begin(ResizeEdge::SouthEast, (0.0, 0.0), (600.0, 400.0));
        resize.update((-5000.0, -5000.0), &mut geometry);
        assert_eq!(geometry.size, Some((MIN_WIDTH, MIN_HEIGHT)));
    }

    #[test]
    fn west_and_north_edges_grow_against_the_pointer() {
        let mut geometry = WindowGeometry::default();
        let mut resize = ResizeController::default();
        resize.begin(ResizeEdge::NorthWest, (100.0, 100.0), (600.0, 400.0));
        resize.update((80.0, 90.0), &mut geometry);
        assert_eq!(geometry.size, Some((620.0, 410.0)));
    }

    #[test]
    fn east_only_resize_leaves_height_alone() {
        let mut geometry = WindowGeometry::default();
        let mut resize = ResizeController::default();
        resize.begin(ResizeEdge::East, (0.0, 0.0), (600.0, 400.0));
        resize.update((30.0, 999.0), &mut geometry);
        assert_eq!(geometry.size, Some((630.0, 400.0)));
    }

    #[test]
    fn grid_size_scales_and_clamps() {
        let (cols, rows) = grid_size(721.0, 500.0);
        assert_eq!(cols, 80);
        assert_eq!(rows, 20);
        // tiny windows clamp to the minimum grid
        assert_eq!(grid_size(0.0, 0.0), (40, 10));
        assert_eq!(grid_size(MIN_WIDTH, MIN_HEIGHT), (41, 11));
    }
}
