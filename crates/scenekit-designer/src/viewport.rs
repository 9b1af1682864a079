//! Viewport state for the editor surface.
//!
//! The canvas is a fixed 1600x900 coordinate space; zoom and pan are purely
//! a display concern. Element positions and sizes stored in the model are
//! always in un-scaled canvas units, so the viewport only converts between
//! screen pixels and canvas units at the edges. Screen and canvas space
//! share the same orientation, (0,0) at the top-left with +Y down.

use std::fmt;

use scenekit_core::constants::{CANVAS_HEIGHT, CANVAS_WIDTH, MAX_ZOOM, MIN_ZOOM};

use crate::model::Point;

/// Zoom and pan state for the editor surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    view_width: f64,
    view_height: f64,
}

impl Viewport {
    /// Creates a viewport for a view area of the given pixel size, at 1:1
    /// zoom with no pan.
    pub fn new(view_width: f64, view_height: f64) -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            view_width,
            view_height,
        }
    }

    pub fn view_width(&self) -> f64 {
        self.view_width
    }

    pub fn view_height(&self) -> f64 {
        self.view_height
    }

    /// Updates the view area size (typically on window resize).
    pub fn set_view_size(&mut self, width: f64, height: f64) {
        self.view_width = width;
        self.view_height = height;
    }

    /// Current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, clamped to the supported range.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Zooms in by one step (factor 1.2).
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * 1.2);
    }

    /// Zooms out by one step.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / 1.2);
    }

    pub fn reset_zoom(&mut self) {
        self.zoom = 1.0;
    }

    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Converts a screen-pixel position to canvas units.
    pub fn screen_to_canvas(&self, pixel_x: f64, pixel_y: f64) -> Point {
        Point::new(
            (pixel_x - self.pan_x) / self.zoom,
            (pixel_y - self.pan_y) / self.zoom,
        )
    }

    /// Converts a canvas-unit position to screen pixels.
    pub fn canvas_to_screen(&self, point: Point) -> (f64, f64) {
        (
            point.x * self.zoom + self.pan_x,
            point.y * self.zoom + self.pan_y,
        )
    }

    /// Zooms to a new level while keeping the given canvas point fixed on
    /// screen. This is zoom-to-cursor.
    pub fn zoom_to_point(&mut self, canvas_point: Point, new_zoom: f64) {
        let new_zoom = new_zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        let (pixel_x, pixel_y) = self.canvas_to_screen(canvas_point);
        self.zoom = new_zoom;
        self.pan_x = pixel_x - canvas_point.x * new_zoom;
        self.pan_y = pixel_y - canvas_point.y * new_zoom;
    }

    /// Fits the whole 1600x900 canvas into the view area, centered, with a
    /// small margin.
    pub fn fit_canvas(&mut self) {
        const PADDING: f64 = 0.05;
        let factor = 1.0 - PADDING * 2.0;
        let zoom = ((self.view_width * factor) / CANVAS_WIDTH)
            .min((self.view_height * factor) / CANVAS_HEIGHT)
            .clamp(MIN_ZOOM, MAX_ZOOM);
        self.zoom = zoom;
        self.pan_x = (self.view_width - CANVAS_WIDTH * zoom) / 2.0;
        self.pan_y = (self.view_height - CANVAS_HEIGHT * zoom) / 2.0;
    }

    /// Resets to 1:1 zoom with no pan.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan_x, self.pan_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(CANVAS_WIDTH, CANVAS_HEIGHT)
    }
}
