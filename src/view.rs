use bytemuck::{Pod, Zeroable};
use log::trace;

use crate::complex::Complex;

pub const WHEEL_DELTA_PER_ZOOM_STEP: f32 = 100.0;

pub const DEFAULT_CONSTANT: Complex = Complex::new(0.34, -0.07);

#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Self = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mapping {
    pub base_scale: f32,
    pub plane_offset: f32,
}

impl Default for Mapping {
    fn default() -> Self {
        Self {
            base_scale: 208.0,
            plane_offset: 2.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging,
}

#[derive(Clone, Debug)]
pub struct ViewState {
    pan: Point,
    zoom: f32,
    constant: Complex,
    drag: DragState,
    last_pointer: Point,
    current_pointer: Point,
}

impl ViewState {
    pub fn new(constant: Complex) -> Self {
        Self {
            pan: Point::ORIGIN,
            zoom: 0.0,
            constant,
            drag: DragState::Idle,
            last_pointer: Point::ORIGIN,
            current_pointer: Point::ORIGIN,
        }
    }

    pub fn pan(&self) -> Point {
        self.pan
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn constant(&self) -> Complex {
        self.constant
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn pointer(&self) -> Point {
        self.current_pointer
    }

    pub fn pointer_pressed(&mut self, at: Point) {
        self.drag = DragState::Dragging;
        self.last_pointer = at;
        self.current_pointer = at;
    }

    pub fn pointer_released(&mut self) {
        self.drag = DragState::Idle;
    }

    pub fn pointer_moved(&mut self, to: Point) {
        self.current_pointer = to;
        if self.drag == DragState::Dragging {
            self.pan.x += self.current_pointer.x - self.last_pointer.x;
            self.pan.y += self.current_pointer.y - self.last_pointer.y;
            trace!("pan {:?}", self.pan);
        }
        self.last_pointer = self.current_pointer;
    }

    pub fn wheel(&mut self, delta: f32) {
        self.zoom -= delta / WHEEL_DELTA_PER_ZOOM_STEP;
        trace!("zoom {}", self.zoom);
    }

    pub fn set_constant(&mut self, constant: Complex) {
        self.constant = constant;
    }

    pub fn zoom_factor(&self) -> f32 {
        1.0 + self.zoom / 10.0
    }

    // Pixels have a bottom-left origin.
    pub fn screen_to_complex(&self, pixel: Point, mapping: &Mapping) -> Complex {
        let zoom_factor = self.zoom_factor();
        Complex::new(
            (pixel.x - self.pan.x) / mapping.base_scale / zoom_factor - mapping.plane_offset,
            (pixel.y + self.pan.y) / mapping.base_scale / zoom_factor - mapping.plane_offset,
        )
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_CONSTANT)
    }
}

/// Centre of the pixel at `(column, row)`, rows counted from the top, in the
/// bottom-left-origin coordinates fragment shaders see.
pub fn pixel_centre(column: u32, row: u32, height: u32) -> Point {
    Point::new(column as f32 + 0.5, height as f32 - (row as f32 + 0.5))
}
