//! Interactive Mandelbrot viewer.
//!
//! Drag to pan, scroll to zoom, arrow keys move the constant sliders and `S`
//! saves a CPU rendering of the current view.

use std::{num::NonZeroU32, path::PathBuf};

use bytemuck::{Pod, Zeroable};
use image::{Rgb, RgbImage};
use log::{debug, error, info, trace};
use winit::event::{
    ElementState, KeyboardInput, MouseButton, MouseScrollDelta, VirtualKeyCode, WindowEvent,
};

use crate::{
    app::Interactive,
    controls::ControlPanel,
    escape::escape,
    frame::{Frame, Scene},
    raster, screen,
    view::{pixel_centre, Mapping, Point, ViewState},
};

/// Wheel delta reported for one notch of a line-based scroll wheel.
pub const WHEEL_DELTA_PER_LINE: f32 = 100.0;

/// Uniform bundle for `mandelbrot.wgsl`.
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq)]
pub struct MandelbrotUniforms {
    pub pan: [f32; 2],
    pub constant: [f32; 2],
    pub resolution: [f32; 2],
    pub time: f32,
    pub zoom: f32,
    pub base_scale: f32,
    pub plane_offset: f32,
    pub max_iterations: u32,
    pub padding: u32,
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub mapping: Mapping,
    pub max_iterations: NonZeroU32,
    pub snapshot_path: PathBuf,
}

pub struct Mandelbrot {
    view: ViewState,
    panel: ControlPanel,
    settings: Settings,
    size: screen::Size,
}

impl Mandelbrot {
    pub fn new(mut view: ViewState, settings: Settings) -> Self {
        let panel = ControlPanel::new(view.constant());
        // The sliders clamp, so the view starts from what they show.
        view.set_constant(panel.constant());
        Self {
            view,
            panel,
            settings,
            size: screen::Size::new(0, 0),
        }
    }

    #[cfg(test)]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    fn nudge_constant(&mut self, real: i32, imaginary: i32) {
        self.panel.real.nudge(real);
        self.panel.imaginary.nudge(imaginary);
        self.view.set_constant(self.panel.constant());
        debug!("constant {:?}", self.view.constant());
    }

    fn save_snapshot(&self) {
        if self.size.is_empty() {
            return;
        }
        let image = rasterize_view(
            &self.view,
            &self.settings.mapping,
            self.settings.max_iterations,
            self.size,
        );
        match image.save(&self.settings.snapshot_path) {
            Ok(()) => info!("saved snapshot to {}", self.settings.snapshot_path.display()),
            Err(err) => error!(
                "could not save snapshot to {}: {}",
                self.settings.snapshot_path.display(),
                err
            ),
        }
    }
}

impl Scene for Mandelbrot {
    type Uniforms = MandelbrotUniforms;

    fn uniforms(&self, frame: &Frame) -> MandelbrotUniforms {
        MandelbrotUniforms {
            pan: self.view.pan().to_array(),
            constant: self.view.constant().to_array(),
            resolution: frame.size.to_array(),
            time: frame.time,
            zoom: self.view.zoom(),
            base_scale: self.settings.mapping.base_scale,
            plane_offset: self.settings.mapping.plane_offset,
            max_iterations: self.settings.max_iterations.get(),
            padding: 0,
        }
    }
}

impl Interactive for Mandelbrot {
    const TITLE: &'static str = "mandelbrot";
    const SHADER: &'static str = include_str!("mandelbrot.wgsl");

    fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.view
                    .pointer_moved(Point::new(position.x as f32, position.y as f32));
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                match state {
                    ElementState::Pressed => self.view.pointer_pressed(self.view.pointer()),
                    ElementState::Released => self.view.pointer_released(),
                }
                trace!("{:?} at {:?}", self.view.drag_state(), self.view.pointer());
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.view.wheel(wheel_delta(*delta));
            }
            WindowEvent::KeyboardInput {
                input:
                    KeyboardInput {
                        state: ElementState::Pressed,
                        virtual_keycode: Some(key),
                        ..
                    },
                ..
            } => match key {
                VirtualKeyCode::Left => self.nudge_constant(-1, 0),
                VirtualKeyCode::Right => self.nudge_constant(1, 0),
                VirtualKeyCode::Down => self.nudge_constant(0, -1),
                VirtualKeyCode::Up => self.nudge_constant(0, 1),
                VirtualKeyCode::S => self.save_snapshot(),
                _ => {}
            },
            _ => {}
        }
    }

    fn resize(&mut self, size: screen::Size) {
        self.size = size;
    }
}

/// Convert a window-system scroll into a browser-style wheel delta, where
/// scrolling down is positive.
pub fn wheel_delta(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, lines) => -lines * WHEEL_DELTA_PER_LINE,
        MouseScrollDelta::PixelDelta(position) => -position.y as f32,
    }
}

/// Render the view on the CPU with the same mapping and evaluator as the shader.
pub fn rasterize_view(
    view: &ViewState,
    mapping: &Mapping,
    max_iterations: NonZeroU32,
    size: screen::Size,
) -> RgbImage {
    raster::scan_rows(size, |column, row| {
        let point = view.screen_to_complex(pixel_centre(column, row, size.height), mapping);
        colour(escape(point, view.constant(), max_iterations))
    })
}

/// Yellow-tinted grayscale, as the shader outputs it.
pub fn colour(value: f32) -> Rgb<u8> {
    let channel = (value * 255.0).round() as u8;
    Rgb([channel, channel, 0])
}
