//! Command-line configuration.

use std::{num::NonZeroU32, path::PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::{
    complex::Complex,
    mandelbrot,
    reference::PlaneWindow,
    screen,
    view::{Mapping, DEFAULT_CONSTANT},
};

#[derive(Parser, Debug)]
#[command(name = "mandelbrot-demos")]
#[command(about = "Mandelbrot viewer, checkerboard animation and CPU reference renderer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive GPU Mandelbrot viewer
    Mandelbrot(MandelbrotArgs),
    /// Animated checkerboard
    Checkerboard(CheckerboardArgs),
    /// Render the CPU reference image to a PNG file
    Reference(ReferenceArgs),
}

#[derive(Args, Debug, Clone, Copy)]
pub struct WindowArgs {
    /// Initial window width in pixels
    #[arg(long, default_value_t = 832)]
    pub width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 832)]
    pub height: u32,
}

impl WindowArgs {
    pub fn size(&self) -> screen::Size {
        screen::Size::new(self.width, self.height)
    }
}

#[derive(Args, Debug)]
pub struct MandelbrotArgs {
    #[command(flatten)]
    pub window: WindowArgs,

    /// Iteration cap for the shader
    #[arg(long, default_value = "255")]
    pub max_iterations: NonZeroU32,

    /// Pixels per unit of the complex plane at zoom level 0
    #[arg(long, default_value_t = Mapping::default().base_scale)]
    pub base_scale: f32,

    /// Subtracted from both plane coordinates after scaling
    #[arg(long, default_value_t = Mapping::default().plane_offset, allow_negative_numbers = true)]
    pub plane_offset: f32,

    /// Real part of the constant added on every iteration, in [-1, 1]
    #[arg(long, default_value_t = DEFAULT_CONSTANT.real, allow_negative_numbers = true)]
    pub constant_real: f32,

    /// Imaginary part of the constant added on every iteration, in [-1, 1]
    #[arg(long, default_value_t = DEFAULT_CONSTANT.imaginary, allow_negative_numbers = true)]
    pub constant_imaginary: f32,

    /// Where `S` writes a CPU rendering of the current view
    #[arg(long, default_value = "snapshot.png")]
    pub snapshot: PathBuf,
}

impl MandelbrotArgs {
    pub fn constant(&self) -> Complex {
        Complex::new(self.constant_real, self.constant_imaginary)
    }

    pub fn settings(&self) -> mandelbrot::Settings {
        mandelbrot::Settings {
            mapping: Mapping {
                base_scale: self.base_scale,
                plane_offset: self.plane_offset,
            },
            max_iterations: self.max_iterations,
            snapshot_path: self.snapshot.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub struct CheckerboardArgs {
    #[command(flatten)]
    pub window: WindowArgs,

    /// Initial contents of the cell width field; anything that doesn't start
    /// with a positive integer means 1
    #[arg(long, default_value = "30", allow_hyphen_values = true)]
    pub cell_width: String,
}

#[derive(Args, Debug)]
pub struct ReferenceArgs {
    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Iteration cap
    #[arg(long, default_value = "201")]
    pub max_iterations: NonZeroU32,

    /// Worker threads [default: number of CPUs]
    #[arg(long)]
    pub threads: Option<usize>,

    /// Output PNG path
    #[arg(short, long, default_value = "reference.png")]
    pub output: PathBuf,
}

impl ReferenceArgs {
    pub fn size(&self) -> screen::Size {
        screen::Size::new(self.width, self.height)
    }

    pub fn threads(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get)
    }

    pub fn window(&self) -> PlaneWindow {
        PlaneWindow::default()
    }
}
