mod app;
mod checkerboard;
mod complex;
mod config;
mod controls;
mod encoder;
mod error;
mod escape;
mod frame;
mod mandelbrot;
mod raster;
mod reference;
mod renderer;
mod screen;
mod uniform;
mod view;

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use crate::{
    checkerboard::Checkerboard,
    config::{Cli, Command, ReferenceArgs},
    error::Error,
    mandelbrot::Mandelbrot,
    view::ViewState,
};

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), Error> {
    match command {
        Command::Mandelbrot(args) => {
            let scene = Mandelbrot::new(ViewState::new(args.constant()), args.settings());
            app::run(scene, args.window.size())
        }
        Command::Checkerboard(args) => {
            app::run(Checkerboard::new(args.cell_width), args.window.size())
        }
        Command::Reference(args) => write_reference(&args),
    }
}

fn write_reference(args: &ReferenceArgs) -> Result<(), Error> {
    let image = reference::rasterize_with_threads(
        args.size(),
        &args.window(),
        args.max_iterations,
        args.threads(),
    )?;
    image.save(&args.output)?;
    info!("wrote {}", args.output.display());
    Ok(())
}
