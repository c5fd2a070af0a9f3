use log::{debug, info};
use winit::{
    dpi::PhysicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use crate::{
    error::Error,
    frame::{FrameDriver, RenderSurface, Scene},
    renderer::Renderer,
    screen,
};

/// A [`Scene`] that owns a window: it names its shader and reacts to input.
pub trait Interactive: Scene + 'static {
    const TITLE: &'static str;

    /// WGSL source with `vertex_main` and `fragment_main` entry points.
    const SHADER: &'static str;

    fn handle_event(&mut self, event: &WindowEvent);

    fn resize(&mut self, _size: screen::Size) {}
}

/// Open a window and drive `scene` until the window is closed.
pub fn run<S: Interactive>(mut scene: S, size: screen::Size) -> Result<(), Error> {
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(S::TITLE)
        .with_inner_size(PhysicalSize::new(size.width, size.height))
        .build(&event_loop)?;

    let mut renderer = Renderer::<S::Uniforms>::new(&window, S::TITLE, S::SHADER)?;
    scene.resize(renderer.size());

    let mut frame_driver = FrameDriver::new();
    info!("running {}", S::TITLE);

    event_loop.run(move |event, _, control_flow| match event {
        Event::MainEventsCleared => {
            window.request_redraw();
        }
        Event::WindowEvent {
            window_id,
            ref event,
        } if window_id == window.id() => {
            match event {
                WindowEvent::CloseRequested => {
                    debug!("closing after {} frames", frame_driver.ticks());
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(size) => {
                    renderer.resize(*size);
                    scene.resize(renderer.size());
                }
                WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                    renderer.resize(**new_inner_size);
                    scene.resize(renderer.size());
                }
                _ => {}
            }
            scene.handle_event(event);
        }
        Event::RedrawRequested(window_id) if window_id == window.id() => {
            frame_driver.tick(&scene, &mut renderer);
        }
        _ => {}
    })
}
