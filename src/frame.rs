//! Per-frame driver.
//!
//! The windowing loop calls [`FrameDriver::tick`] once per redraw. Each tick
//! turns the scene's current state into a uniform bundle and hands it to a
//! [`RenderSurface`] along with a full-surface draw. Nothing else is carried
//! between ticks.

use std::time::Instant;

use log::trace;

use crate::screen;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub time: f32,
    pub index: u64,
    pub size: screen::Size,
}

pub trait Scene {
    type Uniforms: bytemuck::Pod;

    fn uniforms(&self, frame: &Frame) -> Self::Uniforms;
}

pub trait RenderSurface<U> {
    fn size(&self) -> screen::Size;

    fn draw(&mut self, uniforms: &U);
}

pub struct FrameDriver {
    started: Instant,
    ticks: u64,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(started: Instant) -> Self {
        Self { started, ticks: 0 }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn tick<S, R>(&mut self, scene: &S, surface: &mut R) -> Frame
    where
        S: Scene,
        R: RenderSurface<S::Uniforms>,
    {
        self.tick_at(Instant::now(), scene, surface)
    }

    pub fn tick_at<S, R>(&mut self, now: Instant, scene: &S, surface: &mut R) -> Frame
    where
        S: Scene,
        R: RenderSurface<S::Uniforms>,
    {
        let frame = Frame {
            time: now.saturating_duration_since(self.started).as_secs_f32(),
            index: self.ticks,
            size: surface.size(),
        };
        self.ticks += 1;

        trace!("tick {} at {}s", frame.index, frame.time);

        let uniforms = scene.uniforms(&frame);
        surface.draw(&uniforms);
        frame
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bytemuck::{Pod, Zeroable};

    use super::*;

    #[repr(C)]
    #[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq)]
    struct Echo {
        time: f32,
        width: u32,
    }

    struct EchoScene;

    impl Scene for EchoScene {
        type Uniforms = Echo;

        fn uniforms(&self, frame: &Frame) -> Echo {
            Echo {
                time: frame.time,
                width: frame.size.width,
            }
        }
    }

    struct Recorder {
        size: screen::Size,
        drawn: Vec<Echo>,
    }

    impl RenderSurface<Echo> for Recorder {
        fn size(&self) -> screen::Size {
            self.size
        }

        fn draw(&mut self, uniforms: &Echo) {
            self.drawn.push(*uniforms);
        }
    }

    #[test]
    fn each_tick_draws_once_with_elapsed_time() {
        let start = Instant::now();
        let mut driver = FrameDriver::starting_at(start);
        let mut surface = Recorder {
            size: screen::Size::new(640, 480),
            drawn: Vec::new(),
        };

        let first = driver.tick_at(start, &EchoScene, &mut surface);
        let second = driver.tick_at(start + Duration::from_millis(1500), &EchoScene, &mut surface);

        assert_eq!(first.index, 0);
        assert_eq!(second.index, 1);
        assert_eq!(driver.ticks(), 2);
        assert_eq!(
            surface.drawn,
            vec![
                Echo {
                    time: 0.0,
                    width: 640
                },
                Echo {
                    time: 1.5,
                    width: 640
                },
            ]
        );
    }

    #[test]
    fn clock_going_backwards_reads_as_zero() {
        let start = Instant::now() + Duration::from_secs(5);
        let mut driver = FrameDriver::starting_at(start);
        let mut surface = Recorder {
            size: screen::Size::new(1, 1),
            drawn: Vec::new(),
        };
        let frame = driver.tick_at(Instant::now(), &EchoScene, &mut surface);
        assert_eq!(frame.time, 0.0);
    }
}
