/// Everything that ends a session.
///
/// None of these are retried: the caller logs the error and exits.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("could not create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("could not initialize the GPU: no compatible adapter")]
    NoAdapter,
    #[error("could not initialize the GPU: surface has no supported formats")]
    IncompatibleSurface,
    #[error("could not initialize the GPU: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("could not initialize shaders: {0}")]
    Shader(String),
    #[error("could not start worker threads: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error("could not write image: {0}")]
    Image(#[from] image::ImageError),
}
