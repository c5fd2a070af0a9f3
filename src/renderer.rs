//! Fullscreen fragment-shader renderer.
//!
//! Every scene is drawn the same way: a four-vertex triangle strip covering the
//! surface, with the scene's uniform bundle bound at `@group(0) @binding(0)`.
//! The shader must provide `vertex_main` and `fragment_main`.

use log::{debug, info, warn};
use winit::{dpi::PhysicalSize, window::Window};

use crate::{
    encoder::{self, CommandEncoderExt},
    error::Error,
    frame::RenderSurface,
    screen,
    uniform::{self, Uniform},
};

pub struct Renderer<U> {
    surface: wgpu::Surface,
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface_configuration: wgpu::SurfaceConfiguration,
    render_pipeline: wgpu::RenderPipeline,
    uniforms: Uniform<U>,
    bind_group: wgpu::BindGroup,
}

impl<U: bytemuck::Pod> Renderer<U> {
    pub fn new(window: &Window, label: &str, shader_source: &str) -> Result<Self, Error> {
        let instance = wgpu::Instance::new(wgpu::Backends::all());

        let size = window.inner_size();
        let surface = unsafe { instance.create_surface(window) };

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: Default::default(),
            force_fallback_adapter: false,
            compatible_surface: Some(&surface),
        }))
        .ok_or(Error::NoAdapter)?;
        info!("using adapter {:?}", adapter.get_info());

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("device"),
                features: wgpu::Features::empty(),
                limits: wgpu::Limits::downlevel_webgl2_defaults().using_resolution(adapter.limits()),
            },
            None,
        ))?;

        let format = surface_format(&surface.get_supported_formats(&adapter))
            .ok_or(Error::IncompatibleSurface)?;
        debug!("surface format {:?}", format);

        let surface_configuration = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: wgpu::CompositeAlphaMode::Auto,
        };
        surface.configure(&device, &surface_configuration);

        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let shader_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("uniforms-bind-group-layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let render_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("render-pipeline-layout"),
                bind_group_layouts: &[&bind_group_layout],
                push_constant_ranges: &[],
            });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("render-pipeline"),
            layout: Some(&render_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader_module,
                entry_point: "vertex_main",
                buffers: &[],
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleStrip,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader_module,
                entry_point: "fragment_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_configuration.format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            multiview: None,
        });

        if let Some(error) = pollster::block_on(device.pop_error_scope()) {
            return Err(Error::Shader(error.to_string()));
        }

        let uniforms = uniform::Builder::new(<U as bytemuck::Zeroable>::zeroed())
            .with_label("uniforms")
            .create(&device);

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("uniforms-bind-group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniforms.binding_resource(),
            }],
        });

        Ok(Self {
            surface,
            device,
            queue,
            surface_configuration,
            render_pipeline,
            uniforms,
            bind_group,
        })
    }

    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        if screen::Size::from(size).is_empty() {
            debug!("ignoring resize to {:?}", size);
            return;
        }

        debug!("resizing to {:?}", size);
        self.surface_configuration.width = size.width;
        self.surface_configuration.height = size.height;
        self.surface
            .configure(&self.device, &self.surface_configuration);
    }
}

impl<U: bytemuck::Pod> RenderSurface<U> for Renderer<U> {
    fn size(&self) -> screen::Size {
        screen::Size::new(
            self.surface_configuration.width,
            self.surface_configuration.height,
        )
    }

    fn draw(&mut self, uniforms: &U) {
        let surface_texture = match self.surface.get_current_texture() {
            Ok(surface_texture) => surface_texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                debug!("surface lost, reconfiguring");
                self.surface
                    .configure(&self.device, &self.surface_configuration);
                return;
            }
            Err(error) => {
                warn!("skipping frame: {}", error);
                return;
            }
        };

        let surface_texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.uniforms.write(&self.queue, uniforms);

        let command_buffer = encoder::record(&self.device, "render-pass", |command_encoder| {
            command_encoder.with_render_pass(
                &wgpu::RenderPassDescriptor {
                    label: Some("render-pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &surface_texture_view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                            store: true,
                        },
                    })],
                    depth_stencil_attachment: None,
                },
                |render_pass| {
                    render_pass.set_pipeline(&self.render_pipeline);
                    render_pass.set_bind_group(0, &self.bind_group, &[]);
                    render_pass.draw(0..4, 0..1);
                },
            )
        });

        self.queue.submit([command_buffer]);
        surface_texture.present();
    }
}

/// Shaders write colour values as-is, so prefer a format that stores them
/// without sRGB encoding.
pub fn surface_format(formats: &[wgpu::TextureFormat]) -> Option<wgpu::TextureFormat> {
    formats
        .iter()
        .copied()
        .find(|format| !format.describe().srgb)
        .or_else(|| formats.first().copied())
}

#[cfg(test)]
mod tests {
    use wgpu::TextureFormat;

    use super::*;

    #[test]
    fn prefers_linear_format() {
        assert_eq!(
            surface_format(&[TextureFormat::Bgra8UnormSrgb, TextureFormat::Bgra8Unorm]),
            Some(TextureFormat::Bgra8Unorm)
        );
        assert_eq!(
            surface_format(&[TextureFormat::Rgba8Unorm, TextureFormat::Rgba8UnormSrgb]),
            Some(TextureFormat::Rgba8Unorm)
        );
    }

    #[test]
    fn falls_back_to_first_srgb_format() {
        assert_eq!(
            surface_format(&[TextureFormat::Rgba8UnormSrgb, TextureFormat::Bgra8UnormSrgb]),
            Some(TextureFormat::Rgba8UnormSrgb)
        );
        assert_eq!(surface_format(&[]), None);
    }
}
