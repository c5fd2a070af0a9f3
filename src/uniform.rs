/*!
Typed uniform buffers.

A [`Uniform<A>`] owns a `wgpu` buffer that only ever holds a single `A`, so a
scene can't accidentally upload the wrong bundle to its pipeline.
*/

use std::marker::PhantomData;

use wgpu::util::DeviceExt;

pub struct Uniform<A> {
    buffer: wgpu::Buffer,
    phantom_data: PhantomData<A>,
}

impl<A: bytemuck::Pod> Uniform<A> {
    pub fn write(&self, queue: &wgpu::Queue, contents: &A) {
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(contents));
    }

    pub fn binding_resource(&self) -> wgpu::BindingResource {
        self.buffer.as_entire_binding()
    }
}

pub struct Builder<'a, A> {
    label: Option<&'a str>,
    contents: A,
}

impl<'a, A: bytemuck::Pod> Builder<'a, A> {
    pub fn new(contents: A) -> Self {
        Self {
            label: None,
            contents,
        }
    }

    pub fn with_label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn create(self, device: &wgpu::Device) -> Uniform<A> {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: self.label,
            contents: bytemuck::bytes_of(&self.contents),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        Uniform {
            buffer,
            phantom_data: PhantomData,
        }
    }
}
