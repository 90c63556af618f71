//! A single uniform buffer with its bind group.

use wgpu::util::DeviceExt;

/// GPU copy of a `Pod` uniform value, bound at binding 0 of its own group.
pub struct UniformBinding<T: bytemuck::Pod> {
    /// CPU-side value last written.
    pub value: T,
    /// Backing uniform buffer.
    pub buffer: wgpu::Buffer,
    /// Layout with one uniform entry at binding 0.
    pub layout: wgpu::BindGroupLayout,
    /// Bind group referencing `buffer`.
    pub bind_group: wgpu::BindGroup,
}

impl<T: bytemuck::Pod> UniformBinding<T> {
    /// Upload `value` into a new buffer visible to `visibility` stages.
    pub fn new(
        device: &wgpu::Device,
        label: &str,
        visibility: wgpu::ShaderStages,
        value: T,
    ) -> Self {
        let buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} Buffer")),
                contents: bytemuck::cast_slice(&[value]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });

        let layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some(&format!("{label} Bind Group Layout")),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
            label: Some(&format!("{label} Bind Group")),
        });

        Self {
            value,
            buffer,
            layout,
            bind_group,
        }
    }

    /// Store `value` and queue a write to the GPU copy.
    pub fn update(&mut self, queue: &wgpu::Queue, value: T) {
        self.value = value;
        queue.write_buffer(
            &self.buffer,
            0,
            bytemuck::cast_slice(&[self.value]),
        );
    }
}
