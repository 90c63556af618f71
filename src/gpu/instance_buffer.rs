//! Growable vertex buffer for per-instance data.
//!
//! Grows 2x when a write exceeds capacity and never shrinks.

/// Per-instance vertex buffer holding a slice of `T`.
pub struct InstanceBuffer<T: bytemuck::Pod> {
    buffer: wgpu::Buffer,
    capacity: usize, // in instances
    len: usize,
    label: String,
    _marker: std::marker::PhantomData<T>,
}

impl<T: bytemuck::Pod> InstanceBuffer<T> {
    /// Buffer with room for `capacity` instances (at least one).
    pub fn new(device: &wgpu::Device, label: &str, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            buffer: Self::allocate(device, label, capacity),
            capacity,
            len: 0,
            label: label.to_owned(),
            _marker: std::marker::PhantomData,
        }
    }

    fn allocate(
        device: &wgpu::Device,
        label: &str,
        capacity: usize,
    ) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: (capacity * size_of::<T>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    /// Replace the contents with `data`, reallocating if it does not fit.
    ///
    /// Returns `true` if the buffer was reallocated.
    pub fn write(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        data: &[T],
    ) -> bool {
        let reallocated = data.len() > self.capacity;
        if reallocated {
            self.capacity = (data.len() * 2).max(self.capacity * 2);
            self.buffer = Self::allocate(device, &self.label, self.capacity);
            log::debug!(
                "{} grown to {} instances",
                self.label,
                self.capacity
            );
        }
        if !data.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(data));
        }
        self.len = data.len();
        reallocated
    }

    /// Number of instances written by the last [`write`](Self::write).
    #[must_use]
    pub fn len(&self) -> u32 {
        self.len as u32
    }

    /// Whether the last write was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Slice covering the written instances, for `set_vertex_buffer`.
    #[must_use]
    pub fn slice(&self) -> wgpu::BufferSlice<'_> {
        self.buffer.slice(..(self.len * size_of::<T>()) as u64)
    }
}
