use wgpu::{Buffer, BufferUsages, Device, Queue};

use super::Vertex;

/// Room for the guide circle plus a 100-gon outline without regrowing
const INITIAL_VERTEX_CAPACITY: usize = 2048;

/// Screen parameters passed to the stroke shader (16 bytes, aligned to 16)
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ScreenParams {
    pub width: f32,
    pub height: f32,
    pub _padding: [f32; 2],
}

/// Growable vertex buffer plus the screen-size uniform
pub struct StrokeBuffers {
    pub vertex_buffer: Buffer,
    pub screen_buffer: Buffer,
    /// Capacity of `vertex_buffer`, in vertices
    capacity: usize,
    vertex_count: u32,
}

impl StrokeBuffers {
    pub fn new(device: &Device) -> Self {
        let screen_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("screen-params-buffer"),
            size: std::mem::size_of::<ScreenParams>() as u64,
            usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            vertex_buffer: create_vertex_buffer(device, INITIAL_VERTEX_CAPACITY),
            screen_buffer,
            capacity: INITIAL_VERTEX_CAPACITY,
            vertex_count: 0,
        }
    }

    /// Replace the buffer contents with this frame's vertices, growing if needed
    pub fn upload(&mut self, device: &Device, queue: &Queue, vertices: &[Vertex]) {
        if vertices.len() > self.capacity {
            self.capacity = vertices.len().next_power_of_two();
            log::debug!("Growing vertex buffer to {} vertices", self.capacity);
            self.vertex_buffer = create_vertex_buffer(device, self.capacity);
        }
        if !vertices.is_empty() {
            queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(vertices));
        }
        self.vertex_count = vertices.len() as u32;
    }

    /// Update the device-pixel size the shader maps into clip space
    pub fn update_screen(&self, queue: &Queue, width: u32, height: u32) {
        let params = ScreenParams {
            width: width.max(1) as f32,
            height: height.max(1) as f32,
            _padding: [0.0, 0.0],
        };
        queue.write_buffer(&self.screen_buffer, 0, bytemuck::bytes_of(&params));
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }
}

fn create_vertex_buffer(device: &Device, capacity: usize) -> Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("stroke-vertex-buffer"),
        size: (capacity * std::mem::size_of::<Vertex>()) as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}
