mod buffers;
mod context;
mod render;
mod vertex;

pub use buffers::StrokeBuffers;
pub use context::GpuContext;
pub use render::StrokePipeline;
pub use vertex::Vertex;
