use crate::animation::StepFunction;

/// Invalid animation or canvas configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("n_min must be at least 3, got {0}")]
    TooFewSides(u32),
    #[error("n_max ({max}) must be greater than n_min ({min})")]
    EmptyRange { min: u32, max: u32 },
    #[error("logical canvas must have a positive size, got {width}x{height}")]
    EmptyCanvas { width: f32, height: f32 },
    #[error("scaling factor must be positive, got {0}")]
    NonPositiveScaling(f32),
    #[error("step function {step:?} is not positive at n = {at}")]
    NonPositiveStep { step: StepFunction, at: f32 },
    #[error("{n_min}-gon reaches {reach} from the centre but only {limit} fits the canvas")]
    PolygonOverflow { n_min: u32, reach: f32, limit: f32 },
    #[error("{0} interval must be non-zero")]
    ZeroInterval(&'static str),
    #[error("minimum scale must be positive, got {0}")]
    NonPositiveMinScale(f32),
    #[error("unknown preset: {0}")]
    UnknownPreset(String),
}

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    CreateWindow(#[from] winit::error::OsError),
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no suitable GPU adapter found")]
    NoAdapter,
    #[error("failed to create device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("surface not supported by adapter")]
    UnsupportedSurface,
}
