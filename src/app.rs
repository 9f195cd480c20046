use std::sync::Arc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{Window, WindowId};

use crate::animation::Driver;
use crate::canvas::StrokeCanvas;
use crate::config::Config;
use crate::error::Error;
use crate::frame::FrameRenderer;
use crate::gpu::{GpuContext, StrokeBuffers, StrokePipeline};
use crate::viewport::Viewport;

/// Everything that only exists once the window is up
struct Graphics {
    window: Arc<Window>,
    gpu: GpuContext,
    buffers: StrokeBuffers,
    pipeline: StrokePipeline,
    bind_group: wgpu::BindGroup,
}

impl Graphics {
    fn new(event_loop: &ActiveEventLoop, config: &Config) -> Result<Self, Error> {
        let window_attrs = Window::default_attributes()
            .with_title("Pulsing Polygon")
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.logical_width,
                config.logical_height,
            ));
        let window = Arc::new(event_loop.create_window(window_attrs)?);

        log::info!("Creating GPU context...");
        let gpu = pollster::block_on(GpuContext::new(window.clone()))?;

        let buffers = StrokeBuffers::new(&gpu.device);
        let pipeline = StrokePipeline::new(&gpu.device, gpu.format());
        let bind_group = pipeline.create_bind_group(&gpu.device, &buffers.screen_buffer);

        Ok(Self {
            window,
            gpu,
            buffers,
            pipeline,
            bind_group,
        })
    }
}

/// Application state
pub struct App {
    config: Config,
    graphics: Option<Graphics>,
    driver: Driver,
    renderer: FrameRenderer,
    canvas: StrokeCanvas,
    viewport: Viewport,
    /// Side count currently shown in the window title
    titled_sides: Option<usize>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let viewport = Viewport::fit(
            config.logical_width as u32,
            config.logical_height as u32,
            &config,
        );
        Self {
            driver: Driver::new(&config),
            renderer: FrameRenderer::new(&config),
            canvas: StrokeCanvas::new(),
            viewport,
            titled_sides: None,
            graphics: None,
            config,
        }
    }

    /// Refit the logical canvas to the window and restart the oscillation
    fn on_resize(&mut self, size: PhysicalSize<u32>) {
        self.viewport = Viewport::fit(size.width, size.height, &self.config);
        log::info!(
            "Window resized to {}x{}, scale {:.3}",
            size.width,
            size.height,
            self.viewport.scale()
        );
        if self.viewport.is_empty() {
            log::warn!("Viewport collapsed, clamping scale to {}", self.config.min_scale);
        }

        self.viewport.apply(&mut self.canvas);
        // Geometry batched under the old transform would no longer line up
        self.canvas.clear();

        if let Some(graphics) = &mut self.graphics {
            graphics.gpu.resize(size);
            graphics
                .buffers
                .update_screen(&graphics.gpu.queue, size.width, size.height);
        }

        self.driver.restart(Instant::now());
    }

    /// New window title, only when the drawn side count changed
    fn title_update(&mut self, sides: usize) -> Option<String> {
        if self.titled_sides == Some(sides) {
            return None;
        }
        self.titled_sides = Some(sides);
        Some(format!(
            "Pulsing Polygon - {} sides ({:?})",
            sides,
            self.driver.oscillator().direction()
        ))
    }

    fn render(&mut self) {
        let Some(graphics) = &mut self.graphics else {
            return;
        };
        if self.viewport.is_empty() {
            return;
        }

        let gpu = &graphics.gpu;
        graphics
            .buffers
            .upload(&gpu.device, &gpu.queue, self.canvas.vertices());

        let output = match gpu.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.reconfigure();
                return;
            }
            Err(e) => {
                log::error!("Surface error: {:?}", e);
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame-encoder"),
            });

        graphics.pipeline.draw(
            &mut encoder,
            &view,
            &graphics.bind_group,
            &graphics.buffers,
            self.config.background,
        );

        gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_some() {
            return;
        }

        log::info!("Initializing pulsing polygon...");
        log::info!(
            "Logical canvas {}x{}, n in [{}, {}], step {}, perimeter {:.1}",
            self.config.logical_width,
            self.config.logical_height,
            self.config.n_min,
            self.config.n_max,
            self.config.step.name(),
            self.renderer.polygon().perimeter()
        );

        match Graphics::new(event_loop, &self.config) {
            Ok(graphics) => {
                let size = graphics.window.inner_size();
                self.graphics = Some(graphics);
                self.on_resize(size);
                log::info!("Initialization complete!");
            }
            Err(e) => {
                log::error!("Failed to initialize graphics: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting...");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                self.on_resize(new_size);
            }
            WindowEvent::RedrawRequested => {
                self.render();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(sides) = self.driver.poll(Instant::now()) {
            self.renderer.draw(&mut self.canvas, sides);
            let title = self.title_update(sides);
            if let Some(graphics) = &self.graphics {
                if let Some(title) = title {
                    graphics.window.set_title(&title);
                }
                graphics.window.request_redraw();
            }
        }

        match self.driver.next_deadline() {
            Some(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Direction;
    use std::time::Duration;

    #[test]
    fn test_resize_refits_and_restarts() {
        let mut app = App::new(Config::default());
        app.on_resize(PhysicalSize::new(800, 600));

        let mut now = Instant::now();
        for _ in 0..10 {
            now += Duration::from_secs(2);
            assert!(app.driver.poll(now).is_some());
        }
        assert!(app.driver.oscillator().n() > 6.0);

        let before = Instant::now();
        app.on_resize(PhysicalSize::new(1600, 1200));

        assert_eq!(app.viewport.scale(), 2.0);
        assert_eq!(app.canvas.current_scale(), 2.0);
        assert!(app.canvas.vertices().is_empty());

        let deadline = app.driver.next_deadline().expect("tick re-armed");
        assert!(deadline >= before && deadline <= Instant::now());
        assert_eq!(app.driver.oscillator().n(), 6.0);
        assert_eq!(app.driver.oscillator().direction(), Direction::Growing);
    }

    #[test]
    fn test_collapsed_resize_still_restarts() {
        let mut app = App::new(Config::default());
        app.on_resize(PhysicalSize::new(0, 0));
        assert_eq!(app.viewport.scale(), app.config.min_scale);
        assert!(app.driver.next_deadline().is_some());
    }

    #[test]
    fn test_title_only_on_side_change() {
        let mut app = App::new(Config::default());
        assert!(app.title_update(6).is_some());
        assert!(app.title_update(6).is_none());
        let title = app.title_update(7).expect("new side count");
        assert!(title.contains("7 sides"));
        assert!(app.title_update(7).is_none());
    }
}
