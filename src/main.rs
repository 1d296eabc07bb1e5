//! Noise Generator - procedural noise texture on a full-window quad
//!
//! Perlin noise scrolls diagonally; uniform static stays put.
//! Press ESC to quit, or pass `--export` to write a PNG without a window.

use std::error::Error;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use noisefield::animation::ScrollTimer;
use noisefield::cli::Args;
use noisefield::error::NoiseError;
use noisefield::params::{AnimationConfig, RenderConfig};
use noisefield::rendering::RenderSystem;
use noisefield::texture::NoiseImage;

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    // Noise texture and its scroll animation
    image: NoiseImage,
    timer: ScrollTimer,

    render_config: RenderConfig,

    /// Setup failure to report once the event loop exits
    failure: Option<NoiseError>,
}

impl App {
    fn new(image: NoiseImage, render_config: RenderConfig, animation: &AnimationConfig) -> Self {
        Self {
            window: None,
            render_system: None,
            image,
            timer: ScrollTimer::new(animation),
            render_config,
            failure: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: NoiseError) {
        tracing::error!(%error, "shutting down");
        self.failure = Some(error);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        let window_attributes = Window::default_attributes()
            .with_title(self.render_config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ))
            .with_resizable(false);

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.fail(event_loop, NoiseError::Render(format!("failed to create window: {}", e)));
                return;
            }
        };

        let render_system = match pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            &self.image,
            &self.render_config,
        )) {
            Ok(system) => system,
            Err(e) => {
                self.fail(event_loop, e);
                return;
            }
        };

        tracing::info!("noise generator running, press ESC to quit");

        self.window = Some(window);
        self.render_system = Some(render_system);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(render_system) = self.render_system.as_mut() {
                    render_system.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.render_frame(event_loop),
            _ => {}
        }
    }
}

impl App {
    /// Advance the scroll offset and draw a frame
    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render_system) = self.render_system.as_mut() else {
            return;
        };

        render_system.set_offset(self.timer.tick());

        match render_system.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::debug!("surface lost, reconfiguring");
                render_system.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                self.fail(event_loop, NoiseError::Render("GPU out of memory".to_string()));
            }
            Err(e) => tracing::warn!(error = ?e, "frame skipped"),
        }
    }
}

fn initialise_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    initialise_tracing();
    let args = Args::parse();

    let params = args.noise_params();
    let source = params.build_source()?;
    tracing::info!(
        variant = source.name(),
        seed = params.seed,
        size = params.size,
        octaves = params.octaves,
        persistence = params.persistence,
        "generating noise texture"
    );

    let start = Instant::now();
    let image = NoiseImage::generate(
        source.as_ref(),
        params.size,
        params.size,
        params.pixel_step(),
        0.0,
    )?;
    tracing::debug!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        mean = image.mean(),
        "noise texture ready"
    );

    if let Some(path) = &args.export {
        image.save_png(path)?;
        tracing::info!(path = %path.display(), "wrote noise texture");
        return Ok(());
    }

    let animation = args.animation_config(source.animated());
    let mut app = App::new(image, args.render_config(), &animation);
    let event_loop = EventLoop::new()?;
    event_loop.run_app(&mut app)?;

    match app.failure.take() {
        Some(error) => Err(error.into()),
        None => Ok(()),
    }
}
