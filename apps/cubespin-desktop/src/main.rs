use anyhow::{Context, Result};
use clap::Parser;
use cubespin_common::WindowSize;
use cubespin_input::{Action, wheel_direction};
use cubespin_kernel::{Scene, SceneHandler, TickSchedule};
use cubespin_render::FrameView;
use cubespin_render_wgpu::{GpuContext, WgpuRenderer};
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

const WINDOW_TITLE: &str = "Rotating Cube - Zoom with +/- or Scroll";
const WINDOW_SIZE: WindowSize = WindowSize::new(800, 600);

#[derive(Parser)]
#[command(
    name = "cubespin-desktop",
    about = "Rotating cube; zoom with +/- or the mouse wheel"
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Window and GPU resources, created once the event loop is running.
struct Graphics {
    window: Arc<Window>,
    gpu: GpuContext,
    renderer: WgpuRenderer,
}

/// Application state.
struct CubeApp {
    scene: Scene,
    schedule: Option<TickSchedule>,
    graphics: Option<Graphics>,
    startup_error: Option<anyhow::Error>,
}

impl CubeApp {
    fn new() -> Self {
        Self {
            scene: Scene::new(WINDOW_SIZE),
            schedule: None,
            graphics: None,
            startup_error: None,
        }
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(WINDOW_SIZE.width, WINDOW_SIZE.height));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let size = window.inner_size();
        let gpu = GpuContext::new(window.clone(), size.width, size.height)
            .context("failed to initialize GPU")?;
        let (width, height) = gpu.size();
        let renderer = WgpuRenderer::new(gpu.device(), gpu.format(), width, height);

        self.scene.resize(WindowSize::new(size.width, size.height));
        tracing::info!("window created at {}x{}", size.width, size.height);

        self.graphics = Some(Graphics {
            window,
            gpu,
            renderer,
        });
        Ok(())
    }
}

impl SceneHandler for CubeApp {
    fn on_frame(&mut self) {
        let Some(graphics) = &self.graphics else {
            return;
        };

        let frame = match graphics.gpu.acquire_frame() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::warn!("surface lost, reconfiguring");
                graphics.gpu.reconfigure();
                return;
            }
            Err(e) => {
                tracing::error!("surface error: {e}");
                return;
            }
        };

        let target = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        graphics.renderer.render(
            graphics.gpu.device(),
            graphics.gpu.queue(),
            &target,
            &FrameView::from_scene(&self.scene),
        );

        graphics.window.pre_present_notify();
        frame.present();
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        if let Some(graphics) = &mut self.graphics {
            graphics.gpu.resize(width, height);
            let (w, h) = graphics.gpu.size();
            graphics.renderer.resize(graphics.gpu.device(), w, h);
        }
        self.scene.resize(WindowSize::new(width, height));
    }

    fn on_key(&mut self, key: char) {
        self.scene.apply(Action::from_char(key));
    }

    fn on_wheel(&mut self, direction: i32) {
        self.scene.apply(Action::from_wheel(direction));
    }

    fn on_tick(&mut self) {
        self.scene.tick();
        if let Some(graphics) = &self.graphics {
            graphics.window.request_redraw();
        }
    }
}

impl ApplicationHandler for CubeApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_some() {
            return;
        }

        if let Err(e) = self.init_graphics(event_loop) {
            tracing::error!("{e:#}");
            self.startup_error = Some(e);
            event_loop.exit();
            return;
        }

        self.schedule = Some(TickSchedule::start(Instant::now()));
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("window closed");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                self.on_resize(size.width, size.height);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        text: Some(text),
                        ..
                    },
                ..
            } => {
                for key in text.chars() {
                    self.on_key(key);
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let delta_y = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
                };
                if let Some(direction) = wheel_direction(delta_y) {
                    self.on_wheel(direction);
                }
            }
            WindowEvent::RedrawRequested => {
                self.on_frame();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(mut schedule) = self.schedule else {
            return;
        };

        let now = Instant::now();
        if schedule.is_due(now) {
            self.on_tick();
            schedule.rearm(now);
        }
        self.schedule = Some(schedule);
        event_loop.set_control_flow(ControlFlow::WaitUntil(schedule.next_deadline()));
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();

    tracing::info!("cubespin-desktop starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = CubeApp::new();
    event_loop.run_app(&mut app)?;

    if let Some(err) = app.startup_error.take() {
        return Err(err);
    }

    Ok(())
}
