use clap::{Parser, Subcommand};
use cubespin_common::WindowSize;
use cubespin_input::Action;
use cubespin_kernel::{
    FAR_PLANE, INITIAL_FOV_DEG, MAX_FOV_DEG, MIN_FOV_DEG, NEAR_PLANE, Projection,
    ROTATION_STEP_DEG, Scene, SceneHandler, TICK_PERIOD, ZOOM_STEP_DEG,
};
use cubespin_render::{Camera, DebugTextRenderer, FrameView, Renderer};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cubespin-cli", about = "Headless driver for the cube scene")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and scene constants
    Info,
    /// Feed ticks, keys and wheel steps through the scene and print the frame
    Simulate {
        /// Number of animation ticks to run
        #[arg(short, long, default_value = "0")]
        ticks: u64,
        /// Characters sent to the keyboard handler, in order
        #[arg(short, long, default_value = "", allow_hyphen_values = true)]
        keys: String,
        /// Wheel direction sent to the wheel handler; repeat for more steps
        #[arg(long, allow_negative_numbers = true)]
        wheel: Vec<i32>,
        /// Window width in pixels
        #[arg(long, default_value = "800")]
        width: u32,
        /// Window height in pixels
        #[arg(long, default_value = "600")]
        height: u32,
        /// Print a JSON report instead of the text frame
        #[arg(long)]
        json: bool,
    },
}

/// Scene driven by the command line instead of a window.
struct HeadlessScene {
    scene: Scene,
    renderer: DebugTextRenderer,
    ticks: u64,
    redraw_requested: bool,
    last_frame: Option<String>,
}

impl HeadlessScene {
    fn new(window: WindowSize) -> Self {
        Self {
            scene: Scene::new(window),
            renderer: DebugTextRenderer::new(),
            ticks: 0,
            redraw_requested: false,
            last_frame: None,
        }
    }

    fn report(&self) -> FrameReport {
        FrameReport {
            ticks: self.ticks,
            rotation_deg: self.scene.rotation_deg(),
            fov_deg: self.scene.fov_deg(),
            window: self.scene.window(),
            projection: self.scene.projection(),
        }
    }
}

impl SceneHandler for HeadlessScene {
    fn on_frame(&mut self) {
        let view = FrameView::from_scene(&self.scene);
        self.last_frame = Some(self.renderer.render(&view));
        self.redraw_requested = false;
    }

    fn on_resize(&mut self, width: u32, height: u32) {
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
        self.ticks += 1;
        self.redraw_requested = true;
    }
}

#[derive(Debug, Serialize)]
struct FrameReport {
    ticks: u64,
    rotation_deg: f32,
    fov_deg: f32,
    window: WindowSize,
    projection: Projection,
}

/// Run input first, then ticks, then draw one frame. Redraw requests from
/// the ticks coalesce into that single frame.
fn simulate(ticks: u64, keys: &str, wheel: &[i32], window: WindowSize) -> HeadlessScene {
    let mut headless = HeadlessScene::new(window);
    headless.on_resize(window.width, window.height);

    for key in keys.chars() {
        headless.on_key(key);
    }
    for &direction in wheel {
        headless.on_wheel(direction);
    }
    for _ in 0..ticks {
        headless.on_tick();
    }

    tracing::debug!(
        ticks,
        redraw_requested = headless.redraw_requested,
        "simulation finished"
    );
    headless.on_frame();
    headless
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Info => {
            let eye = Camera::EYE;
            println!("cubespin-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("render: {}", cubespin_render::crate_info());
            println!(
                "fov: initial={INITIAL_FOV_DEG} min={MIN_FOV_DEG} max={MAX_FOV_DEG} step={ZOOM_STEP_DEG}"
            );
            println!(
                "rotation: step={ROTATION_STEP_DEG} per tick, tick={}ms",
                TICK_PERIOD.as_millis()
            );
            println!("clip planes: near={NEAR_PLANE} far={FAR_PLANE}");
            println!("camera: eye=({}, {}, {}) target=origin up=+Y", eye.x, eye.y, eye.z);
        }
        Commands::Simulate {
            ticks,
            keys,
            wheel,
            width,
            height,
            json,
        } => {
            let headless = simulate(ticks, &keys, &wheel, WindowSize::new(width, height));
            if json {
                println!("{}", serde_json::to_string_pretty(&headless.report())?);
            } else if let Some(frame) = &headless.last_frame {
                print!("{frame}");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_advance_rotation() {
        let headless = simulate(10, "", &[], WindowSize::new(800, 600));
        assert_eq!(headless.ticks, 10);
        assert_eq!(headless.scene.rotation_deg(), 15.0);
        assert!(!headless.redraw_requested);
        let frame = headless.last_frame.as_deref().unwrap_or_default();
        assert!(frame.contains("rotation=15.0"));
    }

    #[test]
    fn keys_and_wheel_share_zoom_rules() {
        let headless = simulate(0, "+=x-", &[1, -1, 0, 5], WindowSize::new(800, 600));
        // keys: -2 -2 +0 +2, wheel: -2 +2 +2 -2
        assert_eq!(headless.scene.fov_deg(), 38.0);
    }

    #[test]
    fn many_zoom_ins_clamp() {
        let keys = "+".repeat(20);
        let headless = simulate(0, &keys, &[], WindowSize::new(800, 600));
        assert_eq!(headless.scene.fov_deg(), 1.0);
    }

    #[test]
    fn zero_height_window_reports_width_as_aspect() {
        let headless = simulate(0, "", &[], WindowSize::new(512, 0));
        let report = headless.report();
        assert_eq!(report.projection.aspect, 512.0);
        assert_eq!(report.projection.near, 1.0);
        assert_eq!(report.projection.far, 100.0);
    }

    #[test]
    fn json_report_fields() {
        let headless = simulate(2, "-", &[], WindowSize::new(800, 600));
        let json = serde_json::to_value(headless.report()).unwrap();
        assert_eq!(json["ticks"], 2);
        assert_eq!(json["rotation_deg"], 3.0);
        assert_eq!(json["fov_deg"], 42.0);
        assert_eq!(json["window"]["width"], 800);
        assert_eq!(json["projection"]["far"], 100.0);
    }

    #[test]
    fn cli_parses_negative_wheel_steps() {
        let cli = Cli::try_parse_from([
            "cubespin-cli",
            "simulate",
            "--wheel",
            "-1",
            "--wheel",
            "1",
            "--keys",
            "-+-",
        ])
        .unwrap();
        match cli.command {
            Commands::Simulate { wheel, keys, .. } => {
                assert_eq!(wheel, vec![-1, 1]);
                assert_eq!(keys, "-+-");
            }
            Commands::Info => panic!("expected simulate"),
        }
    }
}
