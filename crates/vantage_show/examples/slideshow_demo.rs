//! Slideshow Demo
//!
//! Drives the motion engine through a scripted frame loop:
//! - continuous-zoom slideshow with hand-offs between four assets
//! - a pause/resume round trip in the middle of a drift
//! - a stretch of immersive tilt input once the show stops
//!
//! The render collaborator is simulated by consuming the coalesced
//! render signal each frame and counting how many frames asked for a
//! redraw.
//!
//! Run with: cargo run -p vantage_show --example slideshow_demo

use tracing::info;
use tracing_subscriber::EnvFilter;
use vantage_core::{
    AssetNavigator, CameraPose, CameraRig, ContinuousKind, ImmersiveError, NavError,
    OrientationSample, RenderSignal, SensorBridge, TransitionMode, Vec3,
};
use vantage_motion::{AnimationKind, ContinuousSpec, MotionEngine, TransitionSpec};
use vantage_show::{
    ImmersiveController, ImmersiveUpdateContext, SlideshowController, SlideshowOptions,
};

const DT: f32 = 1.0 / 60.0;

/// Four-asset gallery with authored home poses
struct GalleryNav {
    index: usize,
    homes: Vec<CameraPose>,
}

impl GalleryNav {
    fn new() -> Self {
        let homes = vec![
            CameraPose::new(Vec3::new(0.0, 1.5, 8.0), Vec3::ZERO),
            CameraPose::new(Vec3::new(4.0, 2.0, 6.0), Vec3::new(1.0, 0.5, 0.0)),
            CameraPose::new(Vec3::new(-3.0, 1.0, 7.0), Vec3::new(-0.5, 0.0, 0.0)),
            CameraPose::new(Vec3::new(0.0, 4.0, 5.0), Vec3::new(0.0, 1.0, 0.0)),
        ];
        Self { index: 0, homes }
    }
}

impl AssetNavigator for GalleryNav {
    fn current_index(&self) -> usize {
        self.index
    }

    fn asset_count(&self) -> usize {
        self.homes.len()
    }

    fn load_next(&mut self) -> Result<usize, NavError> {
        self.index = (self.index + 1) % self.homes.len();
        Ok(self.index)
    }

    fn load_prev(&mut self) -> Result<usize, NavError> {
        self.index = (self.index + self.homes.len() - 1) % self.homes.len();
        Ok(self.index)
    }

    fn home_pose(&self) -> CameraPose {
        self.homes[self.index]
    }
}

/// Sensor bridge that always grants permission
struct GrantingBridge;

impl SensorBridge for GrantingBridge {
    fn start_listening(&mut self) -> Result<(), ImmersiveError> {
        Ok(())
    }

    fn stop_listening(&mut self) {}
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let mut nav = GalleryNav::new();
    let mut engine = MotionEngine::new(CameraRig::new(nav.home_pose()));
    let render_signal = engine.rig().render_signal();
    let mut frames_rendered = 0u32;

    let mut show = SlideshowController::new(SlideshowOptions {
        slide_duration_ms: 1_500,
        transition: TransitionSpec::new(TransitionMode::ContinuousZoom).with_duration_ms(700),
        continuous: Some(ContinuousSpec::new(ContinuousKind::Zoom).with_duration_ms(3_000)),
        start_offset_ms: 1_200,
        advance_retry_ms: 1_000,
    });

    info!(assets = nav.asset_count(), "starting slideshow");
    show.begin(&mut engine);
    run(
        &mut engine,
        &mut show,
        &mut nav,
        &render_signal,
        &mut frames_rendered,
        4.0,
    );

    info!("pausing mid-drift");
    show.pause(&mut engine, &nav);
    run(
        &mut engine,
        &mut show,
        &mut nav,
        &render_signal,
        &mut frames_rendered,
        1.0,
    );

    info!("resuming");
    show.resume(&mut engine, &nav);
    run(
        &mut engine,
        &mut show,
        &mut nav,
        &render_signal,
        &mut frames_rendered,
        4.0,
    );

    info!("stopping the show, switching to immersive input");
    show.stop(&mut engine);

    let mut bridge = GrantingBridge;
    let mut immersive = ImmersiveController::new();
    if let Err(err) = immersive.enable(&mut bridge) {
        info!("immersive input unavailable: {err}");
        return;
    }

    for frame in 0..180 {
        let t = frame as f32 * DT;
        immersive.on_orientation(OrientationSample {
            alpha: 0.0,
            beta: 6.0 * (t * 1.3).sin(),
            gamma: 25.0 * t.sin(),
        });

        engine.tick(DT);
        let slide_active = engine.is_active(AnimationKind::Slide);
        let playing = show.is_playing();
        immersive.update(ImmersiveUpdateContext {
            rig: engine.rig_mut(),
            dt: DT,
            slide_active,
            slideshow_playing: playing,
        });
        if render_signal.take() {
            frames_rendered += 1;
        }
    }
    immersive.disable(&mut bridge);

    let pose = engine.rig().pose();
    info!(
        "immersive left the camera at ({:.2}, {:.2}, {:.2})",
        pose.position.x, pose.position.y, pose.position.z
    );
    info!(frames_rendered, "demo finished");
}

fn run(
    engine: &mut MotionEngine,
    show: &mut SlideshowController,
    nav: &mut GalleryNav,
    render_signal: &RenderSignal,
    frames_rendered: &mut u32,
    secs: f32,
) {
    let mut last_index = nav.current_index();
    for _ in 0..(secs / DT).ceil() as usize {
        engine.tick(DT);
        show.tick(engine, nav);
        if render_signal.take() {
            *frames_rendered += 1;
        }
        if nav.current_index() != last_index {
            last_index = nav.current_index();
            let pose = engine.rig().pose();
            info!(
                index = last_index,
                "now showing asset, camera at ({:.1}, {:.1}, {:.1})",
                pose.position.x,
                pose.position.y,
                pose.position.z
            );
        }
    }
}
