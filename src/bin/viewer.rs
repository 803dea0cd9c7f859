use std::error::Error;
use std::sync::Arc;

use log::{info, warn};
use pixels::{Pixels, SurfaceTexture};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes};

use tilecaster::visualization::render_minimap;
use tilecaster::{Intent, Player, Ray, RayCaster, World, load_world};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args();
    let _binary = args.next();
    let world = match args.next() {
        Some(path) => load_world(&path)?,
        None => {
            info!("no world file given, using the demo map");
            World::demo()
        }
    };

    let event_loop = EventLoop::new()?;
    let mut app = ViewerApp::new(world)?;
    event_loop.run_app(&mut app)?;

    Ok(())
}

struct ViewerApp {
    world: World,
    player: Player,
    caster: RayCaster,
    rays: Vec<Ray>,
    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
}

impl ViewerApp {
    fn new(world: World) -> Result<Self, tilecaster::CasterError> {
        let player = world.spawn_player()?;
        let caster = RayCaster::from_config(&world.config, &world.grid)?;
        info!(
            "casting {} rays over {:.1} degrees",
            caster.ray_count,
            caster.fov.to_degrees()
        );
        Ok(Self {
            world,
            player,
            caster,
            rays: Vec::new(),
            window: None,
            pixels: None,
        })
    }

    fn buffer_size(&self) -> (u32, u32) {
        let info = self.world.grid.info();
        let scale = self.world.config.minimap_scale;
        (
            (info.world_width() * scale).ceil().max(1.0) as u32,
            (info.world_height() * scale).ceil().max(1.0) as u32,
        )
    }

    fn handle_key(&mut self, code: KeyCode, state: ElementState) {
        let pressed = state == ElementState::Pressed;
        match code {
            KeyCode::ArrowUp => self.player.walk = held(pressed, Intent::Positive),
            KeyCode::ArrowDown => self.player.walk = held(pressed, Intent::Negative),
            KeyCode::ArrowRight => self.player.turn = held(pressed, Intent::Positive),
            KeyCode::ArrowLeft => self.player.turn = held(pressed, Intent::Negative),
            _ => {}
        }
    }

    fn step(&mut self) {
        self.player.update(&self.world.grid);
        self.rays = self.caster.cast(&self.player, &self.world.grid);
    }
}

fn held(pressed: bool, intent: Intent) -> Intent {
    if pressed { intent } else { Intent::Idle }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let info = self.world.grid.info();
        let window = match event_loop.create_window(
            WindowAttributes::default()
                .with_title("Tilecaster")
                .with_inner_size(PhysicalSize::new(
                    info.world_width() as u32,
                    info.world_height() as u32,
                )),
        ) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                warn!("failed to create window: {err}");
                event_loop.exit();
                return;
            }
        };

        let window_size = window.inner_size();
        let (buffer_width, buffer_height) = self.buffer_size();
        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, window.clone());
        let pixels = match Pixels::new(buffer_width, buffer_height, surface_texture) {
            Ok(pixels) => pixels,
            Err(err) => {
                warn!("failed to create pixels surface: {err}");
                event_loop.exit();
                return;
            }
        };

        self.window = Some(window);
        self.pixels = Some(pixels);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        repeat: false,
                        ..
                    },
                ..
            } => self.handle_key(code, state),
            WindowEvent::Resized(size) => {
                if let Some(pixels) = self.pixels.as_mut() {
                    if pixels.resize_surface(size.width, size.height).is_err() {
                        event_loop.exit();
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                self.step();
                let image = render_minimap(
                    &self.world.grid,
                    &self.player,
                    &self.rays,
                    self.world.config.minimap_scale,
                );
                if let Some(pixels) = self.pixels.as_mut() {
                    let frame = pixels.frame_mut();
                    if frame.len() == image.as_raw().len() {
                        frame.copy_from_slice(image.as_raw());
                    }
                    if pixels.render().is_err() {
                        event_loop.exit();
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
