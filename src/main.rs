//! Remember entry point
//!
//! Handles platform-specific initialization and runs the game loop.

use remember::Settings;
use remember::platform::{FrameClock, PointerTracker};
use remember::renderer::{self, RenderState};
use remember::sim::{GameEvent, GameState, TickInput, tick};

/// Game instance holding all state
struct Game {
    state: GameState,
    render_state: Option<RenderState>,
    clock: FrameClock,
    pointer: PointerTracker,
}

impl Game {
    fn new(settings: &Settings, seed: u64) -> Self {
        log::info!(
            "{} buttons, show {}s, wait {}s, seed {}",
            settings.button_count,
            settings.show_time,
            settings.wait_time,
            seed
        );
        Self {
            state: GameState::new(settings.game_config(), seed),
            render_state: None,
            clock: FrameClock::new(),
            pointer: PointerTracker::new(),
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.state.set_viewport(width as f32, height as f32);
        if let Some(render_state) = self.render_state.as_mut() {
            render_state.resize(width, height);
        }
    }

    /// Run one update + render. Returns false when rendering cannot continue.
    fn frame(&mut self, now: f64) -> bool {
        let dt = self.clock.delta(now);
        let input = TickInput {
            press: self.pointer.take_press(),
        };
        tick(&mut self.state, &input, dt);
        log_events(&self.state.events);
        self.render()
    }

    fn render(&mut self) -> bool {
        let Some(render_state) = self.render_state.as_mut() else {
            return true;
        };
        let vertices = renderer::compose(&self.state);
        match render_state.render(&vertices) {
            Ok(_) => true,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                render_state.reconfigure();
                true
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
                false
            }
            Err(e) => {
                log::warn!("Render error: {:?}", e);
                true
            }
        }
    }
}

fn log_events(events: &[GameEvent]) {
    for event in events {
        match *event {
            GameEvent::Started => log::info!("Game started"),
            GameEvent::PlaybackFinished => log::debug!("Playback finished, your turn"),
            GameEvent::Correct { button, progress } => {
                log::debug!("Correct: button {} ({} so far)", button, progress)
            }
            GameEvent::Mistake { level } => log::info!("Wrong button at level {}, starting over", level),
            GameEvent::LevelUp { level } => log::info!("Level {}", level),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::sync::Arc;
    use std::time::{Instant, SystemTime, UNIX_EPOCH};

    use anyhow::Context;
    use winit::application::ApplicationHandler;
    use winit::dpi::PhysicalSize;
    use winit::event::{ElementState, MouseButton, TouchPhase, WindowEvent};
    use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
    use winit::window::{Window, WindowId};

    use remember::Settings;
    use remember::consts::WINDOW_TITLE;
    use remember::renderer::RenderState;

    use super::Game;

    struct App {
        settings: Settings,
        game: Game,
        window: Option<Arc<Window>>,
        started: Instant,
        error: Option<anyhow::Error>,
    }

    impl App {
        fn new(settings: Settings, seed: u64) -> Self {
            let game = Game::new(&settings, seed);
            Self {
                settings,
                game,
                window: None,
                started: Instant::now(),
                error: None,
            }
        }

        fn init_window(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
            let attrs = Window::default_attributes()
                .with_title(WINDOW_TITLE)
                .with_inner_size(PhysicalSize::new(
                    self.settings.window_width,
                    self.settings.window_height,
                ));
            let window = Arc::new(
                event_loop
                    .create_window(attrs)
                    .context("failed to create window")?,
            );
            let size = window.inner_size();

            let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
            let surface = instance.create_surface(window.clone())?;
            let render_state = pollster::block_on(RenderState::new(
                &instance,
                surface,
                size.width,
                size.height,
            ))?;

            self.game.render_state = Some(render_state);
            self.game.resize(size.width, size.height);
            self.window = Some(window);
            log::info!("Window ready ({}x{})", size.width, size.height);
            Ok(())
        }
    }

    impl ApplicationHandler for App {
        fn resumed(&mut self, event_loop: &ActiveEventLoop) {
            if self.window.is_some() {
                return;
            }
            if let Err(e) = self.init_window(event_loop) {
                log::error!("Startup failed: {:#}", e);
                self.error = Some(e);
                event_loop.exit();
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
                    log::info!("Window closed");
                    event_loop.exit();
                }
                WindowEvent::Resized(size) => {
                    self.game.resize(size.width, size.height);
                }
                WindowEvent::Occluded(occluded) => {
                    log::debug!("Window occluded: {}", occluded);
                    if !occluded {
                        self.game.clock.reset();
                    }
                }
                WindowEvent::CursorMoved { position, .. } => {
                    self.game.pointer.moved(position.x as f32, position.y as f32);
                }
                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    button: MouseButton::Left,
                    ..
                } => {
                    self.game.pointer.pressed();
                }
                WindowEvent::Touch(touch) if touch.phase == TouchPhase::Started => {
                    self.game
                        .pointer
                        .pressed_at(touch.location.x as f32, touch.location.y as f32);
                }
                WindowEvent::RedrawRequested => {
                    let now = self.started.elapsed().as_secs_f64();
                    if !self.game.frame(now) {
                        event_loop.exit();
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

    fn time_seed() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default()
    }

    pub fn run() -> anyhow::Result<()> {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or("remember=info,warn"),
        )
        .init();
        log::info!("Remember (native) starting...");

        let settings = Settings::load();
        let seed = settings.seed.unwrap_or_else(time_seed);

        let event_loop = EventLoop::new().context("failed to create event loop")?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(settings, seed);
        event_loop.run_app(&mut app)?;

        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use remember::Settings;
    use remember::renderer::RenderState;

    use super::Game;

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Remember starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        // Size the backing store in device pixels
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        let seed = settings
            .seed
            .unwrap_or_else(|| js_sys::Date::now() as u64);
        let game = Rc::new(RefCell::new(Game::new(&settings, seed)));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });
        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let render_state = RenderState::new(&instance, surface, width, height)
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        {
            let mut g = game.borrow_mut();
            g.render_state = Some(render_state);
            g.resize(width, height);
        }

        setup_input_handlers(&canvas, dpr as f32, game.clone());
        request_animation_frame(game);

        log::info!("Remember running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, dpr: f32, game: Rc<RefCell<Game>>) {
        // Mouse press
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if event.button() != 0 {
                    return;
                }
                let x = event.offset_x() as f32 * dpr;
                let y = event.offset_y() as f32 * dpr;
                game.borrow_mut().pointer.pressed_at(x, y);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.changed_touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let x = (touch.client_x() as f32 - rect.left() as f32) * dpr;
                    let y = (touch.client_y() as f32 - rect.top() as f32) * dpr;
                    game.borrow_mut().pointer.pressed_at(x, y);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Hidden tabs stop animation frames; restart timing when shown again
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            let doc = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                log::debug!("Visibility changed (hidden: {})", doc.hidden());
                if !doc.hidden() {
                    game.borrow_mut().clock.reset();
                }
            });
            let _ = document
                .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        // requestAnimationFrame time is ms since page load
        let keep_running = game.borrow_mut().frame(time / 1000.0);
        if keep_running {
            request_animation_frame(game);
        } else {
            log::error!("Rendering stopped");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
