//! Retro Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use retro_pong::audio::AudioManager;
    use retro_pong::renderer::{RenderState, VertexCanvas};
    use retro_pong::sim::Arena;
    use retro_pong::ui::{CanvasFit, ResizePlan};
    use retro_pong::{Game, Settings};

    /// Game instance plus everything the browser side needs
    struct App {
        game: Game,
        render_state: Option<RenderState>,
        batch: VertexCanvas,
        canvas: HtmlCanvasElement,
        max_arena_width: f32,
    }

    impl App {
        /// Tick and present one frame. Returns whether to request another.
        fn frame(&mut self) -> bool {
            let again = self.game.frame(&mut self.batch);
            self.present();
            self.update_hud();
            again
        }

        /// Present the current state without ticking
        fn redraw(&mut self) {
            self.game.redraw(&mut self.batch);
            self.present();
            self.update_hud();
        }

        fn present(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.batch) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => render_state.reconfigure(),
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Mirror match state onto the control buttons and overlay
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let hud = self.game.hud();

            if let Some(btn) = document.get_element_by_id("pause-btn") {
                btn.set_text_content(Some(hud.pause_label));
                if hud.pause_enabled {
                    let _ = btn.remove_attribute("disabled");
                } else {
                    let _ = btn.set_attribute("disabled", "");
                }
            }

            if let Some(el) = document.get_element_by_id("overlay") {
                if let Some(overlay) = hud.overlay {
                    let _ = el.set_attribute("class", "");
                    el.set_text_content(Some(overlay.title()));
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }

            if let Some(el) = document.get_element_by_id("winner-text") {
                el.set_text_content(hud.winner_text());
            }
        }

        /// Arena and pixel size for the current viewport
        fn measure(&self) -> CanvasFit {
            let window = web_sys::window().expect("no window");
            let viewport_w = window
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(self.max_arena_width as f64) as f32;
            CanvasFit::new(viewport_w, self.max_arena_width, window.device_pixel_ratio())
        }

        fn canvas_pixels(&self) -> (u32, u32) {
            (self.canvas.width(), self.canvas.height())
        }

        /// Write the canvas size. Assigning width/height clears the drawing
        /// buffer even when the value is unchanged, so only call this when
        /// it differs.
        fn write_canvas_size(&self, fit: &CanvasFit) {
            self.canvas.set_width(fit.pixel_width);
            self.canvas.set_height(fit.pixel_height);
            let _ = self.canvas.set_attribute(
                "style",
                &format!("width:{}px;height:{}px", fit.arena.width, fit.arena.height),
            );
        }

        /// Convert a client-space y coordinate to arena units
        fn pointer_to_arena(&self, client_y: f32) -> f32 {
            let rect = self.canvas.get_bounding_client_rect();
            let css_height = rect.height() as f32;
            if css_height <= 0.0 {
                return client_y;
            }
            (client_y - rect.top() as f32) * self.game.state().arena.height / css_height
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Retro Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let mut settings =
            Settings::from_json_or_default(canvas.get_attribute("data-settings").as_deref());
        if settings.seed.is_none() {
            settings.seed = Some(js_sys::Date::now() as u64);
        }

        let audio = AudioManager::new(&settings);
        let app = Rc::new(RefCell::new(App {
            game: Game::new(&settings, Arena::default(), Box::new(audio)),
            render_state: None,
            batch: VertexCanvas::new(),
            canvas: canvas.clone(),
            max_arena_width: settings.max_arena_width,
        }));

        let fit = app.borrow().measure();
        app.borrow().write_canvas_size(&fit);
        app.borrow_mut().game.resize(fit.arena);
        let (arena, (width, height)) = (fit.arena, fit.pixel_size());

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height, arena).await;
        app.borrow_mut().render_state = Some(render_state);

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        setup_input_handlers(&canvas, app.clone());
        setup_control_buttons(app.clone());
        setup_resize_handler(app.clone());

        request_animation_frame(app);

        log::info!("Retro Pong running!");
    }

    /// Pointer input: last sampled position wins
    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Mouse move
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut a = app.borrow_mut();
                let y = a.pointer_to_arena(event.client_y() as f32);
                a.game.set_player_paddle_center(y);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move / start
        for event_name in ["touchmove", "touchstart"] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let mut a = app.borrow_mut();
                    let y = a.pointer_to_arena(touch.client_y() as f32);
                    a.game.set_player_paddle_center(y);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_control_buttons(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(btn) = document.get_element_by_id("pause-btn") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let wake = app.borrow_mut().game.toggle_pause();
                app.borrow().update_hud();
                if wake {
                    request_animation_frame(app.clone());
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let wake = app.borrow_mut().game.restart();
                app.borrow().update_hud();
                if wake {
                    request_animation_frame(app.clone());
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let mut a = app.borrow_mut();
            let fit = a.measure();
            let plan = ResizePlan::new(
                &fit,
                a.canvas_pixels(),
                a.game.state().arena,
                a.game.frame_loop().is_scheduled(),
            );
            if plan.resize_game {
                a.game.resize(fit.arena);
            }
            if plan.reconfigure() {
                a.write_canvas_size(&fit);
                if let Some(ref mut render_state) = a.render_state {
                    render_state.resize(fit.pixel_width, fit.pixel_height, fit.arena);
                }
            }
            // A stopped chain will not repaint a cleared canvas on its own
            if plan.redraw {
                a.redraw();
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        let again = app.borrow_mut().frame();
        if again {
            request_animation_frame(app);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

/// Frames the headless demo will run before giving up on a result
#[cfg(not(target_arch = "wasm32"))]
const DEMO_FRAME_BUDGET: u64 = 60 * 60 * 10;

/// Native stand-in for the pointer: eases the player paddle toward the ball
#[cfg(not(target_arch = "wasm32"))]
struct Autopilot {
    remaining: u64,
    /// Fraction of the gap closed per frame
    reaction: f32,
}

#[cfg(not(target_arch = "wasm32"))]
impl retro_pong::frame_loop::FrameHost for Autopilot {
    fn next_frame(&mut self, game: &mut retro_pong::Game) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;

        let state = game.state();
        let center = state.player.center_y();
        let target = center + (state.ball.pos.y - center) * self.reaction;
        game.set_player_paddle_center(target);
        true
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use retro_pong::audio::NullAudio;
    use retro_pong::frame_loop;
    use retro_pong::renderer::VertexCanvas;
    use retro_pong::sim::Arena;
    use retro_pong::ui::{CanvasFit, ResizePlan};
    use retro_pong::{Game, Settings};

    env_logger::init();
    log::info!("Retro Pong (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    let settings = Settings::from_env();
    let arena = Arena::fit(settings.max_arena_width, settings.max_arena_width);
    let mut game = Game::new(&settings, arena, Box::new(NullAudio));
    let mut canvas = VertexCanvas::new();
    let mut host = Autopilot {
        remaining: DEMO_FRAME_BUDGET,
        reaction: 0.12,
    };

    let frames = frame_loop::run(&mut game, &mut canvas, &mut host);

    let hud = game.hud();
    println!(
        "Player {} - {} CPU after {} frames",
        hud.player_score, hud.opponent_score, frames
    );
    match hud.winner_text() {
        Some(text) => println!("{}", text),
        None => println!("No winner within the frame budget"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
