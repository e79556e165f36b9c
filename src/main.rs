//! Stepping Stones entry point
//!
//! Web: requestAnimationFrame loop with DOM input handlers.
//! Native: headless runner driven by the autopilot.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use stepping_stones::input::{command_for_key, command_for_pointer, is_game_key};
    use stepping_stones::persistence::LocalStorageStore;
    use stepping_stones::renderer::CanvasRenderer;
    use stepping_stones::{Command, FrameScheduler, GameConfig};

    type Game = FrameScheduler<CanvasRenderer, LocalStorageStore>;

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Stepping Stones starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        let mut config = GameConfig::default();
        config.play_area.width = canvas.width() as f32;
        config.play_area.height = canvas.height() as f32;

        let renderer = CanvasRenderer::new(&canvas, config.play_area.width)?;
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(FrameScheduler::new(
            config,
            seed,
            renderer,
            LocalStorageStore::new(),
        )));
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, game.clone());
        setup_restart_button(game.clone());
        request_animation_frame(game);

        log::info!("Stepping Stones running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Keyboard
        for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let code = event.code();
                if is_game_key(&code) {
                    event.prevent_default();
                }
                if let Some(command) = command_for_key(&code, &event.key(), pressed) {
                    game.borrow_mut().push_command(command);
                }
            });
            let _ = window
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse
        for (event_name, pressed) in [("mousedown", true), ("mouseup", false)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().push_command(command_for_pointer(pressed));
            });
            let _ = canvas
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch
        for (event_name, pressed) in [("touchstart", true), ("touchend", false)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().push_command(command_for_pointer(pressed));
            });
            let _ = canvas
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().push_command(Command::Restart);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::time::{Duration, Instant};

    use clap::Parser;

    use stepping_stones::autopilot::Autopilot;
    use stepping_stones::consts::FRAME_RATE;
    use stepping_stones::persistence::FileStore;
    use stepping_stones::renderer::LogRenderer;
    use stepping_stones::sim::SessionPhase;
    use stepping_stones::{FrameScheduler, GameConfig};

    /// Headless Stepping Stones run played by the autopilot
    #[derive(Debug, Parser)]
    #[command(author, version, about, long_about = None)]
    pub struct CliArgs {
        /// RNG seed for the platform layout (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Maximum number of frames to run
        #[arg(long, default_value_t = 3600)]
        frames: u64,
        /// JSON file overriding play area and tuning
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
        /// Where the best score is kept between runs
        #[arg(long, value_name = "FILE", default_value = "stepping-stones-best.json")]
        best_score_file: PathBuf,
        /// Pace frames at the display rate instead of running flat out
        #[arg(long)]
        realtime: bool,
        /// Restart after every game over until the frame budget runs out
        #[arg(long)]
        endless: bool,
    }

    pub fn run(args: CliArgs) -> i32 {
        let config = match &args.config {
            Some(path) => match GameConfig::load(path) {
                Ok(config) => config,
                Err(e) => {
                    log::error!("Invalid config {}: {}", path.display(), e);
                    return 2;
                }
            },
            None => GameConfig::default(),
        };

        let seed = args.seed.unwrap_or_else(rand::random);
        log::info!("Stepping Stones (native) starting with seed {}", seed);

        let mut scheduler = FrameScheduler::new(
            config,
            seed,
            LogRenderer::new(),
            FileStore::new(&args.best_score_file),
        );
        let mut pilot = Autopilot::new(args.endless);
        let frame_time = Duration::from_secs_f64(1.0 / FRAME_RATE as f64);

        for _ in 0..args.frames {
            let started = Instant::now();

            if let Some(command) = pilot.decide(scheduler.state()) {
                scheduler.push_command(command);
            }
            scheduler.frame();

            if scheduler.state().phase == SessionPhase::Over && !args.endless {
                break;
            }
            if args.realtime {
                if let Some(rest) = frame_time.checked_sub(started.elapsed()) {
                    std::thread::sleep(rest);
                }
            }
        }

        let state = scheduler.state();
        log::info!(
            "Finished after {} frames (run {}): score {}, best {}",
            scheduler.frames(),
            state.run,
            state.score,
            state.best_score
        );
        0
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = native::CliArgs::parse();
    std::process::exit(native::run(args));
}
