//! Duo Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use duo_pong::consts::*;
    use duo_pong::renderer::{CanvasSurface, draw_frame};
    use duo_pong::sim::{Action, GameState, InputState, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: InputState,
        surface: CanvasSurface,
    }

    impl Game {
        fn new(seed: u64, surface: CanvasSurface) -> Self {
            Self {
                state: GameState::new(seed),
                input: InputState::default(),
                surface,
            }
        }

        /// One timer callback: input mapping, physics, render
        fn frame(&mut self) {
            tick(&mut self.state, &self.input);
            draw_frame(&self.state, &mut self.surface);
        }
    }

    /// Translate a `KeyboardEvent::key()` value into a logical action.
    /// W/S drive the left paddle, the arrow keys the right one.
    fn map_key(key: &str) -> Option<Action> {
        match key {
            "w" | "W" => Some(Action::LeftUp),
            "s" | "S" => Some(Action::LeftDown),
            "ArrowUp" => Some(Action::RightUp),
            "ArrowDown" => Some(Action::RightDown),
            _ => None,
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Duo Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(BOARD_WIDTH as u32);
        canvas.set_height(BOARD_HEIGHT as u32);

        let seed = js_sys::Date::now() as u64;
        let surface = CanvasSurface::new(&canvas);
        let game = Rc::new(RefCell::new(Game::new(seed, surface)));

        log::info!("Game initialized with seed: {}", seed);

        setup_key_handlers(game.clone());

        // Fixed-interval timer drives [input -> physics -> render]
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                game.borrow_mut().frame();
            });
            window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    closure.as_ref().unchecked_ref(),
                    TICK_MS as i32,
                )
                .expect("failed to start tick timer");
            closure.forget();
        }

        log::info!("Duo Pong running!");
    }

    /// Key events only flip held flags in the input map; the timer callback
    /// is the sole mutator of simulation state.
    fn setup_key_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if let Some(action) = map_key(&event.key()) {
                    event.prevent_default();
                    game.borrow_mut().input.set(action, true);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if let Some(action) = map_key(&event.key()) {
                    game.borrow_mut().input.set(action, false);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Duo Pong (native) starting...");
    log::info!("Native mode is headless - build for wasm32 for the playable game");

    println!("\nRunning headless smoke simulation...");
    smoke_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_run() {
    use duo_pong::sim::{GameState, InputState, tick};

    let mut state = GameState::new(0xC0FFEE);
    let input = InputState::default();
    for _ in 0..10_000 {
        tick(&mut state, &input);
    }
    assert!(state.ball.pos.is_finite(), "ball state must stay finite");
    println!(
        "✓ 10000 ticks, score {} - {}",
        state.left.score, state.right.score
    );
}
