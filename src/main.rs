//! Flappy Gates entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent,
    };

    use flappy_gates::persistence::LocalStorageStore;
    use flappy_gates::renderer::{CanvasPainter, Frame};
    use flappy_gates::scenery::Scenery;
    use flappy_gates::sim::{Activation, GameSession, handle_activate, tick};
    use flappy_gates::{HighScore, MemoryStore, ScoreStore, Settings, Tuning};

    /// Game instance holding all state
    struct Game {
        session: GameSession,
        scenery: Scenery,
        settings: Settings,
        store: Box<dyn ScoreStore>,
        painter: CanvasPainter,
        /// A frame callback is scheduled
        looping: bool,
    }

    impl Game {
        /// Cloud layer, if the player wants it drawn
        fn clouds(&self) -> Option<&Scenery> {
            self.settings.clouds.then_some(&self.scenery)
        }

        /// Paint the current state and refresh the HUD text
        fn present(&self, frame: &Frame) {
            if let Err(e) = self.painter.paint(frame) {
                log::warn!("Render error: {:?}", e);
            }
            update_hud(frame, self.settings.show_hud);
        }

        /// Paint immediately, with the overlay if the run is over
        fn repaint(&self) {
            let frame = Frame::capture(&self.session, self.clouds());
            self.present(&frame);
        }

        /// Click, tap, or key press
        fn activate(&mut self) -> Activation {
            let activation = handle_activate(&mut self.session);
            if activation == Activation::Restart {
                self.scenery.scatter();
                self.repaint();
            }
            activation
        }

        fn toggle_clouds(&mut self) {
            self.settings.toggle_clouds(self.store.as_mut());
            self.repaint();
        }

        fn toggle_hud(&mut self) {
            self.settings.toggle_hud(self.store.as_mut());
            self.repaint();
        }
    }

    /// Update the score/high score text elements (blank when hidden)
    fn update_hud(frame: &Frame, visible: bool) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let (score, high) = if visible {
            (frame.score_text(), frame.high_score_text())
        } else {
            (String::new(), String::new())
        };
        if let Some(el) = document.get_element_by_id("score") {
            el.set_text_content(Some(&score));
        }
        if let Some(el) = document.get_element_by_id("highScore") {
            el.set_text_content(Some(&high));
        }
    }

    /// LocalStorage, or an in-memory fallback when it is unavailable
    fn open_store() -> Box<dyn ScoreStore> {
        match LocalStorageStore::open() {
            Ok(store) => Box::new(store),
            Err(e) => {
                log::warn!("{}; high score will not persist", e);
                Box::new(MemoryStore::new())
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Flappy Gates starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .ok_or("no #game canvas")?
            .dyn_into()?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let store = open_store();
        let settings = Settings::load(store.as_ref());
        let high_score = HighScore::load(store.as_ref());

        let tuning = Tuning::for_playfield(canvas.width() as f32, canvas.height() as f32);
        let tuning = match tuning.validate() {
            Ok(()) => tuning,
            Err(e) => {
                log::warn!("Canvas does not fit the default tuning ({}), using 400x600", e);
                Tuning::default()
            }
        };

        let seed = js_sys::Date::now() as u64;
        let scenery = Scenery::new(
            tuning.playfield,
            settings.effective_cloud_count(),
            seed ^ 0x9e37_79b9,
        );
        let session = GameSession::new(seed, tuning, high_score)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            session,
            scenery,
            settings,
            store,
            painter: CanvasPainter::new(ctx),
            looping: false,
        }));

        setup_input_handlers(&canvas, game.clone());
        start_loop(game);

        log::info!("Flappy Gates running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse click
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                on_activate(&game);
            });
            let _ =
                canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                on_activate(&game);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        if let Some(window) = web_sys::window() {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.repeat() {
                    return;
                }
                match event.key().as_str() {
                    " " | "Enter" | "ArrowUp" => {
                        event.prevent_default();
                        on_activate(&game);
                    }
                    "c" | "C" => game.borrow_mut().toggle_clouds(),
                    "h" | "H" => game.borrow_mut().toggle_hud(),
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn on_activate(game: &Rc<RefCell<Game>>) {
        let activation = game.borrow_mut().activate();
        if activation == Activation::Restart {
            start_loop(game.clone());
        }
    }

    /// Schedule frames unless a callback is already pending
    fn start_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            if g.looping {
                return;
            }
            g.looping = true;
        }
        request_animation_frame(game);
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
        {
            let mut g = game.borrow_mut();

            if g.session.is_over() {
                // Overlay frame; no further callbacks until a restart
                g.repaint();
                g.looping = false;
                return;
            }

            let Game {
                session,
                scenery,
                settings,
                store,
                ..
            } = &mut *g;
            tick(session, store.as_mut());
            if settings.clouds {
                scenery.update();
            }

            let frame = Frame::scene(&g.session, g.clouds());
            g.present(&frame);
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Flappy Gates (native) starting...");
    log::info!("Native mode runs a headless autopilot demo; `trunk serve` runs the web version");

    if let Err(e) = headless::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::error::Error;

    use flappy_gates::persistence::JsonFileStore;
    use flappy_gates::sim::{GameSession, autopilot, handle_activate, tick};
    use flappy_gates::consts::NOMINAL_TICK_RATE;
    use flappy_gates::{HighScore, Tuning};

    /// Runs played back to back
    const RUNS: u32 = 3;
    /// Stop a run that the autopilot keeps alive forever (five minutes)
    const MAX_TICKS_PER_RUN: u64 = NOMINAL_TICK_RATE as u64 * 60 * 5;
    const SAVE_PATH: &str = "flappy-gates-save.json";

    /// Play a few autopilot runs, persisting the high score between them.
    /// The first argument, if present, is a tuning JSON file.
    pub fn run() -> Result<(), Box<dyn Error>> {
        let tuning = match std::env::args().nth(1) {
            Some(path) => {
                log::info!("Loading tuning from {}", path);
                Tuning::from_json(&std::fs::read_to_string(path)?)?
            }
            None => Tuning::default(),
        };

        let mut store = JsonFileStore::open(SAVE_PATH)?;
        let high_score = HighScore::load(&store);
        let seed = rand::random::<u64>();
        let mut session = GameSession::new(seed, tuning, high_score)?;
        log::info!("Seed {} (best so far {})", seed, high_score.best);

        for run in 1..=RUNS {
            while !session.is_over() && session.tick_count < MAX_TICKS_PER_RUN {
                if autopilot::wants_flap(&session) {
                    handle_activate(&mut session);
                }
                tick(&mut session, &mut store);
            }
            println!(
                "Run {}: score {} after {} ticks (best {})",
                run, session.score.current, session.tick_count, session.score.high.best
            );
            if session.is_over() {
                handle_activate(&mut session);
            } else {
                session.restart();
            }
        }

        println!(
            "High score {} saved to {}",
            session.score.high.best,
            store.path().display()
        );
        Ok(())
    }
}
