//! Balloon Dodge entry point
//!
//! On the web this wires the session to the DOM and the animation-frame
//! clock. Natively it runs a headless autopilot session for smoke testing.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlInputElement, KeyboardEvent, MouseEvent};

    use balloon_dodge::Tuning;
    use balloon_dodge::session::{Direction, Schedule, Session};
    use balloon_dodge::sim::Difficulty;

    const OBSTACLE_IMAGE: &str = "pictures/bacteria.png";

    /// Game instance holding the session and its DOM handles
    struct Game {
        session: Session,
        document: Document,
        /// One node per live obstacle, in live-set order
        obstacle_nodes: Vec<Element>,
    }

    impl Game {
        fn new(document: Document, session: Session) -> Self {
            Self {
                session,
                document,
                obstacle_nodes: Vec::new(),
            }
        }

        /// Start a new session, returning its epoch
        fn restart(&mut self) -> Option<u64> {
            let seed = js_sys::Date::now() as u64;
            match self.session.start(seed) {
                Ok(epoch) => Some(epoch),
                Err(e) => {
                    log::warn!("Restart ignored: {}", e);
                    None
                }
            }
        }

        fn set_difficulty_level(&mut self, level: u8) {
            let difficulty = self.session.set_difficulty_level(level);
            if let Some(label) = self.document.get_element_by_id("difficulty-label") {
                label.set_text_content(Some(difficulty.label()));
            }
        }

        /// Create or drop obstacle nodes so there is one per live obstacle
        fn sync_obstacle_nodes(&mut self, count: usize) {
            while self.obstacle_nodes.len() > count {
                if let Some(node) = self.obstacle_nodes.pop() {
                    node.remove();
                }
            }
            let Some(container) = self.document.query_selector(".game-container").ok().flatten()
            else {
                return;
            };
            while self.obstacle_nodes.len() < count {
                match self.create_obstacle_node(&container) {
                    Ok(node) => self.obstacle_nodes.push(node),
                    Err(e) => {
                        log::error!("Failed to create obstacle node: {:?}", e);
                        return;
                    }
                }
            }
        }

        fn create_obstacle_node(&self, container: &Element) -> Result<Element, JsValue> {
            let node = self.document.create_element("div")?;
            node.set_attribute("class", "obstacle")?;
            let img = self.document.create_element("img")?;
            img.set_attribute("src", OBSTACLE_IMAGE)?;
            node.append_child(&img)?;
            container.append_child(&node)?;
            Ok(node)
        }

        /// Push the current frame into the DOM
        fn render(&mut self) {
            let frame = self.session.snapshot();
            let tuning = &self.session.state().tuning;
            let balloon_bottom = tuning.balloon_bottom;

            if let Some(el) = self.document.get_element_by_id("balloon") {
                let style = format!("left:{}px;bottom:{}px", frame.balloon_x, balloon_bottom);
                let _ = el.set_attribute("style", &style);
            }

            self.sync_obstacle_nodes(frame.obstacles.len());
            for (node, obstacle) in self.obstacle_nodes.iter().zip(&frame.obstacles) {
                let style = format!("left:{}px;top:{}px", obstacle.x, obstacle.y);
                let _ = node.set_attribute("style", &style);
            }

            if let Some(el) = self.document.get_element_by_id("score") {
                el.set_text_content(Some(&frame.score.to_string()));
            }
            if let Some(el) = self.document.get_element_by_id("highScore") {
                el.set_text_content(Some(&frame.best_score.to_string()));
            }

            if let Some(el) = self.document.get_element_by_id("game-over") {
                match frame.game_over {
                    Some(final_score) => {
                        let _ = el.set_attribute("class", "");
                        if let Some(score_el) = self.document.get_element_by_id("final-score") {
                            score_el.set_text_content(Some(&final_score.to_string()));
                        }
                    }
                    None => {
                        let _ = el.set_attribute("class", "hidden");
                    }
                }
            }
        }
    }

    /// Optional inline overrides: <script id="tuning" type="application/json">
    fn load_tuning(document: &Document) -> Tuning {
        let Some(json) = document
            .get_element_by_id("tuning")
            .and_then(|el| el.text_content())
        else {
            return Tuning::default();
        };
        match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning overrides");
                tuning
            }
            Err(e) => {
                log::warn!("Invalid tuning, using defaults: {}", e);
                Tuning::default()
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Balloon Dodge starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let slider = document
            .get_element_by_id("difficulty")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
        let level = slider.as_ref().map(slider_level).unwrap_or(1);

        let session = match Session::new(Difficulty::from_level(level), load_tuning(&document)) {
            Ok(session) => session,
            Err(e) => {
                log::error!("Could not create session: {}", e);
                return;
            }
        };
        let game = Rc::new(RefCell::new(Game::new(document.clone(), session)));

        match slider {
            Some(slider) => setup_difficulty_slider(slider, game.clone()),
            None => log::warn!("No difficulty slider found"),
        }
        setup_keyboard(game.clone());
        setup_restart_button(&document, game.clone());

        let epoch = game.borrow_mut().restart();
        game.borrow_mut().render();
        if let Some(epoch) = epoch {
            request_animation_frame(game, epoch);
        }

        log::info!("Balloon Dodge running!");
    }

    /// Slider value as a difficulty level; unreadable values count as Easy
    fn slider_level(slider: &HtmlInputElement) -> u8 {
        slider.value().parse::<u8>().unwrap_or(1)
    }

    fn setup_difficulty_slider(slider: HtmlInputElement, game: Rc<RefCell<Game>>) {
        // Sync the label with whatever value the widget starts with
        game.borrow_mut().set_difficulty_level(slider_level(&slider));

        let slider_clone = slider.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().set_difficulty_level(slider_level(&slider_clone));
        });
        let _ = slider.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        for (event_name, held) in [("keydown", true), ("keyup", false)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let direction = match event.key().as_str() {
                    "ArrowLeft" => Direction::Left,
                    "ArrowRight" => Direction::Right,
                    _ => return,
                };
                game.borrow_mut().session.set_intent(direction, held);
            });
            let _ = window
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(document: &Document, game: Rc<RefCell<Game>>) {
        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let epoch = {
                    let mut g = game.borrow_mut();
                    let epoch = g.restart();
                    g.render();
                    epoch
                };
                if let Some(epoch) = epoch {
                    request_animation_frame(game.clone(), epoch);
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>, epoch: u64) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game, epoch);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, epoch: u64) {
        let schedule = {
            let mut g = game.borrow_mut();
            let schedule = g.session.frame(epoch);
            if epoch == g.session.epoch() {
                g.render();
            }
            schedule
        };

        if schedule == Schedule::NextFrame {
            request_animation_frame(game, epoch);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use balloon_dodge::Tuning;
    use balloon_dodge::session::{Schedule, Session};
    use balloon_dodge::sim::Difficulty;

    env_logger::init();
    log::info!("Balloon Dodge (native) starting...");
    log::info!("Native mode runs a headless autopilot - run with `trunk serve` for the web version");

    let level = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u8>().ok())
        .unwrap_or(1);
    let seed = std::env::args()
        .nth(2)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(12345);

    let mut session = match Session::new(Difficulty::from_level(level), Tuning::default()) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Invalid tuning: {}", e);
            return;
        }
    };
    let epoch = match session.start(seed) {
        Ok(epoch) => epoch,
        Err(e) => {
            log::error!("Could not start session: {}", e);
            return;
        }
    };

    const MAX_FRAMES: u32 = 60 * 60 * 5;
    let mut frames = 0;
    while frames < MAX_FRAMES {
        autopilot::steer(&mut session);
        frames += 1;
        if session.frame(epoch) == Schedule::Halt {
            break;
        }
    }

    let frame = session.snapshot();
    println!(
        "{}: score {} after {} frames (fall speed {:.2}, {} obstacles){}",
        frame.difficulty_label,
        frame.score,
        frames,
        session.state().fall_speed,
        frame.obstacles.len(),
        if frame.game_over.is_some() { ", game over" } else { "" }
    );
}

/// Naive dodging for the headless run: slide away from the nearest
/// obstacle that is about to reach the balloon's row.
#[cfg(not(target_arch = "wasm32"))]
mod autopilot {
    use balloon_dodge::session::{Direction, Session};

    pub fn steer(session: &mut Session) {
        let state = session.state();
        let tuning = &state.tuning;
        let balloon_center = state.balloon.x + tuning.balloon_width / 2.0;
        let danger_top = tuning.balloon_top() - tuning.obstacle_size * 3.0;

        let threat = state
            .obstacles
            .iter()
            .filter(|o| o.pos.y > danger_top && o.pos.y < tuning.play_height)
            .map(|o| o.pos.x + tuning.obstacle_size / 2.0 - balloon_center)
            .filter(|dx| dx.abs() < tuning.obstacle_size)
            .min_by(|a, b| a.abs().total_cmp(&b.abs()));

        let (left, right) = match threat {
            // Obstacle to the right (or dead center with room on the left)
            Some(dx) if dx > 0.0 || (dx == 0.0 && state.balloon.x > 0.0) => (true, false),
            Some(_) => (false, true),
            None => (false, false),
        };
        session.set_intent(Direction::Left, left);
        session.set_intent(Direction::Right, right);
    }
}
