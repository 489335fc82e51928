//! The application loop: [`Model`], [`Driver`], [`Effect`], [`App`].

use crate::messages::Msg;
use crate::screen::{Frame, Screen, compute_frame};

// ---------------------------------------------------------------------------
// Effect
// ---------------------------------------------------------------------------

/// What [`Model::update`] asks the loop to do next.
///
/// The workbench loop is fully synchronous, so stopping it is the only
/// effect a model can request.
#[derive(Debug)]
pub enum Effect {
    /// Leave the loop; the driver is closed afterwards.
    End,
}

// ---------------------------------------------------------------------------
// Model trait
// ---------------------------------------------------------------------------

/// Application state with its update and draw halves (Elm shape).
pub trait Model {
    /// Apply one input message. Returning an effect steers the loop.
    fn update(&mut self, msg: Msg) -> Option<Effect>;

    /// Render the current state into `screen`.
    fn draw(&self, screen: &mut Screen);
}

// ---------------------------------------------------------------------------
// Driver trait
// ---------------------------------------------------------------------------

/// Back-end driver (e.g. a terminal).
pub trait Driver {
    /// Take over the output device.
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error>>;

    /// Poll for input, pushing any pending messages into `into`.
    ///
    /// Implementations may block briefly (a frame interval) while waiting.
    fn poll(&mut self, into: &mut Vec<Msg>) -> Result<(), Box<dyn std::error::Error>>;

    /// Write a diffed frame out.
    fn flush(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>>;

    /// Release the output device. Once `init` has succeeded this runs on
    /// both the clean and the error exit path.
    fn close(&mut self);
}

// ---------------------------------------------------------------------------
// AppConfig / App
// ---------------------------------------------------------------------------

/// Everything [`App::new`] needs: a model, a driver, and the screen size
/// in cells.
pub struct AppConfig<M: Model, D: Driver> {
    pub model: M,
    pub driver: D,
    pub width: i32,
    pub height: i32,
}

/// Owns the model, the driver, and the screen pair the frame diff runs
/// over.
pub struct App<M: Model, D: Driver> {
    model: M,
    driver: D,
    width: i32,
    height: i32,
}

impl<M: Model, D: Driver> App<M, D> {
    pub fn new(config: AppConfig<M, D>) -> Self {
        Self {
            model: config.model,
            driver: config.driver,
            width: config.width,
            height: config.height,
        }
    }

    /// Drive the loop until the model returns [`Effect::End`].
    ///
    /// The driver is initialised first and `Msg::Init` is delivered before
    /// any input. Each turn applies pending messages, draws, flushes the
    /// changed tiles, and polls for more input. The driver is closed before
    /// returning, on the error path too.
    pub fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.driver.init()?;
        let result = self.run_loop();
        self.driver.close();
        result
    }

    fn run_loop(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let mut prev = Screen::new(self.width, self.height);
        let mut curr = Screen::new(self.width, self.height);
        let mut pending = vec![Msg::Init];

        loop {
            for msg in pending.drain(..) {
                if let Some(Effect::End) = self.model.update(msg) {
                    return Ok(());
                }
            }

            self.model.draw(&mut curr);
            let frame = compute_frame(&prev, &curr);
            if !frame.tiles.is_empty() {
                self.driver.flush(&frame)?;
            }
            prev.copy_from(&curr);

            self.driver.poll(&mut pending)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Point;
    use crate::messages::Key;
    use crate::screen::Tile;

    /// A driver that replays a scripted message sequence, one per poll.
    struct ScriptedDriver {
        script: Vec<Msg>,
        flushes: usize,
        closed: bool,
    }

    impl Driver for ScriptedDriver {
        fn init(&mut self) -> Result<(), Box<dyn std::error::Error>> {
            Ok(())
        }

        fn poll(&mut self, into: &mut Vec<Msg>) -> Result<(), Box<dyn std::error::Error>> {
            if self.script.is_empty() {
                into.push(Msg::Quit);
            } else {
                into.push(self.script.remove(0));
            }
            Ok(())
        }

        fn flush(&mut self, _frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
            self.flushes += 1;
            Ok(())
        }

        fn close(&mut self) {
            self.closed = true;
        }
    }

    struct Counter {
        updates: usize,
        ticks: i32,
    }

    impl Model for Counter {
        fn update(&mut self, msg: Msg) -> Option<Effect> {
            self.updates += 1;
            match msg {
                Msg::Quit | Msg::KeyDown { key: Key::Escape } => Some(Effect::End),
                Msg::KeyDown { .. } => {
                    self.ticks += 1;
                    None
                }
                _ => None,
            }
        }

        fn draw(&self, screen: &mut Screen) {
            screen.set(
                Point::new(0, 0),
                Tile::default().with_char(char::from_digit(self.ticks as u32 % 10, 10).unwrap()),
            );
        }
    }

    #[test]
    fn loop_runs_script_then_ends() {
        let model = Counter {
            updates: 0,
            ticks: 0,
        };
        let driver = ScriptedDriver {
            script: vec![Msg::key(Key::Char('a')), Msg::key(Key::Char('b'))],
            flushes: 0,
            closed: false,
        };
        let mut app = App::new(AppConfig {
            model,
            driver,
            width: 4,
            height: 2,
        });
        app.run().unwrap();
        // Init + 'a' + 'b' + Quit.
        assert_eq!(app.model.updates, 4);
        assert_eq!(app.model.ticks, 2);
        assert!(app.driver.closed);
        // Init frame plus the two tick redraws.
        assert_eq!(app.driver.flushes, 3);
    }
}
