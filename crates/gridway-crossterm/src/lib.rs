//! Terminal backend for gridway on top of crossterm.
//!
//! [`CrosstermDriver`] owns the terminal session: raw mode and the alternate
//! screen while the app runs, translated key/mouse/resize events on the way
//! in, diffed frames on the way out.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind},
    execute, queue,
    style::{Color as CtColor, Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use gridway_core::{Color, Driver, Frame, Key, Msg, MouseAction, Point};

fn to_ct_color(c: Color) -> CtColor {
    match c {
        Color::DEFAULT => CtColor::Reset,
        c => CtColor::Rgb {
            r: c.r(),
            g: c.g(),
            b: c.b(),
        },
    }
}

/// Translate the key subset the workbench understands; anything else is
/// dropped at the driver.
fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Up => Some(Key::ArrowUp),
        KeyCode::Down => Some(Key::ArrowDown),
        KeyCode::Left => Some(Key::ArrowLeft),
        KeyCode::Right => Some(Key::ArrowRight),
        _ => None,
    }
}

/// Crossterm-backed [`Driver`].
///
/// The mouse is always captured: painting cells and dragging endpoints are
/// the whole point of the workbench.
#[derive(Default)]
pub struct CrosstermDriver;

impl CrosstermDriver {
    pub fn new() -> Self {
        Self
    }
}

impl Driver for CrosstermDriver {
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All),
            event::EnableMouseCapture
        )?;
        Ok(())
    }

    fn poll(&mut self, into: &mut Vec<Msg>) -> Result<(), Box<dyn std::error::Error>> {
        // Wait one frame (~60 FPS) for the first event, then drain whatever
        // else is already queued so drags arrive as a batch.
        if !event::poll(Duration::from_millis(16))? {
            return Ok(());
        }

        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;

            let msg = match ev {
                Event::Key(KeyEvent {
                    code, modifiers, ..
                }) => {
                    if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
                        Some(Msg::Quit)
                    } else {
                        to_key(code).map(|key| Msg::KeyDown { key })
                    }
                }
                Event::Mouse(me) => {
                    let pos = Point::new(me.column as i32, me.row as i32);
                    match me.kind {
                        MouseEventKind::Down(MouseButton::Left) => Some(Msg::Mouse {
                            action: MouseAction::Press,
                            pos,
                        }),
                        MouseEventKind::Up(MouseButton::Left) => Some(Msg::Mouse {
                            action: MouseAction::Release,
                            pos,
                        }),
                        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                            Some(Msg::Mouse {
                                action: MouseAction::Move,
                                pos,
                            })
                        }
                        _ => None,
                    }
                }
                Event::Resize(w, h) => Some(Msg::Resize {
                    width: w as i32,
                    height: h as i32,
                }),
                _ => None,
            };

            if let Some(m) = msg {
                into.push(m);
            }
        }

        Ok(())
    }

    fn flush(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = io::stdout();

        // Queue every changed tile, then write the frame in one syscall.
        for ft in &frame.tiles {
            queue!(
                stdout,
                cursor::MoveTo(ft.pos.x as u16, ft.pos.y as u16),
                SetForegroundColor(to_ct_color(ft.tile.style.fg)),
                SetBackgroundColor(to_ct_color(ft.tile.style.bg)),
                Print(ft.tile.ch)
            )?;
        }

        stdout.flush()?;
        Ok(())
    }

    fn close(&mut self) {
        let _ = execute!(
            io::stdout(),
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
