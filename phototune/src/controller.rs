//! The interactive prompt loop.
//!
//! `Idle` asks for an image and loads it, `Ready` runs one menu round per
//! step, `Exit` ends the loop. Closing the input at any prompt exits too.

use crate::{
    config::Settings,
    menu::{self, MenuChoice},
    session::Session,
    viewer::Viewer,
};
use image_adjust::PixelBuffer;
use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

#[derive(Debug)]
enum State {
    Idle,
    Ready(Session),
    Exit,
}

pub struct Controller<R, W, V> {
    input: R,
    output: W,
    viewer: V,
    settings: Settings,
}

impl<R: BufRead, W: Write, V: Viewer> Controller<R, W, V> {
    pub fn new(input: R, output: W, viewer: V, settings: Settings) -> Self {
        Self {
            input,
            output,
            viewer,
            settings,
        }
    }

    /// Runs until the user exits, the input closes or the image fails to load.
    /// Only console I/O errors are returned.
    pub fn run(&mut self) -> io::Result<()> {
        let mut state = State::Idle;

        loop {
            state = match state {
                State::Idle => self.open()?,
                State::Ready(session) => self.step(session)?,
                State::Exit => break,
            };
        }

        log::debug!("session closed");
        Ok(())
    }

    fn open(&mut self) -> io::Result<State> {
        let path = match self.settings.path.clone() {
            Some(path) => path,
            None => match self.prompt("Path: ")? {
                Some(line) => PathBuf::from(line),
                None => return Ok(State::Exit),
            },
        };

        match image_adjust::io::load(&path) {
            Ok(image) => {
                log::debug!("opened {}", path.display());
                Ok(State::Ready(Session::new(image)))
            }
            Err(e) => {
                log::warn!("load {} failed: {e}", path.display());
                writeln!(self.output, "Error loading image: {e}")?;
                Ok(State::Exit)
            }
        }
    }

    fn step(&mut self, mut session: Session) -> io::Result<State> {
        writeln!(self.output, "{}", menu::render())?;

        let Some(line) = self.prompt("Choose: ")? else {
            return Ok(State::Exit);
        };

        let Some(choice) = MenuChoice::parse(&line) else {
            writeln!(self.output, "Invalid choice.")?;
            return Ok(State::Ready(session));
        };

        let mut applied = false;
        match choice {
            MenuChoice::Exit => return Ok(State::Exit),
            MenuChoice::Show => self.show(session.image())?,
            MenuChoice::Save => {
                if !self.save(&mut session)? {
                    return Ok(State::Exit);
                }
            }
            _ => {
                let Some(value) = self.read_parameter(choice)? else {
                    return Ok(State::Exit);
                };

                if let Some(adjustment) = choice.adjustment(value) {
                    match session.apply(&adjustment) {
                        Ok(()) => applied = true,
                        Err(e) => {
                            log::warn!("{} failed: {e}", adjustment.name());
                            writeln!(self.output, "Error applying {}: {e}", choice.name())?;
                        }
                    }
                }
            }
        }

        if applied {
            writeln!(self.output, "Applied.")?;
            if self.settings.auto_show {
                self.show(session.image())?;
            }
        }

        Ok(State::Ready(session))
    }

    /// Asks until a usable number is entered. `None` when the input closed.
    fn read_parameter(&mut self, choice: MenuChoice) -> io::Result<Option<f32>> {
        let Some(label) = choice.parameter() else {
            return Ok(Some(menu::DEFAULT_PARAMETER));
        };

        loop {
            let Some(line) = self.prompt(&format!("{label} [1]: "))? else {
                return Ok(None);
            };

            match menu::parse_parameter(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => writeln!(self.output, "{e}. Try again.")?,
            }
        }
    }

    /// `false` when the input closed while asking for the file name.
    fn save(&mut self, session: &mut Session) -> io::Result<bool> {
        if !session.is_modified() {
            writeln!(self.output, "Nothing to save.")?;
            return Ok(true);
        }

        let Some(line) = self.prompt("Save as: ")? else {
            return Ok(false);
        };

        let path = line.as_str();
        if path.is_empty() {
            writeln!(self.output, "No file name given, nothing saved.")?;
            return Ok(true);
        }

        match session.save(path, self.settings.quality) {
            Ok(()) => writeln!(self.output, "Saved: {path}")?,
            Err(e) => {
                log::warn!("save {path} failed: {e}");
                writeln!(self.output, "Error saving image: {e}")?;
            }
        }

        Ok(true)
    }

    fn show(&mut self, image: &PixelBuffer) -> io::Result<()> {
        if let Err(e) = self.viewer.show(image) {
            log::warn!("show image failed: {e:?}");
            writeln!(self.output, "Failed to show image: {e:#}")?;
        }
        Ok(())
    }

    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
