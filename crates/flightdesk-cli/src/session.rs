//! The interactive menu loop.
//!
//! A [`Session`] owns the store and the console for the lifetime of the
//! process and dispatches each menu choice to one of the workflows in
//! [`crate::workflows`]. The loop is the outermost recovery boundary: store
//! failures are reported inside the workflows and the menu comes back; only
//! console I/O failures end the loop early.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use flightdesk_core::{FlightRepository, LookupProvider};
use log::{debug, info};

use crate::console::Console;

/// Top-level menu commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    List,
    Add,
    Update,
    Delete,
    Exit,
}

impl MenuCommand {
    /// Maps a menu answer to a command; `None` for anything unrecognized.
    pub fn parse(answer: &str) -> Option<Self> {
        match answer.trim() {
            "1" => Some(Self::List),
            "2" => Some(Self::Add),
            "3" => Some(Self::Update),
            "4" => Some(Self::Delete),
            "0" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// An operator session: the store plus the console it is driven from.
pub struct Session<S, R, W> {
    pub(crate) store: S,
    pub(crate) console: Console<R, W>,
}

impl<S, R, W> Session<S, R, W>
where
    S: FlightRepository + LookupProvider,
    R: BufRead,
    W: Write,
{
    pub fn new(store: S, console: Console<R, W>) -> Self {
        Self { store, console }
    }

    /// Runs the menu loop until the operator exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        self.console
            .say("===== Flight Management (Admin Only) - TEXT MODE =====")?;

        loop {
            match self.step() {
                Ok(true) => continue,
                Ok(false) => break,
                Err(e) if is_end_of_input(&e) => {
                    info!("Console input closed, ending session");
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        self.console.say("Goodbye.")?;
        Ok(())
    }

    /// Shows the menu and handles one choice. Returns `false` on exit.
    fn step(&mut self) -> Result<bool> {
        self.show_menu()?;
        let answer = self.console.read_line()?;

        let Some(command) = MenuCommand::parse(&answer) else {
            self.console.say("Invalid choice.")?;
            return Ok(true);
        };
        debug!("Menu command {command:?}");

        match command {
            MenuCommand::List => self.list_flights()?,
            MenuCommand::Add => self.add_flight()?,
            MenuCommand::Update => self.update_flight()?,
            MenuCommand::Delete => self.delete_flight()?,
            MenuCommand::Exit => return Ok(false),
        }
        Ok(true)
    }

    fn show_menu(&mut self) -> io::Result<()> {
        let out = self.console.output();
        writeln!(out)?;
        writeln!(out, "1) List all flights")?;
        writeln!(out, "2) Add new flight")?;
        writeln!(out, "3) Update existing flight")?;
        writeln!(out, "4) Delete flight")?;
        writeln!(out, "0) Exit")?;
        write!(out, "Enter choice: ")?;
        out.flush()
    }

    #[cfg(test)]
    pub(crate) fn into_parts(self) -> (S, W) {
        (self.store, self.console.into_output())
    }
}

fn is_end_of_input(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::UnexpectedEof)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_command_parse() {
        assert_eq!(MenuCommand::parse("1"), Some(MenuCommand::List));
        assert_eq!(MenuCommand::parse(" 2 "), Some(MenuCommand::Add));
        assert_eq!(MenuCommand::parse("3"), Some(MenuCommand::Update));
        assert_eq!(MenuCommand::parse("4"), Some(MenuCommand::Delete));
        assert_eq!(MenuCommand::parse("0"), Some(MenuCommand::Exit));

        assert_eq!(MenuCommand::parse("5"), None);
        assert_eq!(MenuCommand::parse(""), None);
        assert_eq!(MenuCommand::parse("list"), None);
    }

    #[test]
    fn test_end_of_input_detection() {
        let eof: anyhow::Error = io::Error::new(io::ErrorKind::UnexpectedEof, "closed").into();
        let broken: anyhow::Error = io::Error::new(io::ErrorKind::BrokenPipe, "pipe").into();

        assert!(is_end_of_input(&eof));
        assert!(!is_end_of_input(&broken));
        assert!(!is_end_of_input(&anyhow::anyhow!("other")));
    }
}
