//! Line-oriented prompting with "keep current" editing.
//!
//! Every field the operator fills in goes through one of two paths:
//!
//! - **required**: the answer is parsed; anything that fails to parse prints a
//!   notice and asks again, until a value is produced.
//! - **optional**: a blank answer keeps the current value; an answer that fails
//!   to parse prints a notice and also keeps the current value.
//!
//! Both are built on [`edit`], which turns one answer into an [`Edit`].
//!
//! End of input is reported as `io::ErrorKind::UnexpectedEof` so that a closed
//! stdin unwinds the session instead of re-prompting forever.

use std::io::{self, BufRead, Write};

use flightdesk_core::{fields::parse_menu_choice, Menu, MenuItem};

/// Outcome of one answer to an editable field.
#[derive(Debug, Clone, PartialEq)]
pub enum Edit<T> {
    /// Blank answer: leave the field as it is
    Keep,
    /// Parsed replacement value
    Set(T),
}

/// Interprets one answer: blank means [`Edit::Keep`], anything else goes
/// through `parse`.
pub fn edit<T, E>(answer: &str, parse: impl FnOnce(&str) -> Result<T, E>) -> Result<Edit<T>, E> {
    let answer = answer.trim();
    if answer.is_empty() {
        Ok(Edit::Keep)
    } else {
        parse(answer).map(Edit::Set)
    }
}

/// Console input and output owned by a session.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer for free-form output such as listings.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes a line of text.
    pub fn say(&mut self, message: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", message.as_ref())
    }

    /// Reads one line with surrounding whitespace removed.
    pub fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "console input closed"));
        }
        Ok(line.trim().to_string())
    }

    /// Prints `label` without a newline and reads the answer.
    pub fn prompt(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Asks until `parse` accepts the answer, printing `notice` after each
    /// rejection. A blank answer is handed to `parse` like any other.
    pub fn required<T, E>(
        &mut self,
        label: &str,
        notice: &str,
        parse: impl Fn(&str) -> Result<T, E>,
    ) -> io::Result<T> {
        loop {
            let answer = self.prompt(label)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(_) => self.say(notice)?,
            }
        }
    }

    /// Asks once; blank keeps `current`, a rejected answer prints `notice` and
    /// keeps `current`.
    pub fn optional<T, E>(
        &mut self,
        label: &str,
        current: T,
        notice: &str,
        parse: impl FnOnce(&str) -> Result<T, E>,
    ) -> io::Result<T> {
        let answer = self.prompt(label)?;
        match edit(&answer, parse) {
            Ok(Edit::Set(value)) => Ok(value),
            Ok(Edit::Keep) => Ok(current),
            Err(_) => {
                self.say(notice)?;
                Ok(current)
            }
        }
    }

    /// Free text where blank keeps `current`.
    pub fn optional_text(&mut self, label: &str, current: &str) -> io::Result<String> {
        self.optional(label, current.to_string(), "", |s| {
            Ok::<_, std::convert::Infallible>(s.to_string())
        })
    }

    /// Shows a 1-based menu over `items` and asks until a valid entry is
    /// chosen. Returns the zero-based index. `items` must not be empty.
    pub fn choose<T: MenuItem>(&mut self, items: &[T]) -> io::Result<usize> {
        writeln!(self.output)?;
        writeln!(self.output, "Available {}:", T::NOUN_PLURAL)?;
        write!(self.output, "{}", Menu::new(items))?;

        let label = format!("Choose {} (1-{}): ", T::NOUN, items.len());
        self.required(&label, "Invalid choice.", |s| parse_menu_choice(s, items.len()))
    }

    /// Shows a 1-based menu with `current_id` marked. Blank or invalid
    /// answers return `None` (keep the current selection).
    pub fn choose_optional<T: MenuItem>(
        &mut self,
        items: &[T],
        current_id: u64,
    ) -> io::Result<Option<usize>> {
        writeln!(self.output)?;
        writeln!(self.output, "Available {} (press Enter to keep current):", T::NOUN_PLURAL)?;
        write!(self.output, "{}", Menu::new(items).with_current(current_id))?;

        let label = format!("Choose {} [Enter = keep current]: ", T::NOUN);
        self.optional(&label, None, "Invalid choice, keeping current.", |s| {
            parse_menu_choice(s, items.len()).map(Some)
        })
    }

    /// Asks a yes/no question; only `y` (any case) counts as yes.
    pub fn confirm(&mut self, label: &str) -> io::Result<bool> {
        Ok(self.prompt(label)?.eq_ignore_ascii_case("y"))
    }
}
