//! Numbered selection menus over reference data.

use std::fmt;

use crate::models::{Aircraft, Airline};

/// Reference rows that can be offered in a selection menu.
pub trait MenuItem: fmt::Display {
    /// Singular name used in prompts, e.g. `airline`.
    const NOUN: &'static str;

    /// Plural name used in menu headings, e.g. `airlines`.
    const NOUN_PLURAL: &'static str;

    /// Store identifier used to mark the current selection.
    fn id(&self) -> u64;
}

impl MenuItem for Airline {
    const NOUN: &'static str = "airline";
    const NOUN_PLURAL: &'static str = "airlines";

    fn id(&self) -> u64 {
        self.id
    }
}

impl MenuItem for Aircraft {
    const NOUN: &'static str = "aircraft";
    const NOUN_PLURAL: &'static str = "aircraft";

    fn id(&self) -> u64 {
        self.id
    }
}

/// A 1-based, contiguous menu over the full reference set.
///
/// When `current` names an entry, that entry is suffixed with ` (current)`.
///
/// ```rust
/// use flightdesk_core::{display::Menu, models::Airline};
///
/// let airlines = vec![
///     Airline { id: 7, name: "Delta".to_string(), iata_code: "DL".to_string() },
///     Airline { id: 9, name: "United".to_string(), iata_code: "UA".to_string() },
/// ];
/// let menu = Menu::new(&airlines).with_current(9);
/// assert_eq!(menu.to_string(), "1) Delta (DL)\n2) United (UA) (current)\n");
/// ```
pub struct Menu<'a, T> {
    items: &'a [T],
    current: Option<u64>,
}

impl<'a, T: MenuItem> Menu<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self {
            items,
            current: None,
        }
    }

    /// Marks the entry whose identifier is `id` as the current selection.
    pub fn with_current(mut self, id: u64) -> Self {
        self.current = Some(id);
        self
    }
}

impl<T: MenuItem> fmt::Display for Menu<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, item) in self.items.iter().enumerate() {
            let marker = if self.current == Some(item.id()) {
                " (current)"
            } else {
                ""
            };
            writeln!(f, "{}) {item}{marker}", index + 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fleet() -> Vec<Aircraft> {
        vec![
            Aircraft { id: 1, model: "A320".to_string(), capacity: 150 },
            Aircraft { id: 2, model: "737".to_string(), capacity: 180 },
            Aircraft { id: 5, model: "787".to_string(), capacity: 242 },
        ]
    }

    #[test]
    fn test_menu_is_one_based_and_contiguous() {
        let fleet = fleet();
        let output = Menu::new(&fleet).to_string();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines,
            ["1) A320 (150 seats)", "2) 737 (180 seats)", "3) 787 (242 seats)"]
        );
    }

    #[test]
    fn test_menu_marks_current_by_id_not_position() {
        let fleet = fleet();
        let output = Menu::new(&fleet).with_current(5).to_string();

        assert!(output.contains("3) 787 (242 seats) (current)"));
        assert_eq!(output.matches("(current)").count(), 1);
    }

    #[test]
    fn test_menu_without_match_has_no_marker() {
        let fleet = fleet();
        let output = Menu::new(&fleet).with_current(99).to_string();
        assert!(!output.contains("(current)"));
    }

    #[test]
    fn test_empty_menu() {
        let empty: Vec<Airline> = Vec::new();
        assert_eq!(Menu::new(&empty).to_string(), "");
    }
}
