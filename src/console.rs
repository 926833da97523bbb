// Console sink shared by every example.
// Drivers print to stdout; tests capture lines in memory and inspect them.

use std::cell::RefCell;
use std::rc::Rc;

/// Where example output goes.
///
/// Cloning a `Capture` console shares the same buffer, so a receiver and the
/// test that built it see the same lines.
#[derive(Clone, Debug)]
pub enum Console {
    Stdout,
    Capture(Rc<RefCell<Vec<String>>>),
}

impl Console {
    pub fn stdout() -> Self {
        Console::Stdout
    }

    pub fn capture() -> Self {
        Console::Capture(Rc::new(RefCell::new(Vec::new())))
    }

    pub fn say(&self, line: impl Into<String>) {
        let line = line.into();
        match self {
            Console::Stdout => println!("{}", line),
            Console::Capture(lines) => lines.borrow_mut().push(line),
        }
    }

    /// Captured lines so far. Always empty for stdout.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Console::Stdout => Vec::new(),
            Console::Capture(lines) => lines.borrow().clone(),
        }
    }

    /// Drops everything captured so far.
    pub fn clear(&self) {
        if let Console::Capture(lines) = self {
            lines.borrow_mut().clear();
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Console::stdout()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_records_lines() {
        let console = Console::capture();
        console.say("first");
        console.say(String::from("second"));
        assert_eq!(console.lines(), vec!["first", "second"]);
    }

    #[test]
    fn test_clones_share_buffer() {
        let console = Console::capture();
        let other = console.clone();
        other.say("shared");
        assert_eq!(console.lines(), vec!["shared"]);
    }

    #[test]
    fn test_clear() {
        let console = Console::capture();
        console.say("gone");
        console.clear();
        assert!(console.lines().is_empty());
    }

    #[test]
    fn test_stdout_has_no_lines() {
        let console = Console::stdout();
        console.say("printed");
        assert!(console.lines().is_empty());
    }
}
