//! Line-oriented console shared by pages and background tasks
//!
//! A [`Console`] is cheap to clone; every clone writes to the same sink, so a
//! spawned task can print after the page that launched it has returned.

use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug)]
enum Sink {
    Stdout,
    Captured(Vec<String>),
}

/// Destination for demonstration output
#[derive(Debug, Clone)]
pub struct Console {
    sink: Arc<Mutex<Sink>>,
}

impl Console {
    /// Console that prints to standard output
    pub fn stdout() -> Self {
        Self {
            sink: Arc::new(Mutex::new(Sink::Stdout)),
        }
    }

    /// Console that records lines in memory
    pub fn captured() -> Self {
        Self {
            sink: Arc::new(Mutex::new(Sink::Captured(Vec::new()))),
        }
    }

    /// Write one line
    pub fn line(&self, text: impl Into<String>) {
        let text = text.into();
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        match &mut *sink {
            Sink::Stdout => println!("{text}"),
            Sink::Captured(lines) => lines.push(text),
        }
    }

    /// Lines recorded so far (always empty for stdout)
    pub fn lines(&self) -> Vec<String> {
        let sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        match &*sink {
            Sink::Stdout => Vec::new(),
            Sink::Captured(lines) => lines.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_sink() {
        let console = Console::captured();
        let other = console.clone();
        console.line("first");
        other.line(String::from("second"));
        assert_eq!(console.lines(), vec!["first", "second"]);
    }

    #[test]
    fn test_stdout_records_nothing() {
        let console = Console::stdout();
        console.line("to stdout");
        assert!(console.lines().is_empty());
    }
}
