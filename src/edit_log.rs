use crate::direction::Direction;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Edits applied to a block
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Edit {
    /// Container placed by its own direction
    SetContainer { direction: Direction, element: String },
    /// Position tag changed
    SetPosition { x: i32, y: i32 },
}

/// Logged edit with timestamp
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggedEdit {
    /// Milliseconds since start
    pub timestamp_ms: u64,
    pub edit: Edit,
}

/// In-memory edit logger
pub struct EditLog {
    start_time: Instant,
    edits: Vec<LoggedEdit>,
}

impl EditLog {
    pub fn new() -> Self {
        EditLog {
            start_time: Instant::now(),
            edits: Vec::new(),
        }
    }

    /// Log an edit with current timestamp
    pub fn log(&mut self, edit: Edit) {
        let timestamp_ms = self.start_time.elapsed().as_millis() as u64;
        self.edits.push(LoggedEdit { timestamp_ms, edit });
    }

    pub fn get_edits(&self) -> &[LoggedEdit] {
        &self.edits
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.edits)
    }

    /// Print log to stderr
    pub fn print(&self) {
        eprintln!("\n=== Edit Log ({} events) ===", self.edits.len());
        for (i, logged) in self.edits.iter().enumerate() {
            eprintln!("[{:6}ms] #{:3} {:?}", logged.timestamp_ms, i + 1, logged.edit);
        }
        eprintln!("=== End of Log ===\n");
    }

    pub fn summary(&self) -> String {
        let mut placed = 0;
        let mut moved = 0;

        for logged in &self.edits {
            match logged.edit {
                Edit::SetContainer { .. } => placed += 1,
                Edit::SetPosition { .. } => moved += 1,
            }
        }

        format!(
            "Total Events: {}\n\
             Cell Edits: {}\n\
             Position Changes: {}",
            self.edits.len(),
            placed,
            moved
        )
    }
}

impl Default for EditLog {
    fn default() -> Self {
        Self::new()
    }
}
