//! Scripted actions for the headless runner.
//!
//! A script is a JSON-lines file. Each line is one [`ScriptEntry`]: the
//! action and the day on which to queue it (`0` or missing means "before the
//! first tick"). Blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! {"action":{"Build":{"kind":"House","x":3,"y":4}}}
//! {"day":2,"action":"Withdraw"}
//! ```

use std::collections::VecDeque;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use simulation::game_actions::GameAction;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ScriptEntry {
    #[serde(default)]
    pub day: u64,
    pub action: GameAction,
}

/// Entries still waiting for their day, in file order.
#[derive(Debug, Default)]
pub struct Script {
    pending: VecDeque<ScriptEntry>,
}

impl Script {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading script {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing script {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        let mut entries = Vec::new();
        for (number, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let entry: ScriptEntry =
                serde_json::from_str(line).with_context(|| format!("line {}", number + 1))?;
            entries.push(entry);
        }
        // Stable: same-day entries keep their file order.
        entries.sort_by_key(|e| e.day);
        Ok(Self {
            pending: entries.into(),
        })
    }

    /// Remove and return every action due on or before `day`.
    pub fn due(&mut self, day: u64) -> Vec<GameAction> {
        let mut due = Vec::new();
        while self.pending.front().is_some_and(|e| e.day <= day) {
            if let Some(entry) = self.pending.pop_front() {
                due.push(entry.action);
            }
        }
        due
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
