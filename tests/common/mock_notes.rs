//! Mock release notes generator

#![allow(dead_code)]

use async_trait::async_trait;
use bumpify::error::{Error, Result};
use bumpify::notes::NotesGenerator;
use std::sync::Mutex;

/// Returns fixed text, or fails like a converter exiting non-zero
pub struct MockNotes {
    text: String,
    fail: bool,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockNotes {
    pub fn returning(text: &str) -> Self {
        Self {
            text: text.to_string(),
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            text: String::new(),
            fail: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// `(old, new)` pairs passed to `generate`
    pub fn get_calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotesGenerator for MockNotes {
    async fn generate(&self, old: &str, new: &str) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((old.to_string(), new.to_string()));
        if self.fail {
            return Err(Error::Notes("pandoc exited with exit status: 1".to_string()));
        }
        Ok(self.text.clone())
    }
}
