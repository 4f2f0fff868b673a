//! Result-to-text formatting for copying, and the clipboard sink.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};

use crate::types::{Color, Number};

/// Numbers joined by `", "`.
pub fn join_numbers(values: &[Number]) -> String {
    values
        .iter()
        .map(Number::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// One label per line, used for shuffled lists.
pub fn join_lines(labels: &[String]) -> String {
    labels.join("\n")
}

/// Picked labels joined by `", "`.
pub fn join_labels(labels: &[String]) -> String {
    labels.join(", ")
}

/// Hex codes joined by `", "`.
pub fn join_palette(colors: &[Color]) -> String {
    colors
        .iter()
        .map(|color| color.hex.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub trait ClipboardSink {
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard, opened on first use.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new().context("Clipboard unavailable")?);
        }
        if let Some(clipboard) = self.inner.as_mut() {
            clipboard
                .set_text(text.to_owned())
                .context("Failed to copy to clipboard")?;
        }
        Ok(())
    }
}

/// Keeps every copied text in memory. Clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    copied: Rc<RefCell<Vec<String>>>,
}

impl MemoryClipboard {
    pub fn copied(&self) -> Vec<String> {
        self.copied.borrow().clone()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        self.copied.borrow_mut().push(text.to_owned());
        Ok(())
    }
}
