use std::io::Write;
use std::sync::{Arc, Mutex};

use super::traits::OutputStream;
use crate::error::Result;

/// Writes to the process' standard output
#[derive(Debug, Clone, Default)]
pub struct StdoutStream;

impl OutputStream for StdoutStream {
    fn write(&mut self, text: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

/// In-memory output; clones share the same buffer
#[derive(Debug, Clone, Default)]
pub struct BufferedOutput {
    buffer: Arc<Mutex<String>>,
}

impl BufferedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far
    pub fn contents(&self) -> String {
        match self.buffer.lock() {
            Ok(buffer) => buffer.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl OutputStream for BufferedOutput {
    fn write(&mut self, text: &str) -> Result<()> {
        match self.buffer.lock() {
            Ok(mut buffer) => buffer.push_str(text),
            Err(poisoned) => poisoned.into_inner().push_str(text),
        }
        Ok(())
    }
}
