use std::sync::Arc;

use log::Level;
use parking_lot::RwLock;

use crate::services::diagnostics::DiagnosticSink;
use crate::services::error::ConfigurationError;
use crate::services::word_filter::WordFilter;

/// Shared slot holding the live filter.
///
/// Readers take a cheap `Arc` clone and match without holding the lock. A new
/// word list means building a fresh filter and swapping it in whole.
#[derive(Debug)]
pub struct FilterHandle {
    current: RwLock<Arc<WordFilter>>,
}

impl FilterHandle {
    pub fn new(filter: WordFilter) -> Self {
        Self {
            current: RwLock::new(Arc::new(filter)),
        }
    }

    pub fn current(&self) -> Arc<WordFilter> {
        Arc::clone(&self.current.read())
    }

    /// Publishes `filter` and returns the one it replaced.
    pub fn replace(&self, filter: WordFilter) -> Arc<WordFilter> {
        std::mem::replace(&mut *self.current.write(), Arc::new(filter))
    }
}

/// Builds a filter from `words` and swaps it in. On failure the live filter
/// stays in place. Returns the number of banned words now active.
pub fn rebuild<I, S>(
    handle: &FilterHandle,
    words: I,
    sink: &dyn DiagnosticSink,
) -> Result<usize, ConfigurationError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let filter = match WordFilter::with_builtin_table(words, sink) {
        Ok(filter) => filter,
        Err(e) => {
            sink.report(
                Level::Error,
                &format!("word filter rebuild failed, keeping current list: {}", e),
            );
            return Err(e);
        }
    };

    let count = filter.words().len();
    let previous = handle.replace(filter);
    sink.report(
        Level::Info,
        &format!(
            "word filter swapped: {} -> {} banned words",
            previous.words().len(),
            count
        ),
    );
    Ok(count)
}
