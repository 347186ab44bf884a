use log::trace;

use crate::models::error_entry::ErrorEntry;

/// Append-only log of non-fatal errors kept alongside an object
pub trait ErrorLog {
    /// Entries in insertion order
    fn error_entries(&self) -> &[ErrorEntry];

    /// Append one entry to the end of the log
    fn push_error(&mut self, entry: ErrorEntry);

    /// Record an error message or structured error
    fn set_error(&mut self, error: ErrorEntry) {
        trace!("recording error: {}", error);
        self.push_error(error);
    }

    /// Fetch one entry: the most recent when `index` is `None`.
    /// Returns `None` when the index is out of range or the log is empty.
    /// With `coerce_to_string`, structured entries come back as their message.
    fn get_error(&self, index: Option<usize>, coerce_to_string: bool) -> Option<ErrorEntry> {
        let entries = self.error_entries();
        let entry = match index {
            None => entries.last(),
            Some(i) => entries.get(i),
        }?;
        if coerce_to_string {
            Some(entry.clone().into_plain())
        } else {
            Some(entry.clone())
        }
    }

    /// Copy of the whole log
    fn get_errors(&self) -> Vec<ErrorEntry> {
        self.error_entries().to_vec()
    }

    fn last_error_message(&self) -> Option<String> {
        self.error_entries().last().map(|entry| entry.message().to_string())
    }

    fn has_errors(&self) -> bool {
        !self.error_entries().is_empty()
    }
}
