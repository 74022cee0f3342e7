//! Change notification hook.
//!
//! The editor reports every committed mutation (add, remove, drag commit,
//! resize commit) to a single external consumer as the full serialized
//! timeline.

use std::fmt;

use crate::data::TimelineData;

/// Callback invoked with the serialized timeline after a committed mutation.
pub type ChangeCallback = Box<dyn FnMut(&TimelineData)>;

/// Observer hook holding the host's change callback.
#[derive(Default)]
pub struct ChangeNotifier {
    callback: Option<ChangeCallback>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the host callback, replacing any previous one.
    pub fn set(&mut self, callback: ChangeCallback) {
        self.callback = Some(callback);
    }

    /// Remove the host callback.
    pub fn clear(&mut self) {
        self.callback = None;
    }

    /// Whether a callback is installed.
    pub fn is_set(&self) -> bool {
        self.callback.is_some()
    }

    /// Invoke the callback with the given payload, if one is installed.
    pub fn emit(&mut self, data: &TimelineData) {
        if let Some(callback) = self.callback.as_mut() {
            callback(data);
        }
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("set", &self.is_set())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn empty_data() -> TimelineData {
        TimelineData {
            tracks: Vec::new(),
            clips: Vec::new(),
            duration: 60.0,
        }
    }

    #[test]
    fn test_emit_without_callback_is_noop() {
        let mut notifier = ChangeNotifier::new();
        notifier.emit(&empty_data());
        assert!(!notifier.is_set());
    }

    #[test]
    fn test_emit_invokes_callback() {
        let count = Rc::new(Cell::new(0));
        let seen = count.clone();
        let mut notifier = ChangeNotifier::new();
        notifier.set(Box::new(move |data| {
            assert_eq!(data.duration, 60.0);
            seen.set(seen.get() + 1);
        }));

        notifier.emit(&empty_data());
        notifier.emit(&empty_data());
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_clear() {
        let count = Rc::new(Cell::new(0));
        let seen = count.clone();
        let mut notifier = ChangeNotifier::new();
        notifier.set(Box::new(move |_| seen.set(seen.get() + 1)));
        notifier.clear();
        notifier.emit(&empty_data());
        assert_eq!(count.get(), 0);
    }
}
