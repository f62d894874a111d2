use std::fmt;
use std::rc::{Rc, Weak};

pub trait ThumbValueListener {
    fn thumb_value_changed(&self, value: f64);
}

/// Holds at most one listener without keeping it alive.
#[derive(Default)]
pub struct ListenerSlot(Option<Weak<dyn ThumbValueListener>>);

impl ListenerSlot {
    pub fn set<L: ThumbValueListener + 'static>(&mut self, listener: &Rc<L>) {
        let weak: Weak<dyn ThumbValueListener> = Rc::<L>::downgrade(listener);
        self.0 = Some(weak);
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }

    pub fn is_set(&self) -> bool {
        self.0.as_ref().is_some_and(|w| w.strong_count() > 0)
    }

    pub fn notify(&self, value: f64) {
        if let Some(listener) = self.0.as_ref().and_then(Weak::upgrade) {
            listener.thumb_value_changed(value);
        }
    }
}

impl fmt::Debug for ListenerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerSlot")
            .field("set", &self.is_set())
            .finish()
    }
}
