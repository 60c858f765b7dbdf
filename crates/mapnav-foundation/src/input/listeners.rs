//! Bookkeeping for the document- and window-level listeners a gesture binds
//! while it runs.
//!
//! The host owns the real listeners; a handler only records which global
//! inputs it wants, and the arbiter forwards those inputs to it. Every bind
//! must be matched by an unbind on every path out of the gesture, which is
//! easy to check through [`ListenerSet::is_empty`].

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GlobalListener {
    PointerMove = 0,
    PointerUp = 1,
    TouchMove = 2,
    TouchEnd = 3,
    TouchCancel = 4,
    KeyDown = 5,
    Blur = 6,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ListenerSet(u8);

impl ListenerSet {
    pub const NONE: Self = Self(0);

    pub fn with(mut self, listener: GlobalListener) -> Self {
        self.insert(listener);
        self
    }

    pub fn insert(&mut self, listener: GlobalListener) {
        self.0 |= 1 << (listener as u8);
    }

    pub fn contains(&self, listener: GlobalListener) -> bool {
        (self.0 & (1 << (listener as u8))) != 0
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<GlobalListener> for ListenerSet {
    fn from_iter<I: IntoIterator<Item = GlobalListener>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, Self::with)
    }
}
