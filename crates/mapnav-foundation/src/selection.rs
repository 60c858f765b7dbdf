//! Text-selection suppression while a drag is in progress.
//!
//! The host exposes the document's `user-select` style through a
//! [`SelectionHost`]. A gesture that must not select text takes a
//! [`SelectionLease`]; dropping the lease restores the value that was in
//! place when it was taken.

use std::fmt;
use std::rc::Rc;

const SELECTION_NONE: &str = "none";

pub trait SelectionHost {
    fn user_select(&self) -> String;
    fn set_user_select(&self, value: &str);
}

/// Shared handle to the host's selection style. Created once at startup
/// with [`init`](Self::init); a handle without a host makes every lease a
/// no-op.
#[derive(Clone, Default)]
pub struct DragSelection {
    host: Option<Rc<dyn SelectionHost>>,
}

impl DragSelection {
    pub fn init(host: Rc<dyn SelectionHost>) -> Self {
        Self { host: Some(host) }
    }

    /// A handle for hosts without a selectable document.
    pub fn unsupported() -> Self {
        Self::default()
    }

    pub fn acquire(&self) -> SelectionLease {
        let saved = self.host.as_ref().map(|host| {
            let saved = host.user_select();
            host.set_user_select(SELECTION_NONE);
            saved
        });
        SelectionLease {
            host: self.host.clone(),
            saved,
        }
    }
}

impl fmt::Debug for DragSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragSelection")
            .field("supported", &self.host.is_some())
            .finish()
    }
}

#[must_use = "selection is restored as soon as the lease is dropped"]
pub struct SelectionLease {
    host: Option<Rc<dyn SelectionHost>>,
    saved: Option<String>,
}

impl Drop for SelectionLease {
    fn drop(&mut self) {
        if let (Some(host), Some(saved)) = (&self.host, &self.saved) {
            host.set_user_select(saved);
        }
    }
}

impl fmt::Debug for SelectionLease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionLease")
            .field("saved", &self.saved)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Style(RefCell<String>);

    impl SelectionHost for Style {
        fn user_select(&self) -> String {
            self.0.borrow().clone()
        }

        fn set_user_select(&self, value: &str) {
            *self.0.borrow_mut() = value.to_owned();
        }
    }

    #[test]
    fn lease_restores_previous_value() {
        let style = Rc::new(Style(RefCell::new("text".into())));
        let selection = DragSelection::init(style.clone());

        let lease = selection.acquire();
        assert_eq!(style.user_select(), "none");
        drop(lease);
        assert_eq!(style.user_select(), "text");
    }

    #[test]
    fn unsupported_host_is_a_no_op() {
        let lease = DragSelection::unsupported().acquire();
        drop(lease);
    }
}
