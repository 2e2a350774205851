use std::cell::RefCell;
use std::rc::Rc;

use crate::store::FileStore;

/// Access to a [`FileStore`] owned by the host application.
///
/// Closures run synchronously and must not be held across an await; the
/// dispatcher only borrows the store between suspension points.
pub trait StoreHandle {
    fn with<R>(&self, f: impl FnOnce(&FileStore) -> R) -> R;
    fn update<R>(&self, f: impl FnOnce(&mut FileStore) -> R) -> R;
}

/// Plain shared store for hosts without a reactive runtime.
pub type SharedStore = Rc<RefCell<FileStore>>;

impl StoreHandle for SharedStore {
    fn with<R>(&self, f: impl FnOnce(&FileStore) -> R) -> R {
        f(&self.borrow())
    }

    fn update<R>(&self, f: impl FnOnce(&mut FileStore) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}
