//! Remote file client contract.
//!
//! The store only needs one remote operation: persisting a favorite flag.
//! Listing, upload and the rest of the file API live with the host
//! application.

use crate::error::ClientError;

/// Remote operations the files store depends on.
///
/// Futures are not required to be `Send`; the store runs on a single-threaded
/// event loop (the browser or a current-thread runtime).
#[allow(async_fn_in_trait)]
pub trait RemoteFileClient {
    /// Persist the favorite flag of the file at `path`.
    async fn favorite(&self, path: &str, value: bool) -> Result<(), ClientError>;
}

impl<C: RemoteFileClient + ?Sized> RemoteFileClient for std::rc::Rc<C> {
    async fn favorite(&self, path: &str, value: bool) -> Result<(), ClientError> {
        (**self).favorite(path, value).await
    }
}

#[cfg(any(test, feature = "mock"))]
pub mod mock {
    //! In-memory client for tests.

    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::RemoteFileClient;
    use crate::error::ClientError;

    /// Records every favorite call and answers from a script.
    #[derive(Debug, Default)]
    pub struct MockClient {
        calls: RefCell<Vec<(String, bool)>>,
        fail_all: RefCell<Option<ClientError>>,
        fail_paths: RefCell<HashMap<String, ClientError>>,
    }

    impl MockClient {
        pub fn new() -> Self {
            Self::default()
        }

        /// Fail every call with `error`.
        pub fn failing(error: ClientError) -> Self {
            let client = Self::default();
            client.fail_all.replace(Some(error));
            client
        }

        /// Fail calls for `path` with `error`.
        pub fn fail_path(&self, path: impl Into<String>, error: ClientError) {
            self.fail_paths.borrow_mut().insert(path.into(), error);
        }

        /// Stop failing.
        pub fn heal(&self) {
            self.fail_all.replace(None);
            self.fail_paths.borrow_mut().clear();
        }

        /// Calls received so far, in order.
        pub fn calls(&self) -> Vec<(String, bool)> {
            self.calls.borrow().clone()
        }
    }

    impl RemoteFileClient for MockClient {
        async fn favorite(&self, path: &str, value: bool) -> Result<(), ClientError> {
            self.calls.borrow_mut().push((path.to_string(), value));
            if let Some(err) = self.fail_all.borrow().clone() {
                return Err(err);
            }
            match self.fail_paths.borrow().get(path) {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }
}
