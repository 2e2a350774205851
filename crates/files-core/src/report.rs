//! Where failed actions get reported.

use crate::error::StoreError;

/// Observability sink for action failures.
///
/// The dispatcher reports each failure exactly once, then also returns it
/// to the caller.
pub trait ReportSink {
    fn report(&self, error: &StoreError);
}

/// Default sink: emits a `tracing` error event.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl ReportSink for TracingSink {
    fn report(&self, error: &StoreError) {
        tracing::error!(path = error.path(), %error, "action failed");
    }
}

impl<S: ReportSink + ?Sized> ReportSink for std::rc::Rc<S> {
    fn report(&self, error: &StoreError) {
        (**self).report(error);
    }
}
