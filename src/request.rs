use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::task::JoinHandle;
use tracing::debug;

use crate::error::{PredictorError, Result};

/// An in-flight backend request running on the Tokio runtime.
///
/// Awaiting the handle yields the request's result. The request can be
/// cancelled with [`RequestHandle::abort`]; dropping the handle cancels it
/// too, so a view unit that goes away takes its outstanding request with it.
/// A cancelled request resolves to [`PredictorError::Cancelled`].
#[derive(Debug)]
pub struct RequestHandle<T> {
    task: JoinHandle<Result<T>>,
}

impl<T: Send + 'static> RequestHandle<T> {
    /// Start `request` on the current runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a Tokio runtime.
    pub fn spawn<F>(request: F) -> Self
    where
        F: Future<Output = Result<T>> + Send + 'static,
    {
        Self {
            task: tokio::spawn(request),
        }
    }
}

impl<T> RequestHandle<T> {
    pub fn abort(&self) {
        if !self.task.is_finished() {
            debug!("aborting in-flight request");
        }
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl<T> Future for RequestHandle<T> {
    type Output = Result<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.task).poll(cx).map(|joined| match joined {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Err(PredictorError::Cancelled),
            Err(e) => Err(PredictorError::Task(e.to_string())),
        })
    }
}

impl<T> Drop for RequestHandle<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}
