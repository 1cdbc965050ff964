use std::thread::{self, JoinHandle};

use tracing::debug;

use crate::{error::RunnerError, interpreter::runner};

/// A pending run on a worker thread.
///
/// The handle is the single delivery point for the run's result: consuming
/// [`wait`](Self::wait) yields the result exactly once, and dropping the
/// handle detaches the worker, which still runs to completion. There is no
/// cancellation.
#[derive(Debug)]
pub struct RunHandle {
    worker: JoinHandle<Result<String, RunnerError>>,
}

impl RunHandle {
    /// Blocks until the run completes and yields its result.
    ///
    /// Consumes the handle, so a result can never be observed twice. If the
    /// worker panicked (the interpreter itself never does), the panic is
    /// resumed on the calling thread rather than swallowed.
    ///
    /// # Errors
    /// The run's own [`RunnerError`], unchanged.
    pub fn wait(self) -> Result<String, RunnerError> {
        match self.worker.join() {
            Ok(result) => result,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }

    /// Reports whether the run has already completed, without blocking.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }
}

/// Starts a run on a worker thread and returns its handle.
///
/// The calling thread is never blocked by the run itself; an interactive
/// caller can keep polling [`RunHandle::is_finished`] or hand the handle to
/// whatever context should receive the result. Each call spawns its own
/// worker with its own store, so concurrent runs cannot interfere.
///
/// # Example
/// ```
/// use swiftlet::execute;
///
/// let handle = execute("print(2 + 3)".to_string());
/// assert_eq!(handle.wait().unwrap(), "5\n");
/// ```
#[must_use]
pub fn execute(source: String) -> RunHandle {
    debug!(bytes = source.len(), "spawning worker for run");

    let worker = thread::spawn(move || runner::run(&source));
    RunHandle { worker }
}
