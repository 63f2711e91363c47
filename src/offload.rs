//! The compute window.
//!
//! By the time a closure gets here its inputs are plain `f64` buffers, so it
//! can run on another thread while the caller's thread is free to do host
//! work. The call itself stays synchronous: we always join before returning.

use std::thread;

use crate::config::Config;
use crate::error::{MtrxError, Op, Result};

/// Runs `f` inline, or on a scoped worker thread if `config` says `work` is
/// big enough.
pub fn run<R, F>(config: &Config, op: Op, work: usize, f: F) -> Result<R>
where
    F: FnOnce() -> Result<R> + Send,
    R: Send,
{
    if !config.should_offload(work) {
        return f();
    }

    log::trace!("{}: offloading {} units of work", op, work);

    let mut builder = thread::Builder::new().name(format!("mtrx-{}", op));
    if let Some(size) = config.worker_stack_size {
        builder = builder.stack_size(size);
    }

    thread::scope(|scope| {
        let handle = builder
            .spawn_scoped(scope, f)
            .map_err(|source| MtrxError::Spawn { op, source })?;
        handle
            .join()
            .map_err(|_| MtrxError::WorkerPanicked { op })?
    })
}
