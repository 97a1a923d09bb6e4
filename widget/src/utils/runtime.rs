//! Process-wide Tokio runtime.
//!
//! egui drives the UI from its own event loop, but reqwest and the submit
//! sequence need a Tokio context. The host builds this runtime once and hands
//! its [`Handle`] to the widget, which spawns async work on it and receives
//! results over the event channel.
//!
//! ```rust,no_run
//! use trade_widget::utils::runtime::shared_runtime;
//!
//! let handle = shared_runtime().expect("runtime").handle().clone();
//! handle.spawn(async move {
//!     // async work, results sent back over a channel
//! });
//! ```

use once_cell::sync::OnceCell;
use tokio::runtime::{Builder, Runtime};

static TOKIO_RT: OnceCell<Runtime> = OnceCell::new();

/// The shared multi-threaded runtime, created on first use.
pub fn shared_runtime() -> std::io::Result<&'static Runtime> {
    TOKIO_RT.get_or_try_init(|| {
        Builder::new_multi_thread()
            .enable_all()
            .thread_name("widget-rt")
            .build()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_runtime_is_created_once() {
        let first = shared_runtime().unwrap() as *const Runtime;
        let second = shared_runtime().unwrap() as *const Runtime;
        assert_eq!(first, second);
    }

    #[test]
    fn test_shared_runtime_runs_tasks() {
        let handle = shared_runtime().unwrap().handle().clone();
        let value = handle.block_on(handle.spawn(async { 7 })).unwrap();
        assert_eq!(value, 7);
    }
}
