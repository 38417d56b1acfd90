//! Shared Tokio runtime for background tasks
//!
//! egui owns the main thread and provides no async executor. Background work
//! (boot tasks, the splash hold timer) runs on this runtime and reports back
//! to the main thread over the app event channel.
//!
//! Usage:
//! ```rust,ignore
//! use crate::utils::runtime::RUNTIME;
//!
//! RUNTIME.spawn(async move {
//!     let result = some_background_work().await;
//!     event_tx.send(AppEvent::from(result)).await.ok();
//! });
//! ```

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static RUNTIME: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for background tasks")
});
