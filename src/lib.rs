pub mod carousel;
pub mod config;
pub mod content;
pub mod reveal;
pub mod scroll_spy;
pub mod telemetry;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
#[cfg(target_arch = "wasm32")]
mod observer;
#[cfg(target_arch = "wasm32")]
mod resume;
