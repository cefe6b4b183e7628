pub mod config;
pub mod contact;
pub mod content;
pub mod cursor;
pub mod cycle;
pub mod diagnostics;
pub mod gallery;
pub mod motion;
pub mod overlay;
pub mod scene;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
