//! `orgdesk-app`
//!
//! **Responsibility:** the browser client (Leptos CSR).
//!
//! This crate provides:
//! - Route guards over the session store
//! - The sign-in flow
//! - The organization-management form and view
//!
//! Everything touching the DOM is gated behind `cfg(target_arch = "wasm32")`;
//! native builds expose only the target-independent pieces (`cancel`,
//! `config`) so their logic stays testable off-wasm.

pub mod cancel;
pub mod config;

#[cfg(target_arch = "wasm32")]
pub mod api;
#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod components;
#[cfg(target_arch = "wasm32")]
pub mod guards;
#[cfg(target_arch = "wasm32")]
pub mod session;
#[cfg(target_arch = "wasm32")]
pub mod timer;
#[cfg(target_arch = "wasm32")]
pub mod views;

pub use cancel::CancelGuard;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// WASM entry point for the client.
/// This is called automatically when the WASM module loads.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Mount the Leptos app to the body
    leptos::mount_to_body(app::App);
}
