// ============================================================================
// HIRENEXT COMPANY PORTAL - FRONTEND (YEW + MVVM)
// ============================================================================
// - Views/Components: render only, no network
// - Hooks: glue between views and viewmodels (spawn_local, callbacks)
// - ViewModels: auth, wizard submit flow, dashboard loading
// - Services: HTTP client and persisted session
// - Stores: reducers for the company slice and the wizard draft
// ============================================================================

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod services;
pub mod stores;
pub mod utils;
pub mod validation;
pub mod viewmodels;
pub mod views;

pub use views::App;
