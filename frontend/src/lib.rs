//! VivaClin Frontend: the client support layer of the VivaClin portal.
//!
//! Bundles everything the portal's screens rely on: anti-forgery-aware
//! request dispatch, Brazilian document and phone validation with
//! progressive input masks, toast notifications, and user preference
//! storage.

pub mod config;
pub mod errors;
pub mod http;
pub mod preferences;
pub mod services;
pub mod session;
pub mod toast;
pub mod utils;
pub mod validation;
