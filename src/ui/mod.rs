//! Shared egui styling
//!
//! The screens themselves live in [`crate::states`].

pub mod styles;
