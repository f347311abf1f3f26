//! ShadCN-style reusable UI components.
//!
//! This module provides a set of composable UI components rendered via
//! Leptos SSR.
//!
//! # Components
//!
//! - [`Badge`], [`TypeBadge`], [`StatusPill`]: tinted labels
//! - [`Button`]: Clickable button with variants
//! - [`Panel`], [`PanelHeader`]: Rounded column container
//! - [`Avatar`]: Initials avatar
//! - [`Separator`]: Visual separator line
//! - [`icons`]: SVG icon components

mod avatar;
mod badge;
mod button;
mod icons;
mod panel;
mod separator;

pub use avatar::Avatar;
pub use badge::{Badge, StatusPill, Tone, TypeBadge};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use icons::*;
pub use panel::{Panel, PanelHeader};
pub use separator::Separator;
