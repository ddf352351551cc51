// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Presentation: page templates, icons and the output surface

pub mod icons;
pub mod page;
pub mod surface;

pub use icons::Icon;
pub use page::{compose_error, compose_expression, escape_html, Presenter, RELOAD_ACTION};
pub use surface::{OutputSurface, SurfaceSnapshot, ViewState};
