//! Veneer
//!
//! A presentational component library for web UIs, rendered via Leptos.
//! Buttons, cards, tables, modals, navigation and similar visual primitives,
//! styled through CSS custom properties supplied by the consuming
//! application (see [`theme`]).
//!
//! # Design
//!
//! - **Stateless**: every component is a pure function of its props. The two
//!   overlays (Modal, Toast) read a caller-owned `open` flag; selection
//!   controls (Tabs, Pagination) report interactions through callbacks and
//!   mutate nothing themselves.
//! - **Silent degradation**: missing optional props fall back to defaults,
//!   empty lists render degenerate but well-formed markup, and nothing
//!   validates or errors. Variant props are exhaustive enums, so an
//!   unrecognized variant is unrepresentable rather than silently unstyled.
//!
//! # Modules
//!
//! - [`components`]: the component set (also re-exported at the crate root)
//! - [`theme`]: the CSS custom property contract
//! - [`core`](crate::core) / [`extended`](crate::extended): aggregate exports
//!   for bulk import

pub mod components;
pub mod theme;

pub use components::*;

/// Core component set: the everyday building blocks.
pub mod core {
    pub use crate::components::{
        Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardHeader, Column, Input,
        Row, Section, Spinner, Table,
    };
}

/// Extended component set: navigation, overlays and status surfaces.
pub mod extended {
    pub use crate::components::{
        Alert, AlertKind, Avatar, Dropdown, Modal, NavLink, Navbar, Pagination, Sidebar, Tabs,
        Toast,
    };
}
