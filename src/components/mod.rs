//! Reusable presentational UI components.
//!
//! Every component here is a stateless render function: a typed prop set goes
//! in, a view comes out, and nothing is kept between renders. Visibility
//! (Modal, Toast) and selection (Tabs) are owned by the caller and passed in
//! each pass; interaction is surfaced through optional [`Callback`] props.
//!
//! [`Callback`]: leptos::prelude::Callback
//!
//! # Components
//!
//! - [`Button`], [`Badge`], [`Alert`]: variant-styled primitives
//! - [`Card`], [`CardHeader`], [`Section`], [`Separator`]: containers
//! - [`Input`], [`Textarea`]: form fields
//! - [`Table`]: column-descriptor-driven data table
//! - [`Navbar`], [`Sidebar`], [`Dropdown`]: navigation
//! - [`Pagination`], [`Tabs`]: caller-driven selection controls
//! - [`Modal`], [`Toast`]: visibility-gated overlays
//! - [`Spinner`], [`Avatar`]: odds and ends

mod alert;
mod avatar;
mod badge;
mod button;
mod card;
mod dropdown;
mod input;
mod modal;
mod navbar;
mod pagination;
mod section;
mod separator;
mod sidebar;
mod spinner;
mod table;
mod tabs;
mod toast;

pub use alert::{Alert, AlertKind};
pub use avatar::Avatar;
pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardHeader};
pub use dropdown::Dropdown;
pub use input::{Input, Textarea};
pub use modal::Modal;
pub use navbar::{NavLink, Navbar};
pub use pagination::Pagination;
pub use section::Section;
pub use separator::{Separator, SeparatorOrientation};
pub use sidebar::Sidebar;
pub use spinner::Spinner;
pub use table::{Column, Row, Table};
pub use tabs::Tabs;
pub use toast::Toast;
