//! `blueforge-auth` — roles, principals, and menu visibility policy.
//!
//! Authorization here is a **pure policy layer**: no IO, no panics, no
//! storage. Roles are a closed enum and visibility is a function of the role,
//! so there is exactly one place to read when asking "what can this role
//! see?".

pub mod menu;
pub mod principal;
pub mod roles;

pub use menu::{visible_menu, MenuItem};
pub use principal::Principal;
pub use roles::Role;
