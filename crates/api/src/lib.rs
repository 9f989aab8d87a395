//! `blueforge-api` — HTTP surface of the marketplace.

pub mod app;
