//! Core infrastructure: application state and builder.

pub mod app;

// vim: ts=4
