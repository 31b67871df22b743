//! HTTP API
//!
//! Browser-side loading of static JSON data files.

pub mod client;

pub use client::{load_json, ROTATION_DATA};
