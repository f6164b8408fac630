//! Polygon editing engine for an interactive canvas drawing tool.
//!
//! The user clicks to place vertices, finishes the shape into a filled
//! polygon, and then points at existing polygons to select, inspect, or
//! recolor them. This crate owns all of that state and the hit-testing
//! behind it. The host page only wires DOM events to the engine and shows
//! the list / color widgets; drawing goes through [`render`], which consumes
//! a pure [`scene::SceneDescription`] derived after every change.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`input`] | Drawing / browsing mode and selection state |
//! | [`store`] | Finalized polygons and index-based identity |
//! | [`geometry`] | Points and even-odd point-in-polygon classification |
//! | [`scene`] | Pure derivation of the render description |
//! | [`render`] | Canvas 2D renderer for a scene description |
//! | [`color`] | Hex color parsing and formatting |
//! | [`config`] | Host-supplied editor configuration |
//! | [`error`] | [`error::EditorError`] |
//! | [`consts`] | Shared constants (epsilon, palette, labels) |

pub mod color;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod input;
pub mod render;
pub mod scene;
pub mod store;
