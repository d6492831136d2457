//! Isoview Viewer - Interactive isometric model viewer
//!
//! A lightweight 3D viewer that loads a glTF asset, frames an isometric view
//! from its bounding volume, and offers orbit navigation, optional
//! auto-rotation, and hover labels on points of interest.

mod app;
mod markers;
mod models;
mod scene;
mod ui;

pub use app::run;
