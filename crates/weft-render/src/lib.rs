//! # weft-render
//!
//! Pluggable rendering abstraction for weft.
//!
//! The driver hands a borrowed [`RenderFrame`] to a [`Renderer`] once per
//! frame. [`HeadlessRenderer`] counts frames for benchmarks and CI.

pub mod frame;
pub mod renderer;

pub use frame::{ColliderView, DisplayMode, Primitive, RenderFrame, WireframeStyle};
pub use renderer::{HeadlessRenderer, Renderer};
