//! cosmic-calendar: temporal navigation and helical projection core for a 3D
//! calendar visualizer.
//!
//! Calendar instants map onto a vertical height axis (100 units per year)
//! while every body of the catalog turns around it, so each body traces a
//! helix. The engine keeps a mixed-radix navigation state across ten zoom
//! levels and emits a full replacement scene (bodies, orbits, worldlines,
//! time markers, connectors) after every action. Drawing is delegated to a
//! `render::Renderer` implementation.

pub mod api;
pub mod core;
pub mod error;
pub mod layout;
pub mod navigation;
pub mod render;
pub mod telemetry;

pub use api::{CalendarEngine, CalendarEngineConfig};
pub use error::{CalendarError, CalendarResult};
