//! hierarchy-nav: navigation controller for a server-hosted hierarchy of graphs.
//!
//! Module layout:
//! - models: hierarchy tree snapshot (arena of nodes)
//! - kernel: headless store (state/action/effect), services (ports, adapters, event bus)
//! - views: ancestor selector and children tabs projections
//! - app: navigator wiring the store to a runtime, a bus, a frontend and a view

pub mod app;
pub mod kernel;
pub mod models;
pub mod views;
