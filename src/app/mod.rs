//! Application layer: wires the headless store to the runtime, bus and views.

mod navigator;

pub use navigator::HierarchyNavigator;
