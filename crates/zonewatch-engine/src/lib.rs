pub mod processor;
pub mod registry;
pub mod store;
pub mod transition;

pub use processor::{EventProcessor, LogSink, TransitionSink};
pub use registry::{sample_zones, Zone, ZoneRegistry};
pub use store::VehicleStore;
pub use transition::classify;
