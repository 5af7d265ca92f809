pub mod domain;
pub mod error;
pub mod ids;
pub mod time;

pub use domain::{TransitionEvent, TransitionKind, VehicleState, ZoneStatus};
pub use error::{ErrorCode, ZonewatchError, ZonewatchResult};
pub use ids::{VehicleId, ZoneId};
pub use time::{now_epoch_millis, now_utc, EpochMillis, Timestamp};
