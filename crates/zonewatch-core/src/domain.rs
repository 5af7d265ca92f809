use crate::ids::{VehicleId, ZoneId};
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneStatus {
    Inside,
    Outside,
}

/// Last known zone membership for one vehicle.
///
/// One instance per vehicle id, wholly replaced on every ping. `status`
/// always reflects `zone_id` presence; `new` is the only constructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    pub vehicle_id: VehicleId,
    pub zone_id: Option<ZoneId>,
    pub status: ZoneStatus,
    pub last_updated: Timestamp,
}

impl VehicleState {
    pub fn new(vehicle_id: VehicleId, zone_id: Option<ZoneId>, last_updated: Timestamp) -> Self {
        let status = if zone_id.is_some() {
            ZoneStatus::Inside
        } else {
            ZoneStatus::Outside
        };
        Self {
            vehicle_id,
            zone_id,
            status,
            last_updated,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    None,
    FirstSightingEnter,
    Enter,
    Exit,
    Move,
}

/// Classified change in zone membership between two consecutive pings.
/// Derived per ping and handed to the transition sink; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionEvent {
    pub vehicle_id: VehicleId,
    pub kind: TransitionKind,
    pub from_zone: Option<ZoneId>,
    pub to_zone: Option<ZoneId>,
}
