use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use zonewatch_core::{Timestamp, VehicleId, VehicleState, ZoneId};

/// Concurrent map of last known vehicle states.
///
/// The only shared mutable resource in the system. Values are cloned out
/// on read; the map owns every `VehicleState` exclusively. `upsert`
/// replaces the previous entry and returns it under the same shard write
/// lock, so the read-then-write for one vehicle is linearizable while
/// vehicles on other shards proceed in parallel.
#[derive(Debug, Default)]
pub struct VehicleStore {
    vehicles: DashMap<VehicleId, VehicleState>,
}

impl VehicleStore {
    pub fn new() -> Self {
        Self {
            vehicles: DashMap::new(),
        }
    }

    pub fn get(&self, vehicle_id: &VehicleId) -> Option<VehicleState> {
        self.vehicles
            .get(vehicle_id)
            .map(|entry| entry.value().clone())
    }

    /// Builds the new state (status derived from zone presence), swaps it
    /// in atomically, and returns `(replaced, new)`. Every call fully
    /// overwrites; there is no partial-update path.
    pub fn upsert(
        &self,
        vehicle_id: VehicleId,
        zone_id: Option<ZoneId>,
        timestamp: Timestamp,
    ) -> (Option<VehicleState>, VehicleState) {
        let next = VehicleState::new(vehicle_id.clone(), zone_id, timestamp);
        match self.vehicles.entry(vehicle_id) {
            Entry::Occupied(mut entry) => {
                let previous = entry.insert(next.clone());
                (Some(previous), next)
            }
            Entry::Vacant(entry) => {
                entry.insert(next.clone());
                (None, next)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}
