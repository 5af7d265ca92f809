use zonewatch_core::{TransitionEvent, TransitionKind, VehicleId, VehicleState, ZoneId};

/// Classifies the zone change between a vehicle's previous state and the
/// zone its newest ping resolved to.
///
/// Total over all presence combinations: a never-seen vehicle inside a
/// zone is a first sighting, equal zones (including both absent) are no
/// transition, and the remaining cases are enter, exit, or move.
pub fn classify(
    vehicle_id: &VehicleId,
    previous: Option<&VehicleState>,
    next_zone: Option<&ZoneId>,
) -> TransitionEvent {
    let (kind, from_zone, to_zone) = match previous {
        None => match next_zone {
            Some(to) => (TransitionKind::FirstSightingEnter, None, Some(to.clone())),
            None => (TransitionKind::None, None, None),
        },
        Some(previous) => match (previous.zone_id.as_ref(), next_zone) {
            (Some(from), Some(to)) if from == to => (TransitionKind::None, None, None),
            (Some(from), Some(to)) => {
                (TransitionKind::Move, Some(from.clone()), Some(to.clone()))
            }
            (Some(from), None) => (TransitionKind::Exit, Some(from.clone()), None),
            (None, Some(to)) => (TransitionKind::Enter, None, Some(to.clone())),
            (None, None) => (TransitionKind::None, None, None),
        },
    };

    TransitionEvent {
        vehicle_id: vehicle_id.clone(),
        kind,
        from_zone,
        to_zone,
    }
}
