use crate::registry::ZoneRegistry;
use crate::store::VehicleStore;
use crate::transition::classify;
use std::sync::Arc;
use zonewatch_core::{Timestamp, TransitionEvent, TransitionKind, VehicleId, VehicleState};
use zonewatch_geo::Point;

/// Observer seam for transition events. The processor notifies the sink
/// for every ping, `TransitionKind::None` included; filtering is sink
/// policy.
pub trait TransitionSink: Send + Sync {
    fn notify(&self, event: &TransitionEvent);
}

/// Default sink: structured logs for real transitions, nothing for
/// `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl TransitionSink for LogSink {
    fn notify(&self, event: &TransitionEvent) {
        match event.kind {
            TransitionKind::None => {}
            TransitionKind::FirstSightingEnter => tracing::info!(
                vehicle = %event.vehicle_id,
                zone = %event.to_zone.as_ref().map(|z| z.as_str()).unwrap_or("-"),
                "vehicle entered zone (first sighting)"
            ),
            TransitionKind::Enter => tracing::info!(
                vehicle = %event.vehicle_id,
                zone = %event.to_zone.as_ref().map(|z| z.as_str()).unwrap_or("-"),
                "vehicle entered zone"
            ),
            TransitionKind::Exit => tracing::info!(
                vehicle = %event.vehicle_id,
                zone = %event.from_zone.as_ref().map(|z| z.as_str()).unwrap_or("-"),
                "vehicle exited zone"
            ),
            TransitionKind::Move => tracing::info!(
                vehicle = %event.vehicle_id,
                from = %event.from_zone.as_ref().map(|z| z.as_str()).unwrap_or("-"),
                to = %event.to_zone.as_ref().map(|z| z.as_str()).unwrap_or("-"),
                "vehicle moved between zones"
            ),
        }
    }
}

/// Orchestrates one ping end to end: resolve the zone, atomically swap
/// the vehicle's state, classify the transition against the replaced
/// state, and notify the sink.
///
/// Constructed once at startup and shared for the process lifetime; the
/// registry is read-only and the store handles its own locking, so all
/// methods take `&self`.
pub struct EventProcessor {
    registry: ZoneRegistry,
    store: VehicleStore,
    sink: Arc<dyn TransitionSink>,
}

impl EventProcessor {
    pub fn new(registry: ZoneRegistry, sink: Arc<dyn TransitionSink>) -> Self {
        Self {
            registry,
            store: VehicleStore::new(),
            sink,
        }
    }

    pub fn with_logging(registry: ZoneRegistry) -> Self {
        Self::new(registry, Arc::new(LogSink))
    }

    pub fn process_ping(
        &self,
        vehicle_id: VehicleId,
        point: Point,
        timestamp: Timestamp,
    ) -> VehicleState {
        let zone_id = self.registry.resolve(point).cloned();
        // Swap-and-return-previous keeps the read-then-write atomic per
        // vehicle; the classifier only ever sees the state that was
        // actually replaced.
        let (previous, state) = self
            .store
            .upsert(vehicle_id.clone(), zone_id.clone(), timestamp);
        let event = classify(&vehicle_id, previous.as_ref(), zone_id.as_ref());
        self.sink.notify(&event);
        state
    }

    pub fn status(&self, vehicle_id: &VehicleId) -> Option<VehicleState> {
        self.store.get(vehicle_id)
    }

    pub fn registry(&self) -> &ZoneRegistry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::sample_zones;
    use std::sync::Mutex;
    use zonewatch_core::{now_utc, ZoneId, ZoneStatus};

    #[derive(Default)]
    struct RecordingSink {
        events: Mutex<Vec<TransitionEvent>>,
    }

    impl TransitionSink for RecordingSink {
        fn notify(&self, event: &TransitionEvent) {
            self.events.lock().unwrap().push(event.clone());
        }
    }

    fn processor_with_recorder() -> (EventProcessor, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        let processor = EventProcessor::new(sample_zones().unwrap(), sink.clone());
        (processor, sink)
    }

    #[test]
    fn test_simulation_scenario() {
        let (processor, sink) = processor_with_recorder();
        let taxi = VehicleId::new("taxi-001");

        // Outside any zone: lat 0.0, lon -0.01.
        let state = processor.process_ping(taxi.clone(), Point::new(-0.01, 0.0), now_utc());
        assert_eq!(state.status, ZoneStatus::Outside);
        assert_eq!(state.zone_id, None);

        // Into downtown.
        let state = processor.process_ping(taxi.clone(), Point::new(0.01, 0.01), now_utc());
        assert_eq!(state.zone_id, Some(ZoneId::new("downtown")));

        // Moving within downtown.
        let state = processor.process_ping(taxi.clone(), Point::new(0.015, 0.015), now_utc());
        assert_eq!(state.zone_id, Some(ZoneId::new("downtown")));

        // Onto the suburbs box corner: boundary-inclusive, and downtown
        // does not reach past 0.02, so suburbs claims it.
        let state = processor.process_ping(taxi.clone(), Point::new(0.03, 0.03), now_utc());
        assert_eq!(state.zone_id, Some(ZoneId::new("suburbs")));
        assert_eq!(state.status, ZoneStatus::Inside);

        let kinds: Vec<TransitionKind> = sink
            .events
            .lock()
            .unwrap()
            .iter()
            .map(|event| event.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                TransitionKind::None,
                TransitionKind::Enter,
                TransitionKind::None,
                TransitionKind::Move,
            ]
        );
    }

    #[test]
    fn test_first_sighting_inside_zone() {
        let (processor, sink) = processor_with_recorder();

        processor.process_ping(VehicleId::new("taxi-002"), Point::new(0.01, 0.01), now_utc());

        let events = sink.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, TransitionKind::FirstSightingEnter);
        assert_eq!(events[0].to_zone, Some(ZoneId::new("downtown")));
    }

    #[test]
    fn test_exit_event_carries_from_zone() {
        let (processor, sink) = processor_with_recorder();
        let taxi = VehicleId::new("taxi-003");

        processor.process_ping(taxi.clone(), Point::new(0.01, 0.01), now_utc());
        processor.process_ping(taxi.clone(), Point::new(-0.01, -0.01), now_utc());

        let events = sink.events.lock().unwrap();
        assert_eq!(events[1].kind, TransitionKind::Exit);
        assert_eq!(events[1].from_zone, Some(ZoneId::new("downtown")));
        assert_eq!(events[1].to_zone, None);
    }

    #[test]
    fn test_status_for_unknown_vehicle_is_absent() {
        let (processor, _) = processor_with_recorder();
        assert!(processor.status(&VehicleId::new("never-pinged")).is_none());
    }

    #[test]
    fn test_concurrent_pings_for_distinct_vehicles() {
        let (processor, _) = processor_with_recorder();

        std::thread::scope(|scope| {
            for worker in 0..8 {
                let processor = &processor;
                scope.spawn(move || {
                    let id = VehicleId::new(format!("taxi-{worker}"));
                    for round in 0..100 {
                        let point = if round % 2 == 0 {
                            Point::new(0.01, 0.01)
                        } else {
                            Point::new(-0.01, -0.01)
                        };
                        let state = processor.process_ping(id.clone(), point, now_utc());
                        assert_eq!(state.vehicle_id, id);
                    }
                });
            }
        });

        for worker in 0..8 {
            let id = VehicleId::new(format!("taxi-{worker}"));
            // Final ping (round 99) was outside.
            let state = processor.status(&id).unwrap();
            assert_eq!(state.status, ZoneStatus::Outside);
            assert_eq!(state.zone_id, None);
        }
    }
}
