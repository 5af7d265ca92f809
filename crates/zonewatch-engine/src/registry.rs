use zonewatch_core::{ErrorCode, ZoneId, ZonewatchError, ZonewatchResult};
use zonewatch_geo::{BoundingBox, Point, ZoneShape};

/// A named region backed by one geometric shape. Immutable once
/// registered.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    pub id: ZoneId,
    pub shape: ZoneShape,
}

/// Ordered collection of zones. Registration order is fixed at
/// construction and doubles as the containment tie-break: `resolve`
/// returns the first registered zone that contains the point. Read-only
/// after startup.
#[derive(Debug, Default)]
pub struct ZoneRegistry {
    zones: Vec<Zone>,
}

impl ZoneRegistry {
    pub fn new() -> Self {
        Self { zones: Vec::new() }
    }

    pub fn register(&mut self, zone: Zone) -> ZonewatchResult<()> {
        if self.zones.iter().any(|existing| existing.id == zone.id) {
            return Err(ZonewatchError::new(
                ErrorCode::DuplicateZone,
                format!("zone '{}' is already registered", zone.id),
            ));
        }
        zone.shape
            .validate()
            .map_err(|message| ZonewatchError::new(ErrorCode::InvalidInput, message))?;
        self.zones.push(zone);
        Ok(())
    }

    /// First registered zone containing the point, if any. Zones are
    /// assumed non-overlapping; when that assumption is violated the
    /// first-registered zone wins deterministically.
    pub fn resolve(&self, point: Point) -> Option<&ZoneId> {
        self.zones
            .iter()
            .find(|zone| zone.shape.contains(point))
            .map(|zone| &zone.id)
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

/// Built-in demo zone set. Zone configuration loading is out of scope,
/// so the service ships with the same three zones the simulator drives
/// through.
pub fn sample_zones() -> ZonewatchResult<ZoneRegistry> {
    let mut registry = ZoneRegistry::new();
    registry.register(Zone {
        id: ZoneId::new("downtown"),
        shape: ZoneShape::Polygon {
            vertices: vec![
                Point::new(0.0, 0.0),
                Point::new(0.0, 0.02),
                Point::new(0.02, 0.02),
                Point::new(0.02, 0.0),
            ],
        },
    })?;
    registry.register(Zone {
        id: ZoneId::new("airport"),
        shape: ZoneShape::Circle {
            center: Point::new(0.05, 0.05),
            radius: 0.01,
        },
    })?;
    registry.register(Zone {
        id: ZoneId::new("suburbs"),
        shape: ZoneShape::Box {
            bounds: BoundingBox {
                north: 0.04,
                south: 0.03,
                east: 0.06,
                west: 0.03,
            },
        },
    })?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_sample_zones() {
        let registry = sample_zones().unwrap();

        assert_eq!(
            registry.resolve(Point::new(0.01, 0.01)),
            Some(&ZoneId::new("downtown"))
        );
        assert_eq!(
            registry.resolve(Point::new(0.05, 0.055)),
            Some(&ZoneId::new("airport"))
        );
        assert_eq!(
            registry.resolve(Point::new(0.04, 0.035)),
            Some(&ZoneId::new("suburbs"))
        );
        assert_eq!(registry.resolve(Point::new(-0.01, 0.0)), None);
    }

    #[test]
    fn test_resolve_boundary_points() {
        let registry = sample_zones().unwrap();

        // Downtown polygon edge
        assert_eq!(
            registry.resolve(Point::new(0.0, 0.01)),
            Some(&ZoneId::new("downtown"))
        );
        // Airport circle rim
        assert_eq!(
            registry.resolve(Point::new(0.06, 0.05)),
            Some(&ZoneId::new("airport"))
        );
        // Suburbs box corner
        assert_eq!(
            registry.resolve(Point::new(0.03, 0.03)),
            Some(&ZoneId::new("suburbs"))
        );
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut registry = ZoneRegistry::new();
        let zone = Zone {
            id: ZoneId::new("downtown"),
            shape: ZoneShape::Circle {
                center: Point::new(0.0, 0.0),
                radius: 1.0,
            },
        };
        registry.register(zone.clone()).unwrap();

        let err = registry.register(zone).unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateZone);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_invalid_shape_rejected() {
        let mut registry = ZoneRegistry::new();
        let err = registry
            .register(Zone {
                id: ZoneId::new("broken"),
                shape: ZoneShape::Polygon {
                    vertices: vec![Point::new(0.0, 0.0)],
                },
            })
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_first_registered_wins_on_overlap() {
        let mut registry = ZoneRegistry::new();
        let bounds = BoundingBox {
            north: 1.0,
            south: 0.0,
            east: 1.0,
            west: 0.0,
        };
        registry
            .register(Zone {
                id: ZoneId::new("first"),
                shape: ZoneShape::Box { bounds },
            })
            .unwrap();
        registry
            .register(Zone {
                id: ZoneId::new("second"),
                shape: ZoneShape::Box { bounds },
            })
            .unwrap();

        assert_eq!(
            registry.resolve(Point::new(0.5, 0.5)),
            Some(&ZoneId::new("first"))
        );
    }
}
