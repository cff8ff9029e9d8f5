//! Validated, read-only registry of every renderable body.

use std::collections::HashMap;

use bevy::prelude::*;
use serde::Deserialize;
use thiserror::Error;

/// Broad category of a body, shown in the info panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    Star,
    #[default]
    Planet,
    Moon,
    Satellite,
}

impl BodyKind {
    pub fn label(self) -> &'static str {
        match self {
            BodyKind::Star => "Star",
            BodyKind::Planet => "Planet",
            BodyKind::Moon => "Moon",
            BodyKind::Satellite => "Satellite",
        }
    }
}

/// A single celestial body.
///
/// Bodies without `orbit_radius` and `parent` stay at `base_position`. Bodies
/// with a `parent` orbit that body's resolved position instead of the origin.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub id: String,
    pub name: String,
    pub kind: BodyKind,
    pub radius: f32,
    pub color: Color,
    pub base_position: Vec3,
    /// Spin rate about the vertical axis, radians per unit of simulation time.
    pub rotation_speed: f32,
    pub orbit_radius: Option<f32>,
    pub orbit_speed: Option<f32>,
    pub parent: Option<String>,
    pub emissive: bool,
    pub has_atmosphere: bool,
    pub has_flares: bool,
    /// Asset path of a surface texture
    pub texture: Option<String>,
    pub description: String,
    pub facts: Vec<String>,
}

impl Body {
    /// True for the stationary center of the system.
    pub fn is_center(&self) -> bool {
        self.orbit_radius.is_none() && self.parent.is_none()
    }
}

/// Reasons a set of bodies cannot form a registry
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("registry contains no bodies")]
    Empty,
    #[error("duplicate body id `{0}`")]
    DuplicateId(String),
    #[error("body `{id}` orbits unknown parent `{parent}`")]
    UnknownParent { id: String, parent: String },
    #[error("body `{id}` orbits `{parent}`, which itself orbits another body")]
    NestedParent { id: String, parent: String },
    #[error("body `{0}` lists itself as its parent")]
    SelfParent(String),
    #[error("body `{0}` has a parent but no orbit radius")]
    MissingOrbitRadius(String),
    #[error("bodies `{first}` and `{second}` both lack an orbit")]
    MultipleCenters { first: String, second: String },
    #[error("body `{id}` has invalid radius {radius}")]
    InvalidRadius { id: String, radius: f32 },
    #[error("body `{id}` has invalid orbit radius {radius}")]
    InvalidOrbitRadius { id: String, radius: f32 },
    #[error("body `{id}` has invalid color `{color}`")]
    InvalidColor { id: String, color: String },
}

/// Registry resource holding every body of the loaded system.
///
/// Immutable once built: the simulation only ever reads it.
#[derive(Resource, Clone, Debug)]
pub struct BodyRegistry {
    name: String,
    description: String,
    bodies: Vec<Body>,
    index: HashMap<String, usize>,
}

impl BodyRegistry {
    /// Validate `bodies` and build the registry, preserving their order.
    pub fn new(bodies: Vec<Body>) -> Result<Self, RegistryError> {
        let index = validate(&bodies)?;
        Ok(Self {
            name: String::new(),
            description: String::new(),
            bodies,
            index,
        })
    }

    pub fn with_system_info(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.name = name.into();
        self.description = description.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn get(&self, id: &str) -> Option<&Body> {
        self.index.get(id).map(|&i| &self.bodies[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// The stationary body at the center, if the system has one
    pub fn center(&self) -> Option<&Body> {
        self.bodies.iter().find(|b| b.is_center())
    }
}

fn validate(bodies: &[Body]) -> Result<HashMap<String, usize>, RegistryError> {
    if bodies.is_empty() {
        return Err(RegistryError::Empty);
    }

    let mut index = HashMap::with_capacity(bodies.len());
    for (i, body) in bodies.iter().enumerate() {
        if !(body.radius.is_finite() && body.radius > 0.0) {
            return Err(RegistryError::InvalidRadius {
                id: body.id.clone(),
                radius: body.radius,
            });
        }
        if let Some(radius) = body.orbit_radius
            && !(radius.is_finite() && radius >= 0.0)
        {
            return Err(RegistryError::InvalidOrbitRadius {
                id: body.id.clone(),
                radius,
            });
        }
        if index.insert(body.id.clone(), i).is_some() {
            return Err(RegistryError::DuplicateId(body.id.clone()));
        }
    }

    let mut center: Option<&str> = None;
    for body in bodies {
        match (&body.parent, body.orbit_radius) {
            (None, None) => {
                if let Some(first) = center {
                    return Err(RegistryError::MultipleCenters {
                        first: first.to_string(),
                        second: body.id.clone(),
                    });
                }
                center = Some(&body.id);
            }
            (Some(_), None) => return Err(RegistryError::MissingOrbitRadius(body.id.clone())),
            _ => {}
        }

        let Some(parent_id) = &body.parent else {
            continue;
        };
        if parent_id == &body.id {
            return Err(RegistryError::SelfParent(body.id.clone()));
        }
        let Some(&parent_index) = index.get(parent_id) else {
            return Err(RegistryError::UnknownParent {
                id: body.id.clone(),
                parent: parent_id.clone(),
            });
        };
        // Only one level of nesting: a parent must orbit the origin or stand still.
        if bodies[parent_index].parent.is_some() {
            return Err(RegistryError::NestedParent {
                id: body.id.clone(),
                parent: parent_id.clone(),
            });
        }
    }

    Ok(index)
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_registry_lookup_preserves_order() {
        let registry = sun_earth_moon();
        assert_eq!(registry.len(), 3);
        let ids: Vec<_> = registry.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["sun", "earth", "moon"]);
        assert_eq!(registry.get("moon").and_then(|b| b.parent.as_deref()), Some("earth"));
        assert!(registry.get("pluto").is_none());
        assert_eq!(registry.center().map(|b| b.id.as_str()), Some("sun"));
    }

    #[test]
    fn test_unknown_parent_rejected() {
        let err =
            BodyRegistry::new(vec![body("sun"), child("moon", "earth", 4.0, 0.05)]).unwrap_err();
        assert_eq!(
            err,
            RegistryError::UnknownParent {
                id: "moon".into(),
                parent: "earth".into()
            }
        );
    }

    #[test]
    fn test_nested_parent_rejected() {
        let bodies = vec![
            body("sun"),
            orbiting("earth", 30.0, 0.01),
            child("moon", "earth", 4.0, 0.05),
            child("probe", "moon", 0.5, 0.2),
        ];
        assert!(matches!(
            BodyRegistry::new(bodies),
            Err(RegistryError::NestedParent { .. })
        ));
    }

    #[test]
    fn test_self_parent_rejected() {
        let bodies = vec![body("sun"), child("loop", "loop", 1.0, 0.1)];
        assert_eq!(
            BodyRegistry::new(bodies).unwrap_err(),
            RegistryError::SelfParent("loop".into())
        );
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let bodies = vec![
            body("sun"),
            orbiting("earth", 30.0, 0.01),
            orbiting("earth", 31.0, 0.01),
        ];
        assert_eq!(
            BodyRegistry::new(bodies).unwrap_err(),
            RegistryError::DuplicateId("earth".into())
        );
    }

    #[test]
    fn test_second_center_rejected() {
        let err = BodyRegistry::new(vec![body("sun"), body("rogue")]).unwrap_err();
        assert!(matches!(err, RegistryError::MultipleCenters { .. }));
    }

    #[test]
    fn test_child_requires_orbit_radius() {
        let mut moon = child("moon", "earth", 4.0, 0.05);
        moon.orbit_radius = None;
        let err = BodyRegistry::new(vec![body("sun"), orbiting("earth", 30.0, 0.01), moon])
            .unwrap_err();
        assert_eq!(err, RegistryError::MissingOrbitRadius("moon".into()));
    }

    #[test]
    fn test_invalid_radius_rejected() {
        let mut sun = body("sun");
        sun.radius = 0.0;
        assert!(matches!(
            BodyRegistry::new(vec![sun]),
            Err(RegistryError::InvalidRadius { .. })
        ));
        assert_eq!(BodyRegistry::new(Vec::new()).unwrap_err(), RegistryError::Empty);
    }

    #[test]
    fn test_system_without_center_is_valid() {
        let registry =
            BodyRegistry::new(vec![orbiting("a", 10.0, 0.1), orbiting("b", 20.0, 0.05)]).unwrap();
        assert!(registry.center().is_none());
    }

    #[test]
    fn test_invalid_orbit_radius_rejected() {
        let err = BodyRegistry::new(vec![body("sun"), orbiting("earth", -30.0, 0.01)]).unwrap_err();
        assert_eq!(
            err,
            RegistryError::InvalidOrbitRadius {
                id: "earth".into(),
                radius: -30.0
            }
        );

        let drifting = orbiting("comet", f32::NAN, 0.01);
        assert!(matches!(
            BodyRegistry::new(vec![body("sun"), drifting]),
            Err(RegistryError::InvalidOrbitRadius { .. })
        ));

        // Zero is a valid radius: the body sits on the orbit center.
        assert!(BodyRegistry::new(vec![body("sun"), orbiting("dot", 0.0, 0.01)]).is_ok());
    }
}
