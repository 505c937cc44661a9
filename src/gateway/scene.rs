//! Scene data model as seen across the wire
//!
//! Actors are owned by the engine; the gateway only forwards their labels.

use super::error::{GatewayError, GatewayResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque actor label assigned by the engine
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(String);

impl ActorId {
    /// Validate and wrap an actor label.
    pub fn new(id: impl Into<String>) -> GatewayResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(GatewayError::invalid_param("actor_id", "must not be empty"));
        }
        Ok(Self(id))
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Actor classes the engine knows how to spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorKind {
    /// Static mesh (spawned with a default cube)
    StaticMeshActor,
    /// Point light
    PointLight,
    /// Spot light
    SpotLight,
    /// Directional light
    DirectionalLight,
    /// Camera
    CameraActor,
    /// Player start marker
    PlayerStart,
}

impl ActorKind {
    /// Every spawnable kind
    pub const ALL: [ActorKind; 6] = [
        ActorKind::StaticMeshActor,
        ActorKind::PointLight,
        ActorKind::SpotLight,
        ActorKind::DirectionalLight,
        ActorKind::CameraActor,
        ActorKind::PlayerStart,
    ];

    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            ActorKind::StaticMeshActor => "StaticMeshActor",
            ActorKind::PointLight => "PointLight",
            ActorKind::SpotLight => "SpotLight",
            ActorKind::DirectionalLight => "DirectionalLight",
            ActorKind::CameraActor => "CameraActor",
            ActorKind::PlayerStart => "PlayerStart",
        }
    }
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActorKind {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActorKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<_> = ActorKind::ALL.iter().map(ActorKind::as_str).collect();
                GatewayError::invalid_param(
                    "actor_type",
                    format!("unknown actor kind {s:?} (expected one of {})", known.join(", ")),
                )
            })
    }
}

/// World-space vector
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
    /// Z component
    pub z: f64,
}

impl Vec3 {
    /// Build a vector.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Rotation in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rotator {
    /// Pitch
    pub pitch: f64,
    /// Yaw
    pub yaw: f64,
    /// Roll
    pub roll: f64,
}

/// Actor transform as echoed by the engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Location
    pub location: Vec3,
    /// Rotation
    pub rotation: Rotator,
    /// Scale
    pub scale: Vec3,
}

/// One actor in a scene listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneActor {
    /// Actor label
    pub actor_id: ActorId,
    /// Engine class name
    #[serde(rename = "class")]
    pub class_name: String,
    /// Current transform, when reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<Transform>,
}

impl SceneActor {
    /// Case-insensitive substring match against the label or the class name.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.actor_id.as_str().to_lowercase().contains(&query)
            || self.class_name.to_lowercase().contains(&query)
    }
}
