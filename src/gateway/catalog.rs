//! Command catalog: the closed set of scene-editing operations.
//!
//! Each operation has a payload type carrying its typed inputs and a result
//! type describing what the engine sends back. [`Operation::into_command`]
//! validates the payload and applies the partial-update filter; nothing that
//! fails validation is ever put on the wire.

use super::codec::Command;
use super::error::{GatewayError, GatewayResult};
use super::partial::{Field, ParamsBuilder};
use super::scene::{ActorId, ActorKind, SceneActor, Transform, Vec3};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Root under which the engine places imported and generated assets
pub const GENERATED_ASSET_ROOT: &str = "/Game/Generated";

/// Names of every catalog operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    /// Spawn a new actor
    SpawnActor,
    /// Snapshot every actor in the scene
    GetSceneInfo,
    /// Destroy an actor
    DeleteActor,
    /// Partially update an actor transform
    SetTransform,
    /// Import a file on disk as an engine asset
    ImportAsset,
    /// Build a material from a texture and apply it
    ApplyMaterial,
    /// Find actors by label or class substring
    SearchActors,
    /// Show or hide an actor
    SetVisibility,
    /// Scale a light's brightness
    SetLightIntensity,
}

impl OperationKind {
    /// Every operation, in catalog order
    pub const ALL: [OperationKind; 9] = [
        OperationKind::SpawnActor,
        OperationKind::GetSceneInfo,
        OperationKind::DeleteActor,
        OperationKind::SetTransform,
        OperationKind::ImportAsset,
        OperationKind::ApplyMaterial,
        OperationKind::SearchActors,
        OperationKind::SetVisibility,
        OperationKind::SetLightIntensity,
    ];

    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::SpawnActor => "spawn_actor",
            OperationKind::GetSceneInfo => "get_scene_info",
            OperationKind::DeleteActor => "delete_actor",
            OperationKind::SetTransform => "set_transform",
            OperationKind::ImportAsset => "import_asset",
            OperationKind::ApplyMaterial => "apply_material",
            OperationKind::SearchActors => "search_actors",
            OperationKind::SetVisibility => "set_visibility",
            OperationKind::SetLightIntensity => "set_light_intensity",
        }
    }

    /// Human-readable description used in tool listings
    pub fn description(&self) -> &'static str {
        match self {
            OperationKind::SpawnActor => {
                "Spawn a new actor in the scene at a world-space position. Returns the new actor's ID."
            }
            OperationKind::GetSceneInfo => {
                "List every actor in the scene with its ID, class and transform."
            }
            OperationKind::DeleteActor => "Delete an actor from the scene by ID.",
            OperationKind::SetTransform => {
                "Set position, rotation (degrees) and/or scale of an actor. Omitted fields keep their current values."
            }
            OperationKind::ImportAsset => {
                "Import a file on disk (e.g. a generated image) as an asset under /Game/Generated/."
            }
            OperationKind::ApplyMaterial => {
                "Create a material from a texture asset and apply it to an actor's mesh."
            }
            OperationKind::SearchActors => {
                "Find actors whose ID or class contains the query (case-insensitive). Use to resolve references like \"the cube\"."
            }
            OperationKind::SetVisibility => "Show or hide an actor.",
            OperationKind::SetLightIntensity => {
                "Set the brightness of a light actor. 1.0 is the default intensity, 0.5 half, 5.0 five times."
            }
        }
    }

    /// JSON Schema describing the operation's arguments
    pub fn parameters_schema(&self) -> Value {
        let actor_id = json!({"type": "string", "description": "Actor ID (label)"});
        let number = |description: &str| json!({"type": "number", "description": description});

        match self {
            OperationKind::SpawnActor => {
                let kinds: Vec<_> = ActorKind::ALL.iter().map(ActorKind::as_str).collect();
                json!({
                    "type": "object",
                    "properties": {
                        "actor_type": {"type": "string", "enum": kinds},
                        "x": number("X position in world space"),
                        "y": number("Y position in world space"),
                        "z": number("Z position in world space"),
                    },
                    "required": ["actor_type", "x", "y", "z"],
                })
            }
            OperationKind::GetSceneInfo => json!({"type": "object", "properties": {}}),
            OperationKind::DeleteActor => json!({
                "type": "object",
                "properties": {"actor_id": actor_id},
                "required": ["actor_id"],
            }),
            OperationKind::SetTransform => {
                let mut properties = Map::new();
                properties.insert("actor_id".into(), actor_id);
                for name in TransformDelta::FIELD_NAMES {
                    properties.insert(name.into(), number(name));
                }
                json!({
                    "type": "object",
                    "properties": properties,
                    "required": ["actor_id"],
                })
            }
            OperationKind::ImportAsset => json!({
                "type": "object",
                "properties": {
                    "file_path": {"type": "string", "description": "Absolute path of the file to import"},
                    "asset_name": {"type": "string", "description": "Asset name under /Game/Generated/"},
                },
                "required": ["file_path", "asset_name"],
            }),
            OperationKind::ApplyMaterial => json!({
                "type": "object",
                "properties": {
                    "actor_id": actor_id,
                    "texture_asset_path": {"type": "string", "description": "Texture asset path, e.g. /Game/Generated/brick"},
                },
                "required": ["actor_id", "texture_asset_path"],
            }),
            OperationKind::SearchActors => json!({
                "type": "object",
                "properties": {
                    "query": {"type": "string", "minLength": 1, "description": "Substring to match against actor IDs and classes"},
                },
                "required": ["query"],
            }),
            OperationKind::SetVisibility => json!({
                "type": "object",
                "properties": {
                    "actor_id": actor_id,
                    "visible": {"type": "boolean"},
                },
                "required": ["actor_id", "visible"],
            }),
            OperationKind::SetLightIntensity => json!({
                "type": "object",
                "properties": {
                    "actor_id": actor_id,
                    "intensity": {"type": "number", "minimum": 0, "description": "Brightness scale (1.0 = default)"},
                },
                "required": ["actor_id", "intensity"],
            }),
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationKind {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OperationKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| GatewayError::Validation(format!("unknown operation {s:?}")))
    }
}

/// Payload for `spawn_actor`
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnActor {
    /// Class to spawn
    pub kind: ActorKind,
    /// World-space position
    pub position: Vec3,
}

/// Payload for `get_scene_info`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GetSceneInfo;

/// Payload for `delete_actor`
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteActor {
    /// Actor to destroy
    pub actor_id: ActorId,
}

/// Sparse transform change; absent fields are left untouched by the engine
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransformDelta {
    /// Position X
    pub x: Field<f64>,
    /// Position Y
    pub y: Field<f64>,
    /// Position Z
    pub z: Field<f64>,
    /// Yaw in degrees
    pub yaw: Field<f64>,
    /// Pitch in degrees
    pub pitch: Field<f64>,
    /// Roll in degrees
    pub roll: Field<f64>,
    /// Scale X
    pub scale_x: Field<f64>,
    /// Scale Y
    pub scale_y: Field<f64>,
    /// Scale Z
    pub scale_z: Field<f64>,
}

impl TransformDelta {
    /// Wire names in field order
    pub const FIELD_NAMES: [&'static str; 9] = [
        "x", "y", "z", "yaw", "pitch", "roll", "scale_x", "scale_y", "scale_z",
    ];

    /// (wire name, value) for every field.
    pub fn entries(&self) -> [(&'static str, Field<f64>); 9] {
        [
            ("x", self.x),
            ("y", self.y),
            ("z", self.z),
            ("yaw", self.yaw),
            ("pitch", self.pitch),
            ("roll", self.roll),
            ("scale_x", self.scale_x),
            ("scale_y", self.scale_y),
            ("scale_z", self.scale_z),
        ]
    }

    /// Set a field by wire name. Returns false for unknown names.
    pub fn set(&mut self, name: &str, value: Field<f64>) -> bool {
        let slot = match name {
            "x" => &mut self.x,
            "y" => &mut self.y,
            "z" => &mut self.z,
            "yaw" => &mut self.yaw,
            "pitch" => &mut self.pitch,
            "roll" => &mut self.roll,
            "scale_x" => &mut self.scale_x,
            "scale_y" => &mut self.scale_y,
            "scale_z" => &mut self.scale_z,
            _ => return false,
        };
        *slot = value;
        true
    }
}

/// Payload for `set_transform`
#[derive(Debug, Clone, PartialEq)]
pub struct SetTransform {
    /// Actor to move
    pub actor_id: ActorId,
    /// Fields to change
    pub delta: TransformDelta,
}

/// Payload for `import_asset`
#[derive(Debug, Clone, PartialEq)]
pub struct ImportAsset {
    /// Absolute path of the source file. Existence is not checked.
    pub file_path: PathBuf,
    /// Asset name under [`GENERATED_ASSET_ROOT`]
    pub asset_name: String,
}

/// Payload for `apply_material`
#[derive(Debug, Clone, PartialEq)]
pub struct ApplyMaterial {
    /// Target actor
    pub actor_id: ActorId,
    /// Texture asset path
    pub texture_asset_path: String,
}

/// Payload for `search_actors`
#[derive(Debug, Clone, PartialEq)]
pub struct SearchActors {
    /// Substring to look for; must not be blank
    pub query: String,
}

/// Payload for `set_visibility`
#[derive(Debug, Clone, PartialEq)]
pub struct SetVisibility {
    /// Target actor
    pub actor_id: ActorId,
    /// New visibility
    pub visible: bool,
}

/// Payload for `set_light_intensity`
#[derive(Debug, Clone, PartialEq)]
pub struct SetLightIntensity {
    /// Target light actor
    pub actor_id: ActorId,
    /// Brightness scale, 1.0 = default
    pub intensity: f64,
}

/// A fully typed catalog invocation
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// `spawn_actor`
    SpawnActor(SpawnActor),
    /// `get_scene_info`
    GetSceneInfo(GetSceneInfo),
    /// `delete_actor`
    DeleteActor(DeleteActor),
    /// `set_transform`
    SetTransform(SetTransform),
    /// `import_asset`
    ImportAsset(ImportAsset),
    /// `apply_material`
    ApplyMaterial(ApplyMaterial),
    /// `search_actors`
    SearchActors(SearchActors),
    /// `set_visibility`
    SetVisibility(SetVisibility),
    /// `set_light_intensity`
    SetLightIntensity(SetLightIntensity),
}

impl Operation {
    /// Which catalog entry this is
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::SpawnActor(_) => OperationKind::SpawnActor,
            Operation::GetSceneInfo(_) => OperationKind::GetSceneInfo,
            Operation::DeleteActor(_) => OperationKind::DeleteActor,
            Operation::SetTransform(_) => OperationKind::SetTransform,
            Operation::ImportAsset(_) => OperationKind::ImportAsset,
            Operation::ApplyMaterial(_) => OperationKind::ApplyMaterial,
            Operation::SearchActors(_) => OperationKind::SearchActors,
            Operation::SetVisibility(_) => OperationKind::SetVisibility,
            Operation::SetLightIntensity(_) => OperationKind::SetLightIntensity,
        }
    }

    /// Validate the payload and build the wire command.
    pub fn into_command(self) -> GatewayResult<Command> {
        let kind = self.kind();
        let params = match self {
            Operation::SpawnActor(SpawnActor {
                kind: actor_kind,
                position,
            }) => ParamsBuilder::new()
                .required("actor_type", actor_kind.as_str())
                .required("x", finite("x", position.x)?)
                .required("y", finite("y", position.y)?)
                .required("z", finite("z", position.z)?)
                .build(),
            Operation::GetSceneInfo(GetSceneInfo) => Map::new(),
            Operation::DeleteActor(DeleteActor { actor_id }) => ParamsBuilder::new()
                .required("actor_id", actor_id.as_str())
                .build(),
            Operation::SetTransform(SetTransform { actor_id, delta }) => {
                let mut builder = ParamsBuilder::new().required("actor_id", actor_id.as_str());
                for (name, field) in delta.entries() {
                    if let Field::Present(value) = field {
                        finite(name, value)?;
                    }
                    builder = builder.optional(name, field);
                }
                builder.build()
            }
            Operation::ImportAsset(ImportAsset {
                file_path,
                asset_name,
            }) => {
                let file_path = absolute_path(&file_path)?;
                ParamsBuilder::new()
                    .required("file_path", file_path)
                    .required("asset_name", asset_name_param(&asset_name)?)
                    .build()
            }
            Operation::ApplyMaterial(ApplyMaterial {
                actor_id,
                texture_asset_path,
            }) => ParamsBuilder::new()
                .required("actor_id", actor_id.as_str())
                .required(
                    "texture_asset_path",
                    non_blank("texture_asset_path", texture_asset_path)?,
                )
                .build(),
            Operation::SearchActors(SearchActors { query }) => ParamsBuilder::new()
                .required("query", search_query(query)?)
                .build(),
            Operation::SetVisibility(SetVisibility { actor_id, visible }) => ParamsBuilder::new()
                .required("actor_id", actor_id.as_str())
                .required("visible", visible)
                .build(),
            Operation::SetLightIntensity(SetLightIntensity {
                actor_id,
                intensity,
            }) => {
                let intensity = finite("intensity", intensity)?;
                if intensity < 0.0 {
                    return Err(GatewayError::invalid_param(
                        "intensity",
                        "must not be negative",
                    ));
                }
                ParamsBuilder::new()
                    .required("actor_id", actor_id.as_str())
                    .required("intensity", intensity)
                    .build()
            }
        };

        Ok(Command::new(kind, params))
    }

    /// Parse JSON tool arguments into a typed operation.
    ///
    /// `null` or missing `args` count as an empty object. Optional fields given
    /// as `null` are treated as not supplied. Unknown keys are rejected.
    pub fn from_arguments(kind: OperationKind, args: &Value) -> GatewayResult<Operation> {
        let empty = Map::new();
        let args = match args {
            Value::Null => &empty,
            Value::Object(map) => map,
            other => {
                return Err(GatewayError::Validation(format!(
                    "arguments must be an object, got {other}"
                )));
            }
        };
        let reader = Args(args);

        let operation = match kind {
            OperationKind::SpawnActor => {
                reader.only(&["actor_type", "x", "y", "z"])?;
                Operation::SpawnActor(SpawnActor {
                    kind: reader.string("actor_type")?.parse()?,
                    position: Vec3::new(reader.number("x")?, reader.number("y")?, reader.number("z")?),
                })
            }
            OperationKind::GetSceneInfo => {
                reader.only(&[])?;
                Operation::GetSceneInfo(GetSceneInfo)
            }
            OperationKind::DeleteActor => {
                reader.only(&["actor_id"])?;
                Operation::DeleteActor(DeleteActor {
                    actor_id: reader.actor_id()?,
                })
            }
            OperationKind::SetTransform => {
                let mut allowed = vec!["actor_id"];
                allowed.extend(TransformDelta::FIELD_NAMES);
                reader.only(&allowed)?;
                let mut delta = TransformDelta::default();
                for name in TransformDelta::FIELD_NAMES {
                    delta.set(name, reader.optional_number(name)?);
                }
                Operation::SetTransform(SetTransform {
                    actor_id: reader.actor_id()?,
                    delta,
                })
            }
            OperationKind::ImportAsset => {
                reader.only(&["file_path", "asset_name"])?;
                Operation::ImportAsset(ImportAsset {
                    file_path: PathBuf::from(reader.string("file_path")?),
                    asset_name: reader.string("asset_name")?.to_string(),
                })
            }
            OperationKind::ApplyMaterial => {
                reader.only(&["actor_id", "texture_asset_path"])?;
                Operation::ApplyMaterial(ApplyMaterial {
                    actor_id: reader.actor_id()?,
                    texture_asset_path: reader.string("texture_asset_path")?.to_string(),
                })
            }
            OperationKind::SearchActors => {
                reader.only(&["query"])?;
                Operation::SearchActors(SearchActors {
                    query: reader.string("query")?.to_string(),
                })
            }
            OperationKind::SetVisibility => {
                reader.only(&["actor_id", "visible"])?;
                Operation::SetVisibility(SetVisibility {
                    actor_id: reader.actor_id()?,
                    visible: reader.boolean("visible")?,
                })
            }
            OperationKind::SetLightIntensity => {
                reader.only(&["actor_id", "intensity"])?;
                Operation::SetLightIntensity(SetLightIntensity {
                    actor_id: reader.actor_id()?,
                    intensity: reader.number("intensity")?,
                })
            }
        };

        Ok(operation)
    }
}

/// Ties a payload type to its catalog entry and result shape.
pub trait CatalogEntry: Into<Operation> {
    /// Operation name
    const KIND: OperationKind;
    /// Typed reply fields
    type Output: DeserializeOwned;
}

macro_rules! catalog_entry {
    ($payload:ident => $output:ty) => {
        impl From<$payload> for Operation {
            fn from(payload: $payload) -> Self {
                Operation::$payload(payload)
            }
        }

        impl CatalogEntry for $payload {
            const KIND: OperationKind = OperationKind::$payload;
            type Output = $output;
        }
    };
}

catalog_entry!(SpawnActor => SpawnedActor);
catalog_entry!(GetSceneInfo => SceneInfo);
catalog_entry!(DeleteActor => DeletedActor);
catalog_entry!(SetTransform => TransformUpdate);
catalog_entry!(ImportAsset => ImportedAsset);
catalog_entry!(ApplyMaterial => AppliedMaterial);
catalog_entry!(SearchActors => SearchResult);
catalog_entry!(SetVisibility => VisibilityUpdate);
catalog_entry!(SetLightIntensity => LightIntensityUpdate);

/// Result of `spawn_actor`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSpawnedActor")]
pub struct SpawnedActor {
    /// Identifier assigned by the engine
    pub actor_id: ActorId,
    /// Echoed actor kind
    pub actor_type: String,
    /// Echoed position
    pub position: Vec3,
    /// Full transform, when the engine reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<Transform>,
}

#[derive(Deserialize)]
struct RawSpawnedActor {
    actor_id: ActorId,
    actor_type: String,
    #[serde(default)]
    position: Option<Vec3>,
    #[serde(default)]
    transform: Option<Transform>,
}

impl TryFrom<RawSpawnedActor> for SpawnedActor {
    type Error = String;

    fn try_from(raw: RawSpawnedActor) -> Result<Self, Self::Error> {
        let position = raw
            .position
            .or_else(|| raw.transform.map(|t| t.location))
            .ok_or_else(|| "missing field `position`".to_string())?;
        Ok(SpawnedActor {
            actor_id: raw.actor_id,
            actor_type: raw.actor_type,
            position,
            transform: raw.transform,
        })
    }
}

/// Result of `get_scene_info`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneInfo {
    /// Every actor in the scene
    pub actors: Vec<SceneActor>,
}

/// Result of `delete_actor`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletedActor {
    /// Identifier of the destroyed actor
    pub actor_id: ActorId,
}

/// Result of `set_transform`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformUpdate {
    /// Moved actor
    pub actor_id: ActorId,
    /// Transform after the update
    pub transform: Transform,
}

/// Result of `import_asset`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportedAsset {
    /// Engine asset path, under [`GENERATED_ASSET_ROOT`]
    pub asset_path: String,
}

/// Result of `apply_material`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedMaterial {
    /// Actor the material went onto
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor_id: Option<ActorId>,
    /// Path of the created material
    pub material_path: String,
}

/// Result of `search_actors`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Matching actors; empty when nothing matched
    #[serde(alias = "matches")]
    pub actors: Vec<SceneActor>,
}

/// Result of `set_visibility`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibilityUpdate {
    /// Target actor
    pub actor_id: ActorId,
    /// Visibility after the update
    pub visible: bool,
}

/// Result of `set_light_intensity`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightIntensityUpdate {
    /// Target light
    pub actor_id: ActorId,
    /// Intensity after the update
    pub intensity: f64,
}

fn finite(name: &str, value: f64) -> GatewayResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GatewayError::invalid_param(name, "must be a finite number"))
    }
}

fn non_blank(name: &str, value: String) -> GatewayResult<String> {
    if value.trim().is_empty() {
        Err(GatewayError::invalid_param(name, "must not be empty"))
    } else {
        Ok(value)
    }
}

fn absolute_path(path: &Path) -> GatewayResult<String> {
    if !path.is_absolute() {
        return Err(GatewayError::invalid_param(
            "file_path",
            format!("must be an absolute path, got {}", path.display()),
        ));
    }
    path.to_str()
        .map(ToOwned::to_owned)
        .ok_or_else(|| GatewayError::invalid_param("file_path", "must be valid UTF-8"))
}

fn asset_name_param(name: &str) -> GatewayResult<String> {
    let name = non_blank("asset_name", name.to_string())?;
    if name.contains(['/', '\\']) {
        return Err(GatewayError::invalid_param(
            "asset_name",
            "must not contain path separators",
        ));
    }
    Ok(name)
}

// Blank queries are rejected rather than treated as "match everything";
// get_scene_info is the way to list all actors.
fn search_query(query: String) -> GatewayResult<String> {
    if query.trim().is_empty() {
        return Err(GatewayError::invalid_param(
            "query",
            "must not be empty (use get_scene_info to list every actor)",
        ));
    }
    Ok(query)
}

struct Args<'a>(&'a Map<String, Value>);

impl<'a> Args<'a> {
    fn only(&self, allowed: &[&str]) -> GatewayResult<()> {
        match self.0.keys().find(|key| !allowed.contains(&key.as_str())) {
            Some(key) => Err(GatewayError::invalid_param(key, "unexpected parameter")),
            None => Ok(()),
        }
    }

    fn present(&self, name: &str) -> Option<&'a Value> {
        self.0.get(name).filter(|value| !value.is_null())
    }

    fn required(&self, name: &str) -> GatewayResult<&'a Value> {
        self.present(name)
            .ok_or_else(|| GatewayError::invalid_param(name, "missing required parameter"))
    }

    fn string(&self, name: &str) -> GatewayResult<&'a str> {
        self.required(name)?
            .as_str()
            .ok_or_else(|| GatewayError::invalid_param(name, "must be a string"))
    }

    fn number(&self, name: &str) -> GatewayResult<f64> {
        self.required(name)?
            .as_f64()
            .ok_or_else(|| GatewayError::invalid_param(name, "must be a number"))
    }

    fn optional_number(&self, name: &str) -> GatewayResult<Field<f64>> {
        match self.present(name) {
            None => Ok(Field::Absent),
            Some(value) => value
                .as_f64()
                .map(Field::Present)
                .ok_or_else(|| GatewayError::invalid_param(name, "must be a number")),
        }
    }

    fn boolean(&self, name: &str) -> GatewayResult<bool> {
        self.required(name)?
            .as_bool()
            .ok_or_else(|| GatewayError::invalid_param(name, "must be a boolean"))
    }

    fn actor_id(&self) -> GatewayResult<ActorId> {
        ActorId::new(self.string("actor_id")?)
    }
}
