//! Command gateway to the scene-editing engine
//!
//! A [`Gateway`] turns catalog operations into single request/response
//! exchanges with the engine. It holds no mutable state: every call encodes
//! its own command, runs its own transient connection, and decodes its own
//! reply, so calls can run concurrently without coordination.

use std::sync::Arc;
use std::time::Duration;

pub mod catalog;
pub mod codec;
pub mod config;
pub mod error;
pub mod partial;
pub mod scene;
pub mod transport;

pub use catalog::{CatalogEntry, Operation, OperationKind, TransformDelta};
pub use codec::{Command, Reply};
pub use config::GatewayConfig;
pub use error::{ConfigError, GatewayError, GatewayResult};
pub use partial::Field;
pub use scene::{ActorId, ActorKind, SceneActor, Transform, Vec3};
pub use transport::{TcpTransport, Transport};

use catalog::{
    AppliedMaterial, ApplyMaterial, DeleteActor, DeletedActor, GetSceneInfo, ImportAsset,
    ImportedAsset, LightIntensityUpdate, SceneInfo, SearchActors, SearchResult, SetLightIntensity,
    SetTransform, SetVisibility, SpawnActor, SpawnedActor, TransformUpdate, VisibilityUpdate,
};

/// Stateless client for the engine's command protocol
#[derive(Clone)]
pub struct Gateway {
    transport: Arc<dyn Transport>,
    timeout: Duration,
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl Gateway {
    /// Create a TCP gateway from configuration.
    pub fn new(config: &GatewayConfig) -> Self {
        Self::with_transport(TcpTransport::new(config.address()), config.timeout())
    }

    /// Create a gateway over an arbitrary transport.
    pub fn with_transport<T>(transport: T, timeout: Duration) -> Self
    where
        T: Transport + 'static,
    {
        Self {
            transport: Arc::new(transport),
            timeout,
        }
    }

    /// Default per-call timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run an operation with the default timeout and return the raw reply.
    pub async fn execute(&self, operation: Operation) -> GatewayResult<Reply> {
        self.execute_with_timeout(operation, self.timeout).await
    }

    /// Run an operation with an explicit timeout and return the raw reply.
    ///
    /// Fails with `EngineRejected` when the engine reports `success: false`.
    pub async fn execute_with_timeout(
        &self,
        operation: Operation,
        timeout: Duration,
    ) -> GatewayResult<Reply> {
        let kind = operation.kind();
        let result = self.round_trip(operation, timeout).await;
        if let Err(err) = &result {
            tracing::warn!(
                command = %kind,
                code = err.code(),
                error = %err,
                "engine command failed"
            );
        }
        result
    }

    async fn round_trip(&self, operation: Operation, timeout: Duration) -> GatewayResult<Reply> {
        let command = operation.into_command()?;
        let request = codec::encode(&command)?;
        let line = self.transport.exchange(&request, timeout).await?;
        codec::decode(&line)?.into_result(command.kind())
    }

    /// Run a typed catalog entry and decode its result shape.
    pub async fn call<E: CatalogEntry>(&self, entry: E) -> GatewayResult<E::Output> {
        let kind = E::KIND;
        self.execute(entry.into())
            .await?
            .parse(kind)
            .inspect_err(|err| {
                tracing::warn!(command = %kind, code = err.code(), error = %err, "unexpected engine reply");
            })
    }

    /// Spawn an actor of `kind` at `position`.
    pub async fn spawn_actor(&self, kind: ActorKind, position: Vec3) -> GatewayResult<SpawnedActor> {
        self.call(SpawnActor { kind, position }).await
    }

    /// Snapshot every actor in the scene.
    pub async fn get_scene_info(&self) -> GatewayResult<SceneInfo> {
        self.call(GetSceneInfo).await
    }

    /// Delete an actor.
    pub async fn delete_actor(&self, actor_id: ActorId) -> GatewayResult<DeletedActor> {
        self.call(DeleteActor { actor_id }).await
    }

    /// Apply a partial transform update. Absent fields are not sent.
    pub async fn set_transform(
        &self,
        actor_id: ActorId,
        delta: TransformDelta,
    ) -> GatewayResult<TransformUpdate> {
        self.call(SetTransform { actor_id, delta }).await
    }

    /// Import a file on disk as an engine asset.
    pub async fn import_asset(
        &self,
        file_path: impl Into<std::path::PathBuf>,
        asset_name: impl Into<String>,
    ) -> GatewayResult<ImportedAsset> {
        self.call(ImportAsset {
            file_path: file_path.into(),
            asset_name: asset_name.into(),
        })
        .await
    }

    /// Build a material from a texture and apply it to an actor.
    pub async fn apply_material(
        &self,
        actor_id: ActorId,
        texture_asset_path: impl Into<String>,
    ) -> GatewayResult<AppliedMaterial> {
        self.call(ApplyMaterial {
            actor_id,
            texture_asset_path: texture_asset_path.into(),
        })
        .await
    }

    /// Find actors whose label or class contains `query`.
    pub async fn search_actors(&self, query: impl Into<String>) -> GatewayResult<SearchResult> {
        self.call(SearchActors {
            query: query.into(),
        })
        .await
    }

    /// Show or hide an actor.
    pub async fn set_visibility(
        &self,
        actor_id: ActorId,
        visible: bool,
    ) -> GatewayResult<VisibilityUpdate> {
        self.call(SetVisibility { actor_id, visible }).await
    }

    /// Set a light's brightness (1.0 = default).
    pub async fn set_light_intensity(
        &self,
        actor_id: ActorId,
        intensity: f64,
    ) -> GatewayResult<LightIntensityUpdate> {
        self.call(SetLightIntensity {
            actor_id,
            intensity,
        })
        .await
    }
}
