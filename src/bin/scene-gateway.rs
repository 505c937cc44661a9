//! Scene Gateway CLI - drive the scene editor from the command line
//!
//! `serve` runs the NDJSON tool service over stdin/stdout; every other
//! subcommand issues a single catalog operation and prints the typed result.

use anyhow::Context;
use clap::{Parser, Subcommand};
use scene_gateway::gateway::{ActorId, ActorKind, Field, TransformDelta, Vec3};
use scene_gateway::service::{ToolService, tool_descriptors};
use scene_gateway::{Gateway, GatewayConfig};
use serde::Serialize;
use std::path::PathBuf;
use tokio::io::BufReader;

#[derive(Parser)]
#[command(name = "scene-gateway", version = scene_gateway::VERSION)]
#[command(about = "Typed command gateway for a live 3D scene editor", long_about = None)]
struct Cli {
    /// Engine host (overrides UE_TCP_HOST)
    #[arg(long, global = true)]
    host: Option<String>,

    /// Engine port (overrides UE_TCP_PORT)
    #[arg(long, global = true)]
    port: Option<u16>,

    /// Per-call timeout in milliseconds (overrides UE_TCP_TIMEOUT_MS)
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve tools over stdin/stdout (NDJSON)
    Serve,

    /// Print the tool descriptors
    Tools,

    /// Spawn an actor
    Spawn {
        /// Actor kind (StaticMeshActor, PointLight, SpotLight, DirectionalLight, CameraActor, PlayerStart)
        kind: String,
        /// X position
        #[arg(allow_negative_numbers = true)]
        x: f64,
        /// Y position
        #[arg(allow_negative_numbers = true)]
        y: f64,
        /// Z position
        #[arg(allow_negative_numbers = true)]
        z: f64,
    },

    /// List every actor in the scene
    Scene,

    /// Delete an actor
    Delete {
        /// Actor ID
        actor_id: String,
    },

    /// Update part of an actor transform
    Transform {
        /// Actor ID
        actor_id: String,
        #[arg(long, allow_negative_numbers = true)]
        x: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        y: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        z: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        yaw: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        pitch: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        roll: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        scale_x: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        scale_y: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        scale_z: Option<f64>,
    },

    /// Import a file as an asset under /Game/Generated/
    Import {
        /// Absolute path of the file
        file_path: PathBuf,
        /// Asset name
        asset_name: String,
    },

    /// Apply a texture as a material
    Material {
        /// Actor ID
        actor_id: String,
        /// Texture asset path
        texture_asset_path: String,
    },

    /// Search actors by label or class
    Search {
        /// Case-insensitive substring
        query: String,
    },

    /// Show or hide an actor
    Visibility {
        /// Actor ID
        actor_id: String,
        /// true to show, false to hide
        #[arg(action = clap::ArgAction::Set)]
        visible: bool,
    },

    /// Set a light's intensity (1.0 = default)
    Light {
        /// Actor ID
        actor_id: String,
        /// Brightness scale
        intensity: f64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries results and the tool protocol.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = GatewayConfig::from_env().context("reading engine configuration")?;
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config.timeout_ms = timeout_ms;
    }
    let gateway = Gateway::new(&config);

    match cli.command {
        Commands::Serve => {
            let stdin = BufReader::new(tokio::io::stdin());
            let stdout = tokio::io::stdout();
            ToolService::new(gateway).run(stdin, stdout).await?;
        }

        Commands::Tools => print_json(&tool_descriptors())?,

        Commands::Spawn { kind, x, y, z } => {
            let kind: ActorKind = kind.parse()?;
            print_json(&gateway.spawn_actor(kind, Vec3::new(x, y, z)).await?)?;
        }

        Commands::Scene => print_json(&gateway.get_scene_info().await?)?,

        Commands::Delete { actor_id } => {
            print_json(&gateway.delete_actor(ActorId::new(actor_id)?).await?)?;
        }

        Commands::Transform {
            actor_id,
            x,
            y,
            z,
            yaw,
            pitch,
            roll,
            scale_x,
            scale_y,
            scale_z,
        } => {
            let delta = TransformDelta {
                x: Field::from(x),
                y: Field::from(y),
                z: Field::from(z),
                yaw: Field::from(yaw),
                pitch: Field::from(pitch),
                roll: Field::from(roll),
                scale_x: Field::from(scale_x),
                scale_y: Field::from(scale_y),
                scale_z: Field::from(scale_z),
            };
            print_json(&gateway.set_transform(ActorId::new(actor_id)?, delta).await?)?;
        }

        Commands::Import {
            file_path,
            asset_name,
        } => print_json(&gateway.import_asset(file_path, asset_name).await?)?,

        Commands::Material {
            actor_id,
            texture_asset_path,
        } => {
            let result = gateway
                .apply_material(ActorId::new(actor_id)?, texture_asset_path)
                .await?;
            print_json(&result)?;
        }

        Commands::Search { query } => print_json(&gateway.search_actors(query).await?)?,

        Commands::Visibility { actor_id, visible } => {
            print_json(&gateway.set_visibility(ActorId::new(actor_id)?, visible).await?)?;
        }

        Commands::Light {
            actor_id,
            intensity,
        } => {
            let result = gateway
                .set_light_intensity(ActorId::new(actor_id)?, intensity)
                .await?;
            print_json(&result)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
