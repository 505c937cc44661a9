#![allow(dead_code)]

use parking_lot::Mutex;
use scene_gateway::gateway::scene::SceneActor;
use scene_gateway::{Gateway, GatewayConfig};
use serde_json::{Map, Value, json};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::task::{JoinHandle, JoinSet};

type Responder = Arc<dyn Fn(&Value) -> Value + Send + Sync>;

/// How the stub engine answers a request line.
pub enum Behavior {
    /// Reply with the JSON returned by the closure.
    Reply(Responder),
    /// Write these bytes verbatim, then close.
    Raw(Vec<u8>),
    /// Read the request and never answer; the connection stays open.
    Silent,
}

/// One-request-per-connection engine stand-in listening on localhost.
pub struct StubEngine {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<Value>>>,
    task: JoinHandle<()>,
}

impl StubEngine {
    pub async fn replying<F>(respond: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        Self::start(Behavior::Reply(Arc::new(respond))).await
    }

    pub async fn start(behavior: Behavior) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub engine");
        let addr = listener.local_addr().expect("stub engine address");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let behavior = Arc::new(behavior);

        let recorded = Arc::clone(&requests);
        let task = tokio::spawn(async move {
            // Dropping the set on abort tears down every open connection.
            let mut connections = JoinSet::new();
            while let Ok((stream, _)) = listener.accept().await {
                while connections.try_join_next().is_some() {}
                let behavior = Arc::clone(&behavior);
                let recorded = Arc::clone(&recorded);
                connections.spawn(async move {
                    let (reader, mut writer) = stream.into_split();
                    let mut reader = BufReader::new(reader);
                    let mut line = String::new();
                    if reader.read_line(&mut line).await.unwrap_or(0) == 0 {
                        return;
                    }
                    let request: Value =
                        serde_json::from_str(line.trim_end()).expect("request line is JSON");
                    recorded.lock().push(request.clone());

                    match behavior.as_ref() {
                        Behavior::Reply(respond) => {
                            let mut bytes = serde_json::to_vec(&respond(&request)).unwrap();
                            bytes.push(b'\n');
                            let _ = writer.write_all(&bytes).await;
                        }
                        Behavior::Raw(bytes) => {
                            let _ = writer.write_all(bytes).await;
                        }
                        Behavior::Silent => {
                            let _hold = (reader, writer);
                            std::future::pending::<()>().await;
                        }
                    }
                });
            }
        });

        Self {
            addr,
            requests,
            task,
        }
    }

    pub fn config(&self) -> GatewayConfig {
        GatewayConfig {
            host: self.addr.ip().to_string(),
            port: self.addr.port(),
            timeout_ms: 5_000,
        }
    }

    pub fn gateway(&self) -> Gateway {
        Gateway::new(&self.config())
    }

    /// Request envelopes received so far, in arrival order.
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().clone()
    }
}

impl Drop for StubEngine {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// The fixed two-actor scene.
pub fn two_actor_scene() -> Vec<SceneActor> {
    serde_json::from_value(json!([
        {"actor_id": "Cube_1", "class": "StaticMeshActor", "transform": identity_transform()},
        {"actor_id": "PointLight_1", "class": "PointLight", "transform": identity_transform()},
    ]))
    .unwrap()
}

pub fn identity_transform() -> Value {
    json!({
        "location": {"x": 0.0, "y": 0.0, "z": 0.0},
        "rotation": {"pitch": 0.0, "yaw": 0.0, "roll": 0.0},
        "scale": {"x": 1.0, "y": 1.0, "z": 1.0},
    })
}

/// Engine behaviour over [`two_actor_scene`]: echoes inputs, assigns `<Kind>_1` ids.
pub fn scene_engine(request: &Value) -> Value {
    let scene = two_actor_scene();
    let params = request.get("params").cloned().unwrap_or_else(|| json!({}));
    let actor_id = params["actor_id"].as_str().unwrap_or_default().to_string();
    let known = scene.iter().any(|actor| actor.actor_id.as_str() == actor_id);

    match request["command"].as_str().unwrap_or_default() {
        "spawn_actor" => {
            let kind = params["actor_type"].as_str().unwrap_or("Unknown");
            json!({
                "success": true,
                "actor_id": format!("{kind}_1"),
                "actor_type": kind,
                "position": {"x": params["x"], "y": params["y"], "z": params["z"]},
            })
        }
        "get_scene_info" => json!({"success": true, "actors": scene}),
        "search_actors" => {
            let query = params["query"].as_str().unwrap_or_default();
            let matches: Vec<_> = scene
                .into_iter()
                .filter(|actor| actor.matches_query(query))
                .collect();
            json!({"success": true, "actors": matches})
        }
        _ if !known => json!({"success": false, "error": "actor not found"}),
        "delete_actor" => json!({"success": true, "actor_id": actor_id}),
        "set_transform" => {
            let mut transform = identity_transform();
            let slots = [
                ("x", "location", "x"),
                ("y", "location", "y"),
                ("z", "location", "z"),
                ("yaw", "rotation", "yaw"),
                ("pitch", "rotation", "pitch"),
                ("roll", "rotation", "roll"),
                ("scale_x", "scale", "x"),
                ("scale_y", "scale", "y"),
                ("scale_z", "scale", "z"),
            ];
            for (param, group, axis) in slots {
                if let Some(value) = params.get(param) {
                    transform[group][axis] = value.clone();
                }
            }
            json!({"success": true, "actor_id": actor_id, "transform": transform})
        }
        "apply_material" => json!({
            "success": true,
            "actor_id": actor_id,
            "material_path": format!("/Game/Generated/M_{actor_id}"),
        }),
        "set_visibility" => json!({
            "success": true,
            "actor_id": actor_id,
            "visible": params["visible"],
        }),
        "set_light_intensity" => json!({
            "success": true,
            "actor_id": actor_id,
            "intensity": params["intensity"],
        }),
        _ => json!({"success": false, "error": "Unknown command"}),
    }
}

/// `import_asset` does not target an actor, so it is answered separately.
pub fn asset_engine(request: &Value) -> Value {
    if request["command"] == "import_asset" {
        let name = request["params"]["asset_name"].as_str().unwrap_or_default();
        return json!({"success": true, "asset_path": format!("/Game/Generated/{name}.{name}")});
    }
    scene_engine(request)
}

/// Keys of a request's `params` object, sorted.
pub fn param_keys(request: &Value) -> Vec<String> {
    let mut keys: Vec<String> = request
        .get("params")
        .and_then(Value::as_object)
        .map(Map::keys)
        .into_iter()
        .flatten()
        .cloned()
        .collect();
    keys.sort();
    keys
}
