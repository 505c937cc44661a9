//! Every exit path of a call must give its socket back.
//!
//! Kept in its own test binary so no other test opens descriptors while the
//! count is being compared.

#![cfg(target_os = "linux")]

mod common;

use common::{Behavior, StubEngine, scene_engine};
use scene_gateway::gateway::{ActorId, GatewayError};
use scene_gateway::{Gateway, GatewayConfig};
use std::time::Duration;

const ROUNDS: usize = 25;

fn open_descriptors() -> usize {
    std::fs::read_dir("/proc/self/fd")
        .map(|entries| entries.count())
        .unwrap_or(0)
}

async fn settle_to(baseline: usize) -> usize {
    let mut current = open_descriptors();
    for _ in 0..100 {
        if current <= baseline {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
        current = open_descriptors();
    }
    current
}

#[tokio::test]
async fn sockets_are_released_on_every_exit_path() {
    let baseline = open_descriptors();
    assert!(baseline > 0, "descriptor table not readable");

    {
        let ok = StubEngine::replying(scene_engine).await;
        let truncated = StubEngine::start(Behavior::Raw(br#"{"success": tr"#.to_vec())).await;
        let silent = StubEngine::start(Behavior::Silent).await;

        let refused_port = {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap().port()
        };
        let refused = Gateway::new(&GatewayConfig {
            host: "127.0.0.1".into(),
            port: refused_port,
            timeout_ms: 1_000,
        });
        let timing_out = Gateway::new(&GatewayConfig {
            timeout_ms: 30,
            ..silent.config()
        });
        let slow = Gateway::new(&GatewayConfig {
            timeout_ms: 10_000,
            ..silent.config()
        });
        let ghost = ActorId::new("Ghost_9").unwrap();

        for _ in 0..ROUNDS {
            ok.gateway().get_scene_info().await.unwrap();

            let err = ok.gateway().delete_actor(ghost.clone()).await.unwrap_err();
            assert!(matches!(err, GatewayError::EngineRejected { .. }));

            let err = truncated.gateway().get_scene_info().await.unwrap_err();
            assert!(matches!(err, GatewayError::Protocol(_)));

            let err = refused.get_scene_info().await.unwrap_err();
            assert!(matches!(err, GatewayError::Connection { .. }));

            let err = timing_out.get_scene_info().await.unwrap_err();
            assert!(matches!(err, GatewayError::Timeout { .. }));

            // Caller gives up before the gateway's own deadline.
            let abandoned =
                tokio::time::timeout(Duration::from_millis(30), slow.get_scene_info()).await;
            assert!(abandoned.is_err());
        }

        assert_eq!(ok.requests().len(), 2 * ROUNDS);
        assert_eq!(truncated.requests().len(), ROUNDS);
    }

    let after = settle_to(baseline).await;
    assert!(
        after <= baseline,
        "descriptors leaked: {baseline} before, {after} after"
    );
}
