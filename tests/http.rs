use once_cell::sync::Lazy;
use reqwest::Client;
use sport_stats::models::{MetricsResponse, ProfileResponse};
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

struct TestServer {
    base_url: String,
    data_path: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("sport_stats_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/metrics")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server_with_data(data_path: String) -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_sport_stats"))
        .env("PORT", port.to_string())
        .env("DASHBOARD_DATA_PATH", &data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer {
        base_url,
        data_path,
        child,
    }
}

async fn spawn_server() -> TestServer {
    spawn_server_with_data(unique_data_path()).await
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

#[tokio::test]
async fn http_save_streak_updates_indicator() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/streak", server.base_url))
        .json(&serde_json::json!({ "streak": 20 }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let metrics: MetricsResponse = response.json().await.unwrap();
    assert_eq!(metrics.streak, 20);
    assert_eq!(metrics.filled_slots, 20);

    let metrics: MetricsResponse = client
        .get(format!("{}/api/metrics", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(metrics.streak, 20);
}

#[tokio::test]
async fn http_streak_out_of_range_is_rejected() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before: MetricsResponse = client
        .get(format!("{}/api/metrics", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let response = client
        .post(format!("{}/api/streak", server.base_url))
        .json(&serde_json::json!({ "streak": 31 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let after: MetricsResponse = client
        .get(format!("{}/api/metrics", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(after.streak, before.streak);
}

#[tokio::test]
async fn http_save_steps_formats_display() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/steps", server.base_url))
        .json(&serde_json::json!({ "steps": 12500, "percentile": 90 }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let metrics: MetricsResponse = response.json().await.unwrap();
    assert_eq!(metrics.steps, 12_500);
    assert_eq!(metrics.steps_display, "12.5k");
    assert_eq!(metrics.percentile_display, "90%");
}

#[tokio::test]
async fn http_activity_requires_seven_values() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/activity", server.base_url))
        .json(&serde_json::json!({ "activity": [1, 2, 3] }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let response = client
        .post(format!("{}/api/activity", server.base_url))
        .json(&serde_json::json!({ "activity": [10, 20, 30, 40, 50, 60, 70] }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let metrics: MetricsResponse = response.json().await.unwrap();
    assert_eq!(metrics.activity, vec![10, 20, 30, 40, 50, 60, 70]);
}

#[tokio::test]
async fn http_profile_validation_and_save() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/profile", server.base_url))
        .json(&serde_json::json!({ "name": "  ", "age": 30, "education": "FEFS" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let response = client
        .post(format!("{}/api/profile", server.base_url))
        .json(&serde_json::json!({ "name": "Ana", "age": 31, "education": "FEFS" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let profile: ProfileResponse = response.json().await.unwrap();
    assert_eq!(profile.name, "Ana");
    assert_eq!(profile.initial, "A");
    assert_eq!(profile.age_display, "31 yrs");
}

#[tokio::test]
async fn http_custom_card_round_trip() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/cards", server.base_url))
        .json(&serde_json::json!({
            "name": "Hydration",
            "value": "2.1",
            "unit": "liters",
            "icon": "water"
        }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let page = client
        .get(format!("{}/", server.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains("Hydration"));
}

#[tokio::test]
async fn http_restart_reloads_saved_state() {
    let _guard = TEST_LOCK.lock().await;
    let data_path = unique_data_path();
    let client = Client::new();

    {
        let server = spawn_server_with_data(data_path.clone()).await;
        client
            .post(format!("{}/api/steps", server.base_url))
            .json(&serde_json::json!({ "steps": 12500, "percentile": 90 }))
            .send()
            .await
            .unwrap()
            .error_for_status()
            .unwrap();
        client
            .post(format!("{}/api/profile", server.base_url))
            .json(&serde_json::json!({ "name": "Ana", "age": 31, "education": "FEFS" }))
            .send()
            .await
            .unwrap()
            .error_for_status()
            .unwrap();
        // Dropping kills the process, simulating the end of the session.
    }

    let server = spawn_server_with_data(data_path.clone()).await;
    let metrics: MetricsResponse = client
        .get(format!("{}/api/metrics", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(metrics.steps, 12_500);
    assert_eq!(metrics.steps_display, "12.5k");
    assert_eq!(metrics.percentile, 90);
    assert_eq!(metrics.activity.len(), 7);

    let profile: ProfileResponse = client
        .get(format!("{}/api/profile", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(profile.name, "Ana");
    assert_eq!(profile.age, 31);

    let _ = std::fs::remove_file(&server.data_path);
}
