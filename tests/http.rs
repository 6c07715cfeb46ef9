use habit_tracker::{HabitEngine, RemoteStore, metrics};
use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct HabitResponse {
    id: u64,
    name: String,
    created_at: String,
    #[serde(default)]
    completions: Vec<String>,
}

struct TestServer {
    base_url: String,
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
    path.push(format!(
        "habit_tracker_http_{}_{}.json",
        std::process::id(),
        nanos
    ));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/habits")).send().await {
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

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_habit_tracker"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
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

async fn create_habit(client: &Client, base_url: &str, name: &str) -> HabitResponse {
    client
        .post(format!("{base_url}/api/habits"))
        .json(&serde_json::json!({ "name": name }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_create_and_list_round_trip() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let created = create_habit(&client, &server.base_url, "Meditate").await;
    assert_eq!(created.name, "Meditate");
    assert!(created.completions.is_empty());
    assert!(!created.created_at.is_empty());

    let listed: Vec<HabitResponse> = client
        .get(format!("{}/api/habits", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let found = listed
        .iter()
        .find(|habit| habit.id == created.id)
        .expect("created habit missing from list");
    assert_eq!(found.name, "Meditate");
    assert!(found.completions.is_empty());
}

#[tokio::test]
async fn http_blank_name_is_rejected() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/habits", server.base_url))
        .json(&serde_json::json!({ "name": "   " }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_toggle_twice_restores_completions() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let created = create_habit(&client, &server.base_url, "Drink water").await;
    let today = metrics::today().to_string();

    let toggled: HabitResponse = client
        .post(format!("{}/api/habits/{}/toggle", server.base_url, created.id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(toggled.completions, vec![today]);

    let restored: HabitResponse = client
        .post(format!("{}/api/habits/{}/toggle", server.base_url, created.id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(restored.completions.is_empty());
}

#[tokio::test]
async fn http_delete_then_repeat_is_not_found() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let created = create_habit(&client, &server.base_url, "Journal").await;

    let response = client
        .delete(format!("{}/api/habits/{}", server.base_url, created.id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NO_CONTENT);

    let repeat = client
        .delete(format!("{}/api/habits/{}", server.base_url, created.id))
        .send()
        .await
        .unwrap();
    assert_eq!(repeat.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn http_toggle_unknown_id_is_not_found() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/habits/999999999/toggle", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn remote_engine_full_session() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;

    let mut engine = HabitEngine::new(RemoteStore::new(server.base_url.clone()));
    engine.refresh().await.unwrap();

    let created = engine.create("Evening walk").await.unwrap();
    assert!(created.completions.is_empty());
    // The refetch after the write already pulled the server's copy.
    assert!(engine.habits().iter().any(|habit| habit.id == created.id));

    let toggled = engine.toggle(created.id).await.unwrap();
    assert!(metrics::completed_today(&toggled));
    assert_eq!(metrics::streak(&toggled), 1);

    let restored = engine.toggle(created.id).await.unwrap();
    assert!(!metrics::completed_today(&restored));
    assert_eq!(metrics::streak(&restored), 0);

    engine.delete(created.id).await.unwrap();
    assert!(!engine.habits().iter().any(|habit| habit.id == created.id));
}
