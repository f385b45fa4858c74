use chrono::{Datelike, Duration, Local};
use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration as StdDuration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct Task {
    id: u64,
    text: String,
    completed: bool,
}

#[derive(Debug, Deserialize)]
struct DayResponse {
    date: String,
    tasks: Vec<Task>,
    tree_planted: bool,
    past: bool,
}

#[derive(Debug, Deserialize)]
struct DaySummary {
    date: String,
    tree_planted: bool,
}

#[derive(Debug, Deserialize)]
struct MonthResponse {
    days: Vec<DaySummary>,
    forest: bool,
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
    path.push(format!("tree_tasks_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

fn date_key(date: chrono::NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let today = date_key(Local::now().date_naive());
    let deadline = Instant::now() + StdDuration::from_secs(3);
    loop {
        if let Ok(resp) = client
            .get(format!("{base_url}/api/tasks?date={today}"))
            .send()
            .await
        {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(StdDuration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_tree_tasks"))
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

async fn fetch_day(client: &Client, base_url: &str, date: &str) -> DayResponse {
    client
        .get(format!("{base_url}/api/tasks?date={date}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_completing_all_tasks_plants_a_tree() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let tomorrow = date_key(Local::now().date_naive() + Duration::days(1));

    let day: DayResponse = client
        .post(format!("{}/api/tasks", server.base_url))
        .json(&serde_json::json!({ "date": tomorrow, "text": "Water plants" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(day.date, tomorrow);
    assert!(!day.past);
    assert!(!day.tree_planted);
    let task = day.tasks.last().expect("task was added");
    assert_eq!(task.text, "Water plants");
    assert!(!task.completed);

    let day: DayResponse = client
        .post(format!("{}/api/tasks/toggle", server.base_url))
        .json(&serde_json::json!({ "date": tomorrow, "id": task.id }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(day.tasks.iter().all(|task| task.completed));
    assert!(day.tree_planted);

    // Survives a fresh read, and shows up on the calendar.
    let day = fetch_day(&client, &server.base_url, &tomorrow).await;
    assert!(day.tree_planted);

    let date = Local::now().date_naive() + Duration::days(1);
    let month: MonthResponse = client
        .get(format!(
            "{}/api/month?year={}&month={}",
            server.base_url,
            date.year(),
            date.month()
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let summary = month
        .days
        .iter()
        .find(|day| day.date == tomorrow)
        .expect("day present in month");
    assert!(summary.tree_planted);
    assert!(!month.forest);
}

#[tokio::test]
async fn http_past_dates_are_rejected() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let yesterday = date_key(Local::now().date_naive() - Duration::days(1));

    let response = client
        .post(format!("{}/api/tasks", server.base_url))
        .json(&serde_json::json!({ "date": yesterday, "text": "too late" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    let day = fetch_day(&client, &server.base_url, &yesterday).await;
    assert!(day.tasks.is_empty());
    assert!(day.past);
}

#[tokio::test]
async fn http_blank_text_is_ignored() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let today = date_key(Local::now().date_naive());

    let before = fetch_day(&client, &server.base_url, &today).await;

    let day: DayResponse = client
        .post(format!("{}/api/tasks", server.base_url))
        .json(&serde_json::json!({ "date": today, "text": "   " }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(day.tasks.len(), before.tasks.len());
}

#[tokio::test]
async fn http_toggling_unknown_task_is_not_found() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let today = date_key(Local::now().date_naive());

    let response = client
        .post(format!("{}/api/tasks/toggle", server.base_url))
        .json(&serde_json::json!({ "date": today, "id": 999_999 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}
