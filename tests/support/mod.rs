#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use parkit_dashboard_lib::{FetchError, Transport};

pub const STATUS: &str = "scripts/get_latest_data.php";
pub const FEED: &str = "csv/parkit-data.csv";
pub const LIST: &str = "scripts/list_graphs.php";
pub const DELETE: &str = "scripts/delete_graph.php";

/// In-memory backend: each path answers with whatever was last set for it.
#[derive(Default)]
pub struct FakeTransport {
    routes: Mutex<HashMap<String, Result<Vec<u8>, String>>>,
    requests: Mutex<Vec<String>>,
    posts: Mutex<Vec<(String, Vec<(String, String)>)>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, path: &str, body: impl Into<Vec<u8>>) {
        self.routes
            .lock()
            .unwrap()
            .insert(path.to_string(), Ok(body.into()));
    }

    pub fn fail(&self, path: &str, reason: &str) {
        self.routes
            .lock()
            .unwrap()
            .insert(path.to_string(), Err(reason.to_string()));
    }

    pub fn requests_to(&self, path: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|requested| requested.as_str() == path)
            .count()
    }

    pub fn posts(&self) -> Vec<(String, Vec<(String, String)>)> {
        self.posts.lock().unwrap().clone()
    }

    fn answer(&self, path: &str) -> Result<Vec<u8>, FetchError> {
        self.requests.lock().unwrap().push(path.to_string());
        match self.routes.lock().unwrap().get(path) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(reason)) => Err(FetchError::transport(path, reason.as_str())),
            None => Err(FetchError::Status {
                url: path.to_string(),
                status: 404,
            }),
        }
    }
}

impl Transport for FakeTransport {
    async fn get_text(&self, path: &str) -> Result<String, FetchError> {
        self.answer(path)
            .map(|body| String::from_utf8_lossy(&body).into_owned())
    }

    async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, FetchError> {
        self.answer(path)
    }

    async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Result<String, FetchError> {
        self.posts.lock().unwrap().push((
            path.to_string(),
            form.iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        ));
        self.get_text(path).await
    }
}

pub fn online_status() -> String {
    serde_json::json!({
        "data": "CAR PRESENT - SPACE OCCUPIED",
        "sysstatus": "Online",
        "streak": "2024-04-19 08:00 2024-04-19 09:05 01:05:30",
        "occupiedPercentage": "62.50",
        "unoccupiedPercentage": "37.50",
        "optimalTime": "06:45"
    })
    .to_string()
}

pub fn offline_status() -> String {
    serde_json::json!({
        "data": "Live data is not available.",
        "sysstatus": "Offline",
        "streak": "Streak data is not available."
    })
    .to_string()
}

pub fn feed(first_timestamp: &str) -> String {
    format!(
        "Space,Status,Time,X,Y,Width,Height\n\
         ########## NEW RUN AT {first_timestamp} ###########\n\
         1,CAR PRESENT,{first_timestamp},12,40,180,95\n\
         1,CAR PRESENT,2099-01-01 00:00:00,12,40,180,95\n"
    )
}
