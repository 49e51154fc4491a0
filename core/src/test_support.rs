//! A scripted in-memory delegate for unit tests.

use std::any::type_name;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::constructor::{Completion, Constructor};
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::parameter::Parameter;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FakeResponse {
    pub code: i32,
    pub message: String,
    pub body: String,
}

impl FakeResponse {
    pub fn new(code: i32, message: &str, body: &str) -> Self {
        Self {
            code,
            message: message.to_string(),
            body: body.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
enum Outcome {
    Respond(FakeResponse),
    Fail(i32, String),
}

impl Outcome {
    fn to_result(&self) -> Result<FakeResponse, ApiError> {
        match self {
            Outcome::Respond(response) => Ok(response.clone()),
            Outcome::Fail(code, message) => Err(ApiError::new(*code, message.clone())),
        }
    }
}

/// Answers every request with the same outcome. Asynchronous requests
/// complete on a fresh thread.
#[derive(Debug)]
pub(crate) struct Scripted {
    outcome: Outcome,
    calls: Mutex<Vec<String>>,
    completed: Arc<(Mutex<usize>, Condvar)>,
    destroyed: AtomicUsize,
}

impl Default for Scripted {
    fn default() -> Self {
        Self::responding(FakeResponse::new(0, "ok", "null"))
    }
}

impl Scripted {
    pub fn responding(response: FakeResponse) -> Self {
        Self::with_outcome(Outcome::Respond(response))
    }

    pub fn failing(code: i32, message: &str) -> Self {
        Self::with_outcome(Outcome::Fail(code, message.to_string()))
    }

    fn with_outcome(outcome: Outcome) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
            completed: Arc::new((Mutex::new(0), Condvar::new())),
            destroyed: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn destroyed(&self) -> usize {
        self.destroyed.load(Ordering::SeqCst)
    }

    /// Block until `n` asynchronous completions have returned.
    pub fn wait_for_completions(&self, n: usize, timeout: Duration) {
        let (count, cvar) = &*self.completed;
        let guard = count.lock().unwrap();
        let (guard, result) = cvar
            .wait_timeout_while(guard, timeout, |done| *done < n)
            .unwrap();
        assert!(!result.timed_out(), "only {} of {n} completions arrived", *guard);
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Constructor for Scripted {
    type Context = ();
    type Response = FakeResponse;

    fn sync_request(
        &self,
        _context: &(),
        method: HttpMethod,
        url: &str,
        _parameter: &Parameter,
    ) -> Result<FakeResponse, ApiError> {
        self.record(format!("sync {method} {url}"));
        self.outcome.to_result()
    }

    fn async_request(
        &self,
        _context: &(),
        method: HttpMethod,
        url: &str,
        _parameter: &Parameter,
        completion: Completion<FakeResponse>,
    ) {
        self.record(format!("async {method} {url}"));
        let result = self.outcome.to_result();
        let completed = Arc::clone(&self.completed);
        std::thread::spawn(move || {
            completion.complete(result);
            let (count, cvar) = &*completed;
            *count.lock().unwrap() += 1;
            cvar.notify_all();
        });
    }

    fn base_url(&self) -> &str {
        "https://api.example.com"
    }

    fn parse_code(&self, response: &FakeResponse) -> i32 {
        response.code
    }

    fn parse_message(&self, response: &FakeResponse) -> String {
        response.message.clone()
    }

    fn parse_data(&self, response: &FakeResponse) -> String {
        response.body.clone()
    }

    fn parse_entity<T: DeserializeOwned>(&self, response: &FakeResponse) -> Option<T> {
        self.record(format!("parse_entity {}", type_name::<T>()));
        serde_json::from_str(&response.body).ok()
    }

    fn parse_entities<T: DeserializeOwned>(&self, response: &FakeResponse) -> Vec<T> {
        self.record(format!("parse_entities {}", type_name::<T>()));
        serde_json::from_str(&response.body).unwrap_or_default()
    }

    fn destroy(&self, _context: &()) {
        self.destroyed.fetch_add(1, Ordering::SeqCst);
    }
}
