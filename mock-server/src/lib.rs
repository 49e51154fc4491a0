use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// Envelope codes reported in the `code` field.
pub const CODE_OK: i32 = 0;
pub const CODE_NOT_FOUND: i32 = 404;
pub const CODE_INVALID: i32 = 422;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Deserialize)]
pub struct CreateUser {
    pub name: Option<String>,
    #[serde(default)]
    pub email: String,
}

#[derive(Deserialize)]
pub struct ListQuery {
    pub name: Option<String>,
}

/// Every response body is `{"code": .., "message": .., "data": ..}` with HTTP
/// status 200; failures are signalled through `code`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope {
    pub code: i32,
    pub message: String,
    pub data: Value,
}

impl Envelope {
    fn ok(data: Value) -> Json<Self> {
        Json(Envelope {
            code: CODE_OK,
            message: "ok".to_string(),
            data,
        })
    }

    fn error(code: i32, message: &str) -> Json<Self> {
        Json(Envelope {
            code,
            message: message.to_string(),
            data: Value::Null,
        })
    }
}

pub type Db = Arc<RwLock<HashMap<Uuid, User>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/ping", get(ping))
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user).delete(delete_user))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!("mock server listening on {addr}");
    }
    axum::serve(listener, app()).await
}

async fn ping() -> Json<Envelope> {
    Envelope::ok(json!("pong"))
}

async fn list_users(State(db): State<Db>, Query(query): Query<ListQuery>) -> Json<Envelope> {
    let users = db.read().await;
    let mut found: Vec<&User> = users
        .values()
        .filter(|u| query.name.as_deref().map_or(true, |name| u.name == name))
        .collect();
    found.sort_by(|a, b| a.name.cmp(&b.name));
    Envelope::ok(json!(found))
}

async fn create_user(State(db): State<Db>, Json(input): Json<CreateUser>) -> Json<Envelope> {
    let Some(name) = input.name.filter(|n| !n.trim().is_empty()) else {
        return Envelope::error(CODE_INVALID, "name is required");
    };
    let user = User {
        id: Uuid::new_v4(),
        name,
        email: input.email,
    };
    db.write().await.insert(user.id, user.clone());
    Envelope::ok(json!(user))
}

async fn get_user(State(db): State<Db>, Path(id): Path<String>) -> Json<Envelope> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Envelope::error(CODE_INVALID, "malformed user id");
    };
    match db.read().await.get(&id) {
        Some(user) => Envelope::ok(json!(user)),
        None => Envelope::error(CODE_NOT_FOUND, "user not found"),
    }
}

async fn delete_user(State(db): State<Db>, Path(id): Path<String>) -> Json<Envelope> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Envelope::error(CODE_INVALID, "malformed user id");
    };
    match db.write().await.remove(&id) {
        Some(_) => Envelope::ok(Value::Null),
        None => Envelope::error(CODE_NOT_FOUND, "user not found"),
    }
}
