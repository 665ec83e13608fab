use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::Mutex};
use tracing::{debug, info};

use crate::store::ResultStore;

/// ハンドラ間で共有するストア
pub type SharedStore = Arc<Mutex<ResultStore>>;

/// `POST /results` のリクエストボディ
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ResultInfo {
    pub result: f32,
}

pub fn shared_store() -> SharedStore {
    Arc::new(Mutex::new(ResultStore::new()))
}

pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/results", post(append_result))
        .route("/results/{id}", get(get_result))
        .with_state(store)
}

/// バインド済みのリスナーでサーバを起動する
pub async fn serve(listener: TcpListener, store: SharedStore) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("result store listening on {}", addr);
    }
    axum::serve(listener, router(store)).await
}

async fn append_result(
    State(store): State<SharedStore>,
    Json(body): Json<ResultInfo>,
) -> (StatusCode, Json<u64>) {
    let id = store.lock().await.append(body.result);
    info!(id, value = body.result, "result stored");
    (StatusCode::CREATED, Json(id))
}

async fn get_result(
    State(store): State<SharedStore>,
    Path(id): Path<i64>,
) -> Result<Json<f32>, StatusCode> {
    match store.lock().await.get(id) {
        Some(value) => {
            debug!(id, value, "result found");
            Ok(Json(value))
        }
        None => {
            debug!(id, "result not found");
            Err(StatusCode::NOT_FOUND)
        }
    }
}
