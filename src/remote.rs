use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::error::CalcError;
use crate::server::ResultInfo;

/// REPL から見た結果ストア
#[async_trait]
pub trait ResultsApi {
    /// 結果を保存し、割り当てられた ID を返す
    async fn send_result(&self, result: f32) -> Result<u64, CalcError>;

    /// ID で結果を取得する
    async fn get_result(&self, id: i32) -> Result<f32, CalcError>;
}

/// HTTP 経由で結果ストアサーバにアクセスするクライアント
#[derive(Debug, Clone)]
pub struct HttpResults {
    client: Client,
    results_url: String,
}

impl HttpResults {
    /// `server` はスキーム付きのベース URL（例: `http://localhost:5080`）
    pub fn new(server: &str) -> Self {
        Self {
            client: Client::new(),
            results_url: format!("{}/results", server.trim_end_matches('/')),
        }
    }

    pub fn results_url(&self) -> &str {
        &self.results_url
    }
}

#[async_trait]
impl ResultsApi for HttpResults {
    async fn send_result(&self, result: f32) -> Result<u64, CalcError> {
        debug!(url = %self.results_url, result, "sending result");
        let response = self
            .client
            .post(&self.results_url)
            .json(&ResultInfo { result })
            .send()
            .await
            .inspect_err(|e| warn!("POST failed: {}", e))?;

        if !response.status().is_success() {
            warn!("unexpected status on POST: {}", response.status());
            return Err(CalcError::Connection);
        }

        Ok(response.json::<u64>().await?)
    }

    async fn get_result(&self, id: i32) -> Result<f32, CalcError> {
        let url = format!("{}/{}", self.results_url, id);
        debug!(url = %url, "fetching result");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .inspect_err(|e| warn!("GET failed: {}", e))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(CalcError::UnknownResultId),
            status if status.is_success() => Ok(response.json::<f32>().await?),
            status => {
                warn!("unexpected status on GET: {}", status);
                Err(CalcError::Connection)
            }
        }
    }
}
