use super::protocol::{DocumentAck, IndexAck, SearchResponse};
use anyhow::Result;
use serde_json::Value;

/// Handle to one Elasticsearch cluster.
///
/// Wraps a `reqwest::Client` and the cluster base URL. The handle is cheap to
/// construct and is passed explicitly into every operation that needs the
/// engine; it owns no other state. All calls are one blocking round trip from
/// the caller's point of view: the request is sent, the response awaited, and
/// any non-success status is returned as an error with no retry.
pub struct EsClient {
    http: reqwest::Client,
    base_url: String,
}

impl EsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Checks whether the named index exists (HEAD `/{index}`).
    pub async fn index_exists(&self, index: &str) -> Result<bool> {
        let response = self
            .http
            .head(format!("{}/{}", self.base_url, index))
            .send()
            .await?;

        match response.status() {
            reqwest::StatusCode::OK => Ok(true),
            reqwest::StatusCode::NOT_FOUND => Ok(false),
            status => Err(anyhow::anyhow!(
                "Existence check for `{}` failed: {}",
                index,
                status
            )),
        }
    }

    /// Creates an index with the given settings/mappings body (PUT `/{index}`).
    pub async fn create_index(&self, index: &str, body: &Value) -> Result<IndexAck> {
        let response = self
            .http
            .put(format!("{}/{}", self.base_url, index))
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "Index creation for `{}` failed: {} {}",
                index,
                response.status(),
                response.text().await.unwrap_or_default()
            ));
        }

        Ok(response.json().await?)
    }

    /// Stores one document under an explicit identifier
    /// (PUT `/{index}/_doc/{id}`). Re-indexing an existing identifier
    /// overwrites the stored document.
    pub async fn index_document(&self, index: &str, body: &Value, id: u64) -> Result<DocumentAck> {
        let response = self
            .http
            .put(format!("{}/{}/_doc/{}", self.base_url, index, id))
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "Indexing document {} into `{}` failed: {} {}",
                id,
                index,
                response.status(),
                response.text().await.unwrap_or_default()
            ));
        }

        Ok(response.json().await?)
    }

    /// Runs a search query (POST `/{index}/_search`).
    pub async fn search(&self, index: &str, query_body: &Value) -> Result<SearchResponse> {
        let response = self
            .http
            .post(format!("{}/{}/_search", self.base_url, index))
            .json(query_body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "Search on `{}` failed: {} {}",
                index,
                response.status(),
                response.text().await.unwrap_or_default()
            ));
        }

        Ok(response.json().await?)
    }

    /// Fetches the stored mapping of an index (GET `/{index}/_mapping`).
    ///
    /// Returns the `mappings` object for the index, i.e. the body under
    /// `{index}.mappings` in the engine response.
    pub async fn get_index_mapping(&self, index: &str) -> Result<Value> {
        let response = self
            .http
            .get(format!("{}/{}/_mapping", self.base_url, index))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "Mapping fetch for `{}` failed: {}",
                index,
                response.status()
            ));
        }

        let body: Value = response.json().await?;
        body.get(index)
            .and_then(|entry| entry.get("mappings"))
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Malformed mapping response for `{}`", index))
    }

    /// Deletes an index (DELETE `/{index}`).
    pub async fn delete_index(&self, index: &str) -> Result<IndexAck> {
        let response = self
            .http
            .delete(format!("{}/{}", self.base_url, index))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "Index deletion for `{}` failed: {}",
                index,
                response.status()
            ));
        }

        Ok(response.json().await?)
    }

    /// Lists index names matching a pattern (GET `/{pattern}`).
    ///
    /// The engine answers with one object keyed by index name; only the keys
    /// are returned here.
    pub async fn list_indices(&self, pattern: &str) -> Result<Vec<String>> {
        let response = self
            .http
            .get(format!("{}/{}", self.base_url, pattern))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "Index listing for `{}` failed: {}",
                pattern,
                response.status()
            ));
        }

        let body: Value = response.json().await?;
        match body {
            Value::Object(entries) => Ok(entries.keys().cloned().collect()),
            other => Err(anyhow::anyhow!(
                "Malformed index listing response: {}",
                other
            )),
        }
    }
}
