use crate::domain::ports::{Document, DocumentStore, MEMBERSHIP_QUERY_CAP};
use crate::utils::error::{Result, RosterError};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::collections::HashMap;
use std::time::Duration;

/// Document store backed by a REST document API.
///
/// Point lookup:      GET {base}/{collection}/{id}
/// Membership query:  GET {base}/{collection}?field={field}&values=a,b,c
/// Nested lookup:     GET {base}/{collection}/{id}/{child_path}
///
/// 404 means "no such document" for the lookups; every other non-2xx
/// status is a store failure.
#[derive(Debug, Clone)]
pub struct HttpDocumentStore {
    base_url: String,
    client: Client,
}

impl HttpDocumentStore {
    pub fn new(base_url: String, request_timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(request_timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn get_optional(&self, url: &str) -> Result<Option<Document>> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let body: RawDocument = response.json().await?;
                Ok(Some(body.into()))
            }
            status => Err(RosterError::store_query(format!(
                "{} returned {}",
                url, status
            ))),
        }
    }
}

#[derive(serde::Deserialize)]
struct RawDocument {
    id: String,
    #[serde(flatten)]
    data: HashMap<String, serde_json::Value>,
}

impl From<RawDocument> for Document {
    fn from(raw: RawDocument) -> Self {
        let mut data = raw.data;
        // Student documents carry their id as a field too; keep it visible
        // to decoders either way.
        data.entry("id".to_string())
            .or_insert_with(|| serde_json::Value::String(raw.id.clone()));
        Document { id: raw.id, data }
    }
}

#[async_trait]
impl DocumentStore for HttpDocumentStore {
    async fn get_document(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        let url = format!("{}/{}/{}", self.base_url, collection, id);
        self.get_optional(&url).await
    }

    async fn query_by_field_membership(
        &self,
        collection: &str,
        field: &str,
        values: &[String],
    ) -> Result<Vec<Document>> {
        if values.len() > MEMBERSHIP_QUERY_CAP {
            return Err(RosterError::invalid_configuration(format!(
                "membership query asked for {} values, store allows {}",
                values.len(),
                MEMBERSHIP_QUERY_CAP
            )));
        }

        let url = format!("{}/{}", self.base_url, collection);
        tracing::debug!("GET {} ({} in [{} values])", url, field, values.len());

        let joined = values.join(",");
        let response = self
            .client
            .get(&url)
            .query(&[("field", field), ("values", joined.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RosterError::store_query(format!(
                "{} returned {}",
                url, status
            )));
        }

        let body: Vec<RawDocument> = response.json().await?;
        Ok(body.into_iter().map(Document::from).collect())
    }

    async fn get_nested_document(
        &self,
        parent_collection: &str,
        parent_id: &str,
        child_path: &str,
    ) -> Result<Option<Document>> {
        let url = format!(
            "{}/{}/{}/{}",
            self.base_url, parent_collection, parent_id, child_path
        );
        self.get_optional(&url).await
    }
}
