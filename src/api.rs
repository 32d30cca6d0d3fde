use anyhow::{Context, Result};
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Campsite {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub elevation: u32,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u32,
    pub campsite_id: u32,
    pub rating: u8,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Promotion {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Partner {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub description: String,
}

/// Body sent to create a comment. `date` is stamped when the request is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub campsite_id: u32,
    pub rating: u8,
    pub author: String,
    pub text: String,
    pub date: String,
}

impl NewComment {
    pub fn now(campsite_id: u32, rating: u8, author: String, text: String) -> Self {
        Self {
            campsite_id,
            rating,
            author,
            text,
            date: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        }
    }
}

/// Join the backend base URL with a relative resource path
pub fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[derive(Clone)]
pub struct CampsiteClient {
    base_url: String,
    client: Client,
}

impl CampsiteClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_collection<T: DeserializeOwned>(&self, resource: &str) -> Result<Vec<T>> {
        let url = join_url(&self.base_url, resource);
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", resource))?
            .error_for_status()
            .with_context(|| format!("Server rejected request for {}", resource))?;

        let items: Vec<T> = response
            .json()
            .await
            .with_context(|| format!("Failed to parse {}", resource))?;

        Ok(items)
    }

    pub async fn get_campsites(&self) -> Result<Vec<Campsite>> {
        self.get_collection("campsites").await
    }

    pub async fn get_comments(&self) -> Result<Vec<Comment>> {
        self.get_collection("comments").await
    }

    pub async fn get_promotions(&self) -> Result<Vec<Promotion>> {
        self.get_collection("promotions").await
    }

    pub async fn get_partners(&self) -> Result<Vec<Partner>> {
        self.get_collection("partners").await
    }

    pub async fn post_comment(&self, comment: &NewComment) -> Result<Comment> {
        let url = join_url(&self.base_url, "comments");
        log::debug!("POST {} campsite={}", url, comment.campsite_id);

        let response = self
            .client
            .post(&url)
            .json(comment)
            .send()
            .await
            .context("Failed to post comment")?
            .error_for_status()
            .context("Server rejected comment")?;

        let created: Comment = response
            .json()
            .await
            .context("Failed to parse created comment")?;

        Ok(created)
    }
}
