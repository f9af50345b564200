//! `BlogClient` - typed request/response marshalling for the blog API.

use reqwest::header::ACCEPT;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

use blog_shared::{
    ApiResponse, BlogResponse, CountResponse, CreateBlogRequest, DeletedBlog, ListResponse,
    UpdateBlogRequest,
};

use crate::error::ClientError;

/// Stateless client for the blog API. Cloning shares the connection pool.
#[derive(Debug, Clone)]
pub struct BlogClient {
    base_url: String,
    http: reqwest::Client,
}

impl BlogClient {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:4000";

    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Client for `BLOG_API_BASE_URL`, falling back to [`Self::DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        let base_url = std::env::var("BLOG_API_BASE_URL")
            .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string());
        Self::new(&base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /blogs
    pub async fn list(&self) -> Result<ListResponse<BlogResponse>, ClientError> {
        self.send(self.request(Method::GET, "/blogs")).await
    }

    /// GET /blogs/{id}
    pub async fn get(&self, id: i32) -> Result<ApiResponse<BlogResponse>, ClientError> {
        self.send(self.request(Method::GET, &format!("/blogs/{id}")))
            .await
    }

    /// POST /blogs
    pub async fn create(
        &self,
        payload: &CreateBlogRequest,
    ) -> Result<ApiResponse<BlogResponse>, ClientError> {
        self.send(self.request(Method::POST, "/blogs").json(payload))
            .await
    }

    /// PATCH /blogs/{id}
    pub async fn update(
        &self,
        id: i32,
        payload: &UpdateBlogRequest,
    ) -> Result<ApiResponse<BlogResponse>, ClientError> {
        self.send(
            self.request(Method::PATCH, &format!("/blogs/{id}"))
                .json(payload),
        )
        .await
    }

    /// DELETE /blogs/{id}
    pub async fn delete(&self, id: i32) -> Result<ApiResponse<DeletedBlog>, ClientError> {
        self.send(self.request(Method::DELETE, &format!("/blogs/{id}")))
            .await
    }

    /// DELETE /blogs
    pub async fn delete_all(&self) -> Result<CountResponse, ClientError> {
        self.send(self.request(Method::DELETE, "/blogs")).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, self.url(path))
            .header(ACCEPT, "application/json")
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ClientError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), %body, "Blog API request failed");
            return Err(ClientError::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

impl Default for BlogClient {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL)
    }
}
