//! Stateless HTTP request builder and response parser for the hero API.
//!
//! # Design
//! `HeroClient` holds only the collection URL and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the round-trip in between.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Hero, NewHero};

/// Collection path used when none is configured.
pub const DEFAULT_COLLECTION_PATH: &str = "/api/heroes";

/// Synchronous, stateless client for the hero API.
#[derive(Debug, Clone)]
pub struct HeroClient {
    heroes_url: String,
}

impl HeroClient {
    /// Client for `base_url` using `DEFAULT_COLLECTION_PATH`.
    pub fn new(base_url: &str) -> Self {
        Self::with_collection_path(base_url, DEFAULT_COLLECTION_PATH)
    }

    pub fn with_collection_path(base_url: &str, collection_path: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        let path = collection_path.trim_matches('/');
        let heroes_url = if path.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{path}")
        };
        Self { heroes_url }
    }

    /// The collection endpoint every request is built against.
    pub fn heroes_url(&self) -> &str {
        &self.heroes_url
    }

    pub fn build_list_heroes(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.heroes_url.clone(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_hero(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/{id}", self.heroes_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_hero(&self, input: &NewHero) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.heroes_url.clone(),
            headers: json_headers(),
            body: Some(body),
        })
    }

    /// PUT goes to the collection; the server locates the hero by the body's id.
    pub fn build_update_hero(&self, hero: &Hero) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(hero).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.heroes_url.clone(),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_delete_hero(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/{id}", self.heroes_url),
            headers: json_headers(),
            body: None,
        }
    }

    /// The term is embedded as-is; no percent-encoding is applied.
    pub fn build_search_heroes(&self, term: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/?name={term}", self.heroes_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_heroes(&self, response: HttpResponse) -> Result<Vec<Hero>, ApiError> {
        parse_json(response)
    }

    pub fn parse_get_hero(&self, response: HttpResponse) -> Result<Hero, ApiError> {
        parse_json(response)
    }

    pub fn parse_create_hero(&self, response: HttpResponse) -> Result<Hero, ApiError> {
        parse_json(response)
    }

    pub fn parse_update_hero(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_delete_hero(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_search_heroes(&self, response: HttpResponse) -> Result<Vec<Hero>, ApiError> {
        parse_json(response)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
