//! Fault-tolerant hero data access.
//!
//! # Design
//! `HeroService` drives `HeroClient` through a `Transport` and reports every
//! outcome to a `Logger`. No operation returns an error: failures are traced,
//! logged to the feed and replaced by a fallback (an empty list or `None`),
//! so an empty result is ambiguous between "no data" and "request failed".
//! Every method is an `async fn`; nothing is sent until the future is polled,
//! and dropping it abandons at most the one in-flight request.

use crate::client::HeroClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::messages::Logger;
use crate::transport::Transport;
use crate::types::{Hero, HeroRef, NewHero};

/// Prefix attached to every message this service adds to the feed.
pub const SERVICE_NAME: &str = "HeroService";

pub struct HeroService<T, L> {
    client: HeroClient,
    transport: T,
    logger: L,
}

impl<T: Transport, L: Logger> HeroService<T, L> {
    pub fn new(client: HeroClient, transport: T, logger: L) -> Self {
        Self {
            client,
            transport,
            logger,
        }
    }

    pub fn client(&self) -> &HeroClient {
        &self.client
    }

    pub fn logger(&self) -> &L {
        &self.logger
    }

    /// GET all heroes. Falls back to an empty list.
    pub async fn list_heroes(&self) -> Vec<Hero> {
        self.fetch(Ok(self.client.build_list_heroes()), HeroClient::parse_list_heroes)
            .await
            .inspect(|_| self.log("fetched heroes"))
            .unwrap_or_else(self.handle_error("list_heroes", Vec::new()))
    }

    /// GET one hero by id. `None` on failure, including 404.
    pub async fn get_hero(&self, id: u64) -> Option<Hero> {
        self.fetch(Ok(self.client.build_get_hero(id)), HeroClient::parse_get_hero)
            .await
            .inspect(|_| self.log(format!("fetched hero id={id}")))
            .map(Some)
            .unwrap_or_else(self.handle_error(&format!("get_hero id={id}"), None))
    }

    /// POST a new hero and return it with the server-assigned id.
    pub async fn create_hero(&self, hero: &NewHero) -> Option<Hero> {
        self.fetch(self.client.build_create_hero(hero), HeroClient::parse_create_hero)
            .await
            .inspect(|created| self.log(format!("added hero w/ id={}", created.id)))
            .map(Some)
            .unwrap_or_else(self.handle_error("create_hero", None))
    }

    /// PUT the hero to the collection. `Some(())` once the server accepts it.
    pub async fn update_hero(&self, hero: &Hero) -> Option<()> {
        self.fetch(self.client.build_update_hero(hero), HeroClient::parse_update_hero)
            .await
            .inspect(|_| self.log(format!("updated hero id={}", hero.id)))
            .map(Some)
            .unwrap_or_else(self.handle_error("update_hero", None))
    }

    /// DELETE by id; accepts a bare id or a `Hero`.
    pub async fn delete_hero(&self, hero: impl Into<HeroRef>) -> Option<()> {
        let id = hero.into().id();
        self.fetch(Ok(self.client.build_delete_hero(id)), HeroClient::parse_delete_hero)
            .await
            .inspect(|_| self.log(format!("deleted hero id={id}")))
            .map(Some)
            .unwrap_or_else(self.handle_error("delete_hero", None))
    }

    /// GET heroes whose name matches `term`. A blank term short-circuits to
    /// an empty list without touching the transport or the feed.
    pub async fn search_heroes(&self, term: &str) -> Vec<Hero> {
        if term.trim().is_empty() {
            return Vec::new();
        }
        self.fetch(
            Ok(self.client.build_search_heroes(term)),
            HeroClient::parse_search_heroes,
        )
        .await
        .inspect(|heroes| {
            if heroes.is_empty() {
                self.log(format!("no heroes matching \"{term}\""));
            } else {
                self.log(format!("found heroes matching \"{term}\""));
            }
        })
        .unwrap_or_else(self.handle_error("search_heroes", Vec::new()))
    }

    async fn fetch<R, P>(&self, request: Result<HttpRequest, ApiError>, parse: P) -> Result<R, ApiError>
    where
        P: FnOnce(&HeroClient, HttpResponse) -> Result<R, ApiError>,
    {
        let request = request?;
        tracing::debug!(method = %request.method, path = %request.path, "sending hero request");
        let response = self.transport.execute(request).await?;
        parse(&self.client, response)
    }

    /// Failure policy shared by every operation: trace the error, add
    /// `"{operation} failed: {error}"` to the feed and yield `fallback`.
    fn handle_error<'a, R: 'a>(
        &'a self,
        operation: &'a str,
        fallback: R,
    ) -> impl FnOnce(ApiError) -> R + 'a {
        move |error| {
            tracing::error!(operation, error = %error, "hero request failed");
            self.log(format!("{operation} failed: {error}"));
            fallback
        }
    }

    fn log(&self, message: impl AsRef<str>) {
        self.logger.add(format!("{SERVICE_NAME}: {}", message.as_ref()));
    }
}
