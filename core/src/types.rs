//! Domain DTOs for the hero API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently
//! so the client never links against Axum. Integration tests catch any schema
//! drift between the two crates.

use serde::{Deserialize, Serialize};

/// A single hero returned by the API. Identity is `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hero {
    pub id: u64,
    pub name: String,
}

/// Request payload for creating a hero. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewHero {
    pub name: String,
}

impl NewHero {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Target of a delete: either a bare id or a hero whose id is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeroRef {
    Id(u64),
    Hero(Hero),
}

impl HeroRef {
    pub fn id(&self) -> u64 {
        match self {
            HeroRef::Id(id) => *id,
            HeroRef::Hero(hero) => hero.id,
        }
    }
}

impl From<u64> for HeroRef {
    fn from(id: u64) -> Self {
        HeroRef::Id(id)
    }
}

impl From<Hero> for HeroRef {
    fn from(hero: Hero) -> Self {
        HeroRef::Hero(hero)
    }
}

impl From<&Hero> for HeroRef {
    fn from(hero: &Hero) -> Self {
        HeroRef::Hero(hero.clone())
    }
}
