use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

/// Id handed to the first hero created in an empty collection.
const FIRST_ID: u64 = 11;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: u64,
    pub name: String,
}

#[derive(Deserialize)]
pub struct NewHero {
    pub name: String,
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
}

pub type Db = Arc<RwLock<BTreeMap<u64, Hero>>>;

/// The heroes the tutorial backend starts with.
pub fn seed_heroes() -> Vec<Hero> {
    [
        (12, "Dr. Nice"),
        (13, "Bombasto"),
        (14, "Celeritas"),
        (15, "Magneta"),
        (16, "RubberMan"),
        (17, "Dynama"),
        (18, "Dr. IQ"),
        (19, "Magma"),
        (20, "Tornado"),
        (21, "Dr. Strange"),
    ]
    .into_iter()
    .map(|(id, name)| Hero {
        id,
        name: name.to_string(),
    })
    .collect()
}

/// Router over an empty collection.
pub fn app() -> Router {
    app_with(Vec::new())
}

/// Router whose collection starts with `heroes`.
pub fn app_with(heroes: Vec<Hero>) -> Router {
    let db: Db = Arc::new(RwLock::new(heroes.into_iter().map(|h| (h.id, h)).collect()));
    Router::new()
        .route(
            "/api/heroes",
            get(list_heroes).post(create_hero).put(update_hero),
        )
        .route("/api/heroes/", get(list_heroes))
        .route("/api/heroes/{id}", get(get_hero).delete(delete_hero))
        .with_state(db)
}

/// Serve the seeded router until the listener fails.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(seed_heroes())).await
}

async fn list_heroes(
    State(db): State<Db>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Hero>> {
    let heroes = db.read().await;
    let needle = params.name.map(|n| n.to_lowercase());
    Json(
        heroes
            .values()
            .filter(|h| match &needle {
                Some(needle) => h.name.to_lowercase().contains(needle.as_str()),
                None => true,
            })
            .cloned()
            .collect(),
    )
}

async fn create_hero(
    State(db): State<Db>,
    Json(input): Json<NewHero>,
) -> (StatusCode, Json<Hero>) {
    let mut heroes = db.write().await;
    let id = heroes.keys().next_back().map_or(FIRST_ID, |max| max + 1);
    let hero = Hero {
        id,
        name: input.name,
    };
    heroes.insert(id, hero.clone());
    tracing::info!(id, name = %hero.name, "hero created");
    (StatusCode::CREATED, Json(hero))
}

async fn get_hero(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Hero>, StatusCode> {
    let heroes = db.read().await;
    heroes.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_hero(State(db): State<Db>, Json(input): Json<Hero>) -> StatusCode {
    let mut heroes = db.write().await;
    match heroes.get_mut(&input.id) {
        Some(hero) => {
            tracing::info!(id = input.id, name = %input.name, "hero updated");
            hero.name = input.name;
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn delete_hero(State(db): State<Db>, Path(id): Path<u64>) -> StatusCode {
    let mut heroes = db.write().await;
    match heroes.remove(&id) {
        Some(_) => {
            tracing::info!(id, "hero deleted");
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}
