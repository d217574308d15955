#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use daly_games::controller::gateway::{FetchGateway, GameApi};
use daly_games::error::FetchError;
use reqwest::Url;
use serde_json::{Value, json};

pub const BASE_URL: &str = "https://api.example.com";

#[derive(Clone, Debug)]
pub enum Reply {
    Json(Value),
    NotFound,
    Fail,
}

/// In-memory upstream that records every url it is asked for.
#[derive(Default)]
pub struct StubApi {
    games: Mutex<HashMap<String, Reply>>,
    game_day: Mutex<Option<Reply>>,
    calls: Mutex<Vec<Url>>,
    delay: Option<Duration>,
}

impl StubApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn set_game(&self, id: &str, reply: Reply) {
        self.games.lock().unwrap().insert(id.to_string(), reply);
    }

    pub fn set_game_day(&self, reply: Reply) {
        *self.game_day.lock().unwrap() = Some(reply);
    }

    pub fn calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls_for(&self, api: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|url| query_value(url, "api").as_deref() == Some(api))
            .count()
    }

    fn reply_for(&self, url: &Url) -> Reply {
        match query_value(url, "api").as_deref() {
            Some("game") => {
                let id = query_value(url, "id").unwrap_or_default();
                self.games
                    .lock()
                    .unwrap()
                    .get(&id)
                    .cloned()
                    .unwrap_or(Reply::NotFound)
            }
            Some("game_day") => self.game_day.lock().unwrap().clone().unwrap_or(Reply::Fail),
            _ => Reply::Fail,
        }
    }
}

fn query_value(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

#[async_trait::async_trait]
impl GameApi for StubApi {
    async fn get_json(&self, url: &Url) -> Result<Option<Value>, FetchError> {
        self.calls.lock().unwrap().push(url.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match self.reply_for(url) {
            Reply::Json(Value::Null) | Reply::NotFound => Ok(None),
            Reply::Json(value) => Ok(Some(value)),
            Reply::Fail => Err(FetchError::new("stub upstream failure")),
        }
    }
}

pub fn gateway_with(stub: &Arc<StubApi>) -> FetchGateway {
    FetchGateway::new(BASE_URL, stub.clone() as Arc<dyn GameApi>)
}

/// The record from the "Foo" scenario: 150 char description, one platform, one category.
pub fn foo_game() -> Value {
    json!({
        "id": 42,
        "title": "Foo",
        "description": "A".repeat(150),
        "image_url": "https://sujeitoprogramador.com/x.png",
        "platforms": ["PC"],
        "categories": ["Action"],
        "release": "2020-01-01"
    })
}

pub fn game_of_the_day() -> Value {
    json!({
        "id": 7,
        "title": "Hollow Knight",
        "description": "Descend into Hallownest.",
        "image_url": "https://sujeitoprogramador.com/hk.png",
        "platforms": ["PC", "Switch"],
        "categories": ["Metroidvania"],
        "release": "2017-02-24"
    })
}
