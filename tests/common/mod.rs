#![allow(dead_code)]

use async_trait::async_trait;
use imdb_rating_api::prelude::*;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// What the stub source answers with.
#[derive(Clone)]
pub enum Behaviour {
    Found(SourceRating),
    Absent,
    Upstream,
}

/// In-memory [`RatingSource`] that counts calls.
pub struct StubSource {
    behaviour: Behaviour,
    title_calls: AtomicUsize,
    episode_calls: AtomicUsize,
}

impl StubSource {
    pub fn new(behaviour: Behaviour) -> Arc<Self> {
        Arc::new(Self {
            behaviour,
            title_calls: AtomicUsize::new(0),
            episode_calls: AtomicUsize::new(0),
        })
    }

    pub fn found(rating: f64) -> Arc<Self> {
        Self::new(Behaviour::Found(SourceRating {
            title: Some("Bleach".to_string()),
            rating,
            vote_count: Some(78_412),
        }))
    }

    pub fn title_calls(&self) -> usize {
        self.title_calls.load(Ordering::SeqCst)
    }

    pub fn episode_calls(&self) -> usize {
        self.episode_calls.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.title_calls() + self.episode_calls()
    }

    fn answer(&self) -> Result<Option<SourceRating>, AppError> {
        match &self.behaviour {
            Behaviour::Found(rating) => Ok(Some(rating.clone())),
            Behaviour::Absent => Ok(None),
            Behaviour::Upstream => Err(AppError::upstream(
                "Rating source request failed",
                json!({ "reason": "timeout" }),
            )),
        }
    }
}

#[async_trait]
impl RatingSource for StubSource {
    async fn title_rating(&self, _imdb_id: &ImdbId) -> Result<Option<SourceRating>, AppError> {
        self.title_calls.fetch_add(1, Ordering::SeqCst);
        self.answer()
    }

    async fn episode_rating(
        &self,
        _imdb_id: &ImdbId,
        _episode: EpisodeRef,
    ) -> Result<Option<SourceRating>, AppError> {
        self.episode_calls.fetch_add(1, Ordering::SeqCst);
        self.answer()
    }
}

pub fn create_test_state(source: Arc<StubSource>) -> AppState {
    AppState::new(source, ServiceInfo::new("test"))
}
