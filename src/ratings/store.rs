use crate::ratings::model::{PlayerRating, Rating, ValidationError};
use itertools::Itertools;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub(crate) enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("ratings file {} does not exist", .path.display())]
    Missing { path: PathBuf },
    #[error("ratings file {} is not valid: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("couldn't access ratings file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl StoreError {
    /// Whether the backing file couldn't be used at all, as opposed to a bad argument.
    pub(crate) fn is_unavailable(&self) -> bool {
        !matches!(self, StoreError::Validation(_))
    }

    pub(crate) fn user_message(&self) -> String {
        match self {
            StoreError::Validation(err) => err.to_string(),
            _ => format!("Error loading ratings: {self}"),
        }
    }
}

/// Flat JSON file of [`PlayerRating`]s.
///
/// Every operation reads the whole file and every mutation rewrites it. All access goes through
/// one lock so concurrent commands can't interleave a read-modify-write.
pub(crate) struct RatingStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl RatingStore {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) async fn load_all(&self) -> Result<Vec<PlayerRating>, StoreError> {
        let _guard = self.lock.lock().await;
        self.read().await
    }

    pub(crate) async fn get_rating(&self, id: u64) -> Result<Option<PlayerRating>, StoreError> {
        Ok(self
            .load_all()
            .await?
            .into_iter()
            .find(|player| player.id == id))
    }

    pub(crate) async fn leaderboard(&self, limit: usize) -> Result<Vec<PlayerRating>, StoreError> {
        Ok(rank(self.load_all().await?, limit))
    }

    /// Rates a player, adding them if they weren't rated before.
    ///
    /// Out of range ratings are rejected before the file is touched. A missing file is treated as
    /// an empty store; a malformed one is left alone and reported.
    pub(crate) async fn set_rating(
        &self,
        id: u64,
        name: impl Into<String>,
        rating: i64,
    ) -> Result<PlayerRating, StoreError> {
        let rating = Rating::try_from(rating)?;
        let name = name.into();

        let _guard = self.lock.lock().await;
        let mut players = match self.read().await {
            Ok(players) => players,
            Err(StoreError::Missing { .. }) => {
                info!(path = %self.path.display(), "ratings file missing, starting a new one");
                Vec::new()
            }
            Err(err) => return Err(err),
        };

        let updated = match players.iter_mut().find(|player| player.id == id) {
            Some(player) => {
                player.name = name;
                player.rating = rating;
                player.clone()
            }
            None => {
                let player = PlayerRating { id, name, rating };
                players.push(player.clone());
                player
            }
        };

        self.write(&players).await?;
        debug!(id, rating = %rating, total = players.len(), "saved rating");
        Ok(updated)
    }

    async fn read(&self) -> Result<Vec<PlayerRating>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(StoreError::Missing {
                    path: self.path.clone(),
                });
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    async fn write(&self, players: &[PlayerRating]) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        players
            .serialize(&mut ser)
            .map_err(|source| StoreError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
        }
        tokio::fs::write(&self.path, buf).await.map_err(io_err)
    }
}

/// Orders players by rating, highest first, then by name ignoring case.
pub(crate) fn rank(players: Vec<PlayerRating>, limit: usize) -> Vec<PlayerRating> {
    players
        .into_iter()
        .sorted_by(|a, b| {
            b.rating
                .cmp(&a.rating)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        })
        .take(limit)
        .collect_vec()
}
