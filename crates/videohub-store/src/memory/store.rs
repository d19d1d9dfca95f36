//! In-memory video collection.

use tokio::sync::RwLock;
use tracing::debug;

use videohub_entity::video::{NewVideo, Video, VideoId};

/// Authoritative, insertion-ordered collection of videos.
///
/// The entity list and the id counter live behind one lock, so every
/// mutation and snapshot read is serialized.
#[derive(Debug)]
pub struct VideoStore {
    inner: RwLock<Inner>,
}

#[derive(Debug)]
struct Inner {
    videos: Vec<Video>,
    /// Next id to hand out. Starts at 1 and only ever grows.
    next_id: VideoId,
}

impl Default for VideoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                videos: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a store pre-populated with `drafts`, in order.
    pub fn with_videos(drafts: impl IntoIterator<Item = NewVideo>) -> Self {
        let mut inner = Inner {
            videos: Vec::new(),
            next_id: 1,
        };
        for draft in drafts {
            inner.push(draft);
        }
        Self {
            inner: RwLock::new(inner),
        }
    }

    /// Snapshot of every stored video.
    pub async fn list(&self) -> Vec<Video> {
        self.inner.read().await.videos.clone()
    }

    /// Find a video by id.
    pub async fn find_by_id(&self, id: VideoId) -> Option<Video> {
        self.inner
            .read()
            .await
            .videos
            .iter()
            .find(|v| v.id == id)
            .cloned()
    }

    /// Assign the next id to `draft`, append it, and return the stored video.
    pub async fn append(&self, draft: NewVideo) -> Video {
        let mut inner = self.inner.write().await;
        let video = inner.push(draft);
        debug!(id = video.id, "Appended video");
        video
    }

    /// Apply `change` to the video stored under `id` without releasing the
    /// write lock in between. Returns the updated video, or `None` if absent.
    ///
    /// The id is restored after `change` runs; it cannot be reassigned.
    pub async fn update<F>(&self, id: VideoId, change: F) -> Option<Video>
    where
        F: FnOnce(&mut Video),
    {
        let mut inner = self.inner.write().await;
        let slot = inner.videos.iter_mut().find(|v| v.id == id)?;
        change(slot);
        slot.id = id;
        debug!(id, "Updated video");
        Some(slot.clone())
    }

    /// Remove the video stored under `id`. Returns `false` if absent.
    pub async fn remove_by_id(&self, id: VideoId) -> bool {
        let mut inner = self.inner.write().await;
        let before = inner.videos.len();
        inner.videos.retain(|v| v.id != id);
        inner.videos.len() != before
    }

    /// Remove every video. The id counter is left untouched.
    pub async fn clear(&self) -> usize {
        let mut inner = self.inner.write().await;
        let removed = inner.videos.len();
        inner.videos.clear();
        removed
    }

    /// Number of stored videos.
    pub async fn count(&self) -> usize {
        self.inner.read().await.videos.len()
    }
}

impl Inner {
    fn push(&mut self, draft: NewVideo) -> Video {
        let video = Video::from_new(self.next_id, draft);
        self.next_id += 1;
        self.videos.push(video.clone());
        video
    }
}
