//! In-memory repositories - the default backend when no database is
//! configured. Data is lost on process restart.
//!
//! The author store enforces the same name uniqueness constraint as the
//! database unique index, at the storage boundary.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{Author, Post};
use quill_core::error::RepoError;
use quill_core::ports::{AuthorRepository, BaseRepository, PostRepository};

/// In-memory author repository using a HashMap with async RwLock.
pub struct InMemoryAuthorRepository {
    store: RwLock<HashMap<Uuid, Author>>,
}

impl InMemoryAuthorRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryAuthorRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn name_taken(store: &HashMap<Uuid, Author>, name: &str, own_id: Uuid) -> bool {
    store
        .values()
        .any(|author| author.id != own_id && author.name == name)
}

#[async_trait]
impl BaseRepository<Author, Uuid> for InMemoryAuthorRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Author>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn insert(&self, author: Author) -> Result<Author, RepoError> {
        let mut store = self.store.write().await;

        if name_taken(&store, &author.name, author.id) {
            return Err(RepoError::Constraint(
                "unique constraint violated".to_string(),
            ));
        }
        if store.contains_key(&author.id) {
            return Err(RepoError::Constraint("duplicate primary key".to_string()));
        }

        store.insert(author.id, author.clone());
        Ok(author)
    }

    async fn update(&self, author: Author) -> Result<Author, RepoError> {
        let mut store = self.store.write().await;

        if !store.contains_key(&author.id) {
            return Err(RepoError::NotFound);
        }
        if name_taken(&store, &author.name, author.id) {
            return Err(RepoError::Constraint(
                "unique constraint violated".to_string(),
            ));
        }

        store.insert(author.id, author.clone());
        Ok(author)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Author>, RepoError> {
        let store = self.store.read().await;
        Ok(store.values().find(|author| author.name == name).cloned())
    }

    async fn list_names(&self) -> Result<Vec<String>, RepoError> {
        let store = self.store.read().await;
        Ok(store.values().map(|author| author.name.clone()).collect())
    }
}

/// In-memory post repository using a HashMap with async RwLock.
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;

        if store.contains_key(&post.id) {
            return Err(RepoError::Constraint("duplicate primary key".to_string()));
        }

        store.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;

        if !store.contains_key(&post.id) {
            return Err(RepoError::NotFound);
        }

        store.insert(post.id, post.clone());
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_category(&self, category: &str) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store
            .values()
            .filter(|post| post.category == category)
            .cloned()
            .collect())
    }
}
