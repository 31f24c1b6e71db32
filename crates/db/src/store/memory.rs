//! In-process [`DocumentStore`] for local development and tests.
//!
//! All state sits behind one `RwLock`; every mutation takes the write lock
//! for its whole read-check-write sequence, which is what makes the quota
//! gate atomic here.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::Utc;
use epicdict_core::plans::Plan;
use epicdict_core::types::DbId;
use tokio::sync::RwLock;

use super::{DocumentStore, StoreResult};
use crate::models::character::{AddCharacterOutcome, Character, CreateCharacter};
use crate::models::dictionary::{CreateDictionary, Dictionary};
use crate::models::user::{RegisterUser, User};

#[derive(Default)]
struct Inner {
    users: HashMap<String, User>,
    dictionaries: BTreeMap<DbId, Dictionary>,
    characters: BTreeMap<DbId, Character>,
    last_dictionary_id: DbId,
    last_character_id: DbId,
}

impl Inner {
    fn owned_dictionary_mut(&mut self, owner_uid: &str, id: DbId) -> Option<&mut Dictionary> {
        self.dictionaries
            .get_mut(&id)
            .filter(|d| d.owner_uid == owner_uid)
    }

    fn owns(&self, owner_uid: &str, dictionary_id: DbId) -> bool {
        self.dictionaries
            .get(&dictionary_id)
            .is_some_and(|d| d.owner_uid == owner_uid)
    }
}

/// Map-backed store. Ids are allocated sequentially from 1.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Change a user's plan. Returns `false` if the profile does not exist.
    pub async fn set_role(&self, uid: &str, plan: Plan) -> bool {
        let mut inner = self.inner.write().await;
        match inner.users.get_mut(uid) {
            Some(user) => {
                user.role = plan.as_str().to_string();
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn register_user(&self, input: &RegisterUser) -> StoreResult<User> {
        let mut inner = self.inner.write().await;
        let user = inner
            .users
            .entry(input.uid.clone())
            .and_modify(|existing| {
                existing.email = input.email.clone();
                existing.display_name = input.display_name.clone();
            })
            .or_insert_with(|| User {
                uid: input.uid.clone(),
                email: input.email.clone(),
                display_name: input.display_name.clone(),
                role: Plan::Free.as_str().to_string(),
                created_at: Utc::now(),
            });
        Ok(user.clone())
    }

    async fn find_user(&self, uid: &str) -> StoreResult<Option<User>> {
        Ok(self.inner.read().await.users.get(uid).cloned())
    }

    async fn create_dictionary(
        &self,
        owner_uid: &str,
        input: &CreateDictionary,
        max_characters: i32,
    ) -> StoreResult<Dictionary> {
        let mut inner = self.inner.write().await;
        inner.last_dictionary_id += 1;
        let dictionary = Dictionary {
            id: inner.last_dictionary_id,
            owner_uid: owner_uid.to_string(),
            title: input.title.clone(),
            description: input.description.clone(),
            genre: input.genre.clone(),
            tags: input.tags.clone(),
            max_characters,
            character_count: 0,
            created_at: Utc::now(),
        };
        inner.dictionaries.insert(dictionary.id, dictionary.clone());
        Ok(dictionary)
    }

    async fn list_dictionaries(&self, owner_uid: &str) -> StoreResult<Vec<Dictionary>> {
        let inner = self.inner.read().await;
        Ok(inner
            .dictionaries
            .values()
            .filter(|d| d.owner_uid == owner_uid)
            .cloned()
            .collect())
    }

    async fn find_dictionary(&self, owner_uid: &str, id: DbId) -> StoreResult<Option<Dictionary>> {
        let inner = self.inner.read().await;
        Ok(inner
            .dictionaries
            .get(&id)
            .filter(|d| d.owner_uid == owner_uid)
            .cloned())
    }

    async fn delete_dictionary(&self, owner_uid: &str, id: DbId) -> StoreResult<bool> {
        let mut inner = self.inner.write().await;
        if !inner.owns(owner_uid, id) {
            return Ok(false);
        }
        inner.dictionaries.remove(&id);
        inner.characters.retain(|_, c| c.dictionary_id != id);
        Ok(true)
    }

    async fn add_character_within_quota(
        &self,
        owner_uid: &str,
        dictionary_id: DbId,
        input: &CreateCharacter,
    ) -> StoreResult<AddCharacterOutcome> {
        let mut inner = self.inner.write().await;

        let Some(dictionary) = inner.owned_dictionary_mut(owner_uid, dictionary_id) else {
            return Ok(AddCharacterOutcome::DictionaryNotFound);
        };
        if dictionary.is_full() {
            return Ok(AddCharacterOutcome::LimitReached {
                max_characters: dictionary.max_characters,
            });
        }
        dictionary.character_count += 1;

        inner.last_character_id += 1;
        let character = Character {
            id: inner.last_character_id,
            dictionary_id,
            name: input.name.clone(),
            age: input.age,
            gender: input.gender.clone(),
            race: input.race.clone(),
            occupation: input.occupation.clone(),
            alignment: input.alignment.clone(),
            physical_description: input.physical_description.clone(),
            personality_traits: input.personality_traits.clone(),
            powers: input.powers.clone(),
            backstory: input.backstory.clone(),
            created_at: Utc::now(),
        };
        inner.characters.insert(character.id, character.clone());
        Ok(AddCharacterOutcome::Added(character))
    }

    async fn list_characters(
        &self,
        owner_uid: &str,
        dictionary_id: DbId,
    ) -> StoreResult<Vec<Character>> {
        let inner = self.inner.read().await;
        if !inner.owns(owner_uid, dictionary_id) {
            return Ok(Vec::new());
        }
        Ok(inner
            .characters
            .values()
            .filter(|c| c.dictionary_id == dictionary_id)
            .cloned()
            .collect())
    }

    async fn find_character(
        &self,
        owner_uid: &str,
        dictionary_id: DbId,
        id: DbId,
    ) -> StoreResult<Option<Character>> {
        let inner = self.inner.read().await;
        if !inner.owns(owner_uid, dictionary_id) {
            return Ok(None);
        }
        Ok(inner
            .characters
            .get(&id)
            .filter(|c| c.dictionary_id == dictionary_id)
            .cloned())
    }

    async fn delete_character(
        &self,
        owner_uid: &str,
        dictionary_id: DbId,
        id: DbId,
    ) -> StoreResult<bool> {
        let mut inner = self.inner.write().await;
        if !inner.owns(owner_uid, dictionary_id) {
            return Ok(false);
        }
        let belongs = inner
            .characters
            .get(&id)
            .is_some_and(|c| c.dictionary_id == dictionary_id);
        if !belongs {
            return Ok(false);
        }
        inner.characters.remove(&id);
        if let Some(dictionary) = inner.owned_dictionary_mut(owner_uid, dictionary_id) {
            dictionary.character_count = (dictionary.character_count - 1).max(0);
        }
        Ok(true)
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use assert_matches::assert_matches;

    use super::*;

    fn registration(uid: &str) -> RegisterUser {
        RegisterUser {
            uid: uid.to_string(),
            email: Some(format!("{uid}@example.com")),
            display_name: Some(uid.to_uppercase()),
        }
    }

    fn heroes() -> CreateDictionary {
        CreateDictionary {
            title: "Heroes".to_string(),
            genre: "Fantasy".to_string(),
            ..Default::default()
        }
    }

    fn named(name: &str) -> CreateCharacter {
        CreateCharacter {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn register_creates_free_profile() {
        let store = MemoryStore::new();
        let user = store.register_user(&registration("alice")).await.unwrap();
        assert_eq!(user.role, "free");
        assert_eq!(user.email.as_deref(), Some("alice@example.com"));
    }

    #[tokio::test]
    async fn reregister_keeps_role_and_refreshes_profile() {
        let store = MemoryStore::new();
        let first = store.register_user(&registration("alice")).await.unwrap();
        assert!(store.set_role("alice", Plan::Pro).await);

        let mut again = registration("alice");
        again.display_name = Some("Alice Liddell".to_string());
        let second = store.register_user(&again).await.unwrap();

        assert_eq!(second.plan(), Plan::Pro);
        assert_eq!(second.display_name.as_deref(), Some("Alice Liddell"));
        assert_eq!(second.created_at, first.created_at);
    }

    #[tokio::test]
    async fn set_role_on_missing_user_is_false() {
        let store = MemoryStore::new();
        assert!(!store.set_role("ghost", Plan::Ultra).await);
    }

    #[tokio::test]
    async fn dictionaries_are_scoped_to_owner() {
        let store = MemoryStore::new();
        let dict = store.create_dictionary("alice", &heroes(), 20).await.unwrap();

        assert!(store.find_dictionary("bob", dict.id).await.unwrap().is_none());
        assert!(store.list_dictionaries("bob").await.unwrap().is_empty());
        assert_eq!(store.list_dictionaries("alice").await.unwrap().len(), 1);
        assert_matches!(
            store
                .add_character_within_quota("bob", dict.id, &named("Mallory"))
                .await
                .unwrap(),
            AddCharacterOutcome::DictionaryNotFound
        );
    }

    #[tokio::test]
    async fn quota_gate_stops_at_limit() {
        let store = MemoryStore::new();
        let dict = store.create_dictionary("alice", &heroes(), 2).await.unwrap();

        for name in ["Frodo", "Sam"] {
            assert_matches!(
                store
                    .add_character_within_quota("alice", dict.id, &named(name))
                    .await
                    .unwrap(),
                AddCharacterOutcome::Added(_)
            );
        }
        assert_matches!(
            store
                .add_character_within_quota("alice", dict.id, &named("Merry"))
                .await
                .unwrap(),
            AddCharacterOutcome::LimitReached { max_characters: 2 }
        );

        let dict = store.find_dictionary("alice", dict.id).await.unwrap().unwrap();
        assert_eq!(dict.character_count, 2);
        assert_eq!(store.list_characters("alice", dict.id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn concurrent_creates_never_exceed_quota() {
        let store = Arc::new(MemoryStore::new());
        let dict = store.create_dictionary("alice", &heroes(), 5).await.unwrap();

        let attempts = (0..20).map(|i| {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                store
                    .add_character_within_quota("alice", dict.id, &named(&format!("Orc {i}")))
                    .await
                    .unwrap()
            })
        });
        let outcomes = futures::future::join_all(attempts).await;
        let added = outcomes
            .into_iter()
            .filter(|o| matches!(o, Ok(AddCharacterOutcome::Added(_))))
            .count();

        assert_eq!(added, 5);
        let dict = store.find_dictionary("alice", dict.id).await.unwrap().unwrap();
        assert_eq!(dict.character_count, 5);
        assert_eq!(store.list_characters("alice", dict.id).await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn deleting_a_character_frees_a_slot() {
        let store = MemoryStore::new();
        let dict = store.create_dictionary("alice", &heroes(), 1).await.unwrap();
        let AddCharacterOutcome::Added(frodo) = store
            .add_character_within_quota("alice", dict.id, &named("Frodo"))
            .await
            .unwrap()
        else {
            panic!("first insert should succeed");
        };

        assert!(store.delete_character("alice", dict.id, frodo.id).await.unwrap());
        assert!(!store.delete_character("alice", dict.id, frodo.id).await.unwrap());

        let dict = store.find_dictionary("alice", dict.id).await.unwrap().unwrap();
        assert_eq!(dict.character_count, 0);
        assert_matches!(
            store
                .add_character_within_quota("alice", dict.id, &named("Sam"))
                .await
                .unwrap(),
            AddCharacterOutcome::Added(_)
        );
    }

    #[tokio::test]
    async fn deleting_a_dictionary_drops_its_characters() {
        let store = MemoryStore::new();
        let dict = store.create_dictionary("alice", &heroes(), 5).await.unwrap();
        store
            .add_character_within_quota("alice", dict.id, &named("Frodo"))
            .await
            .unwrap();

        assert!(!store.delete_dictionary("bob", dict.id).await.unwrap());
        assert!(store.delete_dictionary("alice", dict.id).await.unwrap());
        assert!(store.list_characters("alice", dict.id).await.unwrap().is_empty());
        assert!(store.find_dictionary("alice", dict.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn listing_characters_of_missing_dictionary_is_empty() {
        let store = MemoryStore::new();
        assert!(store.list_characters("alice", 999).await.unwrap().is_empty());
    }
}
