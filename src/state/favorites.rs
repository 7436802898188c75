/// Favorites persistence
///
/// The favorites list is one JSON array stored under a single key.
/// Every mutation re-reads the whole list and writes it back whole.

use tracing::{debug, warn};

use super::data::Cocktail;
use super::storage::{Storage, StorageError};

/// Storage key holding the favorites blob
pub const FAVORITES_KEY: &str = "favorites";

/// Whole-list access to the persisted favorites
pub trait FavoritesStore {
    /// Read every favorite; a missing or unreadable blob is an empty list
    fn load(&self) -> Result<Vec<Cocktail>, StorageError>;

    /// Replace the stored list
    fn save(&mut self, favorites: &[Cocktail]) -> Result<(), StorageError>;
}

/// Favorites kept in the key-value storage
#[derive(Debug)]
pub struct StorageFavorites {
    storage: Storage,
}

impl StorageFavorites {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }
}

impl FavoritesStore for StorageFavorites {
    fn load(&self) -> Result<Vec<Cocktail>, StorageError> {
        let Some(blob) = self.storage.get_item(FAVORITES_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&blob) {
            Ok(favorites) => Ok(favorites),
            Err(e) => {
                warn!("⚠️  Ignoring unreadable favorites blob: {}", e);
                Ok(Vec::new())
            }
        }
    }

    fn save(&mut self, favorites: &[Cocktail]) -> Result<(), StorageError> {
        let blob = serde_json::to_string(favorites)?;
        self.storage.set_item(FAVORITES_KEY, &blob)?;
        debug!("Saved {} favorites", favorites.len());
        Ok(())
    }
}

/// Favorites held in memory only
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct MemoryFavorites {
    favorites: Vec<Cocktail>,
}

#[cfg(test)]
impl MemoryFavorites {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl FavoritesStore for MemoryFavorites {
    fn load(&self) -> Result<Vec<Cocktail>, StorageError> {
        Ok(self.favorites.clone())
    }

    fn save(&mut self, favorites: &[Cocktail]) -> Result<(), StorageError> {
        self.favorites = favorites.to_vec();
        Ok(())
    }
}

/// Result of adding a favorite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

impl AddOutcome {
    /// The notice shown to the user for this outcome
    pub fn notice(self, name: &str) -> String {
        match self {
            AddOutcome::Added => format!("{} added to favorites!", name),
            AddOutcome::AlreadyPresent => format!("{} is already in favorites.", name),
        }
    }
}

/// Notice shown after any removal
pub const REMOVED_NOTICE: &str = "Removed from favorites.";

/// Append `cocktail` unless a favorite with the same id is already stored
pub fn add_favorite(
    store: &mut dyn FavoritesStore,
    cocktail: &Cocktail,
) -> Result<AddOutcome, StorageError> {
    let mut favorites = store.load()?;

    if favorites.iter().any(|fav| fav.id == cocktail.id) {
        return Ok(AddOutcome::AlreadyPresent);
    }

    favorites.push(cocktail.clone());
    store.save(&favorites)?;

    Ok(AddOutcome::Added)
}

/// Drop the favorite with `id`; writes back even when nothing matched
pub fn remove_favorite(store: &mut dyn FavoritesStore, id: &str) -> Result<(), StorageError> {
    let favorites: Vec<Cocktail> = store
        .load()?
        .into_iter()
        .filter(|fav| fav.id != id)
        .collect();

    store.save(&favorites)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cocktail(id: &str, name: &str) -> Cocktail {
        Cocktail {
            id: id.to_string(),
            name: name.to_string(),
            tags: Vec::new(),
            category: "Cocktail".to_string(),
            glass: "Highball glass".to_string(),
            instructions: String::new(),
            thumbnail: String::new(),
            ingredients: Vec::new(),
        }
    }

    fn storage_favorites() -> StorageFavorites {
        StorageFavorites::new(Storage::open_in_memory().unwrap())
    }

    fn check_add_and_dedupe(store: &mut dyn FavoritesStore) {
        assert!(store.load().unwrap().is_empty());

        let margarita = cocktail("11007", "Margarita");
        assert_eq!(add_favorite(store, &margarita).unwrap(), AddOutcome::Added);

        let favorites = store.load().unwrap();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites.iter().find(|c| c.id == "11007"), Some(&margarita));

        assert_eq!(
            add_favorite(store, &margarita).unwrap(),
            AddOutcome::AlreadyPresent
        );
        assert_eq!(store.load().unwrap().len(), 1);

        add_favorite(store, &cocktail("17222", "A1")).unwrap();
        let ids: Vec<String> = store.load().unwrap().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["11007", "17222"]);
    }

    fn check_remove(store: &mut dyn FavoritesStore) {
        add_favorite(store, &cocktail("11007", "Margarita")).unwrap();
        add_favorite(store, &cocktail("17222", "A1")).unwrap();

        remove_favorite(store, "11007").unwrap();
        let favorites = store.load().unwrap();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].id, "17222");

        remove_favorite(store, "does-not-exist").unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_memory_add_and_dedupe() {
        check_add_and_dedupe(&mut MemoryFavorites::new());
    }

    #[test]
    fn test_memory_remove() {
        check_remove(&mut MemoryFavorites::new());
    }

    #[test]
    fn test_storage_add_and_dedupe() {
        check_add_and_dedupe(&mut storage_favorites());
    }

    #[test]
    fn test_storage_remove() {
        check_remove(&mut storage_favorites());
    }

    #[test]
    fn test_remove_from_empty_writes_empty_list() {
        let mut store = storage_favorites();
        remove_favorite(&mut store, "11007").unwrap();

        assert_eq!(
            store.storage.get_item(FAVORITES_KEY).unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn test_corrupt_blob_reads_as_empty() {
        let storage = Storage::open_in_memory().unwrap();
        storage.set_item(FAVORITES_KEY, "{not json").unwrap();
        let mut store = StorageFavorites::new(storage);

        assert!(store.load().unwrap().is_empty());

        // The next write replaces the corrupt blob
        add_favorite(&mut store, &cocktail("11007", "Margarita")).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_notices() {
        assert_eq!(AddOutcome::Added.notice("Margarita"), "Margarita added to favorites!");
        assert_eq!(
            AddOutcome::AlreadyPresent.notice("Margarita"),
            "Margarita is already in favorites."
        );
    }
}
