use dioxus::prelude::*;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use super::error::{DatasetError, DatasetResult};
use crate::sales::{Order, RawOrder, SalesDataset};
use crate::utils::config;

// Global storage for dataset directories (name -> directory path mapping)
static DATASET_STORAGE: std::sync::LazyLock<Arc<Mutex<HashMap<String, String>>>> =
    std::sync::LazyLock::new(|| Arc::new(Mutex::new(HashMap::new())));

/// Context for sharing registered dataset names across the application
#[derive(Clone, Default)]
pub struct DataPathsContext {
    pub dataset_names: Signal<Vec<String>>,
}

/// Context for triggering a dataset reload
#[derive(Clone)]
pub struct DatasetReloadContext {
    pub current_dataset: Signal<String>,
}

/// Context for managing dataset directory storage
#[derive(Clone)]
pub struct DatasetStorage {
    storage: Arc<Mutex<HashMap<String, String>>>, // name -> directory mapping
}

impl Default for DatasetStorage {
    fn default() -> Self {
        Self {
            storage: DATASET_STORAGE.clone(),
        }
    }
}

impl DatasetStorage {
    /// Store a dataset directory under a given name
    pub fn store_dir(&self, name: String, dir_path: String) -> DatasetResult<()> {
        if let Ok(mut storage) = self.storage.lock() {
            storage.insert(name, dir_path);
            Ok(())
        } else {
            Err(DatasetError::StorageError("Failed to acquire storage lock".to_string()))
        }
    }

    /// Retrieve a dataset directory by name
    pub fn get_dir(&self, name: &str) -> DatasetResult<Option<String>> {
        if let Ok(storage) = self.storage.lock() {
            Ok(storage.get(name).cloned())
        } else {
            Err(DatasetError::StorageError("Failed to acquire storage lock".to_string()))
        }
    }

    /// Remove a dataset directory by name
    pub fn remove_dir(&self, name: &str) -> DatasetResult<bool> {
        if let Ok(mut storage) = self.storage.lock() {
            Ok(storage.remove(name).is_some())
        } else {
            Err(DatasetError::StorageError("Failed to acquire storage lock".to_string()))
        }
    }

    /// List all registered dataset names
    pub fn list_names(&self) -> DatasetResult<Vec<String>> {
        if let Ok(storage) = self.storage.lock() {
            Ok(storage.keys().cloned().collect())
        } else {
            Err(DatasetError::StorageError("Failed to acquire storage lock".to_string()))
        }
    }
}

/// Function to load the dataset selected by name or directory path
pub async fn load_dataset_from_path(
    name_or_path: &str,
    storage: &DatasetStorage,
) -> DatasetResult<SalesDataset> {
    let dir_path = resolve_data_dir(name_or_path, storage)?;
    read_data_dir(Path::new(&dir_path))
}

/// Resolve a dataset name to the directory it points at
fn resolve_data_dir(name_or_path: &str, storage: &DatasetStorage) -> DatasetResult<String> {
    if name_or_path == config::DEFAULT_DATASET {
        return Ok(config::DEFAULT_DATA_DIR.to_string());
    }

    // First check if this is a stored name that maps to a directory
    let dir_path = if let Some(stored_dir) = storage.get_dir(name_or_path)? {
        stored_dir
    } else if Path::new(name_or_path).exists() {
        // It's already a directory path
        name_or_path.to_string()
    } else {
        return Err(DatasetError::NotFound(name_or_path.to_string()));
    };

    // Verify the directory still exists before trying to use it
    if !Path::new(&dir_path).exists() {
        return Err(DatasetError::DirNotFound(dir_path));
    }

    Ok(dir_path)
}

/// Read and merge every CSV file in a data directory
fn read_data_dir(dir: &Path) -> DatasetResult<SalesDataset> {
    if !dir.is_dir() {
        return Err(DatasetError::DirNotFound(dir.to_string_lossy().to_string()));
    }

    let mut csv_files: Vec<_> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .map(|ext| ext.eq_ignore_ascii_case(config::CSV_EXTENSION))
                .unwrap_or(false)
        })
        .collect();
    csv_files.sort();

    let mut orders = Vec::new();
    for path in csv_files {
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(&path)?;
        for record in reader.deserialize::<RawOrder>() {
            orders.push(Order::from_raw(record?));
        }
    }

    Ok(SalesDataset { orders })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_storage() {
        let storage = DatasetStorage::default();

        // Test storing and retrieving directories
        storage.store_dir("test".to_string(), "/path/to/test-data".to_string()).unwrap();
        let dir = storage.get_dir("test").unwrap();
        assert_eq!(dir, Some("/path/to/test-data".to_string()));

        // Test listing names
        let names = storage.list_names().unwrap();
        assert!(names.contains(&"test".to_string()));

        // Test removing directories
        assert!(storage.remove_dir("test").unwrap());
        let dir = storage.get_dir("test").unwrap();
        assert_eq!(dir, None);
    }

    #[test]
    fn test_resolve_unknown_name() {
        let storage = DatasetStorage::default();
        let result = resolve_data_dir("no-such-dataset-anywhere", &storage);
        assert!(matches!(result, Err(DatasetError::NotFound(_))));
    }

    #[test]
    fn test_read_missing_dir() {
        let result = read_data_dir(Path::new("/definitely/not/a/real/dir"));
        assert!(matches!(result, Err(DatasetError::DirNotFound(_))));
    }

    #[test]
    fn test_read_data_dir() {
        let dir = std::env::temp_dir().join(format!("salescope_data_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("orders.csv"),
            "Order ID,Product,Quantity Ordered,Price Each,Order Date,Purchase Address\n\
             176558,USB-C Charging Cable,2,11.95,04/19/19 08:46,\"917 1st St, Dallas, TX 75001\"\n\
             176559,Bose SoundSport Headphones,not-a-number,99.99,04/07/19 22:30,\"682 Chestnut St, Boston, MA 02215\"\n",
        )
        .unwrap();

        let dataset = read_data_dir(&dir).unwrap();
        assert_eq!(dataset.orders.len(), 2);
        assert_eq!(dataset.orders[0].product, "USB-C Charging Cable");
        assert_eq!(dataset.orders[0].quantity, Some(2.0));
        assert_eq!(dataset.orders[0].city.as_deref(), Some("Dallas"));
        // Coercion failures load as missing values rather than failing the read
        assert_eq!(dataset.orders[1].quantity, None);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_read_empty_dir() {
        let dir = std::env::temp_dir().join(format!("salescope_empty_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        // A directory without CSV files is an empty dataset, not an error
        let dataset = read_data_dir(&dir).unwrap();
        assert!(dataset.orders.is_empty());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
