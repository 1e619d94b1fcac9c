/// Configuration constants for the application
pub mod config {
    /// Default dataset identifier
    pub const DEFAULT_DATASET: &str = "default";

    /// Data directory read for the default dataset
    pub const DEFAULT_DATA_DIR: &str = "csv";

    /// Directory to store imported CSV files
    pub const DATASET_STORAGE_DIR: &str = ".salescope/datasets";

    /// Timestamp layout used by the order CSV exports
    pub const ORDER_DATE_FORMAT: &str = "%m/%d/%y %H:%M";

    /// Rows shown per page of the orders table
    pub const ROWS_PER_PAGE: usize = 20;

    /// Extension of the data files picked up from a dataset directory
    pub const CSV_EXTENSION: &str = "csv";

    /// Characters to replace in file names for safety
    pub const UNSAFE_FILENAME_CHARS: &[char] = &['/', '\\', ':'];

    /// Replacement character for unsafe filename characters
    pub const FILENAME_REPLACEMENT_CHAR: &str = "_";
}

/// Utility functions for file operations
pub mod file_utils {
    use super::config::*;
    use std::fs;
    use std::path::PathBuf;

    /// Get the dataset storage directory path and create it if it doesn't exist
    pub fn get_dataset_storage_dir() -> Result<PathBuf, std::io::Error> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::NotFound, "Home directory not found"))?;

        let storage_dir = home_dir.join(DATASET_STORAGE_DIR);

        // Create directory if it doesn't exist
        if !storage_dir.exists() {
            fs::create_dir_all(&storage_dir)?;
        }

        Ok(storage_dir)
    }

    /// Save imported CSV content to persistent storage and return the file path
    pub fn save_csv_file(name: &str, content: &str) -> Result<String, std::io::Error> {
        let storage_dir = get_dataset_storage_dir()?;
        let filename = format!("{}.{}", sanitize_filename(name), CSV_EXTENSION);
        let file_path = storage_dir.join(filename);

        // Write content to file
        fs::write(&file_path, content)?;

        // Return the absolute path as string
        Ok(file_path.to_string_lossy().to_string())
    }

    /// Sanitize a filename by replacing unsafe characters
    pub fn sanitize_filename(name: &str) -> String {
        name.chars()
            .map(|c| {
                if UNSAFE_FILENAME_CHARS.contains(&c) {
                    FILENAME_REPLACEMENT_CHAR.to_string()
                } else {
                    c.to_string()
                }
            })
            .collect::<String>()
    }
}

/// Utility functions for order timestamps
pub mod date_utils {
    use super::config::ORDER_DATE_FORMAT;
    use chrono::NaiveDateTime;

    /// Parse an order timestamp like "04/19/19 08:46"
    pub fn parse_order_date(timestamp: &str) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(timestamp.trim(), ORDER_DATE_FORMAT).ok()
    }

    /// Format a timestamp back into the CSV export layout
    pub fn format_order_date(timestamp: &NaiveDateTime) -> String {
        timestamp.format(ORDER_DATE_FORMAT).to_string()
    }
}
