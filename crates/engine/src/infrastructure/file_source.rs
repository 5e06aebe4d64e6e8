//! Catalog documents read from a data directory.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tokio::fs;

use ffrkdb_shared::{CraftingFeed, RosterFeed};

use crate::infrastructure::ports::{CatalogSource, SourceError};

/// Reads the crafting and roster documents from JSON files.
pub struct FileCatalogSource {
    crafting_path: PathBuf,
    roster_path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(crafting_path: impl Into<PathBuf>, roster_path: impl Into<PathBuf>) -> Self {
        Self {
            crafting_path: crafting_path.into(),
            roster_path: roster_path.into(),
        }
    }

    /// Both documents under one directory.
    pub fn in_dir(data_dir: impl AsRef<Path>, crafting_file: &str, roster_file: &str) -> Self {
        let data_dir = data_dir.as_ref();
        Self::new(data_dir.join(crafting_file), data_dir.join(roster_file))
    }

    pub fn crafting_path(&self) -> &Path {
        &self.crafting_path
    }

    pub fn roster_path(&self) -> &Path {
        &self.roster_path
    }
}

async fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, SourceError> {
    if !path.exists() {
        return Err(SourceError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).await?;
    let document = serde_json::from_str(&content)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "Read catalog document");
    Ok(document)
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn fetch_crafting(&self) -> Result<CraftingFeed, SourceError> {
        read_document(&self.crafting_path).await
    }

    async fn fetch_roster(&self) -> Result<RosterFeed, SourceError> {
        read_document(&self.roster_path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CRAFTING: &str = r#"{
        "materials": [
            {"id": 40000011, "name": "Major Fire Orb", "rarity": 3},
            {"id": 40000016, "name": "Major Ice Orb", "rarity": 3}
        ],
        "abilities": [{"id": 30111001, "name": "Blizzara", "rarity": 3}],
        "ability_costs": [
            {"ability_id": 30111001, "material_id": 40000016, "count": 10}
        ]
    }"#;

    fn write_file(dir: &Path, name: &str, content: &str) {
        let mut file = std::fs::File::create(dir.join(name)).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    #[tokio::test]
    async fn reads_crafting_document() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "abilities.json", CRAFTING);

        let source = FileCatalogSource::in_dir(dir.path(), "abilities.json", "characters.json");
        let feed = source.fetch_crafting().await.unwrap();

        assert_eq!(feed.materials.len(), 2);
        assert_eq!(feed.abilities[0].name, "Blizzara");
        assert_eq!(feed.ability_costs.len(), 1);
    }

    #[tokio::test]
    async fn reads_roster_document() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            "characters.json",
            r#"[{"buddy_id": 10000200, "name": "Tyro", "series_id": 200001, "level": 50,
                 "hp": 2921, "atk": 101, "defense": 111, "acc": 95, "eva": 98,
                 "matk": 134, "mdef": 170, "mnd": 162, "spd": 100}]"#,
        );

        let source = FileCatalogSource::in_dir(dir.path(), "abilities.json", "characters.json");
        let roster = source.fetch_roster().await.unwrap();

        assert_eq!(roster.len(), 1);
        assert_eq!(roster.0[0].stats.hp, Some(2921));
    }

    #[tokio::test]
    async fn missing_document_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileCatalogSource::in_dir(dir.path(), "abilities.json", "characters.json");

        let result = source.fetch_crafting().await;

        assert!(matches!(
            result,
            Err(SourceError::NotFound(path)) if path.ends_with("abilities.json")
        ));
    }

    #[tokio::test]
    async fn malformed_document_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "characters.json", "{not json");
        let source = FileCatalogSource::in_dir(dir.path(), "abilities.json", "characters.json");

        let result = source.fetch_roster().await;

        assert!(matches!(result, Err(SourceError::Json(_))));
    }
}
