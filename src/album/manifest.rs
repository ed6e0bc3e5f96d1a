//! Album manifests.
//!
//! A manifest is the full construction input of an album (config plus
//! both card pools) in a serializable form, loadable from YAML or JSON.
//!
//! ```yaml
//! config:
//!   creator: 2
//!   min_pack_size: 3
//!   max_pack_size: 6
//!   price_per_card: 0
//!   fee_rate: 20
//!   rare_card_chance: 10
//!   fee_recipient: 2
//! common_cards:
//!   - { id: 1, name: "Name#1" }
//! rare_cards:
//!   - { id: 1, name: "Name#1" }
//! ```

use serde::{Deserialize, Serialize};

use super::instance::AlbumInstance;
use crate::cards::{CardCatalog, CardDefinition};
use crate::core::{AlbumConfig, AlbumError, AlbumResult, RandomSource};

/// Config plus both card pools of one album.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumManifest {
    pub config: AlbumConfig,

    #[serde(default)]
    pub common_cards: Vec<CardDefinition>,

    #[serde(default)]
    pub rare_cards: Vec<CardDefinition>,
}

impl AlbumManifest {
    /// Parse a manifest from YAML.
    pub fn from_yaml_str(source: &str) -> AlbumResult<Self> {
        serde_yaml::from_str(source).map_err(|e| AlbumError::Manifest(e.to_string()))
    }

    /// Parse a manifest from JSON.
    pub fn from_json_str(source: &str) -> AlbumResult<Self> {
        serde_json::from_str(source).map_err(|e| AlbumError::Manifest(e.to_string()))
    }

    /// Render the manifest as YAML.
    pub fn to_yaml_string(&self) -> AlbumResult<String> {
        serde_yaml::to_string(self).map_err(|e| AlbumError::Manifest(e.to_string()))
    }

    /// Build the catalog and the album, validating both.
    pub fn build(self, rng: Box<dyn RandomSource>) -> AlbumResult<AlbumInstance> {
        let catalog = CardCatalog::new(self.common_cards, self.rare_cards)?;
        AlbumInstance::new(self.config, catalog, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use crate::core::{BlockRandomProvider, Identity};

    const YAML: &str = r#"
config:
  creator: 2
  min_pack_size: 3
  max_pack_size: 6
  price_per_card: 0
  fee_rate: 20
  rare_card_chance: 10
  fee_recipient: 2
common_cards:
  - { id: 1, name: "Name#1" }
  - { id: 2, name: "Name#2" }
rare_cards:
  - { id: 1, name: "Rare#1" }
"#;

    #[test]
    fn test_from_yaml() {
        let manifest = AlbumManifest::from_yaml_str(YAML).unwrap();

        assert_eq!(manifest.config.creator, Identity::new(2));
        assert_eq!(manifest.config.max_pack_size, 6);
        assert_eq!(manifest.common_cards.len(), 2);
        assert_eq!(manifest.rare_cards[0].name, "Rare#1");
    }

    #[test]
    fn test_build() {
        let album = AlbumManifest::from_yaml_str(YAML)
            .unwrap()
            .build(Box::new(BlockRandomProvider::new(1)))
            .unwrap();

        assert_eq!(album.available_common_cards(), vec![CardId::new(1), CardId::new(2)]);
        assert_eq!(album.pack_size_range(), 3..=6);
    }

    #[test]
    fn test_build_rejects_duplicate_cards() {
        let json = r#"{
            "config": {"creator": 1, "min_pack_size": 1, "max_pack_size": 1,
                       "price_per_card": 0, "fee_rate": 0, "rare_card_chance": 0,
                       "fee_recipient": 1},
            "common_cards": [{"id": 1, "name": "A"}, {"id": 1, "name": "B"}]
        }"#;
        let manifest = AlbumManifest::from_json_str(json).unwrap();
        assert!(manifest.rare_cards.is_empty());

        let result = manifest.build(Box::new(BlockRandomProvider::new(1)));
        assert!(matches!(result, Err(AlbumError::InvalidCatalog(_))));
    }

    #[test]
    fn test_malformed_manifest() {
        let result = AlbumManifest::from_yaml_str("config: [1, 2");
        assert!(matches!(result, Err(AlbumError::Manifest(_))));
    }

    #[test]
    fn test_yaml_round_trip() {
        let manifest = AlbumManifest::from_yaml_str(YAML).unwrap();
        let yaml = manifest.to_yaml_string().unwrap();
        assert_eq!(AlbumManifest::from_yaml_str(&yaml).unwrap(), manifest);
    }
}
