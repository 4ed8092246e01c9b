//! Tests for the organize configuration schema

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use tilebundle::TilesetError;
    use tilebundle::document::config::{ConnectSpec, OrganizeConfig, TileSpec};

    // Tests a full configuration parses with every field populated
    // Verified by renaming schema fields
    #[test]
    fn test_parse_full_config() {
        let text = r#"{
            "tileset_id": "dungeon",
            "source_image": "dungeon.png",
            "tile_size": [16, 16],
            "sliced_dir": "sliced_tilesets/dungeon_16x16",
            "groups": [
                {
                    "id": "walls",
                    "base_name": "wall",
                    "connect": {"type": "layout"},
                    "tiles": [
                        {"index": 0, "pos": [0, 0]},
                        {"index": 1, "pos": [1, 0]}
                    ]
                }
            ]
        }"#;

        let config: OrganizeConfig = serde_json::from_str(text).unwrap();

        assert_eq!(config.tileset_id.as_deref(), Some("dungeon"));
        assert_eq!(config.source_image.as_deref(), Some("dungeon.png"));
        assert_eq!(config.tile_size, Some([16, 16]));
        assert_eq!(
            config.sliced_dir,
            Some(PathBuf::from("sliced_tilesets/dungeon_16x16"))
        );
        assert_eq!(config.groups.len(), 1);
        let group = config.groups.first().unwrap();
        assert_eq!(group.id, "walls");
        assert_eq!(group.base_name.as_deref(), Some("wall"));
        assert_eq!(group.connect, Some(ConnectSpec::Layout));
        assert_eq!(group.tiles.first().unwrap().pos, Some([0, 0]));
    }

    // Tests an empty object parses with everything absent
    // Verified by making top-level fields mandatory
    #[test]
    fn test_parse_empty_config() {
        let config: OrganizeConfig = serde_json::from_str("{}").unwrap();

        assert!(config.tileset_id.is_none());
        assert!(config.source_image.is_none());
        assert!(config.tile_size.is_none());
        assert!(config.sliced_dir.is_none());
        assert!(config.groups.is_empty());
    }

    // Tests the legacy "directories" spelling maps onto groups
    // Verified by removing the serde alias
    #[test]
    fn test_directories_alias() {
        let text = r#"{"directories": [{"id": "floor", "tiles": [{"index": 3}]}]}"#;

        let config: OrganizeConfig = serde_json::from_str(text).unwrap();

        assert_eq!(config.groups.len(), 1);
        let group = config.groups.first().unwrap();
        assert_eq!(group.id, "floor");
        assert_eq!(group.tiles.first().unwrap().index, 3);
    }

    // Tests connect parsing dispatches on the type tag
    // Verified by swapping the tag values
    #[test]
    fn test_connect_tagged_parse() {
        let layout: ConnectSpec = serde_json::from_str(r#"{"type": "layout"}"#).unwrap();
        assert_eq!(layout, ConnectSpec::Layout);

        let edge: ConnectSpec =
            serde_json::from_str(r#"{"type": "edge_match", "top_k": 3}"#).unwrap();
        assert_eq!(edge, ConnectSpec::EdgeMatch { top_k: 3 });
    }

    // Tests top_k defaults to 5 when omitted
    // Verified by changing the default function
    #[test]
    fn test_edge_match_default_top_k() {
        let edge: ConnectSpec = serde_json::from_str(r#"{"type": "edge_match"}"#).unwrap();

        assert_eq!(edge, ConnectSpec::EdgeMatch { top_k: 5 });
    }

    // Tests an unknown connect type is rejected
    // Verified by adding a fallback variant
    #[test]
    fn test_connect_unknown_type() {
        let result: Result<ConnectSpec, _> = serde_json::from_str(r#"{"type": "magnetic"}"#);

        assert!(result.is_err());
    }

    // Tests tile members omit pos and name when unset
    // Verified by removing skip_serializing_if
    #[test]
    fn test_tile_spec_omits_absent_fields() {
        let spec = TileSpec {
            index: 7,
            pos: None,
            name: None,
        };

        let text = serde_json::to_string(&spec).unwrap();

        assert!(!text.contains("pos"));
        assert!(!text.contains("name"));
    }

    // Tests member names and negative positions parse
    // Verified by narrowing pos to unsigned integers
    #[test]
    fn test_member_name_and_negative_pos() {
        let text = r#"{"index": 9, "pos": [-1, -2], "name": "Corner NW"}"#;

        let spec: TileSpec = serde_json::from_str(text).unwrap();

        assert_eq!(spec.pos, Some([-1, -2]));
        assert_eq!(spec.name.as_deref(), Some("Corner NW"));
    }

    // Tests loading a configuration document from disk
    // Verified by pointing load at a fixed path
    #[test]
    fn test_load_from_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"tileset_id": "overworld", "groups": []}"#).unwrap();

        let config = OrganizeConfig::load(&path).unwrap();

        assert_eq!(config.tileset_id.as_deref(), Some("overworld"));
    }

    // Tests loading malformed configuration reports a JSON error
    // Verified by mapping parse failures to a config error
    #[test]
    fn test_load_malformed_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "groups = []").unwrap();

        let result = OrganizeConfig::load(&path);

        assert!(matches!(result, Err(TilesetError::Json { .. })));
    }
}
