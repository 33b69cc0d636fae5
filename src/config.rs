use crate::element::{Element, BLANK_GLYPH, WALL_GLYPH};
use crate::error::BlockResult;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::sync::Arc;

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub glyphs: GlyphConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub block: BlockConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct GlyphConfig {
    #[serde(default = "default_wall")]
    pub wall: String,
    #[serde(default = "default_wall_center")]
    pub wall_center: String,
    #[serde(default = "default_floor")]
    pub floor: String,
}

#[derive(Debug, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default)]
    pub trailing_separator: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct BlockConfig {
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enable_edit_log: bool,
}

// Default values
fn default_wall() -> String { WALL_GLYPH.to_string() }
fn default_wall_center() -> String { BLANK_GLYPH.to_string() }
fn default_floor() -> String { BLANK_GLYPH.to_string() }
fn default_separator() -> String { " ".to_string() }

impl Default for GlyphConfig {
    fn default() -> Self {
        Self {
            wall: default_wall(),
            wall_center: default_wall_center(),
            floor: default_floor(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            trailing_separator: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            glyphs: GlyphConfig::default(),
            render: RenderConfig::default(),
            block: BlockConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from `config.toml`, or use defaults if it is missing or invalid
    pub fn load() -> Self {
        Self::load_or_default(Path::new(CONFIG_FILE))
    }

    /// Load configuration from `path`, or use defaults if it is missing or invalid
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            eprintln!("No {} found, using default configuration", path.display());
            return Config::default();
        }
        match Self::load_from(path) {
            Ok(config) => {
                eprintln!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                eprintln!("Warning: {}", e);
                eprintln!("Using default configuration");
                Config::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> BlockResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> BlockResult<Self> {
        Ok(toml::from_str(contents)?)
    }
}

/// Wall and floor elements built from the glyph section
#[derive(Clone, Debug)]
pub struct Palette {
    pub wall: Arc<Element>,
    pub floor: Arc<Element>,
}

impl Palette {
    pub fn from_config(glyphs: &GlyphConfig) -> Self {
        Palette {
            wall: Arc::new(Element::bordered("wall", &glyphs.wall, &glyphs.wall_center)),
            floor: Arc::new(Element::uniform("floor", &glyphs.floor)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;
    use crate::element::{FLOOR, WALL};
    use crate::error::BlockError;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.glyphs.wall, "■");
        assert_eq!(config.render.separator, " ");
        assert!(!config.render.trailing_separator);
        assert_eq!((config.block.x, config.block.y), (0, 0));
        assert!(!config.logging.enable_edit_log);
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml_str(
            r##"
            [glyphs]
            wall = "#"

            [render]
            trailing_separator = true

            [block]
            x = 3
            "##,
        )
        .unwrap();
        assert_eq!(config.glyphs.wall, "#");
        assert_eq!(config.glyphs.floor, " ");
        assert_eq!(config.render.separator, " ");
        assert!(config.render.trailing_separator);
        assert_eq!((config.block.x, config.block.y), (3, 0));
    }

    #[test]
    fn test_invalid_config_is_parse_error() {
        let result = Config::from_toml_str("[render]\nseparator = 5\n");
        assert!(matches!(result, Err(BlockError::ConfigParse(_))));

        let prefix = "Could not parse config file: ";
        let message = result.unwrap_err().to_string();
        assert!(message.starts_with(prefix));
        assert!(message.len() > prefix.len(), "cause missing from '{}'", message);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let result = Config::load_from(Path::new("./does/not/exist.toml"));
        assert!(matches!(result, Err(BlockError::ConfigRead(_))));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = Config::load_or_default(Path::new("./does/not/exist.toml"));
        assert_eq!(config.glyphs.wall, "■");
        assert_eq!(config.render.separator, " ");
    }

    #[test]
    fn test_load_or_default_reads_and_falls_back() {
        let dir = std::env::temp_dir().join(format!("flyweight_maze_config_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let valid = dir.join("valid.toml");
        fs::write(&valid, "[glyphs]\nwall = \"#\"\n[block]\ny = 4\n").unwrap();
        let config = Config::load_or_default(&valid);
        assert_eq!(config.glyphs.wall, "#");
        assert_eq!(config.block.y, 4);

        let invalid = dir.join("invalid.toml");
        fs::write(&invalid, "[render]\nseparator = 5\n").unwrap();
        let config = Config::load_or_default(&invalid);
        assert_eq!(config.render.separator, " ");
        assert_eq!(config.glyphs.wall, "■");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_default_palette_matches_singletons() {
        let palette = Palette::from_config(&GlyphConfig::default());
        for direction in Direction::ALL {
            assert_eq!(palette.wall.repr(direction), WALL.repr(direction));
            assert_eq!(palette.floor.repr(direction), FLOOR.repr(direction));
        }
    }
}
