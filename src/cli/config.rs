// FILE: src/cli/config.rs

use crate::definition::ShorthandType;
use crate::error::{Result, SpecError};
use crate::stylesheet::StyleSheetSpecification;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    pub name: String,
    #[serde(default)]
    pub parameters: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyConfig {
    pub name: String,
    #[serde(default)]
    pub default: String,
    #[serde(default)]
    pub inherited: bool,
    #[serde(default)]
    pub forces_layout: bool,
    #[serde(default)]
    pub parsers: Vec<ParserConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShorthandConfig {
    pub name: String,
    pub properties: String,
    #[serde(rename = "type")]
    pub shorthand_type: ShorthandType,
}

/// Extra properties and shorthands registered on top of the defaults.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub properties: Vec<PropertyConfig>,
    #[serde(default)]
    pub shorthands: Vec<ShorthandConfig>,
    pub fill_defaults: Option<bool>,
}

impl ConfigFile {
    /// Registers the configured properties, then the configured shorthands.
    pub fn apply(&self, spec: &mut StyleSheetSpecification) -> Result<()> {
        for property in &self.properties {
            let mut builder = spec.register_property(
                &property.name,
                &property.default,
                property.inherited,
                property.forces_layout,
            )?;
            for parser in &property.parsers {
                builder = builder.add_parser(&parser.name, &parser.parameters);
            }
        }

        for shorthand in &self.shorthands {
            spec.register_shorthand(&shorthand.name, &shorthand.properties, shorthand.shorthand_type)?;
        }

        log::info!(
            "Registered {} configured properties and {} shorthands",
            self.properties.len(),
            self.shorthands.len()
        );
        Ok(())
    }
}

pub fn load(config_path: &str) -> Result<ConfigFile> {
    let config_content = fs::read_to_string(config_path).map_err(|e| SpecError::FileNotFound {
        path: format!("Config file {}: {}", config_path, e),
    })?;

    let config = if config_path.ends_with(".json") {
        serde_json::from_str(&config_content).map_err(|e| SpecError::InvalidFormat {
            message: format!("Invalid JSON config: {}", e),
        })
    } else if config_path.ends_with(".toml") {
        toml::from_str(&config_content).map_err(|e| SpecError::InvalidFormat {
            message: format!("Invalid TOML config: {}", e),
        })
    } else {
        Err(SpecError::InvalidFormat {
            message: "Config file must be .json or .toml format".to_string(),
        })
    }?;

    log::info!("Loaded configuration from {}", config_path);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PropertyDictionary, PropertyValue, Unit};
    use std::io::Write;

    fn write_config(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_toml_and_apply() {
        let file = write_config(
            ".toml",
            r#"
fill_defaults = true

[[properties]]
name = "tab-size"
default = "4"
inherited = true
parsers = [{ name = "number" }]

[[properties]]
name = "tab-align"
default = "start"
parsers = [{ name = "keyword", parameters = "start, end" }]

[[shorthands]]
name = "tab"
properties = "tab-size tab-align"
type = "fall_through"
"#,
        );

        let config = load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.fill_defaults, Some(true));
        assert_eq!(config.properties.len(), 2);

        let mut spec = StyleSheetSpecification::with_defaults().unwrap();
        config.apply(&mut spec).unwrap();

        let size = spec.properties().get_property_by_name("tab-size").unwrap();
        assert!(size.is_inherited());
        assert_eq!(size.default_value().value, PropertyValue::Number(4.0, Unit::Number));

        let mut dictionary = PropertyDictionary::new();
        spec.parse_declaration(&mut dictionary, "tab", "end", "t", 1).unwrap();
        let align = spec.properties().property_id("tab-align");
        assert_eq!(dictionary.get_property(align).unwrap().value, PropertyValue::Keyword(1));
    }

    #[test]
    fn test_redeclared_builtin_keeps_its_grammar() {
        let file = write_config(
            ".toml",
            "[[properties]]\nname = \"width\"\ndefault = \"red\"\nparsers = [{ name = \"color\" }]\n",
        );
        let config = load(file.path().to_str().unwrap()).unwrap();
        let mut spec = StyleSheetSpecification::with_defaults().unwrap();
        let parsers_before = spec.properties().get_property_by_name("width").unwrap().parser_count();

        config.apply(&mut spec).unwrap();

        let width = spec.properties().get_property_by_name("width").unwrap();
        assert_eq!(width.parser_count(), parsers_before);
        let mut dictionary = PropertyDictionary::new();
        assert!(spec.parse_declaration(&mut dictionary, "width", "red", "t", 1).is_err());
        spec.parse_declaration(&mut dictionary, "width", "10px", "t", 2).unwrap();
        assert_eq!(
            dictionary.get_property(width.id()).unwrap().value,
            PropertyValue::Number(10.0, Unit::Px)
        );
    }

    #[test]
    fn test_load_json() {
        let file = write_config(
            ".json",
            r#"{"shorthands": [{"name": "inset", "properties": "top right bottom left", "type": "box"}]}"#,
        );
        let config = load(file.path().to_str().unwrap()).unwrap();
        assert!(config.properties.is_empty());
        assert_eq!(config.shorthands[0].shorthand_type, ShorthandType::Box);
        assert_eq!(config.fill_defaults, None);
    }

    #[test]
    fn test_invalid_shorthand_is_reported() {
        let file = write_config(
            ".toml",
            "[[shorthands]]\nname = \"broken\"\nproperties = \"width nowhere\"\ntype = \"positional\"\n",
        );
        let config = load(file.path().to_str().unwrap()).unwrap();
        let mut spec = StyleSheetSpecification::with_defaults().unwrap();
        assert!(matches!(
            config.apply(&mut spec),
            Err(SpecError::InvalidShorthandItem { .. })
        ));
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let file = write_config(".yaml", "properties: []");
        assert!(matches!(
            load(file.path().to_str().unwrap()),
            Err(SpecError::InvalidFormat { .. })
        ));
        assert!(matches!(load("/missing/config.toml"), Err(SpecError::FileNotFound { .. })));
    }
}
