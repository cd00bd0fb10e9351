use scripture_epub_engine::{FrenchSpacing, RenderConfig, TextDirection};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Glossary aside key '{index}' is not a glossary index")]
    InvalidGlossaryIndex { index: String },
}

/// Settings that shape the rendered markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSection {
    pub french_spacing: FrenchSpacing,
    pub text_direction: TextDirection,
    pub reversed_document_ids: BTreeSet<String>,
    pub custom_css: bool,
}

/// Glossary lookups: term or lemma to index, index to aside id.
///
/// TOML keys are strings, so `asides` is keyed by the decimal index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlossarySection {
    pub terms: BTreeMap<String, u32>,
    pub asides: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
    #[serde(default)]
    pub render: RenderSection,
    #[serde(default)]
    pub glossary: GlossarySection,
}

impl ExportConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            render: RenderSection::default(),
            glossary: GlossarySection::default(),
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: ExportConfig =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the output directory
        config.output_dir = Self::expand_path(&config.output_dir).unwrap_or(config.output_dir);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/scripture-epub");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// The engine configuration described by this file.
    pub fn render_config(&self) -> Result<RenderConfig, ConfigError> {
        let mut glossary_n_to_aside = std::collections::HashMap::new();
        for (index, aside) in &self.glossary.asides {
            let n = index
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidGlossaryIndex {
                    index: index.clone(),
                })?;
            glossary_n_to_aside.insert(n, aside.clone());
        }

        Ok(RenderConfig {
            glossary_terms: self
                .glossary
                .terms
                .iter()
                .map(|(term, n)| (term.clone(), *n))
                .collect(),
            glossary_n_to_aside,
            french_spacing: self.render.french_spacing,
            text_direction: self.render.text_direction,
            reversed_document_ids: self.render.reversed_document_ids.iter().cloned().collect(),
            custom_css: self.render.custom_css,
        })
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        shellexpand::full(&path_str)
            .ok()
            .map(|expanded| PathBuf::from(expanded.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::env;
    use tempfile::TempDir;

    const FULL_CONFIG: &str = r#"
output_dir = "/tmp/epub"

[render]
french_spacing = "change"
text_direction = "rtl"
reversed_document_ids = ["GLO", "FRT"]
custom_css = true

[glossary]
terms = { agape = 2, Sabbath = 0 }
asides = { "0" = "g0", "2" = "g2" }
"#;

    #[test]
    fn test_config_path() {
        let config_path = ExportConfig::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/scripture-epub/config.toml"));
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: ExportConfig = toml::from_str("output_dir = \"out\"").unwrap();

        assert_eq!(config, ExportConfig::new("out"));
        assert_eq!(config.render_config().unwrap(), RenderConfig::default());
    }

    #[test]
    fn test_render_config_conversion() {
        let config: ExportConfig = toml::from_str(FULL_CONFIG).unwrap();
        let render = config.render_config().unwrap();

        assert_eq!(render.french_spacing, FrenchSpacing::Change);
        assert_eq!(render.text_direction, TextDirection::Rtl);
        assert!(render.reversed_document_ids.contains("GLO"));
        assert!(render.custom_css);
        assert_eq!(render.glossary_terms.get("agape"), Some(&2));
        assert_eq!(render.glossary_n_to_aside.get(&0).map(String::as_str), Some("g0"));
        assert_eq!(render.glossary_n_to_aside.get(&2).map(String::as_str), Some("g2"));
    }

    #[test]
    fn test_non_numeric_aside_key_is_rejected() {
        let mut config = ExportConfig::new("out");
        config
            .glossary
            .asides
            .insert("two".to_string(), "g2".to_string());

        let err = config.render_config().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidGlossaryIndex { index } if index == "two"));
    }

    #[test]
    fn test_unknown_spacing_mode_is_a_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            "output_dir = \"out\"\n[render]\nfrench_spacing = \"sometimes\"\n",
        )
        .unwrap();

        let err = ExportConfig::load_from_path(&config_file).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let expanded = ExportConfig::expand_path(&PathBuf::from("~/test/path")).unwrap();

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("EPUB_TEST_VAR", "/test/env/path");
        }

        let expanded = ExportConfig::expand_path(&PathBuf::from("$EPUB_TEST_VAR/subdir"));
        assert_eq!(expanded, Some(PathBuf::from("/test/env/path/subdir")));

        unsafe {
            env::remove_var("EPUB_TEST_VAR");
        }
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = ExportConfig::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let original: ExportConfig = toml::from_str(FULL_CONFIG).unwrap();

        original.save_to_path(&config_file).unwrap();
        let loaded = ExportConfig::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded, original);
    }

    #[test]
    fn test_output_dir_with_env_var_in_toml() {
        unsafe {
            env::set_var("EPUB_EXPORT_ROOT", "/custom/exports");
        }

        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "output_dir = \"$EPUB_EXPORT_ROOT/bible\"\n").unwrap();

        let config = ExportConfig::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/custom/exports/bible"));

        unsafe {
            env::remove_var("EPUB_EXPORT_ROOT");
        }
    }
}
