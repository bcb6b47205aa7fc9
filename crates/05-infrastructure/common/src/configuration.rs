//! 解析器配置
//!
//! 配置按以下顺序叠加：内置默认值、`config/resolver.*` 文件、`INJECT_` 前缀的环境变量。
//! 环境变量可以带配置节（`INJECT_RESOLVER__USE_ANNOTATION_SCAN=false`），
//! 也可以省略配置节（`INJECT_USE_ANNOTATION_SCAN=false`），后者优先。
//! `lookup_references` 在环境变量中以逗号分隔。配置节名称为 `resolver`，例如：
//!
//! ```toml
//! [resolver]
//! use_annotation_scan = true
//! expand_default_references = true
//! lookup_references = ["name", "type_short_name"]
//! ```

use crate::errors::{ConfigError, ConfigResult};
use crate::metadata::short_type_name;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 默认配置文件（不含扩展名）
pub const DEFAULT_CONFIG_FILE: &str = "config/resolver";

/// 默认环境变量前缀
pub const DEFAULT_ENV_PREFIX: &str = "INJECT";

/// 默认引用名称的推导方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceLookup {
    /// 成员（字段或参数）名称
    Name,
    /// 类型短名，首字母小写
    TypeShortName,
    /// 完整的声明类型
    TypeFullName,
}

impl ReferenceLookup {
    /// 为成员推导候选名称
    pub fn candidate(&self, member_name: &str, type_name: &str) -> String {
        match self {
            Self::Name => member_name.to_string(),
            Self::TypeShortName => short_type_name(type_name),
            Self::TypeFullName => type_name.trim().to_string(),
        }
    }
}

/// 解析器配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// 构造器解析时是否扫描注入标记
    pub use_annotation_scan: bool,
    /// 默认注入点工厂是否把默认引用组展开为具体候选名称
    pub expand_default_references: bool,
    /// 默认引用名称的推导顺序
    pub lookup_references: Vec<ReferenceLookup>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            use_annotation_scan: true,
            expand_default_references: false,
            lookup_references: vec![
                ReferenceLookup::Name,
                ReferenceLookup::TypeShortName,
                ReferenceLookup::TypeFullName,
            ],
        }
    }
}

impl ResolverConfig {
    /// 配置节路径
    pub const CONFIG_PATH: &'static str = "resolver";

    /// 可由环境变量覆盖的配置项
    const FIELDS: [&'static str; 3] = [
        "use_annotation_scan",
        "expand_default_references",
        "lookup_references",
    ];

    /// 从默认文件和环境变量加载配置
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(DEFAULT_CONFIG_FILE, DEFAULT_ENV_PREFIX)
    }

    /// 从指定文件和环境变量前缀加载配置，文件不存在时忽略
    pub fn load_from(file: &str, env_prefix: &str) -> ConfigResult<Self> {
        debug!("加载解析器配置: file={}, env_prefix={}", file, env_prefix);

        let mut builder = config::Config::builder()
            .add_source(config::File::with_name(file).required(false))
            .add_source(
                config::Environment::with_prefix(env_prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("resolver.lookup_references"),
            );

        // 省略配置节的环境变量合并到 resolver 节
        let flat = config::Config::builder()
            .add_source(
                config::Environment::with_prefix(env_prefix)
                    .prefix_separator("_")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("lookup_references"),
            )
            .build()?;
        for key in Self::FIELDS {
            match flat.get::<config::Value>(key) {
                Ok(value) => {
                    debug!("环境变量覆盖配置: {}.{}", Self::CONFIG_PATH, key);
                    builder = builder.set_override(format!("{}.{}", Self::CONFIG_PATH, key), value)?;
                }
                Err(config::ConfigError::NotFound(_)) => {}
                Err(e) => return Err(e.into()),
            }
        }

        Self::from_settings(&builder.build()?)
    }

    /// 从 TOML 文本加载配置
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(content, config::FileFormat::Toml))
            .build()?;

        Self::from_settings(&settings)
    }

    fn from_settings(settings: &config::Config) -> ConfigResult<Self> {
        let config = match settings.get::<Self>(Self::CONFIG_PATH) {
            Ok(config) => config,
            Err(config::ConfigError::NotFound(_)) => {
                debug!("未找到配置节 {}, 使用默认配置", Self::CONFIG_PATH);
                Self::default()
            }
            Err(e) => return Err(e.into()),
        };

        config.validate()?;
        Ok(config)
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.lookup_references.is_empty() {
            return Err(ConfigError::validation(
                "lookup_references 至少需要一种引用推导方式",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ResolverConfig::default();
        assert!(config.use_annotation_scan);
        assert!(!config.expand_default_references);
        assert_eq!(config.lookup_references.len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_str() {
        let config = ResolverConfig::from_toml_str(
            r#"
            [resolver]
            use_annotation_scan = false
            lookup_references = ["type_short_name", "name"]
            "#,
        )
        .unwrap();

        assert!(!config.use_annotation_scan);
        assert!(!config.expand_default_references);
        assert_eq!(
            config.lookup_references,
            vec![ReferenceLookup::TypeShortName, ReferenceLookup::Name]
        );
    }

    #[test]
    fn test_missing_section_uses_defaults() {
        let config = ResolverConfig::from_toml_str("[other]\nvalue = 1\n").unwrap();
        assert_eq!(config, ResolverConfig::default());
    }

    #[test]
    fn test_empty_lookup_list_is_rejected() {
        let result = ResolverConfig::from_toml_str("[resolver]\nlookup_references = []\n");
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn test_environment_overrides() {
        std::env::set_var("INJECT_ENV_TEST_RESOLVER__EXPAND_DEFAULT_REFERENCES", "true");

        let config =
            ResolverConfig::load_from("config/does-not-exist", "INJECT_ENV_TEST").unwrap();

        std::env::remove_var("INJECT_ENV_TEST_RESOLVER__EXPAND_DEFAULT_REFERENCES");
        assert!(config.expand_default_references);
        assert!(config.use_annotation_scan);
    }

    #[test]
    fn test_environment_overrides_without_section() {
        std::env::set_var("INJECT_FLAT_TEST_USE_ANNOTATION_SCAN", "false");
        std::env::set_var("INJECT_FLAT_TEST_LOOKUP_REFERENCES", "type_full_name,name");

        let config =
            ResolverConfig::load_from("config/does-not-exist", "INJECT_FLAT_TEST").unwrap();

        std::env::remove_var("INJECT_FLAT_TEST_USE_ANNOTATION_SCAN");
        std::env::remove_var("INJECT_FLAT_TEST_LOOKUP_REFERENCES");
        assert!(!config.use_annotation_scan);
        assert!(!config.expand_default_references);
        assert_eq!(
            config.lookup_references,
            vec![ReferenceLookup::TypeFullName, ReferenceLookup::Name]
        );
    }

    #[test]
    fn test_reference_lookup_candidates() {
        assert_eq!(
            ReferenceLookup::Name.candidate("userRepo", "Arc<app::UserRepository>"),
            "userRepo"
        );
        assert_eq!(
            ReferenceLookup::TypeShortName.candidate("userRepo", "Arc<app::UserRepository>"),
            "userRepository"
        );
        assert_eq!(
            ReferenceLookup::TypeFullName.candidate("userRepo", "Arc<app::UserRepository>"),
            "Arc<app::UserRepository>"
        );
    }
}
