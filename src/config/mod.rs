mod loader;
mod model;
mod validation;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, LoadResult, RealFileSystem,
};
pub use model::{CONFIG_VERSION, CheckConfig, Config, FilesConfig, LinesConfig, TitleConfig};
pub use validation::validate_config_semantics;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = Config::default();
        assert_eq!(config.lines.max_changes, 500);
        assert_eq!(config.title.prefixes.len(), 7);
        assert_eq!(config.files.allowed_extensions.len(), 8);
        assert!(!config.check.strict);
    }
}
