//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Environment variable prefix; nested keys are separated by `__`
pub const ENV_PREFIX: &str = "WCS_DELEGATES_";

const PROJECT_FILES: [&str; 2] = ["wcs-delegates.toml", ".wcs-delegates.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (`WCS_DELEGATES_OUTPUT__STYLE=json`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./wcs-delegates.toml` or `./.wcs-delegates.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/wcs-delegates/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/wcs-delegates/config.toml if set,
    /// otherwise the platform config directory
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("wcs-delegates").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        println!("  [     ] Env:     {}<SECTION>__<KEY>", ENV_PREFIX);

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./wcs-delegates.toml or ./.wcs-delegates.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use wcs_domain::ReportStyle;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(config.delegates.builtin);
        assert!(config.delegates.disabled.is_empty());
        assert_eq!(config.output.style, ReportStyle::Text);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("wcs-delegates"));
    }

    #[test]
    fn test_project_file_and_env_merge() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "wcs-delegates.toml",
                r#"
[delegates]
disabled = ["arcgrid"]

[output]
style = "text"
color = false
"#,
            )?;
            jail.set_env("WCS_DELEGATES_OUTPUT__STYLE", "json");

            let config = ConfigLoader::load(None).map_err(|e| e.to_string())?;

            assert_eq!(config.delegates.disabled, vec!["arcgrid"]);
            assert_eq!(config.output.style, ReportStyle::Json);
            assert!(!config.output.color);
            assert!(config.delegates.builtin);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_path_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file(".wcs-delegates.toml", "[delegates]\nnetcdf_command = \"ncgen\"\n")?;
            jail.create_file("custom.toml", "[delegates]\nnetcdf_command = \"nccopy4\"\n")?;

            let explicit = PathBuf::from("custom.toml");
            let config = ConfigLoader::load(Some(&explicit)).map_err(|e| e.to_string())?;

            assert_eq!(config.delegates.netcdf_command, "nccopy4");
            assert_eq!(
                ConfigLoader::project_config_path(),
                Some(PathBuf::from(".wcs-delegates.toml"))
            );
            Ok(())
        });
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        Jail::expect_with(|jail| {
            jail.create_file("wcs-delegates.toml", "[output]\nstyle = \"yaml\"\n")?;
            assert!(ConfigLoader::load(None).is_err());
            Ok(())
        });
    }
}
