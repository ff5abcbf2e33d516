use anyhow::{bail, Context, Result};
use headshakers_types::PageSize;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Resolve the data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. HEADSHAKERS_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.headshakers (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("HEADSHAKERS_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("headshakers"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".headshakers"));
    }

    bail!("could not determine data directory: no HOME or XDG data directory found")
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// User preferences that persist across invocations, independent of any
/// filter/sort/page state: read once at startup, written on `prefs set`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Grid density used when neither a flag nor a query param names one.
    pub default_page_size: usize,
    /// Whether hovering a card shows a photo preview.
    pub hover_preview: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            default_page_size: PageSize::default().as_usize(),
            hover_preview: false,
        }
    }
}

impl Preferences {
    pub fn path_in(data_dir: &PathBuf) -> PathBuf {
        data_dir.join("preferences.toml")
    }

    /// A missing file is not an error; it loads the defaults.
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let prefs: Preferences = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(prefs)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }

    /// Apply one `prefs set` assignment. Keys are kebab-case as typed on
    /// the command line.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "default-page-size" => {
                let count: usize = value
                    .parse()
                    .with_context(|| format!("'{value}' is not a number"))?;
                let size = PageSize::from_count(count)
                    .with_context(|| format!("'{value}' is not one of 12, 24, 48"))?;
                self.default_page_size = size.as_usize();
            }
            "hover-preview" => {
                self.hover_preview = value
                    .parse()
                    .with_context(|| format!("'{value}' is not true or false"))?;
            }
            _ => bail!("unknown preference key '{key}'"),
        }
        Ok(())
    }
}
