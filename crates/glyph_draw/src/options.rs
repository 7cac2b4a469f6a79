use std::{fs, io::Write, path::PathBuf};

use glyph_engine_edit::{
    brushes::{BoxCharset, DEFAULT_BOX_CHARSET},
    Snapshot, DEFAULT_CANVAS_COLOR, DEFAULT_FOREGROUND, DEFAULT_GLYPH, DEFAULT_HEIGHT, DEFAULT_WIDTH,
};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

const PROJECT_QUALIFIER: &str = "com";
const PROJECT_ORGANIZATION: &str = "GitHub";
const PROJECT_APPLICATION: &str = "glyph_draw";

/// Lazily initialized project directories (computed once on first access)
static PROJECT_DIRS: Lazy<Option<directories::ProjectDirs>> =
    Lazy::new(|| directories::ProjectDirs::from(PROJECT_QUALIFIER, PROJECT_ORGANIZATION, PROJECT_APPLICATION));

/// Defaults for new documents. Persisted in `options.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub default_width: i32,
    pub default_height: i32,
    pub box_charset: String,
    pub canvas_color: String,
    pub glyph: String,
    pub foreground: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            default_width: DEFAULT_WIDTH,
            default_height: DEFAULT_HEIGHT,
            box_charset: DEFAULT_BOX_CHARSET.to_string(),
            canvas_color: DEFAULT_CANVAS_COLOR.to_string(),
            glyph: DEFAULT_GLYPH.to_string(),
            foreground: DEFAULT_FOREGROUND.to_string(),
        }
    }
}

impl Options {
    pub const FILE_NAME: &'static str = "options.toml";

    pub fn load() -> Self {
        let Some(config_dir) = Self::config_dir() else {
            return Options::default();
        };

        let options_file = config_dir.join(Self::FILE_NAME);
        if options_file.exists() {
            match fs::read_to_string(&options_file) {
                Ok(txt) => return Self::from_toml(&txt),
                Err(err) => log::error!("Error reading options file: {}", err),
            }
        }
        Options::default()
    }

    /// Parses `txt`, falling back to the defaults on malformed input.
    pub fn from_toml(txt: &str) -> Self {
        match toml::from_str::<Options>(txt) {
            Ok(options) => options,
            Err(err) => {
                log::warn!("Ignoring malformed options file: {}", err);
                Options::default()
            }
        }
    }

    /// Write to a temp file, then rename over the options file.
    pub fn store(&self) {
        let Some(config_dir) = Self::config_dir() else {
            log::error!("Cannot determine config directory for saving options");
            return;
        };
        if let Err(err) = fs::create_dir_all(&config_dir) {
            log::error!("Can't create configuration directory {:?}: {}", config_dir, err);
            return;
        }

        let file_path = config_dir.join(Self::FILE_NAME);
        let temp_path = config_dir.join(format!(".{}.tmp", Self::FILE_NAME));

        match toml::to_string_pretty(self) {
            Ok(text) => {
                let write_result = (|| -> std::io::Result<()> {
                    let mut file = fs::File::create(&temp_path)?;
                    file.write_all(text.as_bytes())?;
                    file.sync_all()?;
                    Ok(())
                })();

                if let Err(err) = write_result {
                    log::error!("Error writing temp options file: {}", err);
                    let _ = fs::remove_file(&temp_path);
                    return;
                }
                if let Err(err) = fs::rename(&temp_path, &file_path) {
                    log::error!("Error renaming options file: {}", err);
                    let _ = fs::remove_file(&temp_path);
                }
            }
            Err(err) => log::error!("Error serializing options: {}", err),
        }
    }

    pub fn config_dir() -> Option<PathBuf> {
        PROJECT_DIRS.as_ref().map(|p| p.config_dir().to_path_buf())
    }

    pub fn config_file() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join(Self::FILE_NAME))
    }

    /// The configured charset, or the default one if it is too short.
    pub fn box_charset(&self) -> BoxCharset {
        BoxCharset::new(&self.box_charset).unwrap_or_else(|err| {
            log::warn!("{err}, using the default box charset");
            BoxCharset::default()
        })
    }

    /// Applies the drawing defaults to a fresh document.
    pub fn apply_to(&self, snapshot: &mut Snapshot) {
        snapshot.current_glyph.clone_from(&self.glyph);
        snapshot.current_foreground_color.clone_from(&self.foreground);
        snapshot.canvas_color.clone_from(&self.canvas_color);
    }
}
