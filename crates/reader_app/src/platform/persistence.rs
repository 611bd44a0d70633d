use std::fs;
use std::path::{Path, PathBuf};

use reader_core::{ReaderSettings, ReadingMode};
use reader_engine::AtomicFileWriter;
use reader_logging::{reader_error, reader_info, reader_warn};
use serde::{Deserialize, Serialize};

const STATE_FILENAME: &str = "reader_state.ron";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
enum PersistedReadingMode {
    #[default]
    PageByPage,
    Continuous,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
struct PersistedState {
    #[serde(default)]
    reading_mode: PersistedReadingMode,
    #[serde(default)]
    last_location: Option<String>,
}

/// What the reader remembers between runs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Remembered {
    pub settings: ReaderSettings,
    pub last_location: Option<String>,
}

/// Keeps the remembered state in memory and mirrors each change to disk.
pub struct StateStore {
    writer: AtomicFileWriter,
    remembered: Remembered,
}

impl StateStore {
    pub fn open(state_dir: &Path) -> Self {
        Self {
            writer: AtomicFileWriter::new(PathBuf::from(state_dir)),
            remembered: load(state_dir),
        }
    }

    pub fn remembered(&self) -> &Remembered {
        &self.remembered
    }

    pub fn set_settings(&mut self, settings: ReaderSettings) {
        if self.remembered.settings != settings {
            self.remembered.settings = settings;
            self.save();
        }
    }

    pub fn set_last_location(&mut self, location: &str) {
        if self.remembered.last_location.as_deref() != Some(location) {
            self.remembered.last_location = Some(location.to_string());
            self.save();
        }
    }

    fn save(&self) {
        let state = PersistedState {
            reading_mode: match self.remembered.settings.reading_mode {
                ReadingMode::PageByPage => PersistedReadingMode::PageByPage,
                ReadingMode::Continuous => PersistedReadingMode::Continuous,
            },
            last_location: self.remembered.last_location.clone(),
        };

        let pretty = ron::ser::PrettyConfig::new();
        let content = match ron::ser::to_string_pretty(&state, pretty) {
            Ok(text) => text,
            Err(err) => {
                reader_error!("Failed to serialize reader state: {}", err);
                return;
            }
        };

        if let Err(err) = self.writer.write(STATE_FILENAME, &content) {
            reader_error!(
                "Failed to write reader state to {:?}: {}",
                self.writer.dir(),
                err
            );
        }
    }
}

fn load(state_dir: &Path) -> Remembered {
    let path = state_dir.join(STATE_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Remembered::default();
        }
        Err(err) => {
            reader_warn!("Failed to read reader state from {:?}: {}", path, err);
            return Remembered::default();
        }
    };

    let state: PersistedState = match ron::from_str(&content) {
        Ok(state) => state,
        Err(err) => {
            reader_warn!("Failed to parse reader state from {:?}: {}", path, err);
            return Remembered::default();
        }
    };

    reader_info!("Loaded reader state from {:?}", path);
    Remembered {
        settings: ReaderSettings {
            reading_mode: match state.reading_mode {
                PersistedReadingMode::PageByPage => ReadingMode::PageByPage,
                PersistedReadingMode::Continuous => ReadingMode::Continuous,
            },
        },
        last_location: state.last_location,
    }
}
