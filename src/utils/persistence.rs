//! JSON file helpers for save files.

use crate::core::constants::{SAVE_DIR_APPLICATION, SAVE_FILE_NAME};
use crate::core::error::GameError;
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Default save location: `<platform data dir>/wayfarer/save_game.json`.
///
/// Falls back to the working directory when the platform has no home.
pub fn default_save_path() -> PathBuf {
    match ProjectDirs::from("", "", SAVE_DIR_APPLICATION) {
        Some(dirs) => dirs.data_dir().join(SAVE_FILE_NAME),
        None => PathBuf::from(SAVE_FILE_NAME),
    }
}

/// Reads and decodes a JSON save file.
///
/// A missing file is [`GameError::NoSaveFound`]; undecodable content is
/// [`GameError::CorruptSave`].
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, GameError> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(GameError::NoSaveFound),
        Err(e) => return Err(e.into()),
    };
    Ok(serde_json::from_str(&json)?)
}

/// Writes `data` as pretty-printed JSON via a temp file and rename, so a
/// crash mid-write leaves the previous file intact.
pub fn save_json_atomic<T: Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let base = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(SAVE_FILE_NAME);
    let tmp_path = dir.join(format!(".{}.tmp-{}", base, std::process::id()));

    {
        let mut tmp = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&tmp_path)?;
        tmp.write_all(json.as_bytes())?;
        tmp.sync_all()?;
    }

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }
    if let Ok(dir_file) = File::open(dir) {
        let _ = dir_file.sync_all();
    }
    Ok(())
}
