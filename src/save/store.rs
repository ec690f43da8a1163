use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;

use super::format::SavedGame;
use crate::error::SaveError;
use crate::game::Game;

impl Game {
    /// Write the game to `path` as pretty-printed JSON.
    ///
    /// The data goes to a `.tmp` sibling first and is renamed into place, so an
    /// interrupted save never leaves a half-written file behind.
    pub fn save(&self, path: &Path) -> Result<(), SaveError> {
        let json = serde_json::to_string_pretty(&SavedGame::from(self))?;
        let tmp = tmp_path(path);

        let written = write_file(&tmp, json.as_bytes()).and_then(|()| {
            fs::rename(&tmp, path).map_err(|e| SaveError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        });
        if written.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        written?;

        info!("saved game to {}", path.display());
        Ok(())
    }

    /// Read a game saved with [`Game::save`]. Nothing is returned unless
    /// every check on the saved data passes.
    pub fn load(path: &Path) -> Result<Game, SaveError> {
        let file = File::open(path).map_err(|e| SaveError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let saved: SavedGame =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| SaveError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?;
        let game = Game::try_from(saved)?;

        info!(
            "loaded {}x{} game from {}",
            game.rows(),
            game.columns(),
            path.display()
        );
        Ok(game)
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), SaveError> {
    let io_err = |e: std::io::Error| SaveError::Io {
        path: path.to_path_buf(),
        source: e,
    };
    let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
    writer.write_all(bytes).map_err(io_err)?;
    writer.flush().map_err(io_err)?;
    Ok(())
}
