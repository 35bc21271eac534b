use std::env;
use std::io;
use std::path::{Path, PathBuf};

use postcheck::config::{read_config, Config};

use crate::CFG_FILE_NAME;

fn get_config_path() -> Option<PathBuf> {
    if let Ok(cur_dir) = env::current_dir() {
        if cur_dir.join(CFG_FILE_NAME).exists() {
            return Some(cur_dir.join(CFG_FILE_NAME));
        }
    }

    if let Some(cfg_dir) = dirs::config_dir() {
        if cfg_dir.join(CFG_FILE_NAME).exists() {
            return Some(cfg_dir.join(CFG_FILE_NAME));
        }
    }

    None
}

/// An explicit path must exist. Without one, a missing file just means defaults.
pub(crate) fn open_config(cfg_path: Option<&Path>) -> io::Result<(Config, Option<PathBuf>)> {
    let config_path = match cfg_path {
        Some(path) => Some(path.to_path_buf()),
        None => get_config_path(),
    };

    match config_path {
        Some(path) => {
            let config = read_config(&path)?;
            Ok((config, Some(path)))
        }
        None => Ok((Config::default(), None)),
    }
}
