//! Scratch directory holding a deck file and shell-script players.

use std::fs;
use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use tempfile::TempDir;

/// Files for one hub run. Everything is deleted when this is dropped.
pub struct Table {
    dir: TempDir,
}

impl Table {
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Write `text` as the deck file and return its path.
    pub fn deck(&self, text: &str) -> io::Result<PathBuf> {
        let path = self.dir.path().join("deck");
        fs::write(&path, text)?;
        Ok(path)
    }

    /// Write an executable `/bin/sh` script named `name`. `body` runs with
    /// the hub's four arguments in `$1`..`$4`.
    pub fn player(&self, name: &str, body: &str) -> io::Result<PathBuf> {
        let path = self.dir.path().join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n"))?;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
        Ok(path)
    }

    /// A well-behaved player: handshake, send `plays` one per line, then
    /// consume input until the hub closes its stdin.
    pub fn scripted_player(&self, name: &str, plays: &[&str]) -> io::Result<PathBuf> {
        let mut body = String::from("printf '@'\n");
        for card in plays {
            body.push_str(&format!("printf 'PLAY{card}\\n'\n"));
        }
        body.push_str("exec cat >/dev/null");
        self.player(name, &body)
    }

    /// Path of a file in the scratch directory, for scripts that leave markers.
    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
