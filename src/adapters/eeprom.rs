//! EEPROM adapter.
//!
//! Implements [`ByteStore`] over a byte image that is either held in memory
//! (tests) or mirrored to a file (host runs).
//!
//! - Erased cells read `0xFF`, so a fresh image loads with the fixed off
//!   time disabled.
//! - Writes follow EEPROM *update* semantics: a write of the value already
//!   stored is skipped and does not touch the file.
//! - The file is rewritten whole after each change.  The image is small.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::app::ports::{ByteStore, StorageError};

/// Size of the emulated device.
pub const EEPROM_SIZE: usize = 1024;

/// Value of an erased cell.
pub const ERASED: u8 = 0xFF;

pub struct EepromAdapter {
    image: Vec<u8>,
    path: Option<PathBuf>,
    writes: u32,
}

impl EepromAdapter {
    /// Volatile, fully erased image of `size` bytes.
    pub fn in_memory(size: usize) -> Self {
        Self {
            image: vec![ERASED; size],
            path: None,
            writes: 0,
        }
    }

    /// Image backed by `path`.  A missing file is an erased device; a short
    /// file is padded with erased cells.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut image = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("EEPROM: {} not found, starting erased", path.display());
                Vec::new()
            }
            Err(e) => return Err(e),
        };
        if image.len() > EEPROM_SIZE {
            warn!(
                "EEPROM: {} is {} bytes, ignoring the tail",
                path.display(),
                image.len()
            );
        }
        image.resize(EEPROM_SIZE, ERASED);
        Ok(Self {
            image,
            path: Some(path),
            writes: 0,
        })
    }

    /// Cell writes that actually changed a value.
    pub fn write_count(&self) -> u32 {
        self.writes
    }

    fn flush(&self) -> Result<(), StorageError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        fs::write(path, &self.image).map_err(|e| {
            warn!("EEPROM: writing {} failed: {}", path.display(), e);
            StorageError::IoError
        })
    }
}

impl ByteStore for EepromAdapter {
    fn read_byte(&self, address: u16) -> Result<u8, StorageError> {
        self.image
            .get(usize::from(address))
            .copied()
            .ok_or(StorageError::OutOfRange)
    }

    fn write_byte(&mut self, address: u16, value: u8) -> Result<(), StorageError> {
        let cell = self
            .image
            .get_mut(usize::from(address))
            .ok_or(StorageError::OutOfRange)?;
        if *cell == value {
            debug!("EEPROM: [{}] already {}, skipped", address, value);
            return Ok(());
        }
        *cell = value;
        self.writes += 1;
        self.flush()
    }
}
