//! Save File (.clsave)
//!
//! Binary file format for persisting game progress to disk.
//! Layout: fixed 32-byte header | progress + settings JSON.
//!
//! The header contains magic bytes, version, and the payload extent, plus a
//! cached trust level and transfur count so launchers can show a save
//! summary without parsing the JSON.

use std::path::Path;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::game::settings::Settings;
use crate::game::state::GameProgress;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Magic bytes identifying a .clsave file.
pub const SAVE_MAGIC: [u8; 4] = *b"CLSV";

/// Current file format version.
const SAVE_VERSION: u32 = 1;

/// Size of the header in bytes. Must always be 32.
const HEADER_SIZE: u32 = 32;

// ============================================================================
// HEADER
// ============================================================================

/// Fixed-size binary header for the .clsave format.
///
/// Total size: exactly 32 bytes.
/// - `magic` (4) + `version` (4) + `trust_level` (4) + `transfur_count` (4)
///   + `payload_offset` (4) + `payload_len` (4) + `_reserved` (8) = 32.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct SaveHeader {
    /// Magic bytes: always `b"CLSV"`.
    pub magic: [u8; 4],
    /// File format version (currently 1).
    pub version: u32,
    /// Cached trust level (matches the payload).
    pub trust_level: i32,
    /// Cached transfur count (matches the payload).
    pub transfur_count: u32,
    /// Byte offset from the start of the file to the JSON payload.
    pub payload_offset: u32,
    /// Length of the JSON payload in bytes.
    pub payload_len: u32,
    /// Reserved for future use; must be zeroed.
    pub _reserved: [u8; 8],
}

static_assertions::assert_eq_size!(SaveHeader, [u8; 32]);

// ============================================================================
// PAYLOAD
// ============================================================================

/// Everything a save file carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveData {
    /// Progression state.
    pub progress: GameProgress,
    /// Player settings.
    pub settings: Settings,
}

// ============================================================================
// ERROR TYPE
// ============================================================================

/// Errors that can occur during .clsave save/load.
#[derive(Debug)]
pub enum SaveFileError {
    /// File is smaller than the 32-byte header, or the payload extent
    /// points past the end of the file.
    FileTooShort,
    /// Magic bytes do not match `b"CLSV"`.
    InvalidMagic,
    /// File version is not supported.
    UnsupportedVersion(u32),
    /// Standard I/O error.
    IoError(std::io::Error),
    /// JSON serialization/deserialization error.
    JsonError(serde_json::Error),
}

impl std::fmt::Display for SaveFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveFileError::FileTooShort => write!(f, "file too short for clsave header"),
            SaveFileError::InvalidMagic => write!(f, "invalid magic bytes (expected CLSV)"),
            SaveFileError::UnsupportedVersion(v) => {
                write!(f, "unsupported clsave version: {v}")
            }
            SaveFileError::IoError(e) => write!(f, "IO error: {e}"),
            SaveFileError::JsonError(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for SaveFileError {}

impl From<std::io::Error> for SaveFileError {
    fn from(e: std::io::Error) -> Self {
        SaveFileError::IoError(e)
    }
}

impl From<serde_json::Error> for SaveFileError {
    fn from(e: serde_json::Error) -> Self {
        SaveFileError::JsonError(e)
    }
}

// ============================================================================
// SAVE
// ============================================================================

/// Write a .clsave file to disk.
///
/// File layout:
/// ```text
/// [SaveHeader 32 bytes]
/// [progress + settings JSON bytes]
/// ```
pub fn save_game(path: &Path, data: &SaveData) -> Result<(), SaveFileError> {
    use std::io::Write;

    let payload = serde_json::to_vec(data)?;

    let header = SaveHeader {
        magic: SAVE_MAGIC,
        version: SAVE_VERSION,
        trust_level: data.progress.trust_level,
        transfur_count: data.progress.transfur_count,
        payload_offset: HEADER_SIZE,
        payload_len: payload.len() as u32,
        _reserved: [0u8; 8],
    };

    // Ensure parent directories exist.
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = std::fs::File::create(path)?;
    file.write_all(bytemuck::bytes_of(&header))?;
    file.write_all(&payload)?;
    Ok(())
}

// ============================================================================
// LOAD
// ============================================================================

/// Read a .clsave file from disk and reconstruct progress and settings.
pub fn load_game(path: &Path) -> Result<SaveData, SaveFileError> {
    let data = std::fs::read(path)?;

    if data.len() < HEADER_SIZE as usize {
        return Err(SaveFileError::FileTooShort);
    }

    let header: &SaveHeader = bytemuck::from_bytes(&data[..HEADER_SIZE as usize]);

    if header.magic != SAVE_MAGIC {
        return Err(SaveFileError::InvalidMagic);
    }
    if header.version != SAVE_VERSION {
        return Err(SaveFileError::UnsupportedVersion(header.version));
    }

    let start = header.payload_offset as usize;
    let end = start + header.payload_len as usize;
    if data.len() < end {
        return Err(SaveFileError::FileTooShort);
    }

    let save: SaveData = serde_json::from_slice(&data[start..end])?;
    Ok(save)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("cozy_library_test_{name}.clsave"))
    }

    fn make_save_data() -> SaveData {
        let mut progress = GameProgress::new();
        progress.adjust_trust(17);
        progress.record_transfur();
        progress.unlock_moment("Snack Time");
        let mut settings = Settings::new();
        settings.set_aim_sensitivity(1.4);
        SaveData { progress, settings }
    }

    #[test]
    fn test_header_size() {
        assert_eq!(std::mem::size_of::<SaveHeader>(), 32);
    }

    #[test]
    fn test_save_load_round_trip() {
        let path = temp_path("round_trip");
        let data = make_save_data();

        save_game(&path, &data).unwrap();
        let loaded = load_game(&path).unwrap();
        assert_eq!(loaded, data);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_header_caches_summary_fields() {
        let path = temp_path("summary");
        let data = make_save_data();
        save_game(&path, &data).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let header: &SaveHeader = bytemuck::from_bytes(&bytes[..32]);
        assert_eq!(header.magic, SAVE_MAGIC);
        assert_eq!(header.trust_level, 67);
        assert_eq!(header.transfur_count, 1);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_rejects_bad_magic() {
        let path = temp_path("bad_magic");
        let data = make_save_data();
        save_game(&path, &data).unwrap();

        let mut bytes = std::fs::read(&path).unwrap();
        bytes[0] = b'X';
        std::fs::write(&path, &bytes).unwrap();

        assert!(matches!(
            load_game(&path),
            Err(SaveFileError::InvalidMagic)
        ));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_rejects_truncated_file() {
        let path = temp_path("truncated");
        std::fs::write(&path, [0u8; 10]).unwrap();
        assert!(matches!(
            load_game(&path),
            Err(SaveFileError::FileTooShort)
        ));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_rejects_future_version() {
        let path = temp_path("version");
        let data = make_save_data();
        save_game(&path, &data).unwrap();

        let mut bytes = std::fs::read(&path).unwrap();
        // Version field sits at offset 4
        bytes[4..8].copy_from_slice(&99u32.to_le_bytes());
        std::fs::write(&path, &bytes).unwrap();

        assert!(matches!(
            load_game(&path),
            Err(SaveFileError::UnsupportedVersion(99))
        ));
        std::fs::remove_file(&path).ok();
    }
}
