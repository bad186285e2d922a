//! Output writers.
//!
//! Each format has a pure `render_*` function returning the file content;
//! the `write_*` functions render and then write atomically (temp file in
//! the same directory, then rename), so a failed run never leaves a half
//! written file behind.

mod log;
mod lsd;
mod vsdxmf;

use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub use log::render_log;
pub use lsd::render_lsd;
pub use vsdxmf::render_vsdxmf;

use crate::convert::{DiagnosticReport, TargetEntry};
use crate::encoding::TextEncoding;
use crate::error::{ConvertError, ConvertResult};
use crate::phonemes::{PhonemeTable, RenameRecord};

/// Temp path next to `path`: the full file name plus `.tmp`.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

/// Write UTF-8 content to a file atomically.
pub fn write_atomic(path: impl AsRef<Path>, content: &str) -> ConvertResult<()> {
    write_atomic_bytes(path.as_ref(), content.as_bytes())
}

fn write_atomic_bytes(path: &Path, content: &[u8]) -> ConvertResult<()> {

    let write = || -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp = temp_path(path);
        {
            let mut file = fs::File::create(&temp)?;
            file.write_all(content)?;
            file.sync_all()?;
        }
        fs::rename(&temp, path)
    };

    write().map_err(|e| ConvertError::write(path, e))?;
    tracing::debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Write the target listing.
pub fn write_vsdxmf(entries: &[TargetEntry], path: impl AsRef<Path>) -> ConvertResult<()> {
    write_atomic(path, &render_vsdxmf(entries))
}

/// Write the phoneme dictionary.
pub fn write_lsd(table: &PhonemeTable, path: impl AsRef<Path>) -> ConvertResult<()> {
    write_atomic(path, &render_lsd(table))
}

/// Write the rename record in a form the next run can read back.
///
/// Written in the same encoding it is read with, so the next run can replay it.
pub fn write_rename(
    record: &RenameRecord,
    path: impl AsRef<Path>,
    encoding: TextEncoding,
) -> ConvertResult<()> {
    write_atomic_bytes(path.as_ref(), &encoding.encode(&record.render()))
}

/// Write the text diagnostic log.
pub fn write_log(report: &DiagnosticReport, path: impl AsRef<Path>) -> ConvertResult<()> {
    write_atomic(path, &render_log(report))
}

/// Write the diagnostic report as pretty JSON.
pub fn write_report_json(report: &DiagnosticReport, path: impl AsRef<Path>) -> ConvertResult<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| ConvertError::write(path, io::Error::new(io::ErrorKind::Other, e)))?;
    write_atomic(path, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonemes::PhonemePair;
    use tempfile::tempdir;

    #[test]
    fn test_write_atomic_creates_parent_and_no_temp() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out").join("voicebank.vsdxmf");

        write_atomic(&path, "a k,ak.wav,0.0,2.0,10.0,5.0,3.0\n").unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "a k,ak.wav,0.0,2.0,10.0,5.0,3.0\n"
        );
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn test_write_atomic_replaces_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("convert.log");
        fs::write(&path, "old").unwrap();

        write_atomic(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_write_to_directory_fails_with_path() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("oto.ini");
        fs::write(&blocker, "").unwrap();

        let err = write_atomic(blocker.join("voicebank.lsd"), "x").unwrap_err();
        assert!(matches!(err, ConvertError::WriteError { .. }));
    }

    #[test]
    fn test_temp_path_keeps_extension() {
        assert_eq!(
            temp_path(Path::new("out/voicebank.lsd")),
            PathBuf::from("out/voicebank.lsd.tmp")
        );
    }

    #[test]
    fn test_write_rename_reads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rename.txt");

        let mut record = RenameRecord::new();
        record.record("づ", PhonemePair::new("dz", "u"));
        record.record("ぢ", PhonemePair::new("dj", "i"));
        write_rename(&record, &path, TextEncoding::default()).unwrap();

        let seeds = crate::phonemes::rename::load_file(&path, TextEncoding::default()).unwrap();
        assert_eq!(seeds.len(), 2);
        assert_eq!(seeds[0].label, "ぢ");
        assert_eq!(seeds[1].pair, PhonemePair::new("dz", "u"));
    }

    #[test]
    fn test_write_rename_shift_jis() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rename.txt");
        let sjis = TextEncoding::from_label("shift_jis").unwrap();

        let mut record = RenameRecord::new();
        record.record("ぢ", PhonemePair::new("dj", "i"));
        write_rename(&record, &path, sjis).unwrap();

        assert_eq!(fs::read(&path).unwrap(), sjis.encode("ぢ,dj,i\n"));
        assert!(fs::read_to_string(&path).is_err());
        let seeds = crate::phonemes::rename::load_file(&path, sjis).unwrap();
        assert_eq!(seeds[0].label, "ぢ");
    }

    #[test]
    fn test_write_report_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");

        write_report_json(&DiagnosticReport::default(), &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["counts"]["samples_read"], 0);
        assert!(value["unconverted"].as_array().unwrap().is_empty());
        assert!(value["missing_vc_pairs"].as_array().unwrap().is_empty());
    }
}
