// crates/infra/src/persistence/file_writer.rs
use std::{fs, fs::File, io::{BufWriter, Write}, path::Path};

use line_histogram_shared_kernel::{InfraResult, InfrastructureError};

/// Helper utilities for writing documents back to disk.
pub struct FileWriter;

impl FileWriter {
    /// Write `data` to `path`, replacing any previous content.
    pub fn write(path: &Path, data: &[u8]) -> InfraResult<()> {
        let file_write = |source| InfrastructureError::FileWrite { path: path.to_path_buf(), source };
        let mut w = File::create(path).map(BufWriter::new).map_err(file_write)?;
        w.write_all(data).map_err(file_write)?;
        w.flush().map_err(file_write)
    }

    /// Atomically write `data` to `path` via a temp file and rename.
    /// Best-effort fsync is attempted where available to reduce corruption on crash.
    pub fn atomic_write(path: &Path, data: &[u8]) -> InfraResult<()> {
        Self::atomic_write_io(path, data)
            .map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source })
    }

    fn atomic_write_io(path: &Path, data: &[u8]) -> std::io::Result<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        // Same directory as the target so the rename stays on one filesystem.
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

        let file = File::create(&tmp)?;
        let mut w = BufWriter::new(file);
        if let Err(err) = w.write_all(data).and_then(|()| w.flush()) {
            let _ = fs::remove_file(&tmp);
            return Err(err);
        }
        let _ = w.get_ref().sync_all();

        if let Ok(meta) = fs::metadata(path) {
            let _ = fs::set_permissions(&tmp, meta.permissions());
        }
        fs::rename(&tmp, path)?;

        // Attempt to sync parent directory to make the rename durable on Unix.
        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }
}
