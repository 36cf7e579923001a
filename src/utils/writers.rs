use super::{readers::is_gzipped, Result};
use flate2::{write::GzEncoder, Compression};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

enum Sink {
    Plain(BufWriter<NamedTempFile>),
    Gzip(GzEncoder<BufWriter<NamedTempFile>>),
}

/// Output file that only appears at its destination once `commit` succeeds.
///
/// Data is staged in a temporary file next to the destination; dropping an
/// uncommitted writer removes the staged file.
pub struct OutputFile {
    sink: Sink,
    path: PathBuf,
}

impl OutputFile {
    pub fn create(path: &Path) -> Result<Self> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let temp = NamedTempFile::new_in(dir)
            .map_err(|e| format!("Failed to create output {}: {}", path.display(), e))?;
        set_default_permissions(&temp)?;

        let buffered = BufWriter::new(temp);
        let sink = if is_gzipped(path) {
            Sink::Gzip(GzEncoder::new(buffered, Compression::default()))
        } else {
            Sink::Plain(buffered)
        };
        log::debug!("Staging output for {}", path.display());
        Ok(OutputFile {
            sink,
            path: path.to_path_buf(),
        })
    }

    pub fn commit(self) -> Result<()> {
        let error_msg = |e: &dyn std::fmt::Display| {
            format!("Failed to write output {}: {}", self.path.display(), e)
        };
        let buffered = match self.sink {
            Sink::Plain(w) => w,
            Sink::Gzip(encoder) => encoder.finish().map_err(|e| error_msg(&e))?,
        };
        let temp = buffered.into_inner().map_err(|e| error_msg(&e))?;
        temp.persist(&self.path).map_err(|e| error_msg(&e.error))?;
        log::debug!("Wrote {}", self.path.display());
        Ok(())
    }
}

impl Write for OutputFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.sink {
            Sink::Plain(w) => w.write(buf),
            Sink::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.sink {
            Sink::Plain(w) => w.flush(),
            Sink::Gzip(w) => w.flush(),
        }
    }
}

#[cfg(unix)]
fn set_default_permissions(temp: &NamedTempFile) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    temp.as_file()
        .set_permissions(std::fs::Permissions::from_mode(0o644))
        .map_err(|e| e.to_string())
}

#[cfg(not(unix))]
fn set_default_permissions(_temp: &NamedTempFile) -> Result<()> {
    Ok(())
}
