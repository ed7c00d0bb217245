use std::io::Write;
use std::path::{Path, PathBuf};

use humansize::{DECIMAL, format_size};
use mime::Mime;

use crate::error::AppError;

/// A file ready to be written out: name, content type and body.
#[derive(Debug, Clone)]
pub struct Download {
    pub file_name: &'static str,
    pub content_type: Mime,
    pub body: String,
}

/// Where a download ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Saved {
    pub path: PathBuf,
    pub size_bytes: u64,
}

impl Saved {
    pub fn human_size(&self) -> String {
        format_size(self.size_bytes, DECIMAL)
    }
}

/// Write `download` into `dir` under its file name.
///
/// The body goes to a temporary file in the same directory first and is
/// renamed into place, so an existing export is never left half-written.
/// The temporary file is removed on every error path.
pub fn save(dir: &Path, download: &Download) -> Result<Saved, AppError> {
    std::fs::create_dir_all(dir)?;

    let mut tmp = tempfile::Builder::new()
        .prefix(".reqtrack-")
        .suffix(".part")
        .tempfile_in(dir)?;
    tmp.write_all(download.body.as_bytes())?;
    tmp.flush()?;

    let path = dir.join(download.file_name);
    tmp.persist(&path).map_err(|err| AppError::Io(err.error))?;

    let saved = Saved {
        path,
        size_bytes: download.body.len() as u64,
    };
    tracing::info!(
        path = %saved.path.display(),
        content_type = %download.content_type,
        bytes = saved.size_bytes,
        "export written"
    );
    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn download(body: &str) -> Download {
        Download {
            file_name: "out.txt",
            content_type: mime::TEXT_PLAIN,
            body: body.to_string(),
        }
    }

    #[test]
    fn writes_only_the_final_file() {
        let dir = tempfile::tempdir().unwrap();
        let saved = save(dir.path(), &download("hello")).unwrap();

        assert_eq!(saved.path, dir.path().join("out.txt"));
        assert_eq!(saved.size_bytes, 5);
        assert_eq!(std::fs::read_to_string(&saved.path).unwrap(), "hello");

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, ["out.txt"]);
    }

    #[test]
    fn overwrites_previous_export() {
        let dir = tempfile::tempdir().unwrap();
        save(dir.path(), &download("first version")).unwrap();
        let saved = save(dir.path(), &download("second")).unwrap();
        assert_eq!(std::fs::read_to_string(saved.path).unwrap(), "second");
    }

    #[test]
    fn creates_missing_export_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let saved = save(&nested, &download("")).unwrap();
        assert!(saved.path.exists());
        assert_eq!(saved.human_size(), "0 B");
    }
}
