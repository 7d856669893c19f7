use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

pub const TEMP_DIR: &str = "temp_uploads";
pub const IMAGES_DIR: &str = "plant_images";

#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("media I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Local filesystem media store: staged uploads live under
/// `{root}/temp_uploads`, promoted images under `{root}/plant_images`
/// where the static file mount serves them.
#[derive(Clone)]
pub struct MediaStore {
    media_root: PathBuf,
}

impl MediaStore {
    pub fn new(media_root: PathBuf) -> Result<Self, MediaError> {
        fs::create_dir_all(media_root.join(TEMP_DIR))?;
        fs::create_dir_all(media_root.join(IMAGES_DIR))?;
        Ok(Self { media_root })
    }

    pub fn extension_for(mime_type: &str) -> &'static str {
        match mime_type {
            "image/jpeg" => "jpg",
            "image/png" => "png",
            "image/webp" => "webp",
            "image/gif" => "gif",
            "image/bmp" => "bmp",
            _ => "jpg",
        }
    }

    /// Writes the upload to a per-request staging path. The returned
    /// guard removes the file when dropped, so cleanup happens on
    /// every exit path of the request.
    pub fn stage_upload(&self, bytes: &[u8], extension: &str) -> Result<TempUpload, MediaError> {
        let path = self
            .media_root
            .join(TEMP_DIR)
            .join(format!("{}.{}", Uuid::new_v4(), extension));
        fs::write(&path, bytes)?;
        Ok(TempUpload { path })
    }

    /// Moves a staged upload into permanent storage and returns its
    /// public URL.
    pub fn promote(&self, staged: &TempUpload, extension: &str) -> Result<String, MediaError> {
        let file_name = format!("{}.{}", Uuid::new_v4(), extension);
        let destination = self.media_root.join(IMAGES_DIR).join(&file_name);
        fs::rename(&staged.path, &destination)?;
        Ok(format!("/media/{}/{}", IMAGES_DIR, file_name))
    }

    pub fn media_root(&self) -> &Path {
        &self.media_root
    }
}

/// Scoped staging artifact. Dropping it deletes the file; a path
/// already moved or removed is tolerated.
pub struct TempUpload {
    path: PathBuf,
}

impl TempUpload {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempUpload {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!(
                    "failed to remove staged upload {}: {}",
                    self.path.display(),
                    e
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn scratch_store() -> (MediaStore, PathBuf) {
        let root = env::temp_dir().join(format!("leafscan-media-{}", Uuid::new_v4()));
        let store = MediaStore::new(root.clone()).unwrap();
        (store, root)
    }

    #[test]
    fn staged_upload_is_removed_on_drop() {
        let (store, root) = scratch_store();
        let staged = store.stage_upload(b"fake image bytes", "jpg").unwrap();
        let path = staged.path().to_path_buf();
        assert!(path.exists());

        drop(staged);
        assert!(!path.exists());

        fs::remove_dir_all(root).unwrap();
    }

    #[test]
    fn promote_moves_file_and_returns_public_url() {
        let (store, root) = scratch_store();
        let staged = store.stage_upload(b"fake image bytes", "png").unwrap();
        let staged_path = staged.path().to_path_buf();

        let url = store.promote(&staged, "png").unwrap();
        assert!(url.starts_with("/media/plant_images/"));
        assert!(url.ends_with(".png"));

        let file_name = url.rsplit('/').next().unwrap();
        assert!(root.join(IMAGES_DIR).join(file_name).exists());
        assert!(!staged_path.exists());

        // Drop of the already-moved staging guard must be a no-op.
        drop(staged);

        fs::remove_dir_all(root).unwrap();
    }

    #[test]
    fn extensions_follow_mime_type() {
        assert_eq!(MediaStore::extension_for("image/jpeg"), "jpg");
        assert_eq!(MediaStore::extension_for("image/png"), "png");
        assert_eq!(MediaStore::extension_for("image/x-exotic"), "jpg");
    }
}
