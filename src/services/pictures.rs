//! Item pictures stored as `<pictures_dir>/<item name>.(png|jpg)`

use std::path::PathBuf;

use crate::error::AppResult;

/// Extensions looked up, in order
const EXTENSIONS: [&str; 2] = ["png", "jpg"];

/// Picture file contents
#[derive(Debug, Clone)]
pub struct Picture {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}

#[derive(Clone)]
pub struct PictureStore {
    dir: PathBuf,
}

impl PictureStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the picture for `name`, png first
    pub async fn find(&self, name: &str) -> AppResult<Option<PathBuf>> {
        if !is_file_name(name) {
            return Ok(None);
        }
        for extension in EXTENSIONS {
            let path = self.dir.join(format!("{}.{}", name, extension));
            if tokio::fs::try_exists(&path).await? {
                return Ok(Some(path));
            }
        }
        Ok(None)
    }

    pub async fn read(&self, name: &str) -> AppResult<Option<Picture>> {
        let Some(path) = self.find(name).await? else {
            return Ok(None);
        };
        let bytes = tokio::fs::read(&path).await?;
        let content_type = match path.extension().and_then(|e| e.to_str()) {
            Some("png") => "image/png",
            _ => "image/jpeg",
        };
        Ok(Some(Picture {
            bytes,
            content_type,
        }))
    }

    /// Move the picture of `old_name` to `new_name`, keeping its extension.
    ///
    /// Returns the new path, or `None` when there was nothing to move. An
    /// existing picture for `new_name`, under any extension, is never
    /// overwritten or shadowed.
    pub async fn rename(&self, old_name: &str, new_name: &str) -> AppResult<Option<PathBuf>> {
        if !is_file_name(new_name) {
            tracing::warn!("Picture not renamed: {:?} is not usable as a file name", new_name);
            return Ok(None);
        }
        let Some(old_path) = self.find(old_name).await? else {
            return Ok(None);
        };
        let extension = old_path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or(EXTENSIONS[0]);
        let new_path = self.dir.join(format!("{}.{}", new_name, extension));

        if let Some(existing) = self.find(new_name).await? {
            tracing::warn!("Picture not renamed: {} already exists", existing.display());
            return Ok(None);
        }

        tokio::fs::rename(&old_path, &new_path).await?;
        tracing::info!("Renamed picture {} -> {}", old_path.display(), new_path.display());
        Ok(Some(new_path))
    }
}

/// Item names are used verbatim as file names; anything that could leave
/// the pictures directory is refused.
fn is_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}
