use std::io;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Filesystem store for uploaded category images.
///
/// Each file lands under the configured root with a unique prefix; the
/// returned path is what gets persisted on the entity.
#[derive(Debug, Clone)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store image bytes and return the stored path.
    pub async fn save(&self, file_name: &str, data: &[u8]) -> io::Result<String> {
        tokio::fs::create_dir_all(&self.root).await?;

        let stored_name = format!("{}-{}", Uuid::new_v4(), sanitize_file_name(file_name));
        let path = self.root.join(stored_name);
        tokio::fs::write(&path, data).await?;

        tracing::info!(path = %path.display(), "Stored uploaded image");
        Ok(path.to_string_lossy().into_owned())
    }
}

/// Keep only the final path component and replace anything outside
/// [A-Za-z0-9._-] so client-supplied names cannot escape the store root.
fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = Path::new(name)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.is_empty() {
        "imagem".to_string()
    } else {
        cleaned
    }
}
