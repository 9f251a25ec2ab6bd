use anyhow::Result;
use std::path::PathBuf;
use tokio::fs;
use tracing::info;

use super::connection::DataDirectory;

/// Saves uploaded logo images under `static/logo/`
#[derive(Debug, Clone)]
pub struct LogoRepository {
    directory: PathBuf,
}

impl LogoRepository {
    pub fn new(data_dir: &DataDirectory) -> Self {
        Self {
            directory: data_dir.logo_directory(),
        }
    }

    /// Write the logo and return the path it was stored at
    pub async fn save_logo(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        if !fs::try_exists(&self.directory).await? {
            fs::create_dir_all(&self.directory).await?;
        }

        let path = self.directory.join(sanitize_file_name(file_name));
        fs::write(&path, bytes).await?;
        info!("Saved logo to {}", path.display());
        Ok(path)
    }
}

/// Reduce an uploaded file name to a safe, flat file name.
///
/// Any directory part is dropped, whitespace becomes `_`, only ASCII
/// alphanumerics and `-_.` survive, and leading dots are stripped.
pub fn sanitize_file_name(file_name: &str) -> String {
    let base = file_name.rsplit(['/', '\\']).next().unwrap_or_default();

    let cleaned: String = base
        .chars()
        .filter_map(|c| match c {
            c if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' => Some(c),
            c if c.is_whitespace() => Some('_'),
            _ => None,
        })
        .collect();

    let cleaned = cleaned.trim_start_matches(['.', '_']).to_string();
    if cleaned.is_empty() {
        "logo".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_utils::TestEnvironment;

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("logo.png"), "logo.png");
        assert_eq!(sanitize_file_name("My Logo.png"), "My_Logo.png");
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("C:\\Users\\me\\brand.jpg"), "brand.jpg");
        assert_eq!(sanitize_file_name(".hidden"), "hidden");
        assert_eq!(sanitize_file_name("लोगो.png"), "png");
        assert_eq!(sanitize_file_name("../"), "logo");
    }

    #[tokio::test]
    async fn test_save_logo_stays_inside_logo_directory() {
        let env = TestEnvironment::new().await.unwrap();
        let repo = LogoRepository::new(&env.data_dir);

        let path = repo.save_logo("../escape.png", b"png-bytes").await.unwrap();

        assert_eq!(path, env.data_dir.logo_directory().join("escape.png"));
        assert_eq!(std::fs::read(&path).unwrap(), b"png-bytes");
    }
}
