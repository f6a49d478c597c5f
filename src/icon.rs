use std::fs;
use std::io;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use tracing::debug;

use crate::error::IconError;
use crate::notify::IconPayload;

/// Icon file extensions accepted for file-based icons. Matching is case-sensitive.
pub const SUPPORTED_FORMATS: [&str; 5] = [".png", ".jpg", ".jpeg", ".ico", ".bmp"];

pub fn is_supported_format(extension: &str) -> bool {
    SUPPORTED_FORMATS.contains(&extension)
}

/// How an icon token is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconKind {
    Empty,
    /// Platform icon name, passed through to the notification server untouched.
    Stock(String),
    File(PathBuf),
}

/// Classifies icon tokens as stock names or file paths.
///
/// Relative tokens are looked up under `base_dir`, which defaults to the
/// process working directory.
#[derive(Debug, Clone, Default)]
pub struct IconResolver {
    base_dir: PathBuf,
}

impl IconResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Absolute paths and tokens with a separator are always files. A bare
    /// name with an extension is a file only if it exists right now, so
    /// `alert.png` flips between file and stock name depending on the
    /// working directory.
    pub fn classify(&self, token: &str) -> IconKind {
        if token.is_empty() {
            return IconKind::Empty;
        }

        if Path::new(token).is_absolute() || has_separator(token) {
            return IconKind::File(self.locate(token));
        }

        if extension_of(token).is_some() {
            let located = self.locate(token);
            if fs::metadata(&located).is_ok() {
                return IconKind::File(located);
            }
        }

        IconKind::Stock(token.to_string())
    }

    /// Checks that a file token exists and has a supported extension.
    /// Stock names and the empty token always pass.
    pub fn validate(&self, token: &str) -> Result<(), IconError> {
        match self.classify(token) {
            IconKind::File(path) => check_file(token, &path),
            kind => {
                debug!(?kind, "icon needs no file check");
                Ok(())
            }
        }
    }

    /// Turns the token into the payload handed to the notification backend.
    /// Only file tokens touch the filesystem.
    pub fn resolve(&self, token: &str) -> Result<IconPayload, IconError> {
        match self.classify(token) {
            IconKind::Empty => Ok(IconPayload::Empty),
            IconKind::Stock(name) => Ok(IconPayload::Name(name)),
            IconKind::File(path) => {
                let bytes = fs::read(&path).map_err(IconError::Read)?;
                debug!(path = %path.display(), len = bytes.len(), "loaded icon file");
                Ok(IconPayload::Bytes(bytes))
            }
        }
    }

    fn locate(&self, token: &str) -> PathBuf {
        self.base_dir.join(token)
    }
}

fn check_file(token: &str, path: &Path) -> Result<(), IconError> {
    if let Err(e) = fs::metadata(path) {
        return Err(match e.kind() {
            io::ErrorKind::NotFound => IconError::NotFound(token.to_string()),
            _ => IconError::Access(e),
        });
    }

    let extension = extension_of(token).unwrap_or_default();
    if is_supported_format(&extension) {
        Ok(())
    } else {
        Err(IconError::UnsupportedFormat { extension })
    }
}

fn has_separator(token: &str) -> bool {
    token.contains('/') || token.contains(MAIN_SEPARATOR)
}

/// Extension of the last path element including the leading dot, e.g.
/// `.png`. A bare `.png` counts as an extension too.
fn extension_of(token: &str) -> Option<String> {
    let name = token.rsplit(['/', MAIN_SEPARATOR]).next().unwrap_or(token);
    name.rfind('.').map(|i| name[i..].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_icon(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, b"dummy_icon_content").unwrap();
        path
    }

    #[test]
    fn test_empty_token() {
        let resolver = IconResolver::new();
        assert_eq!(resolver.classify(""), IconKind::Empty);
        assert!(resolver.validate("").is_ok());
        assert_eq!(resolver.resolve("").unwrap(), IconPayload::Empty);
    }

    #[test]
    fn test_stock_name_passes_without_file() {
        let dir = TempDir::new().unwrap();
        let resolver = IconResolver::with_base_dir(dir.path());

        assert_eq!(resolver.classify("warning"), IconKind::Stock("warning".into()));
        assert!(resolver.validate("warning").is_ok());
        assert_eq!(
            resolver.resolve("warning").unwrap(),
            IconPayload::Name("warning".into())
        );
    }

    #[test]
    fn test_supported_absolute_paths() {
        let dir = TempDir::new().unwrap();
        let resolver = IconResolver::new();

        for ext in SUPPORTED_FORMATS {
            let path = write_icon(&dir, &format!("test{}", ext));
            let token = path.to_string_lossy();
            assert!(resolver.validate(&token).is_ok(), "{} should be accepted", ext);
        }
    }

    #[test]
    fn test_unsupported_extensions() {
        let dir = TempDir::new().unwrap();
        let resolver = IconResolver::new();

        for ext in [".gif", ".webp", ".svg", ".txt", ".PNG"] {
            let path = write_icon(&dir, &format!("test{}", ext));
            let err = resolver.validate(&path.to_string_lossy()).unwrap_err();
            assert!(
                matches!(&err, IconError::UnsupportedFormat { extension } if extension == ext),
                "unexpected error for {}: {}",
                ext,
                err
            );
            assert!(err.to_string().contains("unsupported icon format"));
        }
    }

    #[test]
    fn test_missing_absolute_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.png");
        let token = missing.to_string_lossy().to_string();

        let err = IconResolver::new().validate(&token).unwrap_err();
        assert!(matches!(err, IconError::NotFound(ref t) if *t == token));
        assert_eq!(err.to_string(), format!("icon file does not exist: {}", token));
    }

    #[test]
    fn test_relative_path_with_separator_is_file() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("icons")).unwrap();
        write_icon(&dir, "icons/app.png");
        let resolver = IconResolver::with_base_dir(dir.path());

        assert_eq!(
            resolver.classify("icons/app.png"),
            IconKind::File(dir.path().join("icons/app.png"))
        );
        assert!(resolver.validate("icons/app.png").is_ok());
        assert!(matches!(
            resolver.validate("icons/missing.png"),
            Err(IconError::NotFound(_))
        ));
        assert!(matches!(
            resolver.validate("./missing"),
            Err(IconError::NotFound(_))
        ));
    }

    #[test]
    fn test_bare_name_depends_on_working_directory() {
        let dir = TempDir::new().unwrap();
        let resolver = IconResolver::with_base_dir(dir.path());

        assert_eq!(resolver.classify("alert.png"), IconKind::Stock("alert.png".into()));
        assert!(resolver.validate("alert.png").is_ok());

        write_icon(&dir, "alert.png");
        assert_eq!(
            resolver.classify("alert.png"),
            IconKind::File(dir.path().join("alert.png"))
        );
        assert_eq!(
            resolver.resolve("alert.png").unwrap(),
            IconPayload::Bytes(b"dummy_icon_content".to_vec())
        );
    }

    #[test]
    fn test_bare_file_with_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        write_icon(&dir, "notes.txt");
        let resolver = IconResolver::with_base_dir(dir.path());

        assert!(matches!(
            resolver.validate("notes.txt"),
            Err(IconError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_bare_name_without_extension_is_stock_even_if_file_exists() {
        let dir = TempDir::new().unwrap();
        write_icon(&dir, "dialog-information");
        let resolver = IconResolver::with_base_dir(dir.path());

        assert_eq!(
            resolver.classify("dialog-information"),
            IconKind::Stock("dialog-information".into())
        );
    }

    #[test]
    fn test_resolve_reads_file_bytes() {
        let dir = TempDir::new().unwrap();
        let path = write_icon(&dir, "icon.ico");

        let payload = IconResolver::new().resolve(&path.to_string_lossy()).unwrap();
        assert_eq!(payload, IconPayload::Bytes(b"dummy_icon_content".to_vec()));
    }

    #[test]
    fn test_resolve_missing_file_fails_with_read_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("gone.png");

        let err = IconResolver::new()
            .resolve(&missing.to_string_lossy())
            .unwrap_err();
        assert!(matches!(err, IconError::Read(_)));
        assert!(err.to_string().starts_with("cannot read icon file"));
    }

    #[test]
    fn test_icon_path_through_file_is_access_error() {
        let dir = TempDir::new().unwrap();
        let parent = write_icon(&dir, "file.png");
        let token = parent.join("inner.png").to_string_lossy().to_string();

        let err = IconResolver::new().validate(&token).unwrap_err();
        assert!(matches!(err, IconError::Access(_)), "unexpected error: {}", err);
        assert!(err.to_string().starts_with("cannot access icon file: "));
    }

    #[test]
    fn test_dot_name_in_working_directory_is_file() {
        let dir = TempDir::new().unwrap();
        let resolver = IconResolver::with_base_dir(dir.path());
        assert_eq!(resolver.classify(".png"), IconKind::Stock(".png".into()));

        write_icon(&dir, ".png");
        assert_eq!(resolver.classify(".png"), IconKind::File(dir.path().join(".png")));
        assert!(resolver.validate(".png").is_ok());
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("icon.png").as_deref(), Some(".png"));
        assert_eq!(extension_of("archive.tar.gz").as_deref(), Some(".gz"));
        assert_eq!(extension_of(".png").as_deref(), Some(".png"));
        assert_eq!(extension_of("dir.d/icon").as_deref(), None);
        assert_eq!(extension_of("warning"), None);
    }

    #[test]
    fn test_is_supported_format() {
        assert!(is_supported_format(".png"));
        assert!(is_supported_format(".jpeg"));
        assert!(!is_supported_format(".PNG"));
        assert!(!is_supported_format("png"));
        assert!(!is_supported_format(""));
    }
}
