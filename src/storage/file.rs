use super::KeyValueStore;
use crate::error::{AppError, AppResult};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// 以目录为单位的文件存储：每个键对应 `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn open(dir: impl AsRef<Path>) -> AppResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| {
            AppError::StorageError(format!("cannot create {}: {e}", dir.display()))
        })?;
        log::info!("Using file storage at {}", dir.display());
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> AppResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(AppError::StorageError(format!("invalid key: {key:?}")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::StorageError(format!(
                "read {}: {e}",
                path.display()
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        // 先写临时文件再改名，避免写到一半的文件
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)
            .and_then(|_| fs::rename(&tmp, &path))
            .map_err(|e| AppError::StorageError(format!("write {}: {e}", path.display())))
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::StorageError(format!(
                "remove {}: {e}",
                path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir(tag: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("lottery-{tag}-{}-{nanos}", std::process::id()))
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = temp_dir("persist");
        let store = FileStore::open(&dir).unwrap();
        assert!(store.get("lottery_prizes").unwrap().is_none());

        store.set("lottery_prizes", "[]").unwrap();
        let reopened = FileStore::open(&dir).unwrap();
        assert_eq!(reopened.get("lottery_prizes").unwrap().as_deref(), Some("[]"));

        reopened.remove("lottery_prizes").unwrap();
        assert!(store.get("lottery_prizes").unwrap().is_none());
        reopened.remove("lottery_prizes").unwrap();

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = temp_dir("keys");
        let store = FileStore::open(&dir).unwrap();
        assert!(store.set("../escape", "x").is_err());
        assert!(store.get("").is_err());
        fs::remove_dir_all(&dir).unwrap();
    }
}
