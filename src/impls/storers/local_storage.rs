use std::fs::create_dir_all;
use std::path::{Path, PathBuf};
use tokio::fs::{read, write};

use crate::core::ports::exporter::ExportStorer;
use crate::error::Error;

/// Keeps exported workbooks in a directory on local disk.
pub struct LocalExportStorer {
    path: PathBuf,
}

impl LocalExportStorer {
    pub fn new(path: &str) -> Result<Self, Error> {
        create_dir_all(path)?;
        Ok(Self { path: Path::new(path).to_owned() })
    }
}

impl ExportStorer for LocalExportStorer {
    async fn write(&self, file_name: &str, content: &[u8]) -> Result<String, Error> {
        let path = self.path.join(file_name);
        write(&path, content).await?;
        Ok(path.to_string_lossy().into_owned())
    }

    async fn read(&self, file_name: &str) -> Result<Vec<u8>, Error> {
        Ok(read(self.path.join(file_name)).await?)
    }
}
