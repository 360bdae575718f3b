use crate::core::models::export::Sheet;
use crate::error::Error;

/// Serializes a sheet into a spreadsheet file.
pub trait SheetWriter {
    fn write(&self, sheet: &Sheet) -> Result<Vec<u8>, Error>;
}

/// Archive of produced exports. Downloads are served from it.
pub trait ExportStorer {
    async fn write(&self, file_name: &str, content: &[u8]) -> Result<String, Error>;
    async fn read(&self, file_name: &str) -> Result<Vec<u8>, Error>;
}
