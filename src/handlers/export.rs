use crate::actix_web::{
    http::header::CONTENT_DISPOSITION,
    web::{Data, Path},
    HttpResponse,
};
use crate::core::ports::repository::Manager;
use crate::core::services::export as service;
use crate::database::sqlx::PgSqlxManager;
use crate::error::Error;
use crate::impls::sheets::xlsx::{XlsxWriter, XLSX_CONTENT_TYPE};
use crate::impls::storers::local_storage::LocalExportStorer;

pub static DOWNLOAD_NAME: &str = "responses.xlsx";

/// Access is checked by the authorizer on the enclosing scope.
pub async fn export(survey_id: Path<(i32,)>, manager: Data<PgSqlxManager>, writer: Data<XlsxWriter>, storer: Data<LocalExportStorer>) -> Result<HttpResponse, Error> {
    let mut db = manager.db().await?;
    let export = service::export_responses(&mut db, writer.get_ref(), survey_id.into_inner().0).await?;
    let content = service::archive_export(storer.get_ref(), &export).await?;
    Ok(HttpResponse::Ok()
        .content_type(XLSX_CONTENT_TYPE)
        .insert_header((CONTENT_DISPOSITION, format!("attachment; filename=\"{}\"", DOWNLOAD_NAME)))
        .body(content))
}
