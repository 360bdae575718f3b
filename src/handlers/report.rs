use crate::actix_web::{
    web::{Data, Json, Path},
    HttpRequest,
};
use crate::context::UserInfo;
use crate::core::models::report::{Mistake, SurveyResults};
use crate::core::ports::repository::Manager;
use crate::core::services::report as service;
use crate::database::sqlx::PgSqlxManager;
use crate::error::Error;
use crate::serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ResultsResponse {
    #[serde(flatten)]
    pub results: SurveyResults,
    pub public_url: String,
}

pub async fn results(req: HttpRequest, user_info: UserInfo, survey_id: Path<(i32,)>, manager: Data<PgSqlxManager>) -> Result<Json<ResultsResponse>, Error> {
    let mut db = manager.db().await?;
    let results = service::results(&mut db, user_info.id, survey_id.into_inner().0).await?;
    let conn = req.connection_info();
    let public_url = format!("{}://{}{}", conn.scheme(), conn.host(), results.public_path);
    Ok(Json(ResultsResponse { results, public_url }))
}

pub async fn review(user_info: UserInfo, survey_id: Path<(i32,)>, manager: Data<PgSqlxManager>) -> Result<Json<Vec<Mistake>>, Error> {
    let mut db = manager.db().await?;
    Ok(Json(service::review(&mut db, user_info.id, survey_id.into_inner().0).await?))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::chrono::{TimeZone, Utc};
    use crate::core::models::survey::Survey;
    use crate::serde_json::json;

    #[test]
    fn test_results_are_flattened() {
        let results = SurveyResults {
            survey: Survey {
                id: 3,
                title: "S".into(),
                is_active: true,
                creator_id: 1,
                created_at: Utc.timestamp_opt(0, 0).unwrap(),
            },
            questions: vec![],
            num_submissions: 2,
            public_path: "/surveys/3".into(),
        };
        let value = crate::serde_json::to_value(ResultsResponse {
            results,
            public_url: "http://localhost/surveys/3".into(),
        })
        .unwrap();
        assert_eq!(value["num_submissions"], json!(2));
        assert_eq!(value["survey"]["title"], json!("S"));
        assert_eq!(value["public_url"], json!("http://localhost/surveys/3"));
    }
}
