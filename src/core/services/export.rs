use crate::core::models::{
    answer::{AnswerDetail, Query as AnswerQuery},
    export::{Export, Sheet},
    question::{Query as QuestionQuery, Question},
    submission::Respondent,
};
use crate::core::ports::exporter::{ExportStorer, SheetWriter};
use crate::core::ports::repository::{AnswerCommon, QuestionCommon, Store, SubmissionCommon, SurveyCommon};
use crate::error::Error;
use log::info;
use std::collections::HashMap;

pub const RESPONDENT_HEADER: &str = "Username";

/// One row per respondent, one column per question, each cell the text of the
/// chosen option or blank.
pub fn build_sheet(questions: &[Question], respondents: &[Respondent], answers: &[AnswerDetail]) -> Sheet {
    let mut header = Vec::with_capacity(questions.len() + 1);
    header.push(RESPONDENT_HEADER.to_owned());
    let mut columns = HashMap::with_capacity(questions.len());
    for (idx, q) in questions.iter().enumerate() {
        header.push(q.prompt.clone());
        columns.insert(q.id, idx + 1);
    }

    let mut chosen: HashMap<i32, HashMap<i32, &str>> = HashMap::new();
    for a in answers {
        chosen.entry(a.submission_id).or_default().insert(a.question_id, a.text.as_str());
    }

    let rows = respondents
        .iter()
        .map(|r| {
            let mut row = vec![String::new(); header.len()];
            row[0] = r.username.clone();
            if let Some(texts) = chosen.get(&r.submission_id) {
                for (question_id, text) in texts {
                    if let Some(&col) = columns.get(question_id) {
                        row[col] = (*text).to_owned();
                    }
                }
            }
            row
        })
        .collect();
    Sheet { header, rows }
}

/// `<title>_responses.xlsx` with path separators neutralized.
pub fn export_file_name(title: &str) -> String {
    let safe: String = title
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | '\0') { '_' } else { c })
        .collect();
    format!("{}_responses.xlsx", safe)
}

pub async fn export_responses<S, W>(store: &mut S, writer: &W, survey_id: i32) -> Result<Export, Error>
where
    S: Store,
    W: SheetWriter,
{
    let survey = SurveyCommon::get(store, survey_id).await?;
    let questions = QuestionCommon::query(
        store,
        QuestionQuery {
            survey_id_eq: Some(survey_id),
        },
    )
    .await?;
    let respondents = SubmissionCommon::respondents(store, survey_id).await?;
    let answers = AnswerCommon::query_details(
        store,
        AnswerQuery {
            survey_id_eq: Some(survey_id),
            is_complete_eq: Some(true),
            ..Default::default()
        },
    )
    .await?;
    let sheet = build_sheet(&questions, &respondents, &answers);
    let content = writer.write(&sheet)?;
    info!(
        "exported {} responses to {} questions of survey {}",
        sheet.rows.len(),
        questions.len(),
        survey_id
    );
    Ok(Export {
        file_name: export_file_name(&survey.title),
        content,
    })
}

/// Stores the workbook and returns the archived bytes for download.
pub async fn archive_export<E>(storer: &E, export: &Export) -> Result<Vec<u8>, Error>
where
    E: ExportStorer,
{
    let location = storer.write(&export.file_name, &export.content).await?;
    info!("export archived at {}", location);
    storer.read(&export.file_name).await
}
