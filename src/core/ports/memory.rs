//! In-memory repository used by the service tests.

use crate::core::models::{
    answer::{Answer, AnswerDetail, Insert as AnswerInsert, OptionCount, Query as AnswerQuery},
    common::Pagination,
    option::{Insert as OptionInsert, Opt, Query as OptionQuery},
    question::{Insert as QuestionInsert, Query as QuestionQuery, Question},
    submission::{Insert as SubmissionInsert, Query as SubmissionQuery, Respondent, Submission},
    survey::{Insert as SurveyInsert, Query as SurveyQuery, Survey},
    user::{Insert as UserInsert, User},
};
use crate::core::ports::repository::{AnswerCommon, Common, OptionCommon, QuestionCommon, Store, SubmissionCommon, SurveyCommon, TxStore, UserCommon};
use crate::error::Error;
use chrono::{Duration, TimeZone, Utc};
use itertools::Itertools;
use std::cell::{Ref, RefCell};
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct MemState {
    pub users: Vec<User>,
    pub surveys: Vec<Survey>,
    pub questions: Vec<Question>,
    pub options: Vec<Opt>,
    pub submissions: Vec<Submission>,
    pub answers: Vec<Answer>,
    next_id: i32,
}

impl MemState {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemStore {
    state: Rc<RefCell<MemState>>,
    snapshot: Option<MemState>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle whose rollback restores the state as of now.
    pub fn begin(&self) -> Self {
        Self {
            state: self.state.clone(),
            snapshot: Some(self.state.borrow().clone()),
        }
    }

    pub fn state(&self) -> Ref<'_, MemState> {
        self.state.borrow()
    }

    pub fn add_user(&self, username: &str, is_superuser: bool) -> i32 {
        let mut s = self.state.borrow_mut();
        let id = s.next_id();
        s.users.push(User {
            id,
            username: username.into(),
            password: String::new(),
            salt: String::new(),
            is_superuser,
        });
        id
    }

    pub fn add_survey(&self, creator_id: i32, title: &str, is_active: bool) -> i32 {
        let mut s = self.state.borrow_mut();
        let id = s.next_id();
        s.surveys.push(Survey {
            id,
            title: title.into(),
            is_active,
            creator_id,
            created_at: Utc.timestamp_opt(1_700_000_000, 0).unwrap() + Duration::seconds(id as i64),
        });
        id
    }

    pub fn add_question(&self, survey_id: i32, prompt: &str) -> i32 {
        let mut s = self.state.borrow_mut();
        let id = s.next_id();
        s.questions.push(Question {
            id,
            survey_id,
            prompt: prompt.into(),
            link: None,
        });
        id
    }

    pub fn add_option(&self, question_id: i32, text: &str, is_correct: bool) -> i32 {
        let mut s = self.state.borrow_mut();
        let id = s.next_id();
        s.options.push(Opt {
            id,
            question_id,
            text: text.into(),
            is_correct,
        });
        id
    }

    pub fn add_submission(&self, survey_id: i32, user_id: i32, is_complete: bool) -> i32 {
        let mut s = self.state.borrow_mut();
        let id = s.next_id();
        s.submissions.push(Submission {
            id,
            survey_id,
            user_id,
            is_complete,
            created_at: Utc::now(),
        });
        id
    }

    pub fn add_answer(&self, submission_id: i32, option_id: i32, user_id: i32) -> i32 {
        let mut s = self.state.borrow_mut();
        let id = s.next_id();
        s.answers.push(Answer {
            id,
            submission_id,
            option_id,
            user_id,
        });
        id
    }
}

fn survey_matches(s: &Survey, q: &SurveyQuery) -> bool {
    q.creator_id_eq.map_or(true, |v| s.creator_id == v) && q.is_active_eq.map_or(true, |v| s.is_active == v)
}

impl SurveyCommon for MemStore {
    async fn insert(&mut self, data: SurveyInsert) -> Result<i32, Error> {
        let id = self.add_survey(data.creator_id, &data.title, false);
        Ok(id)
    }

    async fn get(&mut self, id: i32) -> Result<Survey, Error> {
        self.state()
            .surveys
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound("survey".into()))
    }

    async fn query(&mut self, query: &SurveyQuery, pagination: Option<Pagination>) -> Result<Vec<Survey>, Error> {
        let state = self.state();
        let sorted = state
            .surveys
            .iter()
            .filter(|s| survey_matches(s, query))
            .sorted_by(|a, b| b.created_at.cmp(&a.created_at))
            .cloned();
        Ok(match pagination {
            Some(p) => sorted.skip(p.offset() as usize).take(p.limit() as usize).collect(),
            None => sorted.collect(),
        })
    }

    async fn count(&mut self, query: &SurveyQuery) -> Result<i64, Error> {
        Ok(self.state().surveys.iter().filter(|s| survey_matches(s, query)).count() as i64)
    }

    async fn activate(&mut self, id: i32) -> Result<(), Error> {
        let mut state = self.state.borrow_mut();
        let survey = state.surveys.iter_mut().find(|s| s.id == id).ok_or_else(|| Error::NotFound("survey".into()))?;
        survey.is_active = true;
        Ok(())
    }

    async fn delete(&mut self, id: i32) -> Result<(), Error> {
        let mut state = self.state.borrow_mut();
        let question_ids: Vec<i32> = state.questions.iter().filter(|q| q.survey_id == id).map(|q| q.id).collect();
        let submission_ids: Vec<i32> = state.submissions.iter().filter(|s| s.survey_id == id).map(|s| s.id).collect();
        state.surveys.retain(|s| s.id != id);
        state.questions.retain(|q| q.survey_id != id);
        state.options.retain(|o| !question_ids.contains(&o.question_id));
        state.submissions.retain(|s| s.survey_id != id);
        state.answers.retain(|a| !submission_ids.contains(&a.submission_id));
        Ok(())
    }
}

impl QuestionCommon for MemStore {
    async fn insert(&mut self, question: QuestionInsert) -> Result<i32, Error> {
        let id = self.add_question(question.survey_id, &question.prompt);
        let mut state = self.state.borrow_mut();
        if let Some(q) = state.questions.iter_mut().find(|q| q.id == id) {
            q.link = question.link;
        }
        Ok(id)
    }

    async fn get(&mut self, id: i32) -> Result<Question, Error> {
        self.state()
            .questions
            .iter()
            .find(|q| q.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound("question".into()))
    }

    async fn query(&mut self, query: QuestionQuery) -> Result<Vec<Question>, Error> {
        Ok(self
            .state()
            .questions
            .iter()
            .filter(|q| query.survey_id_eq.map_or(true, |v| q.survey_id == v))
            .sorted_by_key(|q| q.id)
            .cloned()
            .collect())
    }
}

impl OptionCommon for MemStore {
    async fn insert(&mut self, option: OptionInsert) -> Result<i32, Error> {
        Ok(self.add_option(option.question_id, &option.text, option.is_correct))
    }

    async fn query(&mut self, query: OptionQuery) -> Result<Vec<Opt>, Error> {
        let state = self.state();
        Ok(state
            .options
            .iter()
            .filter(|o| query.question_id_eq.map_or(true, |v| o.question_id == v))
            .filter(|o| {
                query
                    .survey_id_eq
                    .map_or(true, |v| state.questions.iter().any(|q| q.id == o.question_id && q.survey_id == v))
            })
            .sorted_by_key(|o| o.id)
            .cloned()
            .collect())
    }
}

impl SubmissionCommon for MemStore {
    async fn insert(&mut self, data: SubmissionInsert) -> Result<i32, Error> {
        Ok(self.add_submission(data.survey_id, data.user_id, false))
    }

    async fn get(&mut self, id: i32) -> Result<Submission, Error> {
        self.state()
            .submissions
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound("submission".into()))
    }

    async fn get_for_update(&mut self, id: i32) -> Result<Submission, Error> {
        SubmissionCommon::get(self, id).await
    }

    async fn count(&mut self, query: SubmissionQuery) -> Result<i64, Error> {
        Ok(self
            .state()
            .submissions
            .iter()
            .filter(|s| query.survey_id_eq.map_or(true, |v| s.survey_id == v))
            .filter(|s| query.user_id_eq.map_or(true, |v| s.user_id == v))
            .filter(|s| query.is_complete_eq.map_or(true, |v| s.is_complete == v))
            .count() as i64)
    }

    async fn complete(&mut self, id: i32) -> Result<(), Error> {
        let mut state = self.state.borrow_mut();
        let sub = state.submissions.iter_mut().find(|s| s.id == id).ok_or_else(|| Error::NotFound("submission".into()))?;
        sub.is_complete = true;
        Ok(())
    }

    async fn respondents(&mut self, survey_id: i32) -> Result<Vec<Respondent>, Error> {
        let state = self.state();
        Ok(state
            .submissions
            .iter()
            .filter(|s| s.survey_id == survey_id && s.is_complete)
            .sorted_by_key(|s| s.id)
            .filter_map(|s| {
                state.users.iter().find(|u| u.id == s.user_id).map(|u| Respondent {
                    submission_id: s.id,
                    username: u.username.clone(),
                })
            })
            .collect())
    }
}

impl AnswerCommon for MemStore {
    async fn bulk_insert(&mut self, answers: Vec<AnswerInsert>) -> Result<(), Error> {
        for a in answers {
            self.add_answer(a.submission_id, a.option_id, a.user_id);
        }
        Ok(())
    }

    async fn query_details(&mut self, query: AnswerQuery) -> Result<Vec<AnswerDetail>, Error> {
        let state = self.state();
        let mut details = Vec::new();
        for a in state.answers.iter().sorted_by_key(|a| (a.submission_id, a.id)) {
            let (Some(opt), Some(sub)) = (
                state.options.iter().find(|o| o.id == a.option_id),
                state.submissions.iter().find(|s| s.id == a.submission_id),
            ) else {
                continue;
            };
            let Some(qst) = state.questions.iter().find(|q| q.id == opt.question_id) else {
                continue;
            };
            if query.survey_id_eq.map_or(false, |v| qst.survey_id != v)
                || query.submission_id_eq.map_or(false, |v| a.submission_id != v)
                || query.user_id_eq.map_or(false, |v| a.user_id != v)
                || query.is_complete_eq.map_or(false, |v| sub.is_complete != v)
            {
                continue;
            }
            details.push(AnswerDetail {
                submission_id: a.submission_id,
                user_id: a.user_id,
                question_id: qst.id,
                prompt: qst.prompt.clone(),
                link: qst.link.clone(),
                option_id: opt.id,
                text: opt.text.clone(),
                is_correct: opt.is_correct,
            });
        }
        Ok(details)
    }

    async fn count_by_option(&mut self, survey_id: i32) -> Result<Vec<OptionCount>, Error> {
        let state = self.state();
        Ok(state
            .answers
            .iter()
            .filter(|a| {
                state
                    .options
                    .iter()
                    .find(|o| o.id == a.option_id)
                    .and_then(|o| state.questions.iter().find(|q| q.id == o.question_id))
                    .map_or(false, |q| q.survey_id == survey_id)
            })
            .counts_by(|a| a.option_id)
            .into_iter()
            .map(|(option_id, count)| OptionCount { option_id, count: count as i64 })
            .collect())
    }
}

impl UserCommon for MemStore {
    async fn insert(&mut self, user: UserInsert) -> Result<i32, Error> {
        let mut state = self.state.borrow_mut();
        let id = state.next_id();
        state.users.push(User {
            id,
            username: user.username,
            password: user.password,
            salt: user.salt,
            is_superuser: user.is_superuser,
        });
        Ok(id)
    }

    async fn get(&mut self, id: i32) -> Result<User, Error> {
        self.state()
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound("user".into()))
    }

    async fn get_by_username(&mut self, username: &str) -> Result<Option<User>, Error> {
        Ok(self.state().users.iter().find(|u| u.username == username).cloned())
    }
}

impl Common for MemStore {}
impl Store for MemStore {}

impl TxStore for MemStore {
    async fn commit(self) -> Result<(), Error> {
        Ok(())
    }

    async fn rollback(self) -> Result<(), Error> {
        if let Some(snapshot) = self.snapshot {
            *self.state.borrow_mut() = snapshot;
        }
        Ok(())
    }
}
