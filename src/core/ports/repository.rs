use crate::core::models::{
    answer::{AnswerDetail, Insert as AnswerInsert, OptionCount, Query as AnswerQuery},
    common::Pagination,
    option::{Insert as OptionInsert, Opt, Query as OptionQuery},
    question::{Insert as QuestionInsert, Query as QuestionQuery, Question},
    submission::{Insert as SubmissionInsert, Query as SubmissionQuery, Respondent, Submission},
    survey::{Insert as SurveyInsert, Query as SurveyQuery, Survey},
    user::{Insert as UserInsert, User},
};
use crate::error::Error;

pub trait SurveyCommon {
    async fn insert(&mut self, data: SurveyInsert) -> Result<i32, Error>;
    async fn get(&mut self, id: i32) -> Result<Survey, Error>;
    /// Newest first.
    async fn query(&mut self, query: &SurveyQuery, pagination: Option<Pagination>) -> Result<Vec<Survey>, Error>;
    async fn count(&mut self, query: &SurveyQuery) -> Result<i64, Error>;
    async fn activate(&mut self, id: i32) -> Result<(), Error>;
    async fn delete(&mut self, id: i32) -> Result<(), Error>;
}

pub trait QuestionCommon {
    async fn insert(&mut self, question: QuestionInsert) -> Result<i32, Error>;
    async fn get(&mut self, id: i32) -> Result<Question, Error>;
    /// Ordered by id.
    async fn query(&mut self, query: QuestionQuery) -> Result<Vec<Question>, Error>;
}

pub trait OptionCommon {
    async fn insert(&mut self, option: OptionInsert) -> Result<i32, Error>;
    /// Ordered by id.
    async fn query(&mut self, query: OptionQuery) -> Result<Vec<Opt>, Error>;
}

pub trait SubmissionCommon {
    async fn insert(&mut self, data: SubmissionInsert) -> Result<i32, Error>;
    async fn get(&mut self, id: i32) -> Result<Submission, Error>;
    async fn get_for_update(&mut self, id: i32) -> Result<Submission, Error>;
    async fn count(&mut self, query: SubmissionQuery) -> Result<i64, Error>;
    async fn complete(&mut self, id: i32) -> Result<(), Error>;
    /// Completed submissions of a survey in id order.
    async fn respondents(&mut self, survey_id: i32) -> Result<Vec<Respondent>, Error>;
}

pub trait AnswerCommon {
    async fn bulk_insert(&mut self, answers: Vec<AnswerInsert>) -> Result<(), Error>;
    async fn query_details(&mut self, query: AnswerQuery) -> Result<Vec<AnswerDetail>, Error>;
    /// Options that were never picked are absent.
    async fn count_by_option(&mut self, survey_id: i32) -> Result<Vec<OptionCount>, Error>;
}

pub trait UserCommon {
    async fn insert(&mut self, user: UserInsert) -> Result<i32, Error>;
    async fn get(&mut self, id: i32) -> Result<User, Error>;
    async fn get_by_username(&mut self, username: &str) -> Result<Option<User>, Error>;
}

pub trait Common: SurveyCommon + QuestionCommon + OptionCommon + SubmissionCommon + AnswerCommon + UserCommon {}

pub trait Store: Common {}

pub trait TxStore: Store {
    async fn commit(self) -> Result<(), Error>;
    async fn rollback(self) -> Result<(), Error>;
}

pub trait Manager<'m, S, T>
where
    S: Store,
    T: TxStore,
{
    async fn db(&'m self) -> Result<S, Error>;
    async fn tx(&'m self) -> Result<T, Error>;
}
