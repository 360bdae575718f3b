use crate::core::models::{
    answer::{AnswerDetail, Insert as AnswerInsert, OptionCount, Query as AnswerQuery},
    common::Pagination,
    option::{Insert as OptionInsert, Opt, Query as OptionQuery},
    question::{Insert as QuestionInsert, Query as QuestionQuery, Question},
    submission::{Insert as SubmissionInsert, Query as SubmissionQuery, Respondent, Submission},
    survey::{Insert as SurveyInsert, Query as SurveyQuery, Survey},
    user::{Insert as UserInsert, User},
};
use crate::core::ports::repository::{AnswerCommon, Common, Manager, OptionCommon, QuestionCommon, Store, SubmissionCommon, SurveyCommon, TxStore, UserCommon};
use crate::error::Error;
use sqlx::pool::PoolConnection;
use sqlx::{query, query_as, query_scalar, Executor, PgPool, Postgres, QueryBuilder, Transaction};

pub struct PgSqlx<E>
where
    for<'e> &'e mut E: Executor<'e>,
{
    executor: E,
}

#[derive(Clone)]
pub struct PgSqlxManager {
    pool: PgPool,
}

impl PgSqlxManager {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn begin(&self) -> Result<PgSqlx<Transaction<'static, Postgres>>, Error> {
        let tx = self.pool.begin().await?;
        Ok(PgSqlx { executor: tx })
    }

    pub async fn acquire(&self) -> Result<PgSqlx<PoolConnection<Postgres>>, Error> {
        let conn = self.pool.acquire().await?;
        Ok(PgSqlx { executor: conn })
    }
}

impl<E> SurveyCommon for PgSqlx<E>
where
    for<'e> &'e mut E: Executor<'e, Database = Postgres>,
{
    async fn insert(&mut self, data: SurveyInsert) -> Result<i32, Error> {
        let id = query_scalar("INSERT INTO surveys (title, creator_id) VALUES ($1, $2) RETURNING id")
            .bind(data.title)
            .bind(data.creator_id)
            .fetch_one(&mut self.executor)
            .await?;
        Ok(id)
    }

    async fn get(&mut self, id: i32) -> Result<Survey, Error> {
        let survey: Option<Survey> = query_as("SELECT * FROM surveys WHERE id = $1").bind(id).fetch_optional(&mut self.executor).await?;
        survey.ok_or_else(|| Error::NotFound("survey".into()))
    }

    async fn query(&mut self, query: &SurveyQuery, pagination: Option<Pagination>) -> Result<Vec<Survey>, Error> {
        let mut stmt = QueryBuilder::new("SELECT * FROM surveys WHERE 1 = 1");
        if let Some(creator_id) = query.creator_id_eq {
            stmt.push(" AND creator_id = ").push_bind(creator_id);
        }
        if let Some(is_active) = query.is_active_eq {
            stmt.push(" AND is_active = ").push_bind(is_active);
        }
        stmt.push(" ORDER BY created_at DESC, id DESC");
        if let Some(pagination) = pagination {
            stmt.push(" LIMIT ").push_bind(pagination.limit());
            stmt.push(" OFFSET ").push_bind(pagination.offset());
        }
        let surveys = stmt.build_query_as().fetch_all(&mut self.executor).await?;
        Ok(surveys)
    }

    async fn count(&mut self, query: &SurveyQuery) -> Result<i64, Error> {
        let mut stmt = QueryBuilder::new("SELECT COUNT(*) FROM surveys WHERE 1 = 1");
        if let Some(creator_id) = query.creator_id_eq {
            stmt.push(" AND creator_id = ").push_bind(creator_id);
        }
        if let Some(is_active) = query.is_active_eq {
            stmt.push(" AND is_active = ").push_bind(is_active);
        }
        let (n,): (i64,) = stmt.build_query_as().fetch_one(&mut self.executor).await?;
        Ok(n)
    }

    async fn activate(&mut self, id: i32) -> Result<(), Error> {
        query("UPDATE surveys SET is_active = TRUE WHERE id = $1").bind(id).execute(&mut self.executor).await?;
        Ok(())
    }

    async fn delete(&mut self, id: i32) -> Result<(), Error> {
        query("DELETE FROM surveys WHERE id = $1").bind(id).execute(&mut self.executor).await?;
        Ok(())
    }
}

impl<E> QuestionCommon for PgSqlx<E>
where
    for<'e> &'e mut E: Executor<'e, Database = Postgres>,
{
    async fn insert(&mut self, question: QuestionInsert) -> Result<i32, Error> {
        let id = query_scalar("INSERT INTO questions (survey_id, prompt, link) VALUES ($1, $2, $3) RETURNING id")
            .bind(question.survey_id)
            .bind(question.prompt)
            .bind(question.link)
            .fetch_one(&mut self.executor)
            .await?;
        Ok(id)
    }

    async fn get(&mut self, id: i32) -> Result<Question, Error> {
        let question: Option<Question> = query_as("SELECT * FROM questions WHERE id = $1").bind(id).fetch_optional(&mut self.executor).await?;
        question.ok_or_else(|| Error::NotFound("question".into()))
    }

    async fn query(&mut self, query: QuestionQuery) -> Result<Vec<Question>, Error> {
        let mut q = QueryBuilder::new("SELECT * FROM questions WHERE 1 = 1");
        if let Some(survey_id) = query.survey_id_eq {
            q.push(" AND survey_id = ").push_bind(survey_id);
        }
        q.push(" ORDER BY id");
        let questions = q.build_query_as().fetch_all(&mut self.executor).await?;
        Ok(questions)
    }
}

impl<E> OptionCommon for PgSqlx<E>
where
    for<'e> &'e mut E: Executor<'e, Database = Postgres>,
{
    async fn insert(&mut self, option: OptionInsert) -> Result<i32, Error> {
        let id = query_scalar("INSERT INTO options (question_id, text, is_correct) VALUES ($1, $2, $3) RETURNING id")
            .bind(option.question_id)
            .bind(option.text)
            .bind(option.is_correct)
            .fetch_one(&mut self.executor)
            .await?;
        Ok(id)
    }

    async fn query(&mut self, query: OptionQuery) -> Result<Vec<Opt>, Error> {
        let mut q = QueryBuilder::new(
            "SELECT o.*
        FROM options AS o
        JOIN questions AS q ON o.question_id = q.id
        WHERE 1 = 1",
        );
        if let Some(question_id) = query.question_id_eq {
            q.push(" AND o.question_id = ").push_bind(question_id);
        }
        if let Some(survey_id) = query.survey_id_eq {
            q.push(" AND q.survey_id = ").push_bind(survey_id);
        }
        q.push(" ORDER BY o.id");
        let options = q.build_query_as().fetch_all(&mut self.executor).await?;
        Ok(options)
    }
}

impl<E> SubmissionCommon for PgSqlx<E>
where
    for<'e> &'e mut E: Executor<'e, Database = Postgres>,
{
    async fn insert(&mut self, data: SubmissionInsert) -> Result<i32, Error> {
        let id = query_scalar("INSERT INTO submissions (survey_id, user_id) VALUES ($1, $2) RETURNING id")
            .bind(data.survey_id)
            .bind(data.user_id)
            .fetch_one(&mut self.executor)
            .await?;
        Ok(id)
    }

    async fn get(&mut self, id: i32) -> Result<Submission, Error> {
        let sub: Option<Submission> = query_as("SELECT * FROM submissions WHERE id = $1").bind(id).fetch_optional(&mut self.executor).await?;
        sub.ok_or_else(|| Error::NotFound("submission".into()))
    }

    async fn get_for_update(&mut self, id: i32) -> Result<Submission, Error> {
        let sub: Option<Submission> = query_as("SELECT * FROM submissions WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut self.executor)
            .await?;
        sub.ok_or_else(|| Error::NotFound("submission".into()))
    }

    async fn count(&mut self, query: SubmissionQuery) -> Result<i64, Error> {
        let mut stmt = QueryBuilder::new("SELECT COUNT(*) FROM submissions WHERE 1 = 1");
        if let Some(survey_id) = query.survey_id_eq {
            stmt.push(" AND survey_id = ").push_bind(survey_id);
        }
        if let Some(user_id) = query.user_id_eq {
            stmt.push(" AND user_id = ").push_bind(user_id);
        }
        if let Some(is_complete) = query.is_complete_eq {
            stmt.push(" AND is_complete = ").push_bind(is_complete);
        }
        let (n,): (i64,) = stmt.build_query_as().fetch_one(&mut self.executor).await?;
        Ok(n)
    }

    async fn complete(&mut self, id: i32) -> Result<(), Error> {
        query("UPDATE submissions SET is_complete = TRUE WHERE id = $1").bind(id).execute(&mut self.executor).await?;
        Ok(())
    }

    async fn respondents(&mut self, survey_id: i32) -> Result<Vec<Respondent>, Error> {
        let respondents = query_as(
            "SELECT s.id AS submission_id, u.username
        FROM submissions AS s
        JOIN users AS u ON s.user_id = u.id
        WHERE s.survey_id = $1 AND s.is_complete
        ORDER BY s.id",
        )
        .bind(survey_id)
        .fetch_all(&mut self.executor)
        .await?;
        Ok(respondents)
    }
}

impl<E> AnswerCommon for PgSqlx<E>
where
    for<'e> &'e mut E: Executor<'e, Database = Postgres>,
{
    async fn bulk_insert(&mut self, answers: Vec<AnswerInsert>) -> Result<(), Error> {
        if answers.is_empty() {
            return Ok(());
        }
        QueryBuilder::new("INSERT INTO answers (submission_id, option_id, user_id)")
            .push_values(answers, |mut b, a| {
                b.push_bind(a.submission_id);
                b.push_bind(a.option_id);
                b.push_bind(a.user_id);
            })
            .build()
            .execute(&mut self.executor)
            .await?;
        Ok(())
    }

    async fn query_details(&mut self, query: AnswerQuery) -> Result<Vec<AnswerDetail>, Error> {
        let mut stmt = QueryBuilder::new(
            "SELECT
            a.submission_id,
            a.user_id,
            q.id AS question_id,
            q.prompt,
            q.link,
            o.id AS option_id,
            o.text,
            o.is_correct
        FROM answers AS a
        JOIN options AS o ON a.option_id = o.id
        JOIN questions AS q ON o.question_id = q.id
        JOIN submissions AS s ON a.submission_id = s.id
        WHERE 1 = 1",
        );
        if let Some(survey_id) = query.survey_id_eq {
            stmt.push(" AND q.survey_id = ").push_bind(survey_id);
        }
        if let Some(submission_id) = query.submission_id_eq {
            stmt.push(" AND a.submission_id = ").push_bind(submission_id);
        }
        if let Some(user_id) = query.user_id_eq {
            stmt.push(" AND a.user_id = ").push_bind(user_id);
        }
        if let Some(is_complete) = query.is_complete_eq {
            stmt.push(" AND s.is_complete = ").push_bind(is_complete);
        }
        stmt.push(" ORDER BY a.submission_id, a.id");
        let details = stmt.build_query_as().fetch_all(&mut self.executor).await?;
        Ok(details)
    }

    async fn count_by_option(&mut self, survey_id: i32) -> Result<Vec<OptionCount>, Error> {
        let counts = query_as(
            "SELECT o.id AS option_id, COUNT(a.id) AS count
        FROM options AS o
        JOIN questions AS q ON o.question_id = q.id
        JOIN answers AS a ON o.id = a.option_id
        WHERE q.survey_id = $1
        GROUP BY o.id",
        )
        .bind(survey_id)
        .fetch_all(&mut self.executor)
        .await?;
        Ok(counts)
    }
}

impl<E> UserCommon for PgSqlx<E>
where
    for<'e> &'e mut E: Executor<'e, Database = Postgres>,
{
    async fn insert(&mut self, user: UserInsert) -> Result<i32, Error> {
        let id = query_scalar("INSERT INTO users (username, password, salt, is_superuser) VALUES ($1, $2, $3, $4) RETURNING id")
            .bind(user.username)
            .bind(user.password)
            .bind(user.salt)
            .bind(user.is_superuser)
            .fetch_one(&mut self.executor)
            .await?;
        Ok(id)
    }

    async fn get(&mut self, id: i32) -> Result<User, Error> {
        let user: Option<User> = query_as("SELECT * FROM users WHERE id = $1").bind(id).fetch_optional(&mut self.executor).await?;
        user.ok_or_else(|| Error::NotFound("user".into()))
    }

    async fn get_by_username(&mut self, username: &str) -> Result<Option<User>, Error> {
        let user = query_as("SELECT * FROM users WHERE username = $1").bind(username).fetch_optional(&mut self.executor).await?;
        Ok(user)
    }
}

impl Store for PgSqlx<PoolConnection<Postgres>> {}
impl<'a> Store for PgSqlx<Transaction<'a, Postgres>> {}
impl Common for PgSqlx<PoolConnection<Postgres>> {}
impl<'a> Common for PgSqlx<Transaction<'a, Postgres>> {}

impl<'a> TxStore for PgSqlx<Transaction<'a, Postgres>> {
    async fn commit(self) -> Result<(), Error> {
        self.executor.commit().await?;
        Ok(())
    }

    async fn rollback(self) -> Result<(), Error> {
        self.executor.rollback().await?;
        Ok(())
    }
}

impl<'a> Manager<'a, PgSqlx<PoolConnection<Postgres>>, PgSqlx<Transaction<'static, Postgres>>> for PgSqlxManager {
    async fn db(&'a self) -> Result<PgSqlx<PoolConnection<Postgres>>, Error> {
        let d = self.acquire().await?;
        Ok(d)
    }

    async fn tx(&'a self) -> Result<PgSqlx<Transaction<'static, Postgres>>, Error> {
        let t = self.begin().await?;
        Ok(t)
    }
}
