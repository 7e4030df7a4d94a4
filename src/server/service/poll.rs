use std::collections::HashSet;

use chrono::{DateTime, Utc};
use sea_orm::{ConnectionTrait, DatabaseConnection, SqlErr, TransactionTrait};

use crate::server::{
    data::{activity::ActivityRepository, poll::PollRepository},
    error::{internal::InternalError, AppError},
    model::{
        activity::{ActivityAction, LogActivityParams},
        poll::{CreatePollParams, Poll, PollStatusFilter, PollWithResults},
        user::User,
    },
};

const ENTITY_TYPE: &str = "poll";

pub struct PollService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PollService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(
        &self,
        status: PollStatusFilter,
    ) -> Result<Vec<PollWithResults>, AppError> {
        Ok(PollRepository::new(self.db)
            .get_all_with_results(status)
            .await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<PollWithResults>, AppError> {
        Ok(PollRepository::new(self.db).find_with_results(id).await?)
    }

    /// Creates an open poll.
    ///
    /// # Returns
    /// - `Ok(PollWithResults)` - New poll with an empty tally
    /// - `Err(AppError::BadRequest)` - No options or duplicate option ids
    pub async fn create(
        &self,
        actor: &User,
        params: CreatePollParams,
    ) -> Result<PollWithResults, AppError> {
        if params.options.is_empty() {
            return Err(AppError::BadRequest(
                "Poll needs at least one option".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        if !params.options.iter().all(|o| seen.insert(o.id)) {
            return Err(AppError::BadRequest(
                "Poll option ids must be unique".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let poll = PollRepository::new(&txn).create(params).await?;
        log(
            &txn,
            actor,
            format!("Poll Created: {}", poll.title),
            ActivityAction::Create,
            &poll,
        )
        .await?;

        txn.commit().await?;

        Ok(PollWithResults {
            poll,
            votes: Default::default(),
        })
    }

    /// Records the user's vote.
    ///
    /// Checks run in order: poll exists, is open, has not expired, user has not voted,
    /// option belongs to the poll.
    pub async fn vote(
        &self,
        user_id: i32,
        poll_id: i32,
        option_id: i32,
        now: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let repo = PollRepository::new(self.db);

        let poll = repo
            .find_by_id(poll_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Poll not found".to_string()))?;

        if !poll.is_active {
            return Err(AppError::BadRequest("Poll is closed".to_string()));
        }
        if poll.is_expired(now) {
            return Err(AppError::BadRequest("Poll has expired".to_string()));
        }
        if repo.has_voted(poll_id, user_id).await? {
            return Err(already_voted());
        }
        if !poll.has_option(option_id) {
            return Err(AppError::BadRequest("Invalid option".to_string()));
        }

        match repo.create_vote(poll_id, user_id, option_id).await {
            Ok(()) => Ok(()),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(already_voted())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Closes an open poll.
    ///
    /// # Returns
    /// - `Ok(Poll)` - Closed poll
    /// - `Err(AppError::NotFound)` - No poll with that id
    /// - `Err(AppError::BadRequest)` - Poll was already closed
    pub async fn close(&self, actor: &User, id: i32) -> Result<Poll, AppError> {
        let txn = self.db.begin().await?;
        let repo = PollRepository::new(&txn);

        let poll = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Poll not found".to_string()))?;

        if !poll.is_active {
            return Err(AppError::BadRequest("Poll is already closed".to_string()));
        }

        let poll = repo.close(id).await?.ok_or(InternalError::MissingAfterWrite {
            entity: "Poll",
            id,
        })?;
        log(
            &txn,
            actor,
            format!("Poll Closed: {}", poll.title),
            ActivityAction::Close,
            &poll,
        )
        .await?;

        txn.commit().await?;

        Ok(poll)
    }
}

fn already_voted() -> AppError {
    AppError::BadRequest("You have already voted on this poll".to_string())
}

async fn log<C: ConnectionTrait>(
    db: &C,
    actor: &User,
    title: String,
    action: ActivityAction,
    poll: &Poll,
) -> Result<(), AppError> {
    ActivityRepository::new(db)
        .log(LogActivityParams {
            title,
            author: actor.name.clone(),
            action,
            entity_type: ENTITY_TYPE,
            entity_id: poll.id,
        })
        .await?;

    Ok(())
}
