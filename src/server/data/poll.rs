use std::collections::HashMap;

use chrono::Utc;
use entity::poll::PollOptions;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::poll::{CreatePollParams, Poll, PollStatusFilter, PollWithResults};

pub struct PollRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PollRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreatePollParams) -> Result<Poll, DbErr> {
        let poll = entity::poll::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            options: ActiveValue::Set(PollOptions {
                options: params.options,
            }),
            is_active: ActiveValue::Set(true),
            expires_at: ActiveValue::Set(params.expires_at),
            created_by: ActiveValue::Set(params.created_by),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Poll::from_entity(poll))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Poll>, DbErr> {
        let poll = entity::prelude::Poll::find_by_id(id).one(self.db).await?;

        Ok(poll.map(Poll::from_entity))
    }

    /// Poll with its vote tally.
    pub async fn find_with_results(&self, id: i32) -> Result<Option<PollWithResults>, DbErr> {
        let Some(poll) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut tallies = self.tally_votes(&[poll.id]).await?;
        let votes = tallies.remove(&poll.id).unwrap_or_default();

        Ok(Some(PollWithResults { poll, votes }))
    }

    /// Polls matching the status filter with their tallies, newest first.
    pub async fn get_all_with_results(
        &self,
        status: PollStatusFilter,
    ) -> Result<Vec<PollWithResults>, DbErr> {
        let mut query = entity::prelude::Poll::find();

        match status {
            PollStatusFilter::Active => {
                query = query.filter(entity::poll::Column::IsActive.eq(true));
            }
            PollStatusFilter::Completed => {
                query = query.filter(entity::poll::Column::IsActive.eq(false));
            }
            PollStatusFilter::All => {}
        }

        let polls: Vec<Poll> = query
            .order_by_desc(entity::poll::Column::CreatedAt)
            .order_by_desc(entity::poll::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Poll::from_entity)
            .collect();

        let ids: Vec<i32> = polls.iter().map(|p| p.id).collect();
        let mut tallies = self.tally_votes(&ids).await?;

        Ok(polls
            .into_iter()
            .map(|poll| {
                let votes = tallies.remove(&poll.id).unwrap_or_default();
                PollWithResults { poll, votes }
            })
            .collect())
    }

    /// Sets `is_active` to false.
    ///
    /// # Returns
    /// - `Ok(Some(Poll))` - Closed poll
    /// - `Ok(None)` - No poll with that id
    pub async fn close(&self, id: i32) -> Result<Option<Poll>, DbErr> {
        let Some(poll) = entity::prelude::Poll::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::poll::ActiveModel = poll.into();
        active.is_active = ActiveValue::Set(false);
        let poll = active.update(self.db).await?;

        Ok(Some(Poll::from_entity(poll)))
    }

    pub async fn has_voted(&self, poll_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::PollVote::find()
            .filter(entity::poll_vote::Column::PollId.eq(poll_id))
            .filter(entity::poll_vote::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn create_vote(
        &self,
        poll_id: i32,
        user_id: i32,
        option_id: i32,
    ) -> Result<(), DbErr> {
        entity::poll_vote::ActiveModel {
            poll_id: ActiveValue::Set(poll_id),
            user_id: ActiveValue::Set(user_id),
            option_id: ActiveValue::Set(option_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Votes per option per poll for the given polls.
    async fn tally_votes(
        &self,
        poll_ids: &[i32],
    ) -> Result<HashMap<i32, HashMap<i32, u64>>, DbErr> {
        if poll_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let votes = entity::prelude::PollVote::find()
            .filter(entity::poll_vote::Column::PollId.is_in(poll_ids.iter().copied()))
            .all(self.db)
            .await?;

        let mut tallies: HashMap<i32, HashMap<i32, u64>> = HashMap::new();
        for vote in votes {
            *tallies
                .entry(vote.poll_id)
                .or_default()
                .entry(vote.option_id)
                .or_default() += 1;
        }

        Ok(tallies)
    }
}
