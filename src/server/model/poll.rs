//! Poll domain models, parameters and result tallying.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use entity::poll::PollOption;

use crate::model::poll::{PollDto, PollOptionResultDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Poll {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub options: Vec<PollOption>,
    pub is_active: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_by: i32,
    pub created_at: DateTime<Utc>,
}

impl Poll {
    pub fn from_entity(entity: entity::poll::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            options: entity.options.options,
            is_active: entity.is_active,
            expires_at: entity.expires_at,
            created_by: entity.created_by,
            created_at: entity.created_at,
        }
    }

    pub fn has_option(&self, option_id: i32) -> bool {
        self.options.iter().any(|o| o.id == option_id)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at < now)
    }
}

/// Poll together with its vote tally.
#[derive(Debug, Clone, PartialEq)]
pub struct PollWithResults {
    pub poll: Poll,
    /// Votes per option id. Options without votes are absent.
    pub votes: HashMap<i32, u64>,
}

impl PollWithResults {
    pub fn total_votes(&self) -> u64 {
        self.votes.values().sum()
    }

    pub fn into_dto(self) -> PollDto {
        let total = self.total_votes();
        let options = self
            .poll
            .options
            .into_iter()
            .map(|option| {
                let votes = self.votes.get(&option.id).copied().unwrap_or(0);
                PollOptionResultDto {
                    id: option.id,
                    text: option.text,
                    votes,
                    percentage: percentage(votes, total),
                }
            })
            .collect();

        PollDto {
            id: self.poll.id,
            title: self.poll.title,
            description: self.poll.description,
            options,
            is_active: self.poll.is_active,
            total_votes: total,
            created_at: self.poll.created_at,
            expires_at: self.poll.expires_at,
        }
    }
}

/// Share of `votes` in `total`, in percent rounded to one decimal. Zero when nobody voted.
pub fn percentage(votes: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (votes as f64 / total as f64 * 1000.0).round() / 10.0
}

/// Which polls the list endpoint returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PollStatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl PollStatusFilter {
    /// `active` and `completed` select open and closed polls; anything else means all.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("active") => Self::Active,
            Some("completed") => Self::Completed,
            _ => Self::All,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePollParams {
    pub title: String,
    pub description: Option<String>,
    pub options: Vec<PollOption>,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_by: i32,
}
