// models.rs
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

pub const NO_POLLS_MESSAGE: &str = "No polls are available.";

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Poll {
    pub id: i32,
    pub question: String,
    pub pub_date: DateTime<Utc>,
}

impl Poll {
    /// True iff the poll was published within the day before `now`.
    /// Future-dated polls are never "recent", even ones less than a
    /// day ahead.
    pub fn was_published_recently(&self, now: DateTime<Utc>) -> bool {
        now - Duration::days(1) <= self.pub_date && self.pub_date <= now
    }
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Choice {
    pub id: i32,
    pub poll_id: i32,
    pub choice_text: String,
    pub votes: i32,
}

/// Form payload for the vote endpoint. `choice` is optional so that a
/// submission without a selection reaches the handler instead of being
/// rejected by the extractor.
#[derive(Debug, Deserialize)]
pub struct VoteForm {
    pub choice: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct PollIndex {
    pub polls: Vec<Poll>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PollIndex {
    pub fn new(polls: Vec<Poll>) -> Self {
        let message = polls.is_empty().then(|| NO_POLLS_MESSAGE.to_string());
        Self { polls, message }
    }
}

#[derive(Debug, Serialize)]
pub struct PollDetail {
    pub poll: Poll,
    pub choices: Vec<Choice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PollResults {
    pub poll: Poll,
    pub choices: Vec<Choice>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poll_published_at(pub_date: DateTime<Utc>) -> Poll {
        Poll {
            id: 1,
            question: "What's new?".to_string(),
            pub_date,
        }
    }

    #[test]
    fn was_published_recently_with_future_poll() {
        let now = Utc::now();
        let poll = poll_published_at(now + Duration::days(30));
        assert!(!poll.was_published_recently(now));
    }

    #[test]
    fn was_published_recently_with_old_poll() {
        let now = Utc::now();
        let poll = poll_published_at(now - Duration::days(30));
        assert!(!poll.was_published_recently(now));
    }

    #[test]
    fn was_published_recently_with_recent_poll() {
        let now = Utc::now();
        let poll = poll_published_at(now - Duration::hours(1));
        assert!(poll.was_published_recently(now));
    }

    #[test]
    fn was_published_recently_boundaries() {
        let now = Utc::now();
        // Both endpoints of the window are inclusive.
        assert!(poll_published_at(now).was_published_recently(now));
        assert!(poll_published_at(now - Duration::days(1)).was_published_recently(now));
        // Just outside on either side.
        assert!(!poll_published_at(now - Duration::days(1) - Duration::seconds(1))
            .was_published_recently(now));
        assert!(!poll_published_at(now + Duration::seconds(1)).was_published_recently(now));
    }

    #[test]
    fn index_message_only_when_empty() {
        let empty = PollIndex::new(Vec::new());
        assert_eq!(empty.message.as_deref(), Some(NO_POLLS_MESSAGE));

        let now = Utc::now();
        let populated = PollIndex::new(vec![poll_published_at(now - Duration::hours(1))]);
        assert!(populated.message.is_none());
    }

    #[test]
    fn detail_omits_absent_error_message() {
        let now = Utc::now();
        let detail = PollDetail {
            poll: poll_published_at(now),
            choices: Vec::new(),
            error_message: None,
        };
        let value = serde_json::to_value(&detail).unwrap();
        assert!(value.get("error_message").is_none());

        let detail = PollDetail {
            poll: poll_published_at(now),
            choices: Vec::new(),
            error_message: Some("You didn't select a choice.".to_string()),
        };
        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(
            value["error_message"],
            serde_json::json!("You didn't select a choice.")
        );
    }

    #[test]
    fn vote_form_tolerates_missing_choice() {
        let form: VoteForm = serde_json::from_str("{}").unwrap();
        assert!(form.choice.is_none());

        let form: VoteForm = serde_json::from_str(r#"{"choice": 7}"#).unwrap();
        assert_eq!(form.choice, Some(7));
    }
}
