//! How a screen reacts to a [`PlanChange`] made elsewhere.
//!
//! Patching is only safe when the screen already shows the post and the change
//! carries the post's new content. Anything that can add posts to a list or
//! move them across a filter needs a refetch.

use moim_model::PlanItem;

use crate::bus::{PlanChange, PlanChangeKind};

/// What a screen currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanScope {
    /// A single post (the detail screen).
    Post { post_id: String },
    /// Every post of one meeting.
    Meeting {
        meeting_id: String,
        post_ids: Vec<String>,
    },
    /// Only posts the user takes part in (home, calendar).
    Participating { post_ids: Vec<String> },
}

/// Outcome of [`react`].
#[derive(Debug, Clone, PartialEq)]
pub enum PlanReaction {
    /// Replace the shown copy of the post with this one.
    Patch(PlanItem),
    /// Drop the post with this id.
    Remove(String),
    /// Reload from the server.
    Refetch,
    Ignore,
}

pub fn react(change: &PlanChange, scope: &PlanScope) -> PlanReaction {
    use PlanChangeKind as K;
    use PlanReaction as R;

    match (&change.kind, scope) {
        (K::Invalidated, _) => R::Refetch,

        (K::Edited(item) | K::ParticipationChanged(item), PlanScope::Post { post_id }) => {
            if &item.post_id == post_id {
                R::Patch(item.clone())
            } else {
                R::Ignore
            }
        }
        (K::Deleted { post_id: deleted, .. }, PlanScope::Post { post_id }) => {
            if deleted == post_id {
                R::Remove(deleted.clone())
            } else {
                R::Ignore
            }
        }
        (K::Created { .. }, PlanScope::Post { .. }) => R::Ignore,

        (
            K::Edited(item) | K::ParticipationChanged(item),
            PlanScope::Meeting { meeting_id, post_ids },
        ) => {
            if shows(post_ids, &item.post_id) {
                R::Patch(item.clone())
            } else if &item.meeting_id == meeting_id {
                R::Refetch
            } else {
                R::Ignore
            }
        }
        (K::Deleted { post_id, .. }, PlanScope::Meeting { post_ids, .. }) => {
            if shows(post_ids, post_id) {
                R::Remove(post_id.clone())
            } else {
                R::Ignore
            }
        }
        (K::Created { meeting_id: created_in }, PlanScope::Meeting { meeting_id, .. }) => {
            if created_in == meeting_id {
                R::Refetch
            } else {
                R::Ignore
            }
        }

        (K::Edited(item), PlanScope::Participating { post_ids }) => {
            if shows(post_ids, &item.post_id) {
                R::Patch(item.clone())
            } else {
                R::Ignore
            }
        }
        // Joining or leaving moves posts in or out of the filtered list.
        (K::ParticipationChanged(_), PlanScope::Participating { .. }) => R::Refetch,
        (K::Deleted { post_id, .. }, PlanScope::Participating { post_ids }) => {
            if shows(post_ids, post_id) {
                R::Remove(post_id.clone())
            } else {
                R::Ignore
            }
        }
        (K::Created { .. }, PlanScope::Participating { .. }) => R::Refetch,
    }
}

fn shows(post_ids: &[String], post_id: &str) -> bool {
    post_ids.iter().any(|id| id == post_id)
}
