//! Members of a meeting, or participants of a plan or review.

use std::sync::Arc;

use async_trait::async_trait;
use moim_core::{DataError, LoadResult};
use moim_events::ScreenId;
use moim_model::Participant;
use serde::Serialize;

use crate::container::AppContainer;
use crate::view::{Feature, ParticipantSource, Restartable, Route, Screen, StateHolder, ViewScope};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticipantListContent {
    pub source: ParticipantSource,
    /// Creator of the meeting. Only meetings report one.
    pub creator_id: Option<String>,
    pub participants: Vec<Participant>,
}

#[derive(Debug, Clone)]
pub enum ParticipantListAction {
    Back,
    Refresh,
    OpenProfileImage(Participant),
}

pub struct ParticipantList {
    id: ScreenId,
    holder: StateHolder<ParticipantListContent>,
    source: Restartable<ParticipantListContent>,
}

pub fn open(container: &AppContainer, source: ParticipantSource) -> Screen<ParticipantList> {
    let scope = ViewScope::new();

    let producer = {
        let repo = Arc::clone(&container.repositories.participant);
        let source = source.clone();
        Restartable::new(scope.child_token(), move || {
            let repo = Arc::clone(&repo);
            let source = source.clone();
            async move {
                let (creator_id, participants) = match &source {
                    ParticipantSource::Meeting { meeting_id } => {
                        let members = repo.get_meeting_participants(meeting_id).await?;
                        (Some(members.creator_id), members.participants)
                    }
                    ParticipantSource::Plan { plan_id } => {
                        (None, repo.get_plan_participants(plan_id).await?)
                    }
                    ParticipantSource::Review { review_id } => {
                        (None, repo.get_review_participants(review_id).await?)
                    }
                };
                Ok::<_, DataError>(ParticipantListContent {
                    source,
                    creator_id,
                    participants,
                })
            }
        })
    };

    let feature = Arc::new(ParticipantList {
        id: ScreenId::new(),
        holder: StateHolder::new(),
        source: producer,
    });

    let this = Arc::clone(&feature);
    scope.follow(feature.source.watch(), move |result| {
        if let LoadResult::Error(err) = &result {
            tracing::warn!(screen = %this.id, error = %err, "Failed to load participants");
        }
        this.holder.set_state(result);
    });

    tracing::debug!(screen = %feature.id, ?source, "Opening participant list");
    feature.source.restart();
    Screen::new(feature, scope)
}

#[async_trait]
impl Feature for ParticipantList {
    type Content = ParticipantListContent;
    type Action = ParticipantListAction;

    fn holder(&self) -> &StateHolder<ParticipantListContent> {
        &self.holder
    }

    async fn handle(self: Arc<Self>, action: ParticipantListAction) {
        tracing::debug!(screen = %self.id, ?action, "Participant list action");

        match action {
            ParticipantListAction::Back => self.holder.navigate(Route::Back),
            ParticipantListAction::Refresh => {
                self.source.restart();
            }
            ParticipantListAction::OpenProfileImage(participant) => {
                self.holder.navigate(Route::ImageViewer {
                    title: participant.user_name,
                    images: vec![participant.image_url],
                    position: 0,
                })
            }
        }
    }
}
