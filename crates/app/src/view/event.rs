use moim_core::{DataError, ErrorKind};
use serde::Serialize;

use crate::view::route::Route;

/// User-visible one-line messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastMessage {
    NetworkError,
    ServerError,
    ReportCompleted,
    CommentError,
}

impl ToastMessage {
    pub fn text(self) -> &'static str {
        match self {
            ToastMessage::NetworkError => "Please check your network connection.",
            ToastMessage::ServerError => "Something went wrong. Please try again later.",
            ToastMessage::ReportCompleted => "Your report has been submitted.",
            ToastMessage::CommentError => "Could not load comments.",
        }
    }
}

/// Toast shown when a secondary action fails.
pub fn toast_for(err: &DataError) -> ToastMessage {
    match err.kind() {
        ErrorKind::Network => ToastMessage::NetworkError,
        ErrorKind::Server => ToastMessage::ServerError,
    }
}

/// One-shot output of a screen, consumed once by whoever renders it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", content = "payload", rename_all = "snake_case")]
pub enum UiEvent {
    Navigate(Route),
    ShowToast(ToastMessage),
}
