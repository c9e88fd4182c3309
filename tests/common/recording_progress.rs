//! Progress callback that records every event

#![allow(dead_code)]

use async_trait::async_trait;
use bumpify::bump::{ProgressCallback, RevisionKind, Stage};
use bumpify::error::Error;
use bumpify::types::{Issue, PullRequest};
use std::sync::Mutex;

/// A recorded progress event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Stage(Stage),
    Skipped(Stage),
    Branch(String),
    IssueCreated(u64),
    Revision(RevisionKind, String),
    PrCreated(u64),
    Error(String),
    Message(String),
}

#[derive(Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<Event>>,
}

impl RecordingProgress {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    /// Stages entered, in order
    pub fn stages(&self) -> Vec<Stage> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Stage(s) => Some(s),
                _ => None,
            })
            .collect()
    }

    /// Stages skipped by a smoke run, in order
    pub fn skipped(&self) -> Vec<Stage> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Skipped(s) => Some(s),
                _ => None,
            })
            .collect()
    }

    pub fn messages(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Message(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl ProgressCallback for RecordingProgress {
    async fn on_stage(&self, stage: Stage) {
        self.push(Event::Stage(stage));
    }

    async fn on_stage_skipped(&self, stage: Stage) {
        self.push(Event::Skipped(stage));
    }

    async fn on_branch(&self, branch: &str) {
        self.push(Event::Branch(branch.to_string()));
    }

    async fn on_issue_created(&self, issue: &Issue) {
        self.push(Event::IssueCreated(issue.number));
    }

    async fn on_revision(&self, kind: RevisionKind, revision: &str) {
        self.push(Event::Revision(kind, revision.to_string()));
    }

    async fn on_pr_created(&self, pr: &PullRequest) {
        self.push(Event::PrCreated(pr.number));
    }

    async fn on_error(&self, error: &Error) {
        self.push(Event::Error(error.to_string()));
    }

    async fn on_message(&self, message: &str) {
        self.push(Event::Message(message.to_string()));
    }
}
