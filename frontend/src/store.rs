use shared::models::*;
use shared::roster::Roster;
use shared::transcript::{Ticket, Transcript};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct State {
    pub roster: Roster,
    pub selection: Selection,
    pub transcript: Transcript,
}

impl State {
    /// The generate button is live only with a full selection and nothing in flight.
    pub fn can_generate(&self) -> bool {
        self.selection.is_complete() && !self.transcript.is_generating()
    }
}

pub enum Action {
    SetDraftField { field: DraftField, value: String },
    SubmitDraft { now_ms: i64 },
    BeginEdit(CharacterId),
    CancelEdit,
    DeleteCharacter(CharacterId),
    SelectGenre(Genre),
    SelectTone(Tone),
    BeginGeneration(Ticket),
    FinishGeneration { ticket: Ticket, content: String },
    AbandonGeneration(Ticket),
}

impl Reducible for State {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            Action::SetDraftField { field, value } => {
                next.roster.set_field(field, value);
            }
            Action::SubmitDraft { now_ms } => {
                next.roster.submit_draft(now_ms);
            }
            Action::BeginEdit(id) => {
                next.roster.begin_edit(id);
            }
            Action::CancelEdit => {
                next.roster.cancel_edit();
            }
            Action::DeleteCharacter(id) => {
                next.roster.delete(id);
            }
            Action::SelectGenre(genre) => {
                next.selection.genre = Some(genre);
            }
            Action::SelectTone(tone) => {
                next.selection.tone = Some(tone);
            }
            Action::BeginGeneration(ticket) => {
                next.transcript.begin_generation(ticket);
            }
            Action::FinishGeneration { ticket, content } => {
                if !next.transcript.finish_generation(ticket, content) {
                    tracing::debug!("Dropped passage for superseded request {}", ticket);
                }
            }
            Action::AbandonGeneration(ticket) => {
                next.transcript.abandon_generation(ticket);
            }
        }

        next.into()
    }
}

pub type StoreContext = UseReducerHandle<State>;
