use crate::models::ChatMessage;

/// Sequence number of a generation request. The caller hands them out in
/// increasing order.
pub type Ticket = u64;

/// Conversation history plus bookkeeping for the request in flight.
///
/// Only the response to the most recently begun ticket is applied, so an
/// older request that resolves late cannot overwrite a newer passage.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    latest: Ticket,
    in_flight: Option<Ticket>,
}

impl Transcript {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_generating(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Marks `ticket` as the request whose answer will be shown. Tickets not
    /// newer than the current one are ignored.
    pub fn begin_generation(&mut self, ticket: Ticket) -> bool {
        if ticket <= self.latest {
            return false;
        }
        self.latest = ticket;
        self.in_flight = Some(ticket);
        true
    }

    /// Appends the passage if `ticket` is still current. Returns whether it was applied.
    pub fn finish_generation(&mut self, ticket: Ticket, content: String) -> bool {
        if self.in_flight != Some(ticket) {
            return false;
        }
        self.in_flight = None;
        self.messages.push(ChatMessage::assistant(content));
        true
    }

    pub fn abandon_generation(&mut self, ticket: Ticket) {
        if self.in_flight == Some(ticket) {
            self.in_flight = None;
        }
    }

    /// Content of the last message when it is a passage worth showing.
    pub fn latest_story(&self) -> Option<&str> {
        let last = self.messages.last()?;
        if !last.is_assistant() || last.content.starts_with("Generate") {
            return None;
        }
        Some(&last.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_to_show_initially() {
        let transcript = Transcript::default();
        assert!(transcript.latest_story().is_none());
        assert!(!transcript.is_generating());
    }

    #[test]
    fn finished_generation_becomes_latest_story() {
        let mut transcript = Transcript::default();
        assert!(transcript.begin_generation(1));
        assert!(transcript.is_generating());

        assert!(transcript.finish_generation(1, "Once upon a time".to_string()));
        assert!(!transcript.is_generating());
        assert_eq!(transcript.latest_story(), Some("Once upon a time"));

        transcript.begin_generation(2);
        transcript.finish_generation(2, "The end".to_string());
        assert_eq!(transcript.messages().len(), 2);
        assert_eq!(transcript.latest_story(), Some("The end"));
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut transcript = Transcript::default();
        transcript.begin_generation(1);
        transcript.begin_generation(2);

        assert!(!transcript.finish_generation(1, "old".to_string()));
        assert!(transcript.is_generating());
        assert!(transcript.finish_generation(2, "new".to_string()));
        assert!(!transcript.finish_generation(1, "old".to_string()));
        assert_eq!(transcript.latest_story(), Some("new"));
        assert_eq!(transcript.messages().len(), 1);
    }

    #[test]
    fn a_ticket_applies_at_most_once() {
        let mut transcript = Transcript::default();
        transcript.begin_generation(1);
        assert!(transcript.finish_generation(1, "first".to_string()));
        assert!(!transcript.finish_generation(1, "again".to_string()));
        assert_eq!(transcript.messages().len(), 1);
    }

    #[test]
    fn older_tickets_cannot_be_begun() {
        let mut transcript = Transcript::default();
        assert!(transcript.begin_generation(5));
        assert!(!transcript.begin_generation(3));
        assert!(!transcript.begin_generation(5));
    }

    #[test]
    fn abandoned_generation_leaves_messages_alone() {
        let mut transcript = Transcript::default();
        transcript.begin_generation(1);
        transcript.abandon_generation(1);
        assert!(!transcript.is_generating());
        assert!(transcript.messages().is_empty());
    }

    #[test]
    fn abandoning_a_stale_ticket_keeps_newer_request_in_flight() {
        let mut transcript = Transcript::default();
        transcript.begin_generation(1);
        transcript.begin_generation(2);
        transcript.abandon_generation(1);
        assert!(transcript.is_generating());
    }

    #[test]
    fn passages_starting_with_generate_are_hidden() {
        let mut transcript = Transcript::default();
        transcript.begin_generation(1);
        transcript.finish_generation(1, "Generate a story".to_string());
        assert!(transcript.latest_story().is_none());
    }
}
