use crate::core::BodyHandle;
use crate::interaction::Outcome;
use std::collections::VecDeque;

/// Types of body events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyEventType {
    /// A body has been added to the world
    Added,

    /// A body has been removed from the world
    Removed,
}

/// An event related to a single body
#[derive(Debug, Clone, PartialEq)]
pub struct BodyEvent {
    /// The type of body event
    pub event_type: BodyEventType,

    /// The body that the event refers to
    pub body: BodyHandle,
}

/// A contact resolved between two bodies
#[derive(Debug, Clone, PartialEq)]
pub struct ContactEvent {
    /// The earlier body in iteration order (or the body being inserted)
    pub body_a: BodyHandle,

    /// The other body
    pub body_b: BodyHandle,

    /// What the interaction did
    pub outcome: Outcome,
}

/// A queue of simulation events, cleared at the start of every tick
#[derive(Debug, Default)]
pub struct EventQueue {
    contact_events: VecDeque<ContactEvent>,
    body_events: VecDeque<BodyEvent>,
}

impl EventQueue {
    /// Creates a new empty event queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a contact event to the queue
    pub fn add_contact_event(&mut self, event: ContactEvent) {
        self.contact_events.push_back(event);
    }

    /// Adds a body event to the queue
    pub fn add_body_event(&mut self, event: BodyEvent) {
        self.body_events.push_back(event);
    }

    /// Gets the next contact event from the queue
    pub fn next_contact_event(&mut self) -> Option<ContactEvent> {
        self.contact_events.pop_front()
    }

    /// Gets the next body event from the queue
    pub fn next_body_event(&mut self) -> Option<BodyEvent> {
        self.body_events.pop_front()
    }

    /// Returns the pending contact events
    pub fn contact_events(&self) -> impl Iterator<Item = &ContactEvent> {
        self.contact_events.iter()
    }

    /// Returns the pending body events
    pub fn body_events(&self) -> impl Iterator<Item = &BodyEvent> {
        self.body_events.iter()
    }

    /// Gets all body events of a specific type
    pub fn get_body_events_of_type(&self, event_type: BodyEventType) -> Vec<&BodyEvent> {
        self.body_events
            .iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }

    /// Gets all contact events involving a specific body
    pub fn get_contact_events_for_body(&self, body: BodyHandle) -> Vec<&ContactEvent> {
        self.contact_events
            .iter()
            .filter(|e| e.body_a == body || e.body_b == body)
            .collect()
    }

    /// Returns whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.contact_events.is_empty() && self.body_events.is_empty()
    }

    /// Clears all events from the queue
    pub fn clear(&mut self) {
        self.contact_events.clear();
        self.body_events.clear();
    }
}
