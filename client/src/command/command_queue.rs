use std::collections::HashMap;

use log::debug;

use remote_inspector_shared::{CommandRequest, CommandResponse, InspectorCommand, RequestId};

use crate::CommandError;

/// What the remote side reported for one command.
#[derive(Clone, Debug, PartialEq)]
pub enum CommandOutcome {
    Succeeded(InspectorCommand),
    Failed(InspectorCommand, String),
}

impl CommandOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    pub fn command(&self) -> &InspectorCommand {
        match self {
            Self::Succeeded(command) | Self::Failed(command, _) => command,
        }
    }
}

/// Outbound commands waiting for the transport, and commands waiting for a response.
pub struct CommandQueue {
    next_id: RequestId,
    capacity: usize,
    outgoing: Vec<CommandRequest>,
    in_flight: HashMap<RequestId, InspectorCommand>,
}

impl CommandQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            next_id: 0,
            capacity,
            outgoing: Vec::new(),
            in_flight: HashMap::new(),
        }
    }

    pub fn send(&mut self, command: InspectorCommand) -> Result<RequestId, CommandError> {
        if self.pending_count() >= self.capacity {
            return Err(CommandError::QueueFull {
                capacity: self.capacity,
            });
        }

        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.outgoing.push(CommandRequest { id, command });
        Ok(id)
    }

    /// Hands queued requests to the transport; they stay tracked until answered.
    pub fn take_outgoing(&mut self) -> Vec<CommandRequest> {
        let outgoing = std::mem::take(&mut self.outgoing);
        for request in &outgoing {
            self.in_flight.insert(request.id, request.command.clone());
        }
        outgoing
    }

    pub fn receive_response(&mut self, response: CommandResponse) -> Result<CommandOutcome, CommandError> {
        let Some(command) = self.in_flight.remove(&response.id) else {
            return Err(CommandError::UnknownRequest { id: response.id });
        };

        match response.error {
            None => Ok(CommandOutcome::Succeeded(command)),
            Some(reason) => {
                debug!("command {} failed remotely: {}", response.id, reason);
                Ok(CommandOutcome::Failed(command, reason))
            }
        }
    }

    pub fn pending_count(&self) -> usize {
        self.outgoing.len() + self.in_flight.len()
    }

    pub fn is_in_flight(&self, id: &RequestId) -> bool {
        self.in_flight.contains_key(id)
    }

    pub fn clear(&mut self) {
        self.outgoing.clear();
        self.in_flight.clear();
    }
}
