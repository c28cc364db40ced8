//! The two FIFO waiting lines and the priority pick rule.

use std::collections::VecDeque;

/// Which waiting line a customer was routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueTag {
    /// Customers who paid for a privilege ticket; always served first.
    Privilege,
    /// Served only while the privilege queue is empty.
    Regular,
}

/// Two FIFO queues of arrival timestamps with strict privilege priority.
///
/// There is no polymorphism here, just a deterministic selection rule:
/// [`TaggedQueues::pop_next`] picks from the privilege queue when it is
/// non-empty, otherwise from the regular queue.
#[derive(Debug, Default)]
pub struct TaggedQueues {
    privilege: VecDeque<f64>,
    regular: VecDeque<f64>,
}

impl TaggedQueues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a customer (identified by their queue-entry time) to a queue.
    pub fn push(&mut self, tag: QueueTag, entry_time: f64) {
        match tag {
            QueueTag::Privilege => self.privilege.push_back(entry_time),
            QueueTag::Regular => self.regular.push_back(entry_time),
        }
    }

    /// Remove and return the next customer to serve, with the queue they
    /// came from. Privilege first, regular otherwise.
    pub fn pop_next(&mut self) -> Option<(QueueTag, f64)> {
        if let Some(entry_time) = self.privilege.pop_front() {
            Some((QueueTag::Privilege, entry_time))
        } else {
            self.regular
                .pop_front()
                .map(|entry_time| (QueueTag::Regular, entry_time))
        }
    }

    pub fn is_empty(&self) -> bool {
        self.privilege.is_empty() && self.regular.is_empty()
    }

    pub fn len(&self) -> usize {
        self.privilege.len() + self.regular.len()
    }
}
