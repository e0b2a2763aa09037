use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::{AllocationId, AllocationStatus, PaymentMethod};

/// all events emitted by allocation operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    AllocationCreated {
        allocation_id: AllocationId,
        total_amount: Money,
        down_payment: Money,
        balance: Money,
        timestamp: DateTime<Utc>,
    },
    AllocationUpdated {
        allocation_id: AllocationId,
        total_amount: Money,
        balance: Money,
        version: u64,
        timestamp: DateTime<Utc>,
    },
    PaymentMethodChanged {
        allocation_id: AllocationId,
        old_method: PaymentMethod,
        new_method: PaymentMethod,
        timestamp: DateTime<Utc>,
    },
    ScheduleRegenerated {
        allocation_id: AllocationId,
        amounts: [Money; 3],
        first_due_date: NaiveDate,
    },
    InstallmentMarkedPaid {
        allocation_id: AllocationId,
        ordinal: u8,
        amount: Money,
        paid_date: NaiveDate,
    },
    InstallmentMarkedUnpaid {
        allocation_id: AllocationId,
        ordinal: u8,
    },
    AllocationSettled {
        allocation_id: AllocationId,
        total_collected: Money,
        timestamp: DateTime<Utc>,
    },
    ChequeReleased {
        allocation_id: AllocationId,
        released_date: NaiveDate,
    },
    StatusChanged {
        allocation_id: AllocationId,
        old_status: AllocationStatus,
        new_status: AllocationStatus,
        timestamp: DateTime<Utc>,
    },
}

/// event store for collecting events during operations
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
