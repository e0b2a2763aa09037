pub mod allocation;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod pricing;
pub mod reminders;
pub mod schedule;
pub mod types;
pub mod worklist;

// re-export key types
pub use allocation::{Allocation, AllocationInput};
pub use config::{EngineConfig, DEFAULT_CHEQUE_RELEASE_OFFSET_DAYS};
pub use decimal::{Money, Rate};
pub use errors::{AllocationError, Result};
pub use events::{Event, EventStore};
pub use ledger::CollectionSummary;
pub use pricing::{compute_totals, DerivedTotals, PricingInput};
pub use reminders::{reminders, ChequeReminder, ReminderStatus};
pub use schedule::{schedule, Installment, ManualSplit, INSTALLMENT_COUNT};
pub use types::{
    AllocationId, AllocationStatus, Customer, Discount, Fees, LeasingOfficer, PaymentMethod,
    Vehicle,
};
pub use worklist::{due_worklist, DueItem};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
