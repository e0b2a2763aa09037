use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::Money;
use crate::errors::{AllocationError, Result};
use crate::events::{Event, EventStore};
use crate::ledger;
use crate::pricing::{compute_totals, PricingInput};
use crate::schedule::{schedule, Installment, ManualSplit, INSTALLMENT_COUNT};
use crate::types::{
    AllocationId, AllocationStatus, Customer, Discount, Fees, LeasingOfficer, PaymentMethod,
    Vehicle,
};

/// everything the operator enters on the allocation form.
///
/// derived figures never appear here: the engine recomputes them from
/// these inputs on every create and edit, end to end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationInput {
    pub customer: Customer,
    pub vehicle: Option<Vehicle>,
    pub purchase_date: NaiveDate,
    pub payment_method: PaymentMethod,
    pub fees: Fees,
    pub discount: Discount,
    pub interest_amount: Money,
    pub down_payment: Money,
    pub manual_split: Option<ManualSplit>,
    pub leasing_officer: Option<LeasingOfficer>,
}

impl AllocationInput {
    fn take_vehicle(&self) -> Result<Vehicle> {
        self.vehicle.clone().ok_or(AllocationError::MissingVehicle)
    }
}

/// one vehicle sale or lease case: customer, vehicle and payment plan.
///
/// input fields are stored next to the derived ones; the derived block
/// (`total_amount`, `down_payment`, `balance`, `installments`) is a pure
/// function of the inputs and is recomputed as a whole whenever any of
/// them changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub id: AllocationId,
    /// optimistic-concurrency version, bumped on every successful write
    pub version: u64,

    // operator inputs
    pub customer: Customer,
    pub vehicle: Vehicle,
    pub purchase_date: NaiveDate,
    pub payment_method: PaymentMethod,
    pub fees: Fees,
    pub discount: Discount,
    pub interest_amount: Money,
    /// the down payment the operator entered; for full payment the
    /// effective down payment is the total and this stays zero
    pub down_payment_entered: Money,
    pub manual_split: Option<ManualSplit>,
    pub leasing_officer: Option<LeasingOfficer>,
    pub status: AllocationStatus,

    // derived
    pub total_amount: Money,
    pub down_payment: Money,
    pub balance: Money,
    /// present only for partner leasing with an outstanding balance
    pub installments: Option<[Installment; INSTALLMENT_COUNT]>,
    pub cheque_released_on: Option<NaiveDate>,
}

impl Allocation {
    /// create a new allocation with its derived pricing and schedule
    pub fn create(
        input: AllocationInput,
        time: &SafeTimeProvider,
        events: &mut EventStore,
    ) -> Result<Self> {
        let vehicle = input.take_vehicle()?;

        let mut allocation = Self {
            id: Uuid::new_v4(),
            version: 1,
            customer: input.customer,
            vehicle,
            purchase_date: input.purchase_date,
            payment_method: input.payment_method,
            fees: input.fees,
            discount: input.discount,
            interest_amount: input.interest_amount,
            down_payment_entered: input.down_payment,
            manual_split: input.manual_split,
            leasing_officer: input.leasing_officer,
            status: AllocationStatus::Pending,
            total_amount: Money::ZERO,
            down_payment: Money::ZERO,
            balance: Money::ZERO,
            installments: None,
            cheque_released_on: None,
        };
        allocation.derive(true)?;

        events.emit(Event::AllocationCreated {
            allocation_id: allocation.id,
            total_amount: allocation.total_amount,
            down_payment: allocation.down_payment,
            balance: allocation.balance,
            timestamp: time.now(),
        });

        Ok(allocation)
    }

    /// edit the record, re-running the full pipeline.
    ///
    /// the write is guarded by the caller's `expected_version`; a stale
    /// version fails with `Conflict` and changes nothing. paid state
    /// carries over by ordinal when the schedule is regenerated.
    pub fn update(
        &mut self,
        input: AllocationInput,
        expected_version: u64,
        time: &SafeTimeProvider,
        events: &mut EventStore,
    ) -> Result<()> {
        if expected_version != self.version {
            return Err(AllocationError::Conflict {
                expected: expected_version,
                current: self.version,
            });
        }

        let vehicle = input.take_vehicle()?;

        // a split the operator just typed in is validated strictly; a
        // carried-over split that a balance change invalidated falls
        // back to the even split instead
        let fresh_split =
            input.manual_split.is_some() && input.manual_split != self.manual_split;
        let old_method = self.payment_method;

        // stage the edit on a copy so a rejected input leaves the
        // prior derived state intact
        let mut candidate = self.clone();
        candidate.customer = input.customer;
        candidate.vehicle = vehicle;
        candidate.purchase_date = input.purchase_date;
        candidate.payment_method = input.payment_method;
        candidate.fees = input.fees;
        candidate.discount = input.discount;
        candidate.interest_amount = input.interest_amount;
        candidate.down_payment_entered = input.down_payment;
        candidate.manual_split = input.manual_split;
        candidate.leasing_officer = input.leasing_officer;
        candidate.derive(fresh_split)?;
        candidate.version = self.version + 1;
        *self = candidate;

        if old_method != self.payment_method {
            events.emit(Event::PaymentMethodChanged {
                allocation_id: self.id,
                old_method,
                new_method: self.payment_method,
                timestamp: time.now(),
            });
        }
        if let Some(plan) = &self.installments {
            events.emit(Event::ScheduleRegenerated {
                allocation_id: self.id,
                amounts: [plan[0].amount, plan[1].amount, plan[2].amount],
                first_due_date: plan[0].due_date,
            });
        }
        events.emit(Event::AllocationUpdated {
            allocation_id: self.id,
            total_amount: self.total_amount,
            balance: self.balance,
            version: self.version,
            timestamp: time.now(),
        });

        Ok(())
    }

    /// mark one installment paid or unpaid.
    ///
    /// installments are independent sub-resources: the write bumps the
    /// record version but is not guarded by it, so two operators settling
    /// different installments do not conflict. idempotent.
    pub fn set_installment_paid(
        &mut self,
        ordinal: u8,
        paid: bool,
        time: &SafeTimeProvider,
        events: &mut EventStore,
    ) -> Result<Installment> {
        let plan = self.installments.as_mut().ok_or(AllocationError::NoSchedule)?;

        let index = ledger::ordinal_index(plan, ordinal)?;
        if plan[index].is_paid() == paid {
            return Ok(plan[index]); // already in the requested state
        }

        let today = time.now().date_naive();
        let updated = ledger::mark(plan, ordinal, paid, today)?;
        self.version += 1;

        if paid {
            events.emit(Event::InstallmentMarkedPaid {
                allocation_id: self.id,
                ordinal,
                amount: updated.amount,
                paid_date: today,
            });
            if self.is_settled() {
                events.emit(Event::AllocationSettled {
                    allocation_id: self.id,
                    total_collected: self.total_collected(),
                    timestamp: time.now(),
                });
            }
        } else {
            events.emit(Event::InstallmentMarkedUnpaid {
                allocation_id: self.id,
                ordinal,
            });
        }

        Ok(updated)
    }

    /// release the held cheque: a one-way, idempotent transition
    pub fn release_cheque(
        &mut self,
        time: &SafeTimeProvider,
        events: &mut EventStore,
    ) -> NaiveDate {
        if let Some(released) = self.cheque_released_on {
            return released;
        }

        let today = time.now().date_naive();
        self.cheque_released_on = Some(today);
        self.version += 1;

        events.emit(Event::ChequeReleased {
            allocation_id: self.id,
            released_date: today,
        });

        today
    }

    /// move the allocation through its lifecycle
    pub fn set_status(
        &mut self,
        status: AllocationStatus,
        time: &SafeTimeProvider,
        events: &mut EventStore,
    ) {
        if status == self.status {
            return;
        }
        let old_status = self.status;
        self.status = status;
        self.version += 1;

        events.emit(Event::StatusChanged {
            allocation_id: self.id,
            old_status,
            new_status: status,
            timestamp: time.now(),
        });
    }

    /// re-derive everything from the stored inputs.
    ///
    /// loaded records may carry stale derived fields (hand-edited rows,
    /// older engine versions); this brings them back in line without
    /// touching the inputs, and snaps drifted paid amounts back to the
    /// binary paid/unpaid invariant.
    pub fn normalize(&mut self) -> Result<()> {
        self.derive(false)
    }

    /// the single recompute pipeline: reset method-irrelevant inputs,
    /// price, then schedule
    fn derive(&mut self, fresh_split: bool) -> Result<()> {
        if !self.payment_method.uses_interest() {
            self.interest_amount = Money::ZERO;
        }
        if self.payment_method == PaymentMethod::FullPayment {
            self.down_payment_entered = Money::ZERO;
        }
        if !self.payment_method.produces_schedule() {
            self.manual_split = None;
        }
        if !self.payment_method.is_leasing() {
            self.leasing_officer = None;
        }

        let totals = compute_totals(&self.pricing_input())?;
        self.total_amount = totals.total_amount;
        self.down_payment = totals.down_payment;
        self.balance = totals.balance;

        if self.payment_method.produces_schedule() && self.balance.is_positive() {
            if let Some(split) = self.manual_split {
                if !fresh_split && !split.fits(self.balance) {
                    // stored override no longer fits the new balance
                    self.manual_split = None;
                }
            }

            let previous = self.installments;
            let mut plan = schedule(self.balance, self.purchase_date, self.manual_split.as_ref())?;
            if let Some(previous) = previous {
                for (installment, old) in plan.iter_mut().zip(previous.iter()) {
                    if old.is_paid() {
                        installment.paid_amount = installment.amount;
                        installment.paid_date = old.paid_date;
                    }
                }
            }
            self.installments = Some(plan);
        } else {
            self.installments = None;
        }

        Ok(())
    }

    fn pricing_input(&self) -> PricingInput {
        PricingInput {
            base_price: self.vehicle.base_price,
            fees: self.fees,
            payment_method: self.payment_method,
            discount: self.discount,
            interest_amount: self.interest_amount,
            down_payment: self.down_payment_entered,
        }
    }

    /// sum of installment amounts collected so far
    pub fn total_collected(&self) -> Money {
        self.installments
            .iter()
            .flatten()
            .map(|i| i.paid_amount)
            .sum()
    }

    /// scheduled amount still unpaid
    pub fn outstanding(&self) -> Money {
        self.balance.saturating_sub(self.total_collected())
    }

    /// true when nothing remains to collect
    pub fn is_settled(&self) -> bool {
        match &self.installments {
            Some(plan) => plan.iter().all(Installment::is_paid),
            None => true,
        }
    }

    /// leasing officer commission on the total, derived on demand
    pub fn commission(&self) -> Option<Money> {
        self.leasing_officer
            .as_ref()
            .map(|officer| officer.commission_on(self.total_amount))
    }

    /// current state as pretty JSON
    pub fn json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
