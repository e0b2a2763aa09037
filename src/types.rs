use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::{Money, Rate};

/// unique identifier for an allocation record
pub type AllocationId = Uuid;

/// how the vehicle is being paid for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// paid in full at purchase, no outstanding balance
    FullPayment,
    /// in-house financing, the only method with an installment schedule
    PartnerLeasing,
    /// financed by an external leasing company that runs its own plan
    OtherCompanyLeasing,
}

impl PaymentMethod {
    /// only partner leasing carries a three-installment schedule
    pub fn produces_schedule(&self) -> bool {
        matches!(self, PaymentMethod::PartnerLeasing)
    }

    /// interest is charged only on the in-house plan
    pub fn uses_interest(&self) -> bool {
        matches!(self, PaymentMethod::PartnerLeasing)
    }

    /// either leasing variant involves a leasing officer
    pub fn is_leasing(&self) -> bool {
        matches!(
            self,
            PaymentMethod::PartnerLeasing | PaymentMethod::OtherCompanyLeasing
        )
    }
}

/// allocation lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllocationStatus {
    Pending,
    Approved,
    Completed,
    Cancelled,
}

/// customer details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub full_name: String,
    pub nic: String,
    pub contact_no: String,
    pub address: String,
}

/// vehicle being allocated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub vehicle_type: String,
    pub base_price: Money,
    pub engine_no: String,
    pub chassis_no: String,
}

/// one-time charges added on top of the base price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Fees {
    pub registration_fee: Money,
    pub document_charge: Money,
    pub insurance_fee: Money,
}

impl Fees {
    pub fn total(&self) -> Money {
        self.registration_fee + self.document_charge + self.insurance_fee
    }
}

/// optional discount; the amount only counts when explicitly applied
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Discount {
    pub applied: bool,
    pub amount: Money,
}

impl Discount {
    pub fn of(amount: Money) -> Self {
        Self {
            applied: true,
            amount,
        }
    }

    /// effective discount amount, zero unless applied
    pub fn effective(&self) -> Money {
        if self.applied {
            self.amount
        } else {
            Money::ZERO
        }
    }
}

/// officer handling a leased allocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeasingOfficer {
    pub company: String,
    pub name: String,
    pub contact_no: String,
    pub commission_percent: Rate,
}

impl LeasingOfficer {
    /// commission earned on a given amount, derived on demand and never stored
    pub fn commission_on(&self, amount: Money) -> Money {
        amount.percentage(self.commission_percent.as_percentage())
    }
}
