use thiserror::Error;

use crate::decimal::Money;

#[derive(Error, Debug)]
pub enum AllocationError {
    #[error("negative amount for {field}: {amount}")]
    NegativeAmount {
        field: &'static str,
        amount: Money,
    },

    #[error("no vehicle selected")]
    MissingVehicle,

    #[error("invalid installment amount: {amount}")]
    InvalidInstallmentAmount {
        amount: Money,
    },

    #[error("manual installments exceed balance: balance {balance}, requested {requested}")]
    InstallmentExceedsBalance {
        balance: Money,
        requested: Money,
    },

    #[error("installment ordinal out of range: {ordinal}")]
    InvalidOrdinal {
        ordinal: u8,
    },

    #[error("allocation has no installment schedule")]
    NoSchedule,

    #[error("version conflict: expected {expected}, current {current}")]
    Conflict {
        expected: u64,
        current: u64,
    },

    #[error("invalid date: {message}")]
    InvalidDate {
        message: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, AllocationError>;
