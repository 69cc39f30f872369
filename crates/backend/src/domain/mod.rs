pub mod a001_meter;
pub mod a002_debt_customer;
pub mod a003_debt_entry;
pub mod a004_refund;
pub mod a005_prepaid_transaction;
