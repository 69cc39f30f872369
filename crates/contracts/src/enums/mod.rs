pub mod debt_entry_type;
pub mod debt_status;
pub mod meter_type;
pub mod payment_channel;
pub mod refund_status;

pub use debt_entry_type::DebtEntryType;
pub use debt_status::DebtStatus;
pub use meter_type::MeterType;
pub use payment_channel::PaymentChannel;
pub use refund_status::RefundStatus;
