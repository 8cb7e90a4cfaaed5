pub mod client;
pub mod error;

pub use client::OttboardClient;
pub use error::{SdkError, SdkResult};
pub use ottboard_core::{AnalyticsSnapshot, RefreshReceipt};
