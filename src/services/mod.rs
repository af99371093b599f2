pub mod lottery_service;
pub mod participant_service;
pub mod prize_service;
pub mod record_service;
pub mod settings_service;
pub mod system_service;

pub use lottery_service::*;
pub use participant_service::*;
pub use prize_service::*;
pub use record_service::*;
pub use settings_service::*;
pub use system_service::*;
