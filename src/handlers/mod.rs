pub mod draw;
pub mod participant;
pub mod prize;
pub mod record;
pub mod settings;
pub mod system;

pub use draw::draw_config;
pub use participant::participant_config;
pub use prize::prize_config;
pub use record::record_config;
pub use settings::settings_config;
pub use system::system_config;
