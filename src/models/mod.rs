pub mod common;
pub mod draw;
pub mod participant;
pub mod prize;
pub mod settings;
pub mod system;
pub mod winner_record;

pub use common::*;
pub use draw::*;
pub use participant::*;
pub use prize::*;
pub use settings::*;
pub use system::*;
pub use winner_record::*;
