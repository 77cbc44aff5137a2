//! League-wide lookup tables built once per run from the upstream API.

pub mod managers;
pub mod players;

pub use managers::{ManagerInfo, ManagerRoster};
pub use players::{PlayerDirectory, PlayerInfo};
