//! Background Services
//!
//! - api: Backend request worker
//! - clipboard: Share text piped to a clipboard command
//! - connectivity: Network connectivity monitor

pub mod api;
pub mod clipboard;
pub mod connectivity;

pub use api::{spawn_api_service, ApiRequest};
pub use connectivity::{spawn_connectivity_monitor, ConnectivityProbe, SysfsProbe};
