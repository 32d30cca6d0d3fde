//! Network connectivity classification
//!
//! Maps connection types to the messages shown to the user, and derives a
//! connection type from a snapshot of network interfaces.

use std::fmt;

/// Connection type as reported by the connectivity notifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionType {
    None,
    Unknown,
    Cellular,
    Wifi,
    /// Any other active connection (ethernet, vpn, ...)
    Other(String),
}

impl ConnectionType {
    /// Parse the notifier's connection-type string
    pub fn parse(value: &str) -> Self {
        match value {
            "none" => ConnectionType::None,
            "unknown" => ConnectionType::Unknown,
            "cellular" => ConnectionType::Cellular,
            "wifi" => ConnectionType::Wifi,
            other => ConnectionType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ConnectionType::None => "none",
            ConnectionType::Unknown => "unknown",
            ConnectionType::Cellular => "cellular",
            ConnectionType::Wifi => "wifi",
            ConnectionType::Other(name) => name,
        }
    }

    pub fn is_connected(&self) -> bool {
        !matches!(self, ConnectionType::None | ConnectionType::Unknown)
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-facing message for a connection change
pub fn connection_message(connection: &ConnectionType) -> &'static str {
    match connection {
        ConnectionType::None => "No network connection is active.",
        ConnectionType::Unknown => "The network connection state is now unknown.",
        ConnectionType::Cellular => "You are now connected to a cellular network.",
        ConnectionType::Wifi => "You are now connected to a WiFi network.",
        ConnectionType::Other(_) => "You are now connected to an active network.",
    }
}

/// Toast text announcing the connection type found at startup
pub fn initial_announcement(connection: &ConnectionType) -> String {
    format!("Initial Network Connectivity Type: {}", connection)
}

/// Toast text announcing a later connection change
pub fn change_announcement(connection: &ConnectionType) -> String {
    format!("Connection change: {}", connection_message(connection))
}

/// One network interface as seen by the probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceInfo {
    pub name: String,
    pub is_up: bool,
    pub wireless: bool,
}

fn is_cellular_name(name: &str) -> bool {
    ["wwan", "rmnet", "ppp"]
        .iter()
        .any(|prefix| name.starts_with(prefix))
}

/// Derive the active connection type from an interface snapshot
///
/// Loopback is ignored. When several interfaces are up the order of
/// preference is wifi, cellular, then anything else (reported as "ethernet").
pub fn detect_connection(interfaces: &[InterfaceInfo]) -> ConnectionType {
    let up: Vec<&InterfaceInfo> = interfaces
        .iter()
        .filter(|iface| iface.is_up && iface.name != "lo")
        .collect();

    if up.is_empty() {
        return ConnectionType::None;
    }

    if up.iter().any(|iface| iface.wireless) {
        ConnectionType::Wifi
    } else if up.iter().any(|iface| is_cellular_name(&iface.name)) {
        ConnectionType::Cellular
    } else {
        ConnectionType::Other("ethernet".to_string())
    }
}

/// Returns the announcement for `next` if it differs from `previous`
///
/// The first observation (no previous value) is announced as the initial type.
pub fn announcement_for(previous: Option<&ConnectionType>, next: &ConnectionType) -> Option<String> {
    match previous {
        None => Some(initial_announcement(next)),
        Some(prev) if prev == next => None,
        Some(_) => Some(change_announcement(next)),
    }
}
