//! Connectivity monitor
//!
//! Polls a probe for the active connection type and reports the first
//! observation and every change after it.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::logic::connectivity::{detect_connection, ConnectionType, InterfaceInfo};
use crate::messages::Msg;

/// Source of network interface snapshots
pub trait ConnectivityProbe: Send + Sync + 'static {
    fn interfaces(&self) -> Result<Vec<InterfaceInfo>>;

    /// Current connection type; probe failures read as unknown
    fn connection_type(&self) -> ConnectionType {
        match self.interfaces() {
            Ok(interfaces) => detect_connection(&interfaces),
            Err(e) => {
                log::warn!("Connectivity probe failed: {:#}", e);
                ConnectionType::Unknown
            }
        }
    }
}

/// Reads interfaces from sysfs (`/sys/class/net` on Linux)
#[derive(Debug, Clone)]
pub struct SysfsProbe {
    root: PathBuf,
}

impl SysfsProbe {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Default for SysfsProbe {
    fn default() -> Self {
        Self::new("/sys/class/net")
    }
}

impl ConnectivityProbe for SysfsProbe {
    fn interfaces(&self) -> Result<Vec<InterfaceInfo>> {
        let entries = std::fs::read_dir(&self.root)
            .with_context(|| format!("Failed to read {}", self.root.display()))?;

        let mut interfaces = Vec::new();
        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().into_owned();

            let operstate = std::fs::read_to_string(path.join("operstate")).unwrap_or_default();
            let wireless = path.join("wireless").exists() || path.join("phy80211").exists();

            interfaces.push(InterfaceInfo {
                name,
                is_up: operstate.trim() == "up",
                wireless,
            });
        }

        interfaces.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(interfaces)
    }
}

/// Spawn the connectivity monitor
///
/// Stops when the receiver is dropped.
pub fn spawn_connectivity_monitor<P: ConnectivityProbe>(
    probe: P,
    poll_interval: Duration,
) -> mpsc::UnboundedReceiver<Msg> {
    let (tx, rx) = mpsc::unbounded_channel();
    let probe = Arc::new(probe);

    tokio::spawn(async move {
        let mut last: Option<ConnectionType> = None;

        loop {
            let snapshot = Arc::clone(&probe);
            let current = match tokio::task::spawn_blocking(move || snapshot.connection_type()).await {
                Ok(connection) => connection,
                Err(e) => {
                    log::warn!("Connectivity probe task failed: {}", e);
                    ConnectionType::Unknown
                }
            };

            if last.as_ref() != Some(&current) {
                log::debug!("Connectivity: {:?} -> {}", last, current);
                if tx.send(Msg::ConnectivityChanged(current.clone())).is_err() {
                    break;
                }
                last = Some(current);
            }

            tokio::time::sleep(poll_interval).await;
        }
    });

    rx
}
