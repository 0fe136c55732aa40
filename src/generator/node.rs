//! Node id providers for version 1 UUIDs.

use std::sync::OnceLock;

use super::NodeSource;

/// A [`NodeSource`] that reports the first usable hardware MAC address of the host.
///
/// The lookup runs once per process and its outcome, including "no address", is cached. Without
/// the `mac_address` crate feature the provider never reports an address.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub struct HardwareNode;

impl NodeSource for HardwareNode {
    fn node_id(&mut self) -> Option<[u8; 6]> {
        static NODE: OnceLock<Option<[u8; 6]>> = OnceLock::new();
        *NODE.get_or_init(lookup_hardware_address)
    }
}

/// A [`NodeSource`] that never reports an address, so every version 1 UUID gets a random node id.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub struct RandomNode;

impl NodeSource for RandomNode {
    fn node_id(&mut self) -> Option<[u8; 6]> {
        None
    }
}

#[cfg(feature = "mac_address")]
fn lookup_hardware_address() -> Option<[u8; 6]> {
    match mac_address::get_mac_address() {
        Ok(Some(addr)) if usable(&addr.bytes()) => Some(addr.bytes()),
        Ok(Some(addr)) => {
            tracing::debug!(%addr, "ignoring unusable hardware address; using random node ids");
            None
        }
        Ok(None) => {
            tracing::debug!("no hardware address found; using random node ids");
            None
        }
        Err(err) => {
            tracing::debug!(%err, "hardware address lookup failed; using random node ids");
            None
        }
    }
}

#[cfg(not(feature = "mac_address"))]
fn lookup_hardware_address() -> Option<[u8; 6]> {
    tracing::debug!("hardware address lookup disabled; using random node ids");
    None
}

/// Rejects the all-zero and all-one addresses some virtual interfaces report.
#[cfg_attr(not(feature = "mac_address"), allow(dead_code))]
fn usable(bytes: &[u8; 6]) -> bool {
    bytes != &[0x00; 6] && bytes != &[0xff; 6]
}
