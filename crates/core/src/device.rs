// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Device inventory lookup for decorating step targets.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Kind of composable hardware resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeviceType {
    Cpu,
    Memory,
    Storage,
    Gpu,
    Fpga,
    NetworkInterface,
    VirtualMedia,
    /// Inventory entries with a type this build does not know about.
    #[serde(other)]
    Unknown,
}

crate::simple_display! {
    DeviceType {
        Cpu => "Cpu",
        Memory => "Memory",
        Storage => "Storage",
        Gpu => "Gpu",
        Fpga => "Fpga",
        NetworkInterface => "NetworkInterface",
        VirtualMedia => "VirtualMedia",
        Unknown => "Unknown",
    }
}

/// One entry of the side-loaded device inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    #[serde(rename = "deviceID")]
    pub device_id: String,
    #[serde(rename = "type")]
    pub device_type: DeviceType,
}

/// Device-ID to device-type lookup built from the inventory source.
#[derive(Debug, Clone, Default)]
pub struct DeviceCatalog {
    by_id: HashMap<String, DeviceType>,
}

impl DeviceCatalog {
    /// Catalog that resolves nothing (inventory not loaded yet).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(devices: &[Device]) -> Self {
        Self {
            by_id: devices.iter().map(|d| (d.device_id.clone(), d.device_type)).collect(),
        }
    }

    pub fn device_type(&self, device_id: &str) -> Option<DeviceType> {
        self.by_id.get(device_id).copied()
    }

    /// Render a device ID as `"<Type>(<deviceID>)"` when the ID resolves,
    /// or the bare ID when it does not.
    pub fn label(&self, device_id: &str) -> String {
        match self.by_id.get(device_id) {
            Some(device_type) => format!("{device_type}({device_id})"),
            None => device_id.to_string(),
        }
    }
}

impl FromIterator<Device> for DeviceCatalog {
    fn from_iter<I: IntoIterator<Item = Device>>(iter: I) -> Self {
        Self {
            by_id: iter.into_iter().map(|d| (d.device_id, d.device_type)).collect(),
        }
    }
}

#[cfg(test)]
#[path = "device_tests.rs"]
mod tests;
