// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::test_support::device;

#[test]
fn inventory_wire_shape() {
    let json = r#"[
        { "deviceID": "dev-1", "type": "gpu" },
        { "deviceID": "dev-2", "type": "networkInterface" }
    ]"#;

    let devices: Vec<Device> = serde_json::from_str(json).unwrap();
    assert_eq!(devices[0].device_type, DeviceType::Gpu);
    assert_eq!(devices[1].device_type, DeviceType::NetworkInterface);
}

#[test]
fn unknown_type_falls_back() {
    let d: Device = serde_json::from_str(r#"{ "deviceID": "x", "type": "quantum" }"#).unwrap();
    assert_eq!(d.device_type, DeviceType::Unknown);
}

#[test]
fn label_decorates_resolvable_ids() {
    let catalog = DeviceCatalog::new(&[device("dev-1", DeviceType::Gpu)]);

    assert_eq!(catalog.label("dev-1"), "Gpu(dev-1)");
    assert_eq!(catalog.label("dev-9"), "dev-9");
}

#[test]
fn empty_catalog_resolves_nothing() {
    let catalog = DeviceCatalog::empty();
    assert_eq!(catalog.device_type("dev-1"), None);
    assert_eq!(catalog.label("dev-1"), "dev-1");
}

#[yare::parameterized(
    cpu     = { DeviceType::Cpu, "Cpu" },
    memory  = { DeviceType::Memory, "Memory" },
    storage = { DeviceType::Storage, "Storage" },
    fpga    = { DeviceType::Fpga, "Fpga" },
    media   = { DeviceType::VirtualMedia, "VirtualMedia" },
)]
fn display_is_title_case(device_type: DeviceType, expected: &str) {
    assert_eq!(device_type.to_string(), expected);
}

#[test]
fn from_iterator_builds_catalog() {
    let catalog: DeviceCatalog =
        vec![device("a", DeviceType::Cpu), device("b", DeviceType::Memory)].into_iter().collect();
    assert_eq!(catalog.device_type("a"), Some(DeviceType::Cpu));
    assert_eq!(catalog.label("b"), "Memory(b)");
}
