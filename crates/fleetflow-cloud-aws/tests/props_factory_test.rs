//! Property normalization through the public factory API

use fleetflow_cloud_aws::{CloudProps, GlobalDefaults, PropsFactory, RawProperties, ResourceKind};
use serde_json::{Value, json};

fn raw(value: Value) -> RawProperties {
    value.as_object().cloned().unwrap()
}

fn factory(encrypted: bool) -> PropsFactory {
    PropsFactory::new(
        GlobalDefaults::new("us-east-1")
            .with_encrypted(encrypted)
            .with_kms_key_arn("arn:aws:kms:us-east-1:000000000000:key/default"),
    )
}

#[test]
fn test_encrypted_follows_defaults_when_absent() {
    let inputs = [
        json!({}),
        json!({"type": "gp3"}),
        json!({"name": "bionic", "version": "1"}),
        json!({"kms_key_arn": "arn:other"}),
    ];

    for global in [true, false] {
        let factory = factory(global);
        for input in &inputs {
            let input = raw(input.clone());
            assert_eq!(factory.stemcell_props(&input).encrypted(), global);
            assert_eq!(factory.disk_props(&input).encrypted(), global);
        }
    }
}

#[test]
fn test_explicit_encrypted_wins_over_defaults() {
    for global in [true, false] {
        let factory = factory(global);
        for explicit in [true, false] {
            let input = raw(json!({ "encrypted": explicit }));
            assert_eq!(factory.stemcell_props(&input).encrypted(), explicit);
            assert_eq!(factory.disk_props(&input).encrypted(), explicit);
        }
    }
}

#[test]
fn test_heavy_stemcell_example() {
    let props = factory(false).stemcell_props(&raw(json!({
        "name": "bionic",
        "version": "1",
        "ami": {}
    })));

    assert!(props.old());
    assert!(!props.is_light());
    assert_eq!(props.region_ami(), None);
    assert_eq!(props.formatted_name(), "bionic 1");
}

#[test]
fn test_light_stemcell_example() {
    let props = factory(false).stemcell_props(&raw(json!({
        "ami": {"us-east-1": "ami-123"}
    })));

    assert!(props.is_light());
    assert_eq!(props.region_ami(), Some("ami-123"));
    assert_eq!(props.ami_ids(), vec!["ami-123"]);
}

#[test]
fn test_disk_size_default() {
    let factory = factory(false);

    for input in [json!({}), json!({"disk": null}), json!({"disk": false})] {
        assert_eq!(factory.stemcell_props(&raw(input)).disk_size_mb(), 2048);
    }
    assert_eq!(
        factory.stemcell_props(&raw(json!({"disk": 3072}))).disk_size_mb(),
        3072
    );
}

#[test]
fn test_stemcell_defaults_from_config() {
    let factory = PropsFactory::new(
        GlobalDefaults::new("us-east-1")
            .with_stemcell_default("virtualization_type", "paravirtual")
            .with_stemcell_default("root_device_name", "/dev/sda1"),
    );

    let inherited = factory.stemcell_props(&RawProperties::new());
    assert!(inherited.paravirtual());
    assert_eq!(inherited.root_device_name(), Some("/dev/sda1"));

    let overridden = factory.stemcell_props(&raw(json!({"virtualization_type": "hvm"})));
    assert!(!overridden.paravirtual());
    assert_eq!(overridden.root_device_name(), Some("/dev/sda1"));
}

#[test]
fn test_vm_ephemeral_disk_encryption() {
    let encrypted = factory(true);

    let props = encrypted.vm_props(&raw(json!({"instance_type": "m5.large"})));
    assert_eq!(props.as_map()["ephemeral_disk"]["encrypted"], json!(true));

    let props = encrypted.vm_props(&raw(json!({"ephemeral_disk": {"encrypted": false}})));
    assert_eq!(props.as_map()["ephemeral_disk"]["encrypted"], json!(false));

    let props = factory(false).vm_props(&raw(json!({"instance_type": "m5.large"})));
    assert!(!props.as_map().contains_key("ephemeral_disk"));
}

#[test]
fn test_vm_view_is_independent_of_input() {
    let factory = factory(true);
    let mut input = raw(json!({
        "instance_type": "m5.large",
        "elbs": ["web"],
        "ephemeral_disk": {"size": 4096}
    }));

    let props = factory.vm_props(&input);
    let snapshot = props.clone().into_map();

    input.remove("instance_type");
    input["ephemeral_disk"]["size"] = json!(1);
    input["elbs"] = json!(["other"]);

    assert_eq!(props.as_map(), &snapshot);
    assert_eq!(props.load_balancer_names(), ["web"]);
    assert_eq!(props.as_map()["ephemeral_disk"]["size"], json!(4096));
}

#[test]
fn test_vm_passes_unknown_keys_through() {
    let input = raw(json!({
        "instance_type": "c5.xlarge",
        "availability_zone": "us-east-1a",
        "security_groups": ["sg-1"],
        "lb_target_groups": ["tg-1"]
    }));

    let props = factory(false).vm_props(&input);
    assert_eq!(props.as_map(), &input);
    assert_eq!(props.target_group_names(), ["tg-1"]);
    assert!(props.load_balancer_names().is_empty());
}

#[test]
fn test_props_for_dispatch() {
    let factory = factory(true);
    let input = raw(json!({"type": "gp3", "iops": 3000}));

    match factory.props_for(ResourceKind::Disk, &input) {
        CloudProps::Disk(disk) => {
            assert_eq!(disk.disk_type(), Some("gp3"));
            assert_eq!(disk.iops(), Some(3000));
            assert!(disk.encrypted());
        }
        other => panic!("Expected disk props, got {:?}", other.kind()),
    }

    let props = factory.props_for_type("stemcell", &input).unwrap();
    assert_eq!(props.kind(), ResourceKind::Stemcell);
}

#[test]
fn test_stemcell_serializes_resolved_fields() {
    let props = factory(true).stemcell_props(&raw(json!({"ami": {"us-east-1": "ami-9"}})));
    let value = serde_json::to_value(&props).unwrap();

    assert_eq!(value["disk"], json!(2048));
    assert_eq!(value["virtualization_type"], json!("hvm"));
    assert_eq!(value["encrypted"], json!(true));
    assert_eq!(value["ami"], json!({"us-east-1": "ami-9"}));
}

#[test]
fn test_factory_is_shareable_across_threads() {
    let factory = factory(true);

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let factory = factory.clone();
            std::thread::spawn(move || {
                let input = raw(json!({ "disk": 1024 * (i + 1) }));
                factory.stemcell_props(&input).disk_size_mb()
            })
        })
        .collect();

    let sizes: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(sizes, vec![1024, 2048, 3072, 4096]);
}
