use creational_recipe::builder::{Component, Phone, PhoneBuilder, NOT_DEFINED};

/// A phone built without any setter calls reports the placeholder in every slot.
#[test]
fn test_unset_slots_report_placeholder() {
    let phone = PhoneBuilder::new().build();

    for component in Component::ALL {
        assert_eq!(phone.get(component), None);
        assert!(!phone.is_defined(component));
        assert_eq!(
            phone.display(component),
            format!("{} - {}", component.label(), NOT_DEFINED)
        );
    }
    assert_eq!(phone.display(Component::Cpu), "CPU - not defined");
    assert_eq!(phone, Phone::default());
}

/// The example chain from the design notes: two slots set, two left as placeholders.
#[test]
fn test_partial_build_keeps_remaining_placeholders() {
    let phone = PhoneBuilder::new().set_cpu("A18").set_ram("8 GB").build();

    assert_eq!(phone.cpu(), Some("A18"));
    assert_eq!(phone.ram(), Some("8 GB"));
    assert_eq!(phone.display(Component::Camera), "Camera - not defined");
    assert_eq!(phone.display(Component::Storage), "Storage - not defined");
}

/// Every ordering of the four setters yields the same phone.
#[test]
fn test_setter_order_does_not_matter() {
    let values = [
        (Component::Cpu, "Exynos"),
        (Component::Ram, "12 GB"),
        (Component::Camera, "50 MP"),
        (Component::Storage, "512 GB"),
    ];

    // All 24 permutations of four indices
    let mut permutations = Vec::new();
    for a in 0..4 {
        for b in 0..4 {
            for c in 0..4 {
                for d in 0..4 {
                    let order = [a, b, c, d];
                    let mut seen = [false; 4];
                    order.iter().for_each(|&i| seen[i] = true);
                    if seen.iter().all(|&s| s) {
                        permutations.push(order);
                    }
                }
            }
        }
    }
    assert_eq!(permutations.len(), 24);

    for order in permutations {
        let phone = order
            .iter()
            .fold(PhoneBuilder::new(), |builder, &i| {
                let (component, value) = values[i];
                match component {
                    Component::Cpu => builder.set_cpu(value),
                    Component::Ram => builder.set_ram(value),
                    Component::Camera => builder.set_camera(value),
                    Component::Storage => builder.set_storage(value),
                }
            })
            .build();

        for (component, value) in values {
            assert_eq!(
                phone.get(component),
                Some(value),
                "{component} wrong for order {order:?}"
            );
        }
    }
}

/// Two builders never share a phone: configuring the second leaves the first intact.
#[test]
fn test_builders_are_independent() {
    let first = PhoneBuilder::new().set_cpu("Mediatek").set_ram("4 GB").build();
    let snapshot = first.clone();

    let second = PhoneBuilder::new()
        .set_cpu("A18")
        .set_ram("8 GB")
        .set_camera("48 MP")
        .build();

    assert_eq!(first, snapshot);
    assert_eq!(first.cpu(), Some("Mediatek"));
    assert_eq!(first.camera(), None);
    assert_eq!(second.cpu(), Some("A18"));
}

/// Descriptors are free-form, including text that looks like the placeholder.
#[test]
fn test_any_text_is_accepted() {
    let phone = PhoneBuilder::new()
        .set_cpu("")
        .set_ram("CPU - not defined")
        .set_camera("📷 ∞ MP")
        .build();

    assert_eq!(phone.cpu(), Some(""));
    assert!(phone.is_defined(Component::Ram));
    assert_eq!(phone.ram(), Some("CPU - not defined"));
    assert_eq!(phone.camera(), Some("📷 ∞ MP"));
    assert!(!phone.is_defined(Component::Storage));
}

/// Setting a slot twice keeps the last value; the generic setter matches the named ones.
#[test]
fn test_last_write_wins() {
    let phone = PhoneBuilder::new()
        .set_storage("16 GB")
        .set(Component::Storage, "1 TB")
        .build();

    assert_eq!(phone.storage(), Some("1 TB"));
}

/// The presets reproduce the basic and advanced configurations.
#[test]
fn test_presets() {
    let basic = PhoneBuilder::basic().build();
    assert_eq!(basic.cpu(), Some("Mediatek"));
    assert_eq!(basic.ram(), Some("4 GB"));
    assert_eq!(basic.camera(), Some("8 MP"));
    assert_eq!(basic.storage(), Some("16 GB"));

    let advanced = PhoneBuilder::advanced().build();
    assert_eq!(advanced.cpu(), Some("A18"));
    assert_eq!(advanced.ram(), Some("8 GB"));
    assert_eq!(advanced.camera(), Some("48 MP"));
    assert_eq!(advanced.storage(), Some("256 GB"));
}

/// The rendered configuration lists every slot, placeholders included.
#[test]
fn test_phone_display() {
    let phone = PhoneBuilder::new().set_cpu("A18").set_storage("256 GB").build();

    let expected = "Phone configuration\n    CPU: A18\n    RAM: RAM - not defined\n    Camera: Camera - not defined\n    Storage: 256 GB\n";
    assert_eq!(phone.to_string(), expected);
}

/// Components serialize as kebab-case names; a phone keeps unset slots as null.
#[test]
fn test_phone_serde_round_trip() {
    let names: Vec<String> = Component::ALL
        .iter()
        .map(|component| serde_json::to_string(component).unwrap())
        .collect();
    assert_eq!(names, vec!["\"cpu\"", "\"ram\"", "\"camera\"", "\"storage\""]);

    let phone = PhoneBuilder::new().set_cpu("A18").set_ram("8 GB").build();
    let json = serde_json::to_string(&phone).unwrap();
    assert_eq!(
        json,
        r#"{"cpu":"A18","ram":"8 GB","camera":null,"storage":null}"#
    );
    assert_eq!(serde_json::from_str::<Phone>(&json).unwrap(), phone);
}
