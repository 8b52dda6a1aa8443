use creational_recipe::boundary::{Entry, FixedChoice, Tone, Transcript};
use creational_recipe::error::SelectionError;
use creational_recipe::factory_method::{
    choose_restaurant, order_with, select_restaurant, BeanRestaurant, BeefHamburger,
    BurgerKind, ChickenRestaurant, Restaurant,
};

/// Each key dispatches to exactly the variant bound to it, and to nothing else.
#[test]
fn test_dispatch_prepares_only_the_bound_variant() {
    let cases = [
        ("chicken", BurgerKind::Chicken, "Preparing CHICKEN hamburger"),
        ("beef", BurgerKind::Beef, "Preparing BEEF hamburger"),
        ("bean", BurgerKind::Bean, "Preparing BEAN hamburger"),
    ];

    for (key, kind, expected) in cases {
        let restaurant = select_restaurant(Some(key)).expect("known key must select");

        // The creation step hands out the bound variant
        assert_eq!(restaurant.create_hamburger().kind(), kind);

        let mut transcript = Transcript::new();
        restaurant.order_hamburger(&mut transcript);

        assert_eq!(
            transcript.entries(),
            &[Entry::Line {
                text: expected.to_string(),
                tone: Tone::Plain,
            }],
            "key {key} triggered unexpected output"
        );
    }
}

/// The "beef" example: output names BEEF and no other variant.
#[test]
fn test_beef_scenario() {
    let mut transcript = Transcript::new();
    select_restaurant(Some("beef"))
        .unwrap()
        .order_hamburger(&mut transcript);

    let lines = transcript.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("BEEF"));
    assert!(!lines[0].contains("CHICKEN"));
    assert!(!lines[0].contains("BEAN"));
}

/// Unknown keys fail with UnknownSelection and name the rejected key.
#[test]
fn test_unknown_key_is_rejected() {
    for key in ["tofu", "Beef", "", "chicken beef"] {
        let err = select_restaurant(Some(key)).err().expect("must fail");
        assert_eq!(
            err,
            SelectionError::UnknownSelection {
                key: Some(key.to_string()),
                expected: BurgerKind::KEYS,
            }
        );
        assert_eq!(err.key(), Some(key));
    }

    let err = select_restaurant(Some("tofu")).err().unwrap();
    assert_eq!(
        err.to_string(),
        "unknown selection \"tofu\" (expected one of: chicken, beef, bean)"
    );
}

/// A missing key is treated exactly like an unknown one.
#[test]
fn test_absent_key_is_rejected() {
    let err = select_restaurant(None).err().expect("must fail");
    assert!(matches!(err, SelectionError::UnknownSelection { key: None, .. }));
    assert_eq!(
        err.to_string(),
        "unknown selection <none> (expected one of: chicken, beef, bean)"
    );
}

/// Choosing through a provider: unknown input constructs nothing and reports nothing.
#[test]
fn test_choose_restaurant_from_provider() {
    let mut transcript = Transcript::new();

    let restaurant = choose_restaurant(&mut FixedChoice::new("bean")).unwrap();
    restaurant.order_hamburger(&mut transcript);
    assert_eq!(transcript.lines(), vec!["Preparing BEAN hamburger"]);

    let result = choose_restaurant(&mut FixedChoice::new("tofu"));
    assert!(matches!(result, Err(SelectionError::UnknownSelection { .. })));

    let result = choose_restaurant(&mut FixedChoice::none());
    assert!(matches!(
        result,
        Err(SelectionError::UnknownSelection { key: None, .. })
    ));
}

/// Surrounding whitespace from a terminal line is tolerated.
#[test]
fn test_key_is_trimmed() {
    assert_eq!(" chicken\n".parse::<BurgerKind>(), Ok(BurgerKind::Chicken));
}

/// Every kind parses back from its own key.
#[test]
fn test_kind_keys_round_trip() {
    assert_eq!(BurgerKind::KEYS.len(), BurgerKind::ALL.len());
    for kind in BurgerKind::ALL {
        assert_eq!(kind.to_string().parse::<BurgerKind>(), Ok(kind));
        assert_eq!(kind.restaurant().create_hamburger().kind(), kind);
    }
}

/// Concrete creators are usable directly and through trait objects alike.
#[test]
fn test_creators_through_trait_objects() {
    let restaurants: Vec<Box<dyn Restaurant>> =
        vec![Box::new(ChickenRestaurant), Box::new(BeanRestaurant)];

    let mut transcript = Transcript::new();
    for restaurant in &restaurants {
        restaurant.order_hamburger(&mut transcript);
    }
    assert_eq!(
        transcript.lines(),
        vec!["Preparing CHICKEN hamburger", "Preparing BEAN hamburger"]
    );
}

/// The closure form runs the same ordering algorithm.
#[test]
fn test_order_with_closure() {
    let mut transcript = Transcript::new();
    let mut created = 0;
    order_with(
        || {
            created += 1;
            Box::new(BeefHamburger)
        },
        &mut transcript,
    );

    assert_eq!(created, 1);
    assert_eq!(transcript.lines(), vec!["Preparing BEEF hamburger"]);
}

/// Independent orders can run on separate threads without coordination.
#[test]
fn test_parallel_orders() {
    let transcripts: Vec<Transcript> = std::thread::scope(|scope| {
        let handles: Vec<_> = BurgerKind::ALL
            .into_iter()
            .map(|kind| {
                scope.spawn(move || {
                    let mut transcript = Transcript::new();
                    kind.restaurant().order_hamburger(&mut transcript);
                    transcript
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    for (kind, transcript) in BurgerKind::ALL.into_iter().zip(&transcripts) {
        assert_eq!(
            transcript.lines(),
            vec![format!("Preparing {} hamburger", kind.shout()).as_str()]
        );
    }
}

/// Serialized kinds use the same kebab-case keys the selector accepts.
#[test]
fn test_kind_serde_uses_selection_keys() {
    for kind in BurgerKind::ALL {
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, format!("\"{}\"", kind.key()));
        assert_eq!(serde_json::from_str::<BurgerKind>(&json).unwrap(), kind);
    }
    assert!(serde_json::from_str::<BurgerKind>("\"tofu\"").is_err());
}
