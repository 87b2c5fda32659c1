//! Property tests for fieldwise list operations

use fieldwise::{compare_slice, filter_slice_with, reflect_record, FilterMode, TagParsers, Transformer};
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq, Default)]
struct Item {
    name: String,
    qty: i32,
}

#[derive(Debug, Clone, PartialEq, Default)]
struct ItemDto {
    name: String,
    qty: i32,
}

#[derive(Debug, Clone, PartialEq, Default)]
struct Basket {
    owner: String,
    items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Default)]
struct BasketDto {
    owner: String,
    items: Vec<ItemDto>,
}

reflect_record!(Item { name, qty });
reflect_record!(ItemDto { name, qty });
reflect_record!(Basket { owner, items });
reflect_record!(BasketDto { owner, items });

fn item_strategy() -> impl Strategy<Value = Item> {
    ("[a-c]{1,2}", 0i32..4).prop_map(|(name, qty)| Item { name, qty })
}

fn items_strategy() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(item_strategy(), 0..8)
}

proptest! {
    #[test]
    fn prop_compare_is_symmetric(a in items_strategy(), b in items_strategy()) {
        let forward = compare_slice(&a, &b).unwrap();
        let backward = compare_slice(&b, &a).unwrap();

        prop_assert_eq!(forward.added_as::<Item>(), backward.removed_as::<Item>());
        prop_assert_eq!(forward.removed_as::<Item>(), backward.added_as::<Item>());
    }

    #[test]
    fn prop_compare_with_self_is_empty(a in items_strategy()) {
        prop_assert!(compare_slice(&a, &a).unwrap().is_empty());
    }

    #[test]
    fn prop_compare_added_are_absent_from_old(a in items_strategy(), b in items_strategy()) {
        let diff = compare_slice(&a, &b).unwrap();

        for item in diff.added_as::<Item>() {
            prop_assert!(a.contains(&item));
            prop_assert!(!b.contains(&item));
        }
    }

    #[test]
    fn prop_filter_modes_partition(items in items_strategy(), want in 0i32..4) {
        let mut removed = items.clone();
        let mut retained = items.clone();

        filter_slice_with(&mut removed, "qty", &want, FilterMode::RemoveMatches);
        filter_slice_with(&mut retained, "qty", &want, FilterMode::RetainMatches);

        prop_assert_eq!(removed.len() + retained.len(), items.len());
        prop_assert!(removed.iter().all(|item| item.qty != want));
        prop_assert!(retained.iter().all(|item| item.qty == want));

        let expected: Vec<Item> = items.iter().filter(|item| item.qty != want).cloned().collect();
        prop_assert_eq!(removed, expected);
    }

    #[test]
    fn prop_transform_is_idempotent(owner in "[a-z]{0,6}", items in items_strategy()) {
        let parsers = TagParsers::new();
        let transformer = Transformer::new(&parsers);
        let basket = Basket { owner, items };

        let mut once = BasketDto::default();
        transformer.transform(&basket, &mut once).unwrap();
        let mut twice = once.clone();
        transformer.transform(&basket, &mut twice).unwrap();

        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once.items.len(), basket.items.len());
    }
}
