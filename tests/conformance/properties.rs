//! Generated-input properties over the public container surface

use kollect::{Error, TypedContainer, Value};
use proptest::prelude::*;

fn int_or_text() -> impl Strategy<Value = Value> {
    prop_oneof![
        3 => any::<i64>().prop_map(Value::Int),
        1 => "[a-z]{0,4}".prop_map(Value::String),
    ]
}

proptest! {
    #[test]
    fn add_all_keeps_exactly_the_prefix_before_the_first_bad_item(
        items in prop::collection::vec(int_or_text(), 0..30)
    ) {
        let mut container = TypedContainer::integers();
        let result = container.add_all(items.clone()).map(|_| ());

        let prefix = items.iter().take_while(|v| v.as_int().is_some()).count();
        prop_assert_eq!(result.is_err(), prefix < items.len());
        prop_assert_eq!(container.values(), items[..prefix].to_vec());
    }

    #[test]
    fn chain_with_other_constraint_leaves_receiver_unchanged(
        values in prop::collection::vec(any::<i64>(), 0..20),
        words in prop::collection::vec("[a-z]{1,4}", 0..20),
    ) {
        let mut ints = TypedContainer::integers();
        ints.add_all(values.iter().copied()).unwrap();
        let before = ints.clone();
        let mut strings = TypedContainer::strings();
        strings.add_all(words).unwrap();

        let err = ints.chain(&strings).unwrap_err();
        prop_assert!(err.is_invalid_type());
        prop_assert_eq!(ints, before);
    }

    #[test]
    fn explicit_writes_never_panic(position in any::<usize>(), tail in 0usize..3) {
        let mut ints = TypedContainer::integers();
        let start = position.saturating_sub(tail);
        ints.set(Some(start), 0).unwrap();

        let room = usize::MAX - start;
        for n in 1..=4usize {
            match ints.add(1) {
                Ok(()) => prop_assert!(n <= room),
                Err(err) => {
                    prop_assert!(n > room);
                    prop_assert!(matches!(err, Error::InvalidArgument(_)));
                }
            }
        }
        prop_assert_eq!(ints.count(), 1 + room.min(4));
    }
}
