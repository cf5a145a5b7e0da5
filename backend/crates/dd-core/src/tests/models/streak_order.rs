use crate::StreakOrder;

use std::str::FromStr;

#[test]
fn test_streak_order_as_str() {
    assert_eq!(StreakOrder::Chronological.as_str(), "chronological");
    assert_eq!(StreakOrder::Store.as_str(), "store");
}

#[test]
fn test_streak_order_from_str() {
    assert_eq!(
        StreakOrder::from_str("chronological").unwrap(),
        StreakOrder::Chronological
    );
    assert_eq!(StreakOrder::from_str("STORE").unwrap(), StreakOrder::Store);
    assert!(StreakOrder::from_str("random").is_err());
}

#[test]
fn test_streak_order_default() {
    assert_eq!(StreakOrder::default(), StreakOrder::Chronological);
}
