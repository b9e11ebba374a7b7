use maybe_lite::Maybe;

#[test]
fn display() {
    assert_eq!(Maybe::some(5).to_string(), "[5]");
    assert_eq!(Maybe::<i32>::some_null().to_string(), "[null]");
    assert_eq!(Maybe::<i32>::none().to_string(), "[]");
    assert_eq!(Maybe::some("hi").to_string(), "[hi]");
}

#[test]
fn none_equals_only_none() {
    assert_eq!(Maybe::<i32>::none(), Maybe::none());
    assert_ne!(Maybe::<i32>::none(), Maybe::some(0));
    assert_ne!(Maybe::<i32>::none(), Maybe::some_null());
    assert_ne!(Maybe::<i32>::some_null(), Maybe::none());
}

#[test]
fn some_equality_by_payload() {
    let a = Maybe::some(String::from("abc"));
    let b = Maybe::some(String::from("abc"));
    assert_eq!(a, a.clone());
    assert_eq!(a, b);
    assert_eq!(b, a);
    assert_ne!(a, Maybe::some(String::from("abd")));
}

#[test]
fn null_payload_equals_only_null_payload() {
    assert_eq!(Maybe::<u8>::some_null(), Maybe::some_nullable(None));
    assert_ne!(Maybe::<u8>::some_null(), Maybe::some(0));
    assert_ne!(Maybe::some(0u8), Maybe::some_null());
}

#[test]
fn hash_agrees_with_eq() {
    use std::collections::HashSet;

    let set: HashSet<Maybe<u8>> = [Maybe::some(1), Maybe::some(1), Maybe::some_null(), Maybe::none()]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 3);
}
