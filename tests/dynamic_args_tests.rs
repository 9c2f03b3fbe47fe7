use argfmt::{Context, DynamicArgStore, Format, FormatError, arg, vformat};
use pretty_assertions::assert_eq;
use std::fmt::Write;

struct Custom {
    i: i32,
}

impl Format for Custom {
    fn format(&self, ctx: &mut Context<'_, '_>) -> Result<(), FormatError> {
        write!(ctx, "cust={}", self.i)?;
        Ok(())
    }
}

#[test]
fn test_basic() {
    let (a, b, c) = (42, "abc1", 1.5f32);
    let mut store = DynamicArgStore::new();
    store.push(&a);
    store.push(&b);
    store.push(&c);

    assert_eq!(vformat("{} and {} and {}", store.as_args()).unwrap(), "42 and abc1 and 1.5");
}

#[test]
fn test_strings_are_borrowed() {
    let owned = String::from("1234567890");
    let view = argfmt::StringView::from(&owned);
    let mut store = DynamicArgStore::new();
    store.push(&owned);
    store.push(&view);

    assert_eq!(
        vformat("{} and {}", store.as_args()).unwrap(),
        "1234567890 and 1234567890"
    );
}

#[test]
fn test_custom_format() {
    let values = [Custom { i: 0 }, Custom { i: 1 }, Custom { i: 3 }];
    let mut store = DynamicArgStore::new();
    for value in &values {
        store.push(value);
    }

    assert_eq!(
        vformat("{} and {} and {}", store.as_args()).unwrap(),
        "cust=0 and cust=1 and cust=3"
    );
}

#[test]
fn test_named_int() {
    let a1 = arg("a1", &42);
    let mut store = DynamicArgStore::new();
    store.push_named(&a1);

    assert_eq!(vformat("{a1}", store.as_args()).unwrap(), "42");
}

#[test]
fn test_named_strings_and_custom() {
    let text = "1234567890";
    let custom = Custom { i: 3 };
    let a1 = arg("a1", &text);
    let a2 = arg("a2", &custom);
    let mut store = DynamicArgStore::new();
    store.push_named(&a1);
    store.push_named(&a2);

    assert_eq!(
        vformat("{a1} and {a2} and {0}", store.as_args()).unwrap(),
        "1234567890 and cust=3 and 1234567890"
    );
}

#[test]
fn test_growth_past_packed_capacity() {
    let values: Vec<u32> = (0..40).collect();
    let mut store = DynamicArgStore::new();
    store.reserve(values.len());
    for value in &values {
        store.push(value);
    }
    assert_eq!(store.len(), 40);
    assert_eq!(vformat("{39}-{15}", store.as_args()).unwrap(), "39-15");
}

#[test]
fn test_clear_and_reuse() {
    let (a, b) = (1, 2);
    let mut store = DynamicArgStore::new();
    store.push(&a);
    store.clear();
    assert!(store.is_empty());
    store.push(&b);
    assert_eq!(vformat("{}", store.as_args()).unwrap(), "2");
}
