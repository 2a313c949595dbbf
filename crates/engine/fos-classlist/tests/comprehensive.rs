//! Comprehensive tests for fos-classlist
//!
//! Every behaviour is checked against both strategies.

use fos_classlist::{ClassElement, ClassTokenOps, ClassTokens, Element, Strategy};

const STRATEGIES: [Strategy; 2] = [Strategy::NativeTokenList, Strategy::AttributeParsing];

fn class_of(el: &Element) -> &str {
    el.get_attribute("class").unwrap_or("")
}

#[test]
fn test_walkthrough() {
    for strategy in STRATEGIES {
        let classes = ClassTokens::with_strategy(strategy);
        let mut el = Element::new("div").with_class("foo bar");

        classes.add(&mut el, "baz").unwrap();
        assert_eq!(class_of(&el), "foo bar baz", "{:?}", strategy);

        classes.remove(&mut el, "bar").unwrap();
        assert_eq!(class_of(&el), "foo baz", "{:?}", strategy);

        assert!(!classes.toggle(&mut el, "foo").unwrap());
        assert_eq!(class_of(&el), "baz", "{:?}", strategy);

        assert!(!classes.swap(&mut el, "missing", "qux").unwrap());
        assert_eq!(class_of(&el), "baz", "{:?}", strategy);

        classes.add_remove(&mut el, "baz", "quux").unwrap();
        assert_eq!(class_of(&el), "quux", "{:?}", strategy);
    }
}

#[test]
fn test_add_to_empty_class() {
    for strategy in STRATEGIES {
        let classes = ClassTokens::with_strategy(strategy);
        let mut el = Element::new("div").with_class("");

        classes.add(&mut el, "a").unwrap();
        assert_eq!(class_of(&el), "a", "{:?}", strategy);
    }
}

#[test]
fn test_add_new_token_once() {
    for strategy in STRATEGIES {
        let classes = ClassTokens::with_strategy(strategy);
        let mut el = Element::new("div").with_class("x y");

        classes.add(&mut el, "z").unwrap();
        assert!(classes.contains(&el, "z").unwrap());
        let tokens = classes.tokens(&el).unwrap();
        assert_eq!(tokens.iter().filter(|t| *t == "z").count(), 1);
        assert_eq!(tokens.len(), 3);
    }
}

#[test]
fn test_add_is_idempotent() {
    for strategy in STRATEGIES {
        let classes = ClassTokens::with_strategy(strategy);
        let mut once = Element::new("div").with_class("a b");
        let mut twice = once.clone();

        classes.add(&mut once, "c").unwrap();
        classes.add(&mut twice, "c").unwrap();
        classes.add(&mut twice, "c").unwrap();

        assert_eq!(class_of(&once), class_of(&twice), "{:?}", strategy);
    }
}

#[test]
fn test_remove_absent_leaves_attribute() {
    for strategy in STRATEGIES {
        let classes = ClassTokens::with_strategy(strategy);
        let mut el = Element::new("div").with_class("  a   b ");

        classes.remove(&mut el, "c").unwrap();
        assert_eq!(class_of(&el), "  a   b ", "{:?}", strategy);
    }
}

#[test]
fn test_toggle_twice_restores() {
    for strategy in STRATEGIES {
        let classes = ClassTokens::with_strategy(strategy);
        let mut el = Element::new("div").with_class("a b");

        assert!(classes.toggle(&mut el, "c").unwrap());
        assert!(!classes.toggle(&mut el, "c").unwrap());
        assert_eq!(class_of(&el), "a b", "{:?}", strategy);

        assert!(!classes.toggle(&mut el, "a").unwrap());
        assert!(classes.toggle(&mut el, "a").unwrap());
        assert!(classes.contains(&el, "a").unwrap());
    }
}

#[test]
fn test_swap_requires_source() {
    for strategy in STRATEGIES {
        let classes = ClassTokens::with_strategy(strategy);
        let mut el = Element::new("div").with_class("on target");

        assert!(!classes.swap(&mut el, "off", "target").unwrap());
        assert_eq!(class_of(&el), "on target", "{:?}", strategy);

        assert!(classes.swap(&mut el, "on", "off").unwrap());
        assert!(!classes.contains(&el, "on").unwrap());
        assert!(classes.contains(&el, "off").unwrap());
    }
}

#[test]
fn test_add_remove_always_adds() {
    for strategy in STRATEGIES {
        let classes = ClassTokens::with_strategy(strategy);

        let mut neither = Element::new("div").with_class("x");
        classes.add_remove(&mut neither, "gone", "new").unwrap();
        assert!(classes.contains(&neither, "new").unwrap());

        let mut both = Element::new("div").with_class("old new");
        classes.add_remove(&mut both, "old", "new").unwrap();
        assert_eq!(class_of(&both), "new", "{:?}", strategy);
    }
}

#[test]
fn test_enable() {
    for strategy in STRATEGIES {
        let classes = ClassTokens::with_strategy(strategy);
        let mut el = Element::new("div");

        classes.enable(&mut el, "open", true).unwrap();
        assert!(classes.contains(&el, "open").unwrap());
        classes.enable(&mut el, "open", false).unwrap();
        assert!(!classes.contains(&el, "open").unwrap());
    }
}

#[test]
fn test_add_all_and_remove_all() {
    for strategy in STRATEGIES {
        let classes = ClassTokens::with_strategy(strategy);
        let mut el = Element::new("div").with_class("a");

        classes.add_all(&mut el, &["b", "a", "c"]).unwrap();
        assert_eq!(class_of(&el), "a b c", "{:?}", strategy);

        classes.remove_all(&mut el, &["a", "c", "zzz"]).unwrap();
        assert_eq!(class_of(&el), "b", "{:?}", strategy);

        classes.enable_all(&mut el, &["x", "y"], true).unwrap();
        assert_eq!(class_of(&el), "b x y", "{:?}", strategy);
        classes.enable_all(&mut el, &["b", "y"], false).unwrap();
        assert_eq!(class_of(&el), "x", "{:?}", strategy);
    }
}

#[test]
fn test_set_is_verbatim() {
    for strategy in STRATEGIES {
        let classes = ClassTokens::with_strategy(strategy);
        let mut el = Element::new("div").with_class("a");

        classes.set(&mut el, "  spaced\tout  ");
        assert_eq!(class_of(&el), "  spaced\tout  ");
        assert_eq!(classes.tokens(&el).unwrap().to_vec(), vec!["spaced", "out"]);
    }
}

#[test]
fn test_native_tokens_are_live() {
    let classes = ClassTokens::with_strategy(Strategy::NativeTokenList);
    let mut el = Element::new("div").with_class("a");

    let list = el.token_list_mut().unwrap();
    list.add(&["b"]).unwrap();
    assert_eq!(class_of(&el), "a b");

    let tokens = classes.tokens(&el).unwrap();
    assert!(tokens.contains("b"));
    assert_eq!(tokens.to_vec(), vec!["a", "b"]);
}

#[test]
fn test_other_attributes_untouched() {
    for strategy in STRATEGIES {
        let classes = ClassTokens::with_strategy(strategy);
        let mut el = Element::new("button").with_class("btn");
        el.set_attribute("type", "submit");

        classes.add(&mut el, "primary").unwrap();
        classes.remove(&mut el, "btn").unwrap();

        assert_eq!(el.get_attribute("type"), Some("submit"));
        assert_eq!(el.attributes().length(), 1);
    }
}
