//! Example: class name helpers on an fOS element
//!
//! Run with `RUST_LOG=fos_classlist=trace` to see attribute rewrites.

use fos_classlist::{ClassListConfig, Element, Strategy};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), fos_classlist::ClassListError> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Host elements below hide their token list, so report that up front
    let strategy = fos_classlist::init(ClassListConfig::new().with_native_token_list(false))?;
    println!("Class list strategy: {:?}", strategy);

    let mut el = Element::new("div").with_class("foo bar");
    if strategy == Strategy::AttributeParsing {
        el = el.without_token_list();
    }

    fos_classlist::add(&mut el, "baz")?;
    fos_classlist::remove(&mut el, "bar")?;
    let now_present = fos_classlist::toggle(&mut el, "foo")?;
    let swapped = fos_classlist::swap(&mut el, "missing", "qux")?;
    fos_classlist::add_remove(&mut el, "baz", "quux")?;

    println!("toggle foo -> {}, swap missing -> {}", now_present, swapped);
    println!("class=\"{}\"", el.get_attribute("class").unwrap_or(""));
    Ok(())
}
