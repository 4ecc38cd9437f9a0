use std::{path::Path, sync::Arc};

use locale_kit::{
    catalog, resolve, Config, LocaleCollection, LocaleDictionary, LocaleResolver, MemoryNavigator,
    Navigator, Route,
};
use test_case::test_case;

fn dictionaries() -> LocaleCollection {
    LocaleCollection::new(vec![
        LocaleDictionary::from_json_str(r#"{"locale": "en", "greeting": "Hello $$$"}"#, None)
            .unwrap(),
        LocaleDictionary::from_json_str(r#"{"locale": "fr", "greeting": "Bonjour $$$"}"#, None)
            .unwrap(),
    ])
}

#[test_case(Some("fr"), "greeting", Some("Alice"), "Bonjour Alice"; "current locale")]
#[test_case(Some("de"), "greeting", Some("Alice"), "Hello Alice"; "fallback locale")]
#[test_case(Some("fr"), "missing", Some("Alice"), "missing"; "raw key")]
#[test_case(Some("fr"), "greeting", None, "Bonjour $$$"; "placeholder kept")]
fn test_resolve(locale: Option<&str>, key: &str, value: Option<&str>, expected: &str) {
    assert_eq!(resolve(key, &dictionaries(), locale, "en", value), expected);
}

#[test]
fn test_bundled_dictionaries() {
    let config = Config::locate(Path::new(env!("CARGO_MANIFEST_DIR"))).unwrap();
    assert_eq!(config.default_locale, "en_US");
    let collection = LocaleCollection::load_dir(&config.dictionaries).unwrap();
    assert_eq!(collection.codes(), vec!["en_US", "fr_FR", "ja_JP"]);
    // Every bundled locale has display metadata.
    assert!(collection
        .codes()
        .into_iter()
        .all(|code| catalog::lookup(code).is_some()));

    let navigator = Arc::new(MemoryNavigator::new("/cart").with_locale("ja_JP"));
    let resolver = LocaleResolver::new(collection, navigator.clone())
        .with_fallback_locale(config.default_locale);
    assert_eq!(resolver.resolve("greeting", Some("Ken")), "こんにちは Ken");
    assert_eq!(resolver.resolve("items-in-cart", Some("3")), "3 items in your cart");
    assert_eq!(resolver.resolve("checkout", None), "checkout");

    resolver.change_locale("fr_FR").unwrap();
    assert_eq!(resolver.resolve("change-locale", None), "Changer de langue");
    assert_eq!(
        navigator.history(),
        vec![Route {
            path: String::from("/cart"),
            locale: Some(String::from("ja_JP")),
        }]
    );
    assert_eq!(navigator.current_path(), "/cart");
}

#[test]
fn test_catalog_for_available_locales() {
    let collection = LocaleCollection::new(vec![
        LocaleDictionary::new("fr_FR"),
        LocaleDictionary::new("pt_BR"),
        LocaleDictionary::new("xx_XX"),
    ]);
    let languages = collection
        .codes()
        .into_iter()
        .map(catalog::language_name)
        .collect::<Vec<_>>();
    assert_eq!(languages, vec![Some("French"), Some("Portuguese"), None]);
}
