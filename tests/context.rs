use std::sync::Arc;

use locale_kit::{
    context, LocaleCollection, LocaleDictionary, LocaleError, LocaleResolver, MemoryNavigator,
};

#[test]
fn test_use_locale_before_provide() {
    let err = context::use_locale().unwrap_err();
    assert!(matches!(err, LocaleError::NotInitialized));
    assert_eq!(
        err.to_string(),
        "resolver used without being initialized, call `context::provide` first"
    );
    assert!(context::t("greeting", None).is_err());

    let dictionaries = LocaleCollection::new(vec![LocaleDictionary::from_entries(
        "en",
        [("greeting", "Hello $$$")],
    )]);
    context::provide(LocaleResolver::new(
        dictionaries,
        Arc::new(MemoryNavigator::default()),
    ));
    assert_eq!(context::t("greeting", Some("Bo")).unwrap(), "Hello Bo");
    assert_eq!(context::use_locale().unwrap().available_locales(), vec!["en"]);
}
