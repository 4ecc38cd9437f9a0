//! Display metadata for common locale codes.

use serde::Serialize;

/// Display metadata of a locale: its language, the countries it is
/// spoken in and a flag glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocaleCatalogEntry {
    pub code: &'static str,
    pub language: &'static str,
    pub countries: &'static [&'static str],
    pub flag: &'static str,
}

const fn entry(
    code: &'static str,
    language: &'static str,
    countries: &'static [&'static str],
    flag: &'static str,
) -> LocaleCatalogEntry {
    LocaleCatalogEntry {
        code,
        language,
        countries,
        flag,
    }
}

static LOCALE_CATALOG: [LocaleCatalogEntry; 50] = [
    entry("en_US", "English", &["United States"], "🇺🇸"),
    entry("en_GB", "English", &["United Kingdom"], "🇬🇧"),
    entry("en_AU", "English", &["Australia"], "🇦🇺"),
    entry("en_CA", "English", &["Canada"], "🇨🇦"),
    entry("fr_FR", "French", &["France", "Monaco"], "🇫🇷"),
    entry("fr_CA", "French", &["Canada"], "🇨🇦"),
    entry("fr_BE", "French", &["Belgium"], "🇧🇪"),
    entry("de_DE", "German", &["Germany"], "🇩🇪"),
    entry("de_AT", "German", &["Austria"], "🇦🇹"),
    entry("de_CH", "German", &["Switzerland", "Liechtenstein"], "🇨🇭"),
    entry("es_ES", "Spanish", &["Spain"], "🇪🇸"),
    entry("es_MX", "Spanish", &["Mexico"], "🇲🇽"),
    entry("es_AR", "Spanish", &["Argentina"], "🇦🇷"),
    entry("it_IT", "Italian", &["Italy", "San Marino", "Vatican City"], "🇮🇹"),
    entry("pt_PT", "Portuguese", &["Portugal"], "🇵🇹"),
    entry("pt_BR", "Portuguese", &["Brazil"], "🇧🇷"),
    entry("nl_NL", "Dutch", &["Netherlands"], "🇳🇱"),
    entry("nl_BE", "Dutch", &["Belgium"], "🇧🇪"),
    entry("sv_SE", "Swedish", &["Sweden"], "🇸🇪"),
    entry("nb_NO", "Norwegian", &["Norway"], "🇳🇴"),
    entry("da_DK", "Danish", &["Denmark"], "🇩🇰"),
    entry("fi_FI", "Finnish", &["Finland"], "🇫🇮"),
    entry("is_IS", "Icelandic", &["Iceland"], "🇮🇸"),
    entry("pl_PL", "Polish", &["Poland"], "🇵🇱"),
    entry("cs_CZ", "Czech", &["Czech Republic"], "🇨🇿"),
    entry("sk_SK", "Slovak", &["Slovakia"], "🇸🇰"),
    entry("hu_HU", "Hungarian", &["Hungary"], "🇭🇺"),
    entry("ro_RO", "Romanian", &["Romania", "Moldova"], "🇷🇴"),
    entry("bg_BG", "Bulgarian", &["Bulgaria"], "🇧🇬"),
    entry("el_GR", "Greek", &["Greece", "Cyprus"], "🇬🇷"),
    entry("tr_TR", "Turkish", &["Turkey"], "🇹🇷"),
    entry("ru_RU", "Russian", &["Russia", "Belarus", "Kazakhstan"], "🇷🇺"),
    entry("uk_UA", "Ukrainian", &["Ukraine"], "🇺🇦"),
    entry("hr_HR", "Croatian", &["Croatia"], "🇭🇷"),
    entry("sr_RS", "Serbian", &["Serbia"], "🇷🇸"),
    entry("sl_SI", "Slovenian", &["Slovenia"], "🇸🇮"),
    entry("et_EE", "Estonian", &["Estonia"], "🇪🇪"),
    entry("lv_LV", "Latvian", &["Latvia"], "🇱🇻"),
    entry("lt_LT", "Lithuanian", &["Lithuania"], "🇱🇹"),
    entry("ar_SA", "Arabic", &["Saudi Arabia"], "🇸🇦"),
    entry("he_IL", "Hebrew", &["Israel"], "🇮🇱"),
    entry("hi_IN", "Hindi", &["India"], "🇮🇳"),
    entry("th_TH", "Thai", &["Thailand"], "🇹🇭"),
    entry("vi_VN", "Vietnamese", &["Vietnam"], "🇻🇳"),
    entry("id_ID", "Indonesian", &["Indonesia"], "🇮🇩"),
    entry("ms_MY", "Malay", &["Malaysia", "Brunei", "Singapore"], "🇲🇾"),
    entry("ja_JP", "Japanese", &["Japan"], "🇯🇵"),
    entry("ko_KR", "Korean", &["South Korea"], "🇰🇷"),
    entry("zh_CN", "Chinese (Simplified)", &["China", "Singapore"], "🇨🇳"),
    entry("zh_TW", "Chinese (Traditional)", &["Taiwan"], "🇹🇼"),
];

/// All catalog entries, in a fixed order.
pub fn all_entries() -> &'static [LocaleCatalogEntry] {
    &LOCALE_CATALOG
}

/// Find the entry of `code`. The match is exact and case-sensitive.
pub fn lookup(code: &str) -> Option<&'static LocaleCatalogEntry> {
    LOCALE_CATALOG.iter().find(|entry| entry.code == code)
}

pub fn language_name(code: &str) -> Option<&'static str> {
    lookup(code).map(|entry| entry.language)
}
