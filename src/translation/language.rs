//! Language codes understood by the translate endpoint.
//!
//! The listing is a reference only. Codes are checked for shape, not
//! membership, so languages the provider adds later keep working.

use anyhow::Result;
use regex::Regex;
use std::sync::LazyLock;

use crate::ui::Style;

/// A language the provider is known to accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

const fn lang(code: &'static str, name: &'static str) -> Language {
    Language { code, name }
}

/// Codes accepted by `translate_a/single`, grouped by first letter.
#[rustfmt::skip]
pub const KNOWN_LANGUAGES: &[Language] = &[
    lang("af", "Afrikaans"), lang("ak", "Twi"), lang("am", "Amharic"),
    lang("ar", "Arabic"), lang("as", "Assamese"), lang("ay", "Aymara"),
    lang("az", "Azerbaijani"),
    lang("be", "Belarusian"), lang("bg", "Bulgarian"), lang("bho", "Bhojpuri"),
    lang("bm", "Bambara"), lang("bn", "Bengali"), lang("bs", "Bosnian"),
    lang("ca", "Catalan"), lang("ceb", "Cebuano"), lang("ckb", "Kurdish (Sorani)"),
    lang("co", "Corsican"), lang("cs", "Czech"), lang("cy", "Welsh"),
    lang("da", "Danish"), lang("de", "German"), lang("doi", "Dogri"),
    lang("dv", "Dhivehi"),
    lang("ee", "Ewe"), lang("el", "Greek"), lang("en", "English"),
    lang("eo", "Esperanto"), lang("es", "Spanish"), lang("et", "Estonian"),
    lang("eu", "Basque"),
    lang("fa", "Persian"), lang("fi", "Finnish"), lang("fr", "French"),
    lang("fy", "Frisian"),
    lang("ga", "Irish"), lang("gd", "Scots Gaelic"), lang("gl", "Galician"),
    lang("gn", "Guarani"), lang("gom", "Konkani"), lang("gu", "Gujarati"),
    lang("ha", "Hausa"), lang("haw", "Hawaiian"), lang("he", "Hebrew"),
    lang("hi", "Hindi"), lang("hmn", "Hmong"), lang("hr", "Croatian"),
    lang("ht", "Haitian Creole"), lang("hu", "Hungarian"), lang("hy", "Armenian"),
    lang("id", "Indonesian"), lang("ig", "Igbo"), lang("ilo", "Ilocano"),
    lang("is", "Icelandic"), lang("it", "Italian"),
    lang("ja", "Japanese"), lang("jv", "Javanese"),
    lang("ka", "Georgian"), lang("kk", "Kazakh"), lang("km", "Khmer"),
    lang("kn", "Kannada"), lang("ko", "Korean"), lang("kri", "Krio"),
    lang("ku", "Kurdish (Kurmanji)"), lang("ky", "Kyrgyz"),
    lang("la", "Latin"), lang("lb", "Luxembourgish"), lang("lg", "Luganda"),
    lang("ln", "Lingala"), lang("lo", "Lao"), lang("lt", "Lithuanian"),
    lang("lus", "Mizo"), lang("lv", "Latvian"),
    lang("mai", "Maithili"), lang("mg", "Malagasy"), lang("mi", "Maori"),
    lang("mk", "Macedonian"), lang("ml", "Malayalam"), lang("mn", "Mongolian"),
    lang("mni-Mtei", "Meiteilon (Manipuri)"), lang("mr", "Marathi"),
    lang("ms", "Malay"), lang("mt", "Maltese"), lang("my", "Myanmar (Burmese)"),
    lang("ne", "Nepali"), lang("nl", "Dutch"), lang("no", "Norwegian"),
    lang("nso", "Sepedi"), lang("ny", "Chichewa"),
    lang("om", "Oromo"), lang("or", "Odia (Oriya)"),
    lang("pa", "Punjabi"), lang("pl", "Polish"), lang("ps", "Pashto"),
    lang("pt", "Portuguese"),
    lang("qu", "Quechua"),
    lang("ro", "Romanian"), lang("ru", "Russian"), lang("rw", "Kinyarwanda"),
    lang("sa", "Sanskrit"), lang("sd", "Sindhi"), lang("si", "Sinhala"),
    lang("sk", "Slovak"), lang("sl", "Slovenian"), lang("sm", "Samoan"),
    lang("sn", "Shona"), lang("so", "Somali"), lang("sq", "Albanian"),
    lang("sr", "Serbian"), lang("st", "Sesotho"), lang("su", "Sundanese"),
    lang("sv", "Swedish"), lang("sw", "Swahili"),
    lang("ta", "Tamil"), lang("te", "Telugu"), lang("tg", "Tajik"),
    lang("th", "Thai"), lang("ti", "Tigrinya"), lang("tk", "Turkmen"),
    lang("tl", "Filipino (Tagalog)"), lang("tr", "Turkish"), lang("ts", "Tsonga"),
    lang("tt", "Tatar"),
    lang("ug", "Uyghur"), lang("uk", "Ukrainian"), lang("ur", "Urdu"),
    lang("uz", "Uzbek"),
    lang("vi", "Vietnamese"),
    lang("xh", "Xhosa"),
    lang("yi", "Yiddish"), lang("yo", "Yoruba"),
    lang("zh-CN", "Chinese (Simplified)"), lang("zh-TW", "Chinese (Traditional)"),
    lang("zu", "Zulu"),
];

/// Pseudo source language asking the provider to detect the language.
pub const AUTO_DETECT: &str = "auto";

#[allow(clippy::expect_used)]
static CODE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    // expect is safe: the pattern is a literal
    Regex::new(r"^[a-z]{2,3}(-[A-Za-z]{2,4})?$").expect("language code pattern compiles")
});

/// Prints the known language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Known language codes"));
    for language in KNOWN_LANGUAGES {
        println!(
            "  {:8} {}",
            Style::code(language.code),
            Style::secondary(language.name)
        );
    }
    println!(
        "\n  {:8} {}",
        Style::code(AUTO_DETECT),
        Style::secondary("Detect the source language (--from only)")
    );
    println!(
        "\n{}",
        Style::secondary("Other codes of the same shape are passed to the provider as-is.")
    );
}

pub fn is_known(code: &str) -> bool {
    KNOWN_LANGUAGES.iter().any(|language| language.code == code)
}

/// Checks that `lang` looks like a language code (`de`, `haw`, `zh-CN`).
///
/// # Errors
///
/// Returns an error if the code is empty or malformed.
pub fn validate_language(lang: &str) -> Result<()> {
    if !CODE_SHAPE.is_match(lang) {
        anyhow::bail!(
            "Invalid language code: '{lang}'\n\n\
             Expected a code such as en, ru, haw or zh-CN.\n\
             Run 'docs-tl languages' to see known codes."
        );
    }

    if !is_known(lang) {
        log::debug!("Language code '{lang}' is not in the known list; passing it through");
    }

    Ok(())
}

/// Like [`validate_language`], but also accepts `auto`.
pub fn validate_source_language(lang: &str) -> Result<()> {
    if lang == AUTO_DETECT {
        return Ok(());
    }
    validate_language(lang)
}
