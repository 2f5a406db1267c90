// build.rs

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::Path;

const FALLBACK_LANG: &str = "en";

fn main() {
    let lang = effective_language();
    println!("cargo:rustc-env=PTEROPROMPT_LANG_EFFECTIVE={}", lang);

    println!("cargo:rerun-if-env-changed=PTEROPROMPT_LANG");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=locales/");

    let translations = load_translations(&lang);

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest_path = Path::new(&out_dir).join("translations.rs");
    fs::write(&dest_path, render_macro(&translations)).expect("Failed to write translations.rs");
}

/// Picks the locale: a `lang_*` feature wins, then `PTEROPROMPT_LANG`, then English.
fn effective_language() -> String {
    let mut active_langs: Vec<String> = env::vars()
        .filter_map(|(key, _)| {
            key.strip_prefix("CARGO_FEATURE_LANG_")
                .map(str::to_lowercase)
        })
        .collect();
    active_langs.sort();

    match active_langs.first() {
        Some(first) => {
            if active_langs.len() > 1 {
                println!(
                    "cargo:warning=Multiple language features enabled ({:?}). Using '{}'.",
                    active_langs, first
                );
            }
            first.clone()
        }
        None => env::var("PTEROPROMPT_LANG").unwrap_or_else(|_| FALLBACK_LANG.to_string()),
    }
}

/// Loads the English table and overlays the requested locale on top of it.
fn load_translations(lang: &str) -> BTreeMap<String, String> {
    let fallback_path = format!("locales/{}.toml", FALLBACK_LANG);
    let fallback_content = fs::read_to_string(&fallback_path)
        .unwrap_or_else(|_| panic!("Failed to read fallback language file: {}", fallback_path));
    let mut translations: BTreeMap<String, String> = toml::from_str(&fallback_content)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", fallback_path, e));

    if lang != FALLBACK_LANG {
        let lang_file_path = format!("locales/{}.toml", lang);
        match fs::read_to_string(&lang_file_path) {
            Ok(content) => {
                let specific: BTreeMap<String, String> = toml::from_str(&content)
                    .unwrap_or_else(|e| panic!("Failed to parse {}: {}", lang_file_path, e));
                translations.extend(specific);
            }
            Err(_) => println!(
                "cargo:warning=Language file '{}' not found. Falling back to '{}'.",
                lang_file_path, FALLBACK_LANG
            ),
        }
    }

    translations
}

/// Generates the `t!` macro. Unknown keys become compile errors.
fn render_macro(translations: &BTreeMap<String, String>) -> String {
    let mut macro_code = String::from("#[macro_export]\nmacro_rules! t {\n");
    for (key, value) in translations {
        let escaped_value = value.replace('\\', "\\\\").replace('"', "\\\"");
        macro_code.push_str(&format!("    (\"{}\") => {{ \"{}\" }};\n", key, escaped_value));
    }
    macro_code.push_str(
        "    ($key:expr) => {{ compile_error!(concat!(\"Missing translation key: \", $key)) }};\n",
    );
    macro_code.push('}');
    macro_code
}
