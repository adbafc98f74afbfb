use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::CliTest;

const CATALOGS_WITHOUT_HELLO: &[(&str, &str)] = &[
    ("lang/de_de.json", r#"{"Bye": "Tschüss"}"#),
    ("lang/fr_fr.json", r#"{"Bye": "Au revoir"}"#),
    ("lang/it_it.json", r#"{"Bye": "Ciao"}"#),
];

fn project(sources: &[(&str, &str)], catalogs: &[(&str, &str)]) -> Result<CliTest> {
    let test = CliTest::new()?;
    for (path, content) in sources.iter().chain(catalogs) {
        test.write_file(path, content)?;
    }
    Ok(test)
}

fn json(test: &CliTest, args: &[&str]) -> Result<(Option<i32>, Value)> {
    let mut args = args.to_vec();
    args.push("--json");
    let output = test.run(&args)?;
    Ok((output.code, serde_json::from_str(&output.stdout)?))
}

#[test]
fn test_in_sync() -> Result<()> {
    let test = project(
        &[
            ("index.html", r#"<span class="ds-i18n">Hello</span>"#),
            ("js/app.js", "alert(l('Bye'));"),
        ],
        &[
            ("lang/de_de.json", r#"{"Hello": "Hallo", "Bye": "Tschüss", ".title": "T"}"#),
            ("lang/fr_fr.json", r#"{"Hello": "Bonjour", "Bye": "Au revoir"}"#),
        ],
    )?;

    let output = test.run(&[])?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stderr, "");
    assert!(output.stdout.contains("No missing translations found"));
    assert!(output.stdout.contains("No unused translations found"));
    assert!(output.stdout.contains("All translations are in sync"));
    assert!(output.stdout.contains("Found 2 keys in translation files"));

    Ok(())
}

#[test]
fn test_missing_from_all_languages() -> Result<()> {
    let test = project(
        &[
            ("index.html", r#"<span class="ds-i18n">Hello</span>"#),
            ("js/app.js", "l('Bye');"),
        ],
        CATALOGS_WITHOUT_HELLO,
    )?;

    let output = test.run(&[])?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains(
        "  - \"Hello\"\n    --> index.html:1:1\n    Missing from: ALL languages (3)\n"
    ));
    assert!(output.stdout.contains("Translation files need updates"));

    let (code, report) = json(&test, &[])?;
    assert_eq!(code, Some(1));
    assert_eq!(
        report["missing_translations"],
        json!([{
            "string": "Hello",
            "missing_from_languages": ["de_de", "fr_fr", "it_it"],
            "locations": [{"file": "index.html", "line": 1, "col": 1}]
        }])
    );

    Ok(())
}

#[test]
fn test_unused_key() -> Result<()> {
    let test = project(
        &[("js/app.js", "l('Hello');")],
        &[("lang/de_de.json", r#"{"Hello": "Hallo", "Obsolete": "Veraltet"}"#)],
    )?;

    let output = test.run(&[])?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("UNUSED TRANSLATIONS (1 string)"));
    assert!(output.stdout.contains("  - \"Obsolete\"\n"));
    assert!(output.stdout.contains("No missing translations found"));

    Ok(())
}

#[test]
fn test_whitelisted_string_missing_from_one_language() -> Result<()> {
    let test = project(
        &[
            (".catalintrc.json", r#"{"whitelist": ["Start"]}"#),
            ("js/app.js", "button.text(l('Start'));"),
        ],
        &[
            ("lang/a.json", r#"{"Start": "Start"}"#),
            ("lang/b.json", r#"{}"#),
        ],
    )?;

    let (code, report) = json(&test, &[])?;

    assert_eq!(code, Some(1));
    assert_eq!(
        report["missing_translations"][0]["missing_from_languages"],
        json!(["b"])
    );
    assert_eq!(report["unused_translations"], json!([]));
    assert_eq!(report["whitelisted_strings"], json!(["Start"]));

    let output = test.run(&[])?;
    assert!(output.stdout.contains("    Missing from: b\n"));

    Ok(())
}

#[test]
fn test_excluded_selector_is_never_missing() -> Result<()> {
    let test = project(
        &[("js/app.js", "$(l('.hide')).toggle();\nl('Hello');")],
        &[("lang/de_de.json", r#"{"Hello": "Hallo"}"#)],
    )?;

    let output = test.run(&[])?;

    assert_eq!(output.code, Some(0));
    assert!(
        output
            .stdout
            .contains("Excluded 1 non-translatable string (CSS selectors, etc.)\n")
    );
    assert!(!output.stdout.contains("  - \".hide\""));

    let verbose = test.run(&["--verbose"])?;
    assert_eq!(verbose.code, Some(0));
    assert!(verbose.stdout.contains("  - \".hide\"\n"));

    let (_, report) = json(&test, &[])?;
    assert_eq!(report["excluded_strings"], json!([".hide"]));
    assert_eq!(report["summary"]["excluded_count"], json!(1));

    Ok(())
}

#[test]
fn test_commented_markup_is_ignored() -> Result<()> {
    let test = project(
        &[(
            "index.html",
            "<div>\n  <!-- <span class=\"ds-i18n\">Ghost</span> -->\n  <p class=\"ds-i18n\">Live</p>\n</div>",
        )],
        &[("lang/de_de.json", r#"{"Live": "Lebendig"}"#)],
    )?;

    let (code, report) = json(&test, &[])?;

    assert_eq!(code, Some(0));
    assert_eq!(report["summary"]["total_strings_used"], json!(1));
    assert_eq!(report["missing_translations"], json!([]));

    Ok(())
}

#[test]
fn test_json_summary() -> Result<()> {
    let test = project(
        &[
            ("index.html", "<h1 class=\"ds-i18n\">Title</h1>"),
            ("templates/dialog.html", "<b class=\"ds-i18n\">Hello</b>"),
            (
                "js/ui/panel.js",
                "// l('Commented')\nconst html = `<span class=\"ds-i18n\">${l('Hello')} there</span>`;\nl('#main');",
            ),
        ],
        &[
            ("lang/de_de.json", r#"{".authorMsg": "x", "Title": "Titel", "Unused": "?"}"#),
            ("lang/en_us.json", r#"{"Title": "Title", "Hello": "Hello"}"#),
        ],
    )?;

    let (code, report) = json(&test, &[])?;

    assert_eq!(code, Some(1));
    assert_eq!(
        report,
        json!({
            "summary": {
                "total_strings_used": 2,
                "total_translation_keys": 3,
                "total_languages": 2,
                "missing_count": 1,
                "unused_count": 1,
                "excluded_count": 1,
                "whitelisted_count": 0
            },
            "missing_translations": [{
                "string": "Hello",
                "missing_from_languages": ["de_de"],
                "locations": [
                    {"file": "templates/dialog.html", "line": 1, "col": 1},
                    {"file": "js/ui/panel.js", "line": 2, "col": 39},
                    {"file": "js/ui/panel.js", "line": 2, "col": 37}
                ]
            }],
            "unused_translations": ["Unused"],
            "excluded_strings": ["#main"],
            "whitelisted_strings": []
        })
    );

    Ok(())
}

#[test]
fn test_json_ignores_compact() -> Result<()> {
    let test = project(
        &[("js/app.js", "l('Hello');\nl('Hello');")],
        CATALOGS_WITHOUT_HELLO,
    )?;

    let (_, full) = json(&test, &[])?;
    let (_, compact) = json(&test, &["--compact", "-v"])?;

    assert_eq!(full, compact);
    assert_eq!(
        full["missing_translations"][0]["locations"],
        json!([
            {"file": "js/app.js", "line": 1, "col": 1},
            {"file": "js/app.js", "line": 2, "col": 1}
        ])
    );

    Ok(())
}

#[test]
fn test_compact_text_report() -> Result<()> {
    let test = project(
        &[("js/app.js", "l('Hello');\nl('Hello');")],
        CATALOGS_WITHOUT_HELLO,
    )?;

    let full = test.run(&[])?;
    let compact = test.run(&["--compact"])?;

    assert!(full.stdout.contains("    (and 1 more location)\n"));
    assert!(compact.stdout.contains("  - \"Hello\"\n"));
    assert!(!compact.stdout.contains("-->"));
    assert!(!compact.stdout.contains("Missing from:"));
    assert_eq!(compact.code, Some(1));

    Ok(())
}

#[test]
fn test_malformed_catalog_is_skipped() -> Result<()> {
    let test = project(
        &[("index.html", r#"<span class="ds-i18n">Hello</span>"#)],
        &[
            ("lang/de_de.json", r#"{"Hello": "Hallo"}"#),
            ("lang/es_es.json", r#"{"Hello": "Hola",}"#),
        ],
    )?;

    let output = test.run(&["--json"])?;

    assert_eq!(output.code, Some(0));
    assert!(
        output
            .stderr
            .starts_with("warning: lang/es_es.json: Failed to load catalog: ")
    );
    let report: Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(report["summary"]["total_languages"], json!(1));

    Ok(())
}

#[test]
fn test_no_catalogs() -> Result<()> {
    let test = project(&[("js/app.js", "l('Hello');")], &[])?;

    let output = test.run(&[])?;

    assert_eq!(output.code, Some(1));
    assert_eq!(output.stderr, "warning: No translation catalogs found in lang\n");
    assert!(output.stdout.contains("Missing from: ALL languages (0)"));
    assert!(output.stdout.contains("Found 0 language files"));

    Ok(())
}

#[test]
fn test_empty_project() -> Result<()> {
    let test = CliTest::with_files(&[("lang/en.json", "{}")])?;

    let output = test.run(&[])?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Found 0 HTML files"));
    assert!(output.stdout.contains("Found 0 JavaScript files"));
    assert!(output.stdout.contains("All translations are in sync"));

    Ok(())
}
