use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::CliTest;

#[test]
fn test_custom_layout() -> Result<()> {
    let test = CliTest::with_files(&[
        (
            ".catalintrc.json",
            r#"{
                "templatesDir": "partials",
                "scriptsDir": "assets/scripts",
                "catalogsDir": "locales",
                "markerClass": "i18n",
                "translateFunction": "t"
            }"#,
        ),
        ("index.html", r#"<p class="i18n">Welcome</p>"#),
        ("partials/footer.html", r#"<small class="i18n">Imprint</small>"#),
        ("assets/scripts/main.js", "t('Save'); l('Old helper');"),
        (
            "locales/en.json",
            r#"{"Welcome": "Welcome", "Imprint": "Imprint", "Save": "Save"}"#,
        ),
    ])?;

    let output = test.run(&["--json"])?;

    assert_eq!(output.code, Some(0), "{}", output.stderr);
    let report: Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(report["summary"]["total_strings_used"], json!(3));
    assert_eq!(report["summary"]["total_languages"], json!(1));

    Ok(())
}

#[test]
fn test_special_keys_and_exclusions_are_configurable() -> Result<()> {
    let test = CliTest::with_files(&[
        (
            ".catalintrc.json",
            r#"{
                "specialKeys": ["@meta"],
                "excludePatterns": ["^tmp-"]
            }"#,
        ),
        ("js/app.js", "l('tmp-debug'); l('.hide'); l('Go');"),
        ("lang/en.json", r#"{"@meta": "x", ".title": "Title", "Go": "Go"}"#),
    ])?;

    let output = test.run(&["--json"])?;

    let report: Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(report["excluded_strings"], json!(["tmp-debug"]));
    // Replacing the special keys makes ".title" an ordinary key.
    assert_eq!(report["unused_translations"], json!([".title"]));
    assert_eq!(
        report["missing_translations"][0]["string"],
        json!(".hide")
    );
    assert_eq!(report["summary"]["total_translation_keys"], json!(2));
    assert_eq!(output.code, Some(1));

    Ok(())
}

#[test]
fn test_invalid_translate_function() -> Result<()> {
    let test = CliTest::with_files(&[(".catalintrc.json", r#"{"translateFunction": "my-fn"}"#)])?;

    let output = test.run(&[])?;

    assert_eq!(output.code, Some(2));
    assert_eq!(output.stdout, "");
    insta::assert_snapshot!(
        output.stderr.trim_end(),
        @r#"Error: Invalid 'translateFunction': "my-fn" (expected an identifier such as "l" or "t")"#
    );

    Ok(())
}

#[test]
fn test_malformed_config() -> Result<()> {
    let test = CliTest::with_files(&[(".catalintrc.json", "{ not json")])?;

    let output = test.run(&["--json"])?;

    assert_eq!(output.code, Some(2));
    assert_eq!(output.stdout, "");
    assert!(output.stderr.starts_with("Error: Failed to parse config file"));

    Ok(())
}

#[test]
fn test_invalid_exclude_pattern() -> Result<()> {
    let test = CliTest::with_files(&[(".catalintrc.json", r#"{"excludePatterns": ["(unclosed"]}"#)])?;

    let output = test.run(&[])?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("excludePatterns"));

    Ok(())
}

#[test]
fn test_root_flag() -> Result<()> {
    let test = CliTest::with_files(&[
        ("site/index.html", r#"<span class="ds-i18n">Hello</span>"#),
        ("site/lang/de.json", r#"{"Hello": "Hallo"}"#),
        ("lang/de.json", r#"{"Other": "Andere"}"#),
    ])?;

    let output = test.run(&["--root", "site", "--compact"])?;

    assert_eq!(output.code, Some(0), "{}", output.stdout);
    assert!(output.stdout.contains("Found 1 HTML file\n"));

    let missing = test.run(&["--root", test.root().join("nowhere").to_str().unwrap()])?;
    assert_eq!(missing.code, Some(2));
    assert!(missing.stderr.starts_with("Error: Failed to resolve project root"));

    Ok(())
}

#[test]
fn test_config_in_parent_directory() -> Result<()> {
    let test = CliTest::with_files(&[
        (".catalintrc.json", r#"{"templatesDir": "partials"}"#),
        ("partials/footer.html", r#"<small class="ds-i18n">Imprint</small>"#),
        ("js/app.js", "l('Save');"),
        ("lang/de.json", r#"{"Imprint": "Impressum", "Save": "Speichern"}"#),
        ("site/index.html", r#"<h1 class="ds-i18n">Save</h1>"#),
    ])?;

    let output = test.run(&["--root", "site", "--json"])?;

    assert_eq!(output.code, Some(0), "{}", output.stdout);
    let report: Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(report["summary"]["total_strings_used"], json!(2));
    assert_eq!(report["unused_translations"], json!([]));

    Ok(())
}
