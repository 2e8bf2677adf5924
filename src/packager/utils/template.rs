//! Template rendering against the package configuration.
//!
//! Installer manifests and scripts are plain-text templates rendered with
//! Handlebars. Escaping is disabled (the outputs are XML and shell text
//! whose values the build controls) and strict mode is on, so a template
//! referencing an undefined field fails instead of rendering empty.

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::{Error, Result};

/// Renders `template` against `data`, typically a [`crate::PackageConfig`].
///
/// Conditional sections (`{{#if Darwin.WelcomeMsg}}...{{/if}}`) render only
/// when the referenced field is non-empty; dotted paths reach into nested
/// sub-configurations. Pure function over its inputs.
pub fn render<T: Serialize>(template: &str, data: &T) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars.set_strict_mode(true);

    handlebars
        .register_template_string("template", template)
        .map_err(|e| Error::Template(e.to_string()))?;

    handlebars
        .render("template", data)
        .map_err(|e| Error::Template(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PackageConfig;

    #[test]
    fn substitutes_dotted_paths() {
        let config = PackageConfig {
            name: "Example CLI".into(),
            darwin: crate::config::DarwinOptions {
                min_osx_version: "10.6.0".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        let out = render("{{Name}} needs {{Darwin.MinOSXVersion}}", &config).unwrap();
        assert_eq!(out, "Example CLI needs 10.6.0");
    }

    #[test]
    fn conditional_section_skipped_for_empty_field() {
        let config = PackageConfig::default();
        let out = render("a{{#if Darwin.WelcomeMsg}}welcome{{/if}}b", &config).unwrap();
        assert_eq!(out, "ab");
    }

    #[test]
    fn undefined_field_is_a_template_error() {
        let config = PackageConfig::default();
        let result = render("{{NoSuchField}}", &config);
        assert!(matches!(result, Err(Error::Template(_))));
    }

    #[test]
    fn malformed_template_is_a_template_error() {
        let config = PackageConfig::default();
        let result = render("{{#if Name}}unclosed", &config);
        assert!(matches!(result, Err(Error::Template(_))));
    }

    #[test]
    fn does_not_escape_values() {
        let config = PackageConfig {
            description: "fast & small".into(),
            ..Default::default()
        };
        let out = render("{{Description}}", &config).unwrap();
        assert_eq!(out, "fast & small");
    }
}
