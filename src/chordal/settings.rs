use derive_builder::Builder;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Error type returned by settings validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}

/// Settings for [`CliqueDecomposer`](crate::chordal::CliqueDecomposer)

#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecompositionSettings {
    ///verbose printing
    #[builder(default = "false")]
    pub verbose: bool,

    ///fill reducing elimination ordering: "amd" or "natural"
    #[builder(default = r#""amd".to_string()"#, setter(into))]
    pub ordering: String,

    ///scaling of the AMD dense row threshold
    #[builder(default = "1.0")]
    pub amd_dense_scale: f64,

    ///clique merge method: "greedy" or "none"
    #[builder(default = r#""greedy".to_string()"#, setter(into))]
    pub merge_method: String,

    ///verify that the extension admits a perfect elimination ordering
    #[builder(default = "false")]
    pub check_chordality: bool,
}

impl Default for DecompositionSettings {
    fn default() -> DecompositionSettings {
        DecompositionSettingsBuilder::default().build().unwrap()
    }
}

impl DecompositionSettings {
    /// Check that a settings object built without the builder (e.g.
    /// deserialized or modified in place) holds legal values.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_ordering(&self.ordering)?;
        validate_merge_method(&self.merge_method)?;
        validate_amd_dense_scale(self.amd_dense_scale)?;
        Ok(())
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for DecompositionSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        DecompositionSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl DecompositionSettingsBuilder {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(ref ordering) = self.ordering {
            validate_ordering(ordering)?;
        }
        if let Some(ref merge_method) = self.merge_method {
            validate_merge_method(merge_method)?;
        }
        if let Some(amd_dense_scale) = self.amd_dense_scale {
            validate_amd_dense_scale(amd_dense_scale)?;
        }
        Ok(())
    }
}

fn validate_ordering(ordering: &str) -> Result<(), SettingsError> {
    match ordering {
        "amd" => Ok(()),
        "natural" => Ok(()),
        _ => Err(SettingsError::BadFieldValue("ordering")),
    }
}

fn validate_merge_method(merge_method: &str) -> Result<(), SettingsError> {
    match merge_method {
        "greedy" => Ok(()),
        "none" => Ok(()),
        _ => Err(SettingsError::BadFieldValue("merge_method")),
    }
}

fn validate_amd_dense_scale(scale: f64) -> Result<(), SettingsError> {
    if scale.is_finite() && scale > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("amd_dense_scale"))
    }
}

#[test]
fn test_settings_validate() {
    // all standard settings
    DecompositionSettingsBuilder::default().build().unwrap();

    DecompositionSettingsBuilder::default()
        .ordering("natural")
        .merge_method("none")
        .build()
        .unwrap();

    // fail on unknown ordering
    assert!(DecompositionSettingsBuilder::default()
        .ordering("metis")
        .build()
        .is_err());

    // fail on unknown merge method
    assert!(DecompositionSettingsBuilder::default()
        .merge_method("clique_graph")
        .build()
        .is_err());

    // fail on nonpositive scaling
    assert!(DecompositionSettingsBuilder::default()
        .amd_dense_scale(0.0)
        .build()
        .is_err());

    let mut settings = DecompositionSettings::default();
    settings.merge_method = "bogus".to_string();
    assert_eq!(
        settings.validate(),
        Err(SettingsError::BadFieldValue("merge_method"))
    );
}

#[test]
fn test_settings_defaults() {
    let settings = DecompositionSettings::default();
    assert!(!settings.verbose);
    assert_eq!(settings.ordering, "amd");
    assert_eq!(settings.merge_method, "greedy");
    assert_eq!(settings.amd_dense_scale, 1.0);
    assert!(!settings.check_chordality);
}
