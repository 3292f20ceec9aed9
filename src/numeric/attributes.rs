//! String attributes, as written in markup, applied to widget props.

use super::bounds::Bounds;
use super::error::{AttributeError, closest_name};
use super::transform::{TransformType, parse_decimal};
use super::widget::{DEFAULT_PRECISION, NumericWidgetProps};

/// Attribute names understood by [`NumericWidgetProps::set_attribute`].
pub const ATTRIBUTE_NAMES: [&str; 9] = [
    "value",
    "min",
    "max",
    "step",
    "drag-factor",
    "precision",
    "disabled",
    "infinite-drag",
    "type",
];

impl NumericWidgetProps {
    /// Builds props from `(name, value)` attribute pairs.
    pub fn from_attributes<'a>(
        attributes: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, AttributeError> {
        let mut props = Self::default();
        for (name, value) in attributes {
            props.set_attribute(name, Some(value))?;
        }
        Ok(props)
    }

    /// Applies one attribute. `None` removes it.
    ///
    /// Removing `min`, `max` or `step` unconstrains and removing another
    /// numeric attribute restores its default. Boolean attributes are true
    /// exactly when present.
    pub fn set_attribute(
        &mut self,
        name: &str,
        value: Option<&str>,
    ) -> Result<(), AttributeError> {
        match name {
            "value" => self.value = optional_number("value", value)?.unwrap_or(0.0),
            "min" => self.bounds.min = optional_number("min", value)?,
            "max" => self.bounds.max = optional_number("max", value)?,
            "step" => self.bounds.step = optional_number("step", value)?,
            "drag-factor" => {
                self.drag_factor = optional_number("drag-factor", value)?.unwrap_or(1.0);
            }
            "precision" => {
                self.precision = match value {
                    Some(text) => {
                        text.trim()
                            .parse()
                            .map_err(|_| AttributeError::InvalidNumber {
                                name: "precision",
                                value: text.to_string(),
                            })?
                    }
                    None => DEFAULT_PRECISION,
                };
            }
            "disabled" => self.disabled = value.is_some(),
            "infinite-drag" => self.infinite_drag = value.is_some(),
            "type" => {
                self.transform = match value {
                    Some(text) => text.parse()?,
                    None => TransformType::default(),
                };
            }
            _ => {
                return Err(AttributeError::UnknownAttribute {
                    name: name.to_string(),
                    suggestion: closest_name(name, &ATTRIBUTE_NAMES),
                });
            }
        }
        Ok(())
    }

    /// Reads an attribute back as markup text. `None` when unset.
    pub fn attribute(&self, name: &str) -> Option<String> {
        let Bounds { min, max, step } = self.bounds;
        match name {
            "value" => Some(self.value.to_string()),
            "min" => min.map(|v| v.to_string()),
            "max" => max.map(|v| v.to_string()),
            "step" => step.map(|v| v.to_string()),
            "drag-factor" => Some(self.drag_factor.to_string()),
            "precision" => Some(self.precision.to_string()),
            "disabled" => self.disabled.then(String::new),
            "infinite-drag" => self.infinite_drag.then(String::new),
            "type" => Some(self.transform.to_string()),
            _ => None,
        }
    }
}

fn optional_number(
    name: &'static str,
    value: Option<&str>,
) -> Result<Option<f64>, AttributeError> {
    value
        .map(|text| {
            parse_decimal(text).ok_or_else(|| AttributeError::InvalidNumber {
                name,
                value: text.to_string(),
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::error::TransformParseError;

    #[test]
    fn builds_props_from_markup() {
        let props = NumericWidgetProps::from_attributes([
            ("value", "390"),
            ("min", "0"),
            ("step", "15"),
            ("type", "part-rotation"),
            ("disabled", ""),
        ])
        .expect("valid attributes");

        assert_eq!(props.value, 390.0);
        assert_eq!(props.bounds, Bounds::new(Some(0.0), None).with_step(15.0));
        assert_eq!(props.transform, TransformType::PartRotation);
        assert!(props.disabled);
        assert_eq!(props.attribute("type").as_deref(), Some("part-rotation"));
        assert_eq!(props.attribute("max"), None);
    }

    #[test]
    fn removing_attributes_restores_defaults() {
        let mut props =
            NumericWidgetProps::from_attributes([("max", "5"), ("drag-factor", "0.5")])
                .expect("valid attributes");
        props.set_attribute("max", None).expect("known attribute");
        props.set_attribute("drag-factor", None).expect("known attribute");
        assert_eq!(props.bounds.max, None);
        assert_eq!(props.drag_factor, 1.0);
    }

    #[test]
    fn rejects_bad_input_with_suggestions() {
        let mut props = NumericWidgetProps::default();
        assert_eq!(
            props.set_attribute("drag-facter", Some("2")),
            Err(AttributeError::UnknownAttribute {
                name: "drag-facter".to_string(),
                suggestion: Some("drag-factor"),
            })
        );
        assert_eq!(
            props.set_attribute("min", Some("abc")),
            Err(AttributeError::InvalidNumber {
                name: "min",
                value: "abc".to_string(),
            })
        );
        assert_eq!(
            props.set_attribute("type", Some("precent")),
            Err(AttributeError::Transform(TransformParseError {
                name: "precent".to_string(),
                suggestion: Some("percent"),
            }))
        );
    }
}
