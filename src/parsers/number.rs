use super::{ParserParameters, PropertyParser};
use crate::core::{PropertyValue, Unit};
use regex::Regex;

/// Parses `<number><unit>` values restricted to a set of units.
#[derive(Debug)]
pub struct NumberParser {
    units: Vec<Unit>,
    number_regex: Regex,
}

impl NumberParser {
    pub fn new(units: &[Unit]) -> Self {
        Self {
            units: units.to_vec(),
            number_regex: Regex::new(r"^([-+]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+))([a-z%]*)$")
                .expect("number pattern is valid"),
        }
    }

    /// All absolute and font-relative lengths, optionally with `%` and unitless numbers.
    pub fn lengths(percent: bool, number: bool) -> Self {
        let units: Vec<Unit> = Unit::ALL
            .into_iter()
            .filter(|unit| match unit {
                Unit::Percent => percent,
                Unit::Number => number,
                unit => unit.is_length(),
            })
            .collect();
        Self::new(&units)
    }

    pub fn angles() -> Self {
        let units: Vec<Unit> = Unit::ALL.into_iter().filter(|unit| unit.is_angle()).collect();
        Self::new(&units)
    }

    fn accepts(&self, unit: Unit) -> bool {
        self.units.contains(&unit)
    }
}

impl PropertyParser for NumberParser {
    fn parse_value(&self, value: &str, _parameters: &ParserParameters) -> Option<PropertyValue> {
        let lowered = value.trim().to_lowercase();
        let captures = self.number_regex.captures(&lowered)?;

        let number: f32 = captures.get(1)?.as_str().parse().ok()?;
        let suffix = captures.get(2).map_or("", |m| m.as_str());
        let unit = Unit::from_suffix(suffix)?;

        if self.accepts(unit) {
            return Some(PropertyValue::Number(number, unit));
        }

        // A bare zero is a valid length even when plain numbers are not.
        if unit == Unit::Number && number == 0.0 && self.accepts(Unit::Px) {
            return Some(PropertyValue::Number(0.0, Unit::Px));
        }

        None
    }
}
