use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Deserializer, Serialize};

/// A fixed 4-field macro-nutrient profile.
///
/// Used both for per-food values and for planning targets. Arithmetic is
/// field-wise; distance to a target is the L1 norm over the four fields.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Macros {
    #[serde(default, deserialize_with = "de_macro_field")]
    pub calories: f64,

    #[serde(default, alias = "fat", deserialize_with = "de_macro_field")]
    pub fats: f64,

    #[serde(default, alias = "carbohydrate", deserialize_with = "de_macro_field")]
    pub carbs: f64,

    #[serde(default, alias = "proteins", deserialize_with = "de_macro_field")]
    pub protein: f64,
}

/// Number of macro fields, shared with the optimizer's constraint loop.
pub const MACRO_FIELDS: usize = 4;

impl Macros {
    pub fn new(calories: f64, fats: f64, carbs: f64, protein: f64) -> Self {
        Self {
            calories,
            fats,
            carbs,
            protein,
        }
    }

    /// Fields in canonical order: calories, fats, carbs, protein.
    #[inline]
    pub fn as_array(&self) -> [f64; MACRO_FIELDS] {
        [self.calories, self.fats, self.carbs, self.protein]
    }

    /// Sum of absolute per-field differences (L1 distance).
    pub fn l1_distance(&self, other: &Macros) -> f64 {
        self.as_array()
            .into_iter()
            .zip(other.as_array())
            .map(|(a, b)| (a - b).abs())
            .sum()
    }

    /// Sum of all four fields.
    pub fn field_sum(&self) -> f64 {
        self.as_array().into_iter().sum()
    }

    /// Basic validation: all fields finite and non-negative.
    pub fn is_valid(&self) -> bool {
        self.as_array().into_iter().all(|v| v.is_finite() && v >= 0.0)
    }
}

impl Add for Macros {
    type Output = Macros;

    fn add(self, rhs: Macros) -> Macros {
        Macros {
            calories: self.calories + rhs.calories,
            fats: self.fats + rhs.fats,
            carbs: self.carbs + rhs.carbs,
            protein: self.protein + rhs.protein,
        }
    }
}

impl AddAssign for Macros {
    fn add_assign(&mut self, rhs: Macros) {
        *self = *self + rhs;
    }
}

impl Sum for Macros {
    fn sum<I: Iterator<Item = Macros>>(iter: I) -> Macros {
        iter.fold(Macros::default(), Add::add)
    }
}

/// Accept numbers or numeric strings; reject strings that do not parse.
///
/// Upstream transports stringify form values, so `"300"` must coerce to
/// 300.0, but `"abc"` is an input error rather than a silent zero.
fn de_macro_field<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrStr {
        Num(f64),
        Str(String),
    }

    match NumOrStr::deserialize(deserializer)? {
        NumOrStr::Num(n) => Ok(n),
        NumOrStr::Str(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(0.0);
            }
            trimmed.parse().map_err(|_| {
                serde::de::Error::custom(format!("cannot parse macro value: {:?}", s))
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_l1_distance() {
        let a = Macros::new(300.0, 7.0, 40.0, 15.0);
        let target = Macros::new(300.0, 7.0, 35.0, 12.0);
        assert!((a.l1_distance(&target) - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_fieldwise_addition() {
        let a = Macros::new(200.0, 5.0, 30.0, 10.0);
        let c = Macros::new(100.0, 2.0, 10.0, 5.0);
        let sum = a + c;
        assert_eq!(sum, Macros::new(300.0, 7.0, 40.0, 15.0));
    }

    #[test]
    fn test_sum_over_iterator() {
        let parts = vec![
            Macros::new(1.0, 2.0, 3.0, 4.0),
            Macros::new(10.0, 20.0, 30.0, 40.0),
            Macros::new(100.0, 200.0, 300.0, 400.0),
        ];
        let total: Macros = parts.into_iter().sum();
        assert_eq!(total, Macros::new(111.0, 222.0, 333.0, 444.0));
    }

    #[test]
    fn test_deserialize_numeric_strings() {
        let m: Macros =
            serde_json::from_str(r#"{"calories": "300", "fats": 7, "carbs": "35.5"}"#).unwrap();
        assert_eq!(m.calories, 300.0);
        assert_eq!(m.fats, 7.0);
        assert_eq!(m.carbs, 35.5);
        assert_eq!(m.protein, 0.0); // missing -> 0
    }

    #[test]
    fn test_deserialize_rejects_garbage() {
        let result: Result<Macros, _> = serde_json::from_str(r#"{"calories": "plenty"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_field_aliases() {
        let m: Macros =
            serde_json::from_str(r#"{"fat": 3, "carbohydrate": 20, "proteins": 12}"#).unwrap();
        assert_eq!(m.fats, 3.0);
        assert_eq!(m.carbs, 20.0);
        assert_eq!(m.protein, 12.0);
    }

    #[test]
    fn test_is_valid() {
        assert!(Macros::new(100.0, 1.0, 2.0, 3.0).is_valid());
        assert!(!Macros::new(-1.0, 1.0, 2.0, 3.0).is_valid());
        assert!(!Macros::new(f64::NAN, 1.0, 2.0, 3.0).is_valid());
    }
}
