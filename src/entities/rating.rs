//! Difficulty ratings that drive the price markup
//!
//! Each category is rated on the same three-level scale (1, 3, or 5), where
//! higher values mean a harder or riskier print. The six values are summed
//! to produce the markup in [`Ratings::markup`].

use serde::{Deserialize, Serialize};

use crate::core::error::QuoteError;

/// Declares a rating category enum with its integer scale, names, and conversions
macro_rules! rating_category {
    (
        $(#[$meta:meta])*
        $name:ident, $category:literal {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:literal => $label:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(try_from = "u8", into = "u8")]
        #[repr(u8)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant = $value,
            )+
        }

        impl $name {
            /// Human-readable category name
            pub const CATEGORY: &'static str = $category;

            /// Position on the 1/3/5 scale
            pub fn value(self) -> u8 {
                self as u8
            }

            /// All levels, highest first
            pub fn all() -> &'static [$name] {
                &[$($name::$variant),+]
            }
        }

        impl TryFrom<u8> for $name {
            type Error = QuoteError;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $($value => Ok($name::$variant),)+
                    _ => Err(QuoteError::InvalidRating {
                        category: $category,
                        value,
                    }),
                }
            }
        }

        impl From<$name> for u8 {
            fn from(rating: $name) -> u8 {
                rating.value()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $($name::$variant => f.write_str($label),)+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
                match normalized.as_str() {
                    $($label => Ok($name::$variant),)+
                    other => match other.parse::<u8>() {
                        Ok(value) => $name::try_from(value).map_err(|e| e.to_string()),
                        Err(_) => Err(format!(
                            "Invalid {} rating: {}. Use {}",
                            $category,
                            s,
                            [$($label),+].join(", ")
                        )),
                    },
                }
            }
        }
    };
}

rating_category! {
    /// How intricate the part geometry is
    PrintComplexity, "print complexity" {
        /// Complex with detailed features
        VeryComplex = 5 => "very_complex",
        /// Relatively complex features
        #[default]
        ModeratelyComplex = 3 => "moderately_complex",
        /// A 2D extruded profile
        NotComplex = 1 => "not_complex",
    }
}

rating_category! {
    /// Expected service load on the part
    PartUseCase, "part use case" {
        /// Must endure 100+ load cycles
        HighLoad = 5 => "high_load",
        /// Handled most of the time
        ModerateLoad = 3 => "moderate_load",
        /// Representation or display only
        #[default]
        DisplayOnly = 1 => "display_only",
    }
}

rating_category! {
    /// Support material that has to be removed after printing
    MaterialRemoval, "material removal" {
        /// Internal features need support
        InternalSupport = 5 => "internal_support",
        /// Open features need support
        #[default]
        ExternalSupport = 3 => "external_support",
        NoSupport = 1 => "no_support",
    }
}

rating_category! {
    /// Thinnest wall on the part
    WallThickness, "wall thickness" {
        /// Under 2mm (0.04in)
        Under2mm = 5 => "under_2mm",
        /// Between 2mm and 3mm
        Between2mm3mm = 3 => "between_2mm_3mm",
        /// Over 3mm (0.1in)
        #[default]
        Over3mm = 1 => "over_3mm",
    }
}

rating_category! {
    /// How well corners are supported
    StressPoints, "stress points" {
        NoCornerSupport = 5 => "no_corner_support",
        SomeCornerSupport = 3 => "some_corner_support",
        #[default]
        GenerousCornerSupport = 1 => "generous_corner_support",
    }
}

rating_category! {
    /// Dimensional tolerance the part must hold
    Tolerance, "tolerance" {
        /// Exact throughout the part
        HighTolerance = 5 => "high_tolerance",
        /// Some features need tighter tolerance
        #[default]
        SomeHighTolerance = 3 => "some_high_tolerance",
        NoTolerance = 1 => "no_tolerance",
    }
}

/// Number of rating categories
pub const RATING_COUNT: usize = 6;

/// The six difficulty ratings for one part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Ratings {
    pub print_complexity: PrintComplexity,
    pub part_use_case: PartUseCase,
    pub material_removal: MaterialRemoval,
    pub wall_thickness: WallThickness,
    pub stress_points: StressPoints,
    pub tolerance: Tolerance,
}

impl Ratings {
    /// Build ratings from raw values, in declaration order
    pub fn from_values(values: [u8; RATING_COUNT]) -> Result<Self, QuoteError> {
        let [complexity, use_case, removal, wall, stress, tolerance] = values;
        Ok(Self {
            print_complexity: PrintComplexity::try_from(complexity)?,
            part_use_case: PartUseCase::try_from(use_case)?,
            material_removal: MaterialRemoval::try_from(removal)?,
            wall_thickness: WallThickness::try_from(wall)?,
            stress_points: StressPoints::try_from(stress)?,
            tolerance: Tolerance::try_from(tolerance)?,
        })
    }

    /// Every category at the lowest level (markup 0.6)
    pub fn lowest() -> Self {
        Self {
            print_complexity: PrintComplexity::NotComplex,
            part_use_case: PartUseCase::DisplayOnly,
            material_removal: MaterialRemoval::NoSupport,
            wall_thickness: WallThickness::Over3mm,
            stress_points: StressPoints::GenerousCornerSupport,
            tolerance: Tolerance::NoTolerance,
        }
    }

    /// Every category at the highest level (markup 3.0)
    pub fn highest() -> Self {
        Self {
            print_complexity: PrintComplexity::VeryComplex,
            part_use_case: PartUseCase::HighLoad,
            material_removal: MaterialRemoval::InternalSupport,
            wall_thickness: WallThickness::Under2mm,
            stress_points: StressPoints::NoCornerSupport,
            tolerance: Tolerance::HighTolerance,
        }
    }

    /// Raw values paired with their category names, in declaration order
    pub fn values(&self) -> [(&'static str, u8); RATING_COUNT] {
        [
            (PrintComplexity::CATEGORY, self.print_complexity.value()),
            (PartUseCase::CATEGORY, self.part_use_case.value()),
            (MaterialRemoval::CATEGORY, self.material_removal.value()),
            (WallThickness::CATEGORY, self.wall_thickness.value()),
            (StressPoints::CATEGORY, self.stress_points.value()),
            (Tolerance::CATEGORY, self.tolerance.value()),
        ]
    }

    /// Sum of all six values (6..=30)
    pub fn sum(&self) -> u32 {
        self.values().iter().map(|(_, v)| u32::from(*v)).sum()
    }

    /// Price markup factor: the rating sum divided by ten
    pub fn markup(&self) -> f64 {
        f64::from(self.sum()) / 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ratings() {
        let ratings = Ratings::default();
        assert_eq!(ratings.print_complexity, PrintComplexity::ModeratelyComplex);
        assert_eq!(ratings.part_use_case, PartUseCase::DisplayOnly);
        assert_eq!(ratings.material_removal, MaterialRemoval::ExternalSupport);
        assert_eq!(ratings.wall_thickness, WallThickness::Over3mm);
        assert_eq!(ratings.stress_points, StressPoints::GenerousCornerSupport);
        assert_eq!(ratings.tolerance, Tolerance::SomeHighTolerance);
        assert_eq!(ratings.sum(), 12);
        assert!((ratings.markup() - 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_markup_bounds() {
        assert_eq!(Ratings::lowest().sum(), 6);
        assert_eq!(Ratings::lowest().markup(), 0.6);
        assert_eq!(Ratings::highest().sum(), 30);
        assert_eq!(Ratings::highest().markup(), 3.0);
    }

    #[test]
    fn test_try_from_rejects_off_scale_values() {
        for value in [0u8, 2, 4, 6, 255] {
            let err = Tolerance::try_from(value).unwrap_err();
            assert!(matches!(
                err,
                QuoteError::InvalidRating {
                    category: "tolerance",
                    ..
                }
            ));
        }
        assert_eq!(WallThickness::try_from(5).unwrap(), WallThickness::Under2mm);
    }

    #[test]
    fn test_from_values() {
        let ratings = Ratings::from_values([5, 5, 1, 1, 3, 3]).unwrap();
        assert_eq!(ratings.print_complexity, PrintComplexity::VeryComplex);
        assert_eq!(ratings.stress_points, StressPoints::SomeCornerSupport);
        assert_eq!(ratings.sum(), 18);

        let err = Ratings::from_values([3, 1, 3, 2, 1, 3]).unwrap_err();
        assert_eq!(err.field(), Some("wall thickness"));
    }

    #[test]
    fn test_all_is_descending() {
        let values: Vec<u8> = PartUseCase::all().iter().map(|r| r.value()).collect();
        assert_eq!(values, vec![5, 3, 1]);
    }

    #[test]
    fn test_display_and_from_str() {
        assert_eq!(MaterialRemoval::InternalSupport.to_string(), "internal_support");
        assert_eq!(
            "Very Complex".parse::<PrintComplexity>().unwrap(),
            PrintComplexity::VeryComplex
        );
        assert_eq!(
            "between-2mm-3mm".parse::<WallThickness>().unwrap(),
            WallThickness::Between2mm3mm
        );
        assert_eq!("1".parse::<Tolerance>().unwrap(), Tolerance::NoTolerance);
        assert!("4".parse::<Tolerance>().is_err());
        assert!("extreme".parse::<Tolerance>().is_err());
    }

    #[test]
    fn test_serializes_as_integer() {
        let json = serde_json::to_string(&Ratings::default()).unwrap();
        assert!(json.contains("\"print_complexity\":3"));
        assert!(json.contains("\"tolerance\":3"));

        let parsed: Ratings =
            serde_yml::from_str("print_complexity: 5\nwall_thickness: 3\n").unwrap();
        assert_eq!(parsed.print_complexity, PrintComplexity::VeryComplex);
        assert_eq!(parsed.wall_thickness, WallThickness::Between2mm3mm);
        assert_eq!(parsed.tolerance, Tolerance::SomeHighTolerance);
    }

    #[test]
    fn test_deserialize_rejects_off_scale_value() {
        let result = serde_yml::from_str::<Ratings>("stress_points: 2\n");
        assert!(result.is_err());
    }
}
