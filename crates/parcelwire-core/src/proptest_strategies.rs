//! Property-based testing strategies for generating test data
//!
//! Strategies here produce raw unit codes and normalized packages for the
//! unit and consistency property tests.

#![cfg(test)]

use crate::types::Package;
use crate::units::{
    normalize_dimensions, normalize_weight, resolve_unit_system, LengthUnit, MassUnit, UnitSystem,
};
use proptest::prelude::*;
use proptest::sample::select;

pub fn mass_unit_strategy() -> impl Strategy<Value = MassUnit> {
    select(MassUnit::ALL.to_vec())
}

pub fn length_unit_strategy() -> impl Strategy<Value = LengthUnit> {
    select(LengthUnit::ALL.to_vec())
}

/// Unit codes in random letter case, surrounded by optional whitespace
pub fn mass_code_strategy() -> impl Strategy<Value = (MassUnit, String)> {
    (mass_unit_strategy(), any::<bool>(), " {0,2}").prop_map(|(unit, lower, padding)| {
        let code = if lower {
            unit.code().to_ascii_lowercase()
        } else {
            unit.code().to_string()
        };
        (unit, format!("{padding}{code}{padding}"))
    })
}

/// A package normalized from random input units
pub fn package_strategy(sequence_number: u32) -> impl Strategy<Value = Package> {
    (
        0.001f64..1000.0,
        mass_unit_strategy(),
        (0.1f64..500.0, 0.1f64..500.0, 0.1f64..500.0),
        length_unit_strategy(),
    )
        .prop_map(move |(weight, mass_unit, (l, w, h), length_unit)| {
            Package::new(
                sequence_number,
                normalize_weight(weight, mass_unit),
                normalize_dimensions(l, w, h, length_unit),
                "prop",
            )
        })
}

/// Packages that all share one unit system
pub fn consistent_packages_strategy() -> impl Strategy<Value = (UnitSystem, Vec<Package>)> {
    let metric = (
        prop::collection::vec(
            (0.001f64..1000.0, prop_oneof![Just(MassUnit::Kilogram), Just(MassUnit::Gram)]),
            1..6,
        ),
        Just(UnitSystem::Metric),
    );
    let imperial = (
        prop::collection::vec(
            (0.001f64..1000.0, prop_oneof![Just(MassUnit::Pound), Just(MassUnit::Ounce)]),
            1..6,
        ),
        Just(UnitSystem::Imperial),
    );

    prop_oneof![metric, imperial].prop_map(|(weights, system)| {
        let length_unit = match system {
            UnitSystem::Metric => LengthUnit::Millimeter,
            UnitSystem::Imperial => LengthUnit::Foot,
        };
        let packages = weights
            .into_iter()
            .zip(1u32..)
            .map(|((weight, unit), sequence_number)| {
                Package::new(
                    sequence_number,
                    normalize_weight(weight, unit),
                    normalize_dimensions(10.0, 10.0, 10.0, length_unit),
                    "",
                )
            })
            .collect();
        (system, packages)
    })
}

proptest! {
    #[test]
    fn unit_codes_parse_regardless_of_case(pair in mass_code_strategy()) {
        let (unit, code) = pair;
        prop_assert_eq!(code.parse::<MassUnit>().unwrap(), unit);
    }

    #[test]
    fn consistent_packages_resolve_to_their_system(input in consistent_packages_strategy()) {
        let (system, packages) = input;
        prop_assert_eq!(resolve_unit_system(&packages).unwrap(), system);
    }

    #[test]
    fn normalized_weights_are_non_negative(package in package_strategy(1)) {
        prop_assert!(package.weight().value >= 0.0);
        prop_assert!(package.dimensions().length > 0.0);
    }
}
