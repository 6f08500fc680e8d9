use strum::{Display, EnumIter, EnumString};

/// The fixed label rotation for generated points of interest.
///
/// The iteration order of the variants is the order in which
/// labels are assigned to generated points.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Display, EnumIter, EnumString)]
pub enum PoiCategory {
    Restaurant,
    Cafe,
    Bakery,
    Bar,
    #[strum(serialize = "Food Truck")]
    FoodTruck,
}

impl PoiCategory {
    // The number of different categories, i.e. the number of enum variants
    pub const fn total_count() -> u8 {
        5
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn label_rotation_is_stable() {
        let labels: Vec<_> = PoiCategory::iter().map(|c| c.to_string()).collect();
        assert_eq!(
            labels,
            vec!["Restaurant", "Cafe", "Bakery", "Bar", "Food Truck"]
        );
        assert_eq!(labels.len(), usize::from(PoiCategory::total_count()));
    }

    #[test]
    fn parse_category_from_label() {
        assert_eq!(
            "Food Truck".parse::<PoiCategory>().unwrap(),
            PoiCategory::FoodTruck
        );
        assert!("Pizzeria".parse::<PoiCategory>().is_err());
    }
}
