//! Baseline tables as of January 29, 2026. These are fixed starting counts;
//! every snapshot is projected forward from them and nothing ever writes here.

pub const BASELINE_YEAR: i32 = 2026;
pub const BASELINE_MONTH: u32 = 1;
pub const BASELINE_DAY: u32 = 29;

/// Starting counts and growth target for one TV/streaming platform.
#[derive(Debug, Clone, Copy)]
pub struct PlatformBaseline {
    pub name: &'static str,
    /// Cumulative units at the baseline date.
    pub total_units: i64,
    /// Units counted within the baseline month, as of the baseline date.
    pub daily_units: i64,
    /// Approximate units added per month.
    pub monthly_target: i64,
}

pub const PLATFORMS: [PlatformBaseline; 6] = [
    PlatformBaseline {
        name: "ROKU",
        total_units: 81834,
        daily_units: 1999,
        monthly_target: 2500,
    },
    PlatformBaseline {
        name: "FIRE TV",
        total_units: 69945,
        daily_units: 1701,
        monthly_target: 2000,
    },
    PlatformBaseline {
        name: "GOOGLE OS",
        total_units: 71976,
        daily_units: 1540,
        monthly_target: 1600,
    },
    PlatformBaseline {
        name: "LG",
        total_units: 50440,
        daily_units: 1230,
        monthly_target: 1200,
    },
    PlatformBaseline {
        name: "TVOS",
        total_units: 792,
        daily_units: 14,
        monthly_target: 20,
    },
    PlatformBaseline {
        name: "SAMSUNG",
        total_units: 13240,
        daily_units: 754,
        monthly_target: 1000,
    },
];

/// Historic mobile app totals; these grow slowly, 1-2 units per week.
#[derive(Debug, Clone, Copy)]
pub struct MobileAppBaseline {
    pub name: &'static str,
    pub total_units: i64,
}

pub const MOBILE_APPS: [MobileAppBaseline; 4] = [
    MobileAppBaseline {
        name: "Azteca Noreste Mobile iOS",
        total_units: 1190,
    },
    MobileAppBaseline {
        name: "Azteca Noreste Mobile Android",
        total_units: 2512,
    },
    MobileAppBaseline {
        name: "El Horizonte Android",
        total_units: 1880,
    },
    MobileAppBaseline {
        name: "El Horizonte iOS",
        total_units: 1741,
    },
];

pub const MONTH_NAMES_ES: [&str; 12] = [
    "ENERO",
    "FEBRERO",
    "MARZO",
    "ABRIL",
    "MAYO",
    "JUNIO",
    "JULIO",
    "AGOSTO",
    "SEPTIEMBRE",
    "OCTUBRE",
    "NOVIEMBRE",
    "DICIEMBRE",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_table_is_complete() {
        assert_eq!(PLATFORMS.len(), 6);
        let names: Vec<&str> = PLATFORMS.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec!["ROKU", "FIRE TV", "GOOGLE OS", "LG", "TVOS", "SAMSUNG"]
        );
    }

    #[test]
    fn test_mobile_table_is_complete() {
        assert_eq!(MOBILE_APPS.len(), 4);
        let sum: i64 = MOBILE_APPS.iter().map(|a| a.total_units).sum();
        assert_eq!(sum, 1190 + 2512 + 1880 + 1741);
    }

    #[test]
    fn test_baseline_values_are_positive() {
        for platform in &PLATFORMS {
            assert!(platform.total_units > 0, "{}", platform.name);
            assert!(platform.daily_units > 0, "{}", platform.name);
            assert!(platform.monthly_target > 0, "{}", platform.name);
        }
    }

    #[test]
    fn test_month_names_cover_the_year() {
        assert_eq!(MONTH_NAMES_ES.len(), 12);
        assert_eq!(MONTH_NAMES_ES[0], "ENERO");
        assert_eq!(MONTH_NAMES_ES[11], "DICIEMBRE");
    }
}
