//! Fixed climate lookup tables.
//!
//! Both tables are closed and built into the binary. Lookups never fail:
//! names absent from a table resolve to that table's default profile, so
//! generation stays total for arbitrary input strings.

/// Domain bounds and day-to-day noise amplitude for one metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricProfile {
    pub min: f64,
    pub max: f64,
    pub daily_variance: f64,
}

impl MetricProfile {
    /// Fallback profile for metrics absent from the table.
    pub const DEFAULT: MetricProfile = MetricProfile {
        min: 0.0,
        max: 100.0,
        daily_variance: 10.0,
    };

    /// Resolve a metric name to its profile.
    pub fn lookup(metric: &str) -> MetricProfile {
        match metric {
            "temperature" => MetricProfile { min: 5.0, max: 28.0, daily_variance: 3.0 },
            "humidity" => MetricProfile { min: 40.0, max: 95.0, daily_variance: 10.0 },
            "windSpeed" => MetricProfile { min: 1.0, max: 15.0, daily_variance: 4.0 },
            "precipitation" => MetricProfile { min: 0.0, max: 50.0, daily_variance: 20.0 },
            _ => MetricProfile::DEFAULT,
        }
    }
}

/// Additive temperature bias and multiplicative precipitation scaling
/// representing one region's deviation from the island baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionProfile {
    pub temp_offset: f64,
    pub precip_factor: f64,
}

impl RegionProfile {
    /// Identity modifiers, used for regions absent from the table.
    pub const DEFAULT: RegionProfile = RegionProfile {
        temp_offset: 0.0,
        precip_factor: 1.0,
    };

    /// Resolve a region name to its profile.
    pub fn lookup(region: &str) -> RegionProfile {
        match region {
            "제주시" => RegionProfile { temp_offset: 0.0, precip_factor: 1.0 },
            "서귀포시" => RegionProfile { temp_offset: 2.0, precip_factor: 1.2 },
            // Mountain interior: markedly colder, much wetter.
            "한라산" => RegionProfile { temp_offset: -8.0, precip_factor: 1.8 },
            "우도" => RegionProfile { temp_offset: 1.0, precip_factor: 0.8 },
            "성산" => RegionProfile { temp_offset: 1.0, precip_factor: 1.1 },
            _ => RegionProfile::DEFAULT,
        }
    }
}
