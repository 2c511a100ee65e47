use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// Maximum number of regions in a single comparison.
pub const MAX_REGIONS: usize = 3;

/// Weather metric a comparison is run over.
///
/// The canonical key (`as_str`) is also the lookup key of the metric
/// profile table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Temperature,
    Humidity,
    WindSpeed,
    Precipitation,
}

impl Metric {
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Temperature => "temperature",
            Metric::Humidity => "humidity",
            Metric::WindSpeed => "windSpeed",
            Metric::Precipitation => "precipitation",
        }
    }

    /// Korean display label used in table headers and the report prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Temperature => "평균 기온",
            Metric::Humidity => "평균 습도",
            Metric::WindSpeed => "풍속",
            Metric::Precipitation => "강수량",
        }
    }

    /// Axis unit for the metric.
    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Temperature => "°C",
            Metric::Humidity => "%",
            Metric::WindSpeed => "m/s",
            Metric::Precipitation => "mm",
        }
    }

    pub const fn all() -> &'static [Metric] {
        &[
            Metric::Temperature,
            Metric::Humidity,
            Metric::WindSpeed,
            Metric::Precipitation,
        ]
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Metric {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "temperature" => Ok(Metric::Temperature),
            "humidity" => Ok(Metric::Humidity),
            "windspeed" | "wind" => Ok(Metric::WindSpeed),
            "precipitation" | "rain" => Ok(Metric::Precipitation),
            _ => Err(anyhow::anyhow!(
                "Unknown metric '{value}'. Supported metrics: temperature, humidity, windSpeed, precipitation."
            )),
        }
    }
}

/// One of the five Jeju-island regions available for comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    JejuCity,
    Seogwipo,
    Hallasan,
    Udo,
    Seongsan,
}

impl Region {
    /// Korean name, the canonical key of the region profile table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::JejuCity => "제주시",
            Region::Seogwipo => "서귀포시",
            Region::Hallasan => "한라산",
            Region::Udo => "우도",
            Region::Seongsan => "성산",
        }
    }

    /// ASCII alias accepted on the command line.
    pub fn alias(&self) -> &'static str {
        match self {
            Region::JejuCity => "jeju",
            Region::Seogwipo => "seogwipo",
            Region::Hallasan => "hallasan",
            Region::Udo => "udo",
            Region::Seongsan => "seongsan",
        }
    }

    pub const fn all() -> &'static [Region] {
        &[
            Region::JejuCity,
            Region::Seogwipo,
            Region::Hallasan,
            Region::Udo,
            Region::Seongsan,
        ]
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Region {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "제주시" | "jeju" | "jeju-city" => Ok(Region::JejuCity),
            "서귀포시" | "seogwipo" => Ok(Region::Seogwipo),
            "한라산" | "hallasan" => Ok(Region::Hallasan),
            "우도" | "udo" => Ok(Region::Udo),
            "성산" | "seongsan" => Ok(Region::Seongsan),
            _ => Err(anyhow::anyhow!(
                "Unknown region '{value}'. Supported regions: 제주시 (jeju), 서귀포시 (seogwipo), 한라산 (hallasan), 우도 (udo), 성산 (seongsan)."
            )),
        }
    }
}

/// One daily observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Per-day observations for one region/metric/date-range combination,
/// ascending by date, one point per calendar day.
pub type Series = Vec<SeriesPoint>;

/// A region's series, as consumed by the analysis request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionSeries {
    pub region: String,
    pub points: Series,
}
