// src/application/dto/chart.rs
// Declarative chart descriptors for the charting surface

use serde::Serialize;
use thiserror::Error;

// A shape mismatch is a silent rendering defect on most charting surfaces,
// so the constructors reject it instead of passing it along.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("series '{name}' has {got} points, axis expects {expected}")]
    SeriesLength {
        name: String,
        expected: usize,
        got: usize,
    },

    #[error("entity '{name}' has {got} values, indicator list expects {expected}")]
    EntityLength {
        name: String,
        expected: usize,
        got: usize,
    },

    #[error("entity '{entity}' value {value} outside [0, {max}] for indicator '{indicator}'")]
    ValueOutOfRange {
        entity: String,
        indicator: String,
        value: f64,
        max: f64,
    },
}

/// One named numeric series aligned to a shared category axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedSeries {
    pub name: String,
    pub values: Vec<f64>,
}

impl NamedSeries {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Category-axis trend descriptor: every series carries exactly one value
/// per axis label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendChart {
    pub axis: Vec<String>,
    pub series: Vec<NamedSeries>,
}

impl TrendChart {
    pub fn new(axis: Vec<String>, series: Vec<NamedSeries>) -> Result<Self, ChartError> {
        for entry in &series {
            if entry.values.len() != axis.len() {
                return Err(ChartError::SeriesLength {
                    name: entry.name.clone(),
                    expected: axis.len(),
                    got: entry.values.len(),
                });
            }
        }
        Ok(Self { axis, series })
    }
}

/// One radar dimension with its maximum scale value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Indicator {
    pub name: String,
    pub max: f64,
}

impl Indicator {
    pub fn new(name: impl Into<String>, max: f64) -> Self {
        Self {
            name: name.into(),
            max,
        }
    }
}

/// One rated entity: a value per indicator, each within [0, indicator max].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarEntity {
    pub name: String,
    pub values: Vec<f64>,
}

impl RadarEntity {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Radar (indicator-axis) descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarChart {
    pub indicators: Vec<Indicator>,
    pub entities: Vec<RadarEntity>,
}

impl RadarChart {
    pub fn new(
        indicators: Vec<Indicator>,
        entities: Vec<RadarEntity>,
    ) -> Result<Self, ChartError> {
        for entity in &entities {
            if entity.values.len() != indicators.len() {
                return Err(ChartError::EntityLength {
                    name: entity.name.clone(),
                    expected: indicators.len(),
                    got: entity.values.len(),
                });
            }
            for (indicator, value) in indicators.iter().zip(&entity.values) {
                if *value < 0.0 || *value > indicator.max {
                    return Err(ChartError::ValueOutOfRange {
                        entity: entity.name.clone(),
                        indicator: indicator.name.clone(),
                        value: *value,
                        max: indicator.max,
                    });
                }
            }
        }
        Ok(Self {
            indicators,
            entities,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_accepts_series_aligned_to_the_axis() {
        let chart = TrendChart::new(
            vec!["Mon".to_string(), "Tue".to_string()],
            vec![NamedSeries::new("Plant A", vec![1.0, 2.0])],
        )
        .unwrap();
        assert_eq!(chart.axis.len(), 2);
        assert_eq!(chart.series[0].values.len(), 2);
    }

    #[test]
    fn trend_rejects_a_short_series() {
        let err = TrendChart::new(
            vec!["Mon".to_string(), "Tue".to_string(), "Wed".to_string()],
            vec![NamedSeries::new("Plant A", vec![1.0, 2.0])],
        )
        .unwrap_err();

        assert_eq!(
            err,
            ChartError::SeriesLength {
                name: "Plant A".to_string(),
                expected: 3,
                got: 2,
            }
        );
    }

    #[test]
    fn radar_rejects_a_value_count_mismatch() {
        let err = RadarChart::new(
            vec![Indicator::new("Capacity", 100.0), Indicator::new("Quality", 100.0)],
            vec![RadarEntity::new("Plant A", vec![90.0])],
        )
        .unwrap_err();

        assert!(matches!(err, ChartError::EntityLength { .. }));
    }

    #[test]
    fn radar_rejects_values_outside_the_indicator_scale() {
        let indicators = vec![Indicator::new("Capacity", 100.0)];

        let too_high = RadarChart::new(
            indicators.clone(),
            vec![RadarEntity::new("Plant A", vec![130.0])],
        );
        assert!(matches!(
            too_high,
            Err(ChartError::ValueOutOfRange { value, .. }) if value == 130.0
        ));

        let negative = RadarChart::new(
            indicators,
            vec![RadarEntity::new("Plant A", vec![-5.0])],
        );
        assert!(negative.is_err());
    }

    #[test]
    fn descriptors_serialize_for_the_charting_surface() {
        let chart = RadarChart::new(
            vec![Indicator::new("SLA", 100.0)],
            vec![RadarEntity::new("Plant A", vec![95.0])],
        )
        .unwrap();

        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["indicators"][0]["name"], "SLA");
        assert_eq!(json["entities"][0]["values"][0], 95.0);
    }
}
