use std::fmt;
use serde::{ Deserialize, Deserializer, Serialize, Serializer };
use serde::de::Error as _;

pub const NOT_RATED: &str = "Not rated";

/// Mean rating as shown to clients: two decimals, or the "Not rated" sentinel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AverageRating {
    Rated(f64),
    NotRated
}

impl fmt::Display for AverageRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AverageRating::Rated(average) => write!(f, "{:.2}", average),
            AverageRating::NotRated => f.write_str(NOT_RATED)
        }
    }
}

impl Serialize for AverageRating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AverageRating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        if text == NOT_RATED {
            return Ok(AverageRating::NotRated);
        }
        text.parse::<f64>()
            .map(AverageRating::Rated)
            .map_err(|_| D::Error::custom(format!("expected a number or \"{}\", got \"{}\"", NOT_RATED, text)))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct AggregateRating {
    #[serde(rename = "averageRating")]
    pub average_rating: AverageRating,
    #[serde(rename = "ratingCount")]
    pub rating_count: u64
}

impl AggregateRating {
    pub fn not_rated() -> Self {
        AggregateRating {
            average_rating: AverageRating::NotRated,
            rating_count: 0
        }
    }

    /// Builds the aggregate from a SQL `AVG` (NULL when there are no rows) and `COUNT`.
    pub fn from_query(average: Option<f64>, count: u64) -> Self {
        match average {
            Some(average) if count > 0 => AggregateRating {
                average_rating: AverageRating::Rated(average),
                rating_count: count
            },
            _ => AggregateRating::not_rated()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serialises_two_decimals() {
        let aggregate = AggregateRating::from_query(Some(4.0), 2);
        assert_eq!(serde_json::to_value(aggregate).unwrap(), json!({"averageRating": "4.00", "ratingCount": 2}));
        let aggregate = AggregateRating::from_query(Some(11.0 / 3.0), 3);
        assert_eq!(serde_json::to_value(aggregate).unwrap(), json!({"averageRating": "3.67", "ratingCount": 3}));
    }

    #[test]
    fn empty_input_is_not_rated() {
        let aggregate = AggregateRating::from_query(None, 0);
        assert_eq!(serde_json::to_value(aggregate).unwrap(), json!({"averageRating": "Not rated", "ratingCount": 0}));
    }

    #[test]
    fn reads_back_what_the_server_sends() {
        let aggregate: AggregateRating = serde_json::from_value(json!({"averageRating": "3.50", "ratingCount": 4})).unwrap();
        assert_eq!(aggregate.average_rating, AverageRating::Rated(3.5));
        let aggregate: AggregateRating = serde_json::from_value(json!({"averageRating": "Not rated", "ratingCount": 0})).unwrap();
        assert_eq!(aggregate, AggregateRating::not_rated());
        assert!(serde_json::from_value::<AggregateRating>(json!({"averageRating": "great", "ratingCount": 1})).is_err());
    }
}
