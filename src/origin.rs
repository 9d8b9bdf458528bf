//! Wine origin lookup.
//!
//! The normalized text produced by a [`TextPipeline`] is handed to an external
//! [`Classifier`] that predicts one target label per record. The label then
//! selects rows from an [`OriginCatalog`] supplied by the host, optionally
//! narrowed by attribute filters. [`WineIdentifier`] wires the three together.

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::pipeline::runner::TextPipeline;
use crate::pipeline::traits::Normalizer;

/// Predicts a target label for each normalized record.
///
/// Implementations must return exactly one label per input record.
pub trait Classifier {
    fn predict(&self, normalized: &[String]) -> Vec<String>;
}

// ============================================================================
// Records
// ============================================================================

/// Attribute columns reported for a predicted origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OriginField {
    Country,
    Province,
    Designation,
    Variety,
    Winery,
    Region,
}

impl OriginField {
    /// Output columns, in report order.
    pub const ALL: [OriginField; 6] = [
        OriginField::Country,
        OriginField::Province,
        OriginField::Designation,
        OriginField::Variety,
        OriginField::Winery,
        OriginField::Region,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OriginField::Country => "country",
            OriginField::Province => "province",
            OriginField::Designation => "designation",
            OriginField::Variety => "variety",
            OriginField::Winery => "winery",
            OriginField::Region => "region",
        }
    }
}

impl fmt::Display for OriginField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OriginField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OriginField::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown origin field `{s}`"))
    }
}

/// One catalog row: a target label and its origin attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginRecord {
    pub target: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub variety: Option<String>,
    #[serde(default)]
    pub winery: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
}

impl OriginRecord {
    pub fn get(&self, field: OriginField) -> Option<&str> {
        let value = match field {
            OriginField::Country => &self.country,
            OriginField::Province => &self.province,
            OriginField::Designation => &self.designation,
            OriginField::Variety => &self.variety,
            OriginField::Winery => &self.winery,
            OriginField::Region => &self.region,
        };
        value.as_deref()
    }

    /// The output columns as a JSON object (target omitted).
    fn to_output(&self) -> serde_json::Value {
        let map = OriginField::ALL
            .iter()
            .map(|&field| {
                let value = self
                    .get(field)
                    .map_or(serde_json::Value::Null, |v| serde_json::Value::from(v));
                (field.as_str().to_string(), value)
            })
            .collect();
        serde_json::Value::Object(map)
    }
}

// ============================================================================
// OriginCatalog
// ============================================================================

/// In-memory table of origin rows keyed by target label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OriginCatalog {
    rows: Vec<OriginRecord>,
}

impl OriginCatalog {
    pub fn new(rows: Vec<OriginRecord>) -> Self {
        Self { rows }
    }

    /// Load rows from a JSON array of records.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn rows(&self) -> &[OriginRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows whose target equals `label`, in catalog order.
    pub fn rows_for(&self, label: &str) -> Vec<&OriginRecord> {
        self.rows.iter().filter(|r| r.target == label).collect()
    }

    /// Distinct present values of `field`, in first-seen order.
    pub fn unique(&self, field: OriginField) -> Vec<&str> {
        let mut seen = FxHashSet::default();
        self.rows
            .iter()
            .filter_map(|r| r.get(field))
            .filter(|v| seen.insert(*v))
            .collect()
    }
}

/// Keep rows matching every `(field, value)` pair exactly.
pub fn filter<'a>(rows: Vec<&'a OriginRecord>, filters: &[(OriginField, &str)]) -> Vec<&'a OriginRecord> {
    rows.into_iter()
        .filter(|row| filters.iter().all(|(field, value)| row.get(*field) == Some(*value)))
        .collect()
}

/// Serialize rows as a JSON array of output-column objects.
pub fn to_json(rows: &[&OriginRecord]) -> serde_json::Result<String> {
    let records: Vec<serde_json::Value> = rows.iter().map(|r| r.to_output()).collect();
    serde_json::to_string(&records)
}

// ============================================================================
// WineIdentifier
// ============================================================================

/// Raw description → normalized text → predicted label → catalog rows.
#[derive(Debug)]
pub struct WineIdentifier<C, N = crate::pipeline::traits::Reduction> {
    pipeline: TextPipeline<N>,
    classifier: C,
    catalog: OriginCatalog,
}

impl<C: Classifier, N: Normalizer> WineIdentifier<C, N> {
    pub fn new(pipeline: TextPipeline<N>, classifier: C, catalog: OriginCatalog) -> Self {
        Self {
            pipeline,
            classifier,
            catalog,
        }
    }

    pub fn pipeline(&self) -> &TextPipeline<N> {
        &self.pipeline
    }

    pub fn catalog(&self) -> &OriginCatalog {
        &self.catalog
    }

    /// Predicted label for `text`, or `None` for blank input.
    pub fn predict(&self, text: &str) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }
        let normalized = self.pipeline.transform(&[text]);
        self.classifier.predict(&normalized).into_iter().next()
    }

    /// Catalog rows for the label predicted from `text`, narrowed by `filters`.
    pub fn identify(&self, text: &str, filters: &[(OriginField, &str)]) -> Vec<&OriginRecord> {
        let Some(label) = self.predict(text) else {
            return Vec::new();
        };
        let rows = filter(self.catalog.rows_for(&label), filters);

        #[cfg(feature = "tracing")]
        tracing::debug!(label = label.as_str(), rows = rows.len(), "origin identified");

        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::spec::PipelineSpec;

    fn record(target: &str, country: &str, variety: &str) -> OriginRecord {
        OriginRecord {
            target: target.to_string(),
            country: Some(country.to_string()),
            variety: Some(variety.to_string()),
            ..Default::default()
        }
    }

    fn catalog() -> OriginCatalog {
        OriginCatalog::new(vec![
            record("red", "Italy", "Sangiovese"),
            record("red", "France", "Syrah"),
            record("white", "Germany", "Riesling"),
            record("red", "Italy", "Nebbiolo"),
        ])
    }

    /// Labels a record "red" when it mentions cherri, else "white".
    struct KeywordClassifier;

    impl Classifier for KeywordClassifier {
        fn predict(&self, normalized: &[String]) -> Vec<String> {
            normalized
                .iter()
                .map(|text| {
                    if text.split(' ').any(|t| t == "cherri") {
                        "red".to_string()
                    } else {
                        "white".to_string()
                    }
                })
                .collect()
        }
    }

    fn identifier() -> WineIdentifier<KeywordClassifier> {
        let pipeline = TextPipeline::new(PipelineSpec::default()).unwrap();
        WineIdentifier::new(pipeline, KeywordClassifier, catalog())
    }

    #[test]
    fn test_rows_for_label() {
        let cat = catalog();
        assert_eq!(cat.rows_for("red").len(), 3);
        assert!(cat.rows_for("rose").is_empty());
    }

    #[test]
    fn test_filter_requires_all_pairs() {
        let cat = catalog();
        let rows = filter(cat.rows_for("red"), &[(OriginField::Country, "Italy")]);
        assert_eq!(rows.len(), 2);

        let rows = filter(
            cat.rows_for("red"),
            &[(OriginField::Country, "Italy"), (OriginField::Variety, "Nebbiolo")],
        );
        assert_eq!(rows.len(), 1);
        assert!(filter(cat.rows_for("red"), &[(OriginField::Region, "Tuscany")]).is_empty());
    }

    #[test]
    fn test_unique_keeps_first_seen_order() {
        assert_eq!(
            catalog().unique(OriginField::Country),
            vec!["Italy", "France", "Germany"]
        );
        assert!(catalog().unique(OriginField::Winery).is_empty());
    }

    #[test]
    fn test_to_json_projects_output_columns() {
        let cat = catalog();
        let json = to_json(&cat.rows_for("white")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["country"], "Germany");
        assert_eq!(value[0]["region"], serde_json::Value::Null);
        assert!(value[0].get("target").is_none());
    }

    #[test]
    fn test_catalog_from_json() {
        let cat = OriginCatalog::from_json(
            r#"[{"target": "red", "country": "Spain"}, {"target": "white"}]"#,
        )
        .unwrap();
        assert_eq!(cat.len(), 2);
        assert_eq!(cat.rows()[1].country, None);
    }

    #[test]
    fn test_field_parsing() {
        assert_eq!("Variety".parse::<OriginField>(), Ok(OriginField::Variety));
        assert!("vintage".parse::<OriginField>().is_err());
    }

    #[test]
    fn test_identify_end_to_end() {
        let wine = identifier();
        let rows = wine.identify("Spicy cherry aromas!", &[]);
        assert_eq!(rows.len(), 3);

        let rows = wine.identify("Spicy cherry aromas!", &[(OriginField::Variety, "Syrah")]);
        assert_eq!(rows[0].country.as_deref(), Some("France"));

        let rows = wine.identify("Crisp green apple", &[]);
        assert_eq!(rows[0].variety.as_deref(), Some("Riesling"));
    }

    #[test]
    fn test_identify_blank_input_yields_nothing() {
        let wine = identifier();
        assert!(wine.identify("", &[]).is_empty());
        assert!(wine.identify("   ", &[]).is_empty());
        assert_eq!(wine.predict(""), None);
    }
}
