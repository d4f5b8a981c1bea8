use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Record – one row of the Iris dataset
// ---------------------------------------------------------------------------

/// A single Iris observation: four measurements in centimetres plus the
/// species label. Fields are coerced to `f64` once at load time; records are
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub sepal_length: f64,
    pub sepal_width: f64,
    pub petal_length: f64,
    pub petal_width: f64,
    pub species: String,
}

// ---------------------------------------------------------------------------
// Attribute – selector over the four measurements
// ---------------------------------------------------------------------------

/// Selects one of the four numeric measurements of a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    SepalLength,
    SepalWidth,
    PetalLength,
    PetalWidth,
}

impl Attribute {
    /// All attributes, in [`DomainBounds`] storage order.
    pub const ALL: [Attribute; 4] = [
        Attribute::SepalLength,
        Attribute::SepalWidth,
        Attribute::PetalLength,
        Attribute::PetalWidth,
    ];

    /// Read this attribute's value from a record.
    pub fn value(self, record: &Record) -> f64 {
        match self {
            Attribute::SepalLength => record.sepal_length,
            Attribute::SepalWidth => record.sepal_width,
            Attribute::PetalLength => record.petal_length,
            Attribute::PetalWidth => record.petal_width,
        }
    }

    /// Human-readable axis label.
    pub fn label(self) -> &'static str {
        match self {
            Attribute::SepalLength => "Sepal Length",
            Attribute::SepalWidth => "Sepal Width",
            Attribute::PetalLength => "Petal Length",
            Attribute::PetalWidth => "Petal Width",
        }
    }
}

// ---------------------------------------------------------------------------
// Domain bounds – cached min/max per attribute
// ---------------------------------------------------------------------------

/// Closed interval of attribute values: the axis domain for one attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

/// Min/max of every attribute over the full dataset, computed once after
/// load and cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainBounds {
    domains: [Domain; 4],
}

impl DomainBounds {
    /// Fold min/max over the records, one pass per attribute.
    pub fn compute(records: &[Record]) -> Self {
        let domains = Attribute::ALL.map(|attr| {
            let mut min = f64::INFINITY;
            let mut max = f64::NEG_INFINITY;
            for record in records {
                let v = attr.value(record);
                min = min.min(v);
                max = max.max(v);
            }
            Domain { min, max }
        });
        DomainBounds { domains }
    }

    /// The cached domain of one attribute.
    pub fn domain(&self, attr: Attribute) -> Domain {
        self.domains[attr as usize]
    }
}

// ---------------------------------------------------------------------------
// IrisDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with its pre-computed attribute bounds.
#[derive(Debug, Clone)]
pub struct IrisDataset {
    /// All records (rows).
    pub records: Vec<Record>,
    /// Cached per-attribute min/max, derived at construction.
    pub bounds: DomainBounds,
}

impl IrisDataset {
    /// Build the dataset and its bounds from loaded records.
    pub fn from_records(records: Vec<Record>) -> Self {
        let bounds = DomainBounds::compute(&records);
        IrisDataset { records, bounds }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted unique species labels, for legend and colour-map setup.
    pub fn species_labels(&self) -> Vec<String> {
        let labels: BTreeSet<&str> = self.records.iter().map(|r| r.species.as_str()).collect();
        labels.into_iter().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(sl: f64, sw: f64, pl: f64, pw: f64, species: &str) -> Record {
        Record {
            sepal_length: sl,
            sepal_width: sw,
            petal_length: pl,
            petal_width: pw,
            species: species.to_string(),
        }
    }

    #[test]
    fn attribute_selects_the_right_field() {
        let r = record(5.1, 3.5, 1.4, 0.2, "setosa");
        assert_eq!(Attribute::SepalLength.value(&r), 5.1);
        assert_eq!(Attribute::SepalWidth.value(&r), 3.5);
        assert_eq!(Attribute::PetalLength.value(&r), 1.4);
        assert_eq!(Attribute::PetalWidth.value(&r), 0.2);
    }

    #[test]
    fn bounds_are_literal_min_max() {
        let dataset = IrisDataset::from_records(vec![
            record(5.0, 2.0, 1.0, 0.5, "setosa"),
            record(6.0, 3.0, 4.0, 1.5, "versicolor"),
        ]);
        let width = dataset.bounds.domain(Attribute::SepalWidth);
        assert_eq!((width.min, width.max), (2.0, 3.0));
        let length = dataset.bounds.domain(Attribute::SepalLength);
        assert_eq!((length.min, length.max), (5.0, 6.0));
        let petal = dataset.bounds.domain(Attribute::PetalLength);
        assert_eq!((petal.min, petal.max), (1.0, 4.0));
    }

    #[test]
    fn species_labels_are_sorted_and_unique() {
        let dataset = IrisDataset::from_records(vec![
            record(6.0, 3.0, 4.0, 1.5, "versicolor"),
            record(5.0, 2.0, 1.0, 0.5, "setosa"),
            record(5.2, 2.1, 1.1, 0.4, "setosa"),
        ]);
        assert_eq!(dataset.species_labels(), ["setosa", "versicolor"]);
    }
}
