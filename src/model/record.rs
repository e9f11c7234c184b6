// src/model/record.rs

/// One sales transaction row.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub region: String,
    pub segment: String,
    pub shipping_method: String,
    pub category: String,
    pub revenue: f64,
    pub profit: f64,
}

impl Record {
    pub fn value(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::Region => &self.region,
            Dimension::Segment => &self.segment,
            Dimension::ShippingMethod => &self.shipping_method,
        }
    }
}

/// The full set of rows read from the workbook. Never mutated after load.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

// Filterable columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    Region,
    Segment,
    ShippingMethod,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [
        Dimension::Region,
        Dimension::Segment,
        Dimension::ShippingMethod,
    ];
}
