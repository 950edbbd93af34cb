use serde::{Deserialize, Serialize};

/// One promotional listing item whose discount met the qualifying threshold.
///
/// Serialized field names are the export column headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Display title with whitespace runs collapsed, e.g. `"Fone Bluetooth X"`.
    #[serde(rename = "Nome do Produto")]
    pub name: String,
    /// Price text reduced to digits and separators, e.g. `"1.234,56"`.
    #[serde(rename = "Preço")]
    pub price: String,
    #[serde(rename = "Desconto")]
    pub discount_percent: u8,
}

impl ProductRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, price: impl Into<String>, discount_percent: u8) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            discount_percent,
        }
    }
}

/// All qualifying records across the fetched listing pages, ordered by name.
///
/// Construction always sorts, so a `Catalog` is never observed unsorted.
/// The sort is stable: records sharing a name keep their page order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<ProductRecord>,
}

impl Catalog {
    /// Builds a catalog from records in page order.
    #[must_use]
    pub fn from_unsorted(mut records: Vec<ProductRecord>) -> Self {
        records.sort_by(|a, b| a.name.cmp(&b.name));
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProductRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Discount column in catalog order.
    #[must_use]
    pub fn discounts(&self) -> Vec<u8> {
        self.records.iter().map(|r| r.discount_percent).collect()
    }

    #[must_use]
    pub fn into_records(self) -> Vec<ProductRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ProductRecord;
    type IntoIter = std::slice::Iter<'a, ProductRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
