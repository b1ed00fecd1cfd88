use crate::core::Table;

/// One projected column: values of `source` are copied into output column
/// `target`; a missing source yields empty values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    pub source: String,
    pub target: String,
}

impl ColumnMapping {
    pub fn new(source: &str, target: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
        }
    }
}

/// Built-in mapping for property lead exports (owner/mailing/property fields).
pub fn default_lead_mapping() -> Vec<ColumnMapping> {
    [
        ("Owner 1 First Name", "First Name"),
        ("Owner 1 Last Name", "Last Name"),
        ("Address", "Address"),
        ("City", "City"),
        ("State", "State"),
        ("Zip", "Zip"),
        ("Mailing Address", "Mailing Address"),
        ("Mailing Unit #", "Mailing Unit #"),
        ("Mailing City", "Mailing City"),
        ("Mailing State", "Mailing State"),
        ("Mailing Zip", "Mailing Zip"),
        ("Mobile Phone", "Phone"),
        ("County", "County"),
        ("Property Type", "Property Type"),
        ("Bedrooms", "Bedrooms"),
        ("Total Bathrooms", "Bathrooms"),
        ("Est. Value", "Est. Value"),
        ("Est. Equity", "Est. Equity"),
    ]
    .into_iter()
    .map(|(source, target)| ColumnMapping::new(source, target))
    .collect()
}

/// Project a table through a column mapping. Source names are matched
/// exactly against the input header; every row keeps its input order.
pub fn remap_table(table: &Table, mappings: &[ColumnMapping]) -> Table {
    let headers: Vec<String> = mappings.iter().map(|m| m.target.clone()).collect();

    let indices: Vec<Option<usize>> = mappings
        .iter()
        .map(|m| table.headers.iter().position(|h| h == &m.source))
        .collect();

    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| {
            indices
                .iter()
                .map(|idx| idx.map(|i| row[i].clone()).unwrap_or_default())
                .collect()
        })
        .collect();

    Table { headers, rows }
}
