use std::fmt;

use csv::ReaderBuilder;

/// One row of the lead sheet. Every field is trimmed and defaults to empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BusinessRecord {
    pub site_url: String,
    pub business_name: String,
    pub industry: String,
    pub company_name: String,
    pub city: String,
    pub phone_number: String,
}

impl BusinessRecord {
    /// A row is worth showing if there is something to call or look up.
    pub fn has_contact(&self) -> bool {
        [
            &self.business_name,
            &self.company_name,
            &self.site_url,
            &self.phone_number,
        ]
        .iter()
        .any(|field| !field.is_empty())
    }

    fn from_row(columns: &[Option<Column>], row: &csv::StringRecord) -> Self {
        let mut record = Self::default();
        for (column, value) in columns.iter().zip(row.iter()) {
            let Some(column) = column else {
                continue;
            };
            let slot = match column {
                Column::SiteUrl => &mut record.site_url,
                Column::BusinessName => &mut record.business_name,
                Column::Industry => &mut record.industry,
                Column::CompanyName => &mut record.company_name,
                Column::City => &mut record.city,
                Column::PhoneNumber => &mut record.phone_number,
            };
            // First matching column wins when a sheet carries aliases twice.
            if slot.is_empty() {
                *slot = value.trim().to_string();
            }
        }
        record
    }
}

/// A row the CSV reader rejected. Parsing continues past it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    pub line: Option<u64>,
    pub message: String,
}

impl RowError {
    fn field_count(row: &csv::StringRecord, expected: usize) -> Self {
        Self {
            line: row.position().map(csv::Position::line),
            message: format!("expected {expected} fields, found {}", row.len()),
        }
    }

    fn from_csv(err: &csv::Error) -> Self {
        Self {
            line: err.position().map(csv::Position::line),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {line}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Result of parsing one CSV payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedDataset {
    pub records: Vec<BusinessRecord>,
    pub errors: Vec<RowError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    SiteUrl,
    BusinessName,
    Industry,
    CompanyName,
    City,
    PhoneNumber,
}

impl Column {
    fn from_header(header: &str) -> Option<Self> {
        let key: String = header
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "siteurl" | "website" | "url" | "site" => Some(Self::SiteUrl),
            "businessname" | "business" | "name" => Some(Self::BusinessName),
            "industry" | "category" => Some(Self::Industry),
            "companyname" | "company" => Some(Self::CompanyName),
            "city" | "town" => Some(Self::City),
            "phonenumber" | "phone" | "telephone" => Some(Self::PhoneNumber),
            _ => None,
        }
    }
}

/// Parse CSV text with a header row into records.
///
/// Blank and whitespace-only lines are skipped and rows without any contact
/// field are dropped. Rows with the wrong number of fields are reported in
/// [`ParsedDataset::errors`] but still kept when they carry a contact.
pub fn parse_dataset(text: &str) -> ParsedDataset {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let columns: Vec<Option<Column>> = match reader.headers() {
        Ok(headers) => headers.iter().map(Column::from_header).collect(),
        Err(err) => {
            return ParsedDataset {
                records: Vec::new(),
                errors: vec![RowError::from_csv(&err)],
            };
        }
    };

    let mut parsed = ParsedDataset::default();
    for result in reader.records() {
        match result {
            Ok(row) => {
                if row.iter().all(|field| field.trim().is_empty()) {
                    continue;
                }
                if row.len() != columns.len() {
                    parsed.errors.push(RowError::field_count(&row, columns.len()));
                }
                let record = BusinessRecord::from_row(&columns, &row);
                if record.has_contact() {
                    parsed.records.push(record);
                }
            }
            Err(err) => parsed.errors.push(RowError::from_csv(&err)),
        }
    }
    parsed
}

/// `(XXX) XXX-XXXX` for ten-digit numbers, the input unchanged otherwise.
pub fn format_phone(raw: &str) -> String {
    let digits = dial_digits(raw);
    if digits.len() != 10 {
        return raw.to_string();
    }
    format!("({}) {}-{}", &digits[0..3], &digits[3..6], &digits[6..])
}

/// The ASCII digits of a phone number, suitable for a `tel:` link.
pub fn dial_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}
