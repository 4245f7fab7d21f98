mod common;

use common::LEADS_CSV;
use leadcard_core::{active_records, format_phone, industries, parse_dataset, BusinessRecord};
use pretty_assertions::assert_eq;

#[test]
fn blank_rows_are_dropped_and_phone_only_rows_kept() {
    let parsed = parse_dataset(LEADS_CSV);

    assert!(parsed.errors.is_empty());
    let names: Vec<_> = parsed
        .records
        .iter()
        .map(|record| record.business_name.as_str())
        .collect();
    assert_eq!(names, vec!["Acme Plumbing", "Bright Dental", "", "Best Pipes"]);
    assert_eq!(
        parsed.records[2],
        BusinessRecord {
            phone_number: "555-CALL-NOW".to_string(),
            ..BusinessRecord::default()
        }
    );
}

#[test]
fn fields_are_trimmed() {
    let parsed = parse_dataset(
        "Business Name, Industry ,City\n  Acme Plumbing  ,  Plumbing ,\tAustin \n",
    );

    assert_eq!(parsed.records.len(), 1);
    let record = &parsed.records[0];
    assert_eq!(record.business_name, "Acme Plumbing");
    assert_eq!(record.industry, "Plumbing");
    assert_eq!(record.city, "Austin");
}

#[test]
fn header_aliases_are_recognised() {
    let parsed = parse_dataset(
        "Website,Name,Category,Company,Town,Phone,Notes\nacme.example,Acme,Plumbing,Acme LLC,Austin,5551234567,call after 3\n",
    );

    assert_eq!(
        parsed.records,
        vec![BusinessRecord {
            site_url: "acme.example".to_string(),
            business_name: "Acme".to_string(),
            industry: "Plumbing".to_string(),
            company_name: "Acme LLC".to_string(),
            city: "Austin".to_string(),
            phone_number: "5551234567".to_string(),
        }]
    );
}

#[test]
fn blank_lines_are_skipped() {
    let parsed = parse_dataset("Business Name,City\nAcme,Austin\n\n\nBest,Waco\n");

    assert!(parsed.errors.is_empty());
    assert_eq!(parsed.records.len(), 2);
}

#[test]
fn malformed_rows_are_reported_without_aborting() {
    let parsed = parse_dataset(
        "Business Name,City\nAcme,Austin\nBroken,Dallas,extra\nBest,Waco\n",
    );

    assert_eq!(parsed.errors.len(), 1);
    assert!(parsed.errors[0].line.is_some());
    let names: Vec<_> = parsed
        .records
        .iter()
        .map(|record| record.business_name.as_str())
        .collect();
    assert_eq!(names, vec!["Acme", "Broken", "Best"]);
}

#[test]
fn whitespace_only_lines_are_skipped_silently() {
    let parsed = parse_dataset("Business Name,City\nAcme,Austin\n   \n\t\nBest,Waco\n");

    assert!(parsed.errors.is_empty());
    assert_eq!(parsed.records.len(), 2);
}

#[test]
fn short_rows_are_kept_and_reported() {
    let parsed = parse_dataset("Business Name,City,Phone Number\nAcme,Austin\nBest,Waco,5559876543\n");

    assert_eq!(parsed.records.len(), 2);
    assert_eq!(parsed.records[0].business_name, "Acme");
    assert_eq!(parsed.records[0].city, "Austin");
    assert_eq!(parsed.records[0].phone_number, "");
    assert_eq!(parsed.errors.len(), 1);
    assert_eq!(parsed.errors[0].line, Some(2));
    assert_eq!(parsed.errors[0].message, "expected 3 fields, found 2");
}

#[test]
fn short_rows_without_contact_are_reported_but_dropped() {
    let parsed = parse_dataset("Business Name,City,Phone Number\n,Austin\n");

    assert!(parsed.records.is_empty());
    assert_eq!(parsed.errors.len(), 1);
}

#[test]
fn empty_text_yields_empty_dataset() {
    let parsed = parse_dataset("");

    assert!(parsed.records.is_empty());
    assert!(parsed.errors.is_empty());
}

#[test]
fn filtering_keeps_only_matching_rows_in_source_order() {
    let parsed = parse_dataset(LEADS_CSV);

    let plumbing: Vec<_> = active_records(&parsed.records, Some("Plumbing"))
        .into_iter()
        .map(|record| record.business_name.as_str())
        .collect();
    assert_eq!(plumbing, vec!["Acme Plumbing", "Best Pipes"]);

    assert_eq!(active_records(&parsed.records, None).len(), 4);
    assert!(active_records(&parsed.records, Some("plumbing")).is_empty());
}

#[test]
fn industries_are_sorted_distinct_and_non_empty() {
    let parsed = parse_dataset(LEADS_CSV);

    assert_eq!(industries(&parsed.records), vec!["Dental", "Plumbing"]);
}

#[test]
fn phone_numbers_format_only_with_ten_digits() {
    assert_eq!(format_phone("5551234567"), "(555) 123-4567");
    assert_eq!(format_phone("555.123.4567"), "(555) 123-4567");
    assert_eq!(format_phone("555-CALL-NOW"), "555-CALL-NOW");
    assert_eq!(format_phone("+1 555 123 4567"), "+1 555 123 4567");
    assert_eq!(format_phone(""), "");
}
