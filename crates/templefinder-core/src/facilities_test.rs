use super::*;

fn entry(city: &str, address: &str) -> FacilityConfig {
    FacilityConfig {
        city: city.to_string(),
        address: address.to_string(),
        ..FacilityConfig::default()
    }
}

#[test]
fn into_records_assigns_sequential_ids_in_file_order() {
    let file = FacilitiesFile {
        facilities: vec![
            entry("Edison", "2500 Woodbridge Avenue, Edison, NJ 08817 USA"),
            entry("Chicago", "1851 S IL Route 59, Bartlett, IL 60103-3008 USA"),
        ],
    };
    let records = file.into_records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, 1);
    assert_eq!(records[0].city, "Edison");
    assert_eq!(records[1].id, 2);
    assert_eq!(records[1].city, "Chicago");
}

#[test]
fn into_record_turns_blank_optionals_into_none() {
    let config = FacilityConfig {
        phone: Some("  ".to_string()),
        fax: Some(String::new()),
        email: Some(" info@example.org ".to_string()),
        ..entry("Winnipeg", "1488 Red River Dr, Howden, MB R5A 1K2 Canada")
    };
    let record = config.into_record(7);
    assert_eq!(record.phone, None);
    assert_eq!(record.fax, None);
    assert_eq!(record.email.as_deref(), Some("info@example.org"));
    assert_eq!(record.operating_hours, None);
    assert_eq!(record.latitude, None);
}

#[test]
fn into_record_fills_image_from_photo_table() {
    let record = entry("Austin", "12246 Running Bird Lane, Austin, TX 78758-2634 USA").into_record(1);
    assert!(record
        .image_url
        .as_deref()
        .is_some_and(|u| u.ends_with("15austinmandirf.jpg")));
}

#[test]
fn into_record_keeps_explicit_image() {
    let config = FacilityConfig {
        image_url: Some("https://img.example.com/austin.jpg".to_string()),
        ..entry("Austin", "12246 Running Bird Lane, Austin, TX 78758-2634 USA")
    };
    let record = config.into_record(1);
    assert_eq!(
        record.image_url.as_deref(),
        Some("https://img.example.com/austin.jpg")
    );
}

#[test]
fn validate_rejects_empty_city() {
    let file = FacilitiesFile {
        facilities: vec![entry("  ", "1 Main St")],
    };
    let err = validate_facilities(&file).unwrap_err();
    assert!(err.to_string().contains("empty city"));
}

#[test]
fn validate_rejects_empty_address() {
    let file = FacilitiesFile {
        facilities: vec![entry("Tampa", "")],
    };
    let err = validate_facilities(&file).unwrap_err();
    assert!(err.to_string().contains("empty address"));
}

#[test]
fn validate_rejects_duplicate_city_labels() {
    let file = FacilitiesFile {
        facilities: vec![entry("Tampa", "1 A St"), entry("tampa", "2 B St")],
    };
    let err = validate_facilities(&file).unwrap_err();
    assert!(err.to_string().contains("duplicate facility city"));
}

#[test]
fn parse_facilities_reads_yaml() {
    let yaml = r#"
facilities:
  - city: "Albany, GA"
    address: "1203 Cordele Rd, Albany, GA 31705 USA"
    phone: "229-291-3555"
  - city: Robbinsville
    address: "112 N Main Street, Robbinsville, NJ 08561 USA"
    email: info.akshardham@usa.baps.org
"#;
    let records = parse_facilities(yaml).expect("valid yaml");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].city, "Albany, GA");
    assert_eq!(records[0].phone.as_deref(), Some("229-291-3555"));
    assert_eq!(records[1].id, 2);
    assert_eq!(
        records[1].email.as_deref(),
        Some("info.akshardham@usa.baps.org")
    );
}

#[test]
fn parse_facilities_rejects_malformed_yaml() {
    let result = parse_facilities("facilities: [city: ");
    assert!(matches!(result, Err(ConfigError::FacilitiesFileParse(_))));
}

#[test]
fn record_serializes_in_camel_case_with_nulls() {
    let record = entry("Orlando", "1325 West Oakridge Road, Orlando, FL 32809 USA").into_record(3);
    let json = serde_json::to_value(&record).expect("serialize");
    assert_eq!(json["id"], 3);
    assert!(json["operatingHours"].is_null());
    assert!(json.get("operating_hours").is_none());
    assert!(json.get("imageUrl").is_some());
}

#[test]
fn load_facilities_reports_missing_file() {
    let result = load_facilities(Path::new("/nonexistent/facilities.yaml"));
    assert!(matches!(result, Err(ConfigError::FacilitiesFileIo { .. })));
}

#[test]
fn load_facilities_from_real_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config")
        .join("facilities.yaml");
    assert!(
        path.exists(),
        "facilities.yaml missing at {path:?}; required for this test"
    );
    let records = load_facilities(&path).expect("bundled dataset should load");
    assert!(records.len() > 100);
    assert_eq!(records[0].id, 1);
    assert!(records.iter().any(|r| r.city == "New York"));
}
