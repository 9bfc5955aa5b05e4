//! Integration tests for the benchmark sources against recorded payloads.

use std::io::Write;

use rust_decimal_macros::dec;
use tvm_core::types::Date;
use tvm_market::legacy::{decode_latin1, parse_legacy_page};
use tvm_market::sie::parse_sie_response;
use tvm_market::{
    BenchmarkConfig, BenchmarkSource, BenchmarkTable, MarketDataError, ProviderKind, SourceType,
    TableRecord, Tenor,
};

/// CF107 page captured in ISO-8859-1, trimmed to the CETES block.
const CF107_SAMPLE: &[u8] = include_bytes!("fixtures/cf107_sample.html");

#[test]
fn test_legacy_page_fixture() {
    let table = parse_legacy_page(CF107_SAMPLE).unwrap();

    assert_eq!(table.rate(Tenor::Days28), dec!(10.25));
    assert_eq!(table.rate(Tenor::Days91), dec!(10.40));
    assert_eq!(table.rate(Tenor::Days182), dec!(10.55));
}

#[test]
fn test_fixture_is_latin1() {
    assert!(std::str::from_utf8(CF107_SAMPLE).is_err());
    assert!(decode_latin1(CF107_SAMPLE).contains("Información"));
}

#[test]
fn test_layout_change_is_detected() {
    let changed = decode_latin1(CF107_SAMPLE).replace("Tasa de rendimiento", "Rendimiento");
    let err = parse_legacy_page(changed.as_bytes()).unwrap_err();
    assert!(matches!(err, MarketDataError::MarkerNotFound { .. }));
}

#[test]
fn test_sie_payload() {
    let body = r#"{
        "bmx": {
            "series": [
                {"idSerie": "SF43942", "titulo": "Cetes 182 dias", "datos": [{"fecha": "10/10/2024", "dato": "10.55"}]},
                {"idSerie": "SF43936", "titulo": "Cetes 28 dias", "datos": [{"fecha": "10/10/2024", "dato": "10.25"}]},
                {"idSerie": "SF43939", "titulo": "Cetes 91 dias", "datos": [{"fecha": "10/10/2024", "dato": "10.40"}]}
            ]
        }
    }"#;

    let table = parse_sie_response(body).unwrap();
    let expected = BenchmarkTable::new(dec!(10.25), dec!(10.40), dec!(10.55), "banxico-sie")
        .with_as_of(Date::from_ymd(2024, 10, 10).unwrap());
    assert_eq!(table, expected);
}

#[test]
fn test_file_provider_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let table_path = dir.path().join("cetes.json");
    let table = BenchmarkTable::new(dec!(9.80), dec!(9.95), dec!(10.05), "eod");
    std::fs::write(
        &table_path,
        serde_json::to_string_pretty(&TableRecord::from(&table)).unwrap(),
    )
    .unwrap();

    let config_path = dir.path().join("benchmarks.toml");
    let mut config_file = std::fs::File::create(&config_path).unwrap();
    writeln!(config_file, "provider = \"file\"").unwrap();
    writeln!(config_file, "file = {:?}", table_path.to_string_lossy()).unwrap();

    let config = BenchmarkConfig::from_file(&config_path).unwrap();
    assert_eq!(config.provider, ProviderKind::File);

    let source = config.build_source().unwrap();
    assert_eq!(source.source_type(), SourceType::File);
    assert_eq!(source.fetch().unwrap(), table);
}
