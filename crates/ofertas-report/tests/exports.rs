//! File-level tests for the CSV and spreadsheet sinks.

use chrono::NaiveDate;
use ofertas_core::{Catalog, ProductRecord};
use ofertas_report::{write_csv, write_xlsx, OutputFiles, ReportError};

fn sample_catalog() -> Catalog {
    Catalog::from_unsorted(vec![
        ProductRecord::new("Torradeira Inox", "199", 20),
        ProductRecord::new("Aspirador, Vertical", "1.234,56", 35),
    ])
}

fn output_files(dir: &std::path::Path) -> OutputFiles {
    let date = NaiveDate::from_ymd_opt(2024, 5, 9).unwrap();
    OutputFiles::new(dir, "TESTE", date)
}

#[test]
fn csv_has_header_and_sorted_rows() {
    let dir = tempfile::tempdir().unwrap();
    let files = output_files(dir.path());

    write_csv(&sample_catalog(), &files.csv).unwrap();

    let mut reader = csv::Reader::from_path(&files.csv).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["Nome do Produto", "Preço", "Desconto"]
    );

    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][0], "Aspirador, Vertical");
    assert_eq!(&rows[0][1], "1.234,56");
    assert_eq!(&rows[0][2], "35");
    assert_eq!(&rows[1][0], "Torradeira Inox");
}

#[test]
fn csv_file_name_embeds_date() {
    let dir = tempfile::tempdir().unwrap();
    let files = output_files(dir.path());

    write_csv(&sample_catalog(), &files.csv).unwrap();

    assert!(dir.path().join("TESTE_09_05_2024.csv").is_file());
}

#[test]
fn csv_of_empty_catalog_still_has_header() {
    let dir = tempfile::tempdir().unwrap();
    let files = output_files(dir.path());

    write_csv(&Catalog::default(), &files.csv).unwrap();

    let text = std::fs::read_to_string(&files.csv).unwrap();
    assert_eq!(text, "Nome do Produto,Preço,Desconto\n");
}

#[test]
fn csv_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.csv");

    let err = write_csv(&sample_catalog(), &path).unwrap_err();

    assert!(matches!(err, ReportError::Csv(_)), "got: {err:?}");
}

#[test]
fn xlsx_is_written_as_zip_container() {
    let dir = tempfile::tempdir().unwrap();
    let files = output_files(dir.path());

    write_xlsx(&sample_catalog(), "TESTE", &files.xlsx).unwrap();

    let bytes = std::fs::read(&files.xlsx).unwrap();
    assert!(bytes.starts_with(b"PK"), "xlsx must be a zip archive");
}

#[test]
fn xlsx_truncates_long_sheet_names() {
    let dir = tempfile::tempdir().unwrap();
    let files = output_files(dir.path());
    let long_name = "A".repeat(40);

    let result = write_xlsx(&sample_catalog(), &long_name, &files.xlsx);

    assert!(result.is_ok(), "expected Ok, got: {result:?}");
}

#[test]
fn xlsx_rejects_invalid_sheet_name_characters() {
    let dir = tempfile::tempdir().unwrap();
    let files = output_files(dir.path());

    let err = write_xlsx(&sample_catalog(), "bad/name", &files.xlsx).unwrap_err();

    assert!(matches!(err, ReportError::Xlsx(_)), "got: {err:?}");
    assert!(!files.xlsx.exists());
}
