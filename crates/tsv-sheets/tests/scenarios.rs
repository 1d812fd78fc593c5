//! End-to-end tests for editing documents through the public API

use pretty_assertions::assert_eq;
use tsv_sheets::prelude::*;

/// Load, inspect, and serialize a small table
#[test]
fn test_load_and_serialize() {
    let mut doc = Document::new();
    doc.load_str("Name\tAge\nMario\t25");

    assert_eq!(doc.len(), 2);
    assert_eq!(doc.row(0), Some(&Row::from(["Name", "Age"])));
    assert_eq!(doc.row(1), Some(&Row::from(["Mario", "25"])));
    assert!(doc.row(1).unwrap().cell(1).unwrap().is_number());
    assert_eq!(doc.to_tsv_string(), "Name\tAge\nMario\t25");
}

/// Build a table by hand the way a caller assembles rows
#[test]
fn test_build_table() {
    let mut doc = Document::new();
    doc.row_mut(0).assign(["Name", "Age", "Job", "NA"]);
    doc.push_row(["Frank Freeman", "45", "Nuclear Scientist"]);

    let mut r1 = Row::new();
    r1.push("Mario Rossi");
    r1.push("25");
    doc.push_row(r1);

    doc.row_mut(2).push("Bean Counter");
    doc.row_mut(2).cell_mut(1).set("32");
    doc.row_mut(0).remove_first("NA");

    assert_eq!(
        doc.to_string(),
        "Name\tAge\tJob\nFrank Freeman\t45\tNuclear Scientist\nMario Rossi\t32\tBean Counter"
    );
}

/// Search rows by the value of their first cell
#[test]
fn test_search_by_value() {
    let mut doc = Document::new();
    doc.push_cells([Cell::from("Name"), "Frank".into(), "Mario".into(), "Gordon".into()]);
    doc.push_cells([Cell::from("Age"), 22.into(), 44.into(), 55.into()]);
    doc.push_cells([Cell::from("Height"), 5.6.into(), 4.89f32.into(), "32,22".into()]);

    assert_eq!(doc.row_by_value("Height").cell_mut(3).precise_number(), 32.22);
    assert_eq!(doc.row_by_value("Age").cell_mut(2).number(), 44);

    // No match falls back to the first row
    let fallback = doc.row_by_value("Weight").clone();
    assert_eq!(fallback.cell(0).map(Cell::as_str), Some("Name"));
    assert_eq!(doc.len(), 3);
}

/// Arithmetic through rows
#[test]
fn test_arithmetic_in_rows() {
    let mut doc: Document = "Item\tPrice\nTea\t2,50\nCake\tfree".parse().unwrap();

    doc.row_by_value("Tea").cell_mut(1).add("1,25");
    doc.row_by_value("Cake").cell_mut(1).add(3);
    doc.row_by_value("Cake").cell_mut(1).sub(1);

    assert_eq!(doc.to_tsv_string(), "Item\tPrice\nTea\t3,75\nCake\tfree");

    let cake = doc.try_row_by_value("Cake").unwrap().cell_mut(1);
    assert_eq!(cake.try_add(3), Err(Error::NotANumber("free".into())));
}

/// Removing rows by value leaves a gap that serializes as an empty line
#[test]
fn test_remove_rows() {
    let mut doc: Document = "a\t1\nb\t2\nc\t3".parse().unwrap();
    let b = doc.find_row("b").cloned().unwrap();

    assert!(doc.remove_row(&b).is_some());
    assert_eq!(doc.to_tsv_string(), "a\t1\n\nc\t3");

    assert!(doc.remove_row(&b).is_none());
    assert_eq!(doc.len(), 2);
}

/// Reloading the serialized text gives an equal document
#[test]
fn test_serialize_reload_roundtrip() {
    let mut doc = Document::new();
    doc.push_cells([Cell::from("Label"), Cell::from(1.5), Cell::from("7,25"), Cell::from("9.0e1")]);
    doc.push_cells([Cell::from(-3), Cell::from("text with spaces"), Cell::from("0")]);

    let text = doc.to_tsv_string();
    assert_eq!(text, "Label\t1,5\t7,25\t9,0e1\n-3\ttext with spaces\t0");

    let reloaded: Document = text.parse().unwrap();
    assert_eq!(reloaded, doc);
}
