//! Whole-document output tests: exact records, section layout and nesting

mod common;

use common::builders::{create_all_entities_document, BLOCK_NAME};
use common::*;
use dxfwriter::entities::*;
use dxfwriter::tables::{LayerEntry, Table};
use dxfwriter::{Color, Document, DxfRecord, DxfWriter, HandleAllocator, Units, Vector3};

#[test]
fn point_renders_every_input_digit() {
    let mut handles = HandleAllocator::new();
    let point = Point::from_coords(
        &mut handles,
        24445787874545.336,
        47854548454.54874,
        0.14111122215556,
    );
    assert_eq!(
        point.to_dxf_string(),
        "0\nPOINT\n5\n1\n100\nAcDbEntity\n8\n0\n100\nAcDbPoint\n\
         10\n24445787874545.336\n20\n47854548454.54874\n30\n0.14111122215556"
    );
}

#[test]
fn layer_table_field_order() {
    let mut handles = HandleAllocator::new();
    let mut table: Table<LayerEntry> = Table::new(&mut handles);
    let mut layer = LayerEntry::new(&mut handles, "MyLayer");
    layer.color = Color::RED;
    layer.line_type = "CONTINUOUS".to_string();
    table.add(layer).unwrap();

    let pairs = parse_pairs(&table.to_dxf_string());
    let expected: Vec<Pair> = [
        (0, "TABLE"),
        (2, "LAYER"),
        (5, "1"),
        (330, "0"),
        (100, "AcDbSymbolTable"),
        (70, "1"),
        (0, "LAYER"),
        (5, "2"),
        (330, "1"),
        (100, "AcDbSymbolTableRecord"),
        (100, "AcDbLayerTableRecord"),
        (2, "MyLayer"),
        (70, "0"),
        (62, "1"),
        (6, "CONTINUOUS"),
        (0, "ENDTAB"),
    ]
    .iter()
    .map(|(c, v)| (*c, v.to_string()))
    .collect();
    assert_eq!(pairs, expected);
}

#[test]
fn block_wraps_its_entities() {
    let mut doc = Document::new();
    doc.add_block("B1").unwrap();
    let first = Line::new(doc.handles(), Vector3::ZERO, Vector3::new(1.0, 0.0, 0.0));
    let second = Line::new(doc.handles(), Vector3::ZERO, Vector3::new(0.0, 1.0, 0.0));
    let first = doc.add_entity_to_block("B1", first).unwrap();
    let second = doc.add_entity_to_block("B1", second).unwrap();

    let pairs = parse_pairs(&doc.to_dxf_string());
    let blocks = records(section(&pairs, "BLOCKS"));
    let start = blocks
        .iter()
        .position(|r| r.name == "BLOCK" && r.get(2) == Some("B1"))
        .unwrap();
    let names: Vec<&str> = blocks[start..start + 4].iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["BLOCK", "LINE", "LINE", "ENDBLK"]);
    assert_eq!(blocks[start + 1].handle(), Some(first.value()));
    assert_eq!(blocks[start + 2].handle(), Some(second.value()));
    assert_eq!(blocks[start + 3].owner(), blocks[start].owner());
    assert_eq!(blocks[start + 3].get(8), blocks[start].get(8));

    // block entities stay out of ENTITIES
    assert!(records(section(&pairs, "ENTITIES")).is_empty());
}

#[test]
fn sections_in_fixed_order() {
    let doc = create_all_entities_document();
    let pairs = parse_pairs(&doc.to_dxf_string());
    assert_eq!(
        section_names(&pairs),
        ["HEADER", "TABLES", "BLOCKS", "ENTITIES", "OBJECTS"]
    );
}

#[test]
fn every_container_is_closed_once() {
    let doc = create_all_entities_document();
    let pairs = parse_pairs(&doc.to_dxf_string());
    assert_balanced(&pairs);

    let count = |name: &str| pairs.iter().filter(|p| p.0 == 0 && p.1 == name).count();
    assert_eq!(count("SECTION"), 5);
    assert_eq!(count("ENDSEC"), 5);
    assert_eq!(count("TABLE"), 9);
    assert_eq!(count("ENDTAB"), 9);
    // model space, paper space and the user block
    assert_eq!(count("BLOCK"), 3);
    assert_eq!(count("ENDBLK"), 3);
    assert_eq!(count("POLYLINE"), 1);
    assert_eq!(count("SEQEND"), 1);
    assert_eq!(count("EOF"), 1);
}

#[test]
fn tables_section_order() {
    let doc = Document::new();
    let pairs = parse_pairs(&doc.to_dxf_string());
    let tables: Vec<String> = records(section(&pairs, "TABLES"))
        .iter()
        .filter(|r| r.name == "TABLE")
        .map(|r| r.get(2).unwrap().to_string())
        .collect();
    assert_eq!(
        tables,
        ["VPORT", "LTYPE", "LAYER", "STYLE", "VIEW", "UCS", "APPID", "DIMSTYLE", "BLOCK_RECORD"]
    );
}

#[test]
fn entities_section_holds_model_space_in_order() {
    let doc = create_all_entities_document();
    let pairs = parse_pairs(&doc.to_dxf_string());
    let names: Vec<String> = records(section(&pairs, "ENTITIES"))
        .into_iter()
        .map(|r| r.name)
        .filter(|n| n != "VERTEX")
        .collect();
    assert_eq!(
        names,
        [
            "POINT", "LINE", "CIRCLE", "ARC", "ELLIPSE", "LWPOLYLINE", "POLYLINE", "SEQEND",
            "SPLINE", "TEXT", "3DFACE", "HATCH", "DIMENSION", "DIMENSION", "DIMENSION",
            "DIMENSION", "INSERT", "IMAGE",
        ]
    );
}

#[test]
fn current_layer_applies_to_new_entities() {
    let doc = create_all_entities_document();
    let pairs = parse_pairs(&doc.to_dxf_string());
    for record in records(section(&pairs, "ENTITIES")) {
        assert_eq!(record.get(8), Some("Geometry"), "{}", record.name);
    }
    let header = section(&pairs, "HEADER");
    let clayer = header.iter().position(|p| p.1 == "$CLAYER").unwrap();
    assert_eq!(header[clayer + 1], (8, "Geometry".to_string()));
}

#[test]
fn header_carries_managed_variables() {
    let mut doc = Document::new();
    doc.set_units(Units::Meters);
    doc.set_variable("$LTSCALE", [(40, 2.5)]).unwrap();
    let pairs = parse_pairs(&doc.to_dxf_string());
    let header = section(&pairs, "HEADER");
    let names: Vec<&str> = header
        .iter()
        .filter(|p| p.0 == 9)
        .map(|p| p.1.as_str())
        .collect();
    assert_eq!(names, ["$ACADVER", "$HANDSEED", "$INSUNITS", "$CLAYER", "$LTSCALE"]);
    assert_eq!(header[1], (1, "AC1021".to_string()));
    assert!(header.contains(&(70, "6".to_string())));
    assert!(header.contains(&(40, "2.5".to_string())));
}

#[test]
fn insert_refers_to_defined_block() {
    let doc = create_all_entities_document();
    let pairs = parse_pairs(&doc.to_dxf_string());
    let insert = records(section(&pairs, "ENTITIES"))
        .into_iter()
        .find(|r| r.name == "INSERT")
        .unwrap();
    assert_eq!(insert.get(2), Some(BLOCK_NAME));
    assert!(records(section(&pairs, "BLOCKS"))
        .iter()
        .any(|r| r.name == "BLOCK" && r.get(2) == Some(BLOCK_NAME)));
}

#[test]
fn rendering_is_repeatable() {
    let doc = create_all_entities_document();
    let writer = DxfWriter::new(&doc);
    let first = writer.write_to_string();
    assert_eq!(writer.write_to_string(), first);
    assert_eq!(String::from_utf8(writer.write_to_vec().unwrap()).unwrap(), first);
    assert!(!first.ends_with('\n'));
}
