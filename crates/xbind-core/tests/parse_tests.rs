use xbind_core::error::TransformError;
use xbind_core::model::{JType, Primitive};
use xbind_core::{parse, transform};

const GEOMETRY: &str = include_str!("fixtures/geometry.yaml");
const PURCHASE_ORDER: &str = include_str!("fixtures/purchase-order.json");

#[test]
fn parse_geometry_yaml() {
    let file = parse::from_yaml(GEOMETRY).unwrap();
    assert_eq!(file.package, "com.example.geo");
    assert_eq!(file.classes.len(), 2);
    assert_eq!(file.classes[0].fields[0].field_type, "int");
}

#[test]
fn transform_geometry() {
    let file = parse::from_yaml(GEOMETRY).unwrap();
    let model = transform::transform(&file).unwrap();

    assert_eq!(model.package, "com.example.geo");
    let point = model.class("Point").expect("should have Point");
    assert_eq!(point.description.as_deref(), Some("A point on the plane."));
    assert_eq!(point.fields.len(), 2);
    assert_eq!(point.fields[0].ty, JType::Primitive(Primitive::Int));
    assert!(point.methods.is_empty());

    let polygon = model.class("Polygon").expect("polygon should be PascalCased");
    assert_eq!(polygon.fields[0].ty.to_string(), "List<Point>");
    assert_eq!(polygon.fields[1].description.as_deref(), Some("Display label."));
}

#[test]
fn transform_purchase_order_json() {
    let file = parse::from_json(PURCHASE_ORDER).unwrap();
    let model = transform::transform(&file).unwrap();

    let names: Vec<&str> = model.classes().map(|c| c.name.simple()).collect();
    assert_eq!(names, vec!["PurchaseOrderType", "UsAddress", "Items"]);

    let order = model.class("PurchaseOrderType").unwrap();
    assert_eq!(order.fields[1].name, "orderDate");
    assert_eq!(order.fields[1].ty.to_string(), "XMLGregorianCalendar");
}

#[test]
fn duplicate_classes_rejected() {
    let yaml = "classes:\n  - name: point\n  - name: Point\n";
    let file = parse::from_yaml(yaml).unwrap();
    let err = transform::transform(&file).unwrap_err();
    assert!(matches!(err, TransformError::DuplicateClass(ref name) if name == "Point"));
}

#[test]
fn duplicate_fields_rejected() {
    let yaml = r#"
classes:
  - name: Point
    fields:
      - name: first_name
        type: String
      - name: firstName
        type: String
"#;
    let file = parse::from_yaml(yaml).unwrap();
    let err = transform::transform(&file).unwrap_err();
    assert_eq!(err.to_string(), "duplicate field firstName in class Point");
}

#[test]
fn invalid_field_type_rejected() {
    let yaml = "classes:\n  - name: A\n    fields:\n      - name: b\n        type: List<\n";
    let file = parse::from_yaml(yaml).unwrap();
    let err = transform::transform(&file).unwrap_err();
    assert!(matches!(err, TransformError::InvalidFieldType { .. }));
}

#[test]
fn malformed_yaml_is_parse_error() {
    assert!(parse::from_yaml("classes: [").is_err());
    assert!(parse::from_json("{").is_err());
}
