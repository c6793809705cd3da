use cgmath::vec3;
use tableau::data_structures::material::{Material, MaterialTable};

#[test]
fn empty_table_reports_not_found() {
    let table = MaterialTable::new();
    assert!(table.find("glass").is_none());
}

#[test]
fn find_returns_the_defined_material() {
    let mut table = MaterialTable::new();
    table.define(Material::new(
        "glass",
        vec3(1.0, 1.0, 1.0),
        vec3(0.95, 0.95, 0.95),
        120.0,
    ));

    let material = table.find("glass").expect("tag must resolve");
    assert_eq!(material.diffuse, vec3(1.0, 1.0, 1.0));
    assert_eq!(material.shininess, 120.0);
    assert!(table.find("bread").is_none());
}

#[test]
fn duplicate_tags_resolve_to_the_first_definition() {
    let mut table = MaterialTable::new();
    table.define(Material::new(
        "bread",
        vec3(0.9, 0.7, 0.4),
        vec3(0.1, 0.1, 0.1),
        2.0,
    ));
    table.define(Material::new(
        "bread",
        vec3(0.0, 0.0, 0.0),
        vec3(0.0, 0.0, 0.0),
        99.0,
    ));

    assert_eq!(table.len(), 2);
    let material = table.find("bread").unwrap();
    assert_eq!(material.shininess, 2.0, "first match must win");
}
