use std::fs;

use nested_helix::config::{ConfigError, load_parameter_sets};
use nested_helix::formula::HelixRequest;

const YAML_SETS: &str = r#"
- name: reference
  primary:
    initial_radius: 1.0
    final_radius: 2.0
    height: 10.0
    turns: 3.0
  secondary:
    initial_radius: 0.1
    final_radius: 0.2
    turns: 5.0
  range:
    start: 0.0
    end: 1.0
- primary:
    initial_radius: 4.0
    final_radius: 2.0
    height: 20.0
    turns: 6
  secondary:
    initial_radius: 0.5
    final_radius: 0.5
    turns: 12
  range:
    start: -1.0
    end: 1.0
"#;

const TOML_SET: &str = r#"
name = "coil"

[primary]
initial_radius = 3.0
final_radius = 3.5
height = 8.0
turns = 4.0

[secondary]
initial_radius = 0.25
final_radius = 0.75
turns = 20.0

[range]
start = 0.0
end = 2.0
"#;

#[test]
fn yaml_list_loads_every_set() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("sets.yaml");
    fs::write(&path, YAML_SETS).expect("write yaml");

    let sets = load_parameter_sets(&path).expect("parameter sets");
    assert_eq!(sets.len(), 2);
    assert_eq!(sets[0].name.as_deref(), Some("reference"));
    assert!(sets[1].name.is_none());
    assert_eq!(sets[1].secondary.turns, 12.0);

    let request = HelixRequest::from(&sets[0]);
    assert_eq!(
        request,
        HelixRequest {
            r0: 1.0,
            r1: 2.0,
            h: 10.0,
            n: 3.0,
            rs0: 0.1,
            rs1: 0.2,
            m: 5.0,
            t1: 0.0,
            t2: 1.0,
        }
    );
}

#[test]
fn toml_file_is_a_single_set() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("coil.toml");
    fs::write(&path, TOML_SET).expect("write toml");

    let sets = load_parameter_sets(&path).expect("parameter sets");
    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].name.as_deref(), Some("coil"));
    assert_eq!(sets[0].range.end, 2.0);
}

#[test]
fn directory_reads_toml_files_in_name_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("b.toml"), TOML_SET.replace("coil", "second")).expect("write b");
    fs::write(dir.path().join("a.toml"), TOML_SET.replace("coil", "first")).expect("write a");
    fs::write(dir.path().join("notes.txt"), "ignored").expect("write txt");
    fs::create_dir(dir.path().join("nested.toml")).expect("create dir");

    let sets = load_parameter_sets(dir.path()).expect("parameter sets");
    let names: Vec<_> = sets.iter().filter_map(|s| s.name.as_deref()).collect();
    assert_eq!(names, ["first", "second"]);
}

#[test]
fn missing_field_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.yaml");
    fs::write(&path, "- primary:\n    initial_radius: 1.0\n").expect("write yaml");

    match load_parameter_sets(&path) {
        Err(ConfigError::Parse(_)) => {}
        other => panic!("expected YAML parse error, got {other:?}"),
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    match load_parameter_sets(dir.path().join("absent.yaml")) {
        Err(ConfigError::Io(_)) => {}
        other => panic!("expected I/O error, got {other:?}"),
    }
}
