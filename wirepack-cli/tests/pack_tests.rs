use std::fs;
use tempfile::tempdir;

use wirepack_cli::commands::pack;

fn write_file<P: AsRef<std::path::Path>>(p: P, s: &str) {
    fs::write(p, s.as_bytes()).unwrap();
}

#[test]
fn pack_basic_layout() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("in.json");
    let out_path = td.path().join("out.bin");

    write_file(&in_path, r#"[4660, 287454020, true]"#);

    pack::execute(
        "u16,u32,bool",
        in_path.to_str().unwrap(),
        out_path.to_str().unwrap(),
        /*hex_out*/ false,
        /*target_size*/ None,
    )
    .unwrap();

    let bytes = fs::read(&out_path).unwrap();
    assert_eq!(bytes, vec![0x12, 0x34, 0x11, 0x22, 0x33, 0x44, 0x01]);
}

#[test]
fn pack_hex_output() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("in.json");
    let out_path = td.path().join("out.hex");

    write_file(&in_path, r#"[4660]"#);

    pack::execute(
        "u16",
        in_path.to_str().unwrap(),
        out_path.to_str().unwrap(),
        /*hex_out*/ true,
        /*target_size*/ None,
    )
    .unwrap();

    let text = fs::read_to_string(&out_path).unwrap();
    assert_eq!(text.trim(), "1234");
}

#[test]
fn pack_bytes_field_from_hex_string() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("in.json");
    let out_path = td.path().join("out.bin");

    write_file(&in_path, r#"[7, "deadbeef"]"#);

    pack::execute(
        "u8,bytes:4",
        in_path.to_str().unwrap(),
        out_path.to_str().unwrap(),
        false,
        None,
    )
    .unwrap();

    let bytes = fs::read(&out_path).unwrap();
    assert_eq!(bytes, vec![0x07, 0xDE, 0xAD, 0xBE, 0xEF]);
}

#[test]
fn pack_respects_target_size() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("in.json");
    let out_path = td.path().join("out.bin");

    write_file(&in_path, r#"[2, 3]"#);

    // u32 + u16 is 6 bytes, matching the target
    pack::execute(
        "u32,u16",
        in_path.to_str().unwrap(),
        out_path.to_str().unwrap(),
        false,
        Some(6),
    )
    .unwrap();
    assert_eq!(fs::read(&out_path).unwrap().len(), 6);

    // The same values against a wrong target must fail
    let result = pack::execute(
        "u32,u16",
        in_path.to_str().unwrap(),
        out_path.to_str().unwrap(),
        false,
        Some(7),
    );
    assert!(result.is_err());
}

#[test]
fn pack_rejects_out_of_range_values() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("in.json");
    let out_path = td.path().join("out.bin");

    write_file(&in_path, r#"[70000]"#);

    let result = pack::execute(
        "u16",
        in_path.to_str().unwrap(),
        out_path.to_str().unwrap(),
        false,
        None,
    );
    assert!(result.is_err());
}

#[test]
fn pack_rejects_value_count_mismatch() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("in.json");
    let out_path = td.path().join("out.bin");

    write_file(&in_path, r#"[1, 2, 3]"#);

    let result = pack::execute(
        "u16,u16",
        in_path.to_str().unwrap(),
        out_path.to_str().unwrap(),
        false,
        None,
    );
    assert!(result.is_err());
}
