// CLI integration tests: decode real files end to end.
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_bindec"))
}

fn run(args: &[&str]) -> Output {
    cmd().args(args).output().expect("spawn bindec")
}

fn write_pear(path: &Path, pairs: &[(u32, u32)], trailing: usize) {
    let mut data = vec![0u8; 0x140];
    for (t, i) in pairs {
        data.extend_from_slice(&t.to_le_bytes());
        data.extend_from_slice(&i.to_le_bytes());
    }
    data.extend(std::iter::repeat_n(0xAB, trailing));
    data.extend(std::iter::repeat_n(0u8, 0x1e0));
    std::fs::write(path, data).expect("write pear");
}

fn write_scale(path: &Path, times: &[f32], raw: u32) {
    let mut data = vec![0u8; 0x200];
    for t in times {
        data.extend_from_slice(&[0x48, 0x48]);
        data.extend_from_slice(&t.to_le_bytes());
        for _ in 0..18 {
            data.extend_from_slice(&raw.to_be_bytes());
        }
    }
    std::fs::write(path, data).expect("write scale");
}

#[test]
fn pear_export_writes_indexed_csv() {
    let temp = tempfile::tempdir().expect("tempdir");
    let input = temp.path().join("sample.pear");
    write_pear(&input, &[(0, 1), (250, 4_000_000_000)], 5);

    let out = run(&["pear", input.to_str().unwrap()]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let csv = std::fs::read_to_string(temp.path().join("sample.pear.csv")).expect("csv");
    assert_eq!(csv, ",Time (ms),Intensity\n0,0,1\n1,250,4000000000\n");
}

#[test]
fn scale_export_matches_expected_layout() {
    let temp = tempfile::tempdir().expect("tempdir");
    let input = temp.path().join("sample.scale");
    write_scale(&input, &[1.0, 12.345678], 40);

    let out = run(&["scale", input.to_str().unwrap()]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let csv = std::fs::read_to_string(temp.path().join("sample.scale.csv")).expect("csv");
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines[0],
        "Time (min),190,200,210,220,230,240,250,260,270,280,290,300,310,320,330,340,350,360"
    );
    assert_eq!(lines[1], format!("1.0000{}", ",2".repeat(18)));
    assert_eq!(lines[2], format!("12.3457{}", ",2".repeat(18)));
    assert_eq!(lines.len(), 3);
}

#[test]
fn scale_expose_marker_and_custom_out() {
    let temp = tempfile::tempdir().expect("tempdir");
    let input = temp.path().join("m.scale");
    let target = temp.path().join("custom.csv");
    write_scale(&input, &[0.25], 0xFFFF_FFFF);

    let out = run(&[
        "scale",
        input.to_str().unwrap(),
        "--expose-marker",
        "--out",
        target.to_str().unwrap(),
    ]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(!temp.path().join("m.scale.csv").exists());

    let csv = std::fs::read_to_string(&target).expect("csv");
    let lines: Vec<&str> = csv.lines().collect();
    assert!(lines[0].starts_with("Marker,Time (min),190,"));
    assert_eq!(lines[1], format!("4848,0.2500{}", ",-1".repeat(18)));
}

#[test]
fn export_is_byte_identical_on_rerun() {
    let temp = tempfile::tempdir().expect("tempdir");
    let input = temp.path().join("again.pear");
    write_pear(&input, &[(1, 2), (3, 4), (5, 6)], 0);
    let csv = temp.path().join("again.pear.csv");

    assert!(run(&["pear", input.to_str().unwrap()]).status.success());
    let first = std::fs::read(&csv).expect("first");
    assert!(run(&["pear", input.to_str().unwrap()]).status.success());
    assert_eq!(std::fs::read(&csv).expect("second"), first);
}

#[test]
fn directory_batch_exports_every_file() {
    let temp = tempfile::tempdir().expect("tempdir");
    let dir = temp.path().join("runs");
    std::fs::create_dir(&dir).expect("mkdir");
    write_pear(&dir.join("a.bin"), &[(1, 1)], 0);
    write_pear(&dir.join("b.bin"), &[(2, 2), (3, 3)], 0);

    let out = run(&["pear", dir.to_str().unwrap()]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(dir.join("a.bin.csv").exists());
    assert!(dir.join("b.bin.csv").exists());
}

#[test]
fn header_size_flag_accepts_hex() {
    let temp = tempfile::tempdir().expect("tempdir");
    let input = temp.path().join("raw.bin");
    let mut data = vec![0u8; 0x10];
    data.extend_from_slice(&9u32.to_le_bytes());
    data.extend_from_slice(&8u32.to_le_bytes());
    std::fs::write(&input, data).expect("write");

    let out = run(&[
        "pear",
        input.to_str().unwrap(),
        "--header-size",
        "0x10",
        "--footer-size",
        "0",
    ]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let csv = std::fs::read_to_string(temp.path().join("raw.bin.csv")).expect("csv");
    assert_eq!(csv, ",Time (ms),Intensity\n0,9,8\n");
}

#[test]
fn missing_input_fails_without_output() {
    let temp = tempfile::tempdir().expect("tempdir");
    let input = temp.path().join("nope.pear");
    let out = run(&["pear", input.to_str().unwrap()]);
    assert!(!out.status.success());
    assert!(!temp.path().join("nope.pear.csv").exists());
}

#[test]
fn prompts_for_path_when_none_given() {
    let temp = tempfile::tempdir().expect("tempdir");
    let input = temp.path().join("prompted.pear");
    write_pear(&input, &[(7, 7)], 0);

    let mut child = cmd()
        .arg("pear")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(format!("{}\n", input.display()).as_bytes())
        .expect("write stdin");
    let out = child.wait_with_output().expect("wait");
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(String::from_utf8_lossy(&out.stdout).starts_with("Enter the path to the binary file: "));
    assert!(temp.path().join("prompted.pear.csv").exists());
}

#[test]
fn inspect_reports_records_and_dropped_bytes() {
    let temp = tempfile::tempdir().expect("tempdir");
    let input = temp.path().join("i.pear");
    write_pear(&input, &[(1, 1), (2, 2)], 3);

    let out = run(&["inspect", "pear", input.to_str().unwrap()]);
    assert!(out.status.success());
    let text = String::from_utf8_lossy(&out.stdout);
    assert!(text.contains("records=2"), "{text}");
    assert!(text.contains("dropped=3"), "{text}");

    let out = run(&["inspect", "pear", input.to_str().unwrap(), "--json"]);
    assert!(out.status.success());
    let doc: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json");
    assert_eq!(doc["format"], "pear");
    assert_eq!(doc["layout"]["header_size"], 320);
    assert_eq!(doc["body"]["records"], 2);
    assert_eq!(doc["body"]["remainder"], 3);
}
