// tests/variants_e2e.rs
use std::fs;
use std::path::PathBuf;

use catalog_tools::config::options::{ExportFormat, ExportOptions, OutputEncoding, VariantOptions};
use catalog_tools::file;
use catalog_tools::variants::build_variants;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("catalog_tools_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

const SHIRTS: &str = "\
[PRODUCT_CODE];[VARIANT_YN];[VARIANT_CODE];[MAIN_YN];[ACTIVE_YN];[TITLE];[CATEGORIES];[IMAGES];[PARAMETER „Veľkosť“];[PARAMETER „Materiál“];[LABEL_ACTIVE_YN „Novinka“];[PRICE_ORIGINAL]
TS-S;0;;1;1;Tričko S;Oblečenie;img1.jpg;S;bavlna;1;19,90
TS-M;0;;1;1;Tričko M;Oblečenie;img2.jpg|img1.jpg;M;bavlna;1;19,90
TS-L;0;;1;1;Tričko L;Oblečenie;img3.jpg;L;bavlna;0;21,90
";

#[test]
fn csv_round_trip_builds_main_and_variants() {
    let dir = tmp_dir("round_trip");
    let input = dir.join("shirts.csv");
    fs::write(&input, SHIRTS).unwrap();

    let (ds, src) = file::read_table(&input).unwrap();
    assert_eq!(src.delimiter, Some(';'));
    assert_eq!(src.encoding, "utf-8");
    assert_eq!(ds.row_count(), 3);

    let opts = VariantOptions {
        param: Some(s("Veľkosť")),
        title: Some(s("Tričko")),
        ..Default::default()
    };
    let build = build_variants(&ds, &opts).unwrap();
    assert_eq!(build.parent_code, "TS-S");
    assert_eq!(build.param.as_deref(), Some("[PARAMETER „Veľkosť“]"));
    assert_eq!(build.common, vec![s("[PARAMETER „Materiál“]")]);

    let export = ExportOptions::default();
    let out = export.out_path_for(&input, src.is_spreadsheet());
    assert_eq!(out, dir.join("shirts_variants.csv"));

    let sep = export.format.delim(src.delimiter);
    file::write_table(&build.dataset, &out, sep, &export.encoding).unwrap();

    let text = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], SHIRTS.lines().next().unwrap());
    // merged image list contains the separator, so it is quoted
    assert_eq!(lines[1], "TS-S;0;;;1;Tričko;Oblečenie;\"img1.jpg;img2.jpg;img3.jpg\";;bavlna;0;19,90");
    assert_eq!(lines[2], "TS-S;1;TS-S;0;1;;;img1.jpg;S;;0;19,90");
    assert_eq!(lines[3], "TS-S;1;TS-M;0;1;;;img2.jpg;M;;0;19,90");
    assert_eq!(lines[4], "TS-S;1;TS-L;0;1;;;img3.jpg;L;;0;21,90");

    // output parses back to the same table
    let (again, _) = file::read_table(&out).unwrap();
    assert_eq!(again, build.dataset);
}

#[test]
fn cp1250_input_with_bom_output() {
    let dir = tmp_dir("cp1250");
    let input = dir.join("legacy.csv");
    // "[PRODUCT_CODE],[TITLE]\nA1,Veľkosť\n" in windows-1250
    let mut raw = b"[PRODUCT_CODE],[TITLE]\nA1,Ve".to_vec();
    raw.push(0xBE);
    raw.extend_from_slice(b"kos");
    raw.push(0x9D);
    raw.push(b'\n');
    fs::write(&input, raw).unwrap();

    let (ds, src) = file::read_table(&input).unwrap();
    assert_eq!(src.encoding, "cp1250");
    assert_eq!(src.delimiter, Some(','));
    assert_eq!(ds.rows[0][1], "Veľkosť");

    let build = build_variants(&ds, &VariantOptions::default()).unwrap();
    let out = dir.join("nested").join("out.tsv");
    let sep = ExportFormat::Tsv.delim(src.delimiter);
    file::write_table(&build.dataset, &out, sep, &OutputEncoding::Utf8Bom).unwrap();

    let bytes = fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"\xEF\xBB\xBF[PRODUCT_CODE]\t[TITLE]\n"));
    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    assert_eq!(text, "[PRODUCT_CODE]\t[TITLE]\nA1\tVeľkosť\nA1\t\n");
}

#[test]
fn missing_input_names_the_path() {
    let dir = tmp_dir("missing");
    let input = dir.join("nope.csv");
    let err = file::read_table(&input).unwrap_err().to_string();
    assert!(err.contains("nope.csv"), "{err}");
}

#[test]
fn unknown_output_encoding_is_an_error() {
    let dir = tmp_dir("bad_encoding");
    let input = dir.join("in.csv");
    fs::write(&input, "[PRODUCT_CODE]\nA\n").unwrap();
    let (ds, _) = file::read_table(&input).unwrap();
    let res = file::write_table(&ds, &dir.join("out.csv"), ',', &OutputEncoding::Label(s("klingon")));
    assert!(res.is_err());
}

fn s(v: &str) -> String {
    v.to_string()
}
