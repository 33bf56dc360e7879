//! End-to-end pipeline tests over a realistic temporary project tree.

use std::fs;
use std::path::Path;

use stringsync::{Error, ProjectPaths, sync_project};

fn utf16le(text: &str, bom: bool) -> Vec<u8> {
    let mut bytes = Vec::new();
    if bom {
        bytes.extend_from_slice(&[0xFF, 0xFE]);
    }
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    bytes
}

fn decode_utf16le(bytes: &[u8]) -> String {
    let body = bytes.strip_prefix(&[0xFF, 0xFE][..]).unwrap_or(bytes);
    let units: Vec<u16> = body
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).unwrap()
}

/// Lays out Resources/ and Source/ the way the plug-in project does.
fn write_project(root: &Path) -> ProjectPaths {
    let paths = ProjectPaths::from_root(root, "BaseElements");

    fs::create_dir_all(paths.strings.parent().unwrap()).unwrap();
    fs::create_dir_all(paths.version_header.parent().unwrap()).unwrap();

    fs::write(
        &paths.strings,
        "\
/* BaseElements.strings */

\"1\" = \"BaseElements\";
\"102\" = \"BE_Version ( ) | version | Returns the plug-in version.\";
\"110\" = \"BE_FileSize ( path )\";
",
    )
    .unwrap();

    let rc_text = concat!(
        "// Microsoft Visual C++ generated resource script.\r\n",
        "STRINGTABLE\r\n",
        "BEGIN\r\n",
        "    102                  \"stale windows text\"\r\n",
        "    110                  \"also stale\"\r\n",
        "    999                  \"BE_Removed ( )\"\r\n",
        "END\r\n",
    );
    fs::write(&paths.rc, utf16le(rc_text, true)).unwrap();

    fs::write(
        &paths.version_header,
        "#define VERSION_NUMBER 4002001\n#define VERSION_STRING \"4.2.1\"\n",
    )
    .unwrap();

    paths
}

#[test]
fn sync_rewrites_windows_and_generates_linux() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_project(dir.path());

    let summary = sync_project(&paths, false).unwrap();
    assert_eq!(summary.functions, 3);
    assert_eq!(summary.version, "4.2.1");
    assert_eq!(summary.windows.rewritten, 2);
    assert_eq!(summary.windows.dropped, 1);
    assert_eq!(summary.windows.comments, 1);
    // STRINGTABLE, BEGIN, END
    assert_eq!(summary.windows.preserved, 3);

    let rc_bytes = fs::read(&paths.rc).unwrap();
    assert_eq!(&rc_bytes[..2], &[0xFF, 0xFE]);
    let rc_text = decode_utf16le(&rc_bytes);
    assert!(rc_text.starts_with("// Microsoft Visual C++ generated resource script.\r\n"));
    assert!(rc_text.contains(
        "    102                  \"BE_Version ( )|version|Returns the plug-in version.\"\r\n"
    ));
    assert!(rc_text.contains("    110                  \"BE_FileSize ( path )\"\r\n"));
    assert!(!rc_text.contains("BE_Removed"));
    assert!(rc_text.contains("STRINGTABLE\r\n"));

    let header = fs::read_to_string(&paths.linux_header).unwrap();
    assert!(header.contains("\t{ 1, \"BaseElements\" },\n"));
    assert!(header.contains("\t{ 102, \"BE_Version ( )\" },\n"));
    assert!(header.contains("\t{ 110, \"BE_FileSize ( path )\" },\n"));
    assert!(header.contains("PLUGIN_DESCRIPTION_STRING_ID"));
    assert!(header.contains("Version: 4.2.1"));
    assert!(header.contains("#endif // BASEELEMENTSLINUXFUNCTIONSTRINGS_H"));
}

#[test]
fn linux_generation_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_project(dir.path());

    sync_project(&paths, false).unwrap();
    let first = fs::read(&paths.linux_header).unwrap();
    let first_rc = fs::read(&paths.rc).unwrap();

    sync_project(&paths, false).unwrap();
    assert_eq!(fs::read(&paths.linux_header).unwrap(), first);
    // A second pass over already-synced Windows lines changes nothing either.
    assert_eq!(fs::read(&paths.rc).unwrap(), first_rc);
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_project(dir.path());
    let rc_before = fs::read(&paths.rc).unwrap();

    let summary = sync_project(&paths, true).unwrap();
    assert_eq!(summary.windows.rewritten, 2);
    assert_eq!(fs::read(&paths.rc).unwrap(), rc_before);
    assert!(!paths.linux_header.exists());
}

#[test]
fn missing_strings_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_project(dir.path());
    fs::remove_file(&paths.strings).unwrap();

    let err = sync_project(&paths, false).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn missing_version_token_aborts_before_any_write() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_project(dir.path());
    fs::write(&paths.version_header, "// no version macro here\n").unwrap();
    let rc_before = fs::read(&paths.rc).unwrap();

    let err = sync_project(&paths, false).unwrap_err();
    assert!(matches!(err, Error::VersionNotFound { .. }));
    // The Windows file must not be half-updated when generation aborts.
    assert_eq!(fs::read(&paths.rc).unwrap(), rc_before);
    assert!(!paths.linux_header.exists());
}
