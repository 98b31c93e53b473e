use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const POINT_MODEL: &str = r#"
package: com.example.geo
classes:
  - name: Point
    fields:
      - name: x
        type: int
      - name: y
        type: int
"#;

fn xbind(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_xbind"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run xbind")
}

fn workspace() -> tempfile::TempDir {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("model.yaml"), POINT_MODEL).unwrap();
    tmp
}

#[test]
fn generate_with_default_style() {
    let tmp = workspace();
    let output = xbind(
        tmp.path(),
        &["generate", "-i", "model.yaml", "-o", "out", "--", "-Xcommons-lang"],
    );
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let source = fs::read_to_string(tmp.path().join("out/com/example/geo/Point.java")).unwrap();
    assert!(source.contains("ToStringBuilder.reflectionToString(this, ToStringStyle.MULTI_LINE_STYLE)"));
    assert!(source.contains("EqualsBuilder.reflectionEquals(this, that)"));
    assert!(source.contains("HashCodeBuilder.reflectionHashCode(this)"));
}

#[test]
fn generate_without_plugin_has_no_methods() {
    let tmp = workspace();
    let output = xbind(tmp.path(), &["generate", "-i", "model.yaml", "-o", "out"]);
    assert!(output.status.success());

    let source = fs::read_to_string(tmp.path().join("out/com/example/geo/Point.java")).unwrap();
    assert!(!source.contains("toString"));
}

#[test]
fn config_supplies_plugin_args_and_classpath() {
    let tmp = workspace();
    fs::write(
        tmp.path().join(".xbind.yaml"),
        r#"
output: src/generated
plugin_args:
  - -Xcommons-lang:ToStringStyle=com.example.MyStyle
classpath:
  - name: com.example.MyStyle
    extends: org.apache.commons.lang3.builder.ToStringStyle
"#,
    )
    .unwrap();

    let output = xbind(tmp.path(), &["generate"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let source =
        fs::read_to_string(tmp.path().join("src/generated/com/example/geo/Point.java")).unwrap();
    assert!(source.contains("import com.example.MyStyle;"));
    assert!(source.contains("ToStringBuilder.reflectionToString(this, new MyStyle())"));
}

#[test]
fn unknown_style_fails_build() {
    let tmp = workspace();
    let output = xbind(
        tmp.path(),
        &[
            "generate",
            "-i",
            "model.yaml",
            "-o",
            "out",
            "--",
            "-Xcommons-lang:ToStringStyle=NoSuchStyle",
        ],
    );
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("class not found: NoSuchStyle"), "stderr: {stderr}");
    assert!(!tmp.path().join("out").exists());
}

#[test]
fn unrecognized_plugin_arg_fails() {
    let tmp = workspace();
    let output = xbind(
        tmp.path(),
        &["generate", "-i", "model.yaml", "--", "-Xbogus"],
    );
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unrecognized parameter -Xbogus"));
}

#[test]
fn usage_lists_styles() {
    let tmp = tempfile::tempdir().unwrap();
    let output = xbind(tmp.path(), &["usage"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("-Xcommons-lang"));
    assert!(stdout.contains("SHORT_PREFIX_STYLE"));
    assert!(stdout.contains("ToStringStyle subtype"));
}

#[test]
fn inspect_json_lists_methods() {
    let tmp = workspace();
    let output = xbind(
        tmp.path(),
        &[
            "inspect",
            "-i",
            "model.yaml",
            "--format",
            "json",
            "--",
            "-Xcommons-lang",
        ],
    );
    assert!(output.status.success());
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let methods = &summary["classes"][0]["methods"];
    assert_eq!(
        methods,
        &serde_json::json!([
            "public String toString()",
            "public boolean equals(Object that)",
            "public int hashCode()"
        ])
    );
}

#[test]
fn inspect_lists_classpath_types() {
    let tmp = workspace();
    fs::write(
        tmp.path().join(".xbind.yaml"),
        "classpath:\n  - name: \" com.example.MyStyle\"\n    extends: org.apache.commons.lang3.builder.ToStringStyle\n",
    )
    .unwrap();

    let output = xbind(
        tmp.path(),
        &[
            "inspect",
            "-i",
            "model.yaml",
            "--format",
            "json",
            "--",
            "-Xcommons-lang:ToStringStyle=com.example.MyStyle",
        ],
    );
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        summary["classpath"],
        serde_json::json!([
            "java.lang.Object",
            "com.example.MyStyle",
            "org.apache.commons.lang3.builder.ToStringStyle"
        ])
    );
}

#[test]
fn init_refuses_to_overwrite() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(xbind(tmp.path(), &["init"]).status.success());
    assert!(tmp.path().join(".xbind.yaml").exists());
    assert!(!xbind(tmp.path(), &["init"]).status.success());
    assert!(xbind(tmp.path(), &["init", "--force"]).status.success());
}
