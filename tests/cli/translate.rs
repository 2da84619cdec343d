use anyhow::Result;
use insta::with_settings;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, output_filters};

const PROGRAM: &str = "\
import math
function area args r
return math.pi * r * r
end
store call area(2) in a
print a
";

#[test]
fn test_translate_writes_output_file() -> Result<()> {
    let test = CliTest::with_file("area.pfd", PROGRAM)?;

    assert_cmd_snapshot!(test.translate_command("area.pfd", "area.py"), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    ");

    assert_eq!(
        test.read_file("area.py")?,
        "import math\ndef area(r):\n    return math.pi * r * r\n\na = area(2)\nprint(a)"
    );

    Ok(())
}

#[test]
fn test_compile_flag_is_accepted() -> Result<()> {
    let test = CliTest::with_file("hello.pfd", "print \"hi\"")?;

    assert_cmd_snapshot!(test.command().args(["-c", "hello.pfd", "hello.py"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    ");

    assert_eq!(test.read_file("hello.py")?, "print(\"hi\")");

    Ok(())
}

#[test]
fn test_rejects_wrong_input_extension() -> Result<()> {
    let test = CliTest::with_file("hello.txt", "print 1")?;

    assert_cmd_snapshot!(test.translate_command("hello.txt", "hello.py"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Input file must have a .pfd extension
    ");

    assert!(!test.root().join("hello.py").exists());

    Ok(())
}

#[test]
fn test_extension_match_is_case_sensitive() -> Result<()> {
    let test = CliTest::with_file("hello.PFD", "print 1")?;

    assert_cmd_snapshot!(test.translate_command("hello.PFD", "hello.py"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Input file must have a .pfd extension
    ");

    Ok(())
}

#[test]
fn test_rejects_wrong_output_extension() -> Result<()> {
    let test = CliTest::with_file("hello.pfd", "print 1")?;

    assert_cmd_snapshot!(test.translate_command("hello.pfd", "hello.txt"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Output file must have a .py extension
    ");

    assert!(!test.root().join("hello.txt").exists());

    Ok(())
}

#[test]
fn test_missing_input_file_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    with_settings!({ filters => output_filters() }, {
        assert_cmd_snapshot!(test.translate_command("missing.pfd", "out.py"), @r"
        success: false
        exit_code: 2
        ----- stdout -----

        ----- stderr -----
        Error: Failed to read file: missing.pfd: [OS ERROR]
        ");
    });

    Ok(())
}

#[test]
fn test_malformed_lines_become_comments() -> Result<()> {
    let test = CliTest::with_file("broken.pfd", "if x\nprint x\nfor i up to 3\nend")?;

    // Failures are only visible in the generated file unless -v is given.
    assert_cmd_snapshot!(test.translate_command("broken.pfd", "broken.py"), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    ");

    assert_eq!(
        test.read_file("broken.py")?,
        "# Error: Malformed line - expected 'then' in 'if' statement\nprint(x)\nfor i in range(3):\n"
    );

    Ok(())
}

#[test]
fn test_verbose_reports_diagnostics() -> Result<()> {
    let test = CliTest::with_file("broken.pfd", "print a\nstore b\n")?;

    assert_cmd_snapshot!(test.command().args(["-v", "broken.pfd", "broken.py"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    config: no .pfdrc.json found, using defaults
    warning: expected 'in' in 'store' statement  malformed-line
      --> broken.pfd:2:1
      |
    2 | store b
      | ^^^^^

    ✘ Translated 2 lines from broken.pfd to broken.py (1 with errors)
    ");

    Ok(())
}

#[test]
fn test_verbose_clean_translation() -> Result<()> {
    let test = CliTest::with_file("loop.pfd", "for i from 1 to 4\nprint i\nend")?;

    assert_cmd_snapshot!(test.command().args(["--verbose", "loop.pfd", "loop.py"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    config: no .pfdrc.json found, using defaults
    ✓ Translated 3 lines from loop.pfd to loop.py
    ");

    Ok(())
}

#[test]
fn test_unwritable_output_is_an_error() -> Result<()> {
    let test = CliTest::with_file("hello.pfd", "print 1")?;

    with_settings!({ filters => output_filters() }, {
        assert_cmd_snapshot!(test.translate_command("hello.pfd", "no/such/dir/hello.py"), @r"
        success: false
        exit_code: 2
        ----- stdout -----

        ----- stderr -----
        Error: Failed to write file: no/such/dir/hello.py: [OS ERROR]
        ");
    });

    Ok(())
}
