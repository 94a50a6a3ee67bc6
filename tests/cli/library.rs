use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_library_found_from_nested_markup_root() -> Result<()> {
    let test = CliTest::with_library()?;
    test.write_file("packages/web/src/App.vue", "<template><b-card /></template>")?;

    assert_cmd_snapshot!(test.command().arg("packages/web/src"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    import Vue from 'vue';
    import { BCard } from 'bootstrap-vue';

    Vue.component('BCard', BCard);

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_library_not_found() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/App.vue", "<template><b-card /></template>")?;

    test.settings().bind(|| {
        assert_cmd_snapshot!(test.command().arg("src"), @r#"
        success: false
        exit_code: 1
        ----- stdout -----

        ----- stderr -----
        Error: Cannot find "node_modules/bootstrap-vue" above [PROJECT]/src; pass the path to the bootstrap-vue package as the second argument
        "#);
    });

    Ok(())
}

#[test]
fn test_explicit_package_root() -> Result<()> {
    let test = CliTest::new()?;
    test.install_library("vendor/bootstrap-vue")?;
    test.write_file("src/App.vue", "<template><div v-b-toggle /></template>")?;

    assert_cmd_snapshot!(test.command().args(["src", "vendor/bootstrap-vue"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    import Vue from 'vue';
    import { VBToggle } from 'bootstrap-vue';

    Vue.directive('b-toggle', VBToggle);

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_explicit_dependency_folder() -> Result<()> {
    let test = CliTest::new()?;
    test.install_library("deps/bootstrap-vue")?;
    test.write_file("src/App.vue", "<template><b-button /></template>")?;

    assert_cmd_snapshot!(test.command().args(["src", "deps"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    import Vue from 'vue';
    import { BButton } from 'bootstrap-vue';

    Vue.component('BButton', BButton);

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_helper_exports_are_not_directives() -> Result<()> {
    let test = CliTest::with_library()?;
    test.write_file(
        "src/App.vue",
        "<template><div v-b-tooltip-helper v-b-tooltip /></template>",
    )?;

    assert_cmd_snapshot!(test.command().arg("src"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    import Vue from 'vue';
    import { VBTooltip } from 'bootstrap-vue';

    Vue.directive('b-tooltip', VBTooltip);

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_library_without_components_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("node_modules/bootstrap-vue/package.json", "{}")?;
    test.write_file("src/App.vue", "<template><b-card /></template>")?;

    let output = test.command().arg("src").output()?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Failed to read component declarations"));

    Ok(())
}
