use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

const APP_VUE: &str = r#"<template>
  <div id="app">
    <b-card title="Welcome">
      <b-button v-b-toggle.sidebar variant="primary">Menu</b-button>
      <BButton v-b-tooltip.hover title="Help">?</BButton>
      <router-view />
    </b-card>
  </div>
</template>

<script>
export default {
  name: 'App',
}
</script>
"#;

#[test]
fn test_generates_registrations() -> Result<()> {
    let test = CliTest::with_library()?;
    test.write_file("src/App.vue", APP_VUE)?;

    assert_cmd_snapshot!(test.command().arg("src"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    import Vue from 'vue';
    import { BButton, BCard, VBToggle, VBTooltip } from 'bootstrap-vue';

    Vue.component('BButton', BButton);
    Vue.component('BCard', BCard);

    Vue.directive('b-toggle', VBToggle);
    Vue.directive('b-tooltip', VBTooltip);

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_usage_is_merged_across_files() -> Result<()> {
    let test = CliTest::with_library()?;
    test.write_file("src/App.vue", "<template><b-alert show /></template>")?;
    test.write_file(
        "src/views/Users.vue",
        "<template><div><b-table :items=\"users\" /><b-alert /></div></template>",
    )?;

    assert_cmd_snapshot!(test.command().arg("src"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    import Vue from 'vue';
    import { BAlert, BTable } from 'bootstrap-vue';

    Vue.component('BAlert', BAlert);
    Vue.component('BTable', BTable);

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_wrap_limit_and_indent_size() -> Result<()> {
    let test = CliTest::with_library()?;
    test.write_file("src/App.vue", APP_VUE)?;

    assert_cmd_snapshot!(test.command().args(["src", "", "40", "4"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    import Vue from 'vue';
    import {
        BButton,
        BCard,
        VBToggle,
        VBTooltip,
    } from 'bootstrap-vue';

    Vue.component('BButton', BButton);
    Vue.component('BCard', BCard);

    Vue.directive('b-toggle', VBToggle);
    Vue.directive('b-tooltip', VBTooltip);

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_nothing_to_generate() -> Result<()> {
    let test = CliTest::with_library()?;
    test.write_file(
        "src/App.vue",
        "<template><div><router-link to=\"/\">Home</router-link></div></template>",
    )?;
    test.write_file("src/Plain.vue", "<script>export default {}</script>")?;

    assert_cmd_snapshot!(test.command().arg("src"), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    note: no bootstrap-vue components or directives are used, nothing to generate
    ");

    Ok(())
}

#[test]
fn test_v_pre_block_with_mustache_text() -> Result<()> {
    let test = CliTest::with_library()?;
    test.write_file(
        "src/Docs.vue",
        "<template><div><pre v-pre>{{ not closed <b-table /></pre><b-card /></div></template>",
    )?;

    assert_cmd_snapshot!(test.command().arg("src"), @r"
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
fn test_malformed_template_fails() -> Result<()> {
    let test = CliTest::with_library()?;
    test.write_file("src/App.vue", APP_VUE)?;
    test.write_file("src/Broken.vue", "<template><div></template>")?;

    assert_cmd_snapshot!(test.command().arg("src"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: Failed to parse src/Broken.vue: Unexpected end tag </template>, expected </div> at 1:16
    ");

    Ok(())
}

#[test]
fn test_missing_markup_root() -> Result<()> {
    let test = CliTest::with_library()?;

    assert_cmd_snapshot!(test.command().arg("does-not-exist"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: Markup directory does not exist or is not a directory: does-not-exist
    ");

    Ok(())
}

#[test]
fn test_config_file() -> Result<()> {
    let test = CliTest::with_library()?;
    test.write_file(".bvtrimrc.json", r#"{ "wrapLimit": 20, "indentSize": 3 }"#)?;
    test.write_file("src/App.vue", "<template><b-card /></template>")?;

    assert_cmd_snapshot!(test.command().arg("src"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    import Vue from 'vue';
    import {
       BCard,
    } from 'bootstrap-vue';

    Vue.component('BCard', BCard);

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::with_library()?;
    test.write_file(".bvtrimrc.json", r#"{ "ignores": ["**/legacy/**"] }"#)?;
    test.write_file("src/App.vue", "<template><b-card /></template>")?;
    test.write_file("src/legacy/Old.vue", "<template><b-table /></template>")?;

    assert_cmd_snapshot!(test.command().arg("src"), @r"
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
fn test_invalid_config_fails() -> Result<()> {
    let test = CliTest::with_library()?;
    test.write_file(".bvtrimrc.json", "{ nope")?;
    test.write_file("src/App.vue", "<template><b-card /></template>")?;

    let output = test.command().arg("src").output()?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.starts_with("Error: Failed to parse config file"));

    Ok(())
}

#[test]
fn test_verbose_from_env() -> Result<()> {
    let test = CliTest::with_library()?;
    test.write_file("src/App.vue", "<template><b-card /></template>")?;

    test.settings().bind(|| {
        assert_cmd_snapshot!(test.command().arg("src").env("BVTRIM_VERBOSE", "1"), @r"
        success: true
        exit_code: 0
        ----- stdout -----
        import Vue from 'vue';
        import { BCard } from 'bootstrap-vue';

        Vue.component('BCard', BCard);

        ----- stderr -----
        note: no config file found, using defaults
        note: library root [PROJECT]/node_modules/bootstrap-vue
        note: wrap limit 80, indent size 2
        note: catalog has 5 component(s) and 2 directive(s)
        note: 1 file(s) scanned, 1 component(s) and 0 directive(s) used
        ");
    });

    Ok(())
}

#[test]
fn test_missing_markup_root_argument() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("<MARKUP_ROOT>"));

    Ok(())
}
