use std::{fs, path::PathBuf, process::Command};

use anyhow::{Context, Ok, Result};
use insta::Settings;
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod generate;
mod library;

const BIN_NAME: &str = "bvtrim";

pub const COMPONENTS_JS: &str = r#"
export const NAME_ALERT = 'BAlert'
export const NAME_BUTTON = 'BButton'
export const NAME_CARD = 'BCard'
export const NAME_FORM_INPUT = 'BFormInput'
export const NAME_TABLE = 'BTable'
"#;

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        fs::create_dir_all(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project with bootstrap-vue installed under `node_modules`.
    pub fn with_library() -> Result<Self> {
        let test = Self::new()?;
        test.install_library("node_modules/bootstrap-vue")?;
        Ok(test)
    }

    pub fn install_library(&self, root: &str) -> Result<()> {
        self.write_file(&format!("{root}/src/constants/components.js"), COMPONENTS_JS)?;
        self.write_file(
            &format!("{root}/src/directives/toggle/toggle.js"),
            "export const VBToggle = {}\n",
        )?;
        self.write_file(
            &format!("{root}/src/directives/tooltip/tooltip.js"),
            "export const VBTooltip = {}\n",
        )?;
        self.write_file(
            &format!("{root}/src/directives/tooltip/helpers.js"),
            "export const VBTooltipHelper = {}\n",
        )?;
        Ok(())
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    /// Snapshot settings replacing the temporary project path with `[PROJECT]`.
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::clone_current();
        settings.add_filter(
            &regex::escape(&self.project_dir.to_string_lossy()),
            "[PROJECT]",
        );
        settings
    }
}
