//! Running docfx.
//!
//! docfx runs twice inside a private temporary directory: `metadata` extracts
//! API YAML from the project descriptors, then `build` renders that YAML into
//! a static site. The directory is removed when the [`Workspace`] is dropped,
//! whichever way the run ends.

use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use colored::Colorize;
use tempfile::TempDir;

use crate::{
    config::{
        DocfxOptions,
        docfx::{
            API_DIR, CONFIG_FILE_NAME, CONTENT_GLOB, METADATA_OUTPUT_DIR, SITE_OUTPUT_DIR,
        },
    },
    error::{DocgenError, Result},
    output::move_dir,
    project::Projects,
};

const WORKSPACE_PREFIX: &str = "docfx-api-docs-";

/// Exclusively owned temporary working directory for one run.
#[derive(Debug)]
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Create a workspace in the system temporary directory.
    ///
    /// # Errors
    ///
    /// Returns [`DocgenError::Io`] if the directory cannot be created.
    pub fn create() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix(WORKSPACE_PREFIX)
            .tempdir()
            .map_err(|e| DocgenError::io("Failed to create temporary directory", e))?;

        Ok(Self { dir })
    }

    /// Create a workspace under `parent` instead of the system temporary directory.
    ///
    /// # Errors
    ///
    /// Returns [`DocgenError::Io`] if the directory cannot be created.
    pub fn create_in(parent: &Path) -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix(WORKSPACE_PREFIX)
            .tempdir_in(parent)
            .map_err(|e| {
                DocgenError::io(
                    format!("Failed to create temporary directory in {}", parent.display()),
                    e,
                )
            })?;

        Ok(Self { dir })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write the minimal `docfx.json` docfx insists on finding in its working directory.
    ///
    /// All real options are passed on the command line, so both sections stay empty.
    ///
    /// # Errors
    ///
    /// Returns [`DocgenError::Io`] if the file cannot be written.
    pub fn write_config(&self) -> Result<PathBuf> {
        let path = self.path().join(CONFIG_FILE_NAME);
        let config = serde_json::json!({ "build": {}, "metadata": {} });

        fs::write(&path, config.to_string())
            .map_err(|e| DocgenError::io(format!("Failed to write {}", path.display()), e))?;

        Ok(path)
    }
}

/// Drives the two docfx phases.
pub struct Docfx {
    tool: PathBuf,
    options: DocfxOptions,
    quiet: bool,
}

impl Docfx {
    #[must_use]
    pub const fn new(tool: PathBuf, options: DocfxOptions) -> Self {
        Self {
            tool,
            options,
            quiet: false,
        }
    }

    /// Enable or disable quiet mode (suppresses the per-phase status lines).
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    #[must_use]
    pub fn tool(&self) -> &Path {
        &self.tool
    }

    /// Arguments for `docfx metadata`.
    #[must_use]
    pub fn metadata_args(projects: &Projects) -> Vec<OsString> {
        ["metadata", "--output", METADATA_OUTPUT_DIR]
            .into_iter()
            .map(OsString::from)
            .chain(projects.descriptors().map(OsString::from))
            .collect()
    }

    /// Arguments for `docfx build`.
    #[must_use]
    pub fn build_args(&self) -> Vec<OsString> {
        [
            "build",
            "--content",
            CONTENT_GLOB,
            "--template",
            self.options.template.as_str(),
            "--output",
            SITE_OUTPUT_DIR,
            "--markdownEngineName",
            self.options.markdown_engine.as_str(),
        ]
        .into_iter()
        .map(OsString::from)
        .collect()
    }

    /// Render a command line for display.
    #[must_use]
    pub fn command_line(&self, args: &[OsString]) -> String {
        std::iter::once(self.tool.as_os_str())
            .chain(args.iter().map(OsString::as_os_str))
            .map(|arg| arg.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Generate the static site for `projects` inside `workspace`.
    ///
    /// Runs `docfx metadata`, lifts its doubly nested output up to `api/`,
    /// then runs `docfx build`.
    ///
    /// # Returns
    ///
    /// The path of the rendered site directory inside the workspace.
    ///
    /// # Errors
    ///
    /// Fails on the first docfx phase that cannot be started or exits
    /// unsuccessfully, or if staging files in the workspace fails. Nothing
    /// outside the workspace is touched.
    pub fn generate(&self, projects: &Projects, workspace: &Workspace) -> Result<PathBuf> {
        let dir = workspace.path();

        workspace.write_config()?;

        self.status("📚 Extracting API metadata...");
        self.run("metadata", &Self::metadata_args(projects), dir)?;

        // docfx nests its output in a directory of the same name
        let nested = dir.join(METADATA_OUTPUT_DIR).join(METADATA_OUTPUT_DIR);
        move_dir(&nested, &dir.join(API_DIR))?;

        self.status("🏗️  Building site...");
        self.run("build", &self.build_args(), dir)?;

        Ok(dir.join(SITE_OUTPUT_DIR))
    }

    /// Run docfx with inherited output streams, failing on a non-zero exit.
    fn run(&self, step: &'static str, args: &[OsString], cwd: &Path) -> Result<()> {
        tracing::debug!("Running `{}` in {}", self.command_line(args), cwd.display());

        let status = Command::new(&self.tool)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| DocgenError::ToolSpawn {
                path: self.tool.clone(),
                source,
            })?;

        if !status.success() {
            return Err(DocgenError::ToolInvocation { step, status });
        }

        Ok(())
    }

    fn status(&self, message: &str) {
        if !self.quiet {
            println!("{}", message.cyan());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::Project;

    fn sample_projects() -> Projects {
        vec![
            Project::new("Foo".to_string(), PathBuf::from("/repo/Foo/Foo.csproj")),
            Project::new("Bar".to_string(), PathBuf::from("/repo/Bar/Bar.csproj")),
        ]
        .into()
    }

    #[test]
    fn test_metadata_args() {
        let args = Docfx::metadata_args(&sample_projects());

        assert_eq!(
            args,
            vec![
                OsString::from("metadata"),
                OsString::from("--output"),
                OsString::from("__api"),
                OsString::from("/repo/Foo/Foo.csproj"),
                OsString::from("/repo/Bar/Bar.csproj"),
            ]
        );
    }

    #[test]
    fn test_build_args_use_options() {
        let docfx = Docfx::new(
            PathBuf::from("docfx"),
            DocfxOptions {
                template: "default".to_string(),
                markdown_engine: "dfm".to_string(),
            },
        );

        let args: Vec<String> = docfx
            .build_args()
            .into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();

        assert_eq!(
            args,
            vec![
                "build",
                "--content",
                "api/**.yml",
                "--template",
                "default",
                "--output",
                "site",
                "--markdownEngineName",
                "dfm",
            ]
        );
    }

    #[test]
    fn test_command_line_rendering() {
        let docfx = Docfx::new(PathBuf::from("/opt/docfx"), DocfxOptions::default());
        let line = docfx.command_line(&Docfx::metadata_args(&Projects::default()));

        assert_eq!(line, "/opt/docfx metadata --output __api");
    }

    #[test]
    fn test_workspace_writes_two_section_config() {
        let workspace = Workspace::create().unwrap();
        let path = workspace.write_config().unwrap();

        let content = fs::read_to_string(path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();

        assert_eq!(value, serde_json::json!({ "build": {}, "metadata": {} }));
    }

    #[test]
    fn test_workspace_removed_on_drop() {
        let parent = TempDir::new().unwrap();
        let workspace = Workspace::create_in(parent.path()).unwrap();
        let path = workspace.path().to_path_buf();

        assert!(path.is_dir());
        assert!(path.starts_with(parent.path()));

        drop(workspace);

        assert!(!path.exists());
    }

    #[test]
    fn test_missing_tool_is_spawn_error() {
        let workspace = Workspace::create().unwrap();
        let docfx = Docfx::new(
            workspace.path().join("no-such-docfx"),
            DocfxOptions::default(),
        )
        .with_quiet(true);

        let result = docfx.generate(&Projects::default(), &workspace);
        assert!(matches!(result, Err(DocgenError::ToolSpawn { .. })));
    }

    #[cfg(unix)]
    mod unix {
        use super::*;
        use std::os::unix::fs::PermissionsExt;
        use tempfile::TempDir;

        fn fake_docfx(dir: &Path, script: &str) -> PathBuf {
            let path = dir.join("docfx");
            fs::write(&path, format!("#!/bin/sh\n{script}")).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            path
        }

        #[test]
        fn test_generate_runs_both_phases() {
            let tools = TempDir::new().unwrap();
            let log = tools.path().join("calls.log");
            let script = format!(
                r#"echo "$@" >> "{log}"
test -f docfx.json || exit 3
case "$1" in
  metadata) mkdir -p __api/__api && echo "uid: Foo" > __api/__api/Foo.yml ;;
  build) test -f api/Foo.yml || exit 4; mkdir -p site && echo "<html/>" > site/index.html ;;
esac
"#,
                log = log.display()
            );
            let tool = fake_docfx(tools.path(), &script);

            let workspace = Workspace::create().unwrap();
            let docfx = Docfx::new(tool, DocfxOptions::default()).with_quiet(true);

            let site = docfx.generate(&sample_projects(), &workspace).unwrap();

            assert_eq!(site, workspace.path().join("site"));
            assert!(site.join("index.html").is_file());
            assert!(!workspace.path().join("__api").join("__api").exists());

            let calls = fs::read_to_string(&log).unwrap();
            let lines: Vec<_> = calls.lines().collect();
            assert_eq!(
                lines,
                vec![
                    "metadata --output __api /repo/Foo/Foo.csproj /repo/Bar/Bar.csproj",
                    "build --content api/**.yml --template statictoc --output site --markdownEngineName markdig",
                ]
            );
        }

        #[test]
        fn test_metadata_failure_stops_before_build() {
            let tools = TempDir::new().unwrap();
            let marker = tools.path().join("build-ran");
            let script = format!(
                "case \"$1\" in\n  metadata) exit 1 ;;\n  build) touch \"{}\" ;;\nesac\n",
                marker.display()
            );
            let tool = fake_docfx(tools.path(), &script);

            let workspace = Workspace::create().unwrap();
            let docfx = Docfx::new(tool, DocfxOptions::default()).with_quiet(true);

            let result = docfx.generate(&sample_projects(), &workspace);

            match result {
                Err(DocgenError::ToolInvocation { step, status }) => {
                    assert_eq!(step, "metadata");
                    assert_eq!(status.code(), Some(1));
                }
                other => panic!("expected metadata failure, got {other:?}"),
            }
            assert!(!marker.exists());
        }

        #[test]
        fn test_build_failure_is_reported() {
            let tools = TempDir::new().unwrap();
            let tool = fake_docfx(
                tools.path(),
                "case \"$1\" in\n  metadata) mkdir -p __api/__api ;;\n  build) exit 2 ;;\nesac\n",
            );

            let workspace = Workspace::create().unwrap();
            let docfx = Docfx::new(tool, DocfxOptions::default()).with_quiet(true);

            let result = docfx.generate(&sample_projects(), &workspace);
            assert!(matches!(
                result,
                Err(DocgenError::ToolInvocation { step: "build", .. })
            ));
        }
    }
}
