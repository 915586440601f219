//! docfx invocation settings.
//!
//! Only the template and Markdown engine are user-tunable. The directory
//! names below are fixed by how the two docfx phases hand output to each
//! other inside the working directory.

/// Name of the docfx executable looked up on `PATH`.
pub const TOOL_NAME: &str = "docfx";

/// Config file docfx requires in its working directory.
pub const CONFIG_FILE_NAME: &str = "docfx.json";

/// Output directory passed to `docfx metadata`.
pub const METADATA_OUTPUT_DIR: &str = "__api";

/// Where the metadata is moved before `docfx build` runs.
pub const API_DIR: &str = "api";

/// Content glob passed to `docfx build`.
pub const CONTENT_GLOB: &str = "api/**.yml";

/// Output directory passed to `docfx build`.
pub const SITE_OUTPUT_DIR: &str = "site";

pub const DEFAULT_TEMPLATE: &str = "statictoc";
pub const DEFAULT_MARKDOWN_ENGINE: &str = "markdig";

/// Options controlling the `docfx build` phase.
#[derive(Clone, Debug)]
pub struct DocfxOptions {
    /// Site template name (`--template`)
    pub template: String,

    /// Markdown engine name (`--markdownEngineName`)
    pub markdown_engine: String,
}

impl Default for DocfxOptions {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            markdown_engine: DEFAULT_MARKDOWN_ENGINE.to_string(),
        }
    }
}
