// SPDX-License-Identifier: MIT
// Copyright (c) 2026 hdlreg contributors

//! TOML project file loading and validation.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use hdlreg_core::LanguageKind;

fn default_wave_format() -> String {
    "fst".to_string()
}

/// Top-level project description.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Name for logging
    #[serde(default)]
    pub name: String,

    /// Libraries in compile order
    #[serde(default, rename = "library")]
    pub libraries: Vec<LibrarySpec>,

    /// Tests to run
    #[serde(default, rename = "test")]
    pub tests: Vec<TestSpec>,

    /// Simulator options
    #[serde(default)]
    pub options: OptionsSpec,
}

/// One HDL library and its files, listed in compile order.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LibrarySpec {
    pub name: String,

    #[serde(default)]
    pub files: Vec<FileSpec>,
}

/// A source file entry: either a bare path or a table with per-file details.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum FileSpec {
    Path(String),
    Detailed {
        path: String,
        /// HDL standard tag, e.g. "2008" or "1993"
        #[serde(default)]
        version: Option<String>,
        #[serde(default)]
        compile_options: Vec<String>,
    },
}

impl FileSpec {
    pub fn path(&self) -> &str {
        match self {
            FileSpec::Path(path) => path,
            FileSpec::Detailed { path, .. } => path,
        }
    }

    pub fn version(&self) -> Option<&str> {
        match self {
            FileSpec::Path(_) => None,
            FileSpec::Detailed { version, .. } => version.as_deref(),
        }
    }

    pub fn compile_options(&self) -> &[String] {
        match self {
            FileSpec::Path(_) => &[],
            FileSpec::Detailed {
                compile_options, ..
            } => compile_options,
        }
    }
}

/// One testbench run.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TestSpec {
    pub name: String,

    /// Library holding the testbench
    pub library: String,

    /// Testbench source path; must appear in the library's file list
    pub testbench: String,

    /// Architecture to elaborate
    pub architecture: String,

    #[serde(default)]
    pub kind: TestKind,

    /// Extra generic tokens, e.g. "-g G_SEED=7"
    #[serde(default)]
    pub generics: Option<String>,

    /// Output directory for this test's transcript and waveforms, relative
    /// to the run's output root. Defaults to `test/<library>.<name>`.
    #[serde(default)]
    pub output: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TestKind {
    #[default]
    Vhdl,
    Verilog,
}

impl From<TestKind> for LanguageKind {
    fn from(kind: TestKind) -> Self {
        match kind {
            TestKind::Vhdl => LanguageKind::Vhdl,
            TestKind::Verilog => LanguageKind::Verilog,
        }
    }
}

/// Simulator option lists, split by phase.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionsSpec {
    #[serde(default)]
    pub global: Vec<String>,

    #[serde(default)]
    pub elaboration: Vec<String>,

    #[serde(default)]
    pub simulation: Vec<String>,

    #[serde(default)]
    pub runtime: Vec<String>,

    /// Waveform format used when capturing waveforms
    #[serde(default = "default_wave_format")]
    pub wave_format: String,

    /// Simulator executable override
    #[serde(default)]
    pub simulator_path: Option<String>,
}

impl Default for OptionsSpec {
    fn default() -> Self {
        Self {
            global: Vec::new(),
            elaboration: Vec::new(),
            simulation: Vec::new(),
            runtime: Vec::new(),
            wave_format: default_wave_format(),
            simulator_path: None,
        }
    }
}

impl ProjectConfig {
    /// Read and parse a project file.
    pub fn load(path: &Path) -> Result<Self, ProjectError> {
        let content = std::fs::read_to_string(path).map_err(|source| ProjectError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: ProjectConfig =
            toml::from_str(&content).map_err(|source| ProjectError::Parse {
                path: path.to_path_buf(),
                source: Box::new(source),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-references between tests and libraries.
    fn validate(&self) -> Result<(), ProjectError> {
        for test in &self.tests {
            let Some(library) = self.libraries.iter().find(|l| l.name == test.library) else {
                return Err(ProjectError::UnknownLibrary {
                    test: test.name.clone(),
                    library: test.library.clone(),
                });
            };
            if !library.files.iter().any(|f| f.path() == test.testbench) {
                return Err(ProjectError::UnknownTestbench {
                    test: test.name.clone(),
                    testbench: test.testbench.clone(),
                    library: test.library.clone(),
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("failed to read project file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse project file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: Box<toml::de::Error>,
    },

    #[error("test {test} references unknown library {library}")]
    UnknownLibrary { test: String, library: String },

    #[error("test {test}: testbench {testbench} is not a file of library {library}")]
    UnknownTestbench {
        test: String,
        testbench: String,
        library: String,
    },
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;
