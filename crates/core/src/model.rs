// SPDX-License-Identifier: MIT
// Copyright (c) 2026 hdlreg contributors

//! Compilation unit, library, and test data model.
//!
//! Libraries arrive with their compile order already resolved by an external
//! dependency scanner; this crate only reads the order and advances compile
//! timestamps after successful analyzes.

use std::path::{Path, PathBuf};

/// HDL standard revision years understood by the runner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HdlVersion {
    V1987,
    V1993,
    V2002,
    #[default]
    V2008,
}

impl HdlVersion {
    /// Parse a standard-year tag.
    ///
    /// Unrecognized tags fall back to the newest supported standard so a
    /// stray version string never stops a build.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "1987" => Self::V1987,
            "1993" => Self::V1993,
            "2002" => Self::V2002,
            _ => Self::V2008,
        }
    }

    /// The standard-year tag this variant was parsed from.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::V1987 => "1987",
            Self::V1993 => "1993",
            Self::V2002 => "2002",
            Self::V2008 => "2008",
        }
    }
}

/// Language flavor of a test. VHDL tests are reported with an architecture
/// suffix, Verilog tests without; the distinction keeps report names stable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LanguageKind {
    #[default]
    Vhdl,
    Verilog,
}

/// One HDL source file inside a library.
#[derive(Clone, Debug)]
pub struct HdlFile {
    path: PathBuf,
    library: String,
    version: HdlVersion,
    compile_options: Vec<String>,
    compile_time: Option<u64>,
}

impl HdlFile {
    /// Create a file belonging to `library`.
    pub fn new(path: impl Into<PathBuf>, library: impl Into<String>, version: HdlVersion) -> Self {
        Self {
            path: path.into(),
            library: library.into(),
            version,
            compile_options: Vec::new(),
            compile_time: None,
        }
    }

    /// Set simulator-specific compile options appended after the file path.
    pub fn with_compile_options(mut self, options: Vec<String>) -> Self {
        self.compile_options = options;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn library(&self) -> &str {
        &self.library
    }

    pub fn version(&self) -> HdlVersion {
        self.version
    }

    pub fn compile_options(&self) -> &[String] {
        &self.compile_options
    }

    /// Epoch seconds of the last successful analyze, if any.
    pub fn compile_time(&self) -> Option<u64> {
        self.compile_time
    }

    /// Advance the compile timestamp. Only the compilation driver calls this,
    /// after the file's analyze has fully completed.
    pub(crate) fn update_compile_time(&mut self, epoch_secs: u64) {
        self.compile_time = Some(epoch_secs);
    }
}

/// A named library with its files in dependency-resolved compile order.
#[derive(Clone, Debug)]
pub struct Library {
    name: String,
    files: Vec<HdlFile>,
    need_compile: bool,
}

impl Library {
    /// Create an empty library. New libraries always need a first compile.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: Vec::new(),
            need_compile: true,
        }
    }

    /// Replace the compile-order list.
    pub fn with_files(mut self, files: Vec<HdlFile>) -> Self {
        self.files = files;
        self
    }

    /// Append a file at the end of the compile order.
    pub fn add_file(&mut self, file: HdlFile) {
        self.files.push(file);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn files(&self) -> &[HdlFile] {
        &self.files
    }

    pub(crate) fn files_mut(&mut self) -> &mut [HdlFile] {
        &mut self.files
    }

    /// Incremental compile gate, set by the external dependency scanner.
    pub fn need_compile(&self) -> bool {
        self.need_compile
    }

    pub fn set_need_compile(&mut self, need_compile: bool) {
        self.need_compile = need_compile;
    }
}

/// A runnable simulation target.
#[derive(Clone, Debug)]
pub struct Test {
    name: String,
    library: String,
    testbench: HdlFile,
    architecture: String,
    test_path: PathBuf,
    kind: LanguageKind,
}

impl Test {
    pub fn new(
        name: impl Into<String>,
        testbench: HdlFile,
        architecture: impl Into<String>,
        test_path: impl Into<PathBuf>,
        kind: LanguageKind,
    ) -> Self {
        let library = testbench.library().to_string();
        Self {
            name: name.into(),
            library,
            testbench,
            architecture: architecture.into(),
            test_path: test_path.into(),
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn library(&self) -> &str {
        &self.library
    }

    /// The testbench source unit; supplies library and version for the
    /// elaborate+run invocation.
    pub fn testbench(&self) -> &HdlFile {
        &self.testbench
    }

    pub fn architecture(&self) -> &str {
        &self.architecture
    }

    /// Output directory owning this test's transcript and waveforms.
    pub fn test_path(&self) -> &Path {
        &self.test_path
    }

    pub fn kind(&self) -> LanguageKind {
        self.kind
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
