// SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Command-line entry points of the converter.
//!
//! - `Convert`: read CSDL documents, generate the OpenAPI document and
//!   write it to the output file (or return it for printing).
//! - `Paths`: read CSDL documents and list generated path templates.
//!
//! Both commands read optional settings from a TOML file.

use crate::edm::Edmx;
use crate::edm::Model;
use crate::generator::Document;
use crate::path::PathProvider;
use crate::settings::Settings;
use crate::writer;
use crate::writer::Format;
use crate::Error;
use clap::Subcommand;
use std::fs::File;
use std::io::Read as _;
use std::path::PathBuf;
use tracing::info;

/// Converter high-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert CSDL documents to OpenAPI document.
    Convert {
        /// CSDL documents of the service. Documents referenced by the
        /// service documents should be specified as well.
        #[arg(required = true)]
        csdls: Vec<String>,
        /// Settings file (TOML).
        #[arg(short, long)]
        settings: Option<PathBuf>,
        /// Output file. Document is printed to stdout if not set.
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Print path templates of CSDL documents.
    Paths {
        #[arg(required = true)]
        csdls: Vec<String>,
        /// Settings file (TOML).
        #[arg(short, long)]
        settings: Option<PathBuf>,
    },
}

/// Process a converter command.
///
/// # Errors
///
/// Returns an error if command processing fails.
pub fn process_command(command: &Commands) -> Result<Vec<String>, Error> {
    let mut display_output = Vec::new();
    match command {
        Commands::Convert {
            csdls,
            settings,
            output,
            format,
        } => {
            let settings = read_settings(settings.as_ref())?;
            let edmx_docs = read_csdls(csdls)?;
            let model = Model::build(&edmx_docs)?;
            let paths = PathProvider::new(&model, &settings).paths()?;
            let document = Document::new(&model, &settings).generate(&paths)?;
            if let Some(output) = output {
                writer::write(&document, *format, output)?;
                display_output.push(format!("{} file has been written", output.display()));
            } else {
                display_output.push(match format {
                    Format::Json => writer::to_json(&document)?,
                    Format::Yaml => writer::to_yaml(&document)?,
                });
            }
            Ok(display_output)
        }
        Commands::Paths { csdls, settings } => {
            let settings = read_settings(settings.as_ref())?;
            let edmx_docs = read_csdls(csdls)?;
            let model = Model::build(&edmx_docs)?;
            let paths = PathProvider::new(&model, &settings).paths()?;
            display_output.extend(paths.iter().map(|path| path.name(&settings)));
            Ok(display_output)
        }
    }
}

fn read_settings(fname: Option<&PathBuf>) -> Result<Settings, Error> {
    fname.map_or_else(
        || Ok(Settings::default()),
        |fname| Settings::read(fname).map_err(Error::Settings),
    )
}

fn read_csdls(csdls: &[String]) -> Result<Vec<Edmx>, Error> {
    if csdls.is_empty() {
        return Err(Error::AtLeastOneCsdlFileNeeded);
    }
    csdls
        .iter()
        .map(|fname| {
            info!(file = fname, "reading CSDL document");
            let mut file = File::open(fname).map_err(|err| Error::Io(fname.clone(), err))?;
            let mut content = String::new();
            file.read_to_string(&mut content)
                .map_err(|err| Error::Io(fname.clone(), err))?;
            Edmx::parse(&content).map_err(|e| Error::Edmx(fname.clone(), e))
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_no_csdls() {
        assert!(matches!(
            read_csdls(&[]),
            Err(Error::AtLeastOneCsdlFileNeeded)
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = process_command(&Commands::Paths {
            csdls: vec!["/nonexistent/service.xml".into()],
            settings: None,
        });
        assert!(matches!(result, Err(Error::Io(fname, _)) if fname == "/nonexistent/service.xml"));
    }
}
