use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::data::loader::{self, LoadSummary};
use crate::export;
use crate::state::AppState;
use crate::ui::table;

// ---------------------------------------------------------------------------
// Interactive shell
// ---------------------------------------------------------------------------

/// Line-oriented console driver for the load → search → export loop.
///
/// Generic over the streams so a scripted transcript can drive the same
/// state machine in tests. End of input anywhere is treated as a quiet exit.
pub struct Shell<R, W> {
    input: R,
    output: W,
    export_path: PathBuf,
    pub state: AppState,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            export_path: PathBuf::from(export::DEFAULT_OUTPUT),
            state: AppState::default(),
        }
    }

    /// Override where exports land. The interactive binary keeps the
    /// default `results.html` in the working directory.
    pub fn with_export_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.export_path = path.into();
        self
    }

    /// Run the session to completion: folder prompt once, then the query
    /// loop until `exit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        if !self.load_phase()? {
            return Ok(());
        }
        self.query_loop()
    }

    // ---- AwaitingFolder ----

    /// Prompt for a folder until one loads. Returns false on end of input.
    /// A load failure (missing or unreadable folder) re-prompts; a folder
    /// that loads zero records still counts as loaded.
    fn load_phase(&mut self) -> Result<bool> {
        loop {
            let Some(folder) = self.prompt("Folder with price lists: ")? else {
                return Ok(false);
            };
            match loader::load_folder(Path::new(&folder)) {
                Ok(summary) => {
                    self.report_load(&summary)?;
                    self.state.set_catalog(summary.catalog);
                    return Ok(true);
                }
                Err(err) => {
                    writeln!(self.output, "Cannot read folder: {err:#}")?;
                }
            }
        }
    }

    fn report_load(&mut self, summary: &LoadSummary) -> Result<()> {
        for skipped in &summary.skipped_files {
            writeln!(
                self.output,
                "Skipped {}: {}",
                skipped.file, skipped.reason
            )?;
        }
        for dropped in &summary.dropped_rows {
            writeln!(
                self.output,
                "Dropped {} line {}: zero or non-finite value, unit price undefined",
                dropped.file, dropped.line
            )?;
        }
        writeln!(
            self.output,
            "Loaded {} records from {} file(s).",
            summary.catalog.len(),
            summary.files_considered
        )?;
        Ok(())
    }

    // ---- AwaitingQuery ⇄ ShowingResults ----

    fn query_loop(&mut self) -> Result<()> {
        loop {
            let Some(query) = self.prompt("Search text (or 'exit' to quit): ")? else {
                return Ok(());
            };
            if query.eq_ignore_ascii_case("exit") {
                writeln!(self.output, "Done.")?;
                return Ok(());
            }
            if self.state.catalog.is_empty() {
                writeln!(self.output, "The catalog is empty; nothing to search.")?;
                continue;
            }

            let hits = self.state.run_query(&query).to_vec();
            if hits.is_empty() {
                writeln!(self.output, "No products matched.")?;
                continue;
            }

            table::render(&mut self.output, &self.state.catalog, &hits)
                .context("rendering results")?;

            let Some(answer) = self.prompt("Export these results to HTML? (yes/no): ")?
            else {
                return Ok(());
            };
            if answer.eq_ignore_ascii_case("yes") {
                self.export_results(&hits)?;
            }
            self.state.clear_results();
        }
    }

    /// Export never kills the loop: a write failure is reported and the
    /// next prompt follows.
    fn export_results(&mut self, hits: &[usize]) -> Result<()> {
        match export::export_html(&self.state.catalog, hits, &self.export_path) {
            Ok(true) => writeln!(
                self.output,
                "Results exported to {}.",
                self.export_path.display()
            )?,
            Ok(false) => writeln!(self.output, "Nothing to export.")?,
            Err(err) => {
                log::error!("export failed: {err:#}");
                writeln!(self.output, "Export failed: {err:#}")?;
            }
        }
        Ok(())
    }

    /// Write a prompt and read one trimmed line. None means end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line).context("reading input")? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
