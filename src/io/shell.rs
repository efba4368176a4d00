//! Numbered-menu interactive session over a single current dataset

use crate::dataset::Dataset;
use crate::io::configuration::{
    DEFAULT_BAR_WIDTH, DEFAULT_DATASET_NAME, DEFAULT_LINE_HEIGHT, PREVIEW_ITEMS,
};
use crate::io::error::{Result, io_error};
use crate::io::input::{parse_bin_count, parse_values};
use crate::io::samples::{SampleKind, ValueSource};
use crate::report::{Analysis, run_analysis};
use std::io::{BufRead, Write};

const MENU: &str = "\
MENU:
1. Generate Sample Data
2. Input Custom Data
3. Show Basic Statistics
4. Create Bar Chart
5. Create Histogram
6. Create Line Chart
7. Analyze Trends
8. Correlation Analysis
9. Show Current Data
10. Exit";

const SAMPLE_MENU: &str = "\
Choose a sample dataset:
1. Sales Data
2. Temperature Data
3. Grades Data";

/// Chart dimensions used by the interactive session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSettings {
    /// Longest bar in the bar chart
    pub bar_width: usize,
    /// Rows in the line chart
    pub line_height: usize,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            bar_width: DEFAULT_BAR_WIDTH,
            line_height: DEFAULT_LINE_HEIGHT,
        }
    }
}

/// Whether the menu loop keeps going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Line-oriented prompt over any reader and writer
struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}").map_err(|err| io_error("writing output", err))
    }

    /// Show `text` and read one line; `None` at end of input
    fn ask(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}").map_err(|err| io_error("writing prompt", err))?;
        self.output
            .flush()
            .map_err(|err| io_error("flushing prompt", err))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|err| io_error("reading input", err))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Interactive session state: the current dataset and where sample values come from
pub struct Session<S> {
    current: Option<Dataset>,
    source: S,
    settings: ChartSettings,
}

impl<S: ValueSource> Session<S> {
    /// Create a session with no current dataset
    pub const fn new(source: S, settings: ChartSettings) -> Self {
        Self {
            current: None,
            source,
            settings,
        }
    }

    /// The dataset subsequent actions operate on
    pub const fn current(&self) -> Option<&Dataset> {
        self.current.as_ref()
    }

    /// Replace the current dataset
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.current = Some(dataset);
    }

    /// Run the menu loop until the user exits or input ends
    ///
    /// Analysis failures are reported to the user and the loop continues.
    ///
    /// # Errors
    ///
    /// Returns an error only when reading input or writing output fails
    pub fn run(&mut self, input: impl BufRead, output: impl Write) -> Result<()> {
        let mut terminal = Terminal { input, output };
        terminal.say("DATA ANALYZER")?;
        terminal.say(&"=".repeat(25))?;

        loop {
            terminal.say("")?;
            terminal.say(MENU)?;
            let Some(choice) = terminal.ask("\nChoose an option (1-10): ")? else {
                tracing::debug!("input closed, leaving menu");
                return Ok(());
            };

            if self.handle(choice.trim(), &mut terminal)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn handle<R: BufRead, W: Write>(
        &mut self,
        choice: &str,
        terminal: &mut Terminal<R, W>,
    ) -> Result<Flow> {
        tracing::debug!(choice, "menu selection");

        match choice {
            "1" => self.generate_sample(terminal)?,
            "2" => self.enter_custom_data(terminal)?,
            "3" | "4" | "5" | "6" | "7" | "8" | "9" => {
                let Some(dataset) = self.current.as_ref() else {
                    terminal.say("No data! Choose option 1 or 2 first.")?;
                    return Ok(Flow::Continue);
                };
                let message = self.dataset_action(choice, dataset, terminal)?;
                terminal.say(&message)?;
            }
            "10" => {
                terminal.say("Goodbye! Thanks for using Data Analyzer.")?;
                return Ok(Flow::Exit);
            }
            _ => terminal.say("Invalid choice!")?,
        }

        Ok(Flow::Continue)
    }

    fn generate_sample<R: BufRead, W: Write>(
        &mut self,
        terminal: &mut Terminal<R, W>,
    ) -> Result<()> {
        terminal.say("")?;
        terminal.say(SAMPLE_MENU)?;
        let choice = terminal.ask("Choose (1-3): ")?.unwrap_or_default();

        let Some(kind) = SampleKind::from_menu_choice(&choice) else {
            return terminal.say("Invalid choice!");
        };

        match kind.generate(&mut self.source) {
            Ok(dataset) => {
                terminal.say(&format!("Generated {}", dataset.name))?;
                self.set_dataset(dataset);
                Ok(())
            }
            Err(err) => terminal.say(&err.to_string()),
        }
    }

    fn enter_custom_data<R: BufRead, W: Write>(
        &mut self,
        terminal: &mut Terminal<R, W>,
    ) -> Result<()> {
        let text = terminal
            .ask("Enter values (comma separated): ")?
            .unwrap_or_default();

        let values = match parse_values(&text) {
            Ok(values) => values,
            Err(err) => {
                tracing::warn!(%err, "rejected custom data");
                terminal.say(&format!(
                    "Invalid data format! Use numbers separated by commas. ({err})"
                ))?;
                return Ok(());
            }
        };

        let name = terminal.ask("Dataset name: ")?.unwrap_or_default();
        let name = if name.trim().is_empty() {
            DEFAULT_DATASET_NAME.to_string()
        } else {
            name.trim().to_string()
        };

        self.set_dataset(Dataset::from_values(name, values));
        terminal.say("Data entered successfully!")
    }

    fn dataset_action<R: BufRead, W: Write>(
        &self,
        choice: &str,
        dataset: &Dataset,
        terminal: &mut Terminal<R, W>,
    ) -> Result<String> {
        let analysis = match choice {
            "3" => Analysis::Statistics,
            "4" => Analysis::BarChart {
                width: self.settings.bar_width,
            },
            "5" => {
                let text = terminal
                    .ask("Number of bins (default 10): ")?
                    .unwrap_or_default();
                match parse_bin_count(&text) {
                    Ok(bins) => Analysis::Histogram { bins },
                    Err(err) => {
                        return Ok(format!("Number of bins must be a positive number! ({err})"));
                    }
                }
            }
            "6" => Analysis::LineChart {
                height: self.settings.line_height,
            },
            "7" => Analysis::Trend,
            "8" => {
                terminal.say("For correlation analysis, enter a second dataset:")?;
                let text = terminal
                    .ask("Second data (comma separated): ")?
                    .unwrap_or_default();
                match parse_values(&text) {
                    Ok(other) => Analysis::Correlation { other },
                    Err(err) => return Ok(format!("Invalid data format! ({err})")),
                }
            }
            _ => return Ok(describe(dataset)),
        };

        Ok(run_analysis(dataset, &analysis).unwrap_or_else(|err| err.to_string()))
    }
}

/// Name, leading values and size of a dataset
pub fn describe(dataset: &Dataset) -> String {
    format!(
        "CURRENT DATASET: {}\nData: {:?}...\nTotal items: {}",
        dataset.name,
        dataset.preview(PREVIEW_ITEMS),
        dataset.len()
    )
}
