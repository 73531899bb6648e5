//! Interactive command loop.
//!
//! Reads one command per line and writes results to the given writer. The
//! current dataset lives in an explicit `Option<Session>`; `load` replaces
//! it only when the new file loads successfully.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use tracing::debug;

use sales_index::loader::{normalize_path_input, LoaderConfig};
use sales_index::session::DEFAULT_TOP_ITEMS;
use sales_index::{report, SalesError, Session};

const HELP: &str = "\
--- Sales Data Analysis CLI ---
Commands:
  load [path]         - Load a new CSV file
  lookup <order_id>   - Look up details of a specific order
  regions             - Show total profits by region
  countries           - Show total profits by country
  top_items [n]       - Show top performing items (default 5)
  top_sale            - Show the top sale (highest profit)
  pop                 - Remove and show the next highest-profit sale
  scan_top            - Find the top sale by scanning every record
  summary             - Show record count and totals
  help                - Show this list
  exit                - Exit the program
";

const NO_DATA: &str = "No data loaded. Please load a CSV file first.";

/// Whether the loop should keep reading commands
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Shell {
    config: LoaderConfig,
    session: Option<Session>,
}

impl Shell {
    pub fn new(config: LoaderConfig, session: Option<Session>) -> Self {
        Self { config, session }
    }

    /// Run until `exit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> io::Result<()> {
        write!(out, "{HELP}")?;
        let mut line = String::new();

        loop {
            write!(out, "\nEnter command: ")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                return Ok(());
            }

            if self.execute(line.trim(), &mut input, &mut out)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn execute<R: BufRead, W: Write>(
        &mut self,
        command: &str,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<Flow> {
        if command.is_empty() {
            return Ok(Flow::Continue);
        }
        let (action, rest) = match command.split_once(char::is_whitespace) {
            Some((action, rest)) => (action, rest.trim()),
            None => (command, ""),
        };
        let rest = (!rest.is_empty()).then_some(rest);

        match action {
            "exit" => {
                writeln!(out, "Exiting...")?;
                return Ok(Flow::Exit);
            }
            "help" => write!(out, "{HELP}")?,
            // Paths may contain spaces, so `load` takes the whole remainder
            "load" => self.load(rest, input, out)?,
            _ => {
                let Some(session) = self.session.as_mut() else {
                    if is_query(action) {
                        writeln!(out, "{NO_DATA}")?;
                    } else {
                        writeln!(out, "Unknown command. Please try again.")?;
                    }
                    return Ok(Flow::Continue);
                };
                let argument = rest.and_then(|r| r.split_whitespace().next());
                query(session, action, argument, out)?;
            }
        }

        Ok(Flow::Continue)
    }

    fn load<R: BufRead, W: Write>(
        &mut self,
        argument: Option<&str>,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<()> {
        let raw = match argument {
            Some(path) => path.to_string(),
            None => {
                write!(out, "Enter the path to your CSV file: ")?;
                out.flush()?;
                let mut path = String::new();
                input.read_line(&mut path)?;
                path
            }
        };
        let path = normalize_path_input(&raw);
        if path.is_empty() {
            writeln!(out, "Please provide a file path")?;
            return Ok(());
        }

        match Session::load(&path, &self.config) {
            Ok(session) => {
                writeln!(
                    out,
                    "Successfully loaded {} records from {}.",
                    session.record_count(),
                    path
                )?;
                self.session = Some(session);
            }
            Err(e) => writeln!(out, "Error: Could not load file: {e}")?,
        }
        Ok(())
    }
}

fn is_query(action: &str) -> bool {
    matches!(
        action,
        "lookup" | "regions" | "countries" | "top_items" | "top_sale" | "pop" | "scan_top" | "summary"
    )
}

fn query<W: Write>(
    session: &mut Session,
    action: &str,
    argument: Option<&str>,
    out: &mut W,
) -> io::Result<()> {
    match action {
        "lookup" => match argument {
            Some(order_id) => {
                let start = Instant::now();
                let found = session.lookup(order_id);
                debug!("Table lookup took {:?}", start.elapsed());
                match found {
                    Some(record) => write!(out, "{}", report::record_details(record, false))?,
                    None => writeln!(out, "Order ID not found: {order_id}")?,
                }
            }
            None => writeln!(out, "Please provide an Order ID")?,
        },
        "regions" => write!(
            out,
            "{}",
            report::group_totals("Total Profits by Region", &session.regions())
        )?,
        "countries" => write!(
            out,
            "{}",
            report::group_totals("Total Profits by Country", &session.countries())
        )?,
        "top_items" => {
            // Unparsable counts fall back to the default
            let n = match argument.map(str::parse::<i64>) {
                Some(Ok(n)) => usize::try_from(n).unwrap_or(0),
                _ => DEFAULT_TOP_ITEMS,
            };
            write!(out, "{}", report::ranked_items(n, &session.top_items(n)))?;
        }
        "top_sale" => {
            let start = Instant::now();
            let top = session.top_sale();
            debug!("Heap peek took {:?}", start.elapsed());
            write_top_sale(out, top)?;
        }
        "scan_top" => {
            let start = Instant::now();
            let top = session.scan_top_sale();
            debug!("Table scan took {:?}", start.elapsed());
            write_top_sale(out, top)?;
        }
        "pop" => match session.pop_top_sale() {
            Ok(record) => write_top_sale(out, Some(&record))?,
            Err(SalesError::EmptyStore) => writeln!(out, "No more sales in the heap.")?,
            Err(e) => writeln!(out, "Error: {e}")?,
        },
        "summary" => write!(out, "{}", report::summary(&session.summary()))?,
        _ => writeln!(out, "Unknown command. Please try again.")?,
    }
    Ok(())
}

fn write_top_sale<W: Write>(out: &mut W, top: Option<&sales_index::SalesRecord>) -> io::Result<()> {
    match top {
        Some(record) => {
            writeln!(out, "\n--- Top Sale (Highest Profit) ---")?;
            write!(out, "{}", report::record_details(record, true))
        }
        None => writeln!(out, "No records found."),
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
