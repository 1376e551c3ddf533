use std::fmt::{Display, Formatter};

/// User-visible alerts raised instead of rendering a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    EmptyResult,
    TransportFailure,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::EmptyResult => "No data available for the selected date range.",
            Notice::TransportFailure => "Failed to fetch data. Please check the server and network.",
        }
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Prints notices on stderr. Failures are logged by the page, not here.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        eprintln!("{}", notice);
    }
}
