/// Output settings collected by the front end.
///
/// None of the engines read this; it only shapes how results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// `0` prints everything, `1` drops section headers, `2` prints bare values.
    pub quiet: u8,
    /// Hides the step-by-step derivation of unit conversions.
    pub no_explain: bool,
    /// Raises the default log level to `debug`.
    pub verbose: bool,
}

impl Config {
    pub fn shows_headers(&self) -> bool {
        self.quiet == 0
    }

    pub fn bare(&self) -> bool {
        self.quiet >= 2
    }
}
