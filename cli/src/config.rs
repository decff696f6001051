/// Output settings collected from the command line.
pub struct Config {
    /// Adds the binary encoding to the report.
    pub show_binary: bool,
    /// Quiet level. Anything above 0 hides the banner and headers.
    pub q_level: u8,
}
