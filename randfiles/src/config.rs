#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Config {
    /// Files to write, in order, relative to the output directory
    pub filenames: Vec<String>,
    /// Number of letters written to each file
    pub string_len: usize,
    /// Inclusive lower bound of the two random integers
    pub min_value: u32,
    /// Inclusive upper bound of the two random integers
    pub max_value: u32,
}

/// `Config` implements `Default`
impl ::std::default::Default for Config {
    fn default() -> Self {
        Self {
            filenames: vec!["bboozler".into(), "inkbrush".into(), "splashot".into()],
            string_len: 10,
            min_value: 1,
            max_value: 42,
        }
    }
}
