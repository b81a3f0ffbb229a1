use clap::Parser;

/// Reads one token sequence per line from standard input, in code form (`v1 d2 v3`), and
/// prints the rendered tree or a diagnostic for each.
#[derive(Debug, Parser)]
#[clap(about = "Parses pre-classified token sequences into term trees")]
pub struct Options {
    /// Log verbosity, 0 (errors only) to 4 (trace)
    #[clap(short, long, default_value_t = 1)]
    pub verbose: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_defaults_to_warnings() {
        let options = Options::try_parse_from(["termtree"]).unwrap();
        assert_eq!(1, options.verbose);
    }

    #[test]
    fn verbosity_can_be_set() {
        let options = Options::try_parse_from(["termtree", "--verbose", "4"]).unwrap();
        assert_eq!(4, options.verbose);

        let options = Options::try_parse_from(["termtree", "-v", "0"]).unwrap();
        assert_eq!(0, options.verbose);
    }

    #[test]
    fn verbosity_must_be_a_number() {
        assert!(Options::try_parse_from(["termtree", "--verbose", "loud"]).is_err());
    }
}
