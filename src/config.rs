use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{
    error::{ConvertError, Result},
    graph::Shift,
};

/// Settings for a run, either read from a TOML file or filled in from the
/// command line. Every field is optional in the file:
///
/// ```toml
/// input = "graphs.gspan"
/// output = "sdf_out"
/// bond_shift = true
/// ```
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// The gSpan file to read graphs from.
    pub input: Option<PathBuf>,

    /// The directory to write one SDF file per graph into. Created if it
    /// doesn't exist.
    pub output: Option<PathBuf>,

    /// Add one to every atom label before looking up its element, so 0 means
    /// He instead of H.
    pub atom_shift: bool,

    /// Add one to both vertex numbers of every bond, for gSpan files that
    /// number vertices from 0.
    pub bond_shift: bool,

    /// Log debug messages.
    pub verbose: bool,

    /// Write out the last graph even if the input doesn't end with a blank
    /// line.
    pub flush_last: bool,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let s = read_to_string(path).map_err(|e| {
            ConvertError::Config(format!("failed to read {path:?}: {e}"))
        })?;
        toml::from_str(&s).map_err(|e| {
            ConvertError::Config(format!("failed to parse {path:?}: {e}"))
        })
    }

    /// combine `self` with `other`, preferring `other`'s paths. a flag is set
    /// if either side sets it
    pub fn merge(self, other: Config) -> Config {
        Config {
            input: other.input.or(self.input),
            output: other.output.or(self.output),
            atom_shift: self.atom_shift || other.atom_shift,
            bond_shift: self.bond_shift || other.bond_shift,
            verbose: self.verbose || other.verbose,
            flush_last: self.flush_last || other.flush_last,
        }
    }

    /// check that both paths are present
    pub fn resolve(self) -> Result<Conversion> {
        let Some(input) = self.input else {
            return Err(ConvertError::Config("no input file given".to_owned()));
        };
        let Some(output) = self.output else {
            return Err(ConvertError::Config(
                "no output directory given".to_owned(),
            ));
        };
        Ok(Conversion {
            input,
            output,
            shift: Shift::new(self.atom_shift, self.bond_shift),
            flush_last: self.flush_last,
        })
    }
}

/// A fully specified conversion, ready for [crate::convert].
#[derive(Clone, Debug, PartialEq)]
pub struct Conversion {
    pub input: PathBuf,
    pub output: PathBuf,
    pub shift: Shift,
    pub flush_last: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load() {
        let got = Config::load("testfiles/convert.toml").unwrap();
        let want = Config {
            input: Some("testfiles/mined.gspan".into()),
            output: Some("sdf_out".into()),
            atom_shift: false,
            bond_shift: true,
            verbose: false,
            flush_last: false,
        };
        assert_eq!(got, want);
    }

    #[test]
    fn empty_file() {
        let got: Config = toml::from_str("").unwrap();
        assert_eq!(got, Config::default());
    }

    #[test]
    fn unknown_key() {
        let got: std::result::Result<Config, _> =
            toml::from_str("input = \"a\"\nshift = true\n");
        assert!(got.is_err());
    }

    #[test]
    fn missing_file() {
        let err = Config::load("testfiles/nope.toml").unwrap_err();
        assert!(matches!(err, ConvertError::Config(_)));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn command_line_wins() {
        let file = Config {
            input: Some("a.gspan".into()),
            output: Some("out".into()),
            bond_shift: true,
            ..Default::default()
        };
        let cli = Config {
            output: Some("elsewhere".into()),
            atom_shift: true,
            ..Default::default()
        };
        let got = file.merge(cli).resolve().unwrap();
        assert_eq!(got.input, PathBuf::from("a.gspan"));
        assert_eq!(got.output, PathBuf::from("elsewhere"));
        assert_eq!(got.shift, Shift::ATOMS | Shift::BONDS);
        assert!(!got.flush_last);
    }

    #[test]
    fn resolve_needs_paths() {
        let err = Config::default().resolve().unwrap_err();
        assert_eq!(err.to_string(), "configuration error: no input file given");
        let err = Config {
            input: Some("a".into()),
            ..Default::default()
        }
        .resolve()
        .unwrap_err();
        assert!(err.to_string().contains("no output directory"));
    }
}
