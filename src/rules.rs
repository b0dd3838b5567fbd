use crate::case;
use crate::particle::{self, Context};
use std::fmt;

/// One rewrite step. `normalise` runs every rule in [`RULES`], in order,
/// each on the output of the one before.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    /// "hendrik VAN der post" becomes "Hendrik Van Der Post".
    TitleCase,
    /// "Hendrik Van Der Post" becomes "Hendrik van der Post".
    LowerParticles,
    /// "Mitchel El-Howie" becomes "Mitchel el-Howie".
    LowerPrefixes,
    /// "Martin Macbride" becomes "Martin MacBride".
    CapitalizeAfterMac,
}

pub const RULES: [Rule; 4] = [
    Rule::TitleCase,
    Rule::LowerParticles,
    Rule::LowerPrefixes,
    Rule::CapitalizeAfterMac,
];

impl Rule {
    pub fn apply(self, text: &str) -> String {
        match self {
            Rule::TitleCase => case::title_case(text),
            Rule::LowerParticles => {
                lowercase_ranges(text, particle::find_particles(text, Context::Rewrite))
            }
            Rule::LowerPrefixes => {
                lowercase_ranges(text, particle::find_prefixes(text, Context::Rewrite))
            }
            Rule::CapitalizeAfterMac => case::capitalize_after_mac(text),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Rule::TitleCase => "title_case",
            Rule::LowerParticles => "lower_particles",
            Rule::LowerPrefixes => "lower_prefixes",
            Rule::CapitalizeAfterMac => "capitalize_after_mac",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn lowercase_ranges(text: &str, ranges: particle::Matches) -> String {
    let mut result = text.to_string();
    for range in ranges {
        result[range].make_ascii_lowercase();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply_all(text: &str) -> String {
        RULES
            .iter()
            .fold(text.to_string(), |text, rule| rule.apply(&text))
    }

    #[test]
    fn order() {
        assert_eq!(Rule::TitleCase, RULES[0]);
        assert_eq!(Rule::CapitalizeAfterMac, RULES[3]);
    }

    #[test]
    fn title_case() {
        assert_eq!("Lana Del May", Rule::TitleCase.apply("LANA DEL MAY"));
    }

    #[test]
    fn lower_particles() {
        assert_eq!("Lana del May", Rule::LowerParticles.apply("Lana Del May"));
        assert_eq!(
            "Sergio de la Peña",
            Rule::LowerParticles.apply("Sergio De La Peña")
        );
        assert_eq!("van Gogh", Rule::LowerParticles.apply("Van Gogh"));
        assert_eq!("Ernst aus'm Weerth", Rule::LowerParticles.apply("Ernst Aus'M Weerth"));
        assert_eq!("Maria Della Rosa", Rule::LowerParticles.apply("Maria Della Rosa"));
    }

    #[test]
    fn lower_prefixes() {
        assert_eq!("Mitchel el-Howie", Rule::LowerPrefixes.apply("Mitchel El-Howie"));
        assert_eq!("N. el-Madji-Amor", Rule::LowerPrefixes.apply("N. El-Madji-Amor"));
        assert_eq!("El-Howie", Rule::LowerPrefixes.apply("El-Howie"));
        assert_eq!("Barbey D'Aurevilly", Rule::LowerPrefixes.apply("Barbey D'Aurevilly"));
    }

    #[test]
    fn capitalize_after_mac() {
        assert_eq!("Martin MacBride", Rule::CapitalizeAfterMac.apply("Martin Macbride"));
        assert_eq!("Alistair McBride", Rule::CapitalizeAfterMac.apply("Alistair Mcbride"));
    }

    #[test]
    fn in_sequence() {
        assert_eq!("Hendrik van der Post", apply_all("HENDRIK VAN DER POST"));
        assert_eq!("Mitchel el-Howie", apply_all("MITCHEL EL-HOWIE"));
        assert_eq!("Alistair McBride", apply_all("AlISTaiR MCBRIDE"));
        assert_eq!("John O'Farrell", apply_all("john o'farrell"));
    }

    #[test]
    fn d_apostrophe_is_capitalized() {
        assert_eq!("Barbey D'Aurevilly", apply_all("barbey d'aurevilly"));
    }

    #[test]
    fn display() {
        assert_eq!("lower_particles", Rule::LowerParticles.to_string());
    }
}
