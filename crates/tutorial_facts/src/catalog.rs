//! Animal catalog and random fact selection.

use crate::error::{CatalogError, FactError};
use derive_getters::Getters;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Heading shown when the catalog title is empty.
pub const DEFAULT_HEADING: &str = "Click an animal for a fun fact";

/// An animal with its picture and fun facts.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Animal {
    /// Image path (kept as metadata; not rendered).
    image: String,
    /// Facts, at least one.
    facts: Vec<String>,
}

impl Animal {
    /// Creates a new animal.
    pub fn new(image: impl Into<String>, facts: Vec<String>) -> Self {
        Self {
            image: image.into(),
            facts,
        }
    }
}

/// Set of animals plus display options.
///
/// Deserialization runs [`Catalog::validate`], so a loaded catalog always has
/// at least one animal and every animal has a fact.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(try_from = "CatalogFile")]
pub struct Catalog {
    /// Heading text; empty means [`DEFAULT_HEADING`].
    title: String,

    /// Whether the background picture is shown.
    show_background: bool,

    /// Background picture path.
    background: String,

    /// Animals keyed by name.
    animals: BTreeMap<String, Animal>,
}

/// Catalog as written in TOML, before validation.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    title: String,
    #[serde(default = "default_show_background")]
    show_background: bool,
    #[serde(default = "default_background")]
    background: String,
    animals: BTreeMap<String, Animal>,
}

fn default_show_background() -> bool {
    true
}

fn default_background() -> String {
    "/images/ocean.jpg".to_string()
}

impl TryFrom<CatalogFile> for Catalog {
    type Error = FactError;

    fn try_from(file: CatalogFile) -> Result<Self, Self::Error> {
        let catalog = Self {
            title: file.title,
            show_background: file.show_background,
            background: file.background,
            animals: file.animals,
        };
        catalog.validate()?;
        Ok(catalog)
    }
}

impl Catalog {
    /// The default catalog: dolphin, lobster and starfish.
    pub fn builtin() -> Self {
        let facts = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        let animals = BTreeMap::from([
            (
                "dolphin".to_string(),
                Animal::new(
                    "/images/dolphin.jpg",
                    facts(&[
                        "Dolphins have been shown to give distinct names to each other!",
                        "Dolphins are known to display their own culture!",
                        "Dolphins have two stomachs!",
                    ]),
                ),
            ),
            (
                "lobster".to_string(),
                Animal::new(
                    "/images/lobster.jpg",
                    facts(&[
                        "Lobsters taste with their legs!",
                        "Lobsters chew with their stomachs!",
                        "Lobsters can live as long as 100 years.",
                    ]),
                ),
            ),
            (
                "starfish".to_string(),
                Animal::new(
                    "/images/starfish.jpg",
                    facts(&[
                        "Starfish can have up to 40 arms!",
                        "Starfish have no brain and no blood!",
                        "Starfish can regenerate their own arms!",
                    ]),
                ),
            ),
        ]);

        Self {
            title: String::new(),
            show_background: default_show_background(),
            background: default_background(),
            animals,
        }
    }

    /// Parses and validates a catalog from TOML.
    ///
    /// ```toml
    /// title = "Sea life"
    ///
    /// [animals.octopus]
    /// image = "/images/octopus.jpg"
    /// facts = ["Octopuses have three hearts!"]
    /// ```
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let catalog: Self = toml::from_str(content)?;
        debug!(animals = catalog.animals.len(), "Catalog parsed");
        Ok(catalog)
    }

    /// Loads a catalog from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| CatalogError::new(format!("Failed to read catalog file: {}", e)))?;
        let catalog = Self::from_toml_str(&content)?;
        info!(animals = catalog.animals.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// Checks that there is at least one animal and every animal has a fact.
    pub fn validate(&self) -> Result<(), FactError> {
        if self.animals.is_empty() {
            return Err(FactError::EmptyCatalog);
        }
        match self.animals.iter().find(|(_, a)| a.facts.is_empty()) {
            Some((name, _)) => Err(FactError::NoFacts(name.clone())),
            None => Ok(()),
        }
    }

    /// Heading text: the title, or [`DEFAULT_HEADING`] when it is empty.
    pub fn heading(&self) -> &str {
        if self.title.is_empty() {
            DEFAULT_HEADING
        } else {
            &self.title
        }
    }

    /// Animal names in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.animals.keys().map(String::as_str).collect()
    }

    /// Looks up an animal by name.
    pub fn animal(&self, name: &str) -> Result<&Animal, FactError> {
        self.animals
            .get(name)
            .ok_or_else(|| FactError::UnknownAnimal(name.to_string()))
    }

    /// Picks one of the animal's facts uniformly at random.
    #[instrument(skip(self, rng))]
    pub fn random_fact<R: Rng + ?Sized>(&self, name: &str, rng: &mut R) -> Result<&str, FactError> {
        let animal = self.animal(name)?;
        if animal.facts.is_empty() {
            return Err(FactError::NoFacts(name.to_string()));
        }
        let index = rng.gen_range(0..animal.facts.len());
        debug!(index, "Fact selected");
        Ok(&animal.facts[index])
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_builtin_is_valid() {
        let catalog = Catalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.names(), ["dolphin", "lobster", "starfish"]);
        assert_eq!(catalog.heading(), DEFAULT_HEADING);
        assert!(*catalog.show_background());
    }

    #[test]
    fn test_random_fact_belongs_to_animal() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let fact = catalog.random_fact("lobster", &mut rng).unwrap();
            assert!(catalog.animal("lobster").unwrap().facts().iter().any(|f| f == fact));
        }
    }

    #[test]
    fn test_random_fact_reaches_every_fact() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..200 {
            seen.insert(catalog.random_fact("dolphin", &mut rng).unwrap().to_string());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_deserialize_validates() {
        let err = toml::from_str::<Catalog>("[animals.ghost]\nimage = \"/g.jpg\"\nfacts = []\n")
            .unwrap_err();
        assert!(err.to_string().contains("Animal ghost has no facts"));

        let err = toml::from_str::<Catalog>("[animals]\n").unwrap_err();
        assert!(err.to_string().contains("Catalog has no animals"));
    }

    #[test]
    fn test_unknown_animal() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            catalog.random_fact("unicorn", &mut rng),
            Err(FactError::UnknownAnimal("unicorn".to_string()))
        );
    }
}
