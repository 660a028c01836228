//! Fixtures

use std::{fs, path::PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::{
    cart::{Cart, CartError},
    config::{CartConfig, MergePricing},
    fixtures::lines::LineFixture,
    lines::Line,
};

pub mod lines;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Not enough lines in fixture
    #[error("Not enough lines in fixture, available: {available}, requested: {requested}")]
    NotEnoughLines {
        /// Number of lines defined in the fixture
        available: usize,
        /// Number of lines requested
        requested: usize,
    },

    /// The cart rejected a line while replaying the fixture
    #[error("Line {index} was rejected by the cart: {source}")]
    Cart {
        /// Index of the rejected line in the fixture
        index: usize,

        /// The underlying cart error
        source: CartError,
    },
}

/// Wrapper for a cart fixture in YAML
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CartFixture {
    /// Cart configuration, defaults when omitted
    #[serde(default)]
    pub config: CartConfig,

    /// Lines to add, in order
    pub lines: Vec<LineFixture>,
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Configuration for carts built from this fixture
    config: CartConfig,

    /// Pre-built lines, in the order they are added
    lines: Vec<Line>,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            config: CartConfig::default(),
            lines: Vec::new(),
        }
    }

    /// Load a cart from `<base path>/carts/<name>.yml`
    ///
    /// Replaces any previously loaded lines and configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a price is invalid.
    pub fn load_cart(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("carts").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;

        debug!(path = %file_path.display(), "loading cart fixture");

        self.load_yaml(&contents)
    }

    /// Load a cart from a YAML document
    ///
    /// Replaces any previously loaded lines and configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be parsed, or if a price is invalid.
    pub fn load_yaml(&mut self, contents: &str) -> Result<&mut Self, FixtureError> {
        let fixture: CartFixture = serde_norway::from_str(contents)?;

        self.lines = fixture
            .lines
            .iter()
            .map(Line::try_from)
            .collect::<Result<_, _>>()?;

        self.config = fixture.config;

        Ok(self)
    }

    /// Load a fixture set by name from the default base path
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_cart(name)?;

        Ok(fixture)
    }

    /// Override the merge pricing from the fixture file
    pub fn set_merge_pricing(&mut self, merge_pricing: MergePricing) -> &mut Self {
        self.config.merge_pricing = merge_pricing;

        self
    }

    /// Get the cart configuration
    pub fn config(&self) -> CartConfig {
        self.config
    }

    /// Get the lines in the fixture, in the order they are added
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Build a cart by adding the fixture's lines in order
    ///
    /// If `n` is given, only the first `n` lines are added.
    ///
    /// # Errors
    ///
    /// - [`FixtureError::NotEnoughLines`]: `n` exceeds the number of lines.
    /// - [`FixtureError::Cart`]: the cart rejected one of the lines.
    pub fn cart(&self, n: Option<usize>) -> Result<Cart, FixtureError> {
        let requested = n.unwrap_or(self.lines.len());

        let lines = self
            .lines
            .get(..requested)
            .ok_or(FixtureError::NotEnoughLines {
                available: self.lines.len(),
                requested,
            })?;

        let mut cart = Cart::with_config(self.config);

        for (index, line) in lines.iter().enumerate() {
            cart.add(line.clone())
                .map_err(|source| FixtureError::Cart { index, source })?;
        }

        Ok(cart)
    }
}
