/*
 * Hytale Pack Tools - Manifest generator for Hytale server packs
 * Copyright (C) 2026 Josh Kropf <josh@slashdev.ca>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

use crate::{is_blank, Error, Result};

/// Pack author, the name is never blank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    name: String,
    email: Option<String>,
    url: Option<String>
}

impl Author {
    pub fn new<S: Into<String>>(name: S, email: Option<String>, url: Option<String>) -> Result<Self> {
        let name = name.into();

        if is_blank(Some(name.as_str())) {
            return Err(Error::BlankAuthorName);
        }

        Ok(Self { name, email, url })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

/// Collects author fields, nothing is checked until [`AuthorBuilder::build`]
#[derive(Debug, Default, Clone)]
pub struct AuthorBuilder {
    name: String,
    email: Option<String>,
    url: Option<String>
}

impl AuthorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name<S: Into<String>>(&mut self, name: S) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn email<S: Into<String>>(&mut self, email: S) -> &mut Self {
        self.email = Some(email.into());
        self
    }

    pub fn url<S: Into<String>>(&mut self, url: S) -> &mut Self {
        self.url = Some(url.into());
        self
    }

    pub fn build(self) -> Result<Author> {
        Author::new(self.name, self.email, self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_with_all_fields() {
        let author = Author::new(
            "Dev",
            Some("dev@example.com".to_string()),
            Some("https://example.com".to_string())
        ).unwrap();

        assert_eq!(author.name(), "Dev");
        assert_eq!(author.email(), Some("dev@example.com"));
        assert_eq!(author.url(), Some("https://example.com"));
    }

    #[test]
    fn new_blank_name() {
        assert!(matches!(Author::new("", None, None), Err(Error::BlankAuthorName)));
        assert!(matches!(Author::new("  \t", None, None), Err(Error::BlankAuthorName)));
    }

    #[test]
    fn builder_defaults() {
        let mut builder = AuthorBuilder::new();
        builder.name("Dev");

        let author = builder.build().unwrap();
        assert_eq!(author.email(), None);
        assert_eq!(author.url(), None);
    }

    #[test]
    fn builder_without_name() {
        let mut builder = AuthorBuilder::new();
        builder.email("dev@example.com");

        assert!(matches!(builder.build(), Err(Error::BlankAuthorName)));
    }
}
