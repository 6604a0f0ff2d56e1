// movie.rs
use crate::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Registro de película: la única entidad del catálogo. El `title` es la
/// clave de búsqueda de cara al operador (no única); el `id` identifica la
/// fila concreta para `save`/reconstrucción desde persistencia.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
  id: Uuid,
  title: String,
  director: Option<String>,
  release_year: Option<i32>,
  genres: Vec<String>,
  ratings: Vec<f64>,
  cast: Vec<String>,
}

impl MovieRecord {
  fn build(id: Uuid,
           title: &str,
           director: Option<String>,
           release_year: Option<i32>,
           genres: Vec<String>,
           ratings: Vec<f64>,
           cast: Vec<String>)
           -> Result<Self, CatalogError> {
    if title.trim().is_empty() {
      return Err(CatalogError::ValidationError("Title cannot be empty".to_string()));
    }
    Ok(Self { id, title: title.to_string(), director, release_year, genres, ratings, cast })
  }

  pub fn new(title: &str,
             director: Option<String>,
             release_year: Option<i32>,
             genres: Vec<String>,
             ratings: Vec<f64>,
             cast: Vec<String>)
             -> Result<Self, CatalogError> {
    Self::build(Uuid::new_v4(), title, director, release_year, genres, ratings, cast)
  }

  /// Reconstruye un registro ya persistido conservando su `id`.
  pub fn from_parts(id: Uuid,
                    title: &str,
                    director: Option<String>,
                    release_year: Option<i32>,
                    genres: Vec<String>,
                    ratings: Vec<f64>,
                    cast: Vec<String>)
                    -> Result<Self, CatalogError> {
    Self::build(id, title, director, release_year, genres, ratings, cast)
  }

  pub fn id(&self) -> Uuid {
    self.id
  }

  pub fn title(&self) -> &str {
    &self.title
  }

  pub fn director(&self) -> Option<&str> {
    self.director.as_deref()
  }

  pub fn release_year(&self) -> Option<i32> {
    self.release_year
  }

  pub fn genres(&self) -> &[String] {
    &self.genres
  }

  pub fn ratings(&self) -> &[f64] {
    &self.ratings
  }

  pub fn cast(&self) -> &[String] {
    &self.cast
  }

  pub fn set_title(&mut self, title: &str) -> Result<(), CatalogError> {
    if title.trim().is_empty() {
      return Err(CatalogError::ValidationError("Title cannot be empty".to_string()));
    }
    self.title = title.to_string();
    Ok(())
  }

  pub fn set_director(&mut self, director: Option<String>) {
    self.director = director;
  }

  pub fn set_release_year(&mut self, release_year: Option<i32>) {
    self.release_year = release_year;
  }

  pub fn set_genres(&mut self, genres: Vec<String>) {
    self.genres = genres;
  }

  pub fn set_ratings(&mut self, ratings: Vec<f64>) {
    self.ratings = ratings;
  }

  pub fn set_cast(&mut self, cast: Vec<String>) {
    self.cast = cast;
  }

  pub fn is_same(&self, other: &MovieRecord) -> bool {
    self.id == other.id
  }
}

impl fmt::Display for MovieRecord {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f,
           "MovieRecord(title: {}, director: {}, year: {})",
           self.title,
           self.director.as_deref().unwrap_or("-"),
           self.release_year.map(|y| y.to_string()).unwrap_or_else(|| "-".into()))
  }
}
