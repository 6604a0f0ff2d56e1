// store.rs
use crate::CatalogError;
use crate::MovieRecord;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Trait que define las operaciones de persistencia del catálogo.
///
/// Los títulos no son únicos: `find_by_title` y `delete_by_title` actúan
/// sobre la primera coincidencia. `save` persiste todos los campos de un
/// registro ya localizado (incluido un título cambiado), dirigido por `id`.
pub trait MovieStore: Send + Sync {
  /// Lista todos los registros en el orden por defecto del almacén.
  fn find_all(&self) -> Result<Vec<MovieRecord>, CatalogError>;

  /// Busca la primera coincidencia exacta de título.
  fn find_by_title(&self, title: &str) -> Result<Option<MovieRecord>, CatalogError>;

  /// Inserta un registro nuevo y devuelve su `Uuid`.
  fn insert(&self, record: MovieRecord) -> Result<Uuid, CatalogError>;

  /// Reescribe todos los campos del registro identificado por `record.id()`.
  fn save(&self, record: &MovieRecord) -> Result<(), CatalogError>;

  /// Elimina la primera coincidencia de título; devuelve filas eliminadas
  /// (0 o 1). Un 0 tras confirmar es un error operativo, no "no encontrado".
  fn delete_by_title(&self, title: &str) -> Result<usize, CatalogError>;
}

/// Implementación en memoria para tests y desarrollo. Un `Vec` (no un mapa)
/// para que el orden de listado sea estable entre llamadas.
pub struct InMemoryMovieStore {
  records: Arc<Mutex<Vec<MovieRecord>>>,
}

impl InMemoryMovieStore {
  pub fn new() -> Self {
    Self { records: Arc::new(Mutex::new(Vec::new())) }
  }

  // Helper to map poisoned mutex errors into CatalogError
  fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<MovieRecord>>, CatalogError> {
    self.records
        .lock()
        .map_err(|e| CatalogError::StorageError(format!("Mutex 'records' poisoned: {}", e)))
  }
}

impl Default for InMemoryMovieStore {
  fn default() -> Self {
    Self::new()
  }
}

impl MovieStore for InMemoryMovieStore {
  fn find_all(&self) -> Result<Vec<MovieRecord>, CatalogError> {
    let records = self.lock()?;
    Ok(records.clone())
  }

  fn find_by_title(&self, title: &str) -> Result<Option<MovieRecord>, CatalogError> {
    let records = self.lock()?;
    Ok(records.iter().find(|r| r.title() == title).cloned())
  }

  fn insert(&self, record: MovieRecord) -> Result<Uuid, CatalogError> {
    let id = record.id();
    let mut records = self.lock()?;
    records.push(record);
    Ok(id)
  }

  fn save(&self, record: &MovieRecord) -> Result<(), CatalogError> {
    let mut records = self.lock()?;
    match records.iter_mut().find(|r| r.is_same(record)) {
      Some(slot) => {
        *slot = record.clone();
        Ok(())
      }
      None => Err(CatalogError::StorageError(format!("record {} no longer exists", record.id()))),
    }
  }

  fn delete_by_title(&self, title: &str) -> Result<usize, CatalogError> {
    let mut records = self.lock()?;
    match records.iter().position(|r| r.title() == title) {
      Some(idx) => {
        records.remove(idx);
        Ok(1)
      }
      None => Ok(0),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn movie(title: &str) -> MovieRecord {
    MovieRecord::new(title, None, None, vec![], vec![], vec![]).unwrap()
  }

  #[test]
  fn insert_and_find_by_title() -> Result<(), CatalogError> {
    let store = InMemoryMovieStore::new();
    let m = movie("Dune");
    let id = store.insert(m.clone())?;
    let found = store.find_by_title("Dune")?.expect("should find Dune");
    assert_eq!(found.id(), id);
    assert!(store.find_by_title("Tenet")?.is_none());
    Ok(())
  }

  #[test]
  fn duplicate_titles_resolve_to_first_match() -> Result<(), CatalogError> {
    let store = InMemoryMovieStore::new();
    let first = movie("Dune");
    let second = movie("Dune");
    store.insert(first.clone())?;
    store.insert(second)?;
    let found = store.find_by_title("Dune")?.expect("should find Dune");
    assert!(found.is_same(&first));
    Ok(())
  }

  #[test]
  fn save_rewrites_all_fields_by_id() -> Result<(), CatalogError> {
    let store = InMemoryMovieStore::new();
    let mut m = movie("Dune");
    store.insert(m.clone())?;
    m.set_title("Dune: Part Two")?;
    m.set_director(Some("Villeneuve".into()));
    store.save(&m)?;
    assert!(store.find_by_title("Dune")?.is_none());
    let found = store.find_by_title("Dune: Part Two")?.expect("re-keyed title");
    assert_eq!(found.director(), Some("Villeneuve"));
    Ok(())
  }

  #[test]
  fn save_missing_record_is_storage_error() {
    let store = InMemoryMovieStore::new();
    let m = movie("Dune");
    match store.save(&m) {
      Err(CatalogError::StorageError(_)) => {}
      other => panic!("expected storage error, got: {:?}", other),
    }
  }

  #[test]
  fn delete_by_title_removes_one_and_reports_count() -> Result<(), CatalogError> {
    let store = InMemoryMovieStore::new();
    store.insert(movie("Dune"))?;
    store.insert(movie("Dune"))?;
    assert_eq!(store.delete_by_title("Dune")?, 1);
    assert_eq!(store.delete_by_title("Dune")?, 1);
    assert_eq!(store.delete_by_title("Dune")?, 0);
    Ok(())
  }

  #[test]
  fn find_all_preserves_insertion_order() -> Result<(), CatalogError> {
    let store = InMemoryMovieStore::new();
    store.insert(movie("A"))?;
    store.insert(movie("B"))?;
    store.insert(movie("C"))?;
    let titles: Vec<_> = store.find_all()?.iter().map(|r| r.title().to_string()).collect();
    assert_eq!(titles, vec!["A", "B", "C"]);
    Ok(())
  }
}
