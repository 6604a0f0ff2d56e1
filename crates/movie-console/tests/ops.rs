use movie_console::stubs::ScriptedConsole;
use movie_console::{add_movie, delete_movie, list_movies, update_movie};
use movie_domain::{CatalogError, InMemoryMovieStore, MovieRecord, MovieStore};
use uuid::Uuid;

fn seeded_store(records: Vec<MovieRecord>) -> InMemoryMovieStore {
    let store = InMemoryMovieStore::new();
    for record in records {
        store.insert(record).unwrap();
    }
    store
}

fn inception() -> MovieRecord {
    MovieRecord::new("Inception",
                     Some("Nolan".into()),
                     Some(2010),
                     vec!["Action".into(), "Fantasy".into(), "Adventure".into()],
                     vec![8.8],
                     vec!["DiCaprio".into(), "Page".into()]).unwrap()
}

#[test]
fn create_round_trip() {
    // every supplied field survives create + list unchanged
    let store = InMemoryMovieStore::new();
    let mut console = ScriptedConsole::new(&["T", "D", "1999", "Action,Drama", "7.5,8.0", "A,B"]);
    add_movie(&store, &mut console).unwrap();
    assert!(console.saw("New movie added successfully."));

    let all = store.find_all().unwrap();
    assert_eq!(all.len(), 1);
    let movie = &all[0];
    assert_eq!(movie.title(), "T");
    assert_eq!(movie.director(), Some("D"));
    assert_eq!(movie.release_year(), Some(1999));
    assert_eq!(movie.genres(), ["Action".to_string(), "Drama".to_string()]);
    assert_eq!(movie.ratings(), [7.5, 8.0]);
    assert_eq!(movie.cast(), ["A".to_string(), "B".to_string()]);
}

#[test]
fn create_defaults_optional_fields() {
    // only a title => unset scalars and empty lists, never zero-likes
    let store = InMemoryMovieStore::new();
    let mut console = ScriptedConsole::new(&["Solo", "", "", "", "", ""]);
    add_movie(&store, &mut console).unwrap();

    let movie = store.find_by_title("Solo").unwrap().expect("Solo present");
    assert_eq!(movie.director(), None);
    assert_eq!(movie.release_year(), None);
    assert!(movie.genres().is_empty());
    assert!(movie.ratings().is_empty());
    assert!(movie.cast().is_empty());
}

#[test]
fn create_rejects_invalid_year_without_persisting() {
    let store = InMemoryMovieStore::new();
    let mut console = ScriptedConsole::new(&["T", "", "nineteen99", "", "", ""]);
    add_movie(&store, &mut console).unwrap();
    assert!(console.saw("is not a valid year"));
    assert!(store.find_all().unwrap().is_empty());
}

#[test]
fn create_rejects_empty_title() {
    let store = InMemoryMovieStore::new();
    let mut console = ScriptedConsole::new(&["   ", "", "", "", "", ""]);
    add_movie(&store, &mut console).unwrap();
    assert!(console.saw("Title cannot be empty"));
    assert!(store.find_all().unwrap().is_empty());
}

#[test]
fn update_blank_keeps_previous_values() {
    // empty responses leave every field unchanged
    let store = seeded_store(vec![inception()]);
    let mut console = ScriptedConsole::new(&["Inception", "", "", "", "", "", ""]);
    update_movie(&store, &mut console).unwrap();
    assert!(console.saw("Movie updated successfully."));

    let movie = store.find_by_title("Inception").unwrap().expect("still present");
    assert_eq!(movie.director(), Some("Nolan"));
    assert_eq!(movie.release_year(), Some(2010));
    assert_eq!(movie.genres(),
               ["Action".to_string(), "Fantasy".to_string(), "Adventure".to_string()]);
    assert_eq!(movie.ratings(), [8.8]);
}

#[test]
fn update_whitespace_only_keeps_previous_values() {
    let store = seeded_store(vec![inception()]);
    let mut console = ScriptedConsole::new(&["Inception", "   ", "  ", " ", "   ", " ", "  "]);
    update_movie(&store, &mut console).unwrap();
    let movie = store.find_by_title("Inception").unwrap().expect("still present");
    assert_eq!(movie.director(), Some("Nolan"));
    assert_eq!(movie.genres(),
               ["Action".to_string(), "Fantasy".to_string(), "Adventure".to_string()]);
}

#[test]
fn update_rewrites_lists_wholesale() {
    // "Action, Fantasy" drops "Adventure" instead of keeping it
    let store = seeded_store(vec![inception()]);
    let mut console = ScriptedConsole::new(&["Inception", "", "", "", "Action, Fantasy", "", ""]);
    update_movie(&store, &mut console).unwrap();

    let movie = store.find_by_title("Inception").unwrap().expect("still present");
    assert_eq!(movie.genres(), ["Action".to_string(), "Fantasy".to_string()]);
    // the operator was warned about the rewrite semantics
    assert!(console.saw("rewrite the entire list"));
}

#[test]
fn update_shows_previous_values_in_brackets() {
    let store = seeded_store(vec![inception()]);
    let mut console = ScriptedConsole::new(&["Inception", "", "", "", "", "", ""]);
    update_movie(&store, &mut console).unwrap();
    assert!(console.saw("[Nolan]"));
    assert!(console.saw("[Action, Fantasy, Adventure]"));
    assert!(console.saw("[2010]"));
}

#[test]
fn update_can_rekey_title_for_future_lookups() {
    let store = seeded_store(vec![inception()]);
    let mut console = ScriptedConsole::new(&["Inception", "Paprika", "", "", "", "", ""]);
    update_movie(&store, &mut console).unwrap();
    assert!(store.find_by_title("Inception").unwrap().is_none());
    let movie = store.find_by_title("Paprika").unwrap().expect("re-keyed");
    assert_eq!(movie.director(), Some("Nolan"));
}

#[test]
fn update_rejects_invalid_ratings_without_saving() {
    let store = seeded_store(vec![inception()]);
    let mut console = ScriptedConsole::new(&["Inception", "New Name", "", "", "", "8.0, bad", ""]);
    update_movie(&store, &mut console).unwrap();
    assert!(console.saw("is not a valid number"));
    // nothing was persisted, not even the already-resolved title
    let movie = store.find_by_title("Inception").unwrap().expect("unchanged");
    assert_eq!(movie.title(), "Inception");
}

#[test]
fn update_missing_title_reports_not_found() {
    // not-found aborts and leaves the store unchanged
    let store = seeded_store(vec![inception()]);
    let mut console = ScriptedConsole::new(&["Missing"]);
    update_movie(&store, &mut console).unwrap();
    assert!(console.saw("Movie not found"));
    assert_eq!(store.find_all().unwrap().len(), 1);
}

#[test]
fn delete_missing_title_reports_not_found() {
    let store = seeded_store(vec![inception()]);
    let mut console = ScriptedConsole::new(&["Missing"]);
    delete_movie(&store, &mut console).unwrap();
    assert!(console.saw("Movie not found"));
    assert_eq!(store.find_all().unwrap().len(), 1);
}

#[test]
fn delete_requires_explicit_confirmation() {
    // anything other than y/Y cancels without mutation
    let store = seeded_store(vec![inception()]);
    for answer in ["n", "N", "yes", "si", ""] {
        let mut console = ScriptedConsole::new(&["Inception", answer]);
        delete_movie(&store, &mut console).unwrap();
        assert!(console.saw("Deletion canceled."), "answer {:?} should cancel", answer);
        assert_eq!(store.find_all().unwrap().len(), 1);
    }
}

#[test]
fn delete_confirmed_removes_record() {
    let store = seeded_store(vec![inception()]);
    let mut console = ScriptedConsole::new(&["Inception", "Y"]);
    delete_movie(&store, &mut console).unwrap();
    assert!(console.saw("Movie deleted successfully."));
    assert!(store.find_all().unwrap().is_empty());

    let store = seeded_store(vec![inception()]);
    let mut console = ScriptedConsole::new(&["Inception", "y"]);
    delete_movie(&store, &mut console).unwrap();
    assert!(store.find_all().unwrap().is_empty());
}

/// Store que simula la carrera: el registro desaparece entre la búsqueda y
/// el borrado, de modo que `delete_by_title` elimina 0 filas.
struct VanishingStore {
    inner: InMemoryMovieStore,
}

impl MovieStore for VanishingStore {
    fn find_all(&self) -> Result<Vec<MovieRecord>, CatalogError> {
        self.inner.find_all()
    }
    fn find_by_title(&self, title: &str) -> Result<Option<MovieRecord>, CatalogError> {
        self.inner.find_by_title(title)
    }
    fn insert(&self, record: MovieRecord) -> Result<Uuid, CatalogError> {
        self.inner.insert(record)
    }
    fn save(&self, record: &MovieRecord) -> Result<(), CatalogError> {
        self.inner.save(record)
    }
    fn delete_by_title(&self, _title: &str) -> Result<usize, CatalogError> {
        Ok(0)
    }
}

#[test]
fn delete_zero_rows_is_operational_error_not_not_found() {
    let store = VanishingStore { inner: seeded_store(vec![inception()]) };
    let mut console = ScriptedConsole::new(&["Inception", "Y"]);
    delete_movie(&store, &mut console).unwrap();
    assert!(console.saw("Error occurred while deleting the movie."));
    assert!(!console.saw("Movie not found"));
}

#[test]
fn list_renders_all_fields_and_dashes_for_unset() {
    let store = seeded_store(vec![inception(),
                                  MovieRecord::new("Solo", None, None, vec![], vec![], vec![]).unwrap()]);
    let mut console = ScriptedConsole::new(&[]);
    list_movies(&store, &mut console).unwrap();
    assert!(console.saw("Inception"));
    assert!(console.saw("Action, Fantasy, Adventure"));
    assert!(console.saw("8.8"));
    // unset director/year render as a dash
    let dashes = console.transcript().iter().filter(|l| l.contains(" -")).count();
    assert!(dashes >= 2);
}

#[test]
fn list_on_empty_store_is_not_an_error() {
    let store = InMemoryMovieStore::new();
    let mut console = ScriptedConsole::new(&[]);
    list_movies(&store, &mut console).unwrap();
    assert!(console.saw("All movies:"));
}

#[test]
fn relisting_is_idempotent() {
    // two lists with no mutation in between render identically
    let store = seeded_store(vec![inception(),
                                  MovieRecord::new("Solo", None, None, vec![], vec![], vec![]).unwrap()]);
    let mut first = ScriptedConsole::new(&[]);
    list_movies(&store, &mut first).unwrap();
    let mut second = ScriptedConsole::new(&[]);
    list_movies(&store, &mut second).unwrap();
    assert_eq!(first.transcript(), second.transcript());
}
