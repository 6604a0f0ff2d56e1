// fields.rs
// Coerción de campos: convierte una línea de texto del operador en el valor
// tipado del campo, bajo dos políticas distintas:
//  - alta (create): texto vacío => valor por defecto del tipo,
//  - edición (update): texto vacío => se conserva el valor anterior.
use crate::CatalogError;

/// Política de alta para escalares de texto: vacío => sin valor.
pub fn parse_optional_text(raw: &str) -> Option<String> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    None
  } else {
    Some(trimmed.to_string())
  }
}

/// Política de alta para el año: vacío => sin valor, no numérico => error
/// de validación recuperable (nunca se almacena un centinela no numérico).
pub fn parse_year(raw: &str) -> Result<Option<i32>, CatalogError> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return Ok(None);
  }
  trimmed.parse::<i32>()
         .map(Some)
         .map_err(|_| CatalogError::ValidationError(format!("'{}' is not a valid year", trimmed)))
}

/// Lista de texto separada por comas; los tokens se recortan y los vacíos
/// se descartan. Vacío => lista vacía.
pub fn parse_text_list(raw: &str) -> Vec<String> {
  raw.split(',').map(str::trim).filter(|t| !t.is_empty()).map(str::to_string).collect()
}

/// Lista decimal separada por comas; cualquier token no numérico produce un
/// error de validación recuperable.
pub fn parse_rating_list(raw: &str) -> Result<Vec<f64>, CatalogError> {
  let mut out = Vec::new();
  for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
    let value = token.parse::<f64>()
                     .map_err(|_| CatalogError::ValidationError(format!("'{}' is not a valid number", token)))?;
    out.push(value);
  }
  Ok(out)
}

/// Política de edición ("dejar en blanco para conservar"): entrada recortada
/// si no queda vacía, si no el valor anterior sin cambios. Sólo la cadena
/// vacía tras recortar cuenta como "vacío".
pub fn resolve_or_keep_previous(raw: &str, previous: &str) -> String {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    previous.to_string()
  } else {
    trimmed.to_string()
  }
}

/// Representación en texto de una lista para mostrarla entre corchetes y
/// re-coercionarla bajo la política de edición.
pub fn join_list<T: std::fmt::Display>(items: &[T]) -> String {
  items.iter().map(|i| i.to_string()).collect::<Vec<_>>().join(", ")
}
