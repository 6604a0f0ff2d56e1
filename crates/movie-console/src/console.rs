// Archivo: console.rs
// Propósito: frontera de E/S con el operador. `Console` abstrae el par
// "mostrar prompt / leer una línea" para poder sustituirlo por un stub en
// tests; `StdConsole` es la implementación real sobre stdin/stdout.
use movie_domain::CatalogError;
use std::io::{self, Write};

pub trait Console {
    /// Muestra `message` sin salto de línea y bloquea hasta leer una línea.
    /// Devuelve la línea sin el terminador pero sin recortar su contenido;
    /// el recorte, donde aplica, es responsabilidad de la coerción.
    fn prompt(&mut self, message: &str) -> Result<String, CatalogError>;

    /// Escribe una línea completa de salida.
    fn say(&mut self, message: &str);
}

pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn prompt(&mut self, message: &str) -> Result<String, CatalogError> {
        print!("{}", message);
        io::stdout().flush()?;
        let mut line = String::new();
        let read = io::stdin().read_line(&mut line)?;
        if read == 0 {
            // EOF: sin operador no hay más entradas, se propaga como fatal
            // en lugar de dejar el bucle de menú girando con líneas vacías.
            return Err(CatalogError::ConsoleError("stdin closed".to_string()));
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    fn say(&mut self, message: &str) {
        println!("{}", message);
    }
}
