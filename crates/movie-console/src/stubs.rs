// Archivo: stubs.rs
// Consola con guion para tests: responde cada `prompt` con la siguiente
// entrada programada y registra todo lo mostrado en un transcript.
use crate::Console;
use movie_domain::CatalogError;
use std::collections::VecDeque;

pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(inputs: &[&str]) -> Self {
        Self { inputs: inputs.iter().map(|s| s.to_string()).collect(), transcript: Vec::new() }
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Busca `needle` como subcadena en el transcript (los códigos de color
    /// envuelven el texto, así que la búsqueda funciona con o sin ellos).
    pub fn saw(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }
}

impl Console for ScriptedConsole {
    fn prompt(&mut self, message: &str) -> Result<String, CatalogError> {
        self.transcript.push(message.to_string());
        self.inputs
            .pop_front()
            .ok_or_else(|| CatalogError::ConsoleError("scripted input exhausted".to_string()))
    }

    fn say(&mut self, message: &str) {
        self.transcript.push(message.to_string());
    }
}
